pub mod agent;
pub mod locate;
pub mod path;
pub mod section;
pub mod team;

use std::collections::HashSet;

use crate::model::ResourceReference;

pub use agent::{build_core_agent, build_pack_agent, BuildOptions};
pub use locate::{locate, Resolved};
pub use path::logical_path;
pub use section::Section;
pub use team::{build_core_team, build_pack_team};

/// Fixed instructional header emitted at the top of every bundle. Static
/// text, deliberately outside the START/END marker scheme.
pub const PREAMBLE: &str = "\
# Web Agent Bundle Instructions

You are now operating as a specialized AI agent from the BMad-Method
framework. This is a bundled web-compatible version containing all the
resources your role needs. You have no filesystem access; everything you
need is inside this single document.

## Resource Navigation

Resources are marked with matched tag pairs:

- `==================== START: .bmad-core/folder/filename.md ====================`
- `==================== END: .bmad-core/folder/filename.md ====================`

When your instructions reference a resource path such as
`.bmad-core/tasks/create-doc.md`, locate the section between the matching
START and END tags and treat its contents as that file.

## Important

1. Follow the activation instructions in your agent configuration block.
2. Never ask the user for files that are already bundled below.
3. Resource paths are identifiers, not real files; do not attempt to read
   them from disk.

---
";

/// An ordered collection of sections with per-bundle exactly-once
/// inclusion. The dedup set is keyed by `resourceType#resourceName`; the
/// first writer wins and later attempts are silently dropped.
#[derive(Debug, Default)]
pub struct Bundle {
    sections: Vec<Section>,
    included: HashSet<ResourceReference>,
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, reference: &ResourceReference) -> bool {
        self.included.contains(reference)
    }

    /// Append a section under the given dedup key. Returns false (and
    /// drops the section) when the key was already included.
    pub fn push(&mut self, reference: ResourceReference, section: Section) -> bool {
        if !self.included.insert(reference) {
            return false;
        }
        self.sections.push(section);
        true
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Serialize the whole bundle: preamble, then each section in insertion
    /// order, blank-line separated.
    pub fn render(&self) -> String {
        let mut out = String::from(PREAMBLE);
        for section in &self.sections {
            out.push('\n');
            out.push_str(&section.render());
        }
        out
    }
}
