use std::str::FromStr;

/// The fixed set of resource-type directories a namespace tier may contain.
///
/// Dependency maps in agent configuration blocks use these names as keys;
/// the same names are the subdirectory names on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceType {
    Agents,
    AgentTeams,
    Tasks,
    Templates,
    Checklists,
    Workflows,
    Data,
    Utils,
}

/// Categories scanned for pack-local overrides when building a team bundle.
/// Kept as an explicit list so the scanned set is a visible contract rather
/// than whatever happens to exist on disk.
pub const OVERRIDE_CATEGORIES: [ResourceType; 5] = [
    ResourceType::Tasks,
    ResourceType::Templates,
    ResourceType::Checklists,
    ResourceType::Workflows,
    ResourceType::Data,
];

impl ResourceType {
    /// Subdirectory name within a namespace tier.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Agents => "agents",
            Self::AgentTeams => "agent-teams",
            Self::Tasks => "tasks",
            Self::Templates => "templates",
            Self::Checklists => "checklists",
            Self::Workflows => "workflows",
            Self::Data => "data",
            Self::Utils => "utils",
        }
    }

    /// On-disk extension implied by convention for this resource type.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::AgentTeams | Self::Templates | Self::Workflows => "yaml",
            _ => "md",
        }
    }

    /// File name for a bare resource name of this type.
    pub fn file_name(&self, name: &str) -> String {
        format!("{name}.{}", self.extension())
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

impl FromStr for ResourceType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "agents" => Ok(Self::Agents),
            "agent-teams" => Ok(Self::AgentTeams),
            "tasks" => Ok(Self::Tasks),
            "templates" => Ok(Self::Templates),
            "checklists" => Ok(Self::Checklists),
            "workflows" => Ok(Self::Workflows),
            "data" => Ok(Self::Data),
            "utils" => Ok(Self::Utils),
            _ => Err(()),
        }
    }
}

/// One declared dependency: a resource type plus a bare resource name.
///
/// Doubles as the per-bundle deduplication key, so two agents declaring the
/// same dependency collapse to a single section.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceReference {
    pub resource_type: ResourceType,
    pub name: String,
}

impl ResourceReference {
    pub fn new(resource_type: ResourceType, name: impl Into<String>) -> Self {
        Self {
            resource_type,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for ResourceReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.resource_type, self.name)
    }
}
