const MARKER_RULE: &str = "====================";

/// One delimited unit of bundle content.
#[derive(Debug, Clone)]
pub struct Section {
    pub logical_path: String,
    pub body: String,
}

impl Section {
    pub fn new(logical_path: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            logical_path: logical_path.into(),
            body: body.into(),
        }
    }

    /// Serialize as a START/END-delimited block. The body goes through
    /// verbatim; only a trailing newline is guaranteed so the END marker
    /// always sits on its own line.
    pub fn render(&self) -> String {
        let newline = if self.body.ends_with('\n') { "" } else { "\n" };
        format!(
            "{rule} START: {path} {rule}\n{body}{newline}{rule} END: {path} {rule}\n",
            rule = MARKER_RULE,
            path = self.logical_path,
            body = self.body,
        )
    }
}
