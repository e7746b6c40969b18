use std::fmt::Display;

/// Output formats a decoded document can be written as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportType {
    /// Version and root kind only
    Summary,
    /// Indented tree
    Txt,
    /// JSON document
    Json,
}

impl ExportType {
    /// Given user's input, return a variant if the input matches one
    pub fn from_cli(export_type: &str) -> Option<Self> {
        match export_type.to_lowercase().as_str() {
            "summary" => Some(Self::Summary),
            "txt" => Some(Self::Txt),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl Display for ExportType {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportType::Summary => write!(fmt, "summary"),
            ExportType::Txt => write!(fmt, "txt"),
            ExportType::Json => write!(fmt, "json"),
        }
    }
}
