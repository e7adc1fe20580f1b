/// Output format enumeration for identified documents
///
/// Shared by the CLI (inbound adapter) and formatters (outbound adapters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// OpenVEX JSON with `@id` filled in (default)
    #[default]
    Json,
    /// The canonical representation that the id is hashed from
    Canonical,
    /// Only the document id
    Id,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "canonical" => Ok(OutputFormat::Canonical),
            "id" => Ok(OutputFormat::Id),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json', 'canonical' or 'id'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Canonical => write!(f, "canonical"),
            OutputFormat::Id => write!(f, "id"),
        }
    }
}
