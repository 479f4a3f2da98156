/// Output format of the analysis report
///
/// Shared by the CLI (parsing `--format`), the config file and the
/// formatter factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable console report (default)
    #[default]
    Text,
    /// Circular dependency statistic as JSON
    Json,
    /// Cypher script for importing the graphs into a graph database
    Cypher,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "cypher" | "cql" => Ok(OutputFormat::Cypher),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text', 'json' or 'cypher'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Cypher => write!(f, "cypher"),
        }
    }
}
