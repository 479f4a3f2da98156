use chrono::Utc;

/// Name reported in generated output
pub const TOOL_NAME: &str = "bean-depend";

/// ReportMetadata value object describing when and by what a report was produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
}

impl ReportMetadata {
    pub fn new(timestamp: String, tool_name: String, tool_version: String) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
        }
    }

    /// Generates metadata stamped with the current UTC time (RFC 3339)
    pub fn generate(tool_name: &str, tool_version: &str) -> Self {
        Self::new(
            Utc::now().to_rfc3339(),
            tool_name.to_string(),
            tool_version.to_string(),
        )
    }

    /// Generates metadata for this tool using the compile-time version
    pub fn generate_default() -> Self {
        Self::generate(TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_metadata_new() {
        let metadata = ReportMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "bean-depend".to_string(),
            "0.1.0".to_string(),
        );

        assert_eq!(metadata.timestamp(), "2024-01-01T00:00:00Z");
        assert_eq!(metadata.tool_name(), "bean-depend");
        assert_eq!(metadata.tool_version(), "0.1.0");
    }

    #[test]
    fn test_generate_default() {
        let metadata = ReportMetadata::generate_default();

        assert_eq!(metadata.tool_name(), TOOL_NAME);
        assert_eq!(metadata.tool_version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_generate_timestamp_format() {
        let metadata = ReportMetadata::generate("test-tool", "1.0.0");
        let timestamp = metadata.timestamp();

        // RFC3339 format should contain 'T' and timezone info
        assert!(timestamp.contains('T'));
        assert!(timestamp.contains('+') || timestamp.contains('Z'));
    }
}
