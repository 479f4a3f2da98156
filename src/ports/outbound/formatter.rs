use crate::application::dto::AnalysisResponse;
use crate::shared::Result;

/// ReportFormatter port for formatting analysis results
///
/// This port abstracts the formatting logic for the different report
/// formats (console text, JSON statistic, Cypher script).
pub trait ReportFormatter {
    /// Formats the result of a dependency analysis
    ///
    /// # Arguments
    /// * `response` - The analysis response produced by the use case
    ///
    /// # Returns
    /// Formatted report content as a string
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, response: &AnalysisResponse) -> Result<String>;
}
