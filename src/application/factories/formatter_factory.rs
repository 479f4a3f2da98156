use crate::adapters::outbound::formatters::{CypherFormatter, JsonFormatter, TextFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Selects the formatter adapter matching an [`OutputFormat`].
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use bean_depend::application::dto::OutputFormat;
    /// use bean_depend::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Cypher => Box::new(CypherFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use bean_depend::application::dto::OutputFormat;
    /// use bean_depend::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Cypher);
    /// assert_eq!(message, "📝 Generating Cypher import script...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Text => "📝 Generating text report...",
            OutputFormat::Json => "📝 Generating circular dependency statistic (JSON)...",
            OutputFormat::Cypher => "📝 Generating Cypher import script...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_messages_are_distinct() {
        let messages = [
            FormatterFactory::progress_message(OutputFormat::Text),
            FormatterFactory::progress_message(OutputFormat::Json),
            FormatterFactory::progress_message(OutputFormat::Cypher),
        ];
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
        assert!(messages.iter().all(|m| m.starts_with("📝")));
    }

    #[test]
    fn test_create_every_formatter() {
        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Cypher] {
            let formatter = FormatterFactory::create(format);
            assert!(std::mem::size_of_val(&formatter) > 0);
        }
    }
}
