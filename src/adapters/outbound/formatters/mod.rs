/// Formatter adapters for the different report formats
mod cypher_formatter;
mod json_formatter;
mod text_formatter;

pub use cypher_formatter::CypherFormatter;
pub use json_formatter::JsonFormatter;
pub use text_formatter::TextFormatter;
