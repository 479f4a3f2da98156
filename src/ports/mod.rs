/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) are the only ports this tool needs: the
/// analysis core is driven directly by the CLI.
pub mod outbound;
