/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the analysis services and reaches the outside
/// world only through ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
