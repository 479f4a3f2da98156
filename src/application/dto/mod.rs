/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI, the use case and the formatters,
/// keeping the analysis core free of presentation concerns.
mod analysis_request;
mod analysis_response;
mod output_format;

pub use analysis_request::{AnalysisRequest, AnalysisRequestBuilder, MAX_CYCLE_SEARCH_DEPTH};
pub use analysis_response::AnalysisResponse;
pub use output_format::OutputFormat;
