use crate::dependency_analysis::domain::ClassName;
use crate::dependency_analysis::graph::DEFAULT_MAX_DEPTH;
use crate::shared::error::AnalyzerError;
use crate::shared::Result;

/// Largest accepted cycle search depth; the search grows exponentially with it
pub const MAX_CYCLE_SEARCH_DEPTH: usize = 16;

/// AnalysisRequest - Internal request DTO for the dependency analysis use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Root configuration class whose import layers are reported
    pub configuration_root: Option<ClassName>,
    /// Maximum number of steps searched for circular dependencies
    pub max_depth: usize,
    /// Patterns for excluding beans from the analysis
    pub exclude_patterns: Vec<String>,
}

impl AnalysisRequest {
    pub fn builder() -> AnalysisRequestBuilder {
        AnalysisRequestBuilder::default()
    }
}

impl Default for AnalysisRequest {
    fn default() -> Self {
        Self {
            configuration_root: None,
            max_depth: DEFAULT_MAX_DEPTH,
            exclude_patterns: Vec::new(),
        }
    }
}

/// Builder for [`AnalysisRequest`] that validates on [`AnalysisRequestBuilder::build`]
#[derive(Debug, Default)]
pub struct AnalysisRequestBuilder {
    configuration_root: Option<String>,
    max_depth: Option<usize>,
    exclude_patterns: Vec<String>,
}

impl AnalysisRequestBuilder {
    pub fn configuration_root(mut self, root: impl Into<String>) -> Self {
        self.configuration_root = Some(root.into());
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    /// # Errors
    /// Returns a validation error for an invalid root class name or a
    /// search depth above [`MAX_CYCLE_SEARCH_DEPTH`]
    pub fn build(self) -> Result<AnalysisRequest> {
        let max_depth = self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH);
        if max_depth > MAX_CYCLE_SEARCH_DEPTH {
            return Err(AnalyzerError::Validation {
                message: format!(
                    "max depth {} exceeds the limit of {}",
                    max_depth, MAX_CYCLE_SEARCH_DEPTH
                ),
            }
            .into());
        }

        let configuration_root = self.configuration_root.map(ClassName::new).transpose()?;

        Ok(AnalysisRequest {
            configuration_root,
            max_depth,
            exclude_patterns: self.exclude_patterns,
        })
    }
}
