use crate::dependency_analysis::domain::{
    BeanName, CircularDependencyReport, ClassName, ReportMetadata,
};
use crate::dependency_analysis::graph::{DependencyGraph, FlatDependencyMap, Layers};

/// AnalysisResponse - Internal response DTO from the dependency analysis use case
///
/// Holds every computed view of the container so formatters can pick what
/// they render.
#[derive(Debug, Clone)]
pub struct AnalysisResponse {
    pub metadata: ReportMetadata,
    /// Bean to the beans injected into it
    pub bean_dependencies: FlatDependencyMap<BeanName>,
    /// Bean to the beans it is injected into
    pub reverse_dependencies: FlatDependencyMap<BeanName>,
    /// Import tree below the requested configuration root, if any
    pub configuration_graph: Option<DependencyGraph<ClassName>>,
    pub configuration_layers: Option<Layers<ClassName>>,
    /// Forest rooted at the beans without dependencies, edges pointing at dependents
    pub bean_graph: DependencyGraph<BeanName>,
    pub bean_layers: Layers<BeanName>,
    pub circular_dependencies: CircularDependencyReport,
    /// Search depth the cycle report was computed with
    pub max_depth: usize,
}

impl AnalysisResponse {
    /// Whether any bean takes part in a circular dependency
    pub fn has_cycles(&self) -> bool {
        self.circular_dependencies.has_cycles()
    }
}
