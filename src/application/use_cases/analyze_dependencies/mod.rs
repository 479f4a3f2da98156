use crate::application::dto::{AnalysisRequest, AnalysisResponse};
use crate::dependency_analysis::domain::{
    BeanName, CircularDependencyReport, ClassName, ReportMetadata,
};
use crate::dependency_analysis::graph::{DependencyGraph, FlatDependencyMap, Layers};
use crate::dependency_analysis::services::{BeanFilter, DependencyAnalyzer};
use crate::ports::outbound::{BeanContainer, ProgressReporter};
use crate::shared::Result;

type ConfigurationAnalysis = (Option<DependencyGraph<ClassName>>, Option<Layers<ClassName>>);

/// AnalyzeDependenciesUseCase - Core use case of the analyzer
///
/// Reads the container through the [`BeanContainer`] port, applies the
/// exclusion filters, then computes the dependency maps, the configuration
/// layers, the bean graph and the circular dependency report.
///
/// # Type Parameters
/// * `C` - BeanContainer implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeDependenciesUseCase<C, PR> {
    container: C,
    progress_reporter: PR,
}

impl<C, PR> AnalyzeDependenciesUseCase<C, PR>
where
    C: BeanContainer,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzeDependenciesUseCase with injected dependencies
    pub fn new(container: C, progress_reporter: PR) -> Self {
        Self {
            container,
            progress_reporter,
        }
    }

    /// Executes the dependency analysis
    ///
    /// # Errors
    /// Returns an error if:
    /// - An exclusion pattern is invalid
    /// - The configuration root is not a configuration class
    /// - A bean or import lookup fails
    pub fn execute(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        // Step 1: Collect forward dependencies
        let bean_dependencies = self.collect_bean_dependencies()?;

        // Step 2: Apply exclusion filters
        let bean_dependencies = self.apply_exclusion_filters(bean_dependencies, &request)?;
        let reverse_dependencies = DependencyAnalyzer::reverse_dependencies(&bean_dependencies);

        // Step 3: Configuration hierarchy, when a root was given
        let (configuration_graph, configuration_layers) =
            self.analyze_configuration_if_requested(&request)?;

        // Step 4: Bean graph and its layers
        let bean_graph = DependencyAnalyzer::bean_graph(&bean_dependencies);
        let bean_layers = bean_graph.layers();
        self.progress_reporter.report(&format!(
            "🧱 Bean graph spans {} layer(s)",
            bean_layers.layer_count()
        ));

        // Step 5: Circular dependencies
        let circular_dependencies =
            self.find_circular_dependencies(&bean_dependencies, request.max_depth);

        Ok(AnalysisResponse {
            metadata: ReportMetadata::generate_default(),
            bean_dependencies,
            reverse_dependencies,
            configuration_graph,
            configuration_layers,
            bean_graph,
            bean_layers,
            circular_dependencies,
            max_depth: request.max_depth,
        })
    }

    fn collect_bean_dependencies(&self) -> Result<FlatDependencyMap<BeanName>> {
        self.progress_reporter
            .report("📖 Collecting bean dependencies...");

        let dependencies = DependencyAnalyzer::bean_dependencies(&self.container)?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} bean(s) with {} injection point(s)",
            dependencies.len(),
            dependencies.edge_count()
        ));
        Ok(dependencies)
    }

    /// Removes excluded beans and warns about patterns that matched nothing
    ///
    /// # Errors
    /// Returns an error if a pattern is invalid or every bean was excluded
    fn apply_exclusion_filters(
        &self,
        dependencies: FlatDependencyMap<BeanName>,
        request: &AnalysisRequest,
    ) -> Result<FlatDependencyMap<BeanName>> {
        if request.exclude_patterns.is_empty() {
            return Ok(dependencies);
        }

        let filter = BeanFilter::new(request.exclude_patterns.clone())?;
        let original_count = dependencies.len();
        let filtered = filter.filter_dependency_map(dependencies);

        let excluded_count = original_count - filtered.len();
        if excluded_count > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} bean(s) based on filters",
                excluded_count
            ));
        }

        if filtered.is_empty() && original_count > 0 {
            anyhow::bail!(
                "All {} bean(s) were excluded by the provided filters. \
                 The report would be empty. Please adjust your exclusion patterns.",
                original_count
            );
        }

        for pattern in filter.get_unmatched_patterns() {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: Exclude pattern '{}' did not match any bean.",
                pattern
            ));
        }

        Ok(filtered)
    }

    fn analyze_configuration_if_requested(
        &self,
        request: &AnalysisRequest,
    ) -> Result<ConfigurationAnalysis> {
        let Some(root) = request.configuration_root.as_ref() else {
            return Ok((None, None));
        };

        self.progress_reporter.report(&format!(
            "🔍 Analyzing configuration imports from {}...",
            root
        ));

        let graph = DependencyAnalyzer::configuration_graph(&self.container, root)?;
        let layers = graph.layers();

        self.progress_reporter.report(&format!(
            "✅ {} configuration class(es) in {} layer(s)",
            graph.node_count(),
            layers.layer_count()
        ));
        Ok((Some(graph), Some(layers)))
    }

    fn find_circular_dependencies(
        &self,
        dependencies: &FlatDependencyMap<BeanName>,
        max_depth: usize,
    ) -> CircularDependencyReport {
        self.progress_reporter.report(&format!(
            "🔄 Searching circular dependencies (max depth {})...",
            max_depth
        ));

        let report = DependencyAnalyzer::circular_dependency_report(
            dependencies,
            max_depth,
            |current, total, bean| {
                self.progress_reporter
                    .report_progress(current, total, Some(bean.as_str()));
            },
        );

        let affected = report.beans_with_cycles().count();
        if affected > 0 {
            self.progress_reporter.report_warning(&format!(
                "⚠️  {} bean(s) take part in circular dependencies",
                affected
            ));
        } else {
            self.progress_reporter
                .report("✅ No circular dependencies found");
        }
        report
    }
}
