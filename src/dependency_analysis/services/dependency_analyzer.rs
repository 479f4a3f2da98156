use crate::dependency_analysis::domain::{
    BeanCycles, BeanName, CircularDependencyReport, ClassName,
};
use crate::dependency_analysis::graph::{
    find_cycles, CycleDescription, DependencyGraph, FlatDependencyMap, Layers,
};
use crate::ports::outbound::BeanContainer;
use crate::shared::error::AnalyzerError;
use crate::shared::Result;
use std::collections::BTreeSet;

/// DependencyAnalyzer service computing coupling metrics of a bean container
///
/// Pure analysis over the [`BeanContainer`] port and the maps derived from
/// it; no I/O of its own.
pub struct DependencyAnalyzer;

impl DependencyAnalyzer {
    /// Builds the forward dependency map of every non-abstract bean
    ///
    /// Long dependency lists point at beans with low cohesion and high coupling.
    ///
    /// # Errors
    /// Propagates lookup failures from the container
    pub fn bean_dependencies<C>(container: &C) -> Result<FlatDependencyMap<BeanName>>
    where
        C: BeanContainer + ?Sized,
    {
        let mut dependencies = FlatDependencyMap::new();
        for bean in container.bean_names() {
            if container.is_abstract(&bean) {
                continue;
            }
            let direct = container.dependencies_for_bean(&bean)?;
            dependencies.insert(bean, direct);
        }
        Ok(dependencies)
    }

    /// Inverts a forward map: each bean to the beans that depend on it
    ///
    /// Beans nobody depends on have no entry.
    pub fn reverse_dependencies(
        forward: &FlatDependencyMap<BeanName>,
    ) -> FlatDependencyMap<BeanName> {
        forward.reverse()
    }

    /// Builds the import tree of configuration classes below `root`
    ///
    /// # Errors
    /// - `InvalidArgument` if `root` is not a configuration class
    /// - `LookupFailure` if an imported class is unknown to the container
    pub fn configuration_graph<C>(container: &C, root: &ClassName) -> Result<DependencyGraph<ClassName>>
    where
        C: BeanContainer + ?Sized,
    {
        if !container.is_configuration_class(root) {
            return Err(AnalyzerError::InvalidArgument {
                reason: format!("'{}' is not a configuration class", root),
            }
            .into());
        }

        DependencyGraph::try_build_tree(root.clone(), |class| {
            container.configuration_imports(class)
        })
    }

    /// Groups configuration classes by import depth below `root`
    ///
    /// A class can only import classes from deeper layers; the more layers,
    /// the more complex the configuration.
    pub fn configuration_layers<C>(container: &C, root: &ClassName) -> Result<Layers<ClassName>>
    where
        C: BeanContainer + ?Sized,
    {
        Ok(Self::configuration_graph(container, root)?.layers())
    }

    /// Builds the bean graph: one tree per bean without dependencies, whose
    /// children are the beans depending on it
    pub fn bean_graph(forward: &FlatDependencyMap<BeanName>) -> DependencyGraph<BeanName> {
        let reverse = forward.reverse();
        DependencyGraph::build_forest(forward.independent_nodes().cloned(), |bean| {
            reverse
                .dependencies_of(bean)
                .map(|dependents| dependents.iter().cloned().collect())
                .unwrap_or_else(Vec::new)
        })
    }

    /// Searches dependency chains of `bean` that lead back to it
    pub fn cycles_for_bean(
        forward: &FlatDependencyMap<BeanName>,
        bean: &BeanName,
        max_depth: usize,
    ) -> BTreeSet<CycleDescription<BeanName>> {
        find_cycles(forward, bean, max_depth)
    }

    /// Runs the cycle search for every bean of the forward map
    ///
    /// `on_bean` is called before each search with the 1-based position,
    /// the total and the bean, so callers can report progress.
    pub fn circular_dependency_report<F>(
        forward: &FlatDependencyMap<BeanName>,
        max_depth: usize,
        mut on_bean: F,
    ) -> CircularDependencyReport
    where
        F: FnMut(usize, usize, &BeanName),
    {
        let total = forward.len();
        let entries = forward
            .iter()
            .enumerate()
            .map(|(i, (bean, dependencies))| {
                on_bean(i + 1, total, bean);
                BeanCycles::new(
                    bean.clone(),
                    dependencies.iter().cloned().collect(),
                    Self::cycles_for_bean(forward, bean, max_depth),
                )
            })
            .collect();
        CircularDependencyReport::new(entries)
    }
}
