use super::bean::BeanName;
use crate::dependency_analysis::graph::CycleDescription;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Cycle search result for a single bean
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeanCycles {
    bean: BeanName,
    injected_beans: Vec<BeanName>,
    cycles: Vec<CycleDescription<BeanName>>,
}

impl BeanCycles {
    pub fn new(
        bean: BeanName,
        injected_beans: Vec<BeanName>,
        cycles: BTreeSet<CycleDescription<BeanName>>,
    ) -> Self {
        Self {
            bean,
            injected_beans,
            cycles: cycles.into_iter().collect(),
        }
    }

    pub fn bean(&self) -> &BeanName {
        &self.bean
    }

    /// Direct dependencies of the bean
    pub fn injected_beans(&self) -> &[BeanName] {
        &self.injected_beans
    }

    pub fn injected_bean_count(&self) -> usize {
        self.injected_beans.len()
    }

    pub fn cycles(&self) -> &[CycleDescription<BeanName>] {
        &self.cycles
    }

    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }
}

/// Circular dependency statistic over every analyzed bean
///
/// Entries are ordered by cycle count (descending), then by bean name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CircularDependencyReport {
    entries: Vec<BeanCycles>,
}

impl CircularDependencyReport {
    pub fn new(mut entries: Vec<BeanCycles>) -> Self {
        entries.sort_by(compare_entries);
        Self { entries }
    }

    pub fn entries(&self) -> &[BeanCycles] {
        &self.entries
    }

    /// Sum of per-bean cycle counts; a cycle through n beans counts n times
    pub fn total_cycle_count(&self) -> usize {
        self.entries.iter().map(BeanCycles::cycle_count).sum()
    }

    pub fn beans_with_cycles(&self) -> impl Iterator<Item = &BeanCycles> + '_ {
        self.entries.iter().filter(|entry| entry.has_cycles())
    }

    pub fn has_cycles(&self) -> bool {
        self.entries.iter().any(BeanCycles::has_cycles)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn compare_entries(a: &BeanCycles, b: &BeanCycles) -> Ordering {
    b.cycle_count()
        .cmp(&a.cycle_count())
        .then_with(|| a.bean.cmp(&b.bean))
}
