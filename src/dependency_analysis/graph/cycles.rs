//! Bounded-depth circular dependency search over a [`FlatDependencyMap`].
//!
//! This is a heuristic for human review, not an exhaustive enumeration:
//! a cycle whose closing edge lies more than `max_depth` steps away from the
//! target is never reported.

use super::flat_map::FlatDependencyMap;
use std::collections::BTreeSet;
use std::fmt;

/// Search depth used when the caller does not configure one
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// A dependency path that starts and ends at the same node
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CycleDescription<T> {
    path: Vec<T>,
}

impl<T> CycleDescription<T> {
    /// Nodes in visitation order; first and last are the origin
    pub fn path(&self) -> &[T] {
        &self.path
    }

    pub fn origin(&self) -> Option<&T> {
        self.path.first()
    }
}

impl<T: fmt::Display> fmt::Display for CycleDescription<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}

/// Finds dependency chains starting at `target` that lead back to it.
///
/// Walks the target's direct dependencies and follows their dependencies for
/// at most `max_depth` steps. A chain is reported when the frontier node
/// depends on the target and the target is not already part of the chain.
/// Paths with the same rendering collapse into the first one found, since
/// node names may themselves contain `-`.
///
/// The direct dependencies are always checked, so two-node cycles are found
/// even when `max_depth` is `0`.
///
/// # Arguments
/// * `all_dependencies` - The complete flat dependency map
/// * `target` - Node whose cycles are searched
/// * `max_depth` - Maximum number of steps
pub fn find_cycles<T: Ord + Clone + fmt::Display>(
    all_dependencies: &FlatDependencyMap<T>,
    target: &T,
    max_depth: usize,
) -> BTreeSet<CycleDescription<T>> {
    let mut found = BTreeSet::new();

    if let Some(direct) = all_dependencies.dependencies_of(target) {
        let mut search = CycleSearch {
            all_dependencies,
            target,
            max_depth,
            found: &mut found,
            rendered: BTreeSet::new(),
        };
        search.walk(direct, &[], 0);
    }
    found
}

struct CycleSearch<'a, 'f, T> {
    all_dependencies: &'a FlatDependencyMap<T>,
    target: &'a T,
    max_depth: usize,
    found: &'f mut BTreeSet<CycleDescription<T>>,
    rendered: BTreeSet<String>,
}

impl<'a, T: Ord + Clone + fmt::Display> CycleSearch<'a, '_, T> {
    fn walk(&mut self, dependencies: &'a BTreeSet<T>, chain: &[T], depth: usize) {
        let step = depth + 1;

        for dependency in dependencies {
            let next = match self.all_dependencies.dependencies_of(dependency) {
                Some(next) if !next.is_empty() => next,
                _ => continue,
            };

            if next.contains(self.target) && !chain.contains(self.target) {
                let mut path = Vec::with_capacity(chain.len() + 3);
                path.push(self.target.clone());
                path.extend(chain.iter().cloned());
                path.push(dependency.clone());
                path.push(self.target.clone());
                let cycle = CycleDescription { path };
                if self.rendered.insert(cycle.to_string()) {
                    self.found.insert(cycle);
                }
            }

            if step < self.max_depth {
                let mut next_chain = chain.to_vec();
                if !next_chain.contains(dependency) {
                    next_chain.push(dependency.clone());
                }
                self.walk(next, &next_chain, step);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(edges: &[(&'static str, &[&'static str])]) -> FlatDependencyMap<&'static str> {
        edges.iter().map(|(n, deps)| (*n, deps.to_vec())).collect()
    }

    fn rendered(cycles: &BTreeSet<CycleDescription<&str>>) -> Vec<String> {
        cycles.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_three_hop_cycle_found_at_default_depth() {
        let deps = map(&[("X", &["Y"]), ("Y", &["Z"]), ("Z", &["X"])]);
        let cycles = find_cycles(&deps, &"X", DEFAULT_MAX_DEPTH);

        assert_eq!(rendered(&cycles), vec!["X-Y-Z-X"]);
        assert_eq!(cycles.iter().next().unwrap().path().len(), 4);
    }

    #[test]
    fn test_three_hop_cycle_invisible_at_depth_one() {
        let deps = map(&[("X", &["Y"]), ("Y", &["Z"]), ("Z", &["X"])]);
        assert!(find_cycles(&deps, &"X", 1).is_empty());
    }

    #[test]
    fn test_two_hop_cycle_found_at_depth_one() {
        let deps = map(&[("A", &["B"]), ("B", &["A"])]);
        assert_eq!(rendered(&find_cycles(&deps, &"A", 1)), vec!["A-B-A"]);
    }

    #[test]
    fn test_zero_depth_still_finds_two_node_cycles() {
        let deps = map(&[("A", &["B"]), ("B", &["A"])]);
        assert_eq!(rendered(&find_cycles(&deps, &"A", 0)), vec!["A-B-A"]);
    }

    #[test]
    fn test_zero_depth_matches_depth_one() {
        let deps = map(&[
            ("A", &["B", "X"]),
            ("B", &["A"]),
            ("X", &["Y"]),
            ("Y", &["A"]),
        ]);
        assert_eq!(find_cycles(&deps, &"A", 0), find_cycles(&deps, &"A", 1));
        assert_eq!(rendered(&find_cycles(&deps, &"A", 2)), vec!["A-B-A", "A-X-Y-A"]);
    }

    #[test]
    fn test_identical_renderings_collapse() {
        // [a, b, c, a] and [a, b-c, a] both render as "a-b-c-a"
        let deps = map(&[
            ("a", &["b", "b-c"]),
            ("b", &["c"]),
            ("b-c", &["a"]),
            ("c", &["a"]),
        ]);
        let cycles = find_cycles(&deps, &"a", DEFAULT_MAX_DEPTH);

        assert_eq!(rendered(&cycles), vec!["a-b-c-a"]);
        assert_eq!(cycles.iter().next().unwrap().path(), &["a", "b", "c", "a"]);
    }

    #[test]
    fn test_acyclic_map_reports_nothing() {
        let deps = map(&[("A", &["B", "C"]), ("B", &["C"]), ("C", &[])]);
        assert!(find_cycles(&deps, &"A", DEFAULT_MAX_DEPTH).is_empty());
    }

    #[test]
    fn test_unknown_target_reports_nothing() {
        let deps = map(&[("A", &["B"])]);
        assert!(find_cycles(&deps, &"missing", DEFAULT_MAX_DEPTH).is_empty());
    }

    #[test]
    fn test_multiple_cycles_through_target() {
        let deps = map(&[
            ("bean", &["bean31", "other"]),
            ("bean31", &["bean32"]),
            ("bean32", &["bean"]),
            ("other", &["bean"]),
        ]);
        let cycles = find_cycles(&deps, &"bean", DEFAULT_MAX_DEPTH);

        assert_eq!(
            rendered(&cycles),
            vec!["bean-bean31-bean32-bean", "bean-other-bean"]
        );
    }

    #[test]
    fn test_cycle_not_involving_target_is_ignored() {
        let deps = map(&[("T", &["A"]), ("A", &["B"]), ("B", &["A"])]);
        assert!(find_cycles(&deps, &"T", DEFAULT_MAX_DEPTH).is_empty());
    }

    #[test]
    fn test_description_accessors() {
        let deps = map(&[("A", &["B"]), ("B", &["A"])]);
        let cycles = find_cycles(&deps, &"A", DEFAULT_MAX_DEPTH);
        let cycle = cycles.iter().next().unwrap();

        assert_eq!(cycle.origin(), Some(&"A"));
        assert_eq!(cycle.path(), &["A", "B", "A"]);
    }
}
