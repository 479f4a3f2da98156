use std::collections::{BTreeMap, BTreeSet};

/// Node to the set of nodes it directly depends on, sorted by node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatDependencyMap<T> {
    entries: BTreeMap<T, BTreeSet<T>>,
}

impl<T> Default for FlatDependencyMap<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<T: Ord + Clone> FlatDependencyMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `dependencies` to `node`, creating the entry if needed.
    /// Duplicate dependencies collapse.
    pub fn insert<I>(&mut self, node: T, dependencies: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.entries.entry(node).or_default().extend(dependencies);
    }

    pub fn dependencies_of(&self, node: &T) -> Option<&BTreeSet<T>> {
        self.entries.get(node)
    }

    pub fn contains(&self, node: &T) -> bool {
        self.entries.contains_key(node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, &BTreeSet<T>)> + '_ {
        self.entries.iter()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.keys()
    }

    /// Nodes that depend on nothing
    pub fn independent_nodes(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries
            .iter()
            .filter(|(_, deps)| deps.is_empty())
            .map(|(node, _)| node)
    }

    /// Number of nodes with an entry
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of (node, dependency) pairs
    pub fn edge_count(&self) -> usize {
        self.entries.values().map(BTreeSet::len).sum()
    }

    /// Inverts the relation: every dependency maps to the nodes that depend on it.
    ///
    /// Only nodes that are depended upon get an entry.
    pub fn reverse(&self) -> Self {
        let mut reverse = Self::new();
        for (node, dependencies) in &self.entries {
            for dependency in dependencies {
                reverse.insert(dependency.clone(), [node.clone()]);
            }
        }
        reverse
    }

    /// Drops every node rejected by `keep`, both as an entry and as a dependency
    pub fn retain<F>(mut self, mut keep: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.entries.retain(|node, _| keep(node));
        for dependencies in self.entries.values_mut() {
            dependencies.retain(|dependency| keep(dependency));
        }
        self
    }
}

impl<T: Ord + Clone, I: IntoIterator<Item = T>> FromIterator<(T, I)> for FlatDependencyMap<T> {
    fn from_iter<It: IntoIterator<Item = (T, I)>>(iter: It) -> Self {
        let mut map = Self::new();
        for (node, dependencies) in iter {
            map.insert(node, dependencies);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FlatDependencyMap<&'static str> {
        [
            ("bean1", vec![]),
            ("bean2", vec!["bean1"]),
            ("bean4", vec!["bean1", "bean3"]),
            ("bean5", vec!["bean4"]),
            ("bean3", vec![]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_insert_merges_and_deduplicates() {
        let mut map = FlatDependencyMap::new();
        map.insert("a", ["b", "c"]);
        map.insert("a", ["c", "d"]);

        let deps: Vec<_> = map.dependencies_of(&"a").unwrap().iter().copied().collect();
        assert_eq!(deps, vec!["b", "c", "d"]);
        assert_eq!(map.edge_count(), 3);
    }

    #[test]
    fn test_nodes_are_sorted() {
        let map = sample();
        let nodes: Vec<_> = map.nodes().copied().collect();
        assert_eq!(nodes, vec!["bean1", "bean2", "bean3", "bean4", "bean5"]);
    }

    #[test]
    fn test_independent_nodes() {
        let map = sample();
        let roots: Vec<_> = map.independent_nodes().copied().collect();
        assert_eq!(roots, vec!["bean1", "bean3"]);
    }

    #[test]
    fn test_reverse_is_exact_inverse() {
        let forward = sample();
        let reverse = forward.reverse();

        for (bean, deps) in forward.iter() {
            for dep in deps {
                assert!(reverse.dependencies_of(dep).unwrap().contains(bean));
            }
        }
        for (dep, dependents) in reverse.iter() {
            for bean in dependents {
                assert!(forward.dependencies_of(bean).unwrap().contains(dep));
            }
        }
        assert_eq!(forward.edge_count(), reverse.edge_count());
    }

    #[test]
    fn test_reverse_only_lists_depended_upon_nodes() {
        let reverse = sample().reverse();
        assert!(reverse.contains(&"bean1"));
        assert!(!reverse.contains(&"bean5"));
        assert!(!reverse.contains(&"bean2"));
    }

    #[test]
    fn test_retain_removes_keys_and_values() {
        let filtered = sample().retain(|bean| *bean != "bean1");

        assert!(!filtered.contains(&"bean1"));
        assert!(filtered.dependencies_of(&"bean2").unwrap().is_empty());
        let deps: Vec<_> = filtered.dependencies_of(&"bean4").unwrap().iter().copied().collect();
        assert_eq!(deps, vec!["bean3"]);
    }

    #[test]
    fn test_empty_map() {
        let map: FlatDependencyMap<String> = FlatDependencyMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert!(map.reverse().is_empty());
    }
}
