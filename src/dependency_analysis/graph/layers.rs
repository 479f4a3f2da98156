use super::tree::DependencyGraph;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::Hash;

/// Node to depth assignment, remembering first-insertion order
#[derive(Debug, Clone)]
pub struct LayerMap<T> {
    order: Vec<T>,
    depths: HashMap<T, usize>,
}

impl<T: Eq + Hash + Clone> LayerMap<T> {
    fn new() -> Self {
        Self {
            order: Vec::new(),
            depths: HashMap::new(),
        }
    }

    /// Records `depth` for `node` unless an equal or deeper one is known.
    /// Returns true when the stored depth changed.
    fn record(&mut self, node: &T, depth: usize) -> bool {
        if let Some(&current) = self.depths.get(node) {
            if current >= depth {
                return false;
            }
            self.depths.insert(node.clone(), depth);
            return true;
        }
        self.order.push(node.clone());
        self.depths.insert(node.clone(), depth);
        true
    }

    pub fn depth_of(&self, node: &T) -> Option<usize> {
        self.depths.get(node).copied()
    }

    /// Nodes with their depth, in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> + '_ {
        self.order
            .iter()
            .filter_map(move |node| self.depths.get(node).map(|&depth| (node, depth)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Groups nodes by depth, ascending
    pub fn into_layers(self) -> Layers<T> {
        let mut layers: BTreeMap<usize, Vec<T>> = BTreeMap::new();
        for node in self.order {
            if let Some(&depth) = self.depths.get(&node) {
                layers.entry(depth).or_default().push(node);
            }
        }
        Layers { layers }
    }
}

/// Depth to nodes, ascending by depth; layer 0 holds the top-level entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layers<T> {
    layers: BTreeMap<usize, Vec<T>>,
}

impl<T> Layers<T> {
    pub fn get(&self, depth: usize) -> Option<&[T]> {
        self.layers.get(&depth).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[T])> + '_ {
        self.layers
            .iter()
            .map(|(&depth, nodes)| (depth, nodes.as_slice()))
    }

    /// Number of distinct layers
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl<T: PartialEq> Layers<T> {
    pub fn layer_of(&self, node: &T) -> Option<usize> {
        self.layers
            .iter()
            .find(|(_, nodes)| nodes.contains(node))
            .map(|(&depth, _)| depth)
    }
}

impl<T: Eq + Hash + Clone> DependencyGraph<T> {
    /// Assigns every node the longest-path depth from the top-level entries.
    ///
    /// Leaf links are resolved to the node's expanded children, so a subtree
    /// shared by several parents is walked again whenever it is reached at a
    /// greater depth than before.
    pub fn layer_map(&self) -> LayerMap<T> {
        let adjacency = self.adjacency();
        let mut map = LayerMap::new();
        let mut path = HashSet::new();

        for entry in self.top_level() {
            relax(&adjacency, entry.node(), 0, &mut map, &mut path);
        }
        map
    }

    /// Groups the nodes of this graph into depth layers
    pub fn layers(&self) -> Layers<T> {
        self.layer_map().into_layers()
    }

    /// Node-level child lists, merged across all occurrences of a node
    fn adjacency(&self) -> HashMap<&T, Vec<&T>> {
        let mut adjacency: HashMap<&T, Vec<&T>> = HashMap::new();
        for occurrence in &self.occurrences {
            let children = adjacency.entry(&occurrence.node).or_default();
            for &index in &occurrence.children {
                let child = &self.occurrences[index].node;
                if !children.contains(&child) {
                    children.push(child);
                }
            }
        }
        adjacency
    }
}

fn relax<'g, T: Eq + Hash + Clone>(
    adjacency: &HashMap<&'g T, Vec<&'g T>>,
    node: &'g T,
    depth: usize,
    map: &mut LayerMap<T>,
    path: &mut HashSet<&'g T>,
) {
    // Separate trees of a forest may disagree on edge direction
    if path.contains(node) || !map.record(node, depth) {
        return;
    }

    path.insert(node);
    if let Some(children) = adjacency.get(node) {
        for &child in children {
            relax(adjacency, child, depth + 1, map, path);
        }
    }
    path.remove(node);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn tree(root: &'static str, edges: &[(&'static str, &[&'static str])]) -> DependencyGraph<&'static str> {
        let rel: HashMap<&str, Vec<&str>> = edges.iter().map(|(n, c)| (*n, c.to_vec())).collect();
        DependencyGraph::build_tree(root, |node| rel.get(node).cloned().unwrap_or_default())
    }

    #[test]
    fn test_layers_single_root() {
        let graph = tree("R", &[]);
        let layers = graph.layers();

        assert_eq!(layers.layer_count(), 1);
        assert_eq!(layers.get(0), Some(&["R"][..]));
    }

    #[test]
    fn test_layers_keep_longest_path() {
        // R -> A -> B and R -> B directly
        let graph = tree("R", &[("R", &["A", "B"]), ("A", &["B"])]);
        assert_eq!(graph.layer_map().depth_of(&"B"), Some(2));

        let graph = tree("R", &[("R", &["B", "A"]), ("A", &["B"])]);
        assert_eq!(graph.layer_map().depth_of(&"B"), Some(2));
    }

    #[test]
    fn test_layers_shared_subtree_is_pushed_down() {
        // A is expanded at depth 1 first, then reached again via X at depth 2
        let graph = tree("R", &[("R", &["A", "X"]), ("X", &["A"]), ("A", &["B"])]);
        let map = graph.layer_map();

        assert_eq!(map.depth_of(&"A"), Some(2));
        assert_eq!(map.depth_of(&"B"), Some(3));
    }

    #[test]
    fn test_layers_group_in_first_insertion_order() {
        let graph = tree("R", &[("R", &["C", "A", "B"])]);
        let layers = graph.layers();

        assert_eq!(layers.get(1), Some(&["C", "A", "B"][..]));
        let depths: Vec<usize> = layers.iter().map(|(d, _)| d).collect();
        assert_eq!(depths, vec![0, 1]);
    }

    #[test]
    fn test_layers_on_cyclic_input() {
        let graph = tree("R", &[("R", &["A", "B"]), ("A", &["C"]), ("B", &["C"]), ("C", &["R"])]);
        let layers = graph.layers();

        assert_eq!(layers.layer_of(&"R"), Some(0));
        assert_eq!(layers.layer_of(&"A"), Some(1));
        assert_eq!(layers.layer_of(&"B"), Some(1));
        assert_eq!(layers.layer_of(&"C"), Some(2));
    }

    #[test]
    fn test_layers_are_idempotent() {
        let graph = tree("R", &[("R", &["A", "B"]), ("A", &["C"]), ("B", &["C", "D"]), ("D", &["C"])]);
        assert_eq!(graph.layers(), graph.layers());
    }

    #[test]
    fn test_layers_forest_with_opposite_edges_terminates() {
        let rel: HashMap<&str, Vec<&str>> =
            [("A", vec!["B"]), ("B", vec!["A"])].into_iter().collect();
        let graph =
            DependencyGraph::build_forest(["A", "B"], |n| rel.get(n).cloned().unwrap_or_default());
        let map = graph.layer_map();

        // The first root wins; the walk stops at the edge closing the loop
        assert_eq!(map.len(), 2);
        assert_eq!(map.depth_of(&"A"), Some(0));
        assert_eq!(map.depth_of(&"B"), Some(1));
    }

    #[test]
    fn test_layer_map_iter_follows_insertion_order() {
        let graph = tree("R", &[("R", &["B", "A"])]);
        let map = graph.layer_map();
        let entries: Vec<_> = map.iter().map(|(n, d)| (*n, d)).collect();

        assert_eq!(entries, vec![("R", 0), ("B", 1), ("A", 1)]);
        assert!(!map.is_empty());
    }
}
