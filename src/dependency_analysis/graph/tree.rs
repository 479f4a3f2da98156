use std::collections::HashSet;
use std::convert::Infallible;
use std::hash::Hash;

/// Position of an occurrence inside a [`DependencyGraph`] arena
pub(super) type NodeIndex = usize;

/// One appearance of a node in the tree.
///
/// A node is expanded (owns its full child list) at exactly one occurrence
/// per tree; every other occurrence of the same node is a leaf link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Occurrence<T> {
    pub(super) node: T,
    pub(super) children: Vec<NodeIndex>,
    pub(super) expanded: bool,
}

/// Acyclic tree (or forest) of dependencies built from a child-lookup function.
///
/// Stored as an arena of occurrences where every occurrence owns an ordered,
/// duplicate-free list of child indices. The graph is never mutated once the
/// building call has returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyGraph<T> {
    pub(super) occurrences: Vec<Occurrence<T>>,
    pub(super) top_level: Vec<NodeIndex>,
}

impl<T> Default for DependencyGraph<T> {
    fn default() -> Self {
        Self {
            occurrences: Vec::new(),
            top_level: Vec::new(),
        }
    }
}

impl<T: Eq + Hash + Clone> DependencyGraph<T> {
    /// Builds a tree with a single top-level entry keyed by `root`
    ///
    /// # Arguments
    /// * `root` - Root of the tree
    /// * `children` - Returns the direct children of a node, in the order they should appear
    ///
    /// # Returns
    /// An acyclic tree following the dependencies from the root
    pub fn build_tree<F, I>(root: T, mut children: F) -> Self
    where
        F: FnMut(&T) -> I,
        I: IntoIterator<Item = T>,
    {
        match Self::try_build_tree(root, |node| Ok::<_, Infallible>(children(node))) {
            Ok(graph) => graph,
            Err(never) => match never {},
        }
    }

    /// Fallible variant of [`DependencyGraph::build_tree`]
    ///
    /// # Errors
    /// The first error returned by `children` aborts the build; the partial
    /// tree is discarded.
    pub fn try_build_tree<F, I, E>(root: T, children: F) -> Result<Self, E>
    where
        F: FnMut(&T) -> Result<I, E>,
        I: IntoIterator<Item = T>,
    {
        let mut builder = TreeBuilder::new(children);
        builder.add_root::<I, E>(root)?;
        Ok(builder.graph)
    }

    /// Builds one tree per distinct root, each with its own visited set
    pub fn build_forest<R, F, I>(roots: R, mut children: F) -> Self
    where
        R: IntoIterator<Item = T>,
        F: FnMut(&T) -> I,
        I: IntoIterator<Item = T>,
    {
        match Self::try_build_forest(roots, |node| Ok::<_, Infallible>(children(node))) {
            Ok(graph) => graph,
            Err(never) => match never {},
        }
    }

    /// Fallible variant of [`DependencyGraph::build_forest`]
    ///
    /// # Errors
    /// The first error returned by `children` aborts the whole build.
    pub fn try_build_forest<R, F, I, E>(roots: R, children: F) -> Result<Self, E>
    where
        R: IntoIterator<Item = T>,
        F: FnMut(&T) -> Result<I, E>,
        I: IntoIterator<Item = T>,
    {
        let mut builder = TreeBuilder::new(children);
        for root in roots {
            builder.add_root::<I, E>(root)?;
        }
        Ok(builder.graph)
    }

    /// Returns true if `node` occurs anywhere in the graph
    pub fn contains(&self, node: &T) -> bool {
        self.occurrences.iter().any(|o| &o.node == node)
    }

    /// Finds the occurrence of `node` that carries its expanded subgraph
    pub fn find(&self, node: &T) -> Option<GraphNode<'_, T>> {
        self.occurrences
            .iter()
            .position(|o| o.expanded && &o.node == node)
            .map(|index| GraphNode { graph: self, index })
    }

    /// Number of distinct nodes in the graph
    pub fn node_count(&self) -> usize {
        self.occurrences
            .iter()
            .map(|o| &o.node)
            .collect::<HashSet<_>>()
            .len()
    }
}

impl<T> DependencyGraph<T> {
    /// Top-level entries in insertion order
    pub fn top_level(&self) -> impl Iterator<Item = GraphNode<'_, T>> + '_ {
        self.top_level
            .iter()
            .map(move |&index| GraphNode { graph: self, index })
    }

    /// The first top-level entry, if any
    pub fn root(&self) -> Option<GraphNode<'_, T>> {
        self.top_level.first().map(|&index| GraphNode { graph: self, index })
    }

    /// Total number of occurrences, including leaf links
    pub fn occurrence_count(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.top_level.is_empty()
    }
}

/// Borrowed view of one occurrence inside a [`DependencyGraph`]
pub struct GraphNode<'a, T> {
    graph: &'a DependencyGraph<T>,
    index: NodeIndex,
}

impl<T> Clone for GraphNode<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for GraphNode<'_, T> {}

impl<'a, T> GraphNode<'a, T> {
    pub fn node(&self) -> &'a T {
        &self.graph.occurrences[self.index].node
    }

    /// False for leaf links to a node expanded elsewhere in the tree
    pub fn is_expanded(&self) -> bool {
        self.graph.occurrences[self.index].expanded
    }

    pub fn children(&self) -> impl Iterator<Item = GraphNode<'a, T>> + 'a {
        let graph = self.graph;
        graph.occurrences[self.index]
            .children
            .iter()
            .map(move |&index| GraphNode { graph, index })
    }

    pub fn child_count(&self) -> usize {
        self.graph.occurrences[self.index].children.len()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for GraphNode<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphNode")
            .field("node", self.node())
            .field("index", &self.index)
            .field("expanded", &self.is_expanded())
            .finish()
    }
}

/// Depth-first builder shared by the tree and forest constructors
struct TreeBuilder<T, F> {
    children: F,
    graph: DependencyGraph<T>,
    visited: HashSet<T>,
    ancestors: HashSet<T>,
}

impl<T: Eq + Hash + Clone, F> TreeBuilder<T, F> {
    fn new(children: F) -> Self {
        Self {
            children,
            graph: DependencyGraph::default(),
            visited: HashSet::new(),
            ancestors: HashSet::new(),
        }
    }

    fn push(&mut self, node: T, expanded: bool) -> NodeIndex {
        self.graph.occurrences.push(Occurrence {
            node,
            children: Vec::new(),
            expanded,
        });
        self.graph.occurrences.len() - 1
    }

    fn add_root<I, E>(&mut self, root: T) -> Result<(), E>
    where
        F: FnMut(&T) -> Result<I, E>,
        I: IntoIterator<Item = T>,
    {
        let occurrences = &self.graph.occurrences;
        if self.graph.top_level.iter().any(|&i| occurrences[i].node == root) {
            return Ok(());
        }

        // Each tree gets its own visited set
        self.visited.clear();
        self.ancestors.clear();
        self.visited.insert(root.clone());

        let index = self.push(root, true);
        self.graph.top_level.push(index);
        self.expand::<I, E>(index)
    }

    fn expand<I, E>(&mut self, parent: NodeIndex) -> Result<(), E>
    where
        F: FnMut(&T) -> Result<I, E>,
        I: IntoIterator<Item = T>,
    {
        let current = self.graph.occurrences[parent].node.clone();
        let children = (self.children)(&current)?;

        self.ancestors.insert(current.clone());
        let mut linked = HashSet::new();

        for child in children {
            // Back edges are truncated; cycle reporting works on the flat map
            if self.ancestors.contains(&child) || !linked.insert(child.clone()) {
                continue;
            }

            if self.visited.insert(child.clone()) {
                let index = self.push(child, true);
                self.graph.occurrences[parent].children.push(index);
                self.expand::<I, E>(index)?;
            } else {
                let index = self.push(child, false);
                self.graph.occurrences[parent].children.push(index);
            }
        }

        self.ancestors.remove(&current);
        Ok(())
    }
}
