use super::tree::{DependencyGraph, NodeIndex};
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

impl<T: Display> DependencyGraph<T> {
    /// Renders the graph as a tab-indented outline.
    ///
    /// Nodes with children end with `:` and list their children one level
    /// deeper; leaves are printed on their own.
    pub fn render_outline(&self) -> String {
        let mut output = String::new();
        self.render_level(&self.top_level, 0, &mut output);
        output
    }

    fn render_level(&self, indices: &[NodeIndex], indent: usize, output: &mut String) {
        for &index in indices {
            let occurrence = &self.occurrences[index];
            for _ in 0..indent {
                output.push('\t');
            }
            output.push_str(&occurrence.node.to_string());
            if occurrence.children.is_empty() {
                output.push('\n');
            } else {
                output.push_str(":\n");
                self.render_level(&occurrence.children, indent + 1, output);
            }
        }
    }
}

impl<T: Eq + Hash> DependencyGraph<T> {
    /// Builds Cypher statements that recreate this graph in a graph database.
    ///
    /// Node creations come first, then relationship creations. Every
    /// statement appears once, in first-seen order.
    ///
    /// # Arguments
    /// * `node_label` - Label given to every node
    /// * `edge_label` - Relationship type from parent to child
    /// * `name_fn` - Maps a node to the identifier used in the script
    pub fn export_edges<F>(&self, node_label: &str, edge_label: &str, name_fn: F) -> Vec<String>
    where
        F: Fn(&T) -> String,
    {
        self.collect_statements(node_label, edge_label, &name_fn, false)
    }

    /// Like [`DependencyGraph::export_edges`], with relationships pointing
    /// from child to parent.
    ///
    /// Used for graphs built over a reverse relation, so that the exported
    /// edges follow the forward direction again.
    pub fn export_inverted_edges<F>(
        &self,
        node_label: &str,
        edge_label: &str,
        name_fn: F,
    ) -> Vec<String>
    where
        F: Fn(&T) -> String,
    {
        self.collect_statements(node_label, edge_label, &name_fn, true)
    }

    fn collect_statements<F>(
        &self,
        node_label: &str,
        edge_label: &str,
        name_fn: &F,
        inverted: bool,
    ) -> Vec<String>
    where
        F: Fn(&T) -> String,
    {
        let mut export = CypherExport {
            node_label,
            edge_label,
            name_fn,
            inverted,
            seen: HashSet::new(),
            nodes: StatementSet::default(),
            relations: StatementSet::default(),
        };
        export.collect(self, None, &self.top_level);

        let mut statements = export.nodes.statements;
        statements.extend(export.relations.statements);
        statements
    }

    /// [`DependencyGraph::export_edges`] as a newline-terminated script
    pub fn to_cypher<F>(&self, node_label: &str, edge_label: &str, name_fn: F) -> String
    where
        F: Fn(&T) -> String,
    {
        self.export_edges(node_label, edge_label, name_fn)
            .into_iter()
            .map(|statement| statement + "\n")
            .collect()
    }
}

#[derive(Default)]
struct StatementSet {
    index: HashSet<String>,
    statements: Vec<String>,
}

impl StatementSet {
    fn insert(&mut self, statement: String) {
        if self.index.insert(statement.clone()) {
            self.statements.push(statement);
        }
    }
}

struct CypherExport<'a, 'g, T, F> {
    node_label: &'a str,
    edge_label: &'a str,
    name_fn: &'a F,
    inverted: bool,
    seen: HashSet<&'g T>,
    nodes: StatementSet,
    relations: StatementSet,
}

impl<'g, T: Eq + Hash, F: Fn(&T) -> String> CypherExport<'_, 'g, T, F> {
    fn collect(&mut self, graph: &'g DependencyGraph<T>, parent: Option<&str>, indices: &[NodeIndex]) {
        for &index in indices {
            let occurrence = &graph.occurrences[index];
            let name = (self.name_fn)(&occurrence.node);

            if self.seen.insert(&occurrence.node) {
                self.nodes.insert(cypher_node(&name, self.node_label));
            }
            if let Some(parent) = parent {
                let relation = if self.inverted {
                    cypher_relation(&name, self.edge_label, parent)
                } else {
                    cypher_relation(parent, self.edge_label, &name)
                };
                self.relations.insert(relation);
            }
            self.collect(graph, Some(&name), &occurrence.children);
        }
    }
}

fn cypher_node(name: &str, label: &str) -> String {
    format!("CREATE ({}:{} {{name:\"{}\"}})", name, label, name)
}

fn cypher_relation(from: &str, label: &str, to: &str) -> String {
    format!("CREATE ({})-[:{}]->({})", from, label, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn diamond() -> DependencyGraph<&'static str> {
        let rel: HashMap<&str, Vec<&str>> = [
            ("Root", vec!["Left", "Right"]),
            ("Left", vec!["Shared"]),
            ("Right", vec!["Shared"]),
        ]
        .into_iter()
        .collect();
        DependencyGraph::build_tree("Root", |n| rel.get(n).cloned().unwrap_or_default())
    }

    #[test]
    fn test_render_outline_indents_children() {
        let outline = diamond().render_outline();
        assert_eq!(
            outline,
            "Root:\n\tLeft:\n\t\tShared\n\tRight:\n\t\tShared\n"
        );
    }

    #[test]
    fn test_render_outline_single_leaf() {
        let graph = DependencyGraph::build_tree("Alone", |_| Vec::new());
        assert_eq!(graph.render_outline(), "Alone\n");
    }

    #[test]
    fn test_export_edges_nodes_before_relations() {
        let statements = diamond().export_edges("ConfigClass", "Imports", |n| n.to_string());

        assert_eq!(
            statements,
            vec![
                "CREATE (Root:ConfigClass {name:\"Root\"})",
                "CREATE (Left:ConfigClass {name:\"Left\"})",
                "CREATE (Shared:ConfigClass {name:\"Shared\"})",
                "CREATE (Right:ConfigClass {name:\"Right\"})",
                "CREATE (Root)-[:Imports]->(Left)",
                "CREATE (Left)-[:Imports]->(Shared)",
                "CREATE (Root)-[:Imports]->(Right)",
                "CREATE (Right)-[:Imports]->(Shared)",
            ]
        );
    }

    #[test]
    fn test_export_edges_applies_name_function() {
        let graph = DependencyGraph::build_tree("a.b-c", |_| Vec::new());
        let statements =
            graph.export_edges("Bean", "DEPENDSON", |n| n.replace('.', "_").replace('-', "__"));

        assert_eq!(statements, vec!["CREATE (a_b__c:Bean {name:\"a_b__c\"})"]);
    }

    #[test]
    fn test_export_inverted_edges_point_to_parent() {
        let statements = diamond().export_inverted_edges("Bean", "DEPENDSON", |n| n.to_string());

        assert_eq!(statements[4], "CREATE (Left)-[:DEPENDSON]->(Root)");
        assert_eq!(statements[7], "CREATE (Shared)-[:DEPENDSON]->(Right)");
        assert_eq!(statements.len(), 8);
    }

    #[test]
    fn test_to_cypher_terminates_each_statement() {
        let script = diamond().to_cypher("ConfigClass", "Imports", |n| n.to_string());
        assert_eq!(script.lines().count(), 8);
        assert!(script.ends_with("CREATE (Right)-[:Imports]->(Shared)\n"));
    }
}
