use crate::application::dto::AnalysisResponse;
use crate::dependency_analysis::domain::CircularDependencyReport;
use crate::dependency_analysis::graph::{FlatDependencyMap, Layers};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Display;

/// TextFormatter adapter producing the full console report
///
/// Sections: configuration layers and import tree, dependencies, reverse
/// dependencies, bean graph outline, bean layers and circular dependencies.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl TextFormatter {
    fn render_header(&self, output: &mut String, response: &AnalysisResponse) {
        let metadata = &response.metadata;
        output.push_str(&format!(
            "Bean dependency report ({} {}, generated {})\n\n",
            metadata.tool_name(),
            metadata.tool_version(),
            metadata.timestamp()
        ));
    }

    fn render_configuration(&self, output: &mut String, response: &AnalysisResponse) {
        output.push_str("Configuration layers:\n\n");
        match (&response.configuration_layers, &response.configuration_graph) {
            (Some(layers), Some(graph)) => {
                render_layers(output, layers);
                output.push_str("\nConfiguration import graph:\n\n");
                output.push_str(&graph.render_outline());
            }
            _ => output.push_str("(no configuration root given)\n"),
        }
        output.push('\n');
    }

    fn render_dependency_map<T: Display + Ord + Clone>(
        &self,
        output: &mut String,
        title: &str,
        map: &FlatDependencyMap<T>,
    ) {
        output.push_str(title);
        output.push_str(":\n\n");
        for (node, dependencies) in map.iter() {
            output.push_str(&format!("{}:", node));
            if !dependencies.is_empty() {
                output.push(' ');
                output.push_str(&join(dependencies));
            }
            output.push('\n');
        }
        output.push('\n');
    }

    fn render_bean_graph(&self, output: &mut String, response: &AnalysisResponse) {
        output.push_str("Bean dependency graph:\n\n");
        if response.bean_graph.is_empty() {
            output.push_str("(no bean without dependencies)\n");
        } else {
            output.push_str(&response.bean_graph.render_outline());
        }
        output.push_str("\nBean layers:\n\n");
        render_layers(output, &response.bean_layers);
        output.push('\n');
    }

    fn render_cycles(&self, output: &mut String, report: &CircularDependencyReport, max_depth: usize) {
        output.push_str(&format!(
            "Circular dependencies (max depth {}):\n\n",
            max_depth
        ));
        if !report.has_cycles() {
            output.push_str("None found\n");
            return;
        }
        for entry in report.beans_with_cycles() {
            output.push_str(&format!("{} ({}):\n", entry.bean(), entry.cycle_count()));
            for cycle in entry.cycles() {
                output.push_str(&format!("\t{}\n", cycle));
            }
        }
        output.push_str(&format!(
            "\nTotal: {} circular dependency path(s)\n",
            report.total_cycle_count()
        ));
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, response: &AnalysisResponse) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, response);
        self.render_configuration(&mut output, response);
        self.render_dependency_map(&mut output, "Dependencies", &response.bean_dependencies);
        self.render_dependency_map(
            &mut output,
            "Reverse dependencies",
            &response.reverse_dependencies,
        );
        self.render_bean_graph(&mut output, response);
        self.render_cycles(&mut output, &response.circular_dependencies, response.max_depth);

        Ok(output)
    }
}

fn render_layers<T: Display>(output: &mut String, layers: &Layers<T>) {
    for (depth, nodes) in layers.iter() {
        output.push_str(&format!("{}\t{}\n", depth, join(nodes)));
    }
}

fn join<'a, T: Display + 'a>(items: impl IntoIterator<Item = &'a T>) -> String {
    items
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
