use crate::application::dto::AnalysisResponse;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

const CONFIG_NODE_LABEL: &str = "ConfigClass";
const CONFIG_EDGE_LABEL: &str = "Imports";
const BEAN_NODE_LABEL: &str = "Bean";
const BEAN_EDGE_LABEL: &str = "DEPENDSON";

/// CypherFormatter adapter producing a graph-database import script
///
/// Emits the configuration import graph (when a root was analyzed) and the
/// bean graph. Bean relationships point from a bean to the bean it depends on.
pub struct CypherFormatter;

impl CypherFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CypherFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for CypherFormatter {
    fn format(&self, response: &AnalysisResponse) -> Result<String> {
        let mut output = format!(
            "// Generated by {} {} at {}\n",
            response.metadata.tool_name(),
            response.metadata.tool_version(),
            response.metadata.timestamp()
        );

        if let Some(graph) = &response.configuration_graph {
            output.push_str("\n// Configuration classes\n");
            output.push_str(&graph.to_cypher(CONFIG_NODE_LABEL, CONFIG_EDGE_LABEL, |class| {
                class.simple_name().to_string()
            }));
        }

        output.push_str("\n// Beans\n");
        for statement in response.bean_graph.export_inverted_edges(
            BEAN_NODE_LABEL,
            BEAN_EDGE_LABEL,
            |bean| bean.cypher_identifier(),
        ) {
            output.push_str(&statement);
            output.push('\n');
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::formatters::test_support::sample_response;

    #[test]
    fn test_configuration_statements_use_simple_names() {
        let output = CypherFormatter::new().format(&sample_response(true)).unwrap();

        assert!(output.contains("CREATE (RootConfig:ConfigClass {name:\"RootConfig\"})\n"));
        assert!(output.contains("CREATE (RootConfig)-[:Imports]->(WebConfig)\n"));
        assert!(output.contains("CREATE (WebConfig)-[:Imports]->(DataConfig)\n"));
        assert_eq!(output.matches(":ConfigClass ").count(), 3);
    }

    #[test]
    fn test_configuration_section_omitted_without_root() {
        let output = CypherFormatter::new().format(&sample_response(false)).unwrap();
        assert!(!output.contains("ConfigClass"));
    }

    #[test]
    fn test_bean_statements() {
        let output = CypherFormatter::new().format(&sample_response(false)).unwrap();

        assert!(output.contains("CREATE (order_service:Bean {name:\"order_service\"})\n"));
        assert!(output.contains("CREATE (web__controller)-[:DEPENDSON]->(order_service)\n"));
        assert!(output.contains("CREATE (order_service)-[:DEPENDSON]->(repository)\n"));
        assert!(output.contains("CREATE (web__controller)-[:DEPENDSON]->(repository)\n"));

        let nodes = output.find(":Bean {").unwrap();
        let relations = output.find("[:DEPENDSON]").unwrap();
        assert!(nodes < relations);
    }
}
