use crate::application::dto::AnalysisResponse;
use crate::dependency_analysis::domain::BeanCycles;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CircularDependencyStatistic<'a> {
    create_date: &'a str,
    tool: Tool<'a>,
    max_depth: usize,
    all_bean_circular_dependency_count: usize,
    dependency_map: DependencyMap<'a>,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

/// Serializes as a JSON object whose keys keep the report order
#[derive(Debug)]
struct DependencyMap<'a>(&'a [BeanCycles]);

impl Serialize for DependencyMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in self.0 {
            map.serialize_entry(entry.bean().as_str(), &BeanDependency::from(entry))?;
        }
        map.end()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BeanDependency<'a> {
    injected_bean_count: usize,
    injected_bean_names: Vec<&'a str>,
    circular_dependency_count: usize,
    circular_dependency_descriptions: Vec<String>,
}

impl<'a> From<&'a BeanCycles> for BeanDependency<'a> {
    fn from(entry: &'a BeanCycles) -> Self {
        Self {
            injected_bean_count: entry.injected_bean_count(),
            injected_bean_names: entry.injected_beans().iter().map(|b| b.as_str()).collect(),
            circular_dependency_count: entry.cycle_count(),
            circular_dependency_descriptions: entry.cycles().iter().map(ToString::to_string).collect(),
        }
    }
}

/// JsonFormatter adapter producing the circular dependency statistic
///
/// Beans appear in `dependencyMap` ordered by cycle count (descending),
/// then by name.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, response: &AnalysisResponse) -> Result<String> {
        let report = &response.circular_dependencies;
        let statistic = CircularDependencyStatistic {
            create_date: response.metadata.timestamp(),
            tool: Tool {
                name: response.metadata.tool_name(),
                version: response.metadata.tool_version(),
            },
            max_depth: response.max_depth,
            all_bean_circular_dependency_count: report.total_cycle_count(),
            dependency_map: DependencyMap(report.entries()),
        };

        let mut json = serde_json::to_string_pretty(&statistic)?;
        json.push('\n');
        Ok(json)
    }
}
