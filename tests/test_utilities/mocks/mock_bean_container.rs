use bean_depend::prelude::*;
use bean_depend::shared::error::AnalyzerError;
use std::collections::{HashMap, HashSet};

/// Mock BeanContainer for testing, built from string literals
#[derive(Default, Clone)]
pub struct MockBeanContainer {
    pub beans: Vec<(String, Vec<String>)>,
    pub abstract_beans: HashSet<String>,
    pub configurations: HashMap<String, Vec<String>>,
    pub failing_bean: Option<String>,
}

impl MockBeanContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bean(mut self, name: &str, dependencies: &[&str]) -> Self {
        self.beans.push((
            name.to_string(),
            dependencies.iter().map(|d| d.to_string()).collect(),
        ));
        self
    }

    pub fn with_abstract_bean(mut self, name: &str) -> Self {
        self.beans.push((name.to_string(), Vec::new()));
        self.abstract_beans.insert(name.to_string());
        self
    }

    pub fn with_configuration(mut self, class: &str, imports: &[&str]) -> Self {
        self.configurations.insert(
            class.to_string(),
            imports.iter().map(|i| i.to_string()).collect(),
        );
        self
    }

    /// Makes the dependency lookup of `name` fail
    pub fn with_failing_bean(mut self, name: &str) -> Self {
        self.failing_bean = Some(name.to_string());
        self
    }
}

impl BeanContainer for MockBeanContainer {
    fn bean_names(&self) -> Vec<BeanName> {
        self.beans
            .iter()
            .map(|(name, _)| BeanName::new(name.as_str()).unwrap())
            .collect()
    }

    fn is_abstract(&self, bean: &BeanName) -> bool {
        self.abstract_beans.contains(bean.as_str())
    }

    fn dependencies_for_bean(&self, bean: &BeanName) -> Result<Vec<BeanName>> {
        if self.failing_bean.as_deref() == Some(bean.as_str()) {
            return Err(AnalyzerError::LookupFailure {
                node: bean.to_string(),
                details: "mock lookup failure".to_string(),
            }
            .into());
        }
        let (_, dependencies) = self
            .beans
            .iter()
            .find(|(name, _)| name == bean.as_str())
            .ok_or_else(|| anyhow::anyhow!("unknown bean '{}'", bean))?;
        dependencies.iter().map(|d| BeanName::new(d.as_str())).collect()
    }

    fn is_configuration_class(&self, class: &ClassName) -> bool {
        self.configurations.contains_key(class.as_str())
    }

    fn configuration_imports(&self, class: &ClassName) -> Result<Vec<ClassName>> {
        let imports = self
            .configurations
            .get(class.as_str())
            .ok_or_else(|| AnalyzerError::LookupFailure {
                node: class.to_string(),
                details: "not a declared configuration class".to_string(),
            })?;
        imports.iter().map(|i| ClassName::new(i.as_str())).collect()
    }
}
