use crate::dependency_analysis::domain::{BeanName, ClassName};
use crate::ports::outbound::BeanContainer;
use crate::shared::error::AnalyzerError;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    #[serde(default, rename = "bean")]
    beans: Vec<RawBean>,
    #[serde(default, rename = "configuration")]
    configurations: Vec<RawConfiguration>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBean {
    name: String,
    #[serde(default)]
    dependencies: Vec<String>,
    #[serde(default, rename = "abstract")]
    is_abstract: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfiguration {
    class: String,
    #[serde(default)]
    imports: Vec<String>,
}

#[derive(Debug, Clone)]
struct BeanDefinition {
    dependencies: Vec<BeanName>,
    is_abstract: bool,
}

/// BeanContainer backed by a TOML manifest
///
/// ```toml
/// [[bean]]
/// name = "orderService"
/// dependencies = ["orderRepository"]
///
/// [[configuration]]
/// class = "com.example.RootConfig"
/// imports = ["com.example.PersistenceConfig"]
/// ```
#[derive(Debug, Clone, Default)]
pub struct TomlManifestContainer {
    bean_order: Vec<BeanName>,
    beans: HashMap<BeanName, BeanDefinition>,
    configurations: HashMap<ClassName, Vec<ClassName>>,
}

impl TomlManifestContainer {
    /// Parses manifest content
    ///
    /// # Arguments
    /// * `content` - Raw TOML text
    /// * `source` - Path the content was read from, used in error messages
    ///
    /// # Errors
    /// Returns `ManifestParseError` for invalid TOML, unknown keys, invalid
    /// names and duplicate bean or configuration declarations.
    pub fn parse(content: &str, source: &Path) -> Result<Self> {
        let parse_error = |details: String| -> anyhow::Error {
            AnalyzerError::ManifestParseError {
                path: source.to_path_buf(),
                details,
            }
            .into()
        };

        let raw: RawManifest = toml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
        let mut container = Self::default();

        for bean in raw.beans {
            let name = BeanName::new(bean.name).map_err(|e| parse_error(e.to_string()))?;
            let dependencies = bean
                .dependencies
                .into_iter()
                .map(BeanName::new)
                .collect::<Result<Vec<_>>>()
                .map_err(|e| parse_error(format!("bean '{}': {}", name, e)))?;

            if container.beans.contains_key(&name) {
                return Err(parse_error(format!("bean '{}' is declared more than once", name)));
            }
            container.bean_order.push(name.clone());
            container.beans.insert(
                name,
                BeanDefinition {
                    dependencies,
                    is_abstract: bean.is_abstract,
                },
            );
        }

        for configuration in raw.configurations {
            let class =
                ClassName::new(configuration.class).map_err(|e| parse_error(e.to_string()))?;
            let imports = configuration
                .imports
                .into_iter()
                .map(ClassName::new)
                .collect::<Result<Vec<_>>>()
                .map_err(|e| parse_error(format!("configuration '{}': {}", class, e)))?;

            if container.configurations.contains_key(&class) {
                return Err(parse_error(format!(
                    "configuration '{}' is declared more than once",
                    class
                )));
            }
            container.configurations.insert(class, imports);
        }

        Ok(container)
    }

    /// Number of declared beans, abstract ones included
    pub fn bean_count(&self) -> usize {
        self.bean_order.len()
    }

    pub fn configuration_count(&self) -> usize {
        self.configurations.len()
    }
}

impl BeanContainer for TomlManifestContainer {
    fn bean_names(&self) -> Vec<BeanName> {
        self.bean_order.clone()
    }

    fn is_abstract(&self, bean: &BeanName) -> bool {
        self.beans.get(bean).is_some_and(|b| b.is_abstract)
    }

    fn dependencies_for_bean(&self, bean: &BeanName) -> Result<Vec<BeanName>> {
        self.beans
            .get(bean)
            .map(|b| b.dependencies.clone())
            .ok_or_else(|| {
                AnalyzerError::LookupFailure {
                    node: bean.to_string(),
                    details: "no bean with this name is declared in the manifest".to_string(),
                }
                .into()
            })
    }

    fn is_configuration_class(&self, class: &ClassName) -> bool {
        self.configurations.contains_key(class)
    }

    fn configuration_imports(&self, class: &ClassName) -> Result<Vec<ClassName>> {
        self.configurations.get(class).cloned().ok_or_else(|| {
            AnalyzerError::LookupFailure {
                node: class.to_string(),
                details: "class is imported but not declared as a [[configuration]]".to_string(),
            }
            .into()
        })
    }
}
