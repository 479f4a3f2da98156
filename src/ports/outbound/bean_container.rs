use crate::dependency_analysis::domain::{BeanName, ClassName};
use crate::shared::Result;

/// BeanContainer port giving read access to a snapshot of a
/// dependency-injection container
///
/// This port stands in for the bean factory and annotation metadata of a
/// running application. Implementations only describe the container; all
/// analysis happens in the core.
pub trait BeanContainer {
    /// Lists every bean definition name, abstract ones included
    fn bean_names(&self) -> Vec<BeanName>;

    /// Returns true for abstract (template) definitions, which are never
    /// instantiated and therefore skipped by the analysis
    fn is_abstract(&self, bean: &BeanName) -> bool;

    /// Returns the beans directly injected into `bean`
    ///
    /// # Arguments
    /// * `bean` - Name of a bean listed by [`BeanContainer::bean_names`]
    ///
    /// # Errors
    /// Returns an error if the bean is unknown to the container
    fn dependencies_for_bean(&self, bean: &BeanName) -> Result<Vec<BeanName>>;

    /// Returns true if `class` is declared as a configuration class
    fn is_configuration_class(&self, class: &ClassName) -> bool;

    /// Returns the classes imported by a configuration class, in declaration order
    ///
    /// # Arguments
    /// * `class` - Configuration class whose imports are requested
    ///
    /// # Errors
    /// Returns an error if `class` is not declared in the container
    fn configuration_imports(&self, class: &ClassName) -> Result<Vec<ClassName>>;
}
