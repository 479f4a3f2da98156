pub mod bean_filter;
pub mod dependency_analyzer;

pub use bean_filter::BeanFilter;
pub use dependency_analyzer::DependencyAnalyzer;
