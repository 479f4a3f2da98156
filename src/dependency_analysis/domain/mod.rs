pub mod bean;
pub mod circular_dependency;
pub mod report_metadata;

pub use bean::{BeanName, ClassName};
pub use circular_dependency::{BeanCycles, CircularDependencyReport};
pub use report_metadata::{ReportMetadata, TOOL_NAME};
