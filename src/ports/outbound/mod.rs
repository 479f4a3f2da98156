/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (bean container, file system, console).
pub mod bean_container;
pub mod formatter;
pub mod manifest_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use bean_container::BeanContainer;
pub use formatter::ReportFormatter;
pub use manifest_reader::ManifestReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
