/// Mock implementations for testing
mod mock_bean_container;
mod mock_progress_reporter;

pub use mock_bean_container::MockBeanContainer;
pub use mock_progress_reporter::MockProgressReporter;
