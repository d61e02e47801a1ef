/// Mock implementations for testing
mod mock_descriptor_repository;
mod mock_progress_reporter;

pub use mock_descriptor_repository::MockDescriptorRepository;
pub use mock_progress_reporter::MockProgressReporter;
