/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod removal_request;
mod removal_response;

pub use output_format::OutputFormat;
pub use removal_request::RemovalRequest;
pub use removal_response::RemovalResponse;
