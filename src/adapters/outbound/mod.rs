/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod console;
pub mod descriptors;
pub mod filesystem;
pub mod formatters;
