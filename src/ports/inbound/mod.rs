/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to interact with the application core.
pub mod extension_removal_port;

pub use extension_removal_port::ExtensionRemovalPort;
