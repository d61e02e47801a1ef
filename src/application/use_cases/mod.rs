/// Use cases module containing application business logic orchestration
mod remove_extensions;

pub use remove_extensions::RemoveExtensionsUseCase;
