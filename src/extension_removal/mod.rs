/// Extension removal domain - coordinate model and query resolution
///
/// Pure logic with no I/O: queries are parsed, resolved against a dependency
/// list, and turned into a removal plan that the application layer applies.
pub mod domain;
pub mod services;
