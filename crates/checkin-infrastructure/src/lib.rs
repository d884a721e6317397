// Infrastructure layer - Technical implementations
// Depends on domain layer, performs the actual I/O

pub mod http;
pub mod logging;
