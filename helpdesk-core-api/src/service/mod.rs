pub mod authorization;
pub mod session;

// Re-exports
pub use authorization::*;
pub use session::*;
