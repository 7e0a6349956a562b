pub mod badges;
pub mod projections;
pub mod routes;

// Re-exports
pub use badges::*;
pub use projections::*;
pub use routes::*;
