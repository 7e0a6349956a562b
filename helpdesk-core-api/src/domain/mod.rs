pub mod common_enums;
pub mod identity;
pub mod ticket_draft;

// Re-exports
pub use common_enums::*;
pub use identity::*;
pub use ticket_draft::*;
