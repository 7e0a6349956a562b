pub mod models;
pub mod repository;
pub mod service;
pub mod views;

pub use models::*;
pub use repository::*;
pub use service::*;
pub use views::*;
