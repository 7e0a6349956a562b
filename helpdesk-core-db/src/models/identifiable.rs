use uuid::Uuid;

/// Entities addressable by a store-assigned UUID.
pub trait Identifiable {
    /// Returns the unique identifier of the entity
    fn get_id(&self) -> Uuid;
}
