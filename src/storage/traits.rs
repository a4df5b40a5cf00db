use crate::model::{SeedPerson, StorageError};
use mongodb::bson::Document;

/// Read/replace access to the people collection.
#[async_trait::async_trait]
pub trait PeopleStore: Send + Sync {
    /// Every document in the collection, unfiltered.
    async fn fetch_all(&self) -> Result<Vec<Document>, StorageError>;

    /// Wipes the collection and inserts `people`. Not atomic: a failure after
    /// the wipe leaves the collection empty.
    async fn replace_all(&self, people: &[SeedPerson]) -> Result<usize, StorageError>;
}
