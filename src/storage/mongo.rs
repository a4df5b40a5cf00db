use crate::config::AppConfig;
use crate::model::{SeedPerson, StorageError};
use crate::storage::traits::PeopleStore;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info};

/// MongoDB-backed store. Holds no connection between calls: every operation
/// opens its own client and shuts it down before returning.
pub struct MongoStorage {
    uri: String,
    db_name: String,
    collection_name: String,
    server_selection_timeout: Duration,
}

impl MongoStorage {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            uri: config.mongodb_uri.clone(),
            db_name: config.mongodb_db.clone(),
            collection_name: config.mongodb_collection.clone(),
            server_selection_timeout: Duration::from_millis(
                config.mongodb_server_selection_timeout_ms,
            ),
        }
    }

    async fn connect(&self) -> Result<Client, StorageError> {
        let mut options = ClientOptions::parse(&self.uri)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        // A timeout given in the URI takes precedence.
        if options.server_selection_timeout.is_none() {
            options.server_selection_timeout = Some(self.server_selection_timeout);
        }
        if options.app_name.is_none() {
            options.app_name = Some("pessoas-api".to_string());
        }

        Client::with_options(options).map_err(|e| StorageError::Connection(e.to_string()))
    }

    /// Runs `op` on a fresh client and shuts the client down on every exit
    /// path, including when `op` fails.
    async fn with_collection<D, T, F, Fut>(&self, op: F) -> Result<T, StorageError>
    where
        D: Send + Sync,
        F: FnOnce(Collection<D>) -> Fut,
        Fut: Future<Output = Result<T, StorageError>>,
    {
        let client = self.connect().await?;
        debug!(
            "Opened MongoDB client for {}.{}",
            self.db_name, self.collection_name
        );

        let collection = client
            .database(&self.db_name)
            .collection::<D>(&self.collection_name);
        let result = op(collection).await;

        client.shutdown().await;
        debug!("MongoDB client closed");
        result
    }
}

#[async_trait::async_trait]
impl PeopleStore for MongoStorage {
    async fn fetch_all(&self) -> Result<Vec<Document>, StorageError> {
        self.with_collection::<Document, _, _, _>(|collection| async move {
            let cursor = collection
                .find(doc! {})
                .await
                .map_err(|e| StorageError::Query(e.to_string()))?;
            cursor
                .try_collect::<Vec<Document>>()
                .await
                .map_err(|e| StorageError::Query(e.to_string()))
        })
        .await
    }

    async fn replace_all(&self, people: &[SeedPerson]) -> Result<usize, StorageError> {
        let collection_name = self.collection_name.clone();
        self.with_collection::<SeedPerson, _, _, _>(|collection| async move {
            let deleted = collection
                .delete_many(doc! {})
                .await
                .map_err(|e| StorageError::Write(e.to_string()))?;
            info!(
                "Collection {} cleared ({} documents removed)",
                collection_name, deleted.deleted_count
            );

            // insert_many rejects an empty batch
            if people.is_empty() {
                return Ok(0);
            }

            let inserted = collection
                .insert_many(people)
                .await
                .map_err(|e| StorageError::Write(e.to_string()))?;
            Ok(inserted.inserted_ids.len())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_config() -> AppConfig {
        AppConfig {
            // Port 1 is never a MongoDB server; selection gives up quickly.
            mongodb_uri: "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200".into(),
            ..AppConfig::default()
        }
    }

    #[tokio::test]
    async fn fetch_all_reports_unreachable_server() {
        let storage = MongoStorage::new(&unreachable_config());
        let err = storage.fetch_all().await.unwrap_err();
        assert!(matches!(err, StorageError::Query(_)), "got {err:?}");
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn invalid_uri_is_a_connection_error() {
        let config = AppConfig {
            mongodb_uri: "not-a-mongo-uri".into(),
            ..AppConfig::default()
        };
        let err = MongoStorage::new(&config).fetch_all().await.unwrap_err();
        assert!(matches!(err, StorageError::Connection(_)), "got {err:?}");
    }
}
