use async_trait::async_trait;
use futures::stream::StreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::error::Result as MongoResult;
use mongodb::options::{FindOptions, UpdateOptions};
use mongodb::{options::ClientOptions, Client};
use serde::de::DeserializeOwned;
use std::time::Duration;

#[cfg(test)]
use mockall::automock;

use crate::constants::*;
use crate::models::{DeadlineWindow, Item, Notification};

mod inmemory;

pub use inmemory::InMemoryStore;

/// Storage operations needed by the deadline reminder job
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DeadlineStore: Send + Sync {
    /// All borrowed items whose `borrowDeadline` falls inside the window
    async fn find_due_items(&self, window: &DeadlineWindow) -> anyhow::Result<Vec<Item>>;

    /// Append a notification, the store assigns its `timestamp`
    async fn insert_notification(&self, notification: &Notification) -> anyhow::Result<()>;
}

pub struct AppDatabase {
    client: Client,
    db_name: String,
}

impl AppDatabase {
    pub async fn new() -> anyhow::Result<Self> {
        // get all database parameters from environment
        let uri = std::env::var("MONGODB_URI")
            .map_err(|_| anyhow::anyhow!("MONGODB_URI not found in .env file"))?;
        let min_pool = std::env::var("MONGODB_MIN_POOL_SIZE").unwrap_or_default();
        let max_pool = std::env::var("MONGODB_MAX_POOL_SIZE").unwrap_or_default();
        let min_pool = min_pool.parse::<u32>().unwrap_or(MONGO_MIN_POOL_SIZE);
        let max_pool = max_pool.parse::<u32>().unwrap_or(MONGO_MAX_POOL_SIZE);
        let db_name = std::env::var("MONGODB_DB_NAME").unwrap_or(DB_NAME.to_owned());
        let timeout = Duration::from_secs(MONGO_CONN_TIMEOUT);
        // create the mongodb client options
        let mut client_options = ClientOptions::parse(uri).await?;
        client_options.max_pool_size = Some(max_pool);
        client_options.min_pool_size = Some(min_pool);
        client_options.connect_timeout = Some(timeout);
        let client = Client::with_options(client_options)?;
        tracing::debug!("mongodb client created for database: {db_name}");
        Ok(Self { client, db_name })
    }

    pub async fn find<T>(
        &self,
        coll: &str,
        filter: Option<Document>,
        options: Option<FindOptions>,
    ) -> MongoResult<Vec<T>>
    where
        T: DeserializeOwned + Unpin + Send + Sync + 'static,
    {
        let coll = self.client.database(&self.db_name).collection::<T>(coll);
        let mut cursor = coll.find(filter, options).await?;
        let mut data = vec![];
        while let Some(doc) = cursor.next().await {
            data.push(doc?);
        }
        Ok(data)
    }

    /// Insert a new document and let the server fill `ts_field` with its current time
    pub async fn insert_with_server_ts(
        &self,
        coll: &str,
        document: Document,
        ts_field: &str,
    ) -> MongoResult<ObjectId> {
        let coll = self
            .client
            .database(&self.db_name)
            .collection::<Document>(coll);
        let oid = ObjectId::new();
        let filter = doc! {"_id": oid};
        let update = doc! {
            "$setOnInsert": document,
            "$currentDate": {ts_field: true}
        };
        let options = UpdateOptions::builder().upsert(Some(true)).build();
        coll.update_one(filter, update, options).await?;
        Ok(oid)
    }
}

/// Borrowed items with `start <= borrowDeadline < end`
pub(crate) fn due_items_filter(window: &DeadlineWindow) -> Document {
    let (start, end) = window.bson_bounds();
    doc! {
        "isBorrowed": true,
        "borrowDeadline": {"$gte": start, "$lt": end}
    }
}

/// Decode item documents one by one, a malformed item is logged and left out
fn decode_items(docs: Vec<Document>) -> Vec<Item> {
    docs.into_iter()
        .filter_map(|doc| {
            let id = doc.get("_id").map(|id| id.to_string()).unwrap_or_default();
            mongodb::bson::from_document::<Item>(doc)
                .map_err(|err| tracing::warn!("Item {} could not be decoded: {:?}", id, err))
                .ok()
        })
        .collect()
}

#[async_trait]
impl DeadlineStore for AppDatabase {
    async fn find_due_items(&self, window: &DeadlineWindow) -> anyhow::Result<Vec<Item>> {
        let filter = due_items_filter(window);
        let docs = self.find::<Document>(COLL_ITEMS, Some(filter), None).await?;
        Ok(decode_items(docs))
    }

    async fn insert_notification(&self, notification: &Notification) -> anyhow::Result<()> {
        let document = notification.to_document()?;
        let oid = self
            .insert_with_server_ts(COLL_NOTIFICATIONS, document, "timestamp")
            .await?;
        tracing::debug!("notification {} written for user {}", oid, notification.user_id);
        Ok(())
    }
}
