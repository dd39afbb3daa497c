use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};
use std::sync::Mutex;

use super::DeadlineStore;
use crate::models::{DeadlineWindow, Item, Notification};

/// Process local store applying the same filter as the mongodb queries.
/// Timestamps are handed out strictly increasing in write order.
#[derive(Default)]
pub struct InMemoryStore {
    items: Mutex<Vec<Item>>,
    notifications: Mutex<Vec<Notification>>,
}

impl InMemoryStore {
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: Mutex::new(items),
            notifications: Mutex::new(vec![]),
        }
    }

    pub fn add_item(&self, item: Item) -> anyhow::Result<()> {
        let mut items = self
            .items
            .lock()
            .map_err(|_| anyhow::anyhow!("items lock poisoned"))?;
        items.push(item);
        Ok(())
    }

    /// Snapshot of all notifications written so far
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .map(|notifications| notifications.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl DeadlineStore for InMemoryStore {
    async fn find_due_items(&self, window: &DeadlineWindow) -> anyhow::Result<Vec<Item>> {
        let items = self
            .items
            .lock()
            .map_err(|_| anyhow::anyhow!("items lock poisoned"))?;
        let due = items
            .iter()
            .filter(|item| item.is_borrowed)
            .filter(|item| {
                item.borrow_deadline
                    .map_or(false, |deadline| window.contains(&deadline))
            })
            .cloned()
            .collect();
        Ok(due)
    }

    async fn insert_notification(&self, notification: &Notification) -> anyhow::Result<()> {
        let mut notifications = self
            .notifications
            .lock()
            .map_err(|_| anyhow::anyhow!("notifications lock poisoned"))?;
        let now = DateTime::now().timestamp_millis();
        let last = notifications
            .last()
            .and_then(|n| n.timestamp)
            .map(|ts| ts.timestamp_millis());
        let ts = match last {
            Some(last) if last >= now => last + 1,
            _ => now,
        };
        let mut notification = notification.clone();
        notification.id = Some(ObjectId::new().to_hex());
        notification.timestamp = Some(DateTime::from_millis(ts));
        notifications.push(notification);
        Ok(())
    }
}
