use mongodb::bson::{DateTime, Document};
use serde::{Deserialize, Serialize};

use super::item::Item;
use crate::{constants::*, utils::deserialize_optional_id};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NotificationKind {
    #[serde(rename = "deadline_reminder")]
    DeadlineReminder,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Lender,
    Borrower,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationData {
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub item_id: String,
    pub item_title: String,
    pub role: Role,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borrower_id: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
}

/// An in-app notification record. `timestamp` stays empty on the client side,
/// the store stamps it when the record is written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(rename = "_id")]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "deserialize_optional_id")]
    #[serde(default)]
    pub id: Option<String>,
    pub user_id: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime>,
    pub is_read: bool,
    pub data: NotificationData,
}

impl Notification {
    /// Reminder addressed to the owner of the item
    pub fn lender_reminder(item: &Item, borrower_id: &str) -> Self {
        let body = format!(
            "\"{}\" should be returned by {} today",
            item.title,
            item.borrower_name()
        );
        let data = NotificationData {
            kind: NotificationKind::DeadlineReminder,
            item_id: item.id.to_owned(),
            item_title: item.title.to_owned(),
            role: Role::Lender,
            borrower_id: Some(borrower_id.to_owned()),
            owner_id: None,
        };
        Self::new(&item.user_id, LENDER_REMINDER_TITLE, body, data)
    }

    /// Reminder addressed to whoever currently holds the item
    pub fn borrower_reminder(item: &Item, borrower_id: &str) -> Self {
        let body = format!("Please return \"{}\" to the owner today", item.title);
        let data = NotificationData {
            kind: NotificationKind::DeadlineReminder,
            item_id: item.id.to_owned(),
            item_title: item.title.to_owned(),
            role: Role::Borrower,
            borrower_id: None,
            owner_id: Some(item.user_id.to_owned()),
        };
        Self::new(borrower_id, BORROWER_REMINDER_TITLE, body, data)
    }

    fn new(user_id: &str, title: &str, body: String, data: NotificationData) -> Self {
        Self {
            id: None,
            user_id: user_id.to_owned(),
            title: title.to_owned(),
            body,
            timestamp: None,
            is_read: false,
            data,
        }
    }

    pub fn to_document(&self) -> anyhow::Result<Document> {
        let doc = mongodb::bson::to_document(self)?;
        Ok(doc)
    }
}
