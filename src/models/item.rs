use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::{
    constants::DEFAULT_BORROWER_NAME,
    utils::{deserialize_id, deserialize_optional_id, non_empty},
};

/// A lendable item. Items are owned by the app backend, this crate only reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(rename = "_id")]
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub is_borrowed: bool,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borrow_deadline: Option<DateTime>,
    /// owner of the item, i.e. the lender
    #[serde(default)]
    #[serde(deserialize_with = "deserialize_id")]
    pub user_id: String,
    /// the borrower currently holding the item
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "deserialize_optional_id")]
    pub completed_with: Option<String>,
    /// display name of the borrower
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl Item {
    pub fn owner_id(&self) -> Option<&str> {
        Some(self.user_id.as_str()).filter(|s| !s.is_empty())
    }

    pub fn borrower_id(&self) -> Option<&str> {
        non_empty(self.completed_with.as_ref())
    }

    pub fn borrower_name(&self) -> &str {
        non_empty(self.user_name.as_ref()).unwrap_or(DEFAULT_BORROWER_NAME)
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::{doc, oid::ObjectId};

    use super::*;

    #[test]
    fn test_item_from_document() {
        let oid = ObjectId::new();
        let deadline = DateTime::now();
        let doc = doc! {
            "_id": oid,
            "title": "Drill",
            "isBorrowed": true,
            "borrowDeadline": deadline,
            "userId": "owner1",
            "completedWith": "borrower1",
            "userName": "Ana",
        };
        let item: Item = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(item.id, oid.to_hex());
        assert_eq!(item.title, "Drill");
        assert!(item.is_borrowed);
        assert_eq!(item.borrow_deadline, Some(deadline));
        assert_eq!(item.user_id, "owner1");
        assert_eq!(item.borrower_id(), Some("borrower1"));
        assert_eq!(item.borrower_name(), "Ana");
    }

    #[test]
    fn test_item_with_object_id_owner_and_borrower() {
        let owner = ObjectId::new();
        let borrower = ObjectId::new();
        let doc = doc! {
            "_id": ObjectId::new(),
            "title": "Drill",
            "isBorrowed": true,
            "borrowDeadline": DateTime::now(),
            "userId": owner,
            "completedWith": borrower,
        };
        let item: Item = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(item.user_id, owner.to_hex());
        assert_eq!(item.owner_id(), Some(owner.to_hex().as_str()));
        assert_eq!(item.borrower_id(), Some(borrower.to_hex().as_str()));
    }

    #[test]
    fn test_item_without_owner() {
        let doc = doc! {
            "_id": "A4",
            "title": "Saw",
            "isBorrowed": true,
            "completedWith": "borrower1",
        };
        let item: Item = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(item.user_id, "");
        assert_eq!(item.owner_id(), None);
        assert_eq!(item.borrower_id(), Some("borrower1"));
    }

    #[test]
    fn test_item_without_borrower() {
        let doc = doc! {
            "_id": "A2",
            "title": "Ladder",
            "isBorrowed": true,
            "userId": "owner1",
            "completedWith": null,
        };
        let item: Item = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(item.borrower_id(), None);
        assert_eq!(item.borrower_name(), DEFAULT_BORROWER_NAME);
    }

    #[test]
    fn test_item_empty_borrower_fields() {
        let doc = doc! {
            "_id": "A3",
            "title": "Tent",
            "isBorrowed": true,
            "userId": "owner1",
            "completedWith": "",
            "userName": "",
        };
        let item: Item = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(item.borrower_id(), None);
        assert_eq!(item.borrower_name(), DEFAULT_BORROWER_NAME);
    }
}
