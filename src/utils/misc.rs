use chrono::{DateTime, Utc};
use mongodb::bson::{Bson, DateTime as BsonDateTime};
use serde::{Deserialize, Deserializer};

/// Convert a chrono instant into a BSON datetime (millisecond precision)
pub fn to_bson_datetime(ts: &DateTime<Utc>) -> BsonDateTime {
    BsonDateTime::from_millis(ts.timestamp_millis())
}

/// Deserialize helper for document keys which may be stored either as
/// ObjectId or as plain string
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let val = Bson::deserialize(deserializer)?;
    Ok(bson_to_id(val))
}

/// Same as `deserialize_id` but for optional keys
pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let val = Option::<Bson>::deserialize(deserializer)?;
    match val {
        None | Some(Bson::Null) => Ok(None),
        Some(val) => Ok(Some(bson_to_id(val))),
    }
}

fn bson_to_id(val: Bson) -> String {
    match val {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        Bson::Null => String::new(),
        other => other.to_string(),
    }
}

/// Treat empty strings the same way as missing values
pub fn non_empty(val: Option<&String>) -> Option<&str> {
    val.map(String::as_str).filter(|s| !s.is_empty())
}
