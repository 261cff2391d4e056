use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDateTime, Utc};

/// One line of the shopping cart as submitted by the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(deserialize_with = "reference_id::deserialize")]
    pub product_id: String,
    #[serde(deserialize_with = "reference_id::deserialize")]
    pub delivery_option_id: String,
    /// Signed so that non-positive counts reach validation instead of
    /// failing as an unreadable cart
    pub quantity: i64,
}

impl CartItem {
    pub fn new(product_id: impl Into<String>, delivery_option_id: impl Into<String>, quantity: i64) -> Self {
        Self {
            product_id: product_id.into(),
            delivery_option_id: delivery_option_id.into(),
            quantity,
        }
    }
}

/// The receipt returned for a successfully priced cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    #[serde(serialize_with = "iso_millis::serialize")]
    pub order_time: DateTime<Utc>,
    /// Final amount in cents, promotion already applied
    pub total_cost: u64,
    pub products: Vec<OrderLine>,
}

/// A priced cart line with its projected delivery date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: String,
    pub quantity: u32,
    #[serde(with = "delivery_time_format")]
    pub estimated_delivery_time: NaiveDateTime,
    /// Reserved for product variants; never populated.
    pub variation: Option<serde_json::Value>,
}

impl OrderLine {
    pub fn new(product_id: String, quantity: u32, estimated_delivery_time: NaiveDateTime) -> Self {
        Self {
            product_id,
            quantity,
            estimated_delivery_time,
            variation: None,
        }
    }
}

/// Ids arrive as strings, but a bare number is read as its decimal text
/// so a bad reference is reported by value rather than as a broken cart
mod reference_id {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(id) => id,
            RawId::Number(id) => id.to_string(),
        })
    }
}

/// `2024-01-03T10:15:30.000Z`, the shape browsers produce for `toISOString`
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

mod delivery_time_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
