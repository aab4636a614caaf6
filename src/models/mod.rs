use anyhow::{Result, bail};
use serde::Serialize;
use serde_json::Value;

/// Incoming card payload. Fields are taken as sent, without type checks;
/// `None` means the key was absent.
#[derive(Debug, Default)]
pub struct CardRequest {
    pub card_name: Option<Value>,
    pub card_desc: Option<Value>,
    pub card_id: Option<Value>,
}

impl CardRequest {
    /// Picks the card fields out of a parsed body. A `null` body is an error;
    /// any other non-object body yields a request with every field absent.
    pub fn from_json(body: Value) -> Result<Self> {
        match body {
            Value::Null => bail!("cannot read card fields from a null body"),
            Value::Object(mut fields) => Ok(CardRequest {
                card_name: fields.remove("cardName"),
                card_desc: fields.remove("cardDesc"),
                card_id: fields.remove("cardId"),
            }),
            _ => Ok(CardRequest::default()),
        }
    }
}

/// Fields pulled out of a card description.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedInfo {
    pub audio_url: Option<String>,
    pub description: String,
    pub tags: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    pub description: String,
    pub audio_url: String,
    pub tags: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_id: Option<Value>,
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
