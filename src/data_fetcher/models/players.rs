use super::common::{empty_as_none, string_or_number};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Player {
    #[serde(deserialize_with = "string_or_number")]
    pub player_key: String,
    pub player_name: String,
    #[serde(default, deserialize_with = "string_or_number_or_empty")]
    pub player_number: String,
    /// Photo reference; `None` when the API sends an empty string.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub player_image: Option<String>,
    /// Position group, e.g. "Goalkeepers" or "Forwards".
    #[serde(default, deserialize_with = "empty_as_none")]
    pub player_type: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub player_age: Option<String>,
}

impl Player {
    /// Jersey number prefixed with `#`, or an empty string when unknown.
    pub fn jersey(&self) -> String {
        if self.player_number.is_empty() {
            String::new()
        } else {
            format!("#{}", self.player_number)
        }
    }
}

fn string_or_number_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(empty_as_none(deserializer)?.unwrap_or_default())
}
