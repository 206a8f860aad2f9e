use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The subset of an oEmbed response that gets read. Other fields are ignored.
///
/// A field that is missing, null or not a string reads as `None` without
/// affecting the others.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OEmbedResponse {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub author_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub thumbnail_url: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Ok(Some(s)),
        _ => Ok(None),
    }
}
