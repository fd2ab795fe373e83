use serde::{Deserialize, Serialize};

/// A single catalog entry: one external media reference.
///
/// The `link` is the identifier clients actually work with (a YouTube video
/// ID); `id` is assigned by the store and never reused. Field names on the
/// wire follow the web client (`youtubeLink`, `isVideo`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub id: i64,
    #[serde(rename = "youtubeLink", alias = "link")]
    pub link: String,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub is_video: bool,
}

/// A source that has not been stored yet, as read from a seed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSource {
    #[serde(rename = "youtubeLink", alias = "link")]
    pub link: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    pub is_video: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_client_field_names() {
        let source = Source {
            id: 7,
            link: "yt1".to_string(),
            title: Some("A".to_string()),
            artist: None,
            is_video: false,
        };

        let value = serde_json::to_value(&source).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 7,
                "youtubeLink": "yt1",
                "title": "A",
                "artist": null,
                "isVideo": false
            })
        );
    }

    #[test]
    fn new_source_accepts_plain_link_field() {
        let parsed: NewSource =
            serde_json::from_value(json!({ "link": "abc", "isVideo": true })).unwrap();

        assert_eq!(parsed.link, "abc");
        assert!(parsed.is_video);
        assert_eq!(parsed.title, None);
    }
}
