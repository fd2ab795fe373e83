use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Request payload for the custom mix endpoint.
/// Both fields stay optional here so that a `null` or missing value reaches
/// validation instead of failing deserialization.
pub struct CustomMixRequest {
    #[serde(default)]
    pub audio_id: Option<String>,
    #[serde(default)]
    pub video_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_and_missing_fields_become_none() {
        let req: CustomMixRequest =
            serde_json::from_str(r#"{"audioId":null,"videoId":"v1"}"#).unwrap();
        assert_eq!(req.audio_id, None);
        assert_eq!(req.video_id.as_deref(), Some("v1"));

        let req: CustomMixRequest = serde_json::from_str(r#"{"audioId":"a1"}"#).unwrap();
        assert_eq!(req.video_id, None);
    }
}
