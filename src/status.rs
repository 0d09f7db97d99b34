use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::document::empty_string_as_none;

/// The `/status` document describing the API deployment.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Status {
    pub data: StatusData,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StatusData {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub attributes: StatusAttributes,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusAttributes {
    #[serde(default)]
    pub released_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub version: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::Status;

    const STATUS_BODY: &str = r#"{
        "data": {
            "type": "status",
            "id": "pubg-api",
            "attributes": {
                "releasedAt": "2018-04-25T00:00:00Z",
                "version": "v9.11.2"
            }
        }
    }"#;

    #[test]
    fn test_decode_status() {
        let status: Status = serde_json::from_str(STATUS_BODY).unwrap();

        assert_eq!(status.data.id, "pubg-api");
        assert_eq!(status.data.attributes.version.as_deref(), Some("v9.11.2"));
        assert!(status.data.attributes.released_at.is_some());
    }

    #[test]
    fn test_decode_is_stateless() {
        // Two decodes of the same body are independent; nothing is shared
        // between them.
        let first: Status = serde_json::from_str(STATUS_BODY).unwrap();
        let second: Status = serde_json::from_str(STATUS_BODY).unwrap();

        assert_eq!(first.data.id, second.data.id);
        assert_eq!(
            first.data.attributes.version,
            second.data.attributes.version
        );
        assert_eq!(
            first.data.attributes.released_at,
            second.data.attributes.released_at
        );
    }
}
