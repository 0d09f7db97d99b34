//! Shared pieces of the JSON:API document shape: navigation links,
//! relationship linkage and the leniency helpers used across the response
//! models.

use std::collections::HashMap;

use serde::ser::{self, Serializer};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Navigation links attached to a document or a resource.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self", default)]
    pub self_link: Option<String>,
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
}

/// The named relationship lists of a resource.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Relationships(pub HashMap<String, Relationship>);

impl Relationships {
    /// Returns the relationship with the given name.
    pub fn get(&self, name: &str) -> Option<&Relationship> {
        self.0.get(name)
    }
}

/// A single relationship entry holding resource linkage.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(default)]
    pub data: RelationshipData,
}

/// Resource linkage: a list of references, a single reference or `null`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationshipData {
    Many(Vec<ResourceRef>),
    One(ResourceRef),
    #[default]
    None,
}

/// A bare `type` + `id` reference to a resource.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

/// Deserializes an optional string, coercing the empty string to `None`.
///
/// The API uses `""` interchangeably with `null` for absent scalars.
pub(crate) fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    Ok(value.filter(|s| !s.is_empty()))
}

/// Serializes `resource` as a JSON object with `tag_field: tag` inserted.
///
/// Counterpart of the discriminator dispatch used when decoding the
/// polymorphic resource enums.
pub(crate) fn serialize_tagged<S, T>(
    serializer: S,
    tag_field: &str,
    tag: &str,
    resource: &T,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    let mut value = serde_json::to_value(resource).map_err(ser::Error::custom)?;

    if let Value::Object(map) = &mut value {
        map.insert(tag_field.to_owned(), Value::String(tag.to_owned()));
    }

    value.serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::{empty_string_as_none, Relationship, RelationshipData, Relationships, ResourceRef};

    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "empty_string_as_none")]
        value: Option<String>,
    }

    #[test]
    fn test_empty_string_as_none() {
        let probe: Probe = serde_json::from_str(r#"{"value": ""}"#).unwrap();
        assert_eq!(probe.value, None);

        let probe: Probe = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(probe.value, None);

        let probe: Probe = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(probe.value, None);

        let probe: Probe = serde_json::from_str(r#"{"value": "progress"}"#).unwrap();
        assert_eq!(probe.value.as_deref(), Some("progress"));
    }

    #[test]
    fn test_relationship_linkage() {
        let relationships: Relationships = serde_json::from_str(
            r#"{
                "rosters": {"data": [{"type": "roster", "id": "r-1"}, {"type": "roster", "id": "r-2"}]},
                "season": {"data": {"type": "season", "id": "s-1"}},
                "spectators": {"data": null}
            }"#,
        )
        .unwrap();

        let rosters = relationships.get("rosters").unwrap();
        assert_eq!(
            rosters.data,
            RelationshipData::Many(vec![
                ResourceRef {
                    kind: "roster".to_owned(),
                    id: "r-1".to_owned(),
                },
                ResourceRef {
                    kind: "roster".to_owned(),
                    id: "r-2".to_owned(),
                },
            ])
        );

        let season = relationships.get("season").unwrap();
        assert!(matches!(&season.data, RelationshipData::One(r) if r.id == "s-1"));

        let spectators = relationships.get("spectators").unwrap();
        assert_eq!(spectators.data, RelationshipData::None);

        assert!(relationships.get("assets").is_none());
    }

    #[test]
    fn test_relationship_without_data_key() {
        let relationship: Relationship = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(relationship.data, RelationshipData::None);
    }
}
