//! Telemetry event records.
//!
//! Telemetry is a large per-match event log served from a dynamic asset
//! url, not a fixed endpoint. The set of event kinds is open; records
//! whose `_T` discriminator this crate does not model decode into
//! [`TelemetryEvent::Other`] with the raw record preserved.

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::{empty_string_as_none, serialize_tagged};

/// A single telemetry event.
#[derive(Clone, Debug)]
pub enum TelemetryEvent {
    MatchStart(MatchStart),
    MatchEnd(MatchEnd),
    PlayerKill(PlayerKill),
    PlayerPosition(PlayerPosition),
    /// An event kind this crate does not model.
    Other {
        kind: String,
        value: Value,
    },
}

impl TelemetryEvent {
    /// Returns the `_T` discriminator of the event.
    pub fn kind(&self) -> &str {
        match self {
            Self::MatchStart(_) => "LogMatchStart",
            Self::MatchEnd(_) => "LogMatchEnd",
            Self::PlayerKill(_) => "LogPlayerKill",
            Self::PlayerPosition(_) => "LogPlayerPosition",
            Self::Other { kind, .. } => kind,
        }
    }
}

impl<'de> Deserialize<'de> for TelemetryEvent {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;

        let kind = value
            .get("_T")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();

        match kind.as_str() {
            "LogMatchStart" => serde_json::from_value(value)
                .map(Self::MatchStart)
                .map_err(de::Error::custom),
            "LogMatchEnd" => serde_json::from_value(value)
                .map(Self::MatchEnd)
                .map_err(de::Error::custom),
            "LogPlayerKill" => serde_json::from_value(value)
                .map(Self::PlayerKill)
                .map_err(de::Error::custom),
            "LogPlayerPosition" => serde_json::from_value(value)
                .map(Self::PlayerPosition)
                .map_err(de::Error::custom),
            _ => Ok(Self::Other { kind, value }),
        }
    }
}

impl Serialize for TelemetryEvent {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::MatchStart(event) => serialize_tagged(serializer, "_T", "LogMatchStart", event),
            Self::MatchEnd(event) => serialize_tagged(serializer, "_T", "LogMatchEnd", event),
            Self::PlayerKill(event) => serialize_tagged(serializer, "_T", "LogPlayerKill", event),
            Self::PlayerPosition(event) => {
                serialize_tagged(serializer, "_T", "LogPlayerPosition", event)
            }
            Self::Other { value, .. } => value.serialize(serializer),
        }
    }
}

/// A player as embedded in telemetry events.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub name: String,
    pub account_id: String,
    #[serde(default)]
    pub team_id: u32,
    #[serde(default)]
    pub health: f64,
    #[serde(default)]
    pub ranking: u32,
    #[serde(default)]
    pub location: Option<Location>,
}

/// A world-space position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchStart {
    #[serde(rename = "_D")]
    pub timestamp: DateTime<Utc>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub map_name: Option<String>,
    #[serde(default)]
    pub characters: Vec<Character>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEnd {
    #[serde(rename = "_D")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub characters: Vec<Character>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerKill {
    #[serde(rename = "_D")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub attack_id: Option<i64>,
    /// Absent for environmental deaths (bluezone, falling).
    #[serde(default)]
    pub killer: Option<Character>,
    pub victim: Character,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub damage_type_category: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub damage_causer_name: Option<String>,
    #[serde(default)]
    pub distance: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPosition {
    #[serde(rename = "_D")]
    pub timestamp: DateTime<Utc>,
    pub character: Character,
    #[serde(default)]
    pub elapsed_time: f64,
}

#[cfg(test)]
mod tests {
    use super::TelemetryEvent;

    const TELEMETRY_BODY: &str = r#"[
        {
            "_T": "LogMatchStart",
            "_D": "2018-09-12T19:50:00Z",
            "mapName": "Desert_Main",
            "characters": [
                {
                    "name": "Player1",
                    "accountId": "account.a",
                    "teamId": 7,
                    "health": 100.0,
                    "ranking": 0,
                    "location": {"x": 1000.5, "y": 2000.25, "z": 100.0}
                }
            ]
        },
        {
            "_T": "LogPlayerKill",
            "_D": "2018-09-12T20:02:12Z",
            "attackId": 12345,
            "killer": {"name": "Player1", "accountId": "account.a"},
            "victim": {"name": "Player2", "accountId": "account.b"},
            "damageTypeCategory": "Damage_Gun",
            "damageCauserName": "WeapHK416_C",
            "distance": 312.7
        },
        {
            "_T": "LogArmorDestroy",
            "_D": "2018-09-12T20:03:00Z",
            "item": {"itemId": "Item_Armor_C"}
        }
    ]"#;

    #[test]
    fn test_decode_event_log() {
        let events: Vec<TelemetryEvent> = serde_json::from_str(TELEMETRY_BODY).unwrap();

        assert_eq!(events.len(), 3);

        let start = match &events[0] {
            TelemetryEvent::MatchStart(event) => event,
            other => panic!("expected LogMatchStart, got {:?}", other),
        };
        assert_eq!(start.map_name.as_deref(), Some("Desert_Main"));
        assert_eq!(start.characters.len(), 1);
        assert_eq!(start.characters[0].location.unwrap().x, 1000.5);

        let kill = match &events[1] {
            TelemetryEvent::PlayerKill(event) => event,
            other => panic!("expected LogPlayerKill, got {:?}", other),
        };
        assert_eq!(kill.killer.as_ref().unwrap().name, "Player1");
        assert_eq!(kill.victim.account_id, "account.b");
        assert_eq!(kill.damage_causer_name.as_deref(), Some("WeapHK416_C"));
    }

    #[test]
    fn test_unknown_event_kind_is_preserved() {
        let events: Vec<TelemetryEvent> = serde_json::from_str(TELEMETRY_BODY).unwrap();

        match &events[2] {
            TelemetryEvent::Other { kind, value } => {
                assert_eq!(kind, "LogArmorDestroy");
                assert_eq!(value["item"]["itemId"], "Item_Armor_C");
            }
            other => panic!("expected a catch-all event, got {:?}", other),
        }

        assert_eq!(events[2].kind(), "LogArmorDestroy");
    }

    #[test]
    fn test_event_round_trip_keeps_discriminator() {
        let events: Vec<TelemetryEvent> = serde_json::from_str(TELEMETRY_BODY).unwrap();

        let echoed = serde_json::to_value(&events).unwrap();
        assert_eq!(echoed[0]["_T"], "LogMatchStart");
        assert_eq!(echoed[1]["_T"], "LogPlayerKill");
        assert_eq!(echoed[2]["_T"], "LogArmorDestroy");

        let decoded: Vec<TelemetryEvent> = serde_json::from_value(echoed).unwrap();
        assert!(matches!(&decoded[1], TelemetryEvent::PlayerKill(_)));
    }
}
