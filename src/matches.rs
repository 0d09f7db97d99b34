use std::fmt::{self, Display, Formatter};

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::{empty_string_as_none, serialize_tagged, Links, Relationships};
use crate::region::Region;
use crate::telemetry::TelemetryEvent;
use crate::{Client, Result};

/// Document returned for a single match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchResponse {
    pub data: MatchData,
    #[serde(default)]
    pub included: Vec<MatchObject>,
    #[serde(default)]
    pub links: Option<Links>,
    #[serde(default)]
    pub meta: Option<Value>,
}

impl MatchResponse {
    /// Returns the rosters from the `included` array.
    pub fn rosters(&self) -> impl Iterator<Item = &Roster> {
        self.included.iter().filter_map(|object| match object {
            MatchObject::Roster(roster) => Some(roster),
            _ => None,
        })
    }

    /// Returns the participants from the `included` array.
    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.included.iter().filter_map(|object| match object {
            MatchObject::Participant(participant) => Some(participant),
            _ => None,
        })
    }

    /// Returns the url of the telemetry asset, if the document carries
    /// one. Pass it to [`MatchesClient::telemetry`] to fetch the event
    /// log.
    pub fn telemetry_url(&self) -> Option<&str> {
        self.included.iter().find_map(|object| match object {
            MatchObject::Asset(asset) => Some(asset.attributes.url.as_str()),
            _ => None,
        })
    }
}

/// The primary match resource.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchData {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub attributes: MatchAttributes,
    #[serde(default)]
    pub links: Option<Links>,
    #[serde(default)]
    pub relationships: Option<Relationships>,
}

/// Immutable match metadata.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAttributes {
    pub created_at: DateTime<Utc>,
    /// Match duration in seconds.
    pub duration: u32,
    pub game_mode: String,
    pub map_name: String,
    pub shard_id: String,
    pub title_id: String,
    #[serde(default)]
    pub is_custom_match: bool,
    /// The raw season state string; open on the wire. See
    /// [`MatchAttributes::season_state`] for the recognized values.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub season_state: Option<String>,
}

impl MatchAttributes {
    /// Returns the recognized [`SeasonState`], or `None` for an absent or
    /// unrecognized state string.
    pub fn season_state(&self) -> Option<SeasonState> {
        self.season_state.as_deref().and_then(SeasonState::from_state)
    }
}

/// The recognized values of the match `seasonState` attribute.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonState {
    Closed,
    Prepare,
    Progress,
}

impl SeasonState {
    pub fn as_state(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Prepare => "prepare",
            Self::Progress => "progress",
        }
    }

    pub fn from_state(state: &str) -> Option<Self> {
        match state {
            "closed" => Some(Self::Closed),
            "prepare" => Some(Self::Prepare),
            "progress" => Some(Self::Progress),
            _ => None,
        }
    }
}

impl Display for SeasonState {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_state())
    }
}

/// A resource from the match document's `included` array.
///
/// The `type` discriminator selects the variant. Resource types this
/// crate does not model decode into [`MatchObject::Unknown`] with the raw
/// value preserved; they never fail the surrounding document.
#[derive(Clone, Debug)]
pub enum MatchObject {
    Roster(Roster),
    Participant(Participant),
    Asset(Asset),
    Unknown(Value),
}

impl<'de> Deserialize<'de> for MatchObject {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;

        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();

        match kind.as_str() {
            "roster" => serde_json::from_value(value)
                .map(Self::Roster)
                .map_err(de::Error::custom),
            "participant" => serde_json::from_value(value)
                .map(Self::Participant)
                .map_err(de::Error::custom),
            "asset" => serde_json::from_value(value)
                .map(Self::Asset)
                .map_err(de::Error::custom),
            _ => Ok(Self::Unknown(value)),
        }
    }
}

impl Serialize for MatchObject {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Roster(roster) => serialize_tagged(serializer, "type", "roster", roster),
            Self::Participant(participant) => {
                serialize_tagged(serializer, "type", "participant", participant)
            }
            Self::Asset(asset) => serialize_tagged(serializer, "type", "asset", asset),
            Self::Unknown(value) => value.serialize(serializer),
        }
    }
}

/// A team's placement in a match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Roster {
    pub id: String,
    pub attributes: RosterAttributes,
    #[serde(default)]
    pub relationships: Option<Relationships>,
    #[serde(default)]
    pub links: Option<Links>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterAttributes {
    pub stats: RosterStats,
    pub shard_id: String,
    #[serde(default)]
    pub won: bool,
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterStats {
    pub rank: i32,
    pub team_id: i32,
}

/// A single player's appearance in a match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub attributes: ParticipantAttributes,
    #[serde(default)]
    pub relationships: Option<Relationships>,
    #[serde(default)]
    pub links: Option<Links>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantAttributes {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub actor: Option<String>,
    pub shard_id: String,
    #[serde(default)]
    pub stats: Option<ParticipantStats>,
}

/// Per-player stats of one match.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantStats {
    #[serde(rename = "DBNOs")]
    pub dbnos: u32,
    pub assists: u32,
    pub boosts: u32,
    pub damage_dealt: f64,
    pub death_type: String,
    pub headshot_kills: u32,
    pub heals: u32,
    pub kills: u32,
    pub longest_kill: f64,
    pub name: String,
    pub player_id: String,
    pub revives: u32,
    pub ride_distance: f64,
    pub swim_distance: f64,
    pub walk_distance: f64,
    pub time_survived: f64,
    pub win_place: u32,
}

/// A downloadable asset attached to a match, notably the telemetry event
/// log.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub attributes: AssetAttributes,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAttributes {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "URL")]
    pub url: String,
}

/// Client for the match endpoints.
#[derive(Copy, Clone, Debug)]
pub struct MatchesClient<'a> {
    client: &'a Client,
}

impl<'a> MatchesClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Returns the match with the given `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get(&self, region: Region, id: &str) -> Result<MatchResponse> {
        let req = self.client.request().uri(&match_uri(region, id)).build();

        self.client.send(req).await?.json().await
    }

    /// Fetches the telemetry event log from `url`.
    ///
    /// The url comes from the match document's telemetry asset (see
    /// [`MatchResponse::telemetry_url`]) and is used verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn telemetry(&self, url: &str) -> Result<Vec<TelemetryEvent>> {
        let req = self.client.request_to(url).build();

        self.client.send(req).await?.json().await
    }
}

fn match_uri(region: Region, id: &str) -> String {
    format!("/shards/{}/matches/{}", region, id)
}
