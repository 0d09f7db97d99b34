use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::{empty_string_as_none, Links, Relationships};
use crate::region::Region;
use crate::{Client, Result};

/// Document returned for a single player lookup.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerResponse {
    pub data: Player,
    #[serde(default)]
    pub links: Option<Links>,
    #[serde(default)]
    pub meta: Option<Value>,
}

/// Document returned for a filtered player listing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayersResponse {
    pub data: Vec<Player>,
    #[serde(default)]
    pub links: Option<Links>,
    #[serde(default)]
    pub meta: Option<Value>,
}

/// A player resource.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub attributes: PlayerAttributes,
    #[serde(default)]
    pub relationships: Option<Relationships>,
    #[serde(default)]
    pub links: Option<Links>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAttributes {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub name: Option<String>,
    pub shard_id: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub patch_version: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub title_id: Option<String>,
}

/// Query filter for [`PlayersClient::list`].
///
/// An empty list adds no query parameter of its kind.
#[derive(Clone, Debug, Default)]
pub struct PlayerFilter {
    player_ids: Vec<String>,
    player_names: Vec<String>,
}

impl PlayerFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by player ids.
    pub fn ids<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        self.player_ids = ids.into_iter().map(|id| id.to_string()).collect();
        self
    }

    /// Filters by player display names.
    pub fn names<I, T>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        self.player_names = names.into_iter().map(|name| name.to_string()).collect();
        self
    }

    /// Renders the query string, empty for an empty filter.
    ///
    /// Values are comma-joined and used pre-encoded; they must not be
    /// percent-encoded a second time.
    fn to_query(&self) -> String {
        let mut params = Vec::new();

        if !self.player_ids.is_empty() {
            params.push(format!("filter[playerIds]={}", self.player_ids.join(",")));
        }

        if !self.player_names.is_empty() {
            params.push(format!(
                "filter[playerNames]={}",
                self.player_names.join(",")
            ));
        }

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// Client for the player endpoints.
#[derive(Copy, Clone, Debug)]
pub struct PlayersClient<'a> {
    client: &'a Client,
}

impl<'a> PlayersClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Returns the player with the given `id`.
    ///
    /// When `season` is given the lookup is scoped to that season;
    /// otherwise the API's current season applies.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get(
        &self,
        region: Region,
        id: &str,
        season: Option<&str>,
    ) -> Result<PlayerResponse> {
        let req = self
            .client
            .request()
            .uri(&player_uri(region, id, season))
            .build();

        self.client.send(req).await?.json().await
    }

    /// Returns the players matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self, region: Region, filter: &PlayerFilter) -> Result<PlayersResponse> {
        let req = self
            .client
            .request()
            .uri(&players_uri(region, filter))
            .build();

        self.client.send(req).await?.json().await
    }
}

fn player_uri(region: Region, id: &str, season: Option<&str>) -> String {
    let mut uri = format!("/shards/{}/players/{}", region, id);

    if let Some(season) = season.filter(|s| !s.is_empty()) {
        uri.push_str(&format!("/seasons/{}", season));
    }

    uri
}

fn players_uri(region: Region, filter: &PlayerFilter) -> String {
    format!("/shards/{}/players{}", region, filter.to_query())
}
