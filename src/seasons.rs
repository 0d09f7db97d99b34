use serde::{Deserialize, Serialize};

use crate::region::Region;
use crate::{Client, Result};

/// Document listing the seasons known to a shard.
///
/// The document-level `links` and `meta` carry nothing useful here and
/// are ignored.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeasonResponse {
    pub data: Vec<Season>,
}

/// A season resource.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Season {
    #[serde(rename = "type")]
    pub kind: String,
    /// The season id, used as the `season` segment of a player lookup.
    pub id: String,
    pub attributes: SeasonAttributes,
}

#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonAttributes {
    #[serde(default)]
    pub is_current_season: bool,
    #[serde(default)]
    pub is_offseason: bool,
}

/// Client for the season endpoints.
#[derive(Copy, Clone, Debug)]
pub struct SeasonsClient<'a> {
    client: &'a Client,
}

impl<'a> SeasonsClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Returns all seasons of the given shard.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self, region: Region) -> Result<SeasonResponse> {
        let req = self.client.request().uri(&seasons_uri(region)).build();

        self.client.send(req).await?.json().await
    }
}

fn seasons_uri(region: Region) -> String {
    format!("/shards/{}/seasons", region)
}
