use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::{Links, ResourceRef};
use crate::{Client, Result};

/// Document listing all tournaments.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TournamentsResponse {
    pub data: Vec<Tournament>,
    #[serde(default)]
    pub links: Option<Links>,
    #[serde(default)]
    pub meta: Option<Value>,
}

/// Document returned for a single tournament.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TournamentResponse {
    pub data: Tournament,
    /// The tournament's matches, as bare resource references.
    #[serde(default)]
    pub included: Vec<ResourceRef>,
    #[serde(default)]
    pub links: Option<Links>,
    #[serde(default)]
    pub meta: Option<Value>,
}

/// A tournament resource.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    #[serde(default)]
    pub attributes: Option<TournamentAttributes>,
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentAttributes {
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Client for the tournament endpoints.
#[derive(Copy, Clone, Debug)]
pub struct TournamentsClient<'a> {
    client: &'a Client,
}

impl<'a> TournamentsClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Returns all tournaments.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self) -> Result<TournamentsResponse> {
        let req = self.client.request().uri("/tournaments").build();

        self.client.send(req).await?.json().await
    }

    /// Returns the tournament with the given `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get(&self, id: &str) -> Result<TournamentResponse> {
        let req = self
            .client
            .request()
            .uri(&format!("/tournaments/{}", id))
            .build();

        self.client.send(req).await?.json().await
    }
}

#[cfg(test)]
mod tests {
    use super::{TournamentResponse, TournamentsResponse};

    #[test]
    fn test_decode_tournaments() {
        let body = r#"{
            "data": [
                {"type": "tournament", "id": "eu-pgi18", "attributes": {"createdAt": "2018-07-25T00:00:00Z"}},
                {"type": "tournament", "id": "na-pit2", "attributes": {"createdAt": "2018-08-18T00:00:00Z"}}
            ]
        }"#;

        let resp: TournamentsResponse = serde_json::from_str(body).unwrap();

        assert_eq!(resp.data.len(), 2);
        assert_eq!(resp.data[0].id, "eu-pgi18");
        assert!(resp.data[0].attributes.unwrap().created_at.is_some());
    }

    #[test]
    fn test_decode_tournament_with_matches() {
        let body = r#"{
            "data": {"type": "tournament", "id": "eu-pgi18"},
            "included": [
                {"type": "match", "id": "m-1"},
                {"type": "match", "id": "m-2"}
            ],
            "meta": {}
        }"#;

        let resp: TournamentResponse = serde_json::from_str(body).unwrap();

        assert_eq!(resp.data.id, "eu-pgi18");
        assert_eq!(resp.included.len(), 2);
        assert_eq!(resp.included[0].kind, "match");
        assert_eq!(resp.included[1].id, "m-2");
    }
}
