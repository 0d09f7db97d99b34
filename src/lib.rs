//! # pubg-api
//!
//! A typed client for the PUBG statistics API. All endpoints return
//! JSON:API shaped documents which are decoded into typed response
//! envelopes.
//!
//! Important types:
//! - [`Client`]: The entry point. Holds the api key and the HTTP transport
//! and hands out per-resource clients.
//! - [`Region`]: The platform/locale shard a request is scoped to.
//! - [`Error`]: The error type returned by every operation, splitting
//! transport failures, non-2xx responses and undecodable bodies.
//!
//! ```no_run
//! use pubg_api::{Client, Region};
//!
//! # async fn run() -> pubg_api::Result<()> {
//! let client = Client::new("my-api-key");
//! let status = client.status().await?;
//! let matches = client
//!     .matches()
//!     .get(Region::PcEurope, "39a605a9-f497-42ad-ba29-b13bf88f5ad7")
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod error;
pub mod http;
pub mod matches;
pub mod players;
pub mod region;
pub mod seasons;
pub mod status;
pub mod telemetry;
pub mod tournaments;

pub use error::{ApiError, DecodeError, Error};
pub use region::Region;

use crate::error::check_status;
use crate::http::{Request, RequestBuilder, Response};
use crate::matches::MatchesClient;
use crate::players::PlayersClient;
use crate::seasons::SeasonsClient;
use crate::status::Status;
use crate::tournaments::TournamentsClient;

/// A [`Result`] with the crate [`Error`] as its error type.
pub type Result<T> = std::result::Result<T, Error>;

const API_BASE: &str = "https://api.playbattlegrounds.com";
const ACCEPT: &str = "application/vnd.api+json";

/// Client for the PUBG statistics API.
///
/// Holds the immutable api key and the injected HTTP transport and hands
/// out per-resource clients. All operations take `&self` and keep no
/// per-call state, so a `Client` can be shared freely between tasks.
#[derive(Clone, Debug)]
pub struct Client {
    http: http::Client,
    api_key: String,
    base_url: String,
}

impl Client {
    /// Creates a new `Client` with a default transport.
    pub fn new<T>(api_key: T) -> Self
    where
        T: ToString,
    {
        Self::with_transport(api_key, http::Client::new())
    }

    /// Creates a new `Client` using the given transport.
    ///
    /// Connection pooling, TLS and timeouts are the transport's concern.
    pub fn with_transport<T>(api_key: T, http: http::Client) -> Self
    where
        T: ToString,
    {
        Self {
            http,
            api_key: api_key.to_string(),
            base_url: API_BASE.to_owned(),
        }
    }

    pub fn players(&self) -> PlayersClient<'_> {
        PlayersClient::new(self)
    }

    pub fn matches(&self) -> MatchesClient<'_> {
        MatchesClient::new(self)
    }

    pub fn seasons(&self) -> SeasonsClient<'_> {
        SeasonsClient::new(self)
    }

    pub fn tournaments(&self) -> TournamentsClient<'_> {
        TournamentsClient::new(self)
    }

    /// Returns the current platform [`Status`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn status(&self) -> Result<Status> {
        let req = self.request().uri("/status").build();

        self.send(req).await?.json().await
    }

    /// Returns a [`RequestBuilder`] for a path relative to the API host.
    pub(crate) fn request(&self) -> RequestBuilder {
        self.request_to(&self.base_url)
    }

    /// Returns a [`RequestBuilder`] for a caller-supplied absolute url.
    ///
    /// Used for telemetry assets, whose urls come from a match document
    /// and are used verbatim. The auth and accept headers are attached
    /// either way.
    pub(crate) fn request_to(&self, uri: &str) -> RequestBuilder {
        RequestBuilder::new(uri.to_owned())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Accept", ACCEPT)
    }

    /// Dispatches a single request and validates the response status.
    ///
    /// Exactly one request per call; rate-limit handling (429) is left to
    /// the caller.
    pub(crate) async fn send(&self, request: Request) -> Result<Response> {
        log::debug!("GET {}", request.uri());

        let resp = self.http.send(request).await?;
        check_status(resp.status())?;

        Ok(resp)
    }
}
