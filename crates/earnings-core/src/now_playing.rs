//! Spotify "currently playing" lookup for the optional now-playing widget.
//!
//! Independent of the earnings engine: a failed fetch only changes the
//! widget's own state.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::NowPlayingError;

pub const SPOTIFY_API_BASE: &str = "https://api.spotify.com";
pub const TOKEN_ENV: &str = "SPOTIFY_ACCESS_TOKEN";

/// Track currently playing, reduced to what the widget shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Track {
    pub name: String,
    pub artists: Vec<String>,
    pub album_art_url: Option<String>,
    pub external_url: Option<String>,
}

impl Track {
    pub fn artist_line(&self) -> String {
        self.artists.join(", ")
    }
}

/// Widget state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "detail", rename_all = "lowercase")]
pub enum NowPlayingState {
    /// No token configured; nothing is fetched.
    Disabled,
    Loading,
    /// `None` when the player is idle or paused.
    Ready(Option<Track>),
    Failed(String),
}

impl NowPlayingState {
    pub fn from_result(result: Result<Option<Track>, NowPlayingError>) -> Self {
        match result {
            Ok(track) => NowPlayingState::Ready(track),
            Err(NowPlayingError::MissingToken) => NowPlayingState::Disabled,
            Err(e) => {
                tracing::warn!(error = %e, "now playing fetch failed");
                NowPlayingState::Failed(e.to_string())
            }
        }
    }
}

#[derive(Deserialize)]
struct CurrentlyPlaying {
    is_playing: bool,
    item: Option<Item>,
}

#[derive(Deserialize)]
struct Item {
    name: String,
    #[serde(default)]
    artists: Vec<Named>,
    album: Option<Album>,
    external_urls: Option<ExternalUrls>,
}

#[derive(Deserialize)]
struct Named {
    name: String,
}

#[derive(Deserialize)]
struct Album {
    #[serde(default)]
    images: Vec<Image>,
}

#[derive(Deserialize)]
struct Image {
    url: String,
}

#[derive(Deserialize)]
struct ExternalUrls {
    spotify: Option<String>,
}

pub struct NowPlayingClient {
    client: Client,
    base: Url,
    token: String,
}

impl NowPlayingClient {
    /// # Errors
    /// Returns an error if `base` is not a valid URL.
    pub fn new(base: &str, token: impl Into<String>) -> Result<Self, NowPlayingError> {
        Ok(Self {
            client: Client::new(),
            base: Url::parse(base)?,
            token: token.into(),
        })
    }

    /// Client against the public API using the token from [`TOKEN_ENV`].
    ///
    /// # Errors
    /// Returns [`NowPlayingError::MissingToken`] if the variable is unset or empty.
    pub fn from_env() -> Result<Self, NowPlayingError> {
        let token = std::env::var(TOKEN_ENV)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or(NowPlayingError::MissingToken)?;
        Self::new(SPOTIFY_API_BASE, token)
    }

    /// Fetch the current track. `Ok(None)` when nothing is playing.
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-success status.
    pub async fn fetch(&self) -> Result<Option<Track>, NowPlayingError> {
        let url = self.base.join("/v1/me/player/currently-playing")?;
        let resp = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        if resp.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(NowPlayingError::Status {
                status: resp.status().as_u16(),
            });
        }

        let body: CurrentlyPlaying = resp.json().await?;
        if !body.is_playing {
            return Ok(None);
        }
        Ok(body.item.map(|item| Track {
            name: item.name,
            artists: item.artists.into_iter().map(|a| a.name).collect(),
            album_art_url: item
                .album
                .and_then(|a| a.images.into_iter().next())
                .map(|i| i.url),
            external_url: item.external_urls.and_then(|u| u.spotify),
        }))
    }

    /// One fetch, folded into the widget's state.
    pub async fn load_state(&self) -> NowPlayingState {
        NowPlayingState::from_result(self.fetch().await)
    }
}
