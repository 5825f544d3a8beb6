//! Client for the color-naming service.

use crate::{
    COLOR_API_URL,
    palette::{ColorSwatch, Rgb},
};
use async_trait::async_trait;
use log::trace;
use serde::{Deserialize, Serialize};

/// Color to be named, in HSL coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display)]
#[display("{hue},{saturation},{lightness}")]
pub struct HslRequest {
    /// Degrees, 0-360.
    pub hue: u16,
    /// Percent, 0-100.
    pub saturation: u8,
    /// Percent, 0-100.
    pub lightness: u8,
}

/// Subset of the service's response that the palette needs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorApiResponse {
    pub name: ColorName,
    pub rgb: ColorRgb,
    pub hsl: ColorHsl,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorName {
    pub value: String,
    #[serde(default)]
    pub closest_named_hex: Option<String>,
    #[serde(default)]
    pub exact_match_name: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorRgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorHsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl From<ColorApiResponse> for ColorSwatch {
    fn from(response: ColorApiResponse) -> Self {
        let ColorRgb { r, g, b } = response.rgb;
        ColorSwatch::new(response.name.value, Rgb::new(r, g, b), response.hsl.h)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("API request failed: {0}")]
    Status(u16),
    #[error("API request failed: {0}")]
    Transport(String),
    #[error("API request failed: malformed response: {0}")]
    Decode(String),
}

/// Names a single color. Implementations must not start any work before the
/// returned future is polled.
#[async_trait(?Send)]
pub trait ColorLookup {
    async fn lookup(&self, request: HslRequest) -> Result<ColorApiResponse, LookupError>;
}

/// [`ColorLookup`] backed by HTTP `GET {base_url}?hsl=h,s,l&format=json`.
#[derive(Clone, Debug)]
pub struct HttpColorLookup {
    client: reqwest::Client,
    base_url: String,
}

impl HttpColorLookup {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for HttpColorLookup {
    fn default() -> Self {
        Self::new(COLOR_API_URL)
    }
}

#[async_trait(?Send)]
impl ColorLookup for HttpColorLookup {
    async fn lookup(&self, request: HslRequest) -> Result<ColorApiResponse, LookupError> {
        trace!("Looking up hsl={request}");
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("hsl", request.to_string()), ("format", "json".to_string())])
            .send()
            .await
            .map_err(|err| LookupError::Transport(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }
        response
            .json::<ColorApiResponse>()
            .await
            .map_err(|err| LookupError::Decode(err.to_string()))
    }
}
