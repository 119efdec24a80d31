//! Loading the promotional theme records from the static content endpoint.
//!
//! The hero fires one load per mount; there is no retry. A failed load is
//! logged and the previously displayed list (usually empty) is kept, so the
//! page degrades to showing nothing extra rather than an error surface.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Site-relative path of the generated themes document.
const THEMES_PATH: &str = "/generated_contents/theme/themes.json";

/// How many themes the hero shows, regardless of how many are fetched.
pub const FEATURED_THEME_COUNT: usize = 3;

/// One research-area record, as emitted by the content generator.
/// Immutable once loaded; replaced wholesale on re-fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    pub name_en: String,
    pub name_ja: String,
    pub thumbnail: String,
}

/// Failure fetching or decoding the themes document. Recovered locally by
/// logging; never surfaced to the viewer.
#[derive(Debug)]
pub enum LoadError {
    Fetch(String),
    Parse(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(detail) => write!(f, "fetching themes failed: {detail}"),
            Self::Parse(detail) => write!(f, "decoding themes failed: {detail}"),
        }
    }
}

impl std::error::Error for LoadError {}

/// Prefix the deployment base path onto a site-relative asset path.
///
/// The base path is baked in at compile time (`MORINOLAB_BASE_PATH`), empty
/// for root deployments. Mirrors the path rewriting the image pipeline
/// applies everywhere else.
pub fn resolve_image_path(path: &str) -> String {
    let base = option_env!("MORINOLAB_BASE_PATH")
        .unwrap_or("")
        .trim_end_matches('/');
    format!("{base}{path}")
}

/// Decode a themes document. Source order is preserved.
pub fn parse_themes(body: &str) -> Result<Vec<Theme>, LoadError> {
    serde_json::from_str(body).map_err(|err| LoadError::Parse(err.to_string()))
}

/// Fetch the themes document from the content endpoint.
#[cfg(target_arch = "wasm32")]
pub async fn load_themes() -> Result<Vec<Theme>, LoadError> {
    let url = resolve_image_path(THEMES_PATH);
    let response = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(|err| LoadError::Fetch(err.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Fetch(format!(
            "GET {url} returned {}",
            response.status()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|err| LoadError::Fetch(err.to_string()))?;
    parse_themes(&body)
}

/// Read the themes document from the site's content directory (server-side
/// rendering and tooling; the deployed site fetches instead).
#[cfg(not(target_arch = "wasm32"))]
pub async fn load_themes() -> Result<Vec<Theme>, LoadError> {
    let path = format!("public{THEMES_PATH}");
    let body =
        std::fs::read_to_string(&path).map_err(|err| LoadError::Fetch(format!("{path}: {err}")))?;
    parse_themes(&body)
}

/// The slice of themes the hero displays: the first
/// [`FEATURED_THEME_COUNT`], in source order; fewer if fewer were loaded.
pub fn featured(mut themes: Vec<Theme>) -> Vec<Theme> {
    themes.truncate(FEATURED_THEME_COUNT);
    themes
}

/// Fold a load outcome into the displayed list. Success replaces it with the
/// featured slice; failure logs and leaves the previous list unchanged.
pub fn apply_load(current: &mut Vec<Theme>, result: Result<Vec<Theme>, LoadError>) {
    match result {
        Ok(themes) => *current = featured(themes),
        Err(err) => log_load_error(&err),
    }
}

#[cfg(target_arch = "wasm32")]
fn log_load_error(err: &LoadError) {
    gloo_console::error!(format!("[content] {err}"));
}

#[cfg(not(target_arch = "wasm32"))]
fn log_load_error(err: &LoadError) {
    eprintln!("[content] {err}");
}
