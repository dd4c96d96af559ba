//! API Configuration
//!
//! Endpoint and log settings, read from build-time environment variables
//! with fallbacks derived from the page location.

use log::LevelFilter;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::models::ProductId;

/// Port the Product API listens on when no base URL is configured
pub const DEFAULT_API_PORT: u16 = 3000;

/// Collection path of the Product resource
pub const DEFAULT_COLLECTION: &str = "products";

/// Characters escaped inside a single URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    collection: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into().trim_matches('/').to_string();
        self
    }

    /// `CATALOG_API_URL` / `CATALOG_API_COLLECTION` at build time, else the
    /// page's own host on [`DEFAULT_API_PORT`]
    pub fn from_environment() -> Self {
        let base_url = option_env!("CATALOG_API_URL")
            .map(str::to_string)
            .unwrap_or_else(location_base_url);
        let config = Self::new(base_url);
        match option_env!("CATALOG_API_COLLECTION") {
            Some(collection) => config.with_collection(collection),
            None => config,
        }
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, self.collection)
    }

    pub fn item_url(&self, id: &ProductId) -> String {
        format!(
            "{}/{}",
            self.collection_url(),
            utf8_percent_encode(id.as_str(), PATH_SEGMENT)
        )
    }
}

fn location_base_url() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return format!("http://127.0.0.1:{}", DEFAULT_API_PORT),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// `CATALOG_LOG_LEVEL` at build time, `info` when unset
pub fn log_level() -> LevelFilter {
    parse_log_level(option_env!("CATALOG_LOG_LEVEL"))
}

pub fn parse_log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}
