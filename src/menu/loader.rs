use std::{fmt, fs, path::PathBuf, time::Duration};

use reqwest::{
    blocking::Client,
    header::{HeaderMap, HeaderValue, CACHE_CONTROL, PRAGMA},
};
use tracing::instrument;

use crate::errors::LoadError;

use super::document::MenuDocument;

/// Where the menu document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuSource {
    Http(String),
    File(PathBuf),
}

impl MenuSource {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            MenuSource::Http(trimmed.to_string())
        } else if let Some(path) = trimmed.strip_prefix("file://") {
            MenuSource::File(PathBuf::from(path))
        } else {
            MenuSource::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for MenuSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuSource::Http(url) => write!(f, "{url}"),
            MenuSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Seam between the renderer and whatever produces a [`MenuDocument`].
pub trait DocumentLoader {
    fn load(&self, source: &MenuSource) -> Result<MenuDocument, LoadError>;
}

/// Fetches the menu fresh on every call (no cached responses) and parses it.
#[derive(Debug, Clone)]
pub struct MenuDataLoader {
    timeout: Option<Duration>,
}

impl MenuDataLoader {
    pub fn new() -> Self {
        Self { timeout: None }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn client(&self) -> Result<Client, LoadError> {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache, no-store"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| LoadError::Unreachable(err.to_string()))
    }

    fn fetch_text(&self, source: &MenuSource) -> Result<String, LoadError> {
        match source {
            MenuSource::Http(url) => {
                let response = self.client()?.get(url).send()?;
                let status = response.status();
                if !status.is_success() {
                    return Err(LoadError::Status(status.as_u16()));
                }
                Ok(response.text()?)
            }
            MenuSource::File(path) => fs::read_to_string(path).map_err(|err| {
                LoadError::Unreachable(format!("cannot read {}: {err}", path.display()))
            }),
        }
    }
}

impl Default for MenuDataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentLoader for MenuDataLoader {
    #[instrument(skip(self), fields(source = %source))]
    fn load(&self, source: &MenuSource) -> Result<MenuDocument, LoadError> {
        let raw = self.fetch_text(source)?;
        let document = MenuDocument::from_json_str(&raw)?;
        tracing::debug!(categories = document.len(), "menu document parsed");
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_source_kinds() {
        assert_eq!(
            MenuSource::parse("https://example.com/base.json"),
            MenuSource::Http("https://example.com/base.json".into())
        );
        assert_eq!(
            MenuSource::parse("file:///srv/base.json"),
            MenuSource::File(PathBuf::from("/srv/base.json"))
        );
        assert_eq!(
            MenuSource::parse(" base.json "),
            MenuSource::File(PathBuf::from("base.json"))
        );
    }

    #[test]
    fn missing_file_is_unreachable() {
        let loader = MenuDataLoader::new();
        let err = loader
            .load(&MenuSource::File(PathBuf::from("/definitely/not/here.json")))
            .unwrap_err();
        assert!(matches!(err, LoadError::Unreachable(_)));
    }
}
