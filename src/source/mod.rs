//! Rule set sources
//!
//! A rule set can sit on disk or be fetched straight from the upstream
//! repository, so the commands only deal with [`RuleSource`] and never care
//! which one they got.

use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info};
use url::Url;

use crate::error::{RuleportError, SourceError};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Where a Gitleaks rule set comes from
#[derive(Debug, Clone)]
pub enum RuleSource {
    /// A rule set file on the local filesystem
    File(PathBuf),
    /// A rule set fetched over HTTPS, typically the upstream default config
    Url(Url),
}

impl RuleSource {
    /// Build a source from the CLI arguments. An explicit `--url` wins over
    /// the positional path.
    pub fn from_cli(source: PathBuf, url: Option<Url>) -> Self {
        match url {
            Some(url) => Self::Url(url),
            None => Self::File(source),
        }
    }

    /// Load the raw rule set text
    pub async fn load(&self) -> Result<String, RuleportError> {
        match self {
            Self::File(path) => {
                debug!(path = %path.display(), "Reading rule set");
                std::fs::read_to_string(path).map_err(|e| {
                    RuleportError::Source(SourceError::FileRead {
                        path: path.display().to_string(),
                        source: e,
                    })
                })
            }
            Self::Url(url) => fetch(url).await,
        }
    }

    /// Short form of the source for summaries and reports
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Url(url) => url.to_string(),
        }
    }
}

async fn fetch(url: &Url) -> Result<String, RuleportError> {
    info!(url = %url, "Fetching rule set");

    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(concat!("ruleport/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| {
            RuleportError::Source(SourceError::Fetch {
                url: url.to_string(),
                source: e,
            })
        })?;

    let response = client.get(url.as_str()).send().await.map_err(|e| {
        RuleportError::Source(SourceError::Fetch {
            url: url.to_string(),
            source: e,
        })
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(RuleportError::Source(SourceError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        }));
    }

    response.text().await.map_err(|e| {
        RuleportError::Source(SourceError::Fetch {
            url: url.to_string(),
            source: e,
        })
    })
}
