use branchguard_domain::model::PullRequestContext;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("read event payload: {path}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse pull_request payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// The subset of the `pull_request` webhook payload the gate needs.
#[derive(Debug, Deserialize)]
struct PullRequestEvent {
    number: u64,
    pull_request: PullRequest,
}

#[derive(Debug, Deserialize)]
struct PullRequest {
    base: GitRef,
    head: GitRef,
}

#[derive(Debug, Deserialize)]
struct GitRef {
    #[serde(rename = "ref")]
    name: String,
}

/// Extract the pull request context from a webhook payload.
///
/// Both refs are lower-cased on the way in; unknown payload fields are ignored.
pub fn parse_pull_request(payload: &str) -> Result<PullRequestContext, EventError> {
    let event: PullRequestEvent = serde_json::from_str(payload)?;
    Ok(PullRequestContext::new(
        event.number,
        event.pull_request.base.name,
        event.pull_request.head.name,
    ))
}

/// Read and parse the payload file the runner points at.
pub fn read_pull_request(path: &Utf8Path) -> Result<PullRequestContext, EventError> {
    let text = std::fs::read_to_string(path).map_err(|source| EventError::Io {
        path: path.to_owned(),
        source,
    })?;
    parse_pull_request(&text)
}
