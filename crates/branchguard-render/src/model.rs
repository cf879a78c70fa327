#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableLevel {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdictStatus {
    Pass,
    Fail,
    Skip,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableMessage {
    pub level: RenderableLevel,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderablePullRequest {
    pub number: u64,
    /// The base branch, labelled "source".
    pub source: String,
    /// The head branch, labelled "target".
    pub target: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdictStatus,
    pub event: String,
    pub pull_request: Option<RenderablePullRequest>,
    pub policy_mode: Option<String>,
    pub messages: Vec<RenderableMessage>,
    pub failure: Option<String>,
}
