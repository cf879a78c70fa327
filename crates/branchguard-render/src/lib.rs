//! Rendering utilities for CI surfaces (workflow commands, plain logs, Markdown).

#![forbid(unsafe_code)]

mod gha;
mod markdown;
mod model;
mod plain;

pub use gha::{escape_data, render_workflow_commands};
pub use markdown::render_markdown;
pub use model::{
    RenderableLevel, RenderableMessage, RenderablePullRequest, RenderableReport,
    RenderableVerdictStatus,
};
pub use plain::render_plain;
