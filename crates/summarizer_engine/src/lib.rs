//! Summarizer engine: HTTP client for the backend and effect execution.
mod client;
mod engine;
mod types;

pub use client::{ApiSettings, ReqwestApi, SummaryApi};
pub use engine::EngineHandle;
pub use types::{
    ApiError, EngineEvent, FailureKind, SubmitFile, SummaryResponse, SummaryStatistics,
};
