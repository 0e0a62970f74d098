//! Summarizer core: pure state machine and view-model helpers.
mod effect;
mod filter;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, UploadHandle};
pub use filter::{is_accepted, ACCEPTED_EXTENSIONS, ACCEPTED_MIME_TYPES};
pub use msg::Msg;
pub use state::{
    AppState, BackendStatus, FileCandidate, FileId, InputMode, StagedFile, StagedStatus, Summary,
    SummaryStatistics,
};
pub use update::{update, OFFLINE_GUIDANCE};
pub use view_model::{
    format_file_size, AddStats, AppViewModel, StagedFileRow, StatisticsView, SummaryView,
};
