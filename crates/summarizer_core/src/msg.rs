#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Application started; triggers the one-shot backend health probe.
    Started,
    /// Outcome of the health probe (or a later connectivity signal).
    HealthChecked {
        online: bool,
        error: Option<String>,
    },
    /// User switched between file upload and text entry.
    ModeSelected(crate::InputMode),
    /// User edited the text buffer.
    TextChanged(String),
    /// User submitted the text buffer for summarization.
    TextSubmitted,
    /// Candidate files arrived via drag-and-drop or the file picker.
    FilesAdded(Vec<crate::FileCandidate>),
    /// User removed a staged file.
    FileRemoved(crate::FileId),
    /// User submitted the staged files for summarization.
    FilesSubmitted,
    /// Backend returned a summary.
    SummaryReady(crate::Summary),
    /// Submission failed; `connectivity` marks transport-level failures.
    SummaryFailed {
        message: String,
        connectivity: bool,
    },
}
