use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Probe the backend health endpoint once.
    CheckHealth,
    /// Submit content for summarization. Exactly one of `text` / `files`
    /// carries the payload: when `files` is non-empty, `text` is empty.
    Submit {
        text: String,
        files: Vec<UploadHandle>,
    },
}

/// What the IO layer needs to read and upload one staged file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadHandle {
    pub name: String,
    pub path: PathBuf,
    pub mime: Option<String>,
}
