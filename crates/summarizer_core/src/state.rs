use std::path::PathBuf;

use crate::view_model::{build_view, AddStats, AppViewModel};

pub type FileId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendStatus {
    #[default]
    Checking,
    Online,
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    File,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagedStatus {
    Pending,
    Completed,
    Error,
}

/// A file offered by the platform layer, before the acceptance filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub name: String,
    pub path: PathBuf,
    pub size_bytes: u64,
    /// MIME type as declared by the source, if any.
    pub mime: Option<String>,
}

/// A file accepted by the filter and held locally pending submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub id: FileId,
    pub name: String,
    pub path: PathBuf,
    pub size_bytes: u64,
    pub mime: Option<String>,
    pub status: StagedStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub summary: String,
    pub key_points: Vec<String>,
    pub statistics: Option<SummaryStatistics>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStatistics {
    pub original_length: u64,
    pub summary_length: u64,
    /// Summary length over original length, as a percentage.
    pub compression_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub(crate) backend: BackendStatus,
    pub(crate) mode: InputMode,
    pub(crate) loading: bool,
    pub(crate) error: Option<String>,
    pub(crate) result: Option<Summary>,
    pub(crate) staged: Vec<StagedFile>,
    pub(crate) text: String,
    pub(crate) last_add_stats: Option<AddStats>,
    /// Which collector produced the submission currently in flight.
    pub(crate) in_flight: Option<InputMode>,
    next_file_id: FileId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        build_view(self)
    }

    /// Returns whether a re-render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        let was = self.dirty;
        self.dirty = false;
        was
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_backend(&mut self, backend: BackendStatus) {
        self.backend = backend;
        self.mark_dirty();
    }

    /// Runs candidates through the acceptance filter and stages the survivors.
    ///
    /// Each accepted file gets a fresh id from a session-monotonic counter, so
    /// no two staged files ever share one. Insertion order is preserved.
    pub(crate) fn stage_candidates(&mut self, candidates: Vec<FileCandidate>) -> AddStats {
        let mut stats = AddStats::default();
        for candidate in candidates {
            if !crate::filter::is_accepted(&candidate.name, candidate.mime.as_deref()) {
                stats.rejected += 1;
                continue;
            }
            self.next_file_id += 1;
            self.staged.push(StagedFile {
                id: self.next_file_id,
                name: candidate.name,
                path: candidate.path,
                size_bytes: candidate.size_bytes,
                mime: candidate.mime,
                status: StagedStatus::Pending,
            });
            stats.accepted += 1;
        }
        self.last_add_stats = Some(stats);
        self.mark_dirty();
        stats
    }

    pub(crate) fn remove_staged(&mut self, id: FileId) {
        let before = self.staged.len();
        self.staged.retain(|file| file.id != id);
        if self.staged.len() != before {
            self.mark_dirty();
        }
    }

    /// Clears any previous outcome and marks a submission as in flight.
    pub(crate) fn begin_submission(&mut self, mode: InputMode) {
        self.error = None;
        self.result = None;
        self.loading = true;
        self.in_flight = Some(mode);
        self.mark_dirty();
    }

    pub(crate) fn finish_with_summary(&mut self, summary: Summary) {
        self.loading = false;
        self.error = None;
        self.result = Some(summary);
        if self.in_flight.take() == Some(InputMode::File) {
            for file in &mut self.staged {
                file.status = StagedStatus::Completed;
            }
        }
        self.mark_dirty();
    }

    pub(crate) fn finish_with_error(&mut self, message: String, connectivity: bool) {
        self.loading = false;
        self.error = Some(message);
        if self.in_flight.take() == Some(InputMode::File) {
            for file in &mut self.staged {
                file.status = StagedStatus::Error;
            }
        }
        if connectivity {
            self.backend = BackendStatus::Offline;
        }
        self.mark_dirty();
    }
}
