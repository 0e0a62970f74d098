use crate::{AppState, BackendStatus, FileId, InputMode, StagedStatus, Summary};

/// Outcome of the last drag-and-drop or file-picker batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddStats {
    pub accepted: usize,
    pub rejected: usize,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub backend: BackendStatus,
    pub mode: InputMode,
    pub loading: bool,
    pub error: Option<String>,
    pub staged: Vec<StagedFileRow>,
    pub last_add_stats: Option<AddStats>,
    pub text_chars: usize,
    /// Whitespace-delimited token count; an approximation, not a linguistic
    /// word count.
    pub text_words: usize,
    pub can_submit_text: bool,
    pub can_submit_files: bool,
    pub result: Option<SummaryView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFileRow {
    pub id: FileId,
    pub name: String,
    pub size_label: String,
    pub status: StagedStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SummaryView {
    pub key_points: Vec<String>,
    pub paragraphs: Vec<String>,
    pub statistics: Option<StatisticsView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatisticsView {
    pub original_length: u64,
    pub summary_length: u64,
    /// Compression ratio rounded to the nearest integer percent.
    pub compression_percent: u32,
}

pub(crate) fn build_view(state: &AppState) -> AppViewModel {
    AppViewModel {
        backend: state.backend,
        mode: state.mode,
        loading: state.loading,
        error: state.error.clone(),
        staged: state
            .staged
            .iter()
            .map(|file| StagedFileRow {
                id: file.id,
                name: file.name.clone(),
                size_label: format_file_size(file.size_bytes),
                status: file.status,
            })
            .collect(),
        last_add_stats: state.last_add_stats,
        text_chars: state.text.chars().count(),
        text_words: state.text.split_whitespace().count(),
        can_submit_text: !state.loading && !state.text.trim().is_empty(),
        can_submit_files: !state.loading && !state.staged.is_empty(),
        result: state.result.as_ref().map(build_summary_view),
    }
}

fn build_summary_view(summary: &Summary) -> SummaryView {
    SummaryView {
        key_points: summary.key_points.clone(),
        paragraphs: split_paragraphs(&summary.summary),
        statistics: summary.statistics.map(|stats| StatisticsView {
            original_length: stats.original_length,
            summary_length: stats.summary_length,
            compression_percent: stats.compression_ratio.round().max(0.0) as u32,
        }),
    }
}

/// Splits summary text into paragraphs on line breaks; lines that are blank
/// after trimming are dropped.
fn split_paragraphs(summary: &str) -> Vec<String> {
    summary
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Human-readable file size, e.g. "1.5 KB".
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{} {}", rounded as u64, UNITS[unit])
    } else {
        let text = format!("{rounded:.2}");
        let text = text.trim_end_matches('0').trim_end_matches('.');
        format!("{} {}", text, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::{format_file_size, split_paragraphs};
    use crate::{Summary, SummaryStatistics};

    #[test]
    fn paragraphs_split_on_line_breaks_and_drop_blanks() {
        assert_eq!(split_paragraphs("A\n\nB"), vec!["A", "B"]);
        assert_eq!(split_paragraphs("  one  \n   \n\ttwo\n"), vec!["one", "two"]);
        assert!(split_paragraphs("\n \n").is_empty());
    }

    #[test]
    fn compression_percent_rounds_to_nearest_integer() {
        let summary = Summary {
            summary: "s".to_string(),
            key_points: Vec::new(),
            statistics: Some(SummaryStatistics {
                original_length: 100,
                summary_length: 20,
                compression_ratio: 19.6,
            }),
        };
        let view = super::build_summary_view(&summary);
        assert_eq!(view.statistics.unwrap().compression_percent, 20);
    }

    #[test]
    fn file_sizes_format_with_binary_units() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1024 * 1024), "1 MB");
    }
}
