//! Converts platform file handles (drag-and-drop, file picker) into
//! candidates for the acceptance filter.

use std::path::Path;

use eframe::egui;
use summarizer_core::FileCandidate;

/// Builds a candidate from a dropped file. Files without an on-disk path
/// (e.g. dragged from another application's memory) are skipped; the engine
/// reads staged files from disk at submit time.
pub(crate) fn candidate_from_dropped(file: &egui::DroppedFile) -> Option<FileCandidate> {
    let path = file.path.as_deref()?;
    let name = if file.name.is_empty() {
        file_name_of(path)?
    } else {
        file.name.clone()
    };
    Some(FileCandidate {
        name,
        path: path.to_path_buf(),
        size_bytes: size_of(path),
        mime: if file.mime.is_empty() {
            None
        } else {
            Some(file.mime.clone())
        },
    })
}

/// Builds a candidate from a picker path. The picker reports no MIME type,
/// so acceptance rides on the extension check alone.
pub(crate) fn candidate_from_path(path: &Path) -> Option<FileCandidate> {
    Some(FileCandidate {
        name: file_name_of(path)?,
        path: path.to_path_buf(),
        size_bytes: size_of(path),
        mime: None,
    })
}

fn file_name_of(path: &Path) -> Option<String> {
    path.file_name().map(|name| name.to_string_lossy().into_owned())
}

fn size_of(path: &Path) -> u64 {
    std::fs::metadata(path).map(|meta| meta.len()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use eframe::egui;

    use super::{candidate_from_dropped, candidate_from_path};

    #[test]
    fn picker_path_yields_candidate_without_mime() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.pdf");
        let mut file = std::fs::File::create(&path).expect("create");
        file.write_all(b"%PDF-1.4").expect("write");

        let candidate = candidate_from_path(&path).expect("candidate");
        assert_eq!(candidate.name, "report.pdf");
        assert_eq!(candidate.size_bytes, 8);
        assert_eq!(candidate.mime, None);
    }

    #[test]
    fn dropped_file_without_path_is_skipped() {
        let dropped = egui::DroppedFile {
            name: "clipboard.txt".to_string(),
            ..Default::default()
        };
        assert!(candidate_from_dropped(&dropped).is_none());
    }

    #[test]
    fn dropped_file_keeps_declared_mime() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").expect("write");

        let dropped = egui::DroppedFile {
            path: Some(path.clone()),
            mime: "text/plain".to_string(),
            ..Default::default()
        };
        let candidate = candidate_from_dropped(&dropped).expect("candidate");
        assert_eq!(candidate.name, "notes.txt");
        assert_eq!(candidate.mime.as_deref(), Some("text/plain"));
        assert_eq!(candidate.size_bytes, 5);
    }
}
