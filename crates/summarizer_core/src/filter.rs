use std::path::Path;

/// Declared MIME types accepted for upload.
pub const ACCEPTED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "text/plain",
    "text/csv",
];

/// Filename extensions accepted for upload.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "xls", "xlsx", "txt", "csv"];

/// Whether a candidate file passes the client-side acceptance filter.
///
/// A file is accepted when its declared MIME type matches the allow-list OR
/// its filename extension does. The OR is intentional: platforms and browsers
/// are inconsistent about reporting MIME types, so either signal is enough.
pub fn is_accepted(name: &str, mime: Option<&str>) -> bool {
    mime_accepted(mime) || extension_accepted(name)
}

fn mime_accepted(mime: Option<&str>) -> bool {
    let Some(mime) = mime else {
        return false;
    };
    // Declared types may carry parameters, e.g. "text/plain; charset=utf-8".
    let bare = mime.split(';').next().unwrap_or(mime).trim();
    ACCEPTED_MIME_TYPES
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(bare))
}

fn extension_accepted(name: &str) -> bool {
    let Some(ext) = Path::new(name).extension().and_then(|ext| ext.to_str()) else {
        return false;
    };
    ACCEPTED_EXTENSIONS
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(ext))
}

#[cfg(test)]
mod tests {
    use super::is_accepted;

    #[test]
    fn accepts_by_mime_type() {
        assert!(is_accepted("report", Some("application/pdf")));
        assert!(is_accepted("notes", Some("text/plain; charset=utf-8")));
    }

    #[test]
    fn accepts_by_extension_when_mime_missing() {
        assert!(is_accepted("report.pdf", None));
        assert!(is_accepted("DATA.CSV", None));
        assert!(is_accepted("minutes.DocX", None));
    }

    #[test]
    fn accepts_by_extension_when_mime_unknown() {
        // e.g. a platform reporting a generic type for a spreadsheet
        assert!(is_accepted("sheet.xlsx", Some("application/octet-stream")));
    }

    #[test]
    fn rejects_when_neither_signal_matches() {
        assert!(!is_accepted("image.png", Some("image/png")));
        assert!(!is_accepted("archive.zip", None));
        assert!(!is_accepted("no_extension", None));
    }
}
