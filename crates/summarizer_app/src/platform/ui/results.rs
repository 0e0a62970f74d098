use std::time::Instant;

use app_logging::app_warn;
use eframe::egui;
use summarizer_core::{StatisticsView, SummaryView};

use super::{CopySection, UiBuffers};

pub(super) fn render(ui: &mut egui::Ui, result: &SummaryView, buffers: &mut UiBuffers) {
    ui.add_space(12.0);
    section_header(
        ui,
        "Key Points",
        CopySection::KeyPoints,
        key_points_clipboard_text(&result.key_points),
        buffers,
    );
    for (index, point) in result.key_points.iter().enumerate() {
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new(format!("{}.", index + 1)).strong());
            ui.label(point);
        });
    }

    ui.add_space(12.0);
    section_header(
        ui,
        "Full Summary",
        CopySection::Summary,
        result.paragraphs.join("\n\n"),
        buffers,
    );
    for paragraph in &result.paragraphs {
        ui.label(paragraph);
        ui.add_space(4.0);
    }

    if let Some(stats) = &result.statistics {
        stats_tiles(ui, stats);
    }
}

fn key_points_clipboard_text(points: &[String]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(index, point)| format!("{}. {}", index + 1, point))
        .collect::<Vec<_>>()
        .join("\n")
}

fn section_header(
    ui: &mut egui::Ui,
    title: &str,
    section: CopySection,
    payload: String,
    buffers: &mut UiBuffers,
) {
    let mut clicked = false;
    let copied = matches!(buffers.copied, Some((active, _)) if active == section);
    ui.horizontal(|ui| {
        ui.heading(title);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = if copied { "Copied!" } else { "Copy" };
            clicked = ui.small_button(label).clicked();
        });
    });
    if clicked && copy_to_clipboard(&payload) {
        buffers.copied = Some((section, Instant::now()));
    }
}

/// Copy failures are logged, never surfaced; they are not critical to the
/// summarization workflow.
fn copy_to_clipboard(text: &str) -> bool {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text.to_string()) {
            Ok(()) => true,
            Err(err) => {
                app_warn!("Clipboard write failed: {}", err);
                false
            }
        },
        Err(err) => {
            app_warn!("Clipboard unavailable: {}", err);
            false
        }
    }
}

fn stats_tiles(ui: &mut egui::Ui, stats: &StatisticsView) {
    ui.add_space(12.0);
    ui.columns(3, |columns| {
        tile(
            &mut columns[0],
            &stats.original_length.to_string(),
            "Original Characters",
        );
        tile(
            &mut columns[1],
            &stats.summary_length.to_string(),
            "Summary Characters",
        );
        tile(
            &mut columns[2],
            &format!("{}%", stats.compression_percent),
            "Compression Ratio",
        );
    });
}

fn tile(ui: &mut egui::Ui, value: &str, caption: &str) {
    ui.group(|ui| {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(value).size(22.0).strong());
            ui.weak(caption);
        });
    });
}

#[cfg(test)]
mod tests {
    use super::key_points_clipboard_text;

    #[test]
    fn clipboard_text_numbers_points_like_the_display() {
        let points = vec!["first".to_string(), "second".to_string()];
        assert_eq!(key_points_clipboard_text(&points), "1. first\n2. second");
    }
}
