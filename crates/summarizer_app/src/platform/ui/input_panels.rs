use eframe::egui;
use summarizer_core::{AppViewModel, Msg, StagedStatus, ACCEPTED_EXTENSIONS};

use super::UiBuffers;
use crate::platform::intake;

pub(super) fn file_panel(ui: &mut egui::Ui, view: &AppViewModel, msgs: &mut Vec<Msg>) {
    ui.group(|ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(egui::RichText::new("Drop your files here").strong().size(18.0));
            ui.label("PDF, DOC, DOCX, XLS, XLSX, TXT and CSV files are accepted");
            ui.add_space(8.0);
            if ui.button("Browse Files…").clicked() {
                if let Some(paths) = rfd::FileDialog::new()
                    .add_filter("Documents", ACCEPTED_EXTENSIONS)
                    .pick_files()
                {
                    let candidates: Vec<_> = paths
                        .iter()
                        .filter_map(|path| intake::candidate_from_path(path))
                        .collect();
                    if !candidates.is_empty() {
                        msgs.push(Msg::FilesAdded(candidates));
                    }
                }
            }
            ui.add_space(24.0);
        });
    });

    if let Some(stats) = view.last_add_stats {
        if stats.rejected > 0 {
            ui.weak(format!(
                "{} file(s) skipped by the type filter",
                stats.rejected
            ));
        }
    }

    if view.staged.is_empty() {
        return;
    }

    ui.add_space(8.0);
    ui.label(egui::RichText::new("Staged Files").strong());
    for row in &view.staged {
        ui.horizontal(|ui| {
            status_icon(ui, row.status);
            ui.label(&row.name);
            ui.weak(&row.size_label);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("✖").clicked() {
                    msgs.push(Msg::FileRemoved(row.id));
                }
            });
        });
    }
    ui.add_space(8.0);
    submit_row(ui, view.can_submit_files, view.loading, Msg::FilesSubmitted, msgs);
}

pub(super) fn text_panel(
    ui: &mut egui::Ui,
    view: &AppViewModel,
    buffers: &mut UiBuffers,
    msgs: &mut Vec<Msg>,
) {
    ui.label("Content to Summarize");
    let response = ui.add(
        egui::TextEdit::multiline(&mut buffers.text_input)
            .desired_rows(12)
            .desired_width(f32::INFINITY)
            .hint_text("Enter your text here… Paste articles, documents, or any content you want to summarize."),
    );
    if response.changed() {
        msgs.push(Msg::TextChanged(buffers.text_input.clone()));
    }

    ui.horizontal(|ui| {
        ui.weak(format!("{} characters", view.text_chars));
        if view.text_words > 0 {
            ui.weak(format!("~{} words", view.text_words));
        }
    });
    ui.add_space(8.0);
    submit_row(ui, view.can_submit_text, view.loading, Msg::TextSubmitted, msgs);
}

fn status_icon(ui: &mut egui::Ui, status: StagedStatus) {
    match status {
        StagedStatus::Pending => {
            ui.weak("•");
        }
        StagedStatus::Completed => {
            ui.colored_label(egui::Color32::from_rgb(0x43, 0xa0, 0x47), "✔");
        }
        StagedStatus::Error => {
            ui.colored_label(egui::Color32::from_rgb(0xe5, 0x39, 0x35), "⚠");
        }
    }
}

fn submit_row(ui: &mut egui::Ui, enabled: bool, loading: bool, msg: Msg, msgs: &mut Vec<Msg>) {
    let mut clicked = false;
    ui.horizontal(|ui| {
        clicked = ui
            .add_enabled(enabled, egui::Button::new("Generate Summary"))
            .clicked();
        if loading {
            ui.spinner();
            ui.label("Processing…");
        }
    });
    if clicked {
        msgs.push(msg);
    }
}
