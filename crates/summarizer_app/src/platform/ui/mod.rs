mod input_panels;
mod results;

use std::time::{Duration, Instant};

use eframe::egui;
use summarizer_core::{AppViewModel, BackendStatus, InputMode, Msg};

/// How long the per-section "Copied!" confirmation stays visible.
const COPIED_RESET: Duration = Duration::from_secs(2);

/// Widget-local state that does not belong in the state machine: the text
/// edit buffer and the transient copy confirmation.
#[derive(Default)]
pub struct UiBuffers {
    pub text_input: String,
    pub copied: Option<(CopySection, Instant)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopySection {
    KeyPoints,
    Summary,
}

/// Renders one frame and returns the messages the user's input produced.
pub fn render(ctx: &egui::Context, view: &AppViewModel, buffers: &mut UiBuffers) -> Vec<Msg> {
    if let Some((_, since)) = buffers.copied {
        if since.elapsed() >= COPIED_RESET {
            buffers.copied = None;
        }
    }

    let mut msgs = Vec::new();
    header_panel(ctx, view, &mut msgs);

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                match view.mode {
                    InputMode::File => input_panels::file_panel(ui, view, &mut msgs),
                    InputMode::Text => input_panels::text_panel(ui, view, buffers, &mut msgs),
                }
                if let Some(error) = &view.error {
                    error_box(ui, error);
                }
                if let Some(result) = &view.result {
                    results::render(ui, result, buffers);
                }
            });
    });

    drop_hover_overlay(ctx);
    msgs
}

fn header_panel(ctx: &egui::Context, view: &AppViewModel, msgs: &mut Vec<Msg>) {
    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.heading("Document Summarizer");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                status_badge(ui, view.backend);
            });
        });
        ui.horizontal(|ui| {
            if ui
                .selectable_label(view.mode == InputMode::File, "Upload Files")
                .clicked()
            {
                msgs.push(Msg::ModeSelected(InputMode::File));
            }
            if ui
                .selectable_label(view.mode == InputMode::Text, "Enter Text")
                .clicked()
            {
                msgs.push(Msg::ModeSelected(InputMode::Text));
            }
        });
        ui.add_space(6.0);
    });
}

fn status_badge(ui: &mut egui::Ui, backend: BackendStatus) {
    let (color, label) = match backend {
        BackendStatus::Checking => (egui::Color32::from_rgb(0xf9, 0xa8, 0x25), "Checking Server…"),
        BackendStatus::Online => (egui::Color32::from_rgb(0x43, 0xa0, 0x47), "Server Online"),
        BackendStatus::Offline => (egui::Color32::from_rgb(0xe5, 0x39, 0x35), "Server Offline"),
    };
    ui.colored_label(color, format!("● {label}"));
}

fn error_box(ui: &mut egui::Ui, message: &str) {
    ui.add_space(8.0);
    ui.group(|ui| {
        let color = ui.visuals().error_fg_color;
        ui.colored_label(color, message);
    });
}

/// Full-window overlay while files hover over the window, the standard egui
/// drag-and-drop affordance.
fn drop_hover_overlay(ctx: &egui::Context) {
    let hovering = ctx.input(|input| !input.raw.hovered_files.is_empty());
    if !hovering {
        return;
    }
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("file_drop_overlay"),
    ));
    let rect = ctx.screen_rect();
    painter.rect_filled(rect, 0.0, egui::Color32::from_black_alpha(128));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "Drop files to stage them",
        egui::TextStyle::Heading.resolve(&ctx.style()),
        egui::Color32::WHITE,
    );
}
