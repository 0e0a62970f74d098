use std::time::Duration;

use app_logging::app_info;
use eframe::egui;
use summarizer_core::{update, AppState, BackendStatus, Msg};
use summarizer_engine::ApiSettings;

use super::effects::EffectRunner;
use super::{intake, logging, ui};
use crate::ClientArgs;

pub fn run_app(args: ClientArgs) -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::File);
    app_info!("Starting summarizer client against {}", args.server_url);

    let settings = ApiSettings {
        base_url: args.server_url,
        ..ApiSettings::default()
    };
    let runner = EffectRunner::new(settings)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([880.0, 720.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Document Summarizer")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Document Summarizer",
        options,
        Box::new(move |_cc| Ok(Box::new(SummarizerApp::new(runner)))),
    )
    .map_err(|err| anyhow::anyhow!("ui loop failed: {err}"))
}

struct SummarizerApp {
    state: AppState,
    runner: EffectRunner,
    buffers: ui::UiBuffers,
}

impl SummarizerApp {
    fn new(runner: EffectRunner) -> Self {
        let mut app = Self {
            state: AppState::new(),
            runner,
            buffers: ui::UiBuffers::default(),
        };
        app.dispatch(Msg::Started);
        app
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
    }

    fn collect_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|input| input.raw.dropped_files.clone());
        if dropped.is_empty() {
            return;
        }
        let candidates: Vec<_> = dropped
            .iter()
            .filter_map(intake::candidate_from_dropped)
            .collect();
        if !candidates.is_empty() {
            self.dispatch(Msg::FilesAdded(candidates));
        }
    }
}

impl eframe::App for SummarizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Some(msg) = self.runner.poll() {
            self.dispatch(msg);
        }
        self.collect_dropped_files(ctx);

        let view = self.state.view();
        let msgs = ui::render(ctx, &view, &mut self.buffers);
        for msg in msgs {
            self.dispatch(msg);
        }

        if self.state.consume_dirty() {
            ctx.request_repaint();
        }
        // Keep frames coming while an answer is pending, so engine events
        // are polled even without user input.
        if view.loading || view.backend == BackendStatus::Checking {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
