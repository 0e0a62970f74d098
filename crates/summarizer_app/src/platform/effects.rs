use app_logging::{app_info, app_warn};
use summarizer_core::{Effect, Msg, Summary, SummaryStatistics, UploadHandle};
use summarizer_engine::{
    ApiError, ApiSettings, EngineEvent, EngineHandle, SubmitFile, SummaryResponse,
};

/// Bridges core effects to the IO engine and engine events back to messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let engine = EngineHandle::new(settings)?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::CheckHealth => {
                    app_info!("Probing backend health");
                    self.engine.check_health();
                }
                Effect::Submit { text, files } => {
                    app_info!(
                        "Submitting: {} file(s), {} text chars",
                        files.len(),
                        text.chars().count()
                    );
                    let files = files.into_iter().map(map_handle).collect();
                    self.engine.submit(text, files);
                }
            }
        }
    }

    /// Drains one pending engine event, translated for the state machine.
    /// Called from the UI frame loop.
    pub fn poll(&self) -> Option<Msg> {
        self.engine.try_recv().map(map_event)
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::HealthChecked(Ok(())) => Msg::HealthChecked {
            online: true,
            error: None,
        },
        EngineEvent::HealthChecked(Err(err)) => {
            app_warn!("Health probe failed: {}", err);
            Msg::HealthChecked {
                online: false,
                error: Some(err.message),
            }
        }
        EngineEvent::SubmitFinished(Ok(response)) => Msg::SummaryReady(map_summary(response)),
        EngineEvent::SubmitFinished(Err(err)) => {
            app_warn!("Submission failed: {}", err);
            let connectivity = err.is_connectivity();
            Msg::SummaryFailed {
                message: err.message,
                connectivity,
            }
        }
    }
}

fn map_summary(response: SummaryResponse) -> Summary {
    Summary {
        summary: response.summary,
        key_points: response.key_points,
        statistics: response.statistics.map(|stats| SummaryStatistics {
            original_length: stats.original_length,
            summary_length: stats.summary_length,
            compression_ratio: stats.compression_ratio,
        }),
    }
}

fn map_handle(handle: UploadHandle) -> SubmitFile {
    SubmitFile {
        name: handle.name,
        path: handle.path,
        mime: handle.mime,
    }
}
