use std::sync::{mpsc, Arc};
use std::thread;

use crate::client::{ApiSettings, ReqwestApi, SummaryApi};
use crate::{EngineEvent, SubmitFile};

enum EngineCommand {
    CheckHealth,
    Submit {
        text: String,
        files: Vec<SubmitFile>,
    },
}

/// Handle to the IO worker. Commands go in over a channel; events come back
/// for the UI to poll.
///
/// Dropping the handle closes the command channel, which ends the worker
/// loop and tears down its runtime, cancelling any request still in flight
/// (including the one-shot mount-time health probe).
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ApiSettings) -> Result<Self, crate::ApiError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let api = Arc::new(ReqwestApi::new(settings)?);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
            // Channel closed: runtime drops here and aborts in-flight tasks.
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn check_health(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CheckHealth);
    }

    pub fn submit(&self, text: impl Into<String>, files: Vec<SubmitFile>) {
        let _ = self.cmd_tx.send(EngineCommand::Submit {
            text: text.into(),
            files,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    api: &dyn SummaryApi,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::CheckHealth => {
            let result = api.check_health().await;
            let _ = event_tx.send(EngineEvent::HealthChecked(result));
        }
        EngineCommand::Submit { text, files } => {
            let result = api.submit(&text, &files).await;
            let _ = event_tx.send(EngineEvent::SubmitFinished(result));
        }
    }
}
