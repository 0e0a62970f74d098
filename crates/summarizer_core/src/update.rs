use crate::{AppState, BackendStatus, Effect, Msg, UploadHandle};

/// Shown when a submission is attempted while the backend is known offline.
pub const OFFLINE_GUIDANCE: &str =
    "Backend server is not available. Please start the server first.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            state.mark_dirty();
            vec![Effect::CheckHealth]
        }
        Msg::HealthChecked { online, error } => {
            if online {
                state.set_backend(BackendStatus::Online);
            } else {
                state.set_backend(BackendStatus::Offline);
                state.error = error.or_else(|| Some(OFFLINE_GUIDANCE.to_string()));
            }
            Vec::new()
        }
        Msg::ModeSelected(mode) => {
            // Switching modes deliberately keeps the other collector's
            // staged content; only the active mode is ever submitted.
            if state.mode != mode {
                state.mode = mode;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::TextChanged(text) => {
            if state.text != text {
                state.text = text;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::TextSubmitted => {
            let trimmed = state.text.trim().to_string();
            if trimmed.is_empty() {
                return (state, Vec::new());
            }
            match gate_submission(&mut state) {
                SubmitGate::Blocked => Vec::new(),
                SubmitGate::Ready => {
                    state.begin_submission(crate::InputMode::Text);
                    vec![Effect::Submit {
                        text: trimmed,
                        files: Vec::new(),
                    }]
                }
            }
        }
        Msg::FilesAdded(candidates) => {
            state.stage_candidates(candidates);
            Vec::new()
        }
        Msg::FileRemoved(id) => {
            state.remove_staged(id);
            Vec::new()
        }
        Msg::FilesSubmitted => {
            if state.staged.is_empty() {
                return (state, Vec::new());
            }
            match gate_submission(&mut state) {
                SubmitGate::Blocked => Vec::new(),
                SubmitGate::Ready => {
                    let files = state
                        .staged
                        .iter()
                        .map(|file| UploadHandle {
                            name: file.name.clone(),
                            path: file.path.clone(),
                            mime: file.mime.clone(),
                        })
                        .collect();
                    state.begin_submission(crate::InputMode::File);
                    vec![Effect::Submit {
                        text: String::new(),
                        files,
                    }]
                }
            }
        }
        Msg::SummaryReady(summary) => {
            state.finish_with_summary(summary);
            Vec::new()
        }
        Msg::SummaryFailed {
            message,
            connectivity,
        } => {
            state.finish_with_error(message, connectivity);
            Vec::new()
        }
    };

    (state, effects)
}

enum SubmitGate {
    Blocked,
    Ready,
}

/// Offline short-circuits with a guidance error and no network call; a
/// submission already in flight blocks a second one.
fn gate_submission(state: &mut AppState) -> SubmitGate {
    if state.loading {
        return SubmitGate::Blocked;
    }
    if state.backend == BackendStatus::Offline {
        state.error = Some(OFFLINE_GUIDANCE.to_string());
        state.mark_dirty();
        return SubmitGate::Blocked;
    }
    SubmitGate::Ready
}
