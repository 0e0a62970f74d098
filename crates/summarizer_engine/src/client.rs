use std::time::Duration;

use app_logging::{app_info, app_warn};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::{ApiError, FailureKind, SubmitFile, SummaryResponse};

#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Backend base location, e.g. "http://127.0.0.1:8000".
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            // Summarization of large documents is slow; leave headroom.
            request_timeout: Duration::from_secs(120),
        }
    }
}

#[async_trait::async_trait]
pub trait SummaryApi: Send + Sync {
    /// Probes the backend health endpoint. The body is not consulted, only
    /// the status code.
    async fn check_health(&self) -> Result<(), ApiError>;

    /// Submits content for summarization. When `files` is non-empty they are
    /// uploaded as repeated `files` parts and `text` is ignored; otherwise a
    /// single `text` field is sent.
    async fn submit(&self, text: &str, files: &[SubmitFile])
        -> Result<SummaryResponse, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApi {
    settings: ApiSettings,
    client: reqwest::Client,
}

/// Failure body shape used by the backend: `{ "detail": "..." }`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

impl ReqwestApi {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::Connectivity, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), path)
    }

    fn map_transport(&self, err: reqwest::Error) -> ApiError {
        app_warn!("Transport failure against {}: {}", self.settings.base_url, err);
        ApiError::connectivity(&self.settings.base_url)
    }
}

#[async_trait::async_trait]
impl SummaryApi for ReqwestApi {
    async fn check_health(&self) -> Result<(), ApiError> {
        let response = self
            .client
            .get(self.endpoint("health"))
            .send()
            .await
            .map_err(|err| self.map_transport(err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::http(status.as_u16(), None));
        }
        Ok(())
    }

    async fn submit(
        &self,
        text: &str,
        files: &[SubmitFile],
    ) -> Result<SummaryResponse, ApiError> {
        let form = if files.is_empty() {
            Form::new().text("text", text.to_string())
        } else {
            build_file_form(files).await?
        };

        app_info!(
            "Submitting for summarization: {} file(s), {} text bytes",
            files.len(),
            if files.is_empty() { text.len() } else { 0 }
        );

        let response = self
            .client
            .post(self.endpoint("summarize"))
            .multipart(form)
            .send()
            .await
            .map_err(|err| self.map_transport(err))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail);
            return Err(ApiError::http(status.as_u16(), detail));
        }

        response.json::<SummaryResponse>().await.map_err(|err| {
            ApiError::new(
                FailureKind::Decode,
                format!("Malformed summary response: {err}"),
            )
        })
    }
}

async fn build_file_form(files: &[SubmitFile]) -> Result<Form, ApiError> {
    let mut form = Form::new();
    for file in files {
        let bytes = tokio::fs::read(&file.path).await.map_err(|err| {
            ApiError::new(
                FailureKind::FileRead,
                format!("Could not read {}: {err}", file.name),
            )
        })?;
        let part = Part::bytes(bytes).file_name(file.name.clone());
        let part = match &file.mime {
            Some(mime) => part.mime_str(mime).map_err(|err| {
                ApiError::new(
                    FailureKind::FileRead,
                    format!("Invalid content type for {}: {err}", file.name),
                )
            })?,
            None => part,
        };
        form = form.part("files", part);
    }
    Ok(form)
}
