use crate::config::Config;
use crate::error::ClientError;
use crate::mode::{Mode, SubmitOptions};
use crate::source::guess_mime;
use reqwest::multipart::{Form, Part};
use std::path::Path;
use std::time::Instant;

/// Multipart field the picked file is sent under
pub const FILE_FIELD: &str = "image";

/// HTTP client for the processing service
#[derive(Debug, Clone)]
pub struct ProcessingClient {
    http: reqwest::Client,
    server_url: String,
}

impl ProcessingClient {
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::InvalidRequest(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            http,
            server_url: config.server_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL a request for `mode` is posted to
    pub fn endpoint(&self, mode: Mode) -> String {
        format!("{}/{}", self.server_url, mode.as_str())
    }

    /// Upload `path` for processing and return the raw response body.
    ///
    /// Any non-2xx status is an error; the body of a failed response is not read.
    pub async fn process(
        &self,
        path: &Path,
        mode: Mode,
        options: SubmitOptions,
    ) -> Result<Vec<u8>, ClientError> {
        let start = Instant::now();

        let data = tokio::fs::read(path)
            .await
            .map_err(|source| ClientError::ReadFile {
                path: path.to_path_buf(),
                source,
            })?;
        let size = data.len();

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();

        let part = Part::bytes(data)
            .file_name(file_name)
            .mime_str(guess_mime(path))
            .map_err(|e| ClientError::InvalidRequest(format!("Invalid content type: {}", e)))?;

        let form = options
            .form_fields(mode)
            .into_iter()
            .fold(Form::new().part(FILE_FIELD, part), |form, (name, value)| {
                form.text(name, value)
            });

        let url = self.endpoint(mode);
        tracing::debug!("POST {} ({} bytes)", url, size);

        let response = self.http.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::ServerStatus(status));
        }

        let body = response.bytes().await?;

        tracing::info!(
            "{} completed in {}ms, response length: {}",
            mode,
            start.elapsed().as_millis(),
            body.len()
        );

        Ok(body.to_vec())
    }
}
