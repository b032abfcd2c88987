//! Picking a file, sending it for processing and holding on to the result.

use crate::client::ProcessingClient;
use crate::download;
use crate::error::ClientError;
use crate::mode::{Mode, ResultKind, SubmitOptions};
use crate::source::{ImageSource, Preview};
use crate::surface::ResultSurface;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const STATUS_PROCESSING: &str = "Processing, please wait...";
pub const STATUS_COMPLETED: &str = "Completed ✅";
pub const STATUS_FAILED: &str = "Process failed ❌";
pub const MSG_NO_FILE: &str = "Please select a picture";

/// Where the latest submission stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Processing,
    Succeeded,
    Failed,
}

/// Most recent successfully processed output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultArtifact {
    pub payload: Arc<[u8]>,
    pub kind: ResultKind,
}

impl ResultArtifact {
    pub fn new(payload: Vec<u8>, kind: ResultKind) -> Self {
        Self {
            payload: Arc::from(payload),
            kind,
        }
    }

    /// Payload decoded as UTF-8, invalid sequences replaced
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.payload)
    }

    /// Payload as an image source, sharing the same buffer
    pub fn image_source(&self) -> ImageSource {
        ImageSource::Memory(self.payload.clone())
    }
}

pub struct SubmissionFlow<R> {
    client: ProcessingClient,
    surface: R,
    preview: Option<Preview>,
    result: Option<ResultArtifact>,
    state: SubmissionState,
}

impl<R: ResultSurface> SubmissionFlow<R> {
    pub fn new(client: ProcessingClient, surface: R) -> Self {
        Self {
            client,
            surface,
            preview: None,
            result: None,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn result(&self) -> Option<&ResultArtifact> {
        self.result.as_ref()
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    /// Source of the output image region, when it is showing an image
    pub fn output_image(&self) -> Option<ImageSource> {
        self.result
            .as_ref()
            .filter(|r| r.kind == ResultKind::Image)
            .map(ResultArtifact::image_source)
    }

    /// Show the picked file locally, or clear the preview when nothing is picked.
    pub fn preview_local_image(&mut self, file: Option<&Path>) {
        self.preview = file.and_then(|path| {
            let preview = Preview::load(path);
            if preview.is_none() {
                tracing::warn!("Cannot preview {}: not a readable image", path.display());
            }
            preview
        });
        self.surface.show_preview(self.preview.as_ref());
    }

    /// Run one submission to completion. Failures end up in the status line and
    /// the returned state, never as an error.
    pub async fn submit(
        &mut self,
        file: Option<&Path>,
        mode: Mode,
        options: SubmitOptions,
    ) -> SubmissionState {
        self.clear_result();

        let Some(file) = file else {
            self.surface.alert(MSG_NO_FILE);
            self.state = SubmissionState::Idle;
            return self.state;
        };

        self.state = SubmissionState::Processing;
        self.surface.set_status(STATUS_PROCESSING);
        tracing::info!("Submitting {} as {}", file.display(), mode);

        match self.client.process(file, mode, options).await {
            Ok(body) => {
                let artifact = ResultArtifact::new(body, mode.result_kind());
                self.render(&artifact);
                self.result = Some(artifact);
                self.surface.set_download_enabled(true);
                self.surface.set_status(STATUS_COMPLETED);
                self.state = SubmissionState::Succeeded;
            }
            Err(e) => {
                tracing::error!(code = e.code(), "Processing failed: {}", e);
                self.surface.set_status(STATUS_FAILED);
                self.state = SubmissionState::Failed;
            }
        }

        self.state
    }

    /// Save the current result into `dir`. `Ok(None)` when there is nothing to save.
    pub fn download_result(&self, dir: &Path) -> Result<Option<PathBuf>, ClientError> {
        match &self.result {
            Some(artifact) => download::save(artifact, dir).map(Some),
            None => Ok(None),
        }
    }

    fn clear_result(&mut self) {
        self.surface.show_output_image(None);
        self.surface.show_output_text(None);
        self.surface.set_download_enabled(false);
        self.result = None;
    }

    fn render(&mut self, artifact: &ResultArtifact) {
        match artifact.kind {
            ResultKind::Image => {
                let source = artifact.image_source();
                if !source.is_displayable() {
                    tracing::warn!("Result image could not be decoded");
                }
                self.surface.show_output_image(Some(&source));
            }
            ResultKind::Text => {
                self.surface.show_output_text(Some(artifact.text().as_ref()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::source::tests::png_bytes;
    use crate::surface::HeadlessSurface;
    use crate::test_support::{MockReply, MockService};
    use tempfile::TempDir;

    fn flow_for(service: &MockService) -> SubmissionFlow<HeadlessSurface> {
        let client = ProcessingClient::new(&Config::for_server(service.url())).unwrap();
        SubmissionFlow::new(client, HeadlessSurface::new())
    }

    fn picked_png() -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("valid.png");
        std::fs::write(&path, png_bytes(8, 6)).unwrap();
        (dir, path)
    }

    #[tokio::test]
    async fn test_image_mode_success() {
        let returned = png_bytes(3, 3);
        let service =
            MockService::start(MockReply::ok(returned.clone()), MockReply::ok(vec![])).await;
        let mut flow = flow_for(&service);
        let (dir, path) = picked_png();

        let state = flow
            .submit(
                Some(&path),
                Mode::ImgImg,
                SubmitOptions {
                    white_background: true,
                },
            )
            .await;
        assert_eq!(state, SubmissionState::Succeeded);

        let requests = service.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].mode, "img_img");
        assert_eq!(requests[0].fields["image"], png_bytes(8, 6));
        assert_eq!(requests[0].fields["white_background"], b"true");

        let surface = flow.surface();
        assert_eq!(surface.status, STATUS_COMPLETED);
        assert!(surface.download_enabled);
        assert_eq!(surface.output_image, Some(ImageSource::from_bytes(&returned)));
        assert_eq!(surface.output_text, None);
        assert_eq!(flow.output_image(), Some(ImageSource::from_bytes(&returned)));

        let saved = flow.download_result(dir.path()).unwrap().unwrap();
        assert_eq!(saved.file_name().unwrap(), "ocr_result.png");
        assert_eq!(std::fs::read(saved).unwrap(), returned);
    }

    #[tokio::test]
    async fn test_text_mode_success() {
        let service =
            MockService::start(MockReply::ok(vec![]), MockReply::ok(b"hello".to_vec())).await;
        let mut flow = flow_for(&service);
        let (dir, path) = picked_png();

        let state = flow
            .submit(Some(&path), Mode::ImgTxt, SubmitOptions::default())
            .await;
        assert_eq!(state, SubmissionState::Succeeded);

        let surface = flow.surface();
        assert_eq!(surface.output_text.as_deref(), Some("hello"));
        assert_eq!(surface.output_image, None);
        assert!(flow.output_image().is_none());

        let saved = flow.download_result(dir.path()).unwrap().unwrap();
        assert_eq!(saved.file_name().unwrap(), "ocr_result.txt");
        assert_eq!(std::fs::read_to_string(saved).unwrap(), "hello");
    }

    #[tokio::test]
    async fn test_no_file_makes_no_request() {
        let service = MockService::start(MockReply::ok(vec![]), MockReply::ok(vec![])).await;
        let mut flow = flow_for(&service);

        let state = flow.submit(None, Mode::ImgImg, SubmitOptions::default()).await;
        assert_eq!(state, SubmissionState::Idle);
        assert!(service.requests().is_empty());
        assert_eq!(flow.surface().alerts, vec![MSG_NO_FILE.to_string()]);
        assert!(!flow.surface().download_enabled);
    }

    #[tokio::test]
    async fn test_server_error_leaves_no_result() {
        let service = MockService::start(MockReply::status(500), MockReply::ok(vec![])).await;
        let mut flow = flow_for(&service);
        let (dir, path) = picked_png();

        let state = flow
            .submit(Some(&path), Mode::ImgImg, SubmitOptions::default())
            .await;
        assert_eq!(state, SubmissionState::Failed);
        assert_eq!(flow.surface().status, STATUS_FAILED);
        assert!(!flow.surface().download_enabled);
        assert!(flow.result().is_none());
        assert_eq!(flow.download_result(dir.path()).unwrap(), None);
        assert!(!dir.path().join("ocr_result.png").exists());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_contained() {
        let client = ProcessingClient::new(&Config::for_server("http://127.0.0.1:9")).unwrap();
        let mut flow = SubmissionFlow::new(client, HeadlessSurface::new());
        let (_dir, path) = picked_png();

        let state = flow
            .submit(Some(&path), Mode::ImgTxt, SubmitOptions::default())
            .await;
        assert_eq!(state, SubmissionState::Failed);
        assert_eq!(flow.surface().status, STATUS_FAILED);
    }

    #[tokio::test]
    async fn test_new_submission_clears_previous_result() {
        let service =
            MockService::start(MockReply::ok(png_bytes(2, 2)), MockReply::status(502)).await;
        let mut flow = flow_for(&service);
        let (_dir, path) = picked_png();

        flow.submit(Some(&path), Mode::ImgImg, SubmitOptions::default())
            .await;
        assert!(flow.result().is_some());

        flow.submit(Some(&path), Mode::ImgTxt, SubmitOptions::default())
            .await;
        assert!(flow.result().is_none());
        assert_eq!(flow.surface().output_image, None);
        assert!(!flow.surface().download_enabled);
    }

    #[test]
    fn test_preview_local_image() {
        let client = ProcessingClient::new(&Config::for_server("http://127.0.0.1:9")).unwrap();
        let mut flow = SubmissionFlow::new(client, HeadlessSurface::new());
        let (dir, path) = picked_png();

        flow.preview_local_image(Some(&path));
        let preview = flow.surface().preview.clone().unwrap();
        assert_eq!((preview.width, preview.height), (8, 6));

        flow.preview_local_image(None);
        assert!(flow.surface().preview.is_none());

        let not_image = dir.path().join("notes.txt");
        std::fs::write(&not_image, "plain").unwrap();
        flow.preview_local_image(Some(&not_image));
        assert!(flow.preview().is_none());
    }

    #[test]
    fn test_lossy_text() {
        let artifact = ResultArtifact::new(vec![b'o', b'k', 0xff], ResultKind::Text);
        assert_eq!(artifact.text(), "ok\u{fffd}");
    }
}
