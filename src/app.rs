use crate::client::ProcessingClient;
use crate::error::ClientError;
use crate::mode::{Mode, SubmitOptions};
use crate::submission::{SubmissionFlow, SubmissionState};
use crate::surface::{ModalSurface, ResultSurface};
use crate::viewer::{Disposition, EventDispatcher, InputEvent, Viewer};
use std::path::{Path, PathBuf};

/// Image element the user activated to open the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTarget {
    /// The processed image returned by the service
    Output,
    /// The local preview of the picked file
    Preview,
}

/// Top-level controller owning the submission flow, the viewer and the
/// routing of input events into the viewer.
pub struct App<R, M> {
    submission: SubmissionFlow<R>,
    viewer: Viewer<M>,
    dispatcher: EventDispatcher,
    selected: Option<PathBuf>,
}

impl<R: ResultSurface, M: ModalSurface> App<R, M> {
    pub fn new(client: ProcessingClient, results: R, modal: M) -> Self {
        let viewer = Viewer::new(modal);
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(&viewer);

        Self {
            submission: SubmissionFlow::new(client, results),
            viewer,
            dispatcher,
            selected: None,
        }
    }

    pub fn submission(&self) -> &SubmissionFlow<R> {
        &self.submission
    }

    pub fn viewer(&self) -> &Viewer<M> {
        &self.viewer
    }

    /// File picker changed
    pub fn select_file(&mut self, file: Option<&Path>) {
        self.selected = file.map(Path::to_path_buf);
        self.submission.preview_local_image(file);
    }

    pub async fn submit(&mut self, mode: Mode, options: SubmitOptions) -> SubmissionState {
        let selected = self.selected.clone();
        self.submission
            .submit(selected.as_deref(), mode, options)
            .await
    }

    pub fn download(&self, dir: &Path) -> Result<Option<PathBuf>, ClientError> {
        self.submission.download_result(dir)
    }

    /// Open the viewer on the activated image. `false` when it has nothing to show.
    pub fn open_viewer(&mut self, target: ViewTarget) -> bool {
        let source = match target {
            ViewTarget::Output => self.submission.output_image(),
            ViewTarget::Preview => self.submission.preview().map(|p| p.source.clone()),
        };
        self.viewer.open(source.as_ref())
    }

    /// Route one input event to the viewer
    pub fn handle_input(&mut self, event: &InputEvent) -> Disposition {
        let disposition = self.dispatcher.dispatch(event, &mut self.viewer);
        tracing::debug!(?disposition, "{:?}", event.kind());
        disposition
    }
}
