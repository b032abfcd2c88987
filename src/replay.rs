//! Replaying recorded viewer input from a JSON script.

use crate::app::App;
use crate::error::ClientError;
use crate::surface::{ModalSurface, ResultSurface};
use crate::viewer::{Disposition, InputEvent, Transform};
use serde::Serialize;
use std::path::Path;

/// Viewer state after one replayed event
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub index: usize,
    pub disposition: Disposition,
    pub visible: bool,
    pub dragging: bool,
    pub transform: Transform,
    pub css: String,
    pub matrix: [[f64; 3]; 3],
}

/// Parse a JSON array of input events
pub fn parse_script(json: &str) -> Result<Vec<InputEvent>, ClientError> {
    serde_json::from_str(json).map_err(|e| ClientError::InvalidScript(e.to_string()))
}

pub fn load_script(path: &Path) -> Result<Vec<InputEvent>, ClientError> {
    let json = std::fs::read_to_string(path).map_err(|source| ClientError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&json)
}

/// Feed `events` to the app in order, recording the viewer after each one.
pub fn run<R: ResultSurface, M: ModalSurface>(
    app: &mut App<R, M>,
    events: &[InputEvent],
) -> Vec<Snapshot> {
    events
        .iter()
        .enumerate()
        .map(|(index, event)| {
            let disposition = app.handle_input(event);
            let viewer = app.viewer();
            let transform = viewer.transform();
            Snapshot {
                index,
                disposition,
                visible: viewer.is_visible(),
                dragging: viewer.state().dragging,
                transform,
                css: transform.to_string(),
                matrix: transform.matrix(),
            }
        })
        .collect()
}
