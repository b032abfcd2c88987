use crate::source::{ImageSource, Preview};
use crate::viewer::{Point, Transform};

/// Display regions driven by the submission flow
pub trait ResultSurface {
    /// Show the local preview, or clear it with `None`
    fn show_preview(&mut self, preview: Option<&Preview>);

    /// Replace the status line
    fn set_status(&mut self, status: &str);

    /// Blocking user-facing message
    fn alert(&mut self, message: &str);

    /// Show the output image, or hide it with `None`
    fn show_output_image(&mut self, source: Option<&ImageSource>);

    /// Show the output text, or hide it with `None`
    fn show_output_text(&mut self, text: Option<&str>);

    fn set_download_enabled(&mut self, enabled: bool);
}

/// The modal overlay driven by the viewer
pub trait ModalSurface {
    /// Bind the modal image to `source` and make the overlay visible
    fn show_modal(&mut self, source: &ImageSource);

    fn hide_modal(&mut self);

    fn apply_transform(&mut self, transform: &Transform);

    /// Untransformed top-left corner of the modal image, in viewport coordinates
    fn image_origin(&self) -> Point;
}

/// Surface without a display: keeps the latest state of every region and
/// logs changes. Used by the command line front end and by tests.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    pub preview: Option<Preview>,
    pub status: String,
    pub alerts: Vec<String>,
    pub output_image: Option<ImageSource>,
    pub output_text: Option<String>,
    pub download_enabled: bool,
    pub modal_visible: bool,
    pub modal_source: Option<ImageSource>,
    pub transform: Transform,
    pub image_origin: Point,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Modal image laid out with its top-left at `origin`
    pub fn with_image_origin(origin: Point) -> Self {
        Self {
            image_origin: origin,
            ..Self::default()
        }
    }
}

impl ResultSurface for HeadlessSurface {
    fn show_preview(&mut self, preview: Option<&Preview>) {
        match preview {
            Some(p) => tracing::info!(
                "Preview {} ({}x{})",
                p.source.describe(),
                p.width,
                p.height
            ),
            None => tracing::debug!("Preview cleared"),
        }
        self.preview = preview.cloned();
    }

    fn set_status(&mut self, status: &str) {
        tracing::info!("Status: {}", status);
        self.status = status.to_string();
    }

    fn alert(&mut self, message: &str) {
        tracing::warn!("{}", message);
        self.alerts.push(message.to_string());
    }

    fn show_output_image(&mut self, source: Option<&ImageSource>) {
        self.output_image = source.cloned();
    }

    fn show_output_text(&mut self, text: Option<&str>) {
        self.output_text = text.map(str::to_string);
    }

    fn set_download_enabled(&mut self, enabled: bool) {
        self.download_enabled = enabled;
    }
}

impl ModalSurface for HeadlessSurface {
    fn show_modal(&mut self, source: &ImageSource) {
        tracing::debug!("Modal opened on {}", source.describe());
        self.modal_source = Some(source.clone());
        self.modal_visible = true;
    }

    fn hide_modal(&mut self) {
        tracing::debug!("Modal closed");
        self.modal_visible = false;
    }

    fn apply_transform(&mut self, transform: &Transform) {
        self.transform = *transform;
    }

    fn image_origin(&self) -> Point {
        self.image_origin
    }
}
