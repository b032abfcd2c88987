//! Modal image viewer with cursor-anchored zoom and drag-to-pan.

pub mod events;
pub mod state;
pub mod transform;

pub use events::{Disposition, EventDispatcher, InputEvent, InputHandler, Target};
pub use state::{Point, ViewerState, ZoomDirection, MAX_SCALE, MIN_SCALE};
pub use transform::Transform;

use crate::source::ImageSource;
use crate::surface::ModalSurface;
use events::{EventKind, Scope, Subscription};

/// Key that dismisses the modal
pub const CLOSE_KEY: &str = "Escape";

/// Pan/zoom engine for the modal overlay
pub struct Viewer<S> {
    state: ViewerState,
    visible: bool,
    source: Option<ImageSource>,
    surface: S,
}

impl<S: ModalSurface> Viewer<S> {
    pub fn new(surface: S) -> Self {
        Self {
            state: ViewerState::default(),
            visible: false,
            source: None,
            surface,
        }
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn source(&self) -> Option<&ImageSource> {
        self.source.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn transform(&self) -> Transform {
        Transform::from_state(&self.state)
    }

    /// Show `source` in the modal with a fresh transform.
    ///
    /// Returns `false` and changes nothing when there is no source or it is not
    /// a decodable image.
    pub fn open(&mut self, source: Option<&ImageSource>) -> bool {
        let Some(source) = source.filter(|s| s.is_displayable()) else {
            tracing::debug!("Nothing displayable to open");
            return false;
        };

        self.source = Some(source.clone());
        self.surface.show_modal(source);
        self.reset();
        self.visible = true;
        true
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.surface.hide_modal();
        self.reset();
        self.state.end_drag();
    }

    /// One wheel step around `pointer`. Ignored while the modal is hidden.
    pub fn zoom(&mut self, pointer: Point, direction: ZoomDirection) -> bool {
        if !self.visible {
            return false;
        }

        let top_left = self.surface.image_origin() + self.state.translate;
        self.state.zoom_at(pointer - top_left, direction);
        tracing::debug!(scale = self.state.scale, "zoom {:?}", direction);
        self.apply_transform();
        true
    }

    pub fn begin_drag(&mut self, pointer: Point) {
        self.state.begin_drag(pointer);
    }

    pub fn continue_drag(&mut self, pointer: Point) {
        if self.state.continue_drag(pointer) {
            self.apply_transform();
        }
    }

    pub fn end_drag(&mut self) {
        self.state.end_drag();
    }

    pub fn reset(&mut self) {
        self.state.reset_transform();
        self.apply_transform();
    }

    fn apply_transform(&mut self) {
        let transform = self.transform();
        self.surface.apply_transform(&transform);
    }
}

impl<S: ModalSurface> InputHandler for Viewer<S> {
    fn subscriptions(&self) -> Vec<Subscription> {
        vec![
            Subscription::new(EventKind::Wheel, Scope::Modal),
            Subscription::new(EventKind::Click, Scope::Modal),
            Subscription::new(EventKind::PointerDown, Scope::Image),
            Subscription::new(EventKind::DoubleClick, Scope::Image),
            // Root scope so a drag survives the pointer leaving the image
            Subscription::new(EventKind::PointerMove, Scope::Root),
            Subscription::new(EventKind::PointerUp, Scope::Root),
            Subscription::new(EventKind::KeyDown, Scope::Root),
        ]
    }

    fn handle_event(&mut self, event: &InputEvent) -> Disposition {
        match event {
            InputEvent::Wheel { x, y, delta_y, .. } => {
                let direction = ZoomDirection::from_wheel_delta(*delta_y);
                if self.zoom(Point::new(*x, *y), direction) {
                    Disposition::DefaultPrevented
                } else {
                    Disposition::Ignored
                }
            }
            InputEvent::PointerDown { x, y, .. } if self.visible => {
                self.begin_drag(Point::new(*x, *y));
                Disposition::DefaultPrevented
            }
            InputEvent::PointerMove { x, y, .. } => {
                self.continue_drag(Point::new(*x, *y));
                Disposition::Handled
            }
            InputEvent::PointerUp { .. } => {
                self.end_drag();
                Disposition::Handled
            }
            InputEvent::DoubleClick { .. } if self.visible => {
                self.reset();
                Disposition::Handled
            }
            InputEvent::Click { target } => match target {
                Target::Backdrop | Target::CloseButton => {
                    self.close();
                    Disposition::Handled
                }
                _ => Disposition::Ignored,
            },
            InputEvent::KeyDown { key } if key == CLOSE_KEY => {
                self.close();
                Disposition::Handled
            }
            _ => Disposition::Ignored,
        }
    }
}
