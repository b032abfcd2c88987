//! Input events and scope-based routing.
//!
//! A handler declares which event kinds it wants and at which scope. Events
//! reported at [`Scope::Root`] reach the handler wherever the pointer is, which
//! is what keeps a drag alive after the pointer leaves the image.

use serde::{Deserialize, Serialize};

/// Element an event was reported on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// The image inside the modal
    Image,
    /// The modal overlay around the image
    Backdrop,
    /// The modal's close affordance
    CloseButton,
    /// Anything else in the page
    #[default]
    Page,
}

/// Raw input, in viewport coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    Wheel {
        x: f64,
        y: f64,
        delta_y: f64,
        #[serde(default)]
        target: Target,
    },
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default)]
        target: Target,
    },
    PointerMove {
        x: f64,
        y: f64,
        #[serde(default)]
        target: Target,
    },
    PointerUp {
        #[serde(default)]
        target: Target,
    },
    Click {
        #[serde(default)]
        target: Target,
    },
    DoubleClick {
        #[serde(default)]
        target: Target,
    },
    KeyDown {
        key: String,
    },
}

impl InputEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            InputEvent::Wheel { .. } => EventKind::Wheel,
            InputEvent::PointerDown { .. } => EventKind::PointerDown,
            InputEvent::PointerMove { .. } => EventKind::PointerMove,
            InputEvent::PointerUp { .. } => EventKind::PointerUp,
            InputEvent::Click { .. } => EventKind::Click,
            InputEvent::DoubleClick { .. } => EventKind::DoubleClick,
            InputEvent::KeyDown { .. } => EventKind::KeyDown,
        }
    }

    /// Keyboard events are reported on the page
    pub fn target(&self) -> Target {
        match self {
            InputEvent::Wheel { target, .. }
            | InputEvent::PointerDown { target, .. }
            | InputEvent::PointerMove { target, .. }
            | InputEvent::PointerUp { target }
            | InputEvent::Click { target }
            | InputEvent::DoubleClick { target } => *target,
            InputEvent::KeyDown { .. } => Target::Page,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Wheel,
    PointerDown,
    PointerMove,
    PointerUp,
    Click,
    DoubleClick,
    KeyDown,
}

/// Where a subscription listens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Only events on the image itself
    Image,
    /// Events anywhere inside the modal, image included
    Modal,
    /// Every event in the application
    Root,
}

impl Scope {
    pub fn contains(&self, target: Target) -> bool {
        match self {
            Scope::Image => target == Target::Image,
            Scope::Modal => matches!(
                target,
                Target::Image | Target::Backdrop | Target::CloseButton
            ),
            Scope::Root => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    pub kind: EventKind,
    pub scope: Scope,
}

impl Subscription {
    pub const fn new(kind: EventKind, scope: Scope) -> Self {
        Self { kind, scope }
    }

    pub fn matches(&self, event: &InputEvent) -> bool {
        self.kind == event.kind() && self.scope.contains(event.target())
    }
}

/// What happened to an event after dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    /// Nobody subscribed, or the handler chose to ignore it
    Ignored,
    /// Handled, browser default behavior may still run
    Handled,
    /// Handled, and the browser default (page scroll, drag image) is suppressed
    DefaultPrevented,
}

/// Something that consumes routed input
pub trait InputHandler {
    /// Events this handler wants and the scope it listens at
    fn subscriptions(&self) -> Vec<Subscription>;

    /// Handle an event that matched one of the subscriptions
    fn handle_event(&mut self, event: &InputEvent) -> Disposition;
}

/// Routes events to a handler according to its registered subscriptions
#[derive(Debug, Default)]
pub struct EventDispatcher {
    routes: Vec<Subscription>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<H: InputHandler>(&mut self, handler: &H) {
        self.routes.extend(handler.subscriptions());
    }

    pub fn accepts(&self, event: &InputEvent) -> bool {
        self.routes.iter().any(|route| route.matches(event))
    }

    pub fn dispatch<H: InputHandler>(&self, event: &InputEvent, handler: &mut H) -> Disposition {
        if !self.accepts(event) {
            return Disposition::Ignored;
        }
        handler.handle_event(event)
    }
}
