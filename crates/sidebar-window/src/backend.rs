use sidebar_core::{Surface, Vector};
use thiserror::Error;

use crate::events::SidebarEvent;

/// Failures of the display backend. Fatal to the session that hit them.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("display {0} not available")]
    NoDisplay(usize),

    #[error("invalid window size {0:?}")]
    InvalidSize(Vector),

    #[error("event loop error: {0}")]
    EventLoop(String),

    #[error("window creation failed: {0}")]
    CreateWindow(String),

    #[error("presenting frame failed: {0}")]
    Present(String),
}

/// Placement and title of a window to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSpec {
    pub title: String,
    pub position: Vector,
    pub size: Vector,
}

impl WindowSpec {
    pub fn new(title: impl Into<String>, position: Vector, size: Vector) -> Self {
        Self {
            title: title.into(),
            position,
            size,
        }
    }
}

/// A live window owning the surface that gets presented.
///
/// Dropping the window destroys it.
pub trait BackendWindow {
    fn surface(&mut self) -> &mut Surface;
    fn present(&mut self) -> Result<(), BackendError>;
}

/// Windowing system seen by the session loop.
pub trait DisplayBackend {
    type Window: BackendWindow;

    /// Pixel size of display `index`.
    fn display_bounds(&self, index: usize) -> Result<Vector, BackendError>;

    fn create_window(&mut self, spec: &WindowSpec) -> Result<Self::Window, BackendError>;

    /// Next pending event, never blocking. Returns `None` once the current
    /// batch is drained; the following call starts a new batch.
    fn poll_event(&mut self) -> Option<SidebarEvent>;
}
