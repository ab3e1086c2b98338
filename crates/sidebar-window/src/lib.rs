//! sidebar-window: window/event plumbing and the per-window session loop.
//!
//! Responsibilities:
//! - Abstract the display behind [`DisplayBackend`] / [`BackendWindow`].
//! - Translate winit events into [`SidebarEvent`]s.
//! - Drive a [`WindowHandler`] through the [`Session`] state machine:
//!   init once, then drain events, update, composite and present each frame.
//!
//! [`WinitBackend`] presents through `pixels`; [`HeadlessBackend`] keeps
//! everything in memory and replays scripted events.

mod backend;
pub mod events;
mod handler;
mod headless;
mod session;
mod winit_backend;

pub use backend::{BackendError, BackendWindow, DisplayBackend, WindowSpec};
pub use events::{MouseButton, SidebarEvent};
pub use handler::{WindowCtx, WindowHandler};
pub use headless::{HeadlessBackend, HeadlessWindow};
pub use session::{Session, SessionState};
pub use winit_backend::{WinitBackend, WinitWindow};
