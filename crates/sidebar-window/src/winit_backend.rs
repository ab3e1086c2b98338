use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use pixels::{Pixels, SurfaceTexture};
use sidebar_core::{Surface, Vector};
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::Event;
use winit::event_loop::EventLoop;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowBuilder, WindowLevel};

use crate::backend::{BackendError, BackendWindow, DisplayBackend, WindowSpec};
use crate::events::{SidebarEvent, translate_window_event};

/// winit event loop plus pixels presentation.
///
/// The event loop is pumped without blocking, once per drained batch, so the
/// session keeps control of the frame loop.
pub struct WinitBackend {
    event_loop: EventLoop<()>,
    pending: VecDeque<SidebarEvent>,
    pumped: bool,
}

impl WinitBackend {
    pub fn new() -> Result<Self, BackendError> {
        let event_loop = EventLoop::new().map_err(|e| BackendError::EventLoop(e.to_string()))?;
        Ok(Self {
            event_loop,
            pending: VecDeque::new(),
            pumped: false,
        })
    }

    fn pump(&mut self) {
        let pending = &mut self.pending;
        let status = self.event_loop.pump_events(Some(Duration::ZERO), |event, _elwt| {
            if let Event::WindowEvent { event, .. } = event {
                if let Some(ev) = translate_window_event(&event) {
                    pending.push_back(ev);
                }
            }
        });
        if let PumpStatus::Exit(code) = status {
            log::debug!("event loop exited with code {code}");
            self.pending.push_back(SidebarEvent::Quit);
        }
    }
}

impl DisplayBackend for WinitBackend {
    type Window = WinitWindow;

    fn display_bounds(&self, index: usize) -> Result<Vector, BackendError> {
        let monitor = self
            .event_loop
            .available_monitors()
            .nth(index)
            .ok_or(BackendError::NoDisplay(index))?;
        let size = monitor.size();
        Ok(Vector::new(size.width as i32, size.height as i32))
    }

    fn create_window(&mut self, spec: &WindowSpec) -> Result<WinitWindow, BackendError> {
        if spec.size.is_empty() {
            return Err(BackendError::InvalidSize(spec.size));
        }
        let (width, height) = spec.size.to_dimensions();
        let window = WindowBuilder::new()
            .with_title(spec.title.as_str())
            .with_inner_size(PhysicalSize::new(width, height))
            .with_position(PhysicalPosition::new(spec.position.x, spec.position.y))
            .with_decorations(false)
            .with_resizable(false)
            .with_window_level(WindowLevel::AlwaysOnTop)
            .build(&self.event_loop)
            .map_err(|e| BackendError::CreateWindow(e.to_string()))?;
        let window = Arc::new(window);

        let texture = SurfaceTexture::new(width, height, Arc::clone(&window));
        let pixels = Pixels::new(width, height, texture)
            .map_err(|e| BackendError::CreateWindow(e.to_string()))?;

        log::info!("created window {:?} {width}x{height}", spec.title);
        Ok(WinitWindow {
            pixels,
            surface: Surface::new(spec.size),
            width,
            window,
        })
    }

    fn poll_event(&mut self) -> Option<SidebarEvent> {
        if self.pending.is_empty() && !self.pumped {
            self.pump();
            self.pumped = true;
        }
        let event = self.pending.pop_front();
        if event.is_none() {
            self.pumped = false;
        }
        event
    }
}

pub struct WinitWindow {
    // Declared before `window` so the GPU surface goes first.
    pixels: Pixels<'static>,
    surface: Surface,
    width: u32,
    window: Arc<Window>,
}

impl BackendWindow for WinitWindow {
    fn surface(&mut self) -> &mut Surface {
        &mut self.surface
    }

    fn present(&mut self) -> Result<(), BackendError> {
        self.surface.copy_to_frame(self.pixels.frame_mut(), self.width);
        self.pixels
            .render()
            .map_err(|e| BackendError::Present(e.to_string()))
    }
}

impl Drop for WinitWindow {
    fn drop(&mut self) {
        log::info!("destroying window {:?}", self.window.id());
    }
}
