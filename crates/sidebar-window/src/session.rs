use anyhow::{Context, Result, anyhow, bail};
use sidebar_core::{Color, Vector};
use sidebar_scene::{Container, DrawCtx};
use sidebar_text::TextRasterizer;

use crate::backend::{BackendWindow, DisplayBackend, WindowSpec};
use crate::handler::{WindowCtx, WindowHandler};

/// Lifecycle of a [`Session`]. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Created,
    Initialized,
    Running,
    Stopped,
}

/// One window, one root container, one handler.
///
/// Every frame drains the backend's pending events, dispatches them, calls
/// `update`, composites the container onto the window surface and presents
/// it. A `Quit` event ends event dispatch for the frame: the rest of its
/// batch stays undelivered, the frame still updates and presents, and the
/// session then stops.
pub struct Session<B: DisplayBackend, H: WindowHandler> {
    backend: B,
    spec: WindowSpec,
    window: Option<B::Window>,
    container: Container,
    handler: H,
    background: Color,
    text: Box<dyn TextRasterizer>,
    running: bool,
    state: SessionState,
    frames: u64,
}

impl<B: DisplayBackend, H: WindowHandler> Session<B, H> {
    pub fn new(
        backend: B,
        spec: WindowSpec,
        background: Color,
        text: Box<dyn TextRasterizer>,
        handler: H,
    ) -> Self {
        Self {
            backend,
            spec,
            window: None,
            container: Container::default(),
            handler,
            background,
            text,
            running: false,
            state: SessionState::Created,
            frames: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn transition(&mut self, next: SessionState) {
        log::debug!("session {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Create the window, clear it to the background and let the handler
    /// populate the root container.
    pub fn init(&mut self) -> Result<()> {
        if self.state != SessionState::Created {
            bail!("session already initialized ({:?})", self.state);
        }
        let mut window = self
            .backend
            .create_window(&self.spec)
            .with_context(|| format!("creating window {:?}", self.spec.title))?;
        window.surface().fill(self.background);
        self.window = Some(window);

        self.container = Container::new(Vector::ZERO, self.spec.size);
        self.running = true;
        let mut ctx = WindowCtx::new(
            &mut self.container,
            &mut self.running,
            self.background,
            self.text.as_ref(),
        );
        self.handler.init(&mut ctx).context("handler init failed")?;
        self.transition(SessionState::Initialized);
        Ok(())
    }

    /// Run one frame. Returns `false` once the session has stopped.
    pub fn frame(&mut self) -> Result<bool> {
        match self.state {
            SessionState::Initialized => self.transition(SessionState::Running),
            SessionState::Running => {}
            SessionState::Stopped => return Ok(false),
            SessionState::Created => bail!("frame before init"),
        }

        while let Some(event) = self.backend.poll_event() {
            if event.is_quit() {
                log::info!("quit received");
                self.running = false;
                break;
            }
            let mut ctx = WindowCtx::new(
                &mut self.container,
                &mut self.running,
                self.background,
                self.text.as_ref(),
            );
            self.handler
                .handle_event(&mut ctx, &event)
                .with_context(|| format!("handling {event:?}"))?;
            if !self.running {
                break;
            }
        }

        let mut ctx = WindowCtx::new(
            &mut self.container,
            &mut self.running,
            self.background,
            self.text.as_ref(),
        );
        self.handler
            .update(&mut ctx)
            .context("handler update failed")?;

        let window = self
            .window
            .as_mut()
            .ok_or_else(|| anyhow!("session has no window"))?;
        let draw = DrawCtx::new(self.background, self.text.as_ref());
        self.container
            .composite(window.surface(), &draw)
            .context("compositing scene")?;
        window.present().context("presenting frame")?;
        self.frames += 1;

        if !self.running {
            self.transition(SessionState::Stopped);
            return Ok(false);
        }
        Ok(true)
    }

    /// Initialize if needed and loop until stopped. The window is released on
    /// every exit path, including errors.
    pub fn run(&mut self) -> Result<()> {
        let result = self.run_frames();
        self.shutdown();
        result
    }

    fn run_frames(&mut self) -> Result<()> {
        if self.state == SessionState::Created {
            self.init()?;
        }
        while self.frame()? {}
        Ok(())
    }

    fn shutdown(&mut self) {
        if self.window.take().is_some() {
            log::debug!("window {:?} released after {} frames", self.spec.title, self.frames);
        }
        self.running = false;
        if self.state != SessionState::Stopped {
            self.transition(SessionState::Stopped);
        }
    }
}
