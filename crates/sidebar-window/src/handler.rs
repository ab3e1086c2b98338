use anyhow::Result;
use sidebar_core::{Color, Vector};
use sidebar_scene::{Container, DrawCtx};
use sidebar_text::TextRasterizer;

use crate::events::SidebarEvent;

/// What a handler can reach while the session calls into it.
pub struct WindowCtx<'a> {
    container: &'a mut Container,
    running: &'a mut bool,
    background: Color,
    text: &'a dyn TextRasterizer,
}

impl<'a> WindowCtx<'a> {
    pub(crate) fn new(
        container: &'a mut Container,
        running: &'a mut bool,
        background: Color,
        text: &'a dyn TextRasterizer,
    ) -> Self {
        Self {
            container,
            running,
            background,
            text,
        }
    }

    /// The root container, sized to the window.
    pub fn container(&self) -> &Container {
        self.container
    }

    pub fn container_mut(&mut self) -> &mut Container {
        self.container
    }

    pub fn size(&self) -> Vector {
        self.container.size()
    }

    /// Draw context matching what the next composite will use.
    pub fn draw_ctx(&self) -> DrawCtx<'_> {
        DrawCtx::new(self.background, self.text)
    }

    /// Ask the session to stop after the current frame.
    pub fn stop(&mut self) {
        *self.running = false;
    }
}

/// Per-window behavior driven by the session loop.
///
/// `init` runs exactly once before the first frame and should populate the
/// container. `handle_event` sees every event except `Quit`; `update` runs
/// once per frame after the events, including the frame that stops.
pub trait WindowHandler {
    fn init(&mut self, ctx: &mut WindowCtx) -> Result<()>;

    fn update(&mut self, _ctx: &mut WindowCtx) -> Result<()> {
        Ok(())
    }

    fn handle_event(&mut self, _ctx: &mut WindowCtx, _event: &SidebarEvent) -> Result<()> {
        Ok(())
    }
}

impl<H: WindowHandler + ?Sized> WindowHandler for Box<H> {
    fn init(&mut self, ctx: &mut WindowCtx) -> Result<()> {
        (**self).init(ctx)
    }

    fn update(&mut self, ctx: &mut WindowCtx) -> Result<()> {
        (**self).update(ctx)
    }

    fn handle_event(&mut self, ctx: &mut WindowCtx, event: &SidebarEvent) -> Result<()> {
        (**self).handle_event(ctx, event)
    }
}
