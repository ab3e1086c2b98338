use anyhow::Result;
use sidebar_window::{SidebarEvent, WindowCtx, WindowHandler};

use super::{Theme, add_title};

/// Run prompt. Keyboard input is logged; nothing else is handled yet.
pub struct RunHandler {
    theme: Theme,
    key_events: usize,
}

impl RunHandler {
    pub fn new(theme: Theme) -> Self {
        Self { theme, key_events: 0 }
    }

    /// Keyboard events seen so far.
    pub fn key_events(&self) -> usize {
        self.key_events
    }
}

impl WindowHandler for RunHandler {
    fn init(&mut self, ctx: &mut WindowCtx) -> Result<()> {
        add_title(ctx, "Run", &self.theme)
    }

    fn handle_event(&mut self, _ctx: &mut WindowCtx, event: &SidebarEvent) -> Result<()> {
        match event {
            SidebarEvent::KeyPressed { key, repeat } => {
                self.key_events += 1;
                log::info!("keyboard: pressed {key:?} repeat={repeat}");
            }
            SidebarEvent::KeyReleased { key } => {
                self.key_events += 1;
                log::info!("keyboard: released {key:?}");
            }
            _ => {}
        }
        Ok(())
    }
}
