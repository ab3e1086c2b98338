use anyhow::Result;
use sidebar_window::{WindowCtx, WindowHandler};

use super::{Theme, add_title};

/// Power menu: just the title for now.
pub struct PowerHandler {
    theme: Theme,
}

impl PowerHandler {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl WindowHandler for PowerHandler {
    fn init(&mut self, ctx: &mut WindowCtx) -> Result<()> {
        add_title(ctx, "Power", &self.theme)
    }
}
