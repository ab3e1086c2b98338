//! Concrete window handlers. They share the session loop and differ in what
//! `init` builds and which events they react to.

use std::path::PathBuf;

use anyhow::{Context, Result};
use sidebar_config::SidebarConfig;
use sidebar_scene::{Align, Color, FractionVector, Item, Label};
use sidebar_window::{WindowCtx, WindowHandler};

use crate::Mode;

mod desktop;
mod power;
mod run;

pub use desktop::DesktopHandler;
pub use power::PowerHandler;
pub use run::RunHandler;

/// Resolved style values the handlers build their scenes with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub foreground: Color,
    pub empty_desktop: Color,
    pub title_size: f32,
    pub number_size: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            foreground: Color::WHITE,
            empty_desktop: Color::from_rgb_u32(0x20272e),
            title_size: 128.0,
            number_size: 64.0,
        }
    }
}

impl Theme {
    pub fn from_config(config: &SidebarConfig) -> Result<Self> {
        let palette = config.style.palette()?;
        Ok(Self {
            foreground: palette.foreground,
            empty_desktop: palette.empty_desktop,
            title_size: config.style.title_size,
            number_size: config.style.number_size,
        })
    }
}

/// Desktop overview settings with the image directory already expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopLayout {
    pub images_dir: PathBuf,
    pub count: u32,
    pub columns: u32,
}

impl DesktopLayout {
    pub fn from_config(config: &SidebarConfig) -> Self {
        Self {
            images_dir: config.desktop.images_dir(),
            count: config.desktop.count,
            columns: config.desktop.columns.max(1),
        }
    }
}

/// Build the handler for `mode`.
pub fn handler_for(mode: Mode, config: &SidebarConfig) -> Result<Box<dyn WindowHandler>> {
    let theme = Theme::from_config(config)?;
    Ok(match mode {
        Mode::Power => Box::new(PowerHandler::new(theme)),
        Mode::Run => Box::new(RunHandler::new(theme)),
        Mode::Desktop => Box::new(DesktopHandler::new(theme, DesktopLayout::from_config(config))),
    })
}

/// Centered title across the top tenth of the window.
pub(crate) fn add_title(ctx: &mut WindowCtx, text: &str, theme: &Theme) -> Result<()> {
    let container = ctx.container_mut();
    container.add_item(
        "title",
        Label::new(text)
            .text_size(theme.title_size)
            .foreground(theme.foreground)
            .align(Align::CENTER, Align::CENTER),
    );
    container
        .resize_item_fraction("title", FractionVector::new(1.0, 0.1))
        .context("sizing title")?;
    if let Some(Item::Label(title)) = ctx.container().get_item("title") {
        if let Some(overflow) = title.check_fit(&ctx.draw_ctx())? {
            log::debug!("title {text:?} will be clipped: {overflow}");
        }
    }
    Ok(())
}
