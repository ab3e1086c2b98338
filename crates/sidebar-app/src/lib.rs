//! sidebar-app: wires configuration, fonts, a display backend and one of the
//! window handlers into a running session.

use anyhow::{Context, Result};
use sidebar_config::SidebarConfig;
use sidebar_scene::Vector;
use sidebar_text::{FontRasterizer, TextRasterizer};
use sidebar_window::{DisplayBackend, Session, WindowSpec, WinitBackend};

pub mod handlers;
mod mode;

pub use handlers::{DesktopHandler, PowerHandler, RunHandler, Theme, handler_for};
pub use mode::Mode;

/// Window placement for a display of `display` pixels: anchored at the
/// top-left corner, sized by the configured fractions.
pub fn window_spec(config: &SidebarConfig, display: Vector) -> WindowSpec {
    let w = &config.window;
    let size = Vector::new(
        (display.x as f32 * w.width_fraction).round() as i32,
        (display.y as f32 * w.height_fraction).round() as i32,
    );
    WindowSpec::new(w.title.clone(), Vector::ZERO, size)
}

/// Run one sidebar window on `backend` until it is closed.
pub fn run_with<B: DisplayBackend>(
    backend: B,
    config: &SidebarConfig,
    mode: Mode,
    text: Box<dyn TextRasterizer>,
) -> Result<()> {
    let display = backend
        .display_bounds(config.window.display_index)
        .context("querying display size")?;
    let spec = window_spec(config, display);
    let background = config.style.palette()?.background;
    let handler = handler_for(mode, config)?;
    log::info!("starting {mode} sidebar at {:?} on a {:?} display", spec.size, display);

    let mut session = Session::new(backend, spec, background, text, handler);
    session.run()
}

/// Entry point of the binary: `arg` is the optional mode argument.
pub fn run(arg: Option<&str>) -> Result<()> {
    let config = SidebarConfig::load().context("loading configuration")?;
    let mode = Mode::resolve(arg, config.mode.as_deref());
    let fonts = FontRasterizer::from_paths(&config.fonts.regular, &config.fonts.bold)
        .with_context(|| format!("loading fonts {:?}", config.fonts.regular))?;
    let backend = WinitBackend::new().context("initializing display")?;
    run_with(backend, &config, mode, Box::new(fonts))
}
