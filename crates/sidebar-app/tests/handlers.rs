use std::path::PathBuf;

use sidebar_app::handlers::DesktopLayout;
use sidebar_app::{DesktopHandler, Mode, PowerHandler, RunHandler, Theme, run_with, window_spec};
use sidebar_config::SidebarConfig;
use sidebar_scene::{Color, Item, Vector};
use sidebar_text::BlockRasterizer;
use sidebar_window::{
    HeadlessBackend, MouseButton, Session, SessionState, SidebarEvent, WindowHandler, WindowSpec,
};

const BG: Color = Color::from_rgb_u32(0x10171e);

fn session<H: WindowHandler>(
    backend: HeadlessBackend,
    size: Vector,
    handler: H,
) -> Session<HeadlessBackend, H> {
    let spec = WindowSpec::new("sidebar", Vector::ZERO, size);
    Session::new(backend, spec, BG, Box::new(BlockRasterizer), handler)
}

#[test]
fn power_title_spans_top_tenth() {
    let backend = HeadlessBackend::new(Vector::new(1600, 800)).with_frame([]);
    let mut s = session(backend, Vector::new(400, 800), PowerHandler::new(Theme::default()));
    s.run().unwrap();

    let title = s.container().get_item("title").and_then(Item::as_label).unwrap();
    assert_eq!(title.text, "Power");
    assert_eq!(title.size, Vector::new(400, 80));

    // five 64x128 cells centered in 400x80: x from 40, clipped vertically
    let frames = s.backend().presented();
    let frame = &frames[0];
    assert_eq!(frame.pixel(40, 0), Some(Color::WHITE));
    assert_eq!(frame.pixel(39, 0), Some(BG));
    assert_eq!(frame.pixel(359, 79), Some(Color::WHITE));
    assert_eq!(frame.pixel(200, 80), Some(BG));
}

#[test]
fn run_handler_counts_only_keyboard_events() {
    let backend = HeadlessBackend::new(Vector::new(400, 800)).with_frame([
        SidebarEvent::KeyPressed { key: "a".into(), repeat: true },
        SidebarEvent::MousePressed(MouseButton::Left),
        SidebarEvent::KeyReleased { key: "a".into() },
    ]);
    let mut s = session(backend, Vector::new(100, 800), RunHandler::new(Theme::default()));
    s.run().unwrap();
    assert_eq!(s.handler().key_events(), 2);
    assert_eq!(s.state(), SessionState::Stopped);
}

#[test]
fn desktop_grid_shows_previews_and_placeholders() {
    let dir = tempfile::tempdir().unwrap();
    let red = image::Rgba([0xff, 0, 0, 0xff]);
    image::RgbaImage::from_pixel(10, 10, red).save(dir.path().join("1.png")).unwrap();
    std::fs::write(dir.path().join("2.png"), b"not a png").unwrap();

    let layout = DesktopLayout {
        images_dir: dir.path().to_path_buf(),
        count: 3,
        columns: 1,
    };
    let theme = Theme::default();
    let backend = HeadlessBackend::new(Vector::new(400, 300)).with_frame([]);
    let mut s = session(backend, Vector::new(100, 300), DesktopHandler::new(theme, layout));
    s.run().unwrap();

    let mut keys: Vec<&str> = s.container().keys().collect();
    keys.sort();
    assert_eq!(keys, ["desktop-1", "desktop-2", "desktop-3", "title"]);

    let slot = s.container().get_item("desktop-1").and_then(Item::as_container).unwrap();
    assert_eq!(slot.position(), Vector::new(0, 30));
    assert_eq!(slot.size(), Vector::new(100, 90));
    let image = slot.get_item("image").and_then(Item::as_texture).unwrap();
    assert_eq!(image.position, Vector::new(20, 0));
    assert_eq!(image.pixels().size(), Vector::new(80, 90));

    let frames = s.backend().presented();
    let frame = &frames[0];
    // slots start at y = 30, 120, 210; images occupy x 20..100
    assert_eq!(frame.pixel(60, 60), Some(Color::rgb(0xff, 0, 0)));
    assert_eq!(frame.pixel(60, 150), Some(theme.empty_desktop));
    assert_eq!(frame.pixel(99, 299), Some(theme.empty_desktop));
}

#[test]
fn window_spec_uses_display_fractions() {
    let config = SidebarConfig::default();
    let spec = window_spec(&config, Vector::new(1920, 1080));
    assert_eq!(spec.position, Vector::ZERO);
    assert_eq!(spec.size, Vector::new(480, 1080));
}

#[test]
fn run_with_headless_backend_completes() {
    let config = SidebarConfig::default();
    let backend =
        HeadlessBackend::new(Vector::new(400, 200)).with_frame([SidebarEvent::key_pressed("x")]);
    run_with(backend, &config, Mode::Run, Box::new(BlockRasterizer)).unwrap();
}

#[test]
fn missing_display_is_reported() {
    let mut config = SidebarConfig::default();
    config.window.display_index = 2;
    let backend = HeadlessBackend::new(Vector::new(400, 200));
    let err = run_with(backend, &config, Mode::Power, Box::new(BlockRasterizer)).unwrap_err();
    assert!(format!("{err:#}").contains("display 2 not available"));
}

#[test]
fn bad_style_color_stops_before_window_creation() {
    let mut config = SidebarConfig::default();
    config.style.background = "#zzzzzz".into();
    config.desktop.images_dir = PathBuf::from("/nonexistent");
    let backend = HeadlessBackend::new(Vector::new(400, 200));
    assert!(run_with(backend, &config, Mode::Desktop, Box::new(BlockRasterizer)).is_err());
}
