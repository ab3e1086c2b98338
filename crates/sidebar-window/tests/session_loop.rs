use anyhow::{Result, bail};
use sidebar_core::{Color, DrawError, Surface, Vector};
use sidebar_scene::Label;
use sidebar_text::{BlockRasterizer, TextRasterizer, TextStyle};
use sidebar_window::{
    HeadlessBackend, Session, SessionState, SidebarEvent, WindowCtx, WindowHandler, WindowSpec,
};

const BG: Color = Color::from_rgb_u32(0x10171e);

#[derive(Default)]
struct Recorder {
    seen: Vec<SidebarEvent>,
    updates: usize,
    fail_on_update: Option<usize>,
}

impl WindowHandler for Recorder {
    fn init(&mut self, ctx: &mut WindowCtx) -> Result<()> {
        let title = Label::new("Run").text_size(4.0).sized(Vector::new(8, 4));
        ctx.container_mut().add_item("title", title);
        Ok(())
    }

    fn update(&mut self, _ctx: &mut WindowCtx) -> Result<()> {
        self.updates += 1;
        if self.fail_on_update == Some(self.updates) {
            bail!("update {} failed", self.updates);
        }
        Ok(())
    }

    fn handle_event(&mut self, _ctx: &mut WindowCtx, event: &SidebarEvent) -> Result<()> {
        self.seen.push(event.clone());
        Ok(())
    }
}

/// Text backend whose font never loads.
struct BrokenFont;

impl TextRasterizer for BrokenFont {
    fn rasterize(&self, _text: &str, _style: &TextStyle) -> Result<Surface, DrawError> {
        Err(DrawError::Font("glyph table missing".into()))
    }
}

fn spec() -> WindowSpec {
    WindowSpec::new("sidebar", Vector::ZERO, Vector::new(16, 16))
}

fn session(backend: HeadlessBackend, handler: Recorder) -> Session<HeadlessBackend, Recorder> {
    Session::new(backend, spec(), BG, Box::new(BlockRasterizer), handler)
}

#[test]
fn quit_wins_over_the_rest_of_the_batch() {
    let backend = HeadlessBackend::new(Vector::new(64, 64)).with_frame([
        SidebarEvent::key_pressed("a"),
        SidebarEvent::Quit,
        SidebarEvent::key_pressed("b"),
    ]);
    let mut session = session(backend, Recorder::default());
    session.run().unwrap();

    assert_eq!(session.handler().seen, vec![SidebarEvent::key_pressed("a")]);
    // the quit frame still updates and presents before stopping
    assert_eq!(session.handler().updates, 1);
    assert_eq!(session.backend().presented_count(), 1);
    assert_eq!(session.backend().pending_events(), 1);
    assert_eq!(session.state(), SessionState::Stopped);
    assert_eq!(session.backend().open_windows(), 0);
}

#[test]
fn events_reach_handler_in_order_across_frames() {
    let backend = HeadlessBackend::new(Vector::new(64, 64))
        .with_frame([
            SidebarEvent::key_pressed("a"),
            SidebarEvent::KeyReleased { key: "a".into() },
        ])
        .with_frame([SidebarEvent::Focused(false)]);
    let mut session = session(backend, Recorder::default());
    session.run().unwrap();

    assert_eq!(
        session.handler().seen,
        vec![
            SidebarEvent::key_pressed("a"),
            SidebarEvent::KeyReleased { key: "a".into() },
            SidebarEvent::Focused(false),
        ]
    );
    // two scripted frames plus the closing quit frame
    assert_eq!(session.handler().updates, 3);
    assert_eq!(session.backend().presented_count(), 3);
}

#[test]
fn handler_error_aborts_and_releases_window() {
    let handler = Recorder {
        fail_on_update: Some(2),
        ..Recorder::default()
    };
    let backend = HeadlessBackend::new(Vector::new(64, 64))
        .with_frame([])
        .with_frame([])
        .with_frame([]);
    let mut session = session(backend, handler);
    let err = session.run().unwrap_err();

    assert!(format!("{err:#}").contains("update 2 failed"));
    assert_eq!(session.state(), SessionState::Stopped);
    assert_eq!(session.backend().presented_count(), 1);
    assert_eq!(session.backend().open_windows(), 0);
}

#[test]
fn text_backend_error_aborts_and_releases_window() {
    let backend = HeadlessBackend::new(Vector::new(64, 64)).with_frame([]);
    let mut session = Session::new(backend, spec(), BG, Box::new(BrokenFont), Recorder::default());
    let err = session.run().unwrap_err();

    let draw = err.downcast_ref::<DrawError>();
    assert!(matches!(draw, Some(DrawError::Font(_))));
    assert!(format!("{err:#}").contains("glyph table missing"));
    assert_eq!(session.state(), SessionState::Stopped);
    assert_eq!(session.backend().presented_count(), 0);
    assert_eq!(session.backend().open_windows(), 0);
}

#[test]
fn present_error_aborts_and_releases_window() {
    let backend = HeadlessBackend::new(Vector::new(64, 64))
        .with_frame([])
        .failing_present();
    let mut session = session(backend, Recorder::default());
    let err = session.run().unwrap_err();

    assert!(format!("{err:#}").contains("presenting frame failed"));
    assert_eq!(session.handler().updates, 1);
    assert_eq!(session.state(), SessionState::Stopped);
    assert_eq!(session.backend().open_windows(), 0);
}

#[test]
fn window_creation_failure_surfaces_as_error() {
    let spec = WindowSpec::new("empty", Vector::ZERO, Vector::ZERO);
    let backend = HeadlessBackend::new(Vector::new(64, 64));
    let text = Box::new(BlockRasterizer);
    let mut session = Session::new(backend, spec, BG, text, Recorder::default());
    let err = session.run().unwrap_err();
    assert!(format!("{err:#}").contains("invalid window size"));
    assert_eq!(session.state(), SessionState::Stopped);
}

#[test]
fn presented_frames_contain_the_title() {
    let backend = HeadlessBackend::new(Vector::new(64, 64)).with_frame([]);
    let mut session = session(backend, Recorder::default());
    session.run().unwrap();
    let frames = session.backend().presented();
    let frame = &frames[0];
    assert_eq!(frame.size(), Vector::new(16, 16));
    // "Run" at size 4 is three 2x4 cells starting at the origin
    assert_eq!(frame.pixel(0, 0), Some(Color::WHITE));
    assert_eq!(frame.pixel(5, 3), Some(Color::WHITE));
    assert_eq!(frame.pixel(6, 0), Some(BG));
    assert_eq!(frame.pixel(0, 8), Some(BG));
}
