use sidebar_core::Vector;

/// Mouse buttons the sidebar distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

/// Backend-neutral window event.
///
/// `Quit` is the only event the session itself acts on; everything else is
/// routed to the handler.
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarEvent {
    Quit,
    /// `key` is the logical key: the typed text for character keys, the key
    /// name (`"Escape"`, `"Enter"`) otherwise.
    KeyPressed { key: String, repeat: bool },
    KeyReleased { key: String },
    MousePressed(MouseButton),
    MouseReleased(MouseButton),
    CursorMoved { position: [f32; 2] },
    Resized(Vector),
    Focused(bool),
}

impl SidebarEvent {
    pub fn key_pressed(key: impl Into<String>) -> Self {
        SidebarEvent::KeyPressed {
            key: key.into(),
            repeat: false,
        }
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, SidebarEvent::Quit)
    }
}
