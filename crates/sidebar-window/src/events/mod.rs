pub mod types;

pub use types::{MouseButton, SidebarEvent};

use sidebar_core::Vector;

/// Map a winit window event onto a [`SidebarEvent`]. Events the sidebar has
/// no use for map to `None`.
pub fn translate_window_event(event: &winit::event::WindowEvent) -> Option<SidebarEvent> {
    use winit::event::{ElementState, WindowEvent};
    match event {
        WindowEvent::CloseRequested | WindowEvent::Destroyed => Some(SidebarEvent::Quit),
        WindowEvent::KeyboardInput { event, .. } => {
            let key = key_name(&event.logical_key);
            match event.state {
                ElementState::Pressed => Some(SidebarEvent::KeyPressed {
                    key,
                    repeat: event.repeat,
                }),
                ElementState::Released => Some(SidebarEvent::KeyReleased { key }),
            }
        }
        WindowEvent::MouseInput { state, button, .. } => {
            let button = translate_button(*button);
            match state {
                ElementState::Pressed => Some(SidebarEvent::MousePressed(button)),
                ElementState::Released => Some(SidebarEvent::MouseReleased(button)),
            }
        }
        WindowEvent::CursorMoved { position, .. } => Some(SidebarEvent::CursorMoved {
            position: [position.x as f32, position.y as f32],
        }),
        WindowEvent::Resized(sz) => Some(SidebarEvent::Resized(Vector::new(
            sz.width as i32,
            sz.height as i32,
        ))),
        WindowEvent::Focused(focused) => Some(SidebarEvent::Focused(*focused)),
        _ => None,
    }
}

fn key_name(key: &winit::keyboard::Key) -> String {
    use winit::keyboard::Key;
    match key {
        Key::Character(s) => s.to_string(),
        Key::Named(named) => format!("{named:?}"),
        other => format!("{other:?}"),
    }
}

fn translate_button(button: winit::event::MouseButton) -> MouseButton {
    use winit::event::MouseButton as W;
    match button {
        W::Left => MouseButton::Left,
        W::Right => MouseButton::Right,
        W::Middle => MouseButton::Middle,
        W::Back => MouseButton::Back,
        W::Forward => MouseButton::Forward,
        W::Other(n) => MouseButton::Other(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalSize;
    use winit::event::WindowEvent;

    #[test]
    fn close_request_is_quit() {
        assert_eq!(
            translate_window_event(&WindowEvent::CloseRequested),
            Some(SidebarEvent::Quit)
        );
    }

    #[test]
    fn resize_and_focus_carry_values() {
        assert_eq!(
            translate_window_event(&WindowEvent::Resized(PhysicalSize::new(480, 1080))),
            Some(SidebarEvent::Resized(Vector::new(480, 1080)))
        );
        assert_eq!(
            translate_window_event(&WindowEvent::Focused(false)),
            Some(SidebarEvent::Focused(false))
        );
    }

    #[test]
    fn uninteresting_events_are_dropped() {
        assert_eq!(translate_window_event(&WindowEvent::RedrawRequested), None);
    }

    #[test]
    fn named_keys_use_their_name() {
        use winit::keyboard::{Key, NamedKey};
        assert_eq!(key_name(&Key::Named(NamedKey::Escape)), "Escape");
        assert_eq!(key_name(&Key::Character("q".into())), "q");
    }
}
