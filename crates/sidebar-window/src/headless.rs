use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use sidebar_core::{Surface, Vector};

use crate::backend::{BackendError, BackendWindow, DisplayBackend, WindowSpec};
use crate::events::SidebarEvent;

/// In-memory backend: fixed displays, scripted event batches, and a record
/// of every presented frame.
///
/// Each scripted batch is what one frame drains. Once the script runs out
/// every further batch is a single [`SidebarEvent::Quit`], so a session
/// driven by this backend always terminates.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    displays: Vec<Vector>,
    batches: VecDeque<VecDeque<SidebarEvent>>,
    current: Option<VecDeque<SidebarEvent>>,
    created: Vec<WindowSpec>,
    frames: Rc<RefCell<Vec<Surface>>>,
    open: Rc<Cell<usize>>,
    fail_present: bool,
}

impl HeadlessBackend {
    /// Backend with a single display of `size`.
    pub fn new(size: Vector) -> Self {
        Self {
            displays: vec![size],
            ..Self::default()
        }
    }

    pub fn with_display(mut self, size: Vector) -> Self {
        self.displays.push(size);
        self
    }

    /// Queue the events one frame will drain.
    pub fn push_frame(&mut self, events: impl IntoIterator<Item = SidebarEvent>) {
        self.batches.push_back(events.into_iter().collect());
    }

    pub fn with_frame(mut self, events: impl IntoIterator<Item = SidebarEvent>) -> Self {
        self.push_frame(events);
        self
    }

    /// Windows created from now on fail every `present`.
    pub fn failing_present(mut self) -> Self {
        self.fail_present = true;
        self
    }

    /// Specs of every window created so far.
    pub fn created(&self) -> &[WindowSpec] {
        &self.created
    }

    /// Copies of every presented surface, oldest first.
    pub fn presented(&self) -> Vec<Surface> {
        self.frames.borrow().clone()
    }

    pub fn presented_count(&self) -> usize {
        self.frames.borrow().len()
    }

    /// Windows created and not yet dropped.
    pub fn open_windows(&self) -> usize {
        self.open.get()
    }

    /// Events still queued, including the rest of a partly drained batch.
    pub fn pending_events(&self) -> usize {
        let current = self.current.as_ref().map_or(0, VecDeque::len);
        current + self.batches.iter().map(VecDeque::len).sum::<usize>()
    }
}

impl DisplayBackend for HeadlessBackend {
    type Window = HeadlessWindow;

    fn display_bounds(&self, index: usize) -> Result<Vector, BackendError> {
        self.displays
            .get(index)
            .copied()
            .ok_or(BackendError::NoDisplay(index))
    }

    fn create_window(&mut self, spec: &WindowSpec) -> Result<HeadlessWindow, BackendError> {
        if spec.size.is_empty() {
            return Err(BackendError::InvalidSize(spec.size));
        }
        self.created.push(spec.clone());
        self.open.set(self.open.get() + 1);
        log::debug!("headless window {:?} {:?}", spec.title, spec.size);
        Ok(HeadlessWindow {
            surface: Surface::new(spec.size),
            frames: Rc::clone(&self.frames),
            open: Rc::clone(&self.open),
            fail_present: self.fail_present,
        })
    }

    fn poll_event(&mut self) -> Option<SidebarEvent> {
        if self.current.is_none() {
            let next = self
                .batches
                .pop_front()
                .unwrap_or_else(|| VecDeque::from([SidebarEvent::Quit]));
            self.current = Some(next);
        }
        let event = self.current.as_mut().and_then(VecDeque::pop_front);
        if event.is_none() {
            self.current = None;
        }
        event
    }
}

#[derive(Debug)]
pub struct HeadlessWindow {
    surface: Surface,
    frames: Rc<RefCell<Vec<Surface>>>,
    open: Rc<Cell<usize>>,
    fail_present: bool,
}

impl BackendWindow for HeadlessWindow {
    fn surface(&mut self) -> &mut Surface {
        &mut self.surface
    }

    fn present(&mut self) -> Result<(), BackendError> {
        if self.fail_present {
            return Err(BackendError::Present("headless present disabled".into()));
        }
        self.frames.borrow_mut().push(self.surface.clone());
        Ok(())
    }
}

impl Drop for HeadlessWindow {
    fn drop(&mut self) {
        self.open.set(self.open.get().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(backend: &mut HeadlessBackend) -> Vec<SidebarEvent> {
        std::iter::from_fn(|| backend.poll_event()).collect()
    }

    #[test]
    fn batches_drain_one_per_frame() {
        let mut backend = HeadlessBackend::new(Vector::new(100, 100))
            .with_frame([SidebarEvent::key_pressed("a"), SidebarEvent::key_pressed("b")])
            .with_frame([]);
        assert_eq!(drain(&mut backend).len(), 2);
        assert!(drain(&mut backend).is_empty());
        assert_eq!(drain(&mut backend), vec![SidebarEvent::Quit]);
    }

    #[test]
    fn dropping_window_closes_it() {
        let mut backend = HeadlessBackend::new(Vector::new(100, 100));
        let spec = WindowSpec::new("t", Vector::ZERO, Vector::new(10, 10));
        let mut window = backend.create_window(&spec).unwrap();
        assert_eq!(backend.open_windows(), 1);
        assert_eq!(backend.created(), std::slice::from_ref(&spec));
        window.present().unwrap();
        drop(window);
        assert_eq!(backend.open_windows(), 0);
        assert_eq!(backend.presented_count(), 1);
    }

    #[test]
    fn displays_are_indexed_in_order() {
        let backend = HeadlessBackend::new(Vector::new(100, 100)).with_display(Vector::new(50, 20));
        assert_eq!(backend.display_bounds(1).unwrap(), Vector::new(50, 20));
        assert!(matches!(backend.display_bounds(2), Err(BackendError::NoDisplay(2))));
    }

    #[test]
    fn failing_present_leaves_no_frame() {
        let mut backend = HeadlessBackend::new(Vector::new(100, 100)).failing_present();
        let spec = WindowSpec::new("t", Vector::ZERO, Vector::new(10, 10));
        let mut window = backend.create_window(&spec).unwrap();
        assert!(matches!(window.present(), Err(BackendError::Present(_))));
        assert_eq!(backend.presented_count(), 0);
    }

    #[test]
    fn zero_sized_window_is_rejected() {
        let mut backend = HeadlessBackend::new(Vector::new(100, 100));
        let spec = WindowSpec::new("t", Vector::ZERO, Vector::ZERO);
        assert!(backend.create_window(&spec).is_err());
    }
}
