// notify.rs - Cell-change notifications between the engine and a renderer
//
// The engine appends events to a `ChangeBuffer` as it steps; whoever owns the
// repaint schedule drains the buffer into a `Renderer` whenever it likes.

use crate::grid::CellState;

/// A cell took a new state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CellChange {
    pub x: usize,
    pub y: usize,
    pub state: CellState,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CellEvent {
    Changed(CellChange),
    /// The whole grid went back to state 0 (start or resize).
    Cleared,
}

/// Anything that draws the grid.
pub trait Renderer {
    fn on_cell_changed(&mut self, change: CellChange);
    fn clear_all(&mut self);
}

/// Append-only queue of cell events, drained by the repaint trigger.
///
/// It has no size limit: whoever ticks the engine must also drain it, or it
/// grows by one event per step.
#[derive(Debug, Default, Clone)]
pub struct ChangeBuffer {
    events: Vec<CellEvent>,
}

impl ChangeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, change: CellChange) {
        self.events.push(CellEvent::Changed(change));
    }

    /// Records a clear. Anything still pending is superseded by it.
    pub fn push_clear(&mut self) {
        self.events.clear();
        self.events.push(CellEvent::Cleared);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[CellEvent] {
        &self.events
    }

    /// Delivers every pending event to `renderer` in order and empties the
    /// buffer. Returns how many events were delivered.
    pub fn drain_into<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> usize {
        let count = self.events.len();
        for event in self.events.drain(..) {
            match event {
                CellEvent::Changed(change) => renderer.on_cell_changed(change),
                CellEvent::Cleared => renderer.clear_all(),
            }
        }
        count
    }
}

/// Renderer that just remembers what it was told; handy for drivers and tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    pub changes: Vec<CellChange>,
    pub clears: usize,
}

impl Renderer for RecordingRenderer {
    fn on_cell_changed(&mut self, change: CellChange) {
        self.changes.push(change);
    }

    fn clear_all(&mut self) {
        self.changes.clear();
        self.clears += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_in_order() {
        let mut buffer = ChangeBuffer::new();
        buffer.push(CellChange { x: 0, y: 0, state: 1 });
        buffer.push(CellChange { x: 1, y: 0, state: 2 });

        let mut renderer = RecordingRenderer::default();
        assert_eq!(buffer.drain_into(&mut renderer), 2);
        assert!(buffer.is_empty());
        assert_eq!(renderer.changes[0], CellChange { x: 0, y: 0, state: 1 });
        assert_eq!(renderer.changes[1], CellChange { x: 1, y: 0, state: 2 });
    }

    #[test]
    fn test_clear_supersedes_pending() {
        let mut buffer = ChangeBuffer::new();
        buffer.push(CellChange { x: 3, y: 3, state: 1 });
        buffer.push_clear();
        buffer.push(CellChange { x: 1, y: 1, state: 1 });
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.events()[0], CellEvent::Cleared);

        let mut renderer = RecordingRenderer::default();
        buffer.drain_into(&mut renderer);
        assert_eq!(renderer.clears, 1);
        assert_eq!(renderer.changes, vec![CellChange { x: 1, y: 1, state: 1 }]);
    }
}
