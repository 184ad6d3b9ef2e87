//! Rendering seam between the session and a presentation layer.

use crate::display::DisplaySnapshot;

/// A presentation layer that draws display snapshots.
///
/// Implementations receive one snapshot per dispatched event, including
/// events absorbed as no-ops, so the screen always reflects the latest
/// state.
pub trait Render {
    fn render(&mut self, display: &DisplaySnapshot);
}

impl<F> Render for F
where
    F: FnMut(&DisplaySnapshot),
{
    fn render(&mut self, display: &DisplaySnapshot) {
        self(display)
    }
}

/// Renderer that keeps every snapshot it was handed.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    frames: Vec<DisplaySnapshot>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[DisplaySnapshot] {
        &self.frames
    }

    pub fn last(&self) -> Option<&DisplaySnapshot> {
        self.frames.last()
    }
}

impl Render for RecordingRenderer {
    fn render(&mut self, display: &DisplaySnapshot) {
        self.frames.push(display.clone());
    }
}
