use crate::constants::{DEFAULT_BACKGROUND, DEFAULT_FOREGROUND};
use crate::disassembler::Line;
use crate::framebuffer::FrameBuffer;

/// The foreground and background color names a frame should be painted with.
/// Interpreting the names is left to whoever paints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub foreground: String,
    pub background: String,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            foreground: DEFAULT_FOREGROUND.to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
        }
    }
}

/// A frame ready to be painted.
#[derive(Copy, Clone, Debug)]
pub struct Frame<'a> {
    pub buffer: &'a FrameBuffer,
    pub palette: &'a Palette,
}

/// Receives everything the VM emits while stepping.
///
/// Every method defaults to doing nothing, so a host only implements what it
/// cares about; `()` ignores everything.
pub trait Sink {
    /// The frame buffer changed during the last step.
    fn frame(&mut self, _frame: Frame<'_>) {}

    /// An instruction (or an invalid word) was just fetched.
    fn trace(&mut self, _line: &Line) {}

    /// The sound timer was running during the last step.
    fn tone(&mut self) {}
}

impl Sink for () {}
