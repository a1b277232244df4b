use crate::framebuffer::FrameBuffer;
use crate::memory::Memory;
use crate::registers::Registers;

/// A snapshot of the VM's internal state
///
/// ## CPU
/// - see `Registers` for the register file, stack and timers
///
/// ## Memory
/// - 4096 bytes of addressable memory with the font table at 0x000
/// - 64x32 frame buffer
///     - stores the contents of the next frame to be drawn
///     - `draw_flag` is raised by any operation that changes it
///
/// ## Input
/// - execution halts in `RunState::WaitingForKey` until a key is held
#[derive(Clone)]
pub struct State {
    pub registers: Registers,
    pub memory: Memory,
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
    pub run_state: RunState,
}

impl State {
    pub fn new() -> Self {
        State {
            registers: Registers::new(),
            memory: Memory::new(),
            frame_buffer: FrameBuffer::new(),
            draw_flag: false,
            run_state: RunState::Running,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the next step executes an instruction or polls the keypad.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    /// The register that receives the key once one is held.
    WaitingForKey { register: u8 },
}
