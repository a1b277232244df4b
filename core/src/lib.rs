pub use disassembler::Line;
pub use error::VmError;
pub use framebuffer::FrameBuffer;
pub use keypad::Keypad;
pub use memory::MemoryCell;
pub use opcode::Instruction;
pub use quirks::{Quirks, WrapMode};
pub use registers::Registers;
pub use sink::{Frame, Palette, Sink};
pub use state::RunState;
pub use vm::{Step, Vm};

pub mod constants;
mod disassembler;
mod error;
mod framebuffer;
mod instruction;
mod keypad;
mod loader;
mod memory;
mod opcode;
mod operations;
mod quirks;
mod registers;
mod sink;
mod state;
mod vm;
