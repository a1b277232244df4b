use crate::constants::{PROGRAM_START, REGISTER_COUNT, STACK_DEPTH};
use crate::error::VmError;

/// # Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry/borrow/collision flag
/// - (i) a 16-bit address register
/// - (pc) a 16-bit program counter
/// - (sp) the number of occupied stack slots, 0..=16
/// - (stack) 16 return addresses
/// - 2 8-bit timers (delay & sound), decremented once per executed step
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Registers {
    pub v: [u8; REGISTER_COUNT],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub stack: [u16; STACK_DEPTH],
    pub delay_timer: u8,
    pub sound_timer: u8,
}

impl Registers {
    pub fn new() -> Self {
        Registers {
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            stack: [0; STACK_DEPTH],
            delay_timer: 0,
            sound_timer: 0,
        }
    }

    /// Pushes a return address; the slot is written before the pointer moves.
    pub fn push(&mut self, addr: u16) -> Result<(), VmError> {
        let slot = self.sp as usize;
        if slot >= STACK_DEPTH {
            return Err(VmError::StackOverflow { addr: self.pc });
        }
        self.stack[slot] = addr;
        self.sp += 1;
        Ok(())
    }

    /// Pops the most recent return address.
    pub fn pop(&mut self) -> Result<u16, VmError> {
        if self.sp == 0 {
            return Err(VmError::StackUnderflow { addr: self.pc });
        }
        self.sp -= 1;
        Ok(self.stack[self.sp as usize])
    }

    /// Counts both timers down by one, flooring at zero.
    /// Returns whether the sound timer was running.
    pub fn tick(&mut self) -> bool {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        let sounding = self.sound_timer > 0;
        self.sound_timer = self.sound_timer.saturating_sub(1);
        sounding
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}
