use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::PROGRAM_START;
use crate::disassembler::{self, Line};
use crate::error::VmError;
use crate::instruction::Kind;
use crate::keypad::Keypad;
use crate::loader;
use crate::memory::MemoryCell;
use crate::opcode::Instruction;
use crate::operations::Context;
use crate::quirks::Quirks;
use crate::registers::Registers;
use crate::sink::{Frame, Palette, Sink};
use crate::state::{RunState, State};

/// # VM
/// An 8-bit virtual machine and its interpreted instruction set.
///
/// Tracks:
///  - current `state`
///  - the `keys` pressed by the host
///  - the `rng` behind `RND`, seedable for reproducible runs
///  - the `palette` frames are emitted with
///
/// Supplies interfaces for:
/// - loading programs and resetting
/// - pressing and releasing keys
/// - advancing by a single step
/// - disassembling the loaded program
/// - inspecting memory, registers and the frame buffer
pub struct Vm {
    state: State,
    keys: Keypad,
    rng: StdRng,
    quirks: Quirks,
    palette: Palette,
    program_len: usize,
}

/// What a successful step did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// An instruction was fetched and executed.
    Executed(Instruction),
    /// Still waiting for a key; nothing happened.
    Waiting,
    /// A held key was written to the waiting register and execution resumes.
    Resumed { register: u8, key: u8 },
}

impl Vm {
    pub fn new() -> Self {
        Vm::with_rng(StdRng::from_entropy())
    }

    /// A VM whose `RND` sequence is fixed by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Vm::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Vm {
            state: State::new(),
            keys: Keypad::new(),
            rng,
            quirks: Quirks::default(),
            palette: Palette::default(),
            program_len: 0,
        }
    }

    pub fn with_quirks(mut self, quirks: Quirks) -> Self {
        self.quirks = quirks;
        self
    }

    /// Zeroes all state and re-seeds the font. The program is not reloaded.
    pub fn reset(&mut self) {
        self.state = State::new();
        self.keys = Keypad::new();
        self.program_len = 0;
        info!("reset");
    }

    /// Parses a hex-text program and loads it at 0x200.
    /// Returns the number of bytes loaded; nothing is written on error.
    pub fn load_program(&mut self, text: &str) -> Result<usize, VmError> {
        let bytes = loader::parse_hex(text)?;
        self.load_bytes(&bytes)
    }

    /// Loads a raw program image at 0x200.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<usize, VmError> {
        self.state.memory.load(PROGRAM_START, bytes)?;
        self.program_len = bytes.len();
        info!(
            "loaded {} bytes at {:#05x}",
            self.program_len, PROGRAM_START
        );
        Ok(self.program_len)
    }

    pub fn program_len(&self) -> usize {
        self.program_len
    }

    /// Set the pressed status of `key`
    pub fn key_press(&mut self, key: u8) {
        self.keys.press(key);
    }

    /// Unset the pressed status of `key`
    pub fn key_release(&mut self, key: u8) {
        self.keys.release(key);
    }

    /// Advances the VM by a single step
    /// - while waiting for a key, polls the keypad and does nothing else
    /// - otherwise fetches, traces and executes the next instruction, emits
    ///   the frame if it changed and ticks both timers
    ///
    /// An `InvalidOpcode` error is returned once the step has otherwise
    /// completed; the word has been skipped and stepping may continue. Any
    /// other error stops the step where it happened.
    pub fn step<S: Sink + ?Sized>(&mut self, sink: &mut S) -> Result<Step, VmError> {
        if let RunState::WaitingForKey { register } = self.state.run_state {
            return Ok(self.poll_key(register));
        }

        let addr = self.state.registers.pc;
        let inst = Instruction::fetch(&self.state.memory, addr);
        self.state.registers.pc = addr.wrapping_add(2);

        let line = Line::new(addr, &inst);
        trace!("{}", line);
        sink.trace(&line);

        let fault = match Kind::resolve(inst.opcode) {
            Some(kind) => {
                let mut ctx = Context {
                    keys: &self.keys,
                    rng: &mut self.rng,
                    quirks: self.quirks,
                };
                (kind.operation())(&inst, &mut self.state, &mut ctx)?;
                None
            }
            None => {
                warn!("invalid opcode {:04x} at {:04x}", inst.opcode, addr);
                Some(VmError::InvalidOpcode {
                    opcode: inst.opcode,
                    addr,
                })
            }
        };

        if self.state.draw_flag {
            self.state.draw_flag = false;
            sink.frame(self.frame());
        }

        if self.state.registers.tick() {
            debug!("tone");
            sink.tone();
        }

        match fault {
            Some(err) => Err(err),
            None => Ok(Step::Executed(inst)),
        }
    }

    fn poll_key(&mut self, register: u8) -> Step {
        match self.keys.held() {
            Some(key) => {
                self.state.registers.v[register as usize] = key;
                self.state.run_state = RunState::Running;
                debug!("key {:x} resolved wait into v{:x}", key, register);
                Step::Resumed { register, key }
            }
            None => Step::Waiting,
        }
    }

    /// Static listing of the loaded program.
    pub fn disassemble(&self) -> Vec<Line> {
        disassembler::disassemble(&self.state.memory, PROGRAM_START, self.program_len)
    }

    /// The byte at `addr`, for diagnostic display.
    pub fn inspect(&self, addr: usize) -> Result<MemoryCell, VmError> {
        self.state.memory.inspect(addr)
    }

    pub fn memory(&self) -> &[u8] {
        self.state.memory.as_slice()
    }

    pub fn keys(&self) -> &Keypad {
        &self.keys
    }

    pub fn registers(&self) -> &Registers {
        &self.state.registers
    }

    pub fn run_state(&self) -> RunState {
        self.state.run_state
    }

    /// The current frame, whether or not it changed.
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            buffer: &self.state.frame_buffer,
            palette: &self.palette,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Changing either color requests a redraw.
    pub fn set_foreground(&mut self, color: &str) {
        self.palette.foreground = color.to_string();
        self.state.draw_flag = true;
    }

    pub fn set_background(&mut self, color: &str) {
        self.palette.background = color.to_string();
        self.state.draw_flag = true;
    }

    /// Whether a tone should currently be sounding.
    pub fn sound_active(&self) -> bool {
        self.state.registers.sound_timer > 0
    }
}

impl Default for Vm {
    fn default() -> Self {
        Self::new()
    }
}
