use rand::rngs::StdRng;
use rand::Rng;

use crate::constants::GLYPH_SIZE;
use crate::error::VmError;
use crate::keypad::Keypad;
use crate::opcode::Instruction;
use crate::quirks::Quirks;
use crate::state::{RunState, State};

/// Everything an operation may consult besides the machine state itself.
pub struct Context<'a> {
    pub keys: &'a Keypad,
    pub rng: &'a mut StdRng,
    pub quirks: Quirks,
}

/// Executes one instruction against `state`.
///
/// The program counter already points past the instruction when this runs.
pub type Operation = fn(&Instruction, &mut State, &mut Context) -> Result<(), VmError>;

/// clear
pub fn clr(_inst: &Instruction, state: &mut State, _ctx: &mut Context) -> Result<(), VmError> {
    state.frame_buffer.clear();
    state.draw_flag = true;
    Ok(())
}

/// PC = STACK.pop()
pub fn rts(_inst: &Instruction, state: &mut State, _ctx: &mut Context) -> Result<(), VmError> {
    state.registers.pc = state.registers.pop()?;
    Ok(())
}

/// PC = nnn
pub fn jump(inst: &Instruction, state: &mut State, _ctx: &mut Context) -> Result<(), VmError> {
    state.registers.pc = inst.nnn;
    Ok(())
}

/// STACK.push(PC); PC = nnn
pub fn call(inst: &Instruction, state: &mut State, _ctx: &mut Context) -> Result<(), VmError> {
    let pc = state.registers.pc;
    state.registers.push(pc)?;
    state.registers.pc = inst.nnn;
    Ok(())
}

fn skip_if(state: &mut State, condition: bool) {
    if condition {
        state.registers.pc = state.registers.pc.wrapping_add(2);
    }
}

/// if Vx == kk then pc += 2
pub fn ske(inst: &Instruction, state: &mut State, _ctx: &mut Context) -> Result<(), VmError> {
    let vx = state.registers.v[inst.x as usize];
    skip_if(state, vx == inst.kk);
    Ok(())
}

/// if Vx != kk then pc += 2
pub fn skne(inst: &Instruction, state: &mut State, _ctx: &mut Context) -> Result<(), VmError> {
    let vx = state.registers.v[inst.x as usize];
    skip_if(state, vx != inst.kk);
    Ok(())
}

/// if Vx == Vy then pc += 2
pub fn skre(inst: &Instruction, state: &mut State, _ctx: &mut Context) -> Result<(), VmError> {
    let v = state.registers.v;
    skip_if(state, v[inst.x as usize] == v[inst.y as usize]);
    Ok(())
}

/// if Vx != Vy then pc += 2
pub fn skrne(inst: &Instruction, state: &mut State, _ctx: &mut Context) -> Result<(), VmError> {
    let v = state.registers.v;
    skip_if(state, v[inst.x as usize] != v[inst.y as usize]);
    Ok(())
}

/// Vx = kk
pub fn load(inst: &Instruction, state: &mut State, _ctx: &mut Context) -> Result<(), VmError> {
    state.registers.v[inst.x as usize] = inst.kk;
    Ok(())
}

/// Vx += kk
/// Overflow is dropped and VF is left alone
pub fn add(inst: &Instruction, state: &mut State, _ctx: &mut Context) -> Result<(), VmError> {
    let vx = &mut state.registers.v[inst.x as usize];
    *vx = vx.wrapping_add(inst.kk);
    Ok(())
}

/// Vx = Vy
pub fn mv(inst: &Instruction, state: &mut State, _ctx: &mut Context) -> Result<(), VmError> {
    let v = &mut state.registers.v;
    v[inst.x as usize] = v[inst.y as usize];
    Ok(())
}

/// Vx |= Vy
pub fn or(inst: &Instruction, state: &mut State, _ctx: &mut Context) -> Result<(), VmError> {
    let v = &mut state.registers.v;
    v[inst.x as usize] |= v[inst.y as usize];
    Ok(())
}

/// Vx &= Vy
pub fn and(inst: &Instruction, state: &mut State, _ctx: &mut Context) -> Result<(), VmError> {
    let v = &mut state.registers.v;
    v[inst.x as usize] &= v[inst.y as usize];
    Ok(())
}

/// Vx ^= Vy
pub fn xor(inst: &Instruction, state: &mut State, _ctx: &mut Context) -> Result<(), VmError> {
    let v = &mut state.registers.v;
    v[inst.x as usize] ^= v[inst.y as usize];
    Ok(())
}

/// Vx += Vy; VF = carry
pub fn addr(inst: &Instruction, state: &mut State, _ctx: &mut Context) -> Result<(), VmError> {
    let v = &mut state.registers.v;
    let sum = u16::from(v[inst.x as usize]) + u16::from(v[inst.y as usize]);
    v[0xF] = (sum > 0xFF) as u8;
    v[inst.x as usize] = (sum % 0x100) as u8;
    Ok(())
}

/// Vx -= Vy; VF = Vx > Vy
pub fn sub(inst: &Instruction, state: &mut State, _ctx: &mut Context) -> Result<(), VmError> {
    let v = &mut state.registers.v;
    let (vx, vy) = (v[inst.x as usize], v[inst.y as usize]);
    v[0xF] = (vx > vy) as u8;
    v[inst.x as usize] = vx.wrapping_sub(vy);
    Ok(())
}

/// Vx >>= 1; VF = the bit shifted out
pub fn shr(inst: &Instruction, state: &mut State, _ctx: &mut Context) -> Result<(), VmError> {
    let v = &mut state.registers.v;
    let vx = v[inst.x as usize];
    v[0xF] = vx & 0x1;
    v[inst.x as usize] = vx >> 1;
    Ok(())
}

/// Vx = Vy - Vx; VF = Vy > Vx
pub fn subn(inst: &Instruction, state: &mut State, _ctx: &mut Context) -> Result<(), VmError> {
    let v = &mut state.registers.v;
    let (vx, vy) = (v[inst.x as usize], v[inst.y as usize]);
    v[0xF] = (vy > vx) as u8;
    v[inst.x as usize] = vy.wrapping_sub(vx);
    Ok(())
}

/// Vx <<= 1; VF = the bit shifted out
pub fn shl(inst: &Instruction, state: &mut State, _ctx: &mut Context) -> Result<(), VmError> {
    let v = &mut state.registers.v;
    let vx = v[inst.x as usize];
    v[0xF] = vx >> 7;
    v[inst.x as usize] = vx << 1;
    Ok(())
}

/// I = nnn
pub fn loadi(inst: &Instruction, state: &mut State, _ctx: &mut Context) -> Result<(), VmError> {
    state.registers.i = inst.nnn;
    Ok(())
}

/// PC = V0 + nnn
pub fn jumpi(inst: &Instruction, state: &mut State, _ctx: &mut Context) -> Result<(), VmError> {
    state.registers.pc = u16::from(state.registers.v[0x0]).wrapping_add(inst.nnn);
    Ok(())
}

/// Vx = random_byte & kk
pub fn rnd(inst: &Instruction, state: &mut State, ctx: &mut Context) -> Result<(), VmError> {
    let byte: u8 = ctx.rng.gen();
    state.registers.v[inst.x as usize] = byte & inst.kk;
    Ok(())
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs the sprite at memory I..I+n onto the frame buffer.
/// VF = whether any pixel was erased
pub fn draw(inst: &Instruction, state: &mut State, ctx: &mut Context) -> Result<(), VmError> {
    let registers = &mut state.registers;
    registers.v[0xF] = 0x0;
    let x = registers.v[inst.x as usize];
    let y = registers.v[inst.y as usize];

    let mut sprite = [0; 0xF];
    let rows = inst.n as usize;
    for (row, byte) in sprite[..rows].iter_mut().enumerate() {
        *byte = state.memory.read(registers.i.wrapping_add(row as u16));
    }

    let collision = state
        .frame_buffer
        .draw_sprite(x, y, &sprite[..rows], ctx.quirks.wrap);
    registers.v[0xF] = collision as u8;
    state.draw_flag = true;
    Ok(())
}

/// if Vx.pressed then pc += 2
pub fn skpr(inst: &Instruction, state: &mut State, ctx: &mut Context) -> Result<(), VmError> {
    let key = state.registers.v[inst.x as usize];
    skip_if(state, ctx.keys.is_pressed(key));
    Ok(())
}

/// if !Vx.pressed then pc += 2
pub fn skup(inst: &Instruction, state: &mut State, ctx: &mut Context) -> Result<(), VmError> {
    let key = state.registers.v[inst.x as usize];
    skip_if(state, !ctx.keys.is_pressed(key));
    Ok(())
}

/// Vx = DT
pub fn moved(inst: &Instruction, state: &mut State, _ctx: &mut Context) -> Result<(), VmError> {
    state.registers.v[inst.x as usize] = state.registers.delay_timer;
    Ok(())
}

/// await keypress for Vx
pub fn keyd(inst: &Instruction, state: &mut State, _ctx: &mut Context) -> Result<(), VmError> {
    state.run_state = RunState::WaitingForKey { register: inst.x };
    Ok(())
}

/// DT = Vx
pub fn loaddt(inst: &Instruction, state: &mut State, _ctx: &mut Context) -> Result<(), VmError> {
    state.registers.delay_timer = state.registers.v[inst.x as usize];
    Ok(())
}

/// ST = Vx
pub fn loadst(inst: &Instruction, state: &mut State, _ctx: &mut Context) -> Result<(), VmError> {
    state.registers.sound_timer = state.registers.v[inst.x as usize];
    Ok(())
}

/// I += Vx
pub fn addi(inst: &Instruction, state: &mut State, _ctx: &mut Context) -> Result<(), VmError> {
    let vx = u16::from(state.registers.v[inst.x as usize]);
    state.registers.i = state.registers.i.wrapping_add(vx);
    Ok(())
}

/// I = Vx * 5
/// Points I at the font glyph for the digit in Vx
pub fn ldspr(inst: &Instruction, state: &mut State, _ctx: &mut Context) -> Result<(), VmError> {
    state.registers.i = u16::from(state.registers.v[inst.x as usize]) * GLYPH_SIZE;
    Ok(())
}

/// mem[I..I+3] = bcd(Vx)
pub fn bcd(inst: &Instruction, state: &mut State, _ctx: &mut Context) -> Result<(), VmError> {
    let vx = state.registers.v[inst.x as usize];
    let i = state.registers.i;
    state.memory.write(i, vx / 100);
    state.memory.write(i.wrapping_add(1), vx / 10 % 10);
    state.memory.write(i.wrapping_add(2), vx % 10);
    Ok(())
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(inst: &Instruction, state: &mut State, _ctx: &mut Context) -> Result<(), VmError> {
    let i = state.registers.i;
    for (offset, &value) in state.registers.v[..=inst.x as usize].iter().enumerate() {
        state.memory.write(i.wrapping_add(offset as u16), value);
    }
    Ok(())
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(inst: &Instruction, state: &mut State, _ctx: &mut Context) -> Result<(), VmError> {
    let i = state.registers.i;
    for (offset, value) in state.registers.v[..=inst.x as usize].iter_mut().enumerate() {
        *value = state.memory.read(i.wrapping_add(offset as u16));
    }
    Ok(())
}
