use crate::memory::Memory;

/// # Opcodes
///
/// Opcodes are 16 bits each. Their behavior is keyed on some combination of:
/// - `(n, _, _, _)` broad categorization; applies to all opcodes
/// - `(n, _, _, n)` specific behavior within a category
/// - `(n, _, n, n)` more specific behavior within a category
/// - `(n, n, n, n)` some fixed function that doesn't take operands (e.g. CLS)
///
/// Nibbles not used to determine the operation often (but not always) carry important data.
/// - `(_, n, n, n)` a 12-bit address
/// - `(_, _, n, n)` a byte that is assigned to and/or compared with Vx
/// - `(_, n, _, _)` the register Vx or a range of registers V0..Vx
/// - `(_, _, n, _)` the register Vy
/// - `(_, _, _, n)` a small count (e.g. sprite height)
pub trait Opcode {
    /// The Opcode's second nibble.
    /// `[_x__]`
    fn x(&self) -> u8;

    /// The Opcode's third nibble.
    /// `[__y_]`
    fn y(&self) -> u8;

    /// The Opcode's fourth nibble.
    /// `[___n]`
    fn n(&self) -> u8;

    /// The Opcode's least significant byte.
    /// `[__kk]`
    fn kk(&self) -> u8;

    /// The Opcode without its most significant nibble.
    /// `[_nnn]`
    fn nnn(&self) -> u16;
}

impl Opcode for u16 {
    fn x(&self) -> u8 {
        ((self & 0x0F00) >> 8) as u8
    }

    fn y(&self) -> u8 {
        ((self & 0x00F0) >> 4) as u8
    }

    fn n(&self) -> u8 {
        (self & 0x000F) as u8
    }

    fn kk(&self) -> u8 {
        (self & 0x00FF) as u8
    }

    fn nnn(&self) -> u16 {
        self & 0x0FFF
    }
}

/// A decoded instruction word.
///
/// Every field is extracted from every word, whether or not the operation
/// that ends up handling it uses that field.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: u16,
    pub nnn: u16,
    pub n: u8,
    pub x: u8,
    pub y: u8,
    pub kk: u8,
}

impl Instruction {
    pub fn decode(opcode: u16) -> Self {
        Instruction {
            opcode,
            nnn: opcode.nnn(),
            n: opcode.n(),
            x: opcode.x(),
            y: opcode.y(),
            kk: opcode.kk(),
        }
    }

    /// Reads the big-endian word at `addr` and decodes it.
    /// Decoding never fails; whether the word means anything is up to the opcode table.
    pub fn fetch(memory: &Memory, addr: u16) -> Self {
        Instruction::decode(memory.word(addr))
    }
}

#[cfg(test)]
mod test_opcode {
    use super::*;

    #[test]
    fn test_fields() {
        let op: u16 = 0xABCD;
        assert_eq!(op.x(), 0xB);
        assert_eq!(op.y(), 0xC);
        assert_eq!(op.n(), 0xD);
        assert_eq!(op.kk(), 0xCD);
        assert_eq!(op.nnn(), 0x0BCD);
    }

    #[test]
    fn test_decode_extracts_every_field() {
        let inst = Instruction::decode(0xD12F);
        assert_eq!(
            inst,
            Instruction {
                opcode: 0xD12F,
                nnn: 0x12F,
                n: 0xF,
                x: 0x1,
                y: 0x2,
                kk: 0x2F,
            }
        );
    }

    #[test]
    fn test_fetch_is_big_endian() {
        let mut memory = Memory::new();
        memory.write(0x200, 0xAA);
        memory.write(0x201, 0xBB);
        assert_eq!(Instruction::fetch(&memory, 0x200).opcode, 0xAABB);
    }
}
