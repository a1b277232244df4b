use std::fmt;

use crate::instruction::Kind;
use crate::memory::Memory;
use crate::opcode::Instruction;

/// One disassembled instruction: where it lives, its raw word and, when the
/// word is in the opcode table, its rendered mnemonic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub addr: u16,
    pub opcode: u16,
    pub mnemonic: Option<String>,
}

impl Line {
    pub fn new(addr: u16, inst: &Instruction) -> Self {
        Line {
            addr,
            opcode: inst.opcode,
            mnemonic: Kind::resolve(inst.opcode).map(|kind| kind.render(inst)),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.mnemonic {
            Some(text) => write!(f, "{:04x}: {:04x} {}", self.addr, self.opcode, text),
            None => write!(f, "{:04x}: {:04x} invalid opcode", self.addr, self.opcode),
        }
    }
}

/// Lists `len` bytes of memory from `start` two bytes at a time.
/// Memory is only read, so this is safe to run against a live VM.
pub fn disassemble(memory: &Memory, start: u16, len: usize) -> Vec<Line> {
    (0..len)
        .step_by(2)
        .map(|offset| {
            let addr = start.wrapping_add(offset as u16);
            Line::new(addr, &Instruction::fetch(memory, addr))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_with(program: &[u8]) -> Memory {
        let mut memory = Memory::new();
        memory.load(0x200, program).unwrap();
        memory
    }

    #[test]
    fn test_listing() {
        let memory = memory_with(&[0x00, 0xE0, 0xA2, 0x2A, 0x60, 0x0C, 0xFF, 0xFF]);
        let listing: Vec<String> = disassemble(&memory, 0x200, 8)
            .iter()
            .map(|line| line.to_string())
            .collect();
        assert_eq!(
            listing,
            vec![
                "0200: 00e0 CLS",
                "0202: a22a LD I 22a",
                "0204: 600c LD 0 c",
                "0206: ffff invalid opcode",
            ]
        );
    }

    #[test]
    fn test_odd_length_reads_one_past_the_end() {
        let memory = memory_with(&[0x12, 0x00, 0x6A]);
        let listing = disassemble(&memory, 0x200, 3);
        assert_eq!(listing.len(), 2);
        assert_eq!(listing[1].opcode, 0x6A00);
    }

    #[test]
    fn test_empty_range() {
        assert!(disassemble(&Memory::new(), 0x200, 0).is_empty());
    }
}
