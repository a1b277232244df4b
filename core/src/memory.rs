use std::fmt;

use crate::constants::{FONT, MEMORY_SIZE};
use crate::error::VmError;

/// # Memory
/// 4096 bytes of byte-addressable memory.
///
/// - `0x000..0x050` holds the font table
/// - `0x200..` is where programs are loaded
///
/// Addresses computed by programs (through I or the program counter) wrap at
/// the end of memory rather than faulting.
#[derive(Clone)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Zeroed memory with the font table seeded at address 0.
    pub fn new() -> Self {
        let mut bytes = [0; MEMORY_SIZE];
        bytes[0..FONT.len()].copy_from_slice(&FONT);
        Memory { bytes }
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[Memory::wrap(addr)]
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        self.bytes[Memory::wrap(addr)] = value;
    }

    /// The big-endian word at `addr` and `addr + 1`.
    pub fn word(&self, addr: u16) -> u16 {
        u16::from(self.read(addr)) << 8 | u16::from(self.read(addr.wrapping_add(1)))
    }

    /// Copies `data` into memory starting at `start` and zeroes everything
    /// after it. Nothing is written unless all of `data` fits.
    pub fn load(&mut self, start: u16, data: &[u8]) -> Result<(), VmError> {
        let start = start as usize;
        let capacity = MEMORY_SIZE.saturating_sub(start);
        if data.len() > capacity {
            return Err(VmError::ProgramTooLarge {
                len: data.len(),
                capacity,
            });
        }
        let (image, rest) = self.bytes[start..].split_at_mut(data.len());
        image.copy_from_slice(data);
        rest.iter_mut().for_each(|b| *b = 0);
        Ok(())
    }

    /// The byte stored at `addr`, for diagnostic display.
    pub fn inspect(&self, addr: usize) -> Result<MemoryCell, VmError> {
        match self.bytes.get(addr) {
            Some(&value) => Ok(MemoryCell { addr, value }),
            None => Err(VmError::AddressOutOfRange(addr)),
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    fn wrap(addr: u16) -> usize {
        addr as usize % MEMORY_SIZE
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

/// A single inspected memory location.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MemoryCell {
    pub addr: usize,
    pub value: u8,
}

impl fmt::Display for MemoryCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "address {:#05x} ({}) is {}, which byte is {:#04x}",
            self.addr, self.addr, self.value, self.value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_is_seeded() {
        let memory = Memory::new();
        assert_eq!(memory.as_slice()[0..80], FONT[..]);
        assert!(memory.as_slice()[80..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_addresses_wrap() {
        let mut memory = Memory::new();
        memory.write(0x1000, 0xAB);
        assert_eq!(memory.read(0x0000), 0xAB);
    }

    #[test]
    fn test_word_straddling_the_end_wraps() {
        let mut memory = Memory::new();
        memory.write(0xFFF, 0x12);
        assert_eq!(memory.word(0xFFF), 0x12F0);
    }

    #[test]
    fn test_load_rejects_overflow_without_writing() {
        let mut memory = Memory::new();
        let data = vec![0xFF; 0xE01];
        assert_eq!(
            memory.load(0x200, &data),
            Err(VmError::ProgramTooLarge {
                len: 0xE01,
                capacity: 0xE00
            })
        );
        assert!(memory.as_slice()[0x200..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_load_fills_to_the_last_byte() {
        let mut memory = Memory::new();
        let data = vec![0xFF; 0xE00];
        assert_eq!(memory.load(0x200, &data), Ok(()));
        assert_eq!(memory.read(0xFFF), 0xFF);
    }

    #[test]
    fn test_load_clears_the_previous_image() {
        let mut memory = Memory::new();
        memory.load(0x200, &[0x60, 0x01, 0x61, 0x02]).unwrap();
        memory.load(0x200, &[0x00, 0xE0]).unwrap();
        assert_eq!(memory.as_slice()[0x200..0x202], [0x00, 0xE0]);
        assert!(memory.as_slice()[0x202..].iter().all(|&b| b == 0));
        assert_eq!(memory.as_slice()[0..80], FONT[..]);
    }

    #[test]
    fn test_inspect() {
        let mut memory = Memory::new();
        memory.write(0x200, 0x2A);
        let cell = memory.inspect(0x200).unwrap();
        assert_eq!(cell.value, 0x2A);
        assert_eq!(
            cell.to_string(),
            "address 0x200 (512) is 42, which byte is 0x2a"
        );
        assert_eq!(memory.inspect(4096), Err(VmError::AddressOutOfRange(4096)));
    }
}
