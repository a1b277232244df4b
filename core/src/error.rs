use thiserror::Error;

/// Faults raised by the VM.
///
/// Only `InvalidOpcode` is recoverable: the offending word has already been
/// skipped and the host may keep stepping. Everything else should stop it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VmError {
    /// The word at `addr` matches no entry in the opcode table.
    #[error("invalid opcode {opcode:04x} at {addr:04x}")]
    InvalidOpcode { opcode: u16, addr: u16 },
    /// A call was made with every stack slot in use.
    #[error("stack overflow calling from {addr:04x}")]
    StackOverflow { addr: u16 },
    /// A return was made with an empty stack.
    #[error("stack underflow returning from {addr:04x}")]
    StackUnderflow { addr: u16 },
    /// The program doesn't fit between the load address and the end of memory.
    #[error("program of {len} bytes exceeds the {capacity} bytes available")]
    ProgramTooLarge { len: usize, capacity: usize },
    /// A program token that isn't two (or four) hexadecimal characters.
    #[error("line {line}: malformed byte token {token:?}")]
    MalformedToken { token: String, line: usize },
    #[error("address {0:#x} is outside of memory")]
    AddressOutOfRange(usize),
}

impl VmError {
    /// Whether the host should stop stepping after this fault.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, VmError::InvalidOpcode { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_invalid_opcodes_are_recoverable() {
        assert!(!VmError::InvalidOpcode {
            opcode: 0xFFFF,
            addr: 0x200
        }
        .is_fatal());
        assert!(VmError::StackOverflow { addr: 0x200 }.is_fatal());
        assert!(VmError::StackUnderflow { addr: 0x200 }.is_fatal());
    }

    #[test]
    fn test_messages_render_hex() {
        let err = VmError::InvalidOpcode {
            opcode: 0xFFFF,
            addr: 0x20E,
        };
        assert_eq!(err.to_string(), "invalid opcode ffff at 020e");
    }
}
