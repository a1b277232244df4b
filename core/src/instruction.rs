use crate::opcode::Instruction;
use crate::operations::*;

/// Every instruction the VM understands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    Cls,
    Ret,
    Jp,
    Call,
    SeByte,
    SneByte,
    SeReg,
    LdByte,
    AddByte,
    LdReg,
    Or,
    And,
    Xor,
    AddReg,
    Sub,
    Shr,
    Subn,
    Shl,
    SneReg,
    LdI,
    JpV0,
    Rnd,
    Drw,
    Skp,
    Sknp,
    LdFromDelay,
    LdKey,
    LdDelay,
    LdSound,
    AddI,
    LdFont,
    LdBcd,
    Store,
    Load,
}

/// The masks tried, in order, when resolving an opcode to its table key.
/// - `0xFFFF` the fixed zero-operand instructions
/// - `0xF0FF` leading nibble + trailing byte (`Fx33`, `Ex9E`, ...)
/// - `0xF00F` leading nibble + trailing nibble (`8xy4`, ...)
/// - `0xF000` leading nibble alone (`1nnn`, `6xkk`, ...)
const MASKS: [u16; 4] = [0xFFFF, 0xF0FF, 0xF00F, 0xF000];

impl Kind {
    /// Selects the Kind for an opcode, trying each of `MASKS` in turn.
    /// The first masked value that is a table key wins.
    pub fn resolve(opcode: u16) -> Option<Kind> {
        MASKS
            .iter()
            .find_map(|mask| Kind::from_key(opcode & mask))
    }

    /// Exact lookup of a table key.
    pub fn from_key(key: u16) -> Option<Kind> {
        use Kind::*;

        let kind = match key {
            0x00E0 => Cls,
            0x00EE => Ret,
            0x1000 => Jp,
            0x2000 => Call,
            0x3000 => SeByte,
            0x4000 => SneByte,
            0x5000 => SeReg,
            0x6000 => LdByte,
            0x7000 => AddByte,
            0x8000 => LdReg,
            0x8001 => Or,
            0x8002 => And,
            0x8003 => Xor,
            0x8004 => AddReg,
            0x8005 => Sub,
            0x8006 => Shr,
            0x8007 => Subn,
            0x800E => Shl,
            0x9000 => SneReg,
            0xA000 => LdI,
            0xB000 => JpV0,
            0xC000 => Rnd,
            0xD000 => Drw,
            0xE09E => Skp,
            0xE0A1 => Sknp,
            0xF007 => LdFromDelay,
            0xF00A => LdKey,
            0xF015 => LdDelay,
            0xF018 => LdSound,
            0xF01E => AddI,
            0xF029 => LdFont,
            0xF033 => LdBcd,
            0xF055 => Store,
            0xF065 => Load,
            _ => return None,
        };
        Some(kind)
    }

    /// The template used for disassembly. Operand tokens `nnn`, `n`, `x`,
    /// `y` and `kk` are replaced by the instruction's fields.
    pub fn mnemonic(self) -> &'static str {
        use Kind::*;

        match self {
            Cls => "CLS",
            Ret => "RET",
            Jp => "JP nnn",
            Call => "CALL nnn",
            SeByte => "SE x kk",
            SneByte => "SNE x kk",
            SeReg => "SE x y",
            LdByte => "LD x kk",
            AddByte => "ADD x kk",
            LdReg => "LD x y",
            Or => "OR x y",
            And => "AND x y",
            Xor => "XOR x y",
            AddReg => "ADD x y",
            Sub => "SUB x y",
            Shr => "SHR x",
            Subn => "SUBN x y",
            Shl => "SHL x",
            SneReg => "SNE x y",
            LdI => "LD I nnn",
            JpV0 => "JP V0 nnn",
            Rnd => "RND x kk",
            Drw => "DRW x y n",
            Skp => "SKP x",
            Sknp => "SKNP x",
            LdFromDelay => "LD x DT",
            LdKey => "LD x K",
            LdDelay => "LD DT x",
            LdSound => "LD ST x",
            AddI => "ADD I x",
            LdFont => "LD F x",
            LdBcd => "LD B x",
            Store => "LD [I] x",
            Load => "LD x [I]",
        }
    }

    /// The function that executes this Kind.
    pub fn operation(self) -> Operation {
        use Kind::*;

        match self {
            Cls => clr,
            Ret => rts,
            Jp => jump,
            Call => call,
            SeByte => ske,
            SneByte => skne,
            SeReg => skre,
            LdByte => load,
            AddByte => add,
            LdReg => mv,
            Or => or,
            And => and,
            Xor => xor,
            AddReg => addr,
            Sub => sub,
            Shr => shr,
            Subn => subn,
            Shl => shl,
            SneReg => skrne,
            LdI => loadi,
            JpV0 => jumpi,
            Rnd => rnd,
            Drw => draw,
            Skp => skpr,
            Sknp => skup,
            LdFromDelay => moved,
            LdKey => keyd,
            LdDelay => loaddt,
            LdSound => loadst,
            AddI => addi,
            LdFont => ldspr,
            LdBcd => bcd,
            Store => stor,
            Load => read,
        }
    }

    /// Renders `inst` with this Kind's mnemonic; fields are lowercase hex.
    pub fn render(self, inst: &Instruction) -> String {
        self.mnemonic()
            .split_whitespace()
            .map(|token| match token {
                "nnn" => format!("{:x}", inst.nnn),
                "n" => format!("{:x}", inst.n),
                "x" => format!("{:x}", inst.x),
                "y" => format!("{:x}", inst.y),
                "kk" => format!("{:x}", inst.kk),
                literal => literal.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
