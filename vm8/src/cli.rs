use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use vm8_core::constants::{CLOCK_SPEED, DEFAULT_BACKGROUND, DEFAULT_FOREGROUND};
use vm8_core::{Quirks, Vm, WrapMode};

#[derive(Debug, Parser)]
#[command(name = "vm8", version, about = "Steps, traces and disassembles 8-bit VM programs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a program in a window
    Run(RunArgs),
    /// Print a static listing of a program
    Disasm {
        #[command(flatten)]
        program: ProgramArgs,
    },
    /// Load a program and print the bytes at the given addresses
    Peek {
        #[command(flatten)]
        program: ProgramArgs,
        /// Addresses as decimal or 0x-prefixed hex
        #[arg(required = true, value_parser = parse_addr)]
        addrs: Vec<usize>,
    },
}

#[derive(Debug, Args)]
pub struct ProgramArgs {
    /// Program file
    pub path: PathBuf,
    #[arg(long, value_enum, default_value_t = Format::Hex)]
    pub format: Format,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Whitespace-separated hex bytes or words
    Hex,
    /// Raw program image
    Binary,
}

impl ProgramArgs {
    /// Reads the program file and loads it into `vm`.
    pub fn load_into(&self, vm: &mut Vm) -> Result<usize, Box<dyn Error>> {
        let len = match self.format {
            Format::Hex => vm.load_program(&fs::read_to_string(&self.path)?)?,
            Format::Binary => vm.load_bytes(&fs::read(&self.path)?)?,
        };
        Ok(len)
    }
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub program: ProgramArgs,
    /// Steps per second
    #[arg(long, default_value_t = CLOCK_SPEED)]
    pub clock_hz: u32,
    /// Window pixels per display pixel
    #[arg(long, default_value_t = 10)]
    pub scale: u32,
    /// Color name or #rrggbb for lit pixels
    #[arg(long, default_value_t = DEFAULT_FOREGROUND.to_string())]
    pub foreground: String,
    /// Color name or #rrggbb for unlit pixels
    #[arg(long, default_value_t = DEFAULT_BACKGROUND.to_string())]
    pub background: String,
    /// How sprites wrap off the edge of the display
    #[arg(long, value_enum, default_value_t = Wrap::Modular)]
    pub wrap: Wrap,
    /// Seed for RND; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,
    /// Print every executed instruction
    #[arg(long)]
    pub trace: bool,
}

impl RunArgs {
    pub fn build_vm(&self) -> Vm {
        let vm = match self.seed {
            Some(seed) => Vm::with_seed(seed),
            None => Vm::new(),
        };
        let mut vm = vm.with_quirks(Quirks {
            wrap: self.wrap.into(),
        });
        vm.set_foreground(&self.foreground);
        vm.set_background(&self.background);
        vm
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Wrap {
    Modular,
    SingleStep,
}

impl From<Wrap> for WrapMode {
    fn from(wrap: Wrap) -> Self {
        match wrap {
            Wrap::Modular => WrapMode::Modular,
            Wrap::SingleStep => WrapMode::SingleStep,
        }
    }
}

fn parse_addr(text: &str) -> Result<usize, String> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.map_err(|e| format!("invalid address {:?}: {}", text, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_addr() {
        assert_eq!(parse_addr("512"), Ok(512));
        assert_eq!(parse_addr("0x200"), Ok(512));
        assert_eq!(parse_addr("0XFFF"), Ok(4095));
        assert!(parse_addr("0xZZ").is_err());
        assert!(parse_addr("twelve").is_err());
    }

    #[test]
    fn test_run_defaults() {
        let cli = Cli::try_parse_from(&["vm8", "run", "pong.txt"]).unwrap();
        match cli.command {
            Command::Run(args) => {
                assert_eq!(args.clock_hz, CLOCK_SPEED);
                assert_eq!(args.program.format, Format::Hex);
                assert_eq!(args.wrap, Wrap::Modular);
                assert_eq!(args.foreground, "white");
                assert!(!args.trace);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_peek_needs_addresses() {
        assert!(Cli::try_parse_from(&["vm8", "peek", "pong.txt"]).is_err());
        let cli = Cli::try_parse_from(&["vm8", "peek", "pong.ch8", "--format", "binary", "0x200", "513"])
            .unwrap();
        match cli.command {
            Command::Peek { program, addrs } => {
                assert_eq!(program.format, Format::Binary);
                assert_eq!(addrs, vec![0x200, 513]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_build_vm_applies_palette() {
        let cli = Cli::try_parse_from(&["vm8", "run", "x", "--foreground", "#33ff00", "--seed", "3"])
            .unwrap();
        if let Command::Run(args) = cli.command {
            let vm = args.build_vm();
            assert_eq!(vm.palette().foreground, "#33ff00");
            assert_eq!(vm.palette().background, "black");
        }
    }
}
