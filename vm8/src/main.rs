use std::error::Error;

use clap::Parser;
use env_logger::Env;

use vm8_core::Vm;

use crate::cli::{Cli, Command};

mod cli;
mod keymap;
mod run;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Run(args) => run::run(&args),
        Command::Disasm { program } => {
            let mut vm = Vm::new();
            program.load_into(&mut vm)?;
            for line in vm.disassemble() {
                println!("{}", line);
            }
            Ok(())
        }
        Command::Peek { program, addrs } => {
            let mut vm = Vm::new();
            program.load_into(&mut vm)?;
            for addr in addrs {
                println!("{}", vm.inspect(addr)?);
            }
            Ok(())
        }
    }
}
