mod ls8;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use ls8::program::read_program;
use ls8::{Ls8Error, Machine};

// Demo executado quando nenhum programa é passado.
const DEMO_PROGRAM: &[u8] = &[
    0b1000_0010, // LDI R0,8
    0b0000_0000,
    0b0000_1000,
    0b0100_0111, // PRN R0
    0b0000_0000,
    0b0000_0001, // HLT
];

#[derive(Parser, Debug)]
#[command(name = "ls8emu")]
#[command(about = "Emulator for the LS-8 byte-code machine", long_about = None)]
struct Args {
    /// Path to an LS-8 program: one binary literal per line, `#` comments
    program: Option<PathBuf>,

    /// Print a TRACE line to stderr before every instruction
    #[arg(long, action = ArgAction::SetTrue)]
    trace: bool,
}

fn main() {
    let args = Args::parse();

    let program = match args.program.as_deref() {
        Some(path) => match read_program(path) {
            Ok(bytes) => bytes,
            Err(e) => fail(&e),
        },
        None => DEMO_PROGRAM.to_vec(),
    };

    let mut machine = Machine::new();
    machine.tracing = args.trace;
    machine.load(&program);

    let result = machine.run();
    io::stdout().write_all(&machine.cpu.stdout).ok();
    if let Err(e) = result {
        fail(&e);
    }
}

fn fail(err: &Ls8Error) -> ! {
    eprintln!("{err}");
    std::process::exit(err.exit_code());
}
