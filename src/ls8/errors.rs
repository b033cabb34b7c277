use thiserror::Error;

/// Errors that can occur while loading or running an LS-8 program.
/// All of them are fatal; there is no recovery or restart layer.
#[derive(Error, Debug)]
pub enum Ls8Error {
    /// Program file could not be read.
    #[error("program not found: {0}")]
    ProgramNotFound(String),

    /// A source line is not an 8-bit binary literal.
    #[error("line {line}: invalid binary literal `{text}`")]
    BadLiteral { line: usize, text: String },

    /// More program bytes than the machine has memory.
    #[error("program of {0} bytes does not fit in memory")]
    ProgramTooLarge(usize),

    /// Fetched opcode has no handler bound in the dispatch table.
    #[error("unknown instruction {0:#010b}")]
    IllegalInstruction(u8),

    /// POP or RET with the stack already empty.
    #[error("stack underflow: the stack is empty")]
    StackUnderflow,
}

impl Ls8Error {
    /// Process exit status for a fatal fault.
    pub fn exit_code(&self) -> i32 {
        match self {
            Ls8Error::IllegalInstruction(_) => 1,
            Ls8Error::ProgramNotFound(_)
            | Ls8Error::BadLiteral { .. }
            | Ls8Error::ProgramTooLarge(_) => 2,
            Ls8Error::StackUnderflow => 3,
        }
    }
}
