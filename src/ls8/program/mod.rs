// ls8/program/mod.rs
use std::fs;
use std::path::Path;

use crate::ls8::arch::MEMORY_SIZE;
use crate::ls8::errors::Ls8Error;

/// Parses LS-8 source text: one binary literal per line, `#` starts a
/// comment, blank and comment-only lines are skipped.
pub fn parse(text: &str) -> Result<Vec<u8>, Ls8Error> {
    let mut bytes = Vec::new();
    for (line_no, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or(raw).trim();
        if line.is_empty() {
            continue;
        }
        let byte = u8::from_str_radix(line, 2).map_err(|_| Ls8Error::BadLiteral {
            line: line_no + 1,
            text: line.to_string(),
        })?;
        bytes.push(byte);
    }
    if bytes.len() > MEMORY_SIZE {
        return Err(Ls8Error::ProgramTooLarge(bytes.len()));
    }
    Ok(bytes)
}

/// Reads and parses a program file.
pub fn read_program(path: &Path) -> Result<Vec<u8>, Ls8Error> {
    let text = fs::read_to_string(path)
        .map_err(|_| Ls8Error::ProgramNotFound(path.display().to_string()))?;
    parse(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_literals_and_skips_comments_and_blanks() {
        let src = "# print8\n10000010 # LDI R0,8\n00000000\n\n00001000\n";
        assert_eq!(parse(src).expect("parse"), vec![0b1000_0010, 0, 8]);
    }

    #[test]
    fn bad_literal_names_the_line() {
        let src = "10000010\nxyz\n";
        match parse(src) {
            Err(Ls8Error::BadLiteral { line, text }) => {
                assert_eq!(line, 2);
                assert_eq!(text, "xyz");
            }
            other => panic!("expected BadLiteral, got {other:?}"),
        }
    }

    #[test]
    fn nine_bit_literal_is_rejected() {
        assert!(matches!(
            parse("111111111\n"),
            Err(Ls8Error::BadLiteral { line: 1, .. })
        ));
    }

    #[test]
    fn oversized_program_is_rejected() {
        let src = "00000001\n".repeat(257);
        assert!(matches!(
            parse(&src),
            Err(Ls8Error::ProgramTooLarge(257))
        ));
    }

    #[test]
    fn missing_file_maps_to_exit_code_two() {
        let err = read_program(Path::new("no/such/file.ls8")).unwrap_err();
        assert!(matches!(err, Ls8Error::ProgramNotFound(_)));
        assert_eq!(err.exit_code(), 2);
    }
}
