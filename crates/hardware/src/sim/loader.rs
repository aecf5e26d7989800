//! Machine-Code Loader.
//!
//! This module reads LC-2K machine-code images. It performs:
//! 1. **Parsing:** One decimal integer per line, read the way `%d` scanning
//!    reads it: leading whitespace and an optional sign, then digits, with any
//!    trailing text on the line ignored.
//! 2. **Reinterpretation:** Values above `i32::MAX` but within `u32` keep their
//!    32-bit pattern (so `4294967295` loads as `-1`).
//! 3. **Capacity Check:** Rejects images larger than the configured memories.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::error::LoadError;
use crate::config::MemoryConfig;
use crate::isa::instruction::Word;

/// A loaded machine-code image, word 0 first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    words: Vec<Word>,
}

impl Program {
    /// Wraps an already-encoded image.
    pub const fn from_words(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// The image words.
    pub const fn words(&self) -> &[Word] {
        self.words.as_slice()
    }

    /// Number of words in the image.
    pub const fn len(&self) -> usize {
        self.words.len()
    }

    /// True for an empty image.
    pub const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Checks that the image fits both memories.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::TooLarge`] naming the smaller capacity that is exceeded.
    pub fn check_fits(&self, config: &MemoryConfig) -> Result<(), LoadError> {
        let capacity = config.instr_words.min(config.data_words);
        if self.words.len() > capacity {
            return Err(LoadError::TooLarge {
                words: self.words.len(),
                capacity,
            });
        }
        Ok(())
    }
}

/// Splits an image into lines, dropping `\n` or `\r\n` terminators.
fn image_lines(image: &[u8]) -> impl Iterator<Item = &[u8]> {
    image.split_inclusive(|&b| b == b'\n').map(|line| {
        let line = line.strip_suffix(b"\n").unwrap_or(line);
        line.strip_suffix(b"\r").unwrap_or(line)
    })
}

/// Scans a leading decimal integer from `line`.
///
/// Returns `None` when the line has no number or the number does not fit in
/// 32 bits (signed or unsigned).
fn scan_word(line: &[u8]) -> Option<Word> {
    let start = line.iter().position(|b| !b.is_ascii_whitespace())?;
    let s = &line[start..];
    let (negative, rest) = match s.split_first()? {
        (b'-', rest) => (true, rest),
        (b'+', rest) => (false, rest),
        _ => (false, s),
    };
    let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }

    let magnitude = rest[..digits].iter().try_fold(0i64, |acc, &d| {
        acc.checked_mul(10)?.checked_add(i64::from(d - b'0'))
    })?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).map_or_else(|_| u32::try_from(value).ok().map(|v| v as i32), Some)
}

/// Parses a machine-code image.
///
/// The image is scanned as raw bytes, so a line that is not valid UTF-8 is
/// reported like any other unreadable line.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] with the zero-based address of the first line
/// that does not start with a number.
///
/// # Examples
///
/// ```
/// use lc2k_core::sim::loader::parse_program;
///
/// let program = parse_program("8454151\n  25165824 halt\n-1\n").unwrap();
/// assert_eq!(program.words(), &[8454151, 25165824, -1]);
/// assert!(parse_program("1\n\n2\n").is_err());
/// ```
pub fn parse_program<T: AsRef<[u8]> + ?Sized>(image: &T) -> Result<Program, LoadError> {
    let words = image_lines(image.as_ref())
        .enumerate()
        .map(|(address, line)| {
            scan_word(line).ok_or_else(|| LoadError::Parse {
                address,
                line: String::from_utf8_lossy(line).into_owned(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Program::from_words(words))
}

/// Reads and parses a machine-code file.
///
/// # Errors
///
/// Returns [`LoadError::Open`] if the file cannot be read, or
/// [`LoadError::Parse`] for a malformed line.
pub fn load_program(path: &Path) -> Result<Program, LoadError> {
    let image = fs::read(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let program = parse_program(&image)?;
    debug!(path = %path.display(), words = program.len(), "program loaded");
    Ok(program)
}
