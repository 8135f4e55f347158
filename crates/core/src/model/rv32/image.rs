//! Instruction memory images in `$readmemh` text form.
//!
//! The model initializes its own instruction memory from an image; the driver never touches
//! memory contents. Accepted syntax:
//! 1. **Words:** Whitespace-separated hexadecimal words, `_` separators allowed.
//! 2. **Comments:** `//` to end of line.
//! 3. **Addresses:** `@<hex>` moves the load pointer to a word address; gaps read as zero.

use std::fs;
use std::path::Path;

use crate::common::{Result, SimError};

/// Highest word address an image may populate.
pub const MAX_IMAGE_WORDS: usize = 1 << 16;

/// Parses a `$readmemh` image into instruction words, indexed by word address.
///
/// # Errors
///
/// Returns [`SimError::ProgramImage`] for tokens that are not hexadecimal, words wider than
/// 32 bits, or addresses past [`MAX_IMAGE_WORDS`].
pub fn parse_hex_image(text: &str) -> Result<Vec<u32>> {
    let mut words = Vec::new();
    let mut addr = 0usize;

    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.split("//").next().unwrap_or_default();
        for token in line.split_whitespace() {
            let err = |reason: String| SimError::ProgramImage {
                line: lineno + 1,
                reason,
            };

            if let Some(target) = token.strip_prefix('@') {
                addr = usize::from_str_radix(&target.replace('_', ""), 16)
                    .map_err(|_| err(format!("bad address '{token}'")))?;
                continue;
            }

            let value = u32::from_str_radix(&token.replace('_', ""), 16)
                .map_err(|_| err(format!("bad word '{token}'")))?;
            if addr >= MAX_IMAGE_WORDS {
                return Err(err(format!(
                    "word address {addr:#x} exceeds {MAX_IMAGE_WORDS:#x}"
                )));
            }
            if words.len() <= addr {
                words.resize(addr + 1, 0);
            }
            words[addr] = value;
            addr += 1;
        }
    }

    Ok(words)
}

/// Reads and parses an image file.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read, otherwise as [`parse_hex_image`].
pub fn load_hex_image(path: &Path) -> Result<Vec<u32>> {
    let text = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_hex_image(&text)
}
