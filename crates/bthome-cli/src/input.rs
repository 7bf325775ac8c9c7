//! Reading hex payloads from the command line or stdin.

use std::io::{self, Read as _};

use anyhow::{Context, Result};
use bthome_wire::hexstr::normalize_hex;

/// Resolve a payload argument to its raw hex text. `-` reads stdin.
pub fn payload_text(arg: &str) -> Result<String> {
    if arg == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("cannot read payload from stdin")?;
        Ok(text)
    } else {
        Ok(arg.to_owned())
    }
}

/// Resolve a payload argument to bytes.
///
/// # Errors
///
/// Returns an error if stdin cannot be read or the text is not hex.
pub fn payload_bytes(arg: &str) -> Result<Vec<u8>> {
    let text = payload_text(arg)?;
    normalize_hex(&text).with_context(|| format!("payload {:?} is not valid hex", text.trim()))
}
