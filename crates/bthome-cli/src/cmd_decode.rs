/// Implementation of `bthome decode`.
///
/// Decodes one BTHome v2 service data payload and prints it in the
/// requested format. Unknown ids and truncated fields are not errors;
/// they are reported in the `unknown` tail of the output.
///
/// ```text
/// $ bthome decode "40 02 ce ff 01 64" --format text
/// BTHome v2 (encrypted: no, trigger: no), 2 readings
///   temperature  -0.5
///   battery      100
/// ```
use anyhow::{Context, Result};
use bthome_decoder::BtHomeDecoder;
use tracing::debug;

use crate::DecodeArgs;
use crate::input::payload_bytes;
use crate::render::{RenderConfig, parse_format, render_readings};

/// Run the `bthome decode` command.
///
/// # Errors
///
/// Returns an error if the payload is not hex, is empty, or the format
/// name is unrecognised.
pub fn run(args: &DecodeArgs) -> Result<()> {
    let config = RenderConfig {
        format: parse_format(&args.format)?,
    };
    let bytes = payload_bytes(&args.payload)?;
    debug!(len = bytes.len(), "decoding service data");

    let decoded = BtHomeDecoder::decode(&bytes).context("failed to decode service data")?;
    if decoded.encrypted {
        debug!("payload is flagged encrypted; fields are decoded as plaintext");
    }

    let rendered = render_readings(&decoded, &config)?;
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}
