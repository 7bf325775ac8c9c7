/// Implementation of `bthome vendor`.
///
/// Decodes vendor manufacturer data (company id first). A buffer shorter
/// than ten bytes or from another company is reported as an error here,
/// although the decoder itself just returns `None`.
use anyhow::{Result, anyhow};
use bthome_decoder::{SHELLY_COMPANY_ID, VendorDecoder, vendor::MIN_VENDOR_LEN};

use crate::VendorArgs;
use crate::input::payload_bytes;
use crate::render::{RenderConfig, parse_format, render_vendor};

/// Run the `bthome vendor` command.
///
/// # Errors
///
/// Returns an error if the payload is not hex, the format name is
/// unrecognised, or the data is not vendor manufacturer data.
pub fn run(args: &VendorArgs) -> Result<()> {
    let config = RenderConfig {
        format: parse_format(&args.format)?,
    };
    let bytes = payload_bytes(&args.payload)?;

    let data = VendorDecoder::decode(&bytes).ok_or_else(|| {
        anyhow!(
            "not vendor manufacturer data (need at least {MIN_VENDOR_LEN} bytes starting with company id {SHELLY_COMPANY_ID:#06X})"
        )
    })?;

    let rendered = render_vendor(&data, &config)?;
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}
