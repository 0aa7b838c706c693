//! Envelope unwrapping: PEM framing and base64 transport encoding
//!
//! Produces the DER blobs handed to the structural walker, one per PEM block,
//! or a single blob for base64-wrapped DER. Any block that fails to decode
//! fails the whole call.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use tracing::debug;

use crate::error::{Result, X509Error};
use crate::format::{count_pem_markers, Encoding, MAX_RECLASSIFY_HOPS};

/// Padded standard alphabet; non-zero trailing bits are tolerated.
const TRANSPORT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Unwrap `input` into DER blobs, in encounter order. Never returns an empty list.
pub fn unwrap_envelope(input: &str) -> Result<Vec<Vec<u8>>> {
    let mut encoding = Encoding::classify(input);
    debug!(format = encoding.label(), len = input.len(), "classified input");

    let mut hops = 0;
    loop {
        match encoding {
            Encoding::PemText(text) => return decode_pem_blocks(&text),
            Encoding::RawStructure(der) => return Ok(vec![der]),
            Encoding::Base64Unresolved(text) => {
                if hops == MAX_RECLASSIFY_HOPS {
                    return Err(X509Error::illegal_base64("too many nested encodings"));
                }
                hops += 1;
                let decoded = decode_transport_base64(text)?;
                encoding = Encoding::reclassify(decoded);
                debug!(format = encoding.label(), "reclassified base64 payload");
            }
        }
    }
}

/// Decode every PEM block in `text` into its DER contents
pub fn decode_pem_blocks(text: &[u8]) -> Result<Vec<Vec<u8>>> {
    let blocks = pem::parse_many(text)?;
    if blocks.is_empty() {
        return Err(X509Error::illegal_base64("no complete PEM block found"));
    }
    // parse_many skips a BEGIN marker that never reaches its END marker
    let markers = count_pem_markers(text);
    if markers != blocks.len() {
        return Err(X509Error::illegal_base64(format!(
            "unterminated PEM block ({} of {markers} blocks complete)",
            blocks.len()
        )));
    }
    debug!(blocks = blocks.len(), "unwrapped PEM envelope");
    Ok(blocks.into_iter().map(pem::Pem::into_contents).collect())
}

/// Decode a base64 transport string; line breaks are ignored.
pub fn decode_transport_base64(text: &str) -> Result<Vec<u8>> {
    let compact: String = text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
    Ok(TRANSPORT_BASE64.decode(compact)?)
}
