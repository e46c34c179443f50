//! Hierarchical cell scheme.
//!
//! Takes the hex index of the resolution-9 cell containing a coordinate,
//! slices out the region and base-7 digits, scrambles them with the guarded
//! bit swaps and reads the result as one number:
//! `region * 7^R + sum(d_k * 7^(R-1-k))`. That number becomes three base-N
//! chord indices.

use tracing::{debug, trace};

use crate::bitswap::BitSwapSpec;
use crate::config::{HierarchicalConfig, OverflowPolicy, H3_RESOLUTION, MAX_REGION};
use crate::payload::{PayloadBits, NO_CHILD};
use crate::{ChordIndexTriple, Error, Result};

const RESOLUTION: usize = H3_RESOLUTION as usize;
const SEPTENARY: u64 = 7;
const MAX_HEX_DIGITS: usize = 16;

/// Parse a cell index given as up to 16 hex digits (left-padded with zeros).
pub fn parse_cell_index(hex: &str) -> Result<u64> {
    let malformed = || Error::MalformedIndex(hex.to_string());

    if hex.is_empty()
        || hex.len() > MAX_HEX_DIGITS
        || !hex.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return Err(malformed());
    }
    u64::from_str_radix(hex, 16).map_err(|_| malformed())
}

/// Read a payload as `region * 7^R + digits`, checking every field.
pub fn payload_to_decimal(payload: PayloadBits) -> Result<u64> {
    let region = payload.region();
    if region > MAX_REGION {
        return Err(Error::InvalidRegion(region));
    }

    payload
        .digits()
        .iter()
        .enumerate()
        .try_fold(region, |acc, (position, &value)| {
            if value >= NO_CHILD {
                return Err(Error::InvalidCellDigit { position, value });
            }
            Ok(acc * SEPTENARY + u64::from(value))
        })
}

/// Split a decimal back into region and digits. Inverse of
/// [`payload_to_decimal`] on its range.
pub fn decimal_to_payload(decimal: u64) -> Result<PayloadBits> {
    let mut digits = [0u8; RESOLUTION];
    let mut rest = decimal;
    for slot in digits.iter_mut().rev() {
        *slot = (rest % SEPTENARY) as u8;
        rest /= SEPTENARY;
    }
    if rest > MAX_REGION {
        return Err(Error::InvalidRegion(rest));
    }
    PayloadBits::from_parts(rest, &digits)
}

/// Decoder for the hierarchical scheme. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct HierarchicalDecoder {
    config: HierarchicalConfig,
}

impl HierarchicalDecoder {
    pub fn new(config: HierarchicalConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            n_chords = config.n_chords,
            swaps = config.swaps.pairs().len(),
            overflow = ?config.overflow,
            "hierarchical decoder ready"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &HierarchicalConfig {
        &self.config
    }

    pub fn swaps(&self) -> &BitSwapSpec {
        &self.config.swaps
    }

    /// Unscrambled payload of a hex cell index.
    pub fn payload(&self, hex: &str) -> Result<PayloadBits> {
        parse_cell_index(hex).map(PayloadBits::from_cell_index)
    }

    /// Scrambled decimal value of a payload.
    pub fn decimal(&self, payload: PayloadBits) -> Result<u64> {
        let swapped = self.config.swaps.forward(payload);
        trace!(%payload, %swapped, "bit swap");
        payload_to_decimal(swapped)
    }

    pub fn encode_payload(&self, payload: PayloadBits) -> Result<ChordIndexTriple> {
        let decimal = self.decimal(payload)?;
        let capacity = self.config.capacity();

        let value = match self.config.overflow {
            _ if decimal < capacity => decimal,
            OverflowPolicy::Truncate => {
                let mut leading = decimal;
                while leading >= capacity {
                    leading /= self.config.n_chords;
                }
                debug!(decimal, leading, "decimal exceeds three digits, keeping leading digits");
                leading
            }
            OverflowPolicy::Wrap => {
                debug!(decimal, capacity, "decimal exceeds three digits, wrapping");
                decimal % capacity
            }
            OverflowPolicy::Reject => decimal,
        };
        ChordIndexTriple::from_value(value, self.config.n_chords)
    }

    pub fn encode(&self, hex: &str) -> Result<ChordIndexTriple> {
        let triple = self.encode_payload(self.payload(hex)?)?;
        trace!(index = hex, %triple, "hierarchical code");
        Ok(triple)
    }

    /// Recover the unscrambled payload from a triple.
    ///
    /// Exact for triples this decoder produced without overflow.
    pub fn invert(&self, triple: ChordIndexTriple) -> Result<PayloadBits> {
        let decimal = triple.value(self.config.n_chords)?;
        let swapped = decimal_to_payload(decimal)?;
        Ok(self.config.swaps.inverse(swapped))
    }
}

/// Encode a hex cell index with the default hierarchical constants.
///
/// ```
/// use what3chords_core::encode_hierarchical;
///
/// let triple = encode_hierarchical("8928308280fffff").unwrap();
/// assert_eq!(triple.indices(), [283, 1118, 176]);
/// ```
pub fn encode_hierarchical(hex: &str) -> Result<ChordIndexTriple> {
    HierarchicalDecoder::default().encode(hex)
}
