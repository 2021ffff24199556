use std::fmt;
use std::ops::Range;

/// Peripheral region covered by the Cortex-M3/M4 bit-band alias.
pub const BITBAND_PERIPHERAL_RANGE: Range<u64> = 0x4000_0000..0x4200_0000;

pub fn is_bitband_range(address: u64) -> bool {
    BITBAND_PERIPHERAL_RANGE.contains(&address)
}

/// Low level register access strategy, the `mmr_ops` alias of the struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MmrOps {
    Base,
    Bitband,
}

impl MmrOps {
    // TODO: only use bitband if all peripherals of the device are in the
    // bit-band range, this is decided per peripheral for now.
    pub fn select(base_address: u64, bitband_support: bool) -> Self {
        if bitband_support && is_bitband_range(base_address) {
            MmrOps::Bitband
        } else {
            MmrOps::Base
        }
    }
}

impl fmt::Display for MmrOps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MmrOps::Base => "::bitfilled::base",
            MmrOps::Bitband => "::bitfilled::bitband<PERIPH_BASE>",
        })
    }
}
