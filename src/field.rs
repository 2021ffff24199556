use std::fmt;

use crate::access::AccessCode;
use crate::formater::SizedUnsigned;
use crate::model::{Field, Register};

/// One `BF_MMREGBITS` line of a register struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBits {
    pub name: String,
    pub storage: SizedUnsigned,
    pub access: AccessCode,
    pub lsb: u32,
    pub msb: u32,
}

impl FieldBits {
    pub fn new(field: &Field, register: &Register) -> Self {
        // fields without their own access use the one of the register
        let access = field.access.unwrap_or(register.access).code();
        Self {
            name: field.name.clone(),
            storage: SizedUnsigned::from_bits(register.size),
            access,
            lsb: field.bit_offset,
            msb: field.bit_offset + field.bit_width - 1,
        }
    }
}

impl fmt::Display for FieldBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "        BF_MMREGBITS({}, {}, {}, {}) {};",
            self.storage, self.access, self.lsb, self.msb, self.name
        )
    }
}
