use std::fmt;

use log::{debug, warn};

use crate::model::Peripheral;
use crate::register::RegisterStruct;

/// Member of the peripheral struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// `count` unnamed registers of `unit_bytes` each.
    Reserved { unit_bytes: u32, count: u64 },
    Register(RegisterStruct),
}

impl Declaration {
    /// Bytes covered by this declaration.
    pub fn byte_len(&self) -> u64 {
        match self {
            Declaration::Reserved { unit_bytes, count } => u64::from(*unit_bytes) * count,
            Declaration::Register(reg) => u64::from(reg.storage.bytes()),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Declaration::Reserved { unit_bytes, count } => {
                write!(f, "    BF_MMREG_RESERVED({unit_bytes}, {count})")
            }
            Declaration::Register(reg) => write!(f, "{reg}"),
        }
    }
}

/// Registers of the peripheral in the supplied order, with the address gaps
/// between them filled by reserved declarations.
///
/// The registers are expected to be sorted by offset and not to overlap. A
/// register starting before the end of the previous one gets no padding.
/// Nothing is added after the last register.
pub fn layout(peripheral: &Peripheral) -> Vec<Declaration> {
    let mut declarations = Vec::with_capacity(peripheral.registers.len());
    let mut offset = 0u64;
    for register in &peripheral.registers {
        if offset < register.address_offset {
            // the gap is expressed in units of the following register
            let gap_bits = (register.address_offset - offset) * 8;
            let unit_bits = u64::from(register.size);
            if gap_bits % unit_bits != 0 {
                warn!(
                    "{}: gap of {} bytes before {} is not a multiple of its size",
                    peripheral.name,
                    register.address_offset - offset,
                    register.name
                );
            }
            let reserved = Declaration::Reserved {
                unit_bytes: register.size / 8,
                count: gap_bits / unit_bits,
            };
            debug!("{}: {reserved}", peripheral.name);
            declarations.push(reserved);
        } else if offset > register.address_offset {
            warn!(
                "{}: register {} at 0x{:x} overlaps the previous register ending at 0x{offset:x}",
                peripheral.name, register.name, register.address_offset
            );
        }

        let reg = RegisterStruct::new(register, &peripheral.name);
        debug!("{}: register {} at 0x{:x}", peripheral.name, reg.name, register.address_offset);
        declarations.push(Declaration::Register(reg));
        offset = register.address_offset + u64::from(register.size / 8);
    }
    declarations
}
