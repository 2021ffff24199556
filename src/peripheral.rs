use std::fmt;

use log::info;

use crate::bitband::MmrOps;
use crate::formater::instance_to_type;
use crate::layout::{layout, Declaration};
use crate::model::Peripheral;

/// The bitfilled register map of one peripheral type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeripheralStruct {
    pub type_name: String,
    pub mmr_ops: MmrOps,
    pub declarations: Vec<Declaration>,
}

impl PeripheralStruct {
    pub fn new(peripheral: &Peripheral, bitband_support: bool) -> Self {
        let mmr_ops = MmrOps::select(peripheral.base_address, bitband_support);
        info!(
            "{} at 0x{:08x} uses {mmr_ops}",
            peripheral.name, peripheral.base_address
        );
        // TODO: generate enum types where enumeratedValues is provided, also
        // de-duplicate them across registers
        Self {
            type_name: instance_to_type(peripheral.type_name()),
            mmr_ops,
            declarations: layout(peripheral),
        }
    }
}

impl fmt::Display for PeripheralStruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "struct {} {{", self.type_name)?;
        writeln!(f, "    using mmr_ops = {};", self.mmr_ops)?;
        for declaration in &self.declarations {
            writeln!(f, "{declaration}")?;
        }
        write!(f, "}};")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::Access;
    use crate::model::{Field, Register};

    fn gpioa() -> Peripheral {
        Peripheral {
            name: "GPIOA".to_string(),
            group_name: None,
            base_address: 0x4001_0C00,
            registers: vec![
                Register {
                    name: "CRL".to_string(),
                    address_offset: 0,
                    size: 32,
                    access: Access::ReadWrite,
                    fields: vec![Field {
                        name: "EN".to_string(),
                        bit_offset: 0,
                        bit_width: 1,
                        access: None,
                    }],
                },
                Register {
                    name: "IDR".to_string(),
                    address_offset: 8,
                    size: 32,
                    access: Access::ReadOnly,
                    fields: vec![],
                },
            ],
        }
    }

    #[test]
    fn gpio_struct() {
        let text = PeripheralStruct::new(&gpioa(), true).to_string();
        let expected = [
            "struct GPIOA_t {",
            "    using mmr_ops = ::bitfilled::bitband<PERIPH_BASE>;",
            "    struct CRL_t : BF_MMREG(::bitfilled::sized_unsigned_t<4>, rw, mmr_ops) {",
            "        BF_COPY_SUPERCLASS(CRL_t);",
            "        BF_MMREGBITS(::bitfilled::sized_unsigned_t<4>, rw, 0, 0) EN;",
            "    } CRL;",
            "    BF_MMREG_RESERVED(4, 1)",
            "    struct IDR_t : BF_MMREG(::bitfilled::sized_unsigned_t<4>, r, mmr_ops) {",
            "        BF_COPY_SUPERCLASS(IDR_t);",
            "    } IDR;",
            "};",
        ];
        assert_eq!(text, expected.join("\n"));
    }

    #[test]
    fn base_ops_without_core_support() {
        let text = PeripheralStruct::new(&gpioa(), false).to_string();
        assert!(text.contains("    using mmr_ops = ::bitfilled::base;\n"));
    }

    #[test]
    fn group_name_is_the_type() {
        let mut per = gpioa();
        per.group_name = Some("GPIO".to_string());
        let generated = PeripheralStruct::new(&per, false);
        assert_eq!(generated.type_name, "GPIO_t");
        assert!(generated.to_string().starts_with("struct GPIO_t {\n"));
    }

    #[test]
    fn register_access_flows_into_fields() {
        let mut per = gpioa();
        per.registers[0].access = Access::WriteOnly;
        let text = PeripheralStruct::new(&per, false).to_string();
        assert!(text.contains("BF_MMREG(::bitfilled::sized_unsigned_t<4>, w, mmr_ops)"));
        assert!(text.contains("BF_MMREGBITS(::bitfilled::sized_unsigned_t<4>, w, 0, 0) EN;"));
    }

    #[test]
    fn empty_peripheral() {
        let per = Peripheral {
            name: "NVIC".to_string(),
            group_name: None,
            base_address: 0xE000_E100,
            registers: vec![],
        };
        assert_eq!(
            PeripheralStruct::new(&per, true).to_string(),
            "struct NVIC_t {\n    using mmr_ops = ::bitfilled::base;\n};"
        );
    }
}
