use std::fmt;

use crate::access::AccessCode;
use crate::field::FieldBits;
use crate::formater::{instance_to_type, trim_register_name, SizedUnsigned};
use crate::model::Register;

/// Nested register struct deriving from `BF_MMREG`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterStruct {
    /// Member name, without the peripheral prefix.
    pub name: String,
    pub type_name: String,
    pub storage: SizedUnsigned,
    pub access: AccessCode,
    pub fields: Vec<FieldBits>,
}

impl RegisterStruct {
    pub fn new(register: &Register, peripheral_name: &str) -> Self {
        let name = trim_register_name(&register.name, peripheral_name).to_string();
        let fields = register
            .fields
            .iter()
            .map(|field| FieldBits::new(field, register))
            .collect();
        Self {
            type_name: instance_to_type(&name),
            name,
            storage: SizedUnsigned::from_bits(register.size),
            access: register.access.code(),
            fields,
        }
    }
}

impl fmt::Display for RegisterStruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "    struct {} : BF_MMREG({}, {}, mmr_ops) {{",
            self.type_name, self.storage, self.access
        )?;
        writeln!(f, "        BF_COPY_SUPERCLASS({});", self.type_name)?;
        for field in &self.fields {
            writeln!(f, "{field}")?;
        }
        write!(f, "    }} {};", self.name)
    }
}
