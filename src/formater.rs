use std::fmt;

/// Type name used for a peripheral or register instance.
pub fn instance_to_type(name: &str) -> String {
    format!("{name}_t")
}

/// Member name of a register, with the `<peripheral>_` prefix removed.
pub fn trim_register_name<'a>(name: &'a str, peripheral: &str) -> &'a str {
    name.strip_prefix(peripheral)
        .and_then(|rest| rest.strip_prefix('_'))
        .unwrap_or(name)
}

/// Replace the `%s` placeholder of an array element name.
///
/// `[%s]` is used by list-style arrays (`CR[%s]`), in that case the brackets
/// are also dropped.
pub fn dim_name(name: &str, index: &str) -> String {
    name.replace("[%s]", index).replace("%s", index)
}

/// Unsigned integer of the given byte width, `::bitfilled::sized_unsigned_t<N>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizedUnsigned(pub u32);

impl SizedUnsigned {
    pub fn from_bits(bits: u32) -> Self {
        Self(bits / 8)
    }

    pub fn bytes(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SizedUnsigned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "::bitfilled::sized_unsigned_t<{}>", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_peripheral_prefix() {
        assert_eq!(trim_register_name("UART1_CR1", "UART1"), "CR1");
        assert_eq!(trim_register_name("CR1", "UART1"), "CR1");
        // only the exact `<peripheral>_` prefix is removed
        assert_eq!(trim_register_name("UART10_CR1", "UART1"), "UART10_CR1");
    }

    #[test]
    fn type_names() {
        assert_eq!(instance_to_type("GPIO"), "GPIO_t");
        assert_eq!(SizedUnsigned::from_bits(16).to_string(), "::bitfilled::sized_unsigned_t<2>");
    }

    #[test]
    fn array_names() {
        assert_eq!(dim_name("CCR%s", "3"), "CCR3");
        assert_eq!(dim_name("AFR[%s]", "1"), "AFR1");
    }
}
