use std::fmt;

use svd_parser::svd;

/// Access permission of a register or field, as declared in the SVD file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Access {
    ReadOnly,
    WriteOnly,
    WriteOnce,
    ReadWrite,
    ReadWriteOnce,
    #[default]
    Unspecified,
}

impl Access {
    /// Simplified access code understood by the bitfilled macros.
    pub fn code(self) -> AccessCode {
        match self {
            Access::ReadOnly => AccessCode::Read,
            Access::WriteOnly | Access::WriteOnce => AccessCode::Write,
            Access::ReadWrite | Access::ReadWriteOnce | Access::Unspecified => {
                AccessCode::ReadWrite
            }
        }
    }
}

impl From<svd::Access> for Access {
    fn from(value: svd::Access) -> Self {
        match value {
            svd::Access::ReadOnly => Access::ReadOnly,
            svd::Access::WriteOnly => Access::WriteOnly,
            svd::Access::WriteOnce => Access::WriteOnce,
            svd::Access::ReadWrite => Access::ReadWrite,
            svd::Access::ReadWriteOnce => Access::ReadWriteOnce,
        }
    }
}

impl From<Option<svd::Access>> for Access {
    fn from(value: Option<svd::Access>) -> Self {
        value.map(Access::from).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessCode {
    Read,
    Write,
    ReadWrite,
}

impl fmt::Display for AccessCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AccessCode::Read => "r",
            AccessCode::Write => "w",
            AccessCode::ReadWrite => "rw",
        })
    }
}
