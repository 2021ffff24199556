//! Owned view of the parsed SVD device.
//!
//! The `svd-parser` tree is flattened once into the values below: register
//! properties are inherited from the enclosing levels, arrays are expanded,
//! clusters are folded into their peripheral and `derivedFrom` peripherals get
//! the registers of their parent. Nothing here is mutated after construction.

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use log::debug;
use svd_parser::svd::{self, DimElement, MaybeArray, RegisterCluster, RegisterProperties};

use crate::access::Access;
use crate::error::Error;
use crate::formater::dim_name;

/// Register size used when no level of the document declares one.
pub const DEFAULT_REGISTER_SIZE: u32 = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub name: String,
    pub cpu: Option<CpuCore>,
    pub peripherals: Vec<Peripheral>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Peripheral {
    pub name: String,
    pub group_name: Option<String>,
    pub base_address: u64,
    pub registers: Vec<Register>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Register {
    pub name: String,
    /// Byte offset from the peripheral base address.
    pub address_offset: u64,
    /// Size in bits.
    pub size: u32,
    pub access: Access,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub bit_offset: u32,
    pub bit_width: u32,
    /// `None` when the field inherits the register access.
    pub access: Option<Access>,
}

/// CMSIS processor core names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CpuCore {
    CM0,
    CM0Plus,
    CM1,
    CM3,
    CM4,
    CM7,
    CM23,
    CM33,
    CM35P,
    CM55,
    CM85,
    SC000,
    SC300,
    ARMV8MML,
    ARMV8MBL,
    ARMV81MML,
    CA5,
    CA7,
    CA8,
    CA9,
    CA15,
    CA17,
    CA53,
    CA57,
    CA72,
    Other(String),
}

impl FromStr for CpuCore {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "CM0" => CpuCore::CM0,
            "CM0PLUS" | "CM0+" => CpuCore::CM0Plus,
            "CM1" => CpuCore::CM1,
            "CM3" => CpuCore::CM3,
            "CM4" => CpuCore::CM4,
            "CM7" => CpuCore::CM7,
            "CM23" => CpuCore::CM23,
            "CM33" => CpuCore::CM33,
            "CM35P" => CpuCore::CM35P,
            "CM55" => CpuCore::CM55,
            "CM85" => CpuCore::CM85,
            "SC000" => CpuCore::SC000,
            "SC300" => CpuCore::SC300,
            "ARMV8MML" => CpuCore::ARMV8MML,
            "ARMV8MBL" => CpuCore::ARMV8MBL,
            "ARMV81MML" => CpuCore::ARMV81MML,
            "CA5" => CpuCore::CA5,
            "CA7" => CpuCore::CA7,
            "CA8" => CpuCore::CA8,
            "CA9" => CpuCore::CA9,
            "CA15" => CpuCore::CA15,
            "CA17" => CpuCore::CA17,
            "CA53" => CpuCore::CA53,
            "CA57" => CpuCore::CA57,
            "CA72" => CpuCore::CA72,
            other => CpuCore::Other(other.to_string()),
        })
    }
}

impl CpuCore {
    pub fn supports_bitband(&self) -> bool {
        matches!(self, CpuCore::CM3 | CpuCore::CM4)
    }
}

impl Device {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let xml = std::fs::read_to_string(path)
            .with_context(|| format!("Unable to read {}", path.display()))?;
        Self::from_xml(&xml).with_context(|| format!("Unable to parse {}", path.display()))
    }

    pub fn from_xml(xml: &str) -> Result<Self> {
        let svd = svd_parser::parse(xml)?;
        Ok(Self::from_svd(&svd))
    }

    pub fn from_svd(svd: &svd::Device) -> Self {
        let defaults = Defaults::default().derive(&svd.default_register_properties);
        let peripherals = svd
            .peripherals
            .iter()
            .flat_map(|per| convert_peripheral(svd, per, defaults))
            .collect();
        Self {
            name: svd.name.clone(),
            cpu: svd.cpu.as_ref().and_then(|cpu| cpu.name.parse().ok()),
            peripherals,
        }
    }

    /// Bit-band addressing is only available on Cortex-M3 and Cortex-M4.
    pub fn bitband_support(&self) -> bool {
        self.cpu.as_ref().is_some_and(CpuCore::supports_bitband)
    }

    /// First peripheral whose name or group name is `name`.
    pub fn find_peripheral(&self, name: &str) -> Result<&Peripheral, Error> {
        self.peripherals
            .iter()
            .find(|per| per.name == name || per.group_name.as_deref() == Some(name))
            .ok_or_else(|| Error::PeripheralNotFound(name.to_string()))
    }
}

impl Peripheral {
    /// Name of the generated struct, peripherals of a group share a type.
    pub fn type_name(&self) -> &str {
        self.group_name.as_deref().unwrap_or(&self.name)
    }
}

/// Register properties inherited from device, peripheral and cluster.
#[derive(Debug, Default, Clone, Copy)]
struct Defaults {
    size: Option<u32>,
    access: Option<svd::Access>,
}

impl Defaults {
    fn derive(self, properties: &RegisterProperties) -> Self {
        Self {
            size: properties.size.or(self.size),
            access: properties.access.or(self.access),
        }
    }
}

/// Names and offset increments of each element of a `dim` array.
fn dim_instances<'a>(
    name: &'a str,
    dim: &'a DimElement,
) -> impl Iterator<Item = (String, u64)> + 'a {
    (0..dim.dim).map(move |i| {
        let index = dim
            .dim_index
            .as_ref()
            .and_then(|indexes| indexes.get(i as usize).cloned())
            .unwrap_or_else(|| i.to_string());
        (dim_name(name, &index), u64::from(i) * u64::from(dim.dim_increment))
    })
}

fn convert_peripheral(
    svd: &svd::Device,
    per: &svd::Peripheral,
    defaults: Defaults,
) -> Vec<Peripheral> {
    // registers and properties of `derivedFrom` peripherals come from the parent
    let mut source: &svd::PeripheralInfo = per;
    let mut group_name = per.group_name.clone();
    let mut hops = 0;
    while source.registers.is_none() && hops < svd.peripherals.len() {
        let Some(parent) = source.derived_from.as_ref().and_then(|derived| {
            svd.peripherals.iter().find(|p| &p.name == derived)
        }) else {
            break;
        };
        debug!("{} derives its registers from {}", per.name, parent.name);
        group_name = group_name.or_else(|| parent.group_name.clone());
        source = &**parent;
        hops += 1;
    }
    let group_name = group_name.filter(|name| !name.is_empty());

    let defaults = defaults.derive(&source.default_register_properties);
    let mut registers = Vec::new();
    for child in source.registers.iter().flatten() {
        flatten_register_cluster(child, 0, "", defaults, &mut registers);
    }

    match per {
        MaybeArray::Single(info) => vec![Peripheral {
            name: info.name.clone(),
            group_name,
            base_address: info.base_address,
            registers,
        }],
        MaybeArray::Array(info, dim) => dim_instances(&info.name, dim)
            .map(|(name, increment)| Peripheral {
                name,
                group_name: group_name.clone(),
                base_address: info.base_address + increment,
                registers: registers.clone(),
            })
            .collect(),
    }
}

fn flatten_register_cluster(
    child: &RegisterCluster,
    base_offset: u64,
    prefix: &str,
    defaults: Defaults,
    registers: &mut Vec<Register>,
) {
    match child {
        RegisterCluster::Register(reg) => {
            let defaults = defaults.derive(&reg.properties);
            let size = defaults.size.unwrap_or(DEFAULT_REGISTER_SIZE);
            let access = Access::from(defaults.access);
            let fields: Vec<Field> = reg.fields().flat_map(convert_field).collect();
            let offset = base_offset + u64::from(reg.address_offset);
            match reg {
                MaybeArray::Single(info) => registers.push(Register {
                    name: format!("{prefix}{}", info.name),
                    address_offset: offset,
                    size,
                    access,
                    fields,
                }),
                MaybeArray::Array(info, dim) => {
                    registers.extend(dim_instances(&info.name, dim).map(|(name, increment)| {
                        Register {
                            name: format!("{prefix}{name}"),
                            address_offset: offset + increment,
                            size,
                            access,
                            fields: fields.clone(),
                        }
                    }))
                }
            }
        }
        RegisterCluster::Cluster(cluster) => {
            let defaults = defaults.derive(&cluster.default_register_properties);
            let offset = base_offset + u64::from(cluster.address_offset);
            let instances: Vec<(String, u64)> = match cluster {
                MaybeArray::Single(info) => vec![(info.name.clone(), 0)],
                MaybeArray::Array(info, dim) => dim_instances(&info.name, dim).collect(),
            };
            for (name, increment) in instances {
                let prefix = format!("{prefix}{name}_");
                for child in &cluster.children {
                    flatten_register_cluster(
                        child,
                        offset + increment,
                        &prefix,
                        defaults,
                        registers,
                    );
                }
            }
        }
    }
}

fn convert_field(field: &svd::Field) -> Vec<Field> {
    let access = field.access.map(Access::from);
    let bit_offset = field.bit_range.offset;
    let bit_width = field.bit_range.width;
    match field {
        MaybeArray::Single(info) => vec![Field {
            name: info.name.clone(),
            bit_offset,
            bit_width,
            access,
        }],
        MaybeArray::Array(info, dim) => dim_instances(&info.name, dim)
            .map(|(name, increment)| Field {
                name,
                // field arrays advance in bits
                bit_offset: bit_offset + increment as u32,
                bit_width,
                access,
            })
            .collect(),
    }
}
