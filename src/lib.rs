pub mod access;
pub mod bitband;
pub mod error;
pub mod field;
pub mod formater;
pub mod layout;
pub mod model;
pub mod peripheral;
pub mod register;

use std::path::Path;

use anyhow::Result;

pub use error::Error;
use model::Device;
use peripheral::PeripheralStruct;

/// Generate the bitfilled register map of the peripheral, or peripheral
/// group, `peripheral` described in the SVD file `svd`.
pub fn gen_peripheral_from_file(svd: impl AsRef<Path>, peripheral: Option<&str>) -> Result<String> {
    // checked before touching the file
    let peripheral = peripheral.ok_or(Error::MissingPeripheral)?;
    inner_gen_peripheral_from_file(svd.as_ref(), peripheral)
}

fn inner_gen_peripheral_from_file(svd: &Path, peripheral: &str) -> Result<String> {
    let device = Device::load(svd)?;
    log::info!(
        "{}: {} peripherals, cpu {:?}",
        device.name,
        device.peripherals.len(),
        device.cpu
    );
    Ok(gen_peripheral(&device, peripheral)?)
}

/// Generate the register map of `name` from an already parsed device.
pub fn gen_peripheral(device: &Device, name: &str) -> Result<String, Error> {
    let peripheral = device.find_peripheral(name)?;
    Ok(PeripheralStruct::new(peripheral, device.bitband_support()).to_string())
}
