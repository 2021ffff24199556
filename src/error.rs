use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Peripheral name must be provided")]
    MissingPeripheral,
    #[error("Peripheral {0} not found in the SVD file")]
    PeripheralNotFound(String),
}
