use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("No conversion found for {from} to {to}")]
    ConversionNotFound { from: String, to: String },
}
