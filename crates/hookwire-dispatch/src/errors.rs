//! Dispatch Errors

use hookwire::{ConvertError, DeliveryError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    #[error("Failed to sign payload: {0}")]
    Signing(String),
}
