//! Ports (Interfaces)
//!
//! Abstract interfaces between the domain and its collaborators:
//! integrations implement `PayloadConvertor`, delivery adapters implement
//! `HookDeliverer`.

pub mod convertor;
pub mod delivery;
pub mod diagnostics;
pub mod payloader;

// Re-exports
pub use convertor::*;
pub use delivery::*;
pub use diagnostics::*;
pub use payloader::*;
