//! Domain types shared by the storage and HTTP layers.
//!
//! Nothing here touches the database or the network: identifiers, the
//! domain error type, the tri-state [`patch::Patch`] used by partial
//! updates, and the field validation rules.

pub mod error;
pub mod patch;
pub mod types;
pub mod validation;
