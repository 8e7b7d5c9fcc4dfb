//! Data models for the clientes API.
//!
//! - [`Cliente`] - A row of the `clientes` table, also the register body
//! - [`EditarClienteRequest`] - Edit body with current and new subscriber keys
//! - [`SuscriptorRequest`] - Body carrying a single subscriber number

pub mod cliente;

pub use cliente::{Cliente, EditarClienteRequest, SuscriptorRequest};
