//! Services module - data access for the clientes table.
//!
//! - `clientes`: the repository trait and its MySQL implementation

pub mod clientes;

pub use clientes::{ClienteRepository, MySqlClienteRepository};
