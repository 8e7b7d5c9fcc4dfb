//! clientes-api - REST API over the `clientes` table
//!
//! Five JSON endpoints to register, edit, fetch, list and check subscriber
//! records stored in MySQL.
//!
//! # Modules
//!
//! - [`config`] - Application configuration from environment variables
//! - [`db`] - Database connection pool and migrations
//! - [`error`] - Unified error handling
//! - [`models`] - Client record and request bodies
//! - [`services`] - Repository trait and MySQL implementation
//! - [`handlers`] - HTTP route handlers
//!
//! # Quick Start
//!
//! ```ignore
//! use clientes_api::{create_pool, handlers, Config, MySqlClienteRepository};
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

// Re-export commonly used types at the crate root
pub use config::{Config, ConfigError};
pub use db::{check_connection, create_pool, run_migrations};
pub use error::{AppError, AppResult};
pub use models::{Cliente, EditarClienteRequest, SuscriptorRequest};
pub use services::{ClienteRepository, MySqlClienteRepository};
