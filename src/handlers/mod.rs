//! HTTP handlers for the clientes API.
//!
//! - `clientes` - The five client record endpoints under `/api`
//! - `envelope` - The `{estado, ...}` JSON envelope
//! - `health` - Health check endpoint
//! - `docs` - OpenAPI document

use actix_web::web;

pub mod clientes;
pub mod docs;
pub mod envelope;
pub mod health;

pub use clientes::{
    editar_cliente, json_error_handler, obtener_cliente, registrar_cliente, todos_los_clientes,
    validar_suscriptor_existe,
};
pub use docs::{api_docs, openapi_document};
pub use envelope::{Envelope, EnvelopeData};
pub use health::{health_check, HealthResponse};

/// Registers every route.
///
/// Expects `web::Data<dyn ClienteRepository>` and `web::Data<Config>` to be
/// registered as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/health", web::get().to(health_check))
        .route("/api-docs", web::get().to(api_docs))
        .service(
            web::scope("/api")
                .route("/registrarCliente", web::post().to(registrar_cliente))
                .route("/editarCliente", web::post().to(editar_cliente))
                .route("/obtenerCliente", web::post().to(obtener_cliente))
                .route("/TodosLosClientes", web::post().to(todos_los_clientes))
                .route(
                    "/validarSuscriptorExiste",
                    web::post().to(validar_suscriptor_existe),
                ),
        );
}
