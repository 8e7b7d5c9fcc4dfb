//! Client record handlers.
//!
//! This module provides the following endpoints:
//! - `POST /api/registrarCliente` - Insert a new client record
//! - `POST /api/editarCliente` - Update a record, including its subscriber number
//! - `POST /api/obtenerCliente` - Fetch one record by subscriber number
//! - `POST /api/TodosLosClientes` - List every record
//! - `POST /api/validarSuscriptorExiste` - Check whether a subscriber number is taken
//!
//! Each handler issues at most one query. Database failures are logged here
//! and rendered by [`AppError`].

use actix_web::{web, HttpResponse};

use crate::error::{AppError, AppResult};
use crate::handlers::envelope::Envelope;
use crate::models::{Cliente, EditarClienteRequest, SuscriptorRequest};
use crate::services::ClienteRepository;

/// Register a client
///
/// POST /api/registrarCliente
///
/// No field is required; absent fields are stored as NULL.
pub async fn registrar_cliente(
    repo: web::Data<dyn ClienteRepository>,
    body: web::Json<Cliente>,
) -> AppResult<HttpResponse> {
    let cliente = body.into_inner();

    let id = repo
        .insert(&cliente)
        .await
        .inspect_err(|e| tracing::error!("Failed to register cliente: {:?}", e))?;

    tracing::info!(
        id,
        suscriptor = cliente.suscriptor.as_deref().unwrap_or_default(),
        "Cliente registered"
    );

    Ok(HttpResponse::Ok().json(Envelope::registered(id)))
}

/// Edit a client
///
/// POST /api/editarCliente
///
/// Returns 400 when no row matched the current subscriber number.
pub async fn editar_cliente(
    repo: web::Data<dyn ClienteRepository>,
    body: web::Json<EditarClienteRequest>,
) -> AppResult<HttpResponse> {
    let (suscriptor, cliente) = body.into_inner().into_update().inspect_err(|e| {
        tracing::debug!("Rejected edit request: {}", e);
    })?;

    let affected = repo
        .update(&suscriptor, &cliente)
        .await
        .inspect_err(|e| tracing::error!("Failed to edit cliente {}: {:?}", suscriptor, e))?;

    if affected > 0 {
        tracing::info!(suscriptor = %suscriptor, affected, "Cliente updated");
        Ok(HttpResponse::Ok().json(Envelope::message(true, "Cliente actualizado correctamente")))
    } else {
        Ok(HttpResponse::BadRequest().json(Envelope::message(
            false,
            "No se pudo actualizar el Cliente, verifique los datos.",
        )))
    }
}

/// Fetch a client by subscriber number
///
/// POST /api/obtenerCliente
pub async fn obtener_cliente(
    repo: web::Data<dyn ClienteRepository>,
    body: web::Json<SuscriptorRequest>,
) -> AppResult<HttpResponse> {
    tracing::debug!(suscriptor = ?body.suscriptor, "Fetching cliente");

    let suscriptor = body.into_inner().require_suscriptor().inspect_err(|e| {
        tracing::debug!("Rejected fetch request: {}", e);
    })?;

    let cliente = repo
        .find_by_suscriptor(&suscriptor)
        .await
        .inspect_err(|e| tracing::error!("Failed to fetch cliente {}: {:?}", suscriptor, e))?;

    match cliente {
        Some(cliente) => Ok(HttpResponse::Ok().json(Envelope::one(cliente))),
        None => Ok(HttpResponse::NotFound().json(Envelope::not_found())),
    }
}

/// List every client
///
/// POST /api/TodosLosClientes
///
/// Unpaginated. An empty table is reported as 404.
pub async fn todos_los_clientes(
    repo: web::Data<dyn ClienteRepository>,
) -> AppResult<HttpResponse> {
    let clientes = repo
        .list_all()
        .await
        .inspect_err(|e| tracing::error!("Failed to list clientes: {:?}", e))?;

    if clientes.is_empty() {
        return Ok(HttpResponse::NotFound().json(Envelope::not_found()));
    }

    Ok(HttpResponse::Ok().json(Envelope::many(clientes)))
}

/// Check whether a subscriber number is registered
///
/// POST /api/validarSuscriptorExiste
pub async fn validar_suscriptor_existe(
    repo: web::Data<dyn ClienteRepository>,
    body: web::Json<SuscriptorRequest>,
) -> AppResult<HttpResponse> {
    let suscriptor = body.into_inner().require_suscriptor().inspect_err(|e| {
        tracing::debug!("Rejected exists-check request: {}", e);
    })?;

    let count = repo.count_by_suscriptor(&suscriptor).await.inspect_err(|e| {
        tracing::error!("Failed to check suscriptor {}: {:?}", suscriptor, e)
    })?;

    Ok(HttpResponse::Ok().json(Envelope::exists(count > 0)))
}

/// Maps JSON extraction failures to the validation body.
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::debug!("Rejected request body: {}", err);
    AppError::Validation(format!("Cuerpo de la solicitud inválido: {}", err)).into()
}
