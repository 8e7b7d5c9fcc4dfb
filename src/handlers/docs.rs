//! Machine-readable API documentation (OpenAPI 3.0) served at `/api-docs`.

use actix_web::{web, HttpResponse};
use serde_json::{json, Value};

use crate::config::Config;

const TAG: &str = "Datos del Cliente";

/// Shared schema of a client record.
fn cliente_schema() -> Value {
    let fields = [
        ("suscriptor", "Número de suscriptor del cliente"),
        ("nombreCompleto", "Nombre completo del cliente"),
        ("telefono1", "Teléfono principal del cliente"),
        ("telefono2", "Segundo teléfono del cliente"),
        ("telefono3", "Tercer teléfono del cliente (si lo tiene)"),
        ("plan", "Plan de servicio"),
        ("colilla", "Colilla de pago o factura asociada al cliente"),
        ("tap", "Detalles de TAP (si aplica)"),
        ("nap", "Detalles de NAP (si aplica)"),
        ("mac", "Dirección MAC del equipo"),
        ("sn", "Número de serie del equipo"),
        ("ip", "Dirección IP asignada"),
        ("direccion", "Dirección del cliente"),
        ("ubicacion", "Ubicación geográfica del cliente"),
    ];

    let properties: serde_json::Map<String, Value> = fields
        .iter()
        .map(|(name, description)| {
            (
                name.to_string(),
                json!({ "type": "string", "nullable": true, "description": description }),
            )
        })
        .collect();

    json!({ "type": "object", "properties": properties })
}

fn suscriptor_body() -> Value {
    json!({
        "required": true,
        "content": { "application/json": { "schema": {
            "type": "object",
            "properties": { "suscriptor": { "type": "string", "description": "Número de suscriptor" } }
        } } }
    })
}

fn operation(summary: &str, request_body: Option<Value>, responses: Value) -> Value {
    let mut op = json!({
        "tags": [TAG],
        "summary": summary,
        "responses": responses,
    });
    if let Some(body) = request_body {
        op["requestBody"] = body;
    }
    json!({ "post": op })
}

/// Builds the OpenAPI document advertising `base_url` as the server.
pub fn openapi_document(base_url: &str) -> Value {
    let cliente = cliente_schema();

    let mut editar = cliente.clone();
    editar["properties"]["nuevoSuscriptor"] =
        json!({ "type": "string", "description": "Nuevo número de suscriptor" });
    editar["required"] = json!(["suscriptor", "nuevoSuscriptor"]);

    let json_body = |schema: Value| {
        json!({ "required": true, "content": { "application/json": { "schema": schema } } })
    };

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "API Ubicate",
            "version": "1.0.1",
            "description": "Documentación de la API Ubicate",
        },
        "servers": [{ "url": base_url }],
        "components": { "schemas": { "Cliente": cliente } },
        "paths": {
            "/api/registrarCliente": operation(
                "Registra un nuevo cliente",
                Some(json_body(json!({ "$ref": "#/components/schemas/Cliente" }))),
                json!({
                    "200": { "description": "Cliente registrado correctamente" },
                    "500": { "description": "Error interno del servidor" },
                }),
            ),
            "/api/editarCliente": operation(
                "Edita los datos de un cliente existente",
                Some(json_body(editar)),
                json!({
                    "200": { "description": "Cliente editado correctamente" },
                    "400": { "description": "Faltan datos o ningún cliente coincide" },
                    "500": { "description": "Error interno del servidor" },
                }),
            ),
            "/api/obtenerCliente": operation(
                "Obtiene los datos completos de un cliente por su número de suscriptor",
                Some(suscriptor_body()),
                json!({
                    "200": { "description": "Datos del cliente obtenidos correctamente" },
                    "400": { "description": "No se proporcionó el número de suscriptor" },
                    "404": { "description": "Cliente no encontrado" },
                    "500": { "description": "Error interno del servidor" },
                }),
            ),
            "/api/TodosLosClientes": operation(
                "Lista todos los clientes",
                None,
                json!({
                    "200": { "description": "Lista de clientes" },
                    "404": { "description": "No hay clientes registrados" },
                    "500": { "description": "Error interno del servidor" },
                }),
            ),
            "/api/validarSuscriptorExiste": operation(
                "Valida si un suscriptor ya existe",
                Some(suscriptor_body()),
                json!({
                    "200": { "description": "existeColaborador indica si el suscriptor ya existe" },
                    "400": { "description": "Datos inválidos" },
                    "500": { "description": "Error interno del servidor" },
                }),
            ),
        },
    })
}

/// GET /api-docs
pub async fn api_docs(config: web::Data<Config>) -> HttpResponse {
    HttpResponse::Ok().json(openapi_document(&config.public_base_url))
}
