//! Client record and the request bodies of the clientes endpoints.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;

/// A row of the `clientes` table.
///
/// Every field is optional: the register endpoint binds absent fields as
/// `NULL` rather than rejecting the request. Column names in the database are
/// the same camelCase names used on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(default, rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Cliente {
    /// Subscriber number, the business key used for lookups
    pub suscriptor: Option<String>,
    pub nombre_completo: Option<String>,
    pub telefono1: Option<String>,
    pub telefono2: Option<String>,
    pub telefono3: Option<String>,
    /// Service plan identifier
    pub plan: Option<String>,
    pub colilla: Option<String>,
    pub tap: Option<String>,
    pub nap: Option<String>,
    pub mac: Option<String>,
    pub sn: Option<String>,
    pub ip: Option<String>,
    pub direccion: Option<String>,
    /// Free-form geolocation
    pub ubicacion: Option<String>,
}

/// Body of `POST /api/editarCliente`.
///
/// `suscriptor` selects the row; `nuevoSuscriptor` is the key value written
/// back, so a record can be renamed in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditarClienteRequest {
    pub suscriptor: Option<String>,
    pub nuevo_suscriptor: Option<String>,
    pub nombre_completo: Option<String>,
    pub telefono1: Option<String>,
    pub telefono2: Option<String>,
    pub telefono3: Option<String>,
    pub plan: Option<String>,
    pub colilla: Option<String>,
    pub tap: Option<String>,
    pub nap: Option<String>,
    pub mac: Option<String>,
    pub sn: Option<String>,
    pub ip: Option<String>,
    pub direccion: Option<String>,
    pub ubicacion: Option<String>,
}

impl EditarClienteRequest {
    /// Splits the request into the lookup key and the values to store.
    ///
    /// Fails when either key is missing or empty.
    pub fn into_update(self) -> Result<(String, Cliente), AppError> {
        let (Some(suscriptor), Some(nuevo_suscriptor)) = (
            non_empty(self.suscriptor),
            non_empty(self.nuevo_suscriptor),
        ) else {
            return Err(AppError::Validation(
                "Debe proporcionar el número de suscriptor actual y el nuevo número de suscriptor."
                    .to_string(),
            ));
        };

        let cliente = Cliente {
            suscriptor: Some(nuevo_suscriptor),
            nombre_completo: self.nombre_completo,
            telefono1: self.telefono1,
            telefono2: self.telefono2,
            telefono3: self.telefono3,
            plan: self.plan,
            colilla: self.colilla,
            tap: self.tap,
            nap: self.nap,
            mac: self.mac,
            sn: self.sn,
            ip: self.ip,
            direccion: self.direccion,
            ubicacion: self.ubicacion,
        };

        Ok((suscriptor, cliente))
    }
}

/// Body carrying only a subscriber number (fetch and exists-check).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SuscriptorRequest {
    pub suscriptor: Option<String>,
}

impl SuscriptorRequest {
    pub fn require_suscriptor(self) -> Result<String, AppError> {
        non_empty(self.suscriptor).ok_or_else(|| {
            AppError::Validation("Debe proporcionar un número de suscriptor válido.".to_string())
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
