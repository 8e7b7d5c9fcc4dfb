//! JSON envelope returned by the clientes endpoints.

use serde::Serialize;

use crate::models::Cliente;

/// Payload carried in the `data` field.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum EnvelopeData {
    One(Cliente),
    Many(Vec<Cliente>),
}

/// `{estado, message?, data?, existeColaborador?, restaurantId?}`
///
/// `restaurantId` carries the generated id of a registered client; the name
/// is kept for existing consumers.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub estado: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<EnvelopeData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existe_colaborador: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<u64>,
}

impl Envelope {
    fn new(estado: bool) -> Self {
        Self {
            estado,
            message: None,
            data: None,
            existe_colaborador: None,
            restaurant_id: None,
        }
    }

    pub fn message(estado: bool, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::new(estado)
        }
    }

    pub fn registered(id: u64) -> Self {
        Self {
            restaurant_id: Some(id),
            ..Self::message(true, "cliente registrado correctamente")
        }
    }

    pub fn one(cliente: Cliente) -> Self {
        Self {
            data: Some(EnvelopeData::One(cliente)),
            ..Self::new(true)
        }
    }

    pub fn many(clientes: Vec<Cliente>) -> Self {
        Self {
            data: Some(EnvelopeData::Many(clientes)),
            ..Self::new(true)
        }
    }

    /// `{estado: false, data: []}`, used for lookups that matched nothing.
    pub fn not_found() -> Self {
        Self {
            data: Some(EnvelopeData::Many(Vec::new())),
            ..Self::new(false)
        }
    }

    pub fn exists(existe: bool) -> Self {
        Self {
            existe_colaborador: Some(existe),
            ..Self::new(true)
        }
    }
}
