use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use thiserror::Error;

use crate::{common::i18n::I18nStore, middleware::i18n::Locale};

// Erros do domínio. Id de lead desconhecido em operações de escrita NÃO é
// erro (vira no-op); `LeadNotFound` só aparece em leitura direta.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Corpo JSON que nem chegou a desserializar
    #[error("Corpo da requisição inválido: {0}")]
    InvalidPayload(String),

    #[error("Lead não encontrado")]
    LeadNotFound,

    #[error("Veículo não encontrado")]
    VehicleNotFound,

    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

// O erro já traduzido, pronto para virar resposta HTTP.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<Value>,
}

impl AppError {
    pub fn to_api_error(&self, locale: &Locale, i18n: &I18nStore) -> ApiError {
        let lang = locale.0.as_str();
        match self {
            AppError::ValidationError(errors) => {
                // Retorna todos os detalhes da validação, campo -> mensagens
                let mut details: HashMap<String, Vec<String>> = HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages = field_errors
                        .iter()
                        .map(|e| {
                            let code = e.message.as_deref().unwrap_or(e.code.as_ref());
                            i18n.translate(lang, code)
                        })
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                ApiError {
                    status: StatusCode::BAD_REQUEST,
                    message: i18n.translate(lang, "validation_error"),
                    details: Some(json!(details)),
                }
            }
            AppError::InvalidPayload(reason) => ApiError {
                status: StatusCode::BAD_REQUEST,
                message: i18n.translate(lang, "invalid_payload"),
                details: Some(json!(reason)),
            },
            AppError::VehicleNotFound => ApiError {
                status: StatusCode::NOT_FOUND,
                message: i18n.translate(lang, "vehicle_not_found"),
                details: None,
            },
            AppError::LeadNotFound => ApiError {
                status: StatusCode::NOT_FOUND,
                message: i18n.translate(lang, "lead_not_found"),
                details: None,
            },
            AppError::InternalServerError(e) => {
                tracing::error!("Erro Interno do Servidor: {:?}", e);
                ApiError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: i18n.translate(lang, "internal_error"),
                    details: None,
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => json!({ "error": self.message, "details": details }),
            None => json!({ "error": self.message }),
        };
        (self.status, Json(body)).into_response()
    }
}
