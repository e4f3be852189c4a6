// src/models/board.rs

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

use crate::models::lead::{CloseType, Lead, LeadStatus};

// --- COLUNAS ---

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDefinition {
    pub id: LeadStatus,
    #[schema(value_type = String, example = "Atendimento")]
    pub title: &'static str,
    #[schema(value_type = String, example = "border-blue-500")]
    pub color: &'static str,
}

impl From<LeadStatus> for ColumnDefinition {
    fn from(status: LeadStatus) -> Self {
        Self {
            id: status,
            title: status.title(),
            color: status.color(),
        }
    }
}

// --- SNAPSHOT DO QUADRO ---

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardCard {
    #[serde(flatten)]
    pub lead: Lead,
    pub overdue: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardColumn {
    #[serde(flatten)]
    pub column: ColumnDefinition,
    pub count: usize,
    pub cards: Vec<BoardCard>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub columns: Vec<BoardColumn>,
    pub drag: DragPhase,
}

// --- ESTADO DO ARRASTE ---

// Visão serializável do estado do reconciliador
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "phase", rename_all = "camelCase")]
pub enum DragPhase {
    Idle,
    Dragging {
        #[serde(rename = "leadId")]
        lead_id: String,
    },
    PendingConfirmation {
        #[serde(rename = "leadId")]
        lead_id: String,
    },
}

// Pedido de confirmação emitido quando um lead tenta entrar em WON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationRequest {
    pub lead_id: String,
}

// O que um evento do quadro fez com o store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardEffects {
    pub status_applied: Option<LeadStatus>,
    pub confirmation: Option<ConfirmationRequest>,
    pub reordered: bool,
    pub close_type: Option<CloseType>,
}

impl BoardEffects {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn applied(status: LeadStatus) -> Self {
        Self {
            status_applied: Some(status),
            ..Self::default()
        }
    }

    pub fn confirmation(lead_id: &str) -> Self {
        Self {
            confirmation: Some(ConfirmationRequest {
                lead_id: lead_id.to_string(),
            }),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardOutcome {
    #[serde(flatten)]
    pub effects: BoardEffects,
    pub drag: DragPhase,
}

// --- POLÍTICA DE HOVER ---

/// Quando aplicar a mudança de status durante o arraste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverPolicy {
    /// Aplica `set_status` a cada hover que muda de coluna.
    #[default]
    Optimistic,
    /// Guarda o status alvo e só aplica no drop.
    Deferred,
}

impl FromStr for HoverPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "optimistic" => Ok(HoverPolicy::Optimistic),
            "deferred" => Ok(HoverPolicy::Deferred),
            other => Err(format!(
                "política de hover desconhecida '{other}' (use optimistic ou deferred)"
            )),
        }
    }
}

// --- PAYLOADS DO QUADRO ---

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DragStartPayload {
    pub lead_id: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DragTargetPayload {
    // Id de coluna (ex: "SCHEDULED") ou id de outro card. Ausente = fora de qualquer coluna.
    #[schema(example = "SCHEDULED")]
    pub over_id: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmClosePayload {
    pub close_type: CloseType,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusChangePayload {
    pub status: LeadStatus,
}
