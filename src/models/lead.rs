// src/models/lead.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use utoipa::ToSchema;

// --- ENUMS ---

// As colunas do quadro. A ordem das variantes é a ordem das colunas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadStatus {
    #[default]
    InProgress,
    Scheduled,
    VisitPending,
    Won,
    Lost,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 5] = [
        LeadStatus::InProgress,
        LeadStatus::Scheduled,
        LeadStatus::VisitPending,
        LeadStatus::Won,
        LeadStatus::Lost,
    ];

    /// Id da coluna no quadro (o mesmo valor usado no JSON).
    pub fn column_id(self) -> &'static str {
        match self {
            LeadStatus::InProgress => "IN_PROGRESS",
            LeadStatus::Scheduled => "SCHEDULED",
            LeadStatus::VisitPending => "VISIT_PENDING",
            LeadStatus::Won => "WON",
            LeadStatus::Lost => "LOST",
        }
    }

    pub fn from_column_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.column_id() == id)
    }

    pub fn title(self) -> &'static str {
        match self {
            LeadStatus::InProgress => "Atendimento",
            LeadStatus::Scheduled => "Agendamento",
            LeadStatus::VisitPending => "Visita (Aguardando)",
            LeadStatus::Won => "Sucesso",
            LeadStatus::Lost => "Insucesso",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            LeadStatus::InProgress => "border-blue-500",
            LeadStatus::Scheduled => "border-yellow-500",
            LeadStatus::VisitPending => "border-orange-500",
            LeadStatus::Won => "border-emerald-500",
            LeadStatus::Lost => "border-red-500",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_id())
    }
}

// Tipo de fechamento escolhido no diálogo de "Negócio Fechado"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CloseType {
    Sale,
    SaleWithTradeIn,
    Purchase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageSender {
    #[serde(rename = "AI")]
    Agent,
    Lead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageKind {
    #[default]
    Text,
    Audio,
    Image,
}

// --- SUB-REGISTROS ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub sender: MessageSender,
    pub text: String,
    #[schema(example = "10:05")]
    pub timestamp: String,
    #[serde(rename = "type", default)]
    pub kind: MessageKind,
}

// Só tem significado quando has_trade_in = true
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TradeInDetails {
    pub has_trade_in: bool,
    #[schema(example = "Honda HR-V")]
    pub model: String,
    pub color: String,
    pub year: String,
    #[schema(example = "58000 km")]
    pub mileage: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeadComment {
    pub id: String,
    pub text: String,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: String,
    pub content: String,
    pub is_completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    pub id: String,
    pub title: String,
    pub items: Vec<ChecklistItem>,
}

// --- LEAD ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    #[schema(example = "d1")]
    pub dealership_id: String,

    #[schema(example = "Carlos Silva")]
    pub name: String,
    pub phone: String,
    pub address: String,

    // Veículo de interesse
    #[schema(example = "Toyota Corolla XEi")]
    pub interested_car: String,
    #[schema(example = "2022")]
    pub interested_year: String,
    pub source: String,

    pub status: LeadStatus,
    pub trade_in: TradeInDetails,

    pub appointment_date: Option<DateTime<Utc>>,
    pub appointment_confirmed: bool,

    pub ai_history: Vec<ChatMessage>,
    pub avatar_url: String,
    pub assigned_seller_id: Option<String>,
    pub interested_vehicle_id: Option<String>,

    pub description: Option<String>,
    pub tags: Vec<String>,
    pub comments: Vec<LeadComment>,
    pub checklists: Vec<Checklist>,
    pub value: Option<f64>,
    pub last_contact_at: Option<DateTime<Utc>>,
}

impl Lead {
    /// Visita marcada no passado, ainda não confirmada, com o lead em agendamento ou visita.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        match self.appointment_date {
            Some(date) => {
                date < now
                    && !self.appointment_confirmed
                    && matches!(self.status, LeadStatus::Scheduled | LeadStatus::VisitPending)
            }
            None => false,
        }
    }
}

// --- ENTRADAS DO STORE ---

// Dados parciais para criar um lead. O que faltar vira default.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    pub dealership_id: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub interested_car: Option<String>,
    pub interested_year: Option<String>,
    pub source: Option<String>,
    pub status: Option<LeadStatus>,
    pub description: Option<String>,
    pub appointment_date: Option<DateTime<Utc>>,
    pub assigned_seller_id: Option<String>,
    pub interested_vehicle_id: Option<String>,
    pub value: Option<f64>,
}

// Patch de campos. Campo ausente = não mexe.
// Para os opcionais, `null` limpa o valor.
// Status fica de fora: mudança de coluna passa pelo quadro (WON exige confirmação).
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeadPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub interested_car: Option<String>,
    pub interested_year: Option<String>,
    pub source: Option<String>,
    pub trade_in: Option<TradeInDetails>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub appointment_date: Option<Option<DateTime<Utc>>>,
    pub appointment_confirmed: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub assigned_seller_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub interested_vehicle_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<f64>)]
    pub value: Option<Option<f64>>,
}

// Distingue "campo ausente" (None) de "campo null" (Some(None))
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
