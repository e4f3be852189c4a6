// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Leads ---
        handlers::leads::list_leads,
        handlers::leads::create_lead,
        handlers::leads::get_lead,
        handlers::leads::update_lead,
        handlers::leads::change_status,
        handlers::leads::append_message,
        handlers::leads::add_comment,
        handlers::leads::add_tag,
        handlers::leads::remove_tag,
        handlers::leads::add_checklist,
        handlers::leads::add_checklist_item,
        handlers::leads::toggle_checklist_item,
        handlers::leads::simulate_lead,

        // --- Board ---
        handlers::board::get_board,
        handlers::board::list_columns,
        handlers::board::drag_start,
        handlers::board::drag_over,
        handlers::board::drag_end,
        handlers::board::confirm_close,
        handlers::board::cancel_close,

        // --- Vehicles ---
        handlers::vehicles::list_vehicles,
        handlers::vehicles::create_vehicle,
        handlers::vehicles::get_vehicle,
    ),
    components(
        schemas(
            // --- Lead ---
            models::lead::LeadStatus,
            models::lead::CloseType,
            models::lead::MessageSender,
            models::lead::MessageKind,
            models::lead::ChatMessage,
            models::lead::TradeInDetails,
            models::lead::LeadComment,
            models::lead::ChecklistItem,
            models::lead::Checklist,
            models::lead::Lead,
            models::lead::LeadPatch,

            // --- Board ---
            models::board::ColumnDefinition,
            models::board::BoardCard,
            models::board::BoardColumn,
            models::board::BoardSnapshot,
            models::board::DragPhase,
            models::board::ConfirmationRequest,
            models::board::BoardEffects,
            models::board::BoardOutcome,
            models::board::DragStartPayload,
            models::board::DragTargetPayload,
            models::board::ConfirmClosePayload,
            models::board::StatusChangePayload,

            // --- Vehicle ---
            models::vehicle::VehicleStatus,
            models::vehicle::Vehicle,

            // --- Payloads ---
            handlers::leads::CreatedResponse,
            handlers::leads::CreateLeadPayload,
            handlers::leads::AddMessagePayload,
            handlers::leads::AddCommentPayload,
            handlers::leads::AddTagPayload,
            handlers::leads::AddChecklistPayload,
            handlers::leads::AddChecklistItemPayload,
            handlers::leads::SimulatePayload,
            handlers::vehicles::CreateVehiclePayload,
        )
    ),
    tags(
        (name = "Leads", description = "Cadastro e edição de leads"),
        (name = "Board", description = "Quadro do funil: arraste e confirmação de fechamento"),
        (name = "Vehicles", description = "Estoque de veículos da loja")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/leads/{id}/status"));
        assert!(doc.paths.paths.contains_key("/api/board/confirmation"));
        assert!(doc.paths.paths.contains_key("/api/vehicles/{id}"));
        assert_eq!(doc.paths.paths.len(), 19);
    }
}
