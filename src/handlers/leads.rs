// src/handlers/leads.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{i18n::Locale, json::AppJson},
    models::{
        board::{BoardOutcome, StatusChangePayload},
        lead::{Lead, LeadPatch, LeadStatus, MessageKind, MessageSender, NewLead},
    },
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_leads).post(create_lead))
        .route("/simulate", post(simulate_lead))
        .route("/{id}", get(get_lead).patch(update_lead))
        .route("/{id}/status", put(change_status))
        .route("/{id}/messages", post(append_message))
        .route("/{id}/comments", post(add_comment))
        .route("/{id}/tags", post(add_tag))
        .route("/{id}/tags/{tag}", delete(remove_tag))
        .route("/{id}/checklists", post(add_checklist))
        .route("/{id}/checklists/{checklist_id}/items", post(add_checklist_item))
        .route(
            "/{id}/checklists/{checklist_id}/items/{item_id}/toggle",
            post(toggle_checklist_item),
        )
}

// Texto só com espaços conta como vazio
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    #[schema(example = "5f0c9a9e-3b8e-4c61-9a53-0b1f3f8d2a11")]
    pub id: String,
}

fn created(id: Option<String>) -> Response {
    match id {
        Some(id) => (StatusCode::CREATED, Json(CreatedResponse { id })).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

// =============================================================================
//  ÁREA 1: CADASTRO E LEITURA
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeadPayload {
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Carlos Silva")]
    pub name: String,

    #[validate(custom(function = "not_blank"))]
    #[schema(example = "(11) 99999-9999")]
    pub phone: String,

    pub address: Option<String>,

    #[schema(example = "Toyota Corolla XEi")]
    pub interested_car: Option<String>,

    #[schema(example = "2024")]
    pub interested_year: Option<String>,

    #[schema(example = "Instagram")]
    pub source: Option<String>,

    pub status: Option<LeadStatus>,
    pub description: Option<String>,
    pub appointment_date: Option<DateTime<Utc>>,
    pub assigned_seller_id: Option<String>,
    pub interested_vehicle_id: Option<String>,
    pub value: Option<f64>,
}

impl From<CreateLeadPayload> for NewLead {
    fn from(payload: CreateLeadPayload) -> Self {
        NewLead {
            dealership_id: None,
            name: Some(payload.name),
            phone: Some(payload.phone),
            address: payload.address,
            interested_car: payload.interested_car,
            interested_year: payload.interested_year,
            source: payload.source,
            status: payload.status,
            description: payload.description,
            appointment_date: payload.appointment_date,
            assigned_seller_id: payload.assigned_seller_id,
            interested_vehicle_id: payload.interested_vehicle_id,
            value: payload.value,
        }
    }
}

// GET /api/leads
#[utoipa::path(
    get,
    path = "/api/leads",
    tag = "Leads",
    responses(
        (status = 200, description = "Todos os leads, na ordem do quadro", body = Vec<Lead>)
    )
)]
pub async fn list_leads(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let leads = app_state
        .lead_service
        .list_leads()
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(leads)))
}

// POST /api/leads
#[utoipa::path(
    post,
    path = "/api/leads",
    tag = "Leads",
    request_body = CreateLeadPayload,
    responses(
        (status = 201, description = "Lead criado", body = CreatedResponse),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_lead(
    State(app_state): State<AppState>,
    locale: Locale,
    AppJson(payload): AppJson<CreateLeadPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let id = app_state
        .lead_service
        .create_lead(payload.into())
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

// GET /api/leads/{id}
#[utoipa::path(
    get,
    path = "/api/leads/{id}",
    tag = "Leads",
    params(("id" = String, Path, description = "ID do lead")),
    responses(
        (status = 200, description = "Lead encontrado", body = Lead),
        (status = 404, description = "Lead não encontrado")
    )
)]
pub async fn get_lead(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let lead = app_state
        .lead_service
        .get_lead(&id)
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(lead)))
}

// =============================================================================
//  ÁREA 2: EDIÇÃO
// =============================================================================

// PATCH /api/leads/{id}
#[utoipa::path(
    patch,
    path = "/api/leads/{id}",
    tag = "Leads",
    params(("id" = String, Path, description = "ID do lead")),
    request_body = LeadPatch,
    responses(
        (status = 204, description = "Campos aplicados (id desconhecido é ignorado)")
    )
)]
pub async fn update_lead(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
    AppJson(patch): AppJson<LeadPatch>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .lead_service
        .update_lead(&id, patch)
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}

// PUT /api/leads/{id}/status
// Mesma regra do quadro: WON abre pedido de confirmação em vez de aplicar.
#[utoipa::path(
    put,
    path = "/api/leads/{id}/status",
    tag = "Leads",
    params(("id" = String, Path, description = "ID do lead")),
    request_body = StatusChangePayload,
    responses(
        (status = 200, description = "Resultado da mudança", body = BoardOutcome)
    )
)]
pub async fn change_status(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
    AppJson(payload): AppJson<StatusChangePayload>,
) -> Result<impl IntoResponse, ApiError> {
    let outcome = app_state
        .board_service
        .request_status(&id, payload.status)
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(outcome)))
}

fn default_sender() -> MessageSender {
    MessageSender::Lead
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddMessagePayload {
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Ainda tem o Corolla prata?")]
    pub text: String,

    #[serde(default = "default_sender")]
    pub sender: MessageSender,

    #[serde(default, rename = "type")]
    pub kind: MessageKind,
}

// POST /api/leads/{id}/messages
#[utoipa::path(
    post,
    path = "/api/leads/{id}/messages",
    tag = "Leads",
    params(("id" = String, Path, description = "ID do lead")),
    request_body = AddMessagePayload,
    responses(
        (status = 204, description = "Mensagem registrada"),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn append_message(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
    AppJson(payload): AppJson<AddMessagePayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    app_state
        .lead_service
        .append_message(&id, payload.sender, &payload.text, payload.kind)
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentPayload {
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Cliente prefere cor preta")]
    pub text: String,

    // Sem autor = comentário do próprio usuário do painel
    pub author: Option<String>,
}

// POST /api/leads/{id}/comments
#[utoipa::path(
    post,
    path = "/api/leads/{id}/comments",
    tag = "Leads",
    params(("id" = String, Path, description = "ID do lead")),
    request_body = AddCommentPayload,
    responses(
        (status = 204, description = "Comentário adicionado"),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn add_comment(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
    AppJson(payload): AppJson<AddCommentPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    app_state
        .lead_service
        .add_comment(&id, &payload.text, payload.author.as_deref())
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  ÁREA 3: TAGS E CHECKLISTS
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddTagPayload {
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "VIP")]
    pub tag: String,
}

// POST /api/leads/{id}/tags
#[utoipa::path(
    post,
    path = "/api/leads/{id}/tags",
    tag = "Leads",
    params(("id" = String, Path, description = "ID do lead")),
    request_body = AddTagPayload,
    responses(
        (status = 204, description = "Tag adicionada (repetida é ignorada)"),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn add_tag(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
    AppJson(payload): AppJson<AddTagPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    app_state
        .lead_service
        .add_tag(&id, &payload.tag)
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}

// DELETE /api/leads/{id}/tags/{tag}
#[utoipa::path(
    delete,
    path = "/api/leads/{id}/tags/{tag}",
    tag = "Leads",
    params(
        ("id" = String, Path, description = "ID do lead"),
        ("tag" = String, Path, description = "Tag a remover")
    ),
    responses(
        (status = 204, description = "Tag removida")
    )
)]
pub async fn remove_tag(
    State(app_state): State<AppState>,
    locale: Locale,
    Path((id, tag)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .lead_service
        .remove_tag(&id, &tag)
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddChecklistPayload {
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Documentação")]
    pub title: String,
}

// POST /api/leads/{id}/checklists
#[utoipa::path(
    post,
    path = "/api/leads/{id}/checklists",
    tag = "Leads",
    params(("id" = String, Path, description = "ID do lead")),
    request_body = AddChecklistPayload,
    responses(
        (status = 201, description = "Checklist criado", body = CreatedResponse),
        (status = 204, description = "Lead inexistente, nada criado"),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn add_checklist(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
    AppJson(payload): AppJson<AddChecklistPayload>,
) -> Result<Response, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let checklist_id = app_state
        .lead_service
        .add_checklist(&id, &payload.title)
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(created(checklist_id))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddChecklistItemPayload {
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "CNH")]
    pub content: String,
}

// POST /api/leads/{id}/checklists/{checklist_id}/items
#[utoipa::path(
    post,
    path = "/api/leads/{id}/checklists/{checklist_id}/items",
    tag = "Leads",
    params(
        ("id" = String, Path, description = "ID do lead"),
        ("checklist_id" = String, Path, description = "ID do checklist")
    ),
    request_body = AddChecklistItemPayload,
    responses(
        (status = 201, description = "Item criado", body = CreatedResponse),
        (status = 204, description = "Lead ou checklist inexistente, nada criado"),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn add_checklist_item(
    State(app_state): State<AppState>,
    locale: Locale,
    Path((id, checklist_id)): Path<(String, String)>,
    AppJson(payload): AppJson<AddChecklistItemPayload>,
) -> Result<Response, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let item_id = app_state
        .lead_service
        .add_checklist_item(&id, &checklist_id, &payload.content)
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(created(item_id))
}

// POST /api/leads/{id}/checklists/{checklist_id}/items/{item_id}/toggle
#[utoipa::path(
    post,
    path = "/api/leads/{id}/checklists/{checklist_id}/items/{item_id}/toggle",
    tag = "Leads",
    params(
        ("id" = String, Path, description = "ID do lead"),
        ("checklist_id" = String, Path, description = "ID do checklist"),
        ("item_id" = String, Path, description = "ID do item")
    ),
    responses(
        (status = 204, description = "Item marcado/desmarcado")
    )
)]
pub async fn toggle_checklist_item(
    State(app_state): State<AppState>,
    locale: Locale,
    Path((id, checklist_id, item_id)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .lead_service
        .toggle_checklist_item(&id, &checklist_id, &item_id)
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  ÁREA 4: SIMULAÇÃO
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SimulatePayload {
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Joana Prado")]
    pub name: String,

    #[validate(custom(function = "not_blank"))]
    #[schema(example = "(21) 98888-7777")]
    pub phone: String,

    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Honda Civic Touring")]
    pub car: String,
}

// POST /api/leads/simulate
#[utoipa::path(
    post,
    path = "/api/leads/simulate",
    tag = "Leads",
    request_body = SimulatePayload,
    responses(
        (status = 201, description = "Lead simulado criado; agendamento ocorre em background", body = CreatedResponse),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn simulate_lead(
    State(app_state): State<AppState>,
    locale: Locale,
    AppJson(payload): AppJson<SimulatePayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let id = app_state
        .simulation_service
        .start_intake(&payload.name, &payload.phone, &payload.car)
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::handlers::test_support::{send, test_app};

    async fn create(app: &axum::Router, name: &str) -> String {
        let (status, body) = send(
            app,
            "POST",
            "/api/leads",
            Some(json!({ "name": name, "phone": "(11) 91234-5678", "interestedCar": "Jeep Compass" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn create_then_get_lead() {
        let app = test_app();
        let id = create(&app, "Carlos Silva").await;

        let (status, lead) = send(&app, "GET", &format!("/api/leads/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(lead["name"], "Carlos Silva");
        assert_eq!(lead["status"], "IN_PROGRESS");
        assert_eq!(lead["interestedCar"], "Jeep Compass");

        let (_, leads) = send(&app, "GET", "/api/leads", None).await;
        assert_eq!(leads.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_rejects_blank_name_with_translated_details() {
        let app = test_app();
        let (status, body) = crate::handlers::test_support::send_with_lang(
            &app,
            "POST",
            "/api/leads",
            Some(json!({ "name": "   ", "phone": "(11) 91234-5678" })),
            "pt-BR",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Um ou mais campos são inválidos.");
        assert_eq!(body["details"]["name"][0], "Campo obrigatório.");
    }

    #[tokio::test]
    async fn unknown_lead_reads_404_but_writes_are_silent() {
        let app = test_app();

        let (status, body) = send(&app, "GET", "/api/leads/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Lead not found.");

        let (status, _) = send(&app, "PATCH", "/api/leads/nope", Some(json!({ "name": "X" }))).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, "POST", "/api/leads/nope/tags", Some(json!({ "tag": "VIP" }))).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) =
            send(&app, "POST", "/api/leads/nope/checklists", Some(json!({ "title": "Docs" }))).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, leads) = send(&app, "GET", "/api/leads", None).await;
        assert!(leads.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn patch_tags_comments_and_checklists() {
        let app = test_app();
        let id = create(&app, "Fernanda Lima").await;
        let base = format!("/api/leads/{id}");

        send(&app, "PATCH", &base, Some(json!({ "value": 120000.0, "description": "Quer SUV" }))).await;
        send(&app, "POST", &format!("{base}/tags"), Some(json!({ "tag": " VIP " }))).await;
        send(&app, "POST", &format!("{base}/tags"), Some(json!({ "tag": "Financiamento" }))).await;
        send(&app, "DELETE", &format!("{base}/tags/Financiamento"), None).await;
        send(&app, "POST", &format!("{base}/comments"), Some(json!({ "text": "Ligar amanhã" }))).await;
        send(
            &app,
            "POST",
            &format!("{base}/messages"),
            Some(json!({ "text": "Bom dia!", "sender": "AI" })),
        )
        .await;

        let (status, checklist) =
            send(&app, "POST", &format!("{base}/checklists"), Some(json!({ "title": "Documentos" }))).await;
        assert_eq!(status, StatusCode::CREATED);
        let checklist_id = checklist["id"].as_str().unwrap().to_string();

        let (status, item) = send(
            &app,
            "POST",
            &format!("{base}/checklists/{checklist_id}/items"),
            Some(json!({ "content": "CNH" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let item_id = item["id"].as_str().unwrap().to_string();

        let (status, _) = send(
            &app,
            "POST",
            &format!("{base}/checklists/{checklist_id}/items/{item_id}/toggle"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, lead) = send(&app, "GET", &base, None).await;
        assert_eq!(lead["value"], 120000.0);
        assert_eq!(lead["description"], "Quer SUV");
        assert_eq!(lead["tags"], json!(["VIP"]));
        assert_eq!(lead["comments"][0]["text"], "Ligar amanhã");
        assert_eq!(lead["comments"][0]["userName"], "Você");
        let history = lead["aiHistory"].as_array().unwrap();
        assert_eq!(history.last().unwrap()["sender"], "AI");
        assert_eq!(lead["checklists"][0]["items"][0]["isCompleted"], true);
    }

    #[tokio::test]
    async fn status_change_to_won_waits_for_confirmation() {
        let app = test_app();
        let id = create(&app, "Roberto Alves").await;
        let uri = format!("/api/leads/{id}/status");

        let (status, outcome) = send(&app, "PUT", &uri, Some(json!({ "status": "SCHEDULED" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(outcome["statusApplied"], "SCHEDULED");

        let (_, outcome) = send(&app, "PUT", &uri, Some(json!({ "status": "WON" }))).await;
        assert_eq!(outcome["statusApplied"], serde_json::Value::Null);
        assert_eq!(outcome["confirmation"]["leadId"], id.as_str());
        assert_eq!(outcome["drag"]["phase"], "pendingConfirmation");

        let (_, lead) = send(&app, "GET", &format!("/api/leads/{id}"), None).await;
        assert_eq!(lead["status"], "SCHEDULED");
    }

    #[tokio::test]
    async fn unreadable_body_is_a_400_with_error_body() {
        let app = test_app();
        let id = create(&app, "Roberto Alves").await;

        let (status, body) =
            send(&app, "PUT", &format!("/api/leads/{id}/status"), Some(json!({ "status": "sucesso" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Malformed request body.");
        assert!(body["details"].as_str().unwrap().contains("sucesso"));

        let (status, body) = send(&app, "POST", "/api/leads", Some(json!({ "name": "Sem telefone" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["details"].as_str().unwrap().contains("phone"));

        let (_, lead) = send(&app, "GET", &format!("/api/leads/{id}"), None).await;
        assert_eq!(lead["status"], "IN_PROGRESS");
    }

    #[tokio::test]
    async fn simulate_creates_lead_from_ai_source() {
        let app = test_app();
        let (status, body) = send(
            &app,
            "POST",
            "/api/leads/simulate",
            Some(json!({ "name": "Joana", "phone": "(21) 98888-7777", "car": "Civic" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let id = body["id"].as_str().unwrap();
        let (_, lead) = send(&app, "GET", &format!("/api/leads/{id}"), None).await;
        assert_eq!(lead["source"], "IA Simulation");
        assert_eq!(lead["status"], "IN_PROGRESS");
    }
}
