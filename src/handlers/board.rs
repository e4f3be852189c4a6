// src/handlers/board.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::{i18n::Locale, json::AppJson},
    models::board::{
        BoardOutcome, BoardSnapshot, ColumnDefinition, ConfirmClosePayload, DragStartPayload,
        DragTargetPayload,
    },
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_board))
        .route("/columns", get(list_columns))
        .route("/drag/start", post(drag_start))
        .route("/drag/over", post(drag_over))
        .route("/drag/end", post(drag_end))
        .route("/confirmation", post(confirm_close).delete(cancel_close))
}

// =============================================================================
//  ÁREA 1: LEITURA DO QUADRO
// =============================================================================

// GET /api/board
#[utoipa::path(
    get,
    path = "/api/board",
    tag = "Board",
    responses(
        (status = 200, description = "Colunas com os cards e o estado do arraste", body = BoardSnapshot)
    )
)]
pub async fn get_board(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = app_state
        .board_service
        .snapshot(Utc::now())
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(snapshot)))
}

// GET /api/board/columns
#[utoipa::path(
    get,
    path = "/api/board/columns",
    tag = "Board",
    responses(
        (status = 200, description = "Colunas fixas do pipeline", body = Vec<ColumnDefinition>)
    )
)]
pub async fn list_columns(State(app_state): State<AppState>) -> impl IntoResponse {
    Json(app_state.board_service.columns())
}

// =============================================================================
//  ÁREA 2: GESTO DE ARRASTE
// =============================================================================

// POST /api/board/drag/start
#[utoipa::path(
    post,
    path = "/api/board/drag/start",
    tag = "Board",
    request_body = DragStartPayload,
    responses(
        (status = 200, description = "Arraste iniciado (ou ignorado)", body = BoardOutcome)
    )
)]
pub async fn drag_start(
    State(app_state): State<AppState>,
    locale: Locale,
    AppJson(payload): AppJson<DragStartPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let outcome = app_state
        .board_service
        .drag_start(&payload.lead_id)
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(outcome)))
}

// POST /api/board/drag/over
#[utoipa::path(
    post,
    path = "/api/board/drag/over",
    tag = "Board",
    request_body = DragTargetPayload,
    responses(
        (status = 200, description = "Efeito do hover", body = BoardOutcome)
    )
)]
pub async fn drag_over(
    State(app_state): State<AppState>,
    locale: Locale,
    AppJson(payload): AppJson<DragTargetPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let outcome = app_state
        .board_service
        .drag_over(payload.over_id.as_deref())
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(outcome)))
}

// POST /api/board/drag/end
#[utoipa::path(
    post,
    path = "/api/board/drag/end",
    tag = "Board",
    request_body = DragTargetPayload,
    responses(
        (status = 200, description = "Efeito do drop", body = BoardOutcome)
    )
)]
pub async fn drag_end(
    State(app_state): State<AppState>,
    locale: Locale,
    AppJson(payload): AppJson<DragTargetPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let outcome = app_state
        .board_service
        .drag_end(payload.over_id.as_deref())
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(outcome)))
}

// =============================================================================
//  ÁREA 3: CONFIRMAÇÃO DE FECHAMENTO
// =============================================================================

// POST /api/board/confirmation
#[utoipa::path(
    post,
    path = "/api/board/confirmation",
    tag = "Board",
    request_body = ConfirmClosePayload,
    responses(
        (status = 200, description = "Lead movido para WON (sem pedido pendente, nada muda)", body = BoardOutcome)
    )
)]
pub async fn confirm_close(
    State(app_state): State<AppState>,
    locale: Locale,
    AppJson(payload): AppJson<ConfirmClosePayload>,
) -> Result<impl IntoResponse, ApiError> {
    let outcome = app_state
        .board_service
        .confirm_close(payload.close_type)
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(outcome)))
}

// DELETE /api/board/confirmation
#[utoipa::path(
    delete,
    path = "/api/board/confirmation",
    tag = "Board",
    responses(
        (status = 200, description = "Pedido descartado, status mantido", body = BoardOutcome)
    )
)]
pub async fn cancel_close(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let outcome = app_state
        .board_service
        .cancel_close()
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(outcome)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::handlers::test_support::{send, test_app};

    async fn create(app: &axum::Router, name: &str, status: &str) -> String {
        let (_, body) = send(
            app,
            "POST",
            "/api/leads",
            Some(json!({ "name": name, "phone": "(11) 95555-0000", "status": status })),
        )
        .await;
        body["id"].as_str().unwrap().to_string()
    }

    async fn status_of(app: &axum::Router, id: &str) -> Value {
        let (_, lead) = send(app, "GET", &format!("/api/leads/{id}"), None).await;
        lead["status"].clone()
    }

    #[tokio::test]
    async fn columns_in_pipeline_order() {
        let app = test_app();
        let (status, columns) = send(&app, "GET", "/api/board/columns", None).await;
        assert_eq!(status, StatusCode::OK);

        let ids: Vec<&str> = columns
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["IN_PROGRESS", "SCHEDULED", "VISIT_PENDING", "WON", "LOST"]);
    }

    #[tokio::test]
    async fn board_groups_leads_by_column() {
        let app = test_app();
        create(&app, "Carlos", "IN_PROGRESS").await;
        create(&app, "Roberto", "SCHEDULED").await;
        create(&app, "Paula", "SCHEDULED").await;

        let (status, board) = send(&app, "GET", "/api/board", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(board["drag"]["phase"], "idle");
        assert_eq!(board["columns"][0]["count"], 1);
        assert_eq!(board["columns"][1]["count"], 2);
        // Mais recente primeiro
        assert_eq!(board["columns"][1]["cards"][0]["name"], "Paula");
        assert_eq!(board["columns"][1]["cards"][0]["overdue"], false);
    }

    #[tokio::test]
    async fn drag_to_column_moves_lead_on_hover() {
        let app = test_app();
        let id = create(&app, "Carlos", "IN_PROGRESS").await;

        send(&app, "POST", "/api/board/drag/start", Some(json!({ "leadId": id }))).await;
        let (_, outcome) =
            send(&app, "POST", "/api/board/drag/over", Some(json!({ "overId": "VISIT_PENDING" }))).await;
        assert_eq!(outcome["statusApplied"], "VISIT_PENDING");
        assert_eq!(outcome["drag"]["phase"], "dragging");

        let (_, outcome) =
            send(&app, "POST", "/api/board/drag/end", Some(json!({ "overId": "VISIT_PENDING" }))).await;
        assert_eq!(outcome["drag"]["phase"], "idle");
        assert_eq!(status_of(&app, &id).await, "VISIT_PENDING");
    }

    #[tokio::test]
    async fn drop_on_won_requires_confirmation() {
        let app = test_app();
        let id = create(&app, "Ana", "VISIT_PENDING").await;

        send(&app, "POST", "/api/board/drag/start", Some(json!({ "leadId": id }))).await;
        let (_, outcome) =
            send(&app, "POST", "/api/board/drag/over", Some(json!({ "overId": "WON" }))).await;
        assert_eq!(outcome["confirmation"]["leadId"], id.as_str());
        assert_eq!(outcome["drag"]["phase"], "pendingConfirmation");
        assert_eq!(status_of(&app, &id).await, "VISIT_PENDING");

        send(&app, "POST", "/api/board/drag/end", Some(json!({ "overId": "WON" }))).await;
        assert_eq!(status_of(&app, &id).await, "VISIT_PENDING");

        let (status, outcome) = send(
            &app,
            "POST",
            "/api/board/confirmation",
            Some(json!({ "closeType": "SALE_WITH_TRADE_IN" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(outcome["statusApplied"], "WON");
        assert_eq!(outcome["drag"]["phase"], "idle");
        assert_eq!(status_of(&app, &id).await, "WON");
    }

    #[tokio::test]
    async fn cancel_keeps_previous_status() {
        let app = test_app();
        let id = create(&app, "Ana", "SCHEDULED").await;

        send(&app, "POST", "/api/board/drag/start", Some(json!({ "leadId": id }))).await;
        send(&app, "POST", "/api/board/drag/over", Some(json!({ "overId": "WON" }))).await;
        send(&app, "POST", "/api/board/drag/end", Some(json!({ "overId": "WON" }))).await;

        let (status, outcome) = send(&app, "DELETE", "/api/board/confirmation", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(outcome["drag"]["phase"], "idle");
        assert_eq!(status_of(&app, &id).await, "SCHEDULED");

        // Sem pedido pendente, confirmar não faz nada
        let (_, outcome) =
            send(&app, "POST", "/api/board/confirmation", Some(json!({ "closeType": "SALE" }))).await;
        assert_eq!(outcome["statusApplied"], Value::Null);
        assert_eq!(status_of(&app, &id).await, "SCHEDULED");
    }

    #[tokio::test]
    async fn drop_outside_any_column_is_a_no_op() {
        let app = test_app();
        let id = create(&app, "Carlos", "IN_PROGRESS").await;

        send(&app, "POST", "/api/board/drag/start", Some(json!({ "leadId": id }))).await;
        let (status, outcome) = send(&app, "POST", "/api/board/drag/end", Some(json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(outcome["reordered"], false);
        assert_eq!(outcome["drag"]["phase"], "idle");
        assert_eq!(status_of(&app, &id).await, "IN_PROGRESS");
    }

    #[tokio::test]
    async fn confirmation_without_close_type_is_rejected() {
        let app = test_app();
        let (status, body) = crate::handlers::test_support::send_with_lang(
            &app,
            "POST",
            "/api/board/confirmation",
            Some(json!({})),
            "pt-BR",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Corpo da requisição inválido.");
    }

    #[tokio::test]
    async fn unknown_lead_gesture_is_ignored() {
        let app = test_app();
        let (status, outcome) =
            send(&app, "POST", "/api/board/drag/start", Some(json!({ "leadId": "ghost" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(outcome["drag"]["phase"], "idle");
    }
}
