// src/handlers/vehicles.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    handlers::leads::{not_blank, CreatedResponse},
    middleware::{i18n::Locale, json::AppJson},
    models::vehicle::{NewVehicle, Vehicle, VehicleStatus},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route("/{id}", get(get_vehicle))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehiclePayload {
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Honda")]
    pub brand: String,

    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Civic RS")]
    pub model: String,

    #[serde(default)]
    #[schema(example = "2024")]
    pub year: String,

    #[validate(range(min = 0.0, message = "negative_price"))]
    #[schema(example = 265000.0)]
    pub price: f64,

    #[serde(default)]
    #[schema(example = "0 km")]
    pub km: String,

    #[schema(example = "Híbrido")]
    pub fuel: Option<String>,

    pub status: Option<VehicleStatus>,
    pub image_url: Option<String>,
}

impl From<CreateVehiclePayload> for NewVehicle {
    fn from(payload: CreateVehiclePayload) -> Self {
        NewVehicle {
            brand: payload.brand,
            model: payload.model,
            year: payload.year,
            price: payload.price,
            km: payload.km,
            fuel: payload.fuel,
            status: payload.status,
            image_url: payload.image_url,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct VehicleSearch {
    pub search: Option<String>,
}

// GET /api/vehicles?search=civic
#[utoipa::path(
    get,
    path = "/api/vehicles",
    tag = "Vehicles",
    params(("search" = Option<String>, Query, description = "Filtro por marca ou modelo")),
    responses(
        (status = 200, description = "Estoque, mais recentes primeiro", body = Vec<Vehicle>)
    )
)]
pub async fn list_vehicles(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(params): Query<VehicleSearch>,
) -> Result<impl IntoResponse, ApiError> {
    let vehicles = app_state
        .vehicle_service
        .list_vehicles(params.search.as_deref())
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(vehicles)))
}

// POST /api/vehicles
#[utoipa::path(
    post,
    path = "/api/vehicles",
    tag = "Vehicles",
    request_body = CreateVehiclePayload,
    responses(
        (status = 201, description = "Veículo cadastrado", body = CreatedResponse),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_vehicle(
    State(app_state): State<AppState>,
    locale: Locale,
    AppJson(payload): AppJson<CreateVehiclePayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let id = app_state
        .vehicle_service
        .create_vehicle(payload.into())
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

// GET /api/vehicles/{id}
#[utoipa::path(
    get,
    path = "/api/vehicles/{id}",
    tag = "Vehicles",
    params(("id" = String, Path, description = "ID do veículo")),
    responses(
        (status = 200, description = "Veículo encontrado", body = Vehicle),
        (status = 404, description = "Veículo não encontrado")
    )
)]
pub async fn get_vehicle(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let vehicle = app_state
        .vehicle_service
        .get_vehicle(&id)
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(vehicle)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::handlers::test_support::{send, test_app};

    async fn add(app: &axum::Router, brand: &str, model: &str) -> String {
        let (status, body) = send(
            app,
            "POST",
            "/api/vehicles",
            Some(json!({ "brand": brand, "model": model, "year": "2024", "price": 150000.0 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn create_list_and_search_stock() {
        let app = test_app();
        add(&app, "Toyota", "Corolla XEi").await;
        let civic = add(&app, "Honda", "Civic RS").await;

        let (_, all) = send(&app, "GET", "/api/vehicles", None).await;
        assert_eq!(all.as_array().unwrap().len(), 2);
        assert_eq!(all[0]["id"], civic.as_str());
        assert_eq!(all[0]["status"], "available");
        assert_eq!(all[0]["fuel"], "Flex");

        let (status, found) = send(&app, "GET", "/api/vehicles?search=COROLLA", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(found.as_array().unwrap().len(), 1);
        assert_eq!(found[0]["brand"], "Toyota");

        let (status, vehicle) = send(&app, "GET", &format!("/api/vehicles/{civic}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(vehicle["model"], "Civic RS");
    }

    #[tokio::test]
    async fn rejects_blank_brand_and_negative_price() {
        let app = test_app();
        let (status, body) = send(
            &app,
            "POST",
            "/api/vehicles",
            Some(json!({ "brand": " ", "model": "Civic", "price": -1.0 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"]["brand"][0], "This field is required.");
        assert_eq!(body["details"]["price"][0], "Price cannot be negative.");
    }

    #[tokio::test]
    async fn unknown_vehicle_is_404() {
        let app = test_app();
        let (status, body) = send(&app, "GET", "/api/vehicles/v9", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Vehicle not found.");
    }
}
