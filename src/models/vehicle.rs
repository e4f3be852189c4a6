// src/models/vehicle.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    #[default]
    Available,
    Reserved,
    Sold,
}

// Veículo do estoque da loja. `Lead.interested_vehicle_id` aponta para cá.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    #[schema(example = "d1")]
    pub dealership_id: String,
    #[schema(example = "Toyota")]
    pub brand: String,
    #[schema(example = "Corolla XEi 2.0")]
    pub model: String,
    #[schema(example = "2024")]
    pub year: String,
    #[schema(example = 158900.0)]
    pub price: f64,
    #[schema(example = "0km")]
    pub km: String,
    #[schema(example = "Flex")]
    pub fuel: String,
    pub status: VehicleStatus,
    pub image_url: String,
}

impl Vehicle {
    /// Busca sem diferenciar maiúsculas, por marca ou modelo. Termo vazio casa com tudo.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.brand.to_lowercase().contains(&term)
            || self.model.to_lowercase().contains(&term)
    }
}

// Dados para cadastrar um veículo. Id e loja são do store.
#[derive(Debug, Clone, Default)]
pub struct NewVehicle {
    pub brand: String,
    pub model: String,
    pub year: String,
    pub price: f64,
    pub km: String,
    pub fuel: Option<String>,
    pub status: Option<VehicleStatus>,
    pub image_url: Option<String>,
}
