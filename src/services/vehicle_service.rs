// src/services/vehicle_service.rs

use crate::{
    common::error::AppError,
    db::VehicleRepository,
    models::vehicle::{NewVehicle, Vehicle},
};

#[derive(Clone)]
pub struct VehicleService {
    repo: VehicleRepository,
}

impl VehicleService {
    pub fn new(repo: VehicleRepository) -> Self {
        Self { repo }
    }

    pub fn create_vehicle(&self, data: NewVehicle) -> Result<String, AppError> {
        let label = format!("{} {}", data.brand, data.model);
        let id = self.repo.write(|store| store.create_vehicle(data))?;
        tracing::info!(vehicle_id = %id, %label, "🚗 Veículo cadastrado no estoque");
        Ok(id)
    }

    /// Estoque na ordem de cadastro (mais recente primeiro), filtrado por marca/modelo.
    pub fn list_vehicles(&self, search: Option<&str>) -> Result<Vec<Vehicle>, AppError> {
        let term = search.unwrap_or_default();
        self.repo.read(|store| store.search(term).cloned().collect())
    }

    pub fn get_vehicle(&self, id: &str) -> Result<Vehicle, AppError> {
        self.repo
            .read(|store| store.get(id).cloned())?
            .ok_or(AppError::VehicleNotFound)
    }
}
