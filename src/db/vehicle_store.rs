// src/db/vehicle_store.rs

use uuid::Uuid;

use crate::models::vehicle::{NewVehicle, Vehicle};

const DEFAULT_DEALERSHIP_ID: &str = "d1";
const DEFAULT_FUEL: &str = "Flex";
const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1533473359331-0135ef1b58bf?q=80&w=800&auto=format&fit=crop";

/// Estoque de veículos em memória. Cadastro novo entra no topo.
#[derive(Debug, Clone, Default)]
pub struct VehicleStore {
    vehicles: Vec<Vehicle>,
    dealership_id: Option<String>,
}

impl VehicleStore {
    pub fn with_dealership(dealership_id: impl Into<String>) -> Self {
        Self {
            vehicles: Vec::new(),
            dealership_id: Some(dealership_id.into()),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|vehicle| vehicle.id == id)
    }

    pub fn search<'a>(&'a self, term: &'a str) -> impl Iterator<Item = &'a Vehicle> {
        self.vehicles.iter().filter(move |vehicle| vehicle.matches(term))
    }

    pub fn create_vehicle(&mut self, data: NewVehicle) -> String {
        let id = Uuid::new_v4().to_string();
        let vehicle = Vehicle {
            id: id.clone(),
            dealership_id: self
                .dealership_id
                .clone()
                .unwrap_or_else(|| DEFAULT_DEALERSHIP_ID.to_string()),
            brand: data.brand,
            model: data.model,
            year: data.year,
            price: data.price,
            km: data.km,
            fuel: data.fuel.unwrap_or_else(|| DEFAULT_FUEL.to_string()),
            status: data.status.unwrap_or_default(),
            image_url: data
                .image_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
        };

        self.vehicles.insert(0, vehicle);
        id
    }

    pub fn seed(&mut self, vehicles: Vec<Vehicle>) {
        self.vehicles.extend(vehicles);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::VehicleStatus;

    fn new_vehicle(brand: &str, model: &str) -> NewVehicle {
        NewVehicle {
            brand: brand.into(),
            model: model.into(),
            year: "2024".into(),
            price: 150000.0,
            km: "0 km".into(),
            ..NewVehicle::default()
        }
    }

    #[test]
    fn new_vehicle_goes_to_the_top_with_defaults() {
        let mut store = VehicleStore::with_dealership("loja-9");
        store.create_vehicle(new_vehicle("Toyota", "Corolla"));
        let id = store.create_vehicle(new_vehicle("Jeep", "Compass"));

        let first = store.search("").next().unwrap();
        assert_eq!(first.id, id);
        assert_eq!(first.dealership_id, "loja-9");
        assert_eq!(first.fuel, "Flex");
        assert_eq!(first.status, VehicleStatus::Available);
        assert_eq!(first.image_url, DEFAULT_IMAGE_URL);
    }

    #[test]
    fn search_filters_by_brand_or_model() {
        let mut store = VehicleStore::default();
        store.create_vehicle(new_vehicle("Toyota", "Corolla"));
        store.create_vehicle(new_vehicle("BMW", "320i M Sport"));
        store.create_vehicle(new_vehicle("Jeep", "Compass"));

        let found: Vec<&str> = store.search("bmw").map(|v| v.model.as_str()).collect();
        assert_eq!(found, ["320i M Sport"]);
        assert_eq!(store.search("CORO").count(), 1);
        assert_eq!(store.search("fiat").count(), 0);
        assert_eq!(store.search("  ").count(), 3);
    }

    #[test]
    fn get_unknown_vehicle_is_none() {
        let store = VehicleStore::default();
        assert!(store.get("v1").is_none());
    }
}
