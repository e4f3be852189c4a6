pub mod lead_store;
pub use lead_store::LeadStore;
pub mod vehicle_store;
pub use vehicle_store::VehicleStore;
pub mod repository;
pub use repository::{LeadRepository, VehicleRepository};
pub mod seed;
