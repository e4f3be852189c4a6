pub mod board_service;
pub mod lead_service;
pub mod reconciler;
pub mod simulation_service;
pub mod vehicle_service;
