pub mod board;
pub mod leads;
pub mod vehicles;
