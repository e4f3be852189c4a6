pub mod board;
pub mod lead;
pub mod vehicle;
