pub mod cabinets;
pub mod csv;
