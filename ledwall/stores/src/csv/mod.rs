pub mod cabinets;
