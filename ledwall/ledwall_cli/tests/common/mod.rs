pub mod cabinets_builder;
