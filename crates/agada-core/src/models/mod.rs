pub mod case;
pub mod exposure;
pub mod patient;
