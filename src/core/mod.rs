pub mod geo;
pub mod options;
