pub mod experiment;
pub mod model;
