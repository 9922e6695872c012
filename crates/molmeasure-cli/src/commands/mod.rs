pub mod analyze;
pub mod bonds;
pub mod measure;
