pub mod camera;
pub mod occurrence;
pub mod period;
pub mod stats;
pub mod types;
