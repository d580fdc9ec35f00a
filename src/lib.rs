pub mod collaborators;
pub mod error;
pub mod math;
pub mod operations;
pub mod plan;
pub mod scene;
pub mod tessellation;

pub use error::{Result, RoomgenError};
