pub mod config;
pub mod constants;
pub mod controller;
pub mod curve;
pub mod error;
pub mod gizmo;
pub mod host;
pub mod mapper;
pub mod scene;

pub use config::*;
pub use constants::*;
pub use controller::*;
pub use curve::*;
pub use error::*;
pub use gizmo::*;
pub use host::*;
pub use mapper::*;
pub use scene::*;
