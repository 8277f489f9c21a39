pub mod camera;
pub mod controller;
pub mod device;

pub use camera::*;
pub use controller::*;
pub use device::*;
