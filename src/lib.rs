pub mod assets;
pub mod camera;
pub mod cli;
pub mod config;
pub mod controllers;
pub mod core;
pub mod frame;
pub mod math;
pub mod path;
pub mod scene;
pub mod scheduler;
pub mod subject;
pub mod traits;
pub mod world;

pub use camera::CameraRig;
pub use config::RigConfig;
pub use controllers::ControlMode;
pub use scheduler::TickScheduler;
pub use world::World;
