// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::controllers::ControlMode;

#[derive(Parser, Debug, Clone)]
#[command(name = "dronecam")]
#[command(about = "Drone-follow camera rig", long_about = None)]
pub struct Cli {
    /// Control scheme
    #[arg(long, value_enum, default_value_t = ControlMode::DroneKeyboard)]
    pub mode: ControlMode,

    /// JSON file overriding rig tunables
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Drone geometry file
    #[arg(long, default_value = "resources/models/Drone E58.obj")]
    pub drone_obj: PathBuf,

    /// Drone material file
    #[arg(long, default_value = "resources/models/Drone E58.mtl")]
    pub drone_mtl: PathBuf,

    /// Environment geometry file
    #[arg(long, default_value = "resources/models/scene_mesh_textured.obj")]
    pub scene_obj: PathBuf,

    /// Environment material file
    #[arg(long, default_value = "resources/models/scene_mesh_textured.mtl")]
    pub scene_mtl: PathBuf,

    /// Disable the status line in the window title
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["dronecam"]);
        assert_eq!(cli.mode, ControlMode::DroneKeyboard);
        assert!(cli.config.is_none());
        assert!(!cli.no_ui);
        assert!(cli.drone_obj.ends_with("Drone E58.obj"));
    }

    #[test]
    fn mode_and_flags() {
        let cli = Cli::parse_from(["dronecam", "--mode", "drone-gamepad", "--no-ui", "--config", "rig.json"]);
        assert_eq!(cli.mode, ControlMode::DroneGamepad);
        assert!(cli.no_ui);
        assert_eq!(cli.config, Some(PathBuf::from("rig.json")));
    }
}
