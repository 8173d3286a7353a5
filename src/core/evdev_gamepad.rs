use evdev::{AbsoluteAxisCode, Device, KeyCode};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::traits::{GamepadSnapshot, GamepadSource};

use super::gamepad::normalize_axis;

/// How often to look for devices while none is open
const RESCAN_INTERVAL: Duration = Duration::from_secs(1);

/// Button order of `GamepadSnapshot::buttons`
const BUTTONS: [KeyCode; 6] = [
    KeyCode::BTN_SOUTH,
    KeyCode::BTN_EAST,
    KeyCode::BTN_NORTH,
    KeyCode::BTN_WEST,
    KeyCode::BTN_TL,
    KeyCode::BTN_TR,
];

/// Axis order of `GamepadSnapshot::axes`; evdev Y axes already grow downwards
const AXES: [AbsoluteAxisCode; 4] = [
    AbsoluteAxisCode::ABS_X,
    AbsoluteAxisCode::ABS_Y,
    AbsoluteAxisCode::ABS_RX,
    AbsoluteAxisCode::ABS_RY,
];

fn is_gamepad(device: &Device) -> bool {
    let has_south = device
        .supported_keys()
        .is_some_and(|keys| keys.contains(KeyCode::BTN_SOUTH));
    let has_stick = device
        .supported_absolute_axes()
        .is_some_and(|axes| axes.contains(AbsoluteAxisCode::ABS_X));
    has_south && has_stick
}

/// Gamepads read through Linux evdev nodes.
///
/// Device state is queried on every snapshot, so no event pump is needed.
/// A read error drops the device and a later snapshot rescans.
#[derive(Default)]
pub struct EvdevGamepads {
    devices: Vec<(PathBuf, Device)>,
    last_scan: Option<Instant>,
}

impl EvdevGamepads {
    pub fn new() -> Self {
        let mut pads = Self::default();
        pads.rescan();
        pads
    }

    fn rescan(&mut self) {
        self.last_scan = Some(Instant::now());
        self.devices = evdev::enumerate()
            .filter(|(_, device)| is_gamepad(device))
            .collect();
        self.devices.sort_by(|a, b| a.0.cmp(&b.0));
        for (index, (path, device)) in self.devices.iter().enumerate() {
            log::info!(
                "Gamepad {}: {} ({})",
                index,
                device.name().unwrap_or("unnamed"),
                path.display()
            );
        }
    }

    fn read(device: &Device) -> std::io::Result<GamepadSnapshot> {
        let keys = device.get_key_state()?;
        let abs = device.get_abs_state()?;
        let buttons = BUTTONS.iter().map(|&code| keys.contains(code)).collect();
        let axes = AXES
            .iter()
            .map(|code| {
                let info = abs[code.0 as usize];
                normalize_axis(info.value, info.minimum, info.maximum)
            })
            .collect();
        Ok(GamepadSnapshot { buttons, axes })
    }
}

impl GamepadSource for EvdevGamepads {
    fn snapshot(&mut self, index: usize) -> Option<GamepadSnapshot> {
        if index >= self.devices.len() {
            let due = self
                .last_scan
                .map_or(true, |at| at.elapsed() >= RESCAN_INTERVAL);
            if !due {
                return None;
            }
            self.rescan();
        }
        let (path, device) = self.devices.get(index)?;
        match Self::read(device) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                log::warn!("Lost gamepad {}: {}", path.display(), err);
                self.devices.remove(index);
                None
            }
        }
    }
}
