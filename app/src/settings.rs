use std::{ops::RangeInclusive, time::Duration};

use egui::Color32;

pub const SPEED_RANGE: RangeInclusive<u32> = 0..=99;
pub const CELL_SIZE_RANGE: RangeInclusive<f32> = 5.0..=60.0;

#[derive(Clone, Copy, Debug)]
pub struct Settings {
    /// Slider position; higher is faster.
    pub speed: u32,
    pub cell_size: f32,
    pub line_width: f32,
    pub grid_color: Color32,
    pub cell_color: Color32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speed: 50,
            cell_size: 20.,
            line_width: 0.5,
            grid_color: Color32::DARK_GREEN,
            cell_color: Color32::RED,
        }
    }
}

impl Settings {
    /// Time between automatic steps: 1000ms at speed 0 down to 10ms at 99,
    /// on a logarithmic scale.
    pub fn interval(&self) -> Duration {
        let speed = self.speed.min(*SPEED_RANGE.end());
        let exponent = f64::from(99 - speed) / 99. * 2. + 1.;
        Duration::from_millis(10f64.powf(exponent).floor() as u64)
    }
}
