mod common;

// Individual motion modules
mod bounce;
mod sweep;

pub(crate) use common::{cell_color, hsl_to_rgb, Direction, HslColor, WaveMotion, WaveState};

use crate::config::WaveStyle;

/// Get the motion implementation for a given style
pub(crate) fn get_motion(style: WaveStyle) -> Box<dyn WaveMotion> {
    match style {
        WaveStyle::Sweep => Box::new(sweep::Sweep),
        WaveStyle::Bounce => Box::new(bounce::Bounce),
    }
}
