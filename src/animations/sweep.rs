use super::common::{WaveMotion, WaveState};
use crate::config::GridConfig;

/// Sweep motion - the wave always moves left-to-right, wrapping back to the
/// left edge and advancing the palette on each wrap. The head runs one column
/// past the grid before the wrap check fires, so it tops out at columns + 1.
pub(crate) struct Sweep;

impl WaveMotion for Sweep {
    fn advance(&self, state: WaveState, config: &GridConfig) -> WaveState {
        let mut next = state;
        if state.head > config.columns as i32 {
            next.color_index = (state.color_index + 1) % config.palette.len();
            next.head = -(config.wave_width as i32);
        } else {
            next.head = state.head + 1;
        }
        next
    }
}
