use super::common::{Direction, WaveMotion, WaveState};
use crate::config::GridConfig;

/// Bounce motion - the wave travels back and forth, reversing direction and
/// advancing the palette each time the head crosses an edge. The turning
/// points sit one tail-length outside the grid so the tail fully clears the
/// visible cells before the wave comes back.
pub(crate) struct Bounce;

impl WaveMotion for Bounce {
    fn advance(&self, state: WaveState, config: &GridConfig) -> WaveState {
        let right_edge = config.columns as i32 + config.wave_width as i32;
        let left_edge = -(config.wave_width as i32);

        let mut next = state;
        let new_head = state.head + state.direction.step();
        match state.direction {
            Direction::Forward if new_head > right_edge => {
                next.direction = Direction::Backward;
                next.color_index = (state.color_index + 1) % config.palette.len();
                next.head = right_edge;
            }
            Direction::Backward if new_head < left_edge => {
                next.direction = Direction::Forward;
                next.color_index = (state.color_index + 1) % config.palette.len();
                next.head = left_edge;
            }
            _ => next.head = new_head,
        }
        next
    }
}
