use crate::animations::{cell_color, get_motion, HslColor, WaveMotion, WaveState};
use crate::config::{GridConfig, WaveStyle};

/// Drives the wave: owns the configuration, the motion for the selected
/// style, and the state for the current run.
pub(crate) struct WaveAnimator {
    config: GridConfig,
    motion: Box<dyn WaveMotion>,
    state: WaveState,
}

impl WaveAnimator {
    /// The config must have been validated already
    pub(crate) fn new(config: GridConfig, style: WaveStyle) -> Self {
        let state = WaveState::initial(&config);
        Self { config, motion: get_motion(style), state }
    }

    /// Advance the wave by one tick
    pub(crate) fn tick(&mut self) {
        self.state = self.motion.advance(self.state, &self.config);
    }

    /// Throw away the current state and start over from the initial one
    pub(crate) fn reset(&mut self) {
        self.state = WaveState::initial(&self.config);
    }

    /// Derive the column-indexed color buffer for the current state. Every
    /// row shows the same colors; rows are purely visual repetition.
    pub(crate) fn color_row(&self) -> Vec<Option<HslColor>> {
        (0..self.config.columns)
            .map(|column| cell_color(column, &self.state, &self.config))
            .collect()
    }

    pub(crate) fn config(&self) -> &GridConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn ticks_march_the_gradient_across_the_grid() {
        let config = GridConfig::default();
        let mut animator = WaveAnimator::new(config, WaveStyle::Sweep);

        assert!(animator.color_row().iter().all(Option::is_none));

        // Five ticks take the head from -5 to 0: column 0 lights up first
        for _ in 0..5 {
            animator.tick();
        }
        let row = animator.color_row();
        assert_eq!(row[0].unwrap().lightness, 50);
        assert!(row[1..].iter().all(Option::is_none));

        // Three more ticks and the tail stretches behind the head
        for _ in 0..3 {
            animator.tick();
        }
        let lightness: Vec<_> = animator.color_row()[..5]
            .iter()
            .map(|cell| cell.map(|c| c.lightness))
            .collect();
        assert_eq!(lightness, vec![Some(20), Some(30), Some(40), Some(50), None]);
    }

    #[test]
    fn buffer_length_matches_columns() {
        let config = GridConfig { columns: 7, ..Default::default() };
        let animator = WaveAnimator::new(config, WaveStyle::Bounce);
        assert_eq!(animator.color_row().len(), 7);
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let config = GridConfig::default();
        let mut animator = WaveAnimator::new(config, WaveStyle::Sweep);
        let initial = animator.color_row();

        for _ in 0..40 {
            animator.tick();
        }
        assert_ne!(animator.color_row(), initial);

        animator.reset();
        assert_eq!(animator.color_row(), initial);
    }

    #[rstest]
    #[case::sweep(WaveStyle::Sweep)]
    #[case::bounce(WaveStyle::Bounce)]
    fn colors_always_come_from_the_palette(#[case] style: WaveStyle) {
        let config = GridConfig::default();
        let hues: Vec<_> = config.palette.iter().map(|c| c.hue).collect();
        let mut animator = WaveAnimator::new(config, style);

        for _ in 0..300 {
            animator.tick();
            for cell in animator.color_row().into_iter().flatten() {
                assert!(hues.contains(&cell.hue));
                assert!(cell.lightness <= 50);
            }
        }
    }
}
