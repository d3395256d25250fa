use crate::config::GridConfig;

/// Direction of per-tick head movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Columns moved per tick: +1 forward, -1 backward
    pub(crate) fn step(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Animation state advanced once per tick. Created when the animator starts
/// and replaced wholesale on restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WaveState {
    /// Leading column of the wave; ranges past the grid edges by up to the
    /// wave width on either side
    pub(crate) head: i32,
    /// Only bounce motion ever turns this backward
    pub(crate) direction: Direction,
    /// Index into the configured palette, always in range via modulo
    pub(crate) color_index: usize,
}

impl WaveState {
    /// The state every run starts from: head one tail-length off screen,
    /// moving forward, on the first palette color
    pub(crate) fn initial(config: &GridConfig) -> Self {
        Self {
            head: -(config.wave_width as i32),
            direction: Direction::Forward,
            color_index: 0,
        }
    }
}

/// The color of a single colored cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HslColor {
    /// Hue in degrees (0-360)
    pub(crate) hue: u16,
    /// Saturation percentage (0-100)
    pub(crate) saturation: u8,
    /// Lightness percentage (0-100)
    pub(crate) lightness: u8,
}

/// Trait for wave motion styles
pub(crate) trait WaveMotion {
    /// Advance the wave by one tick
    fn advance(&self, state: WaveState, config: &GridConfig) -> WaveState;
}

/// Derive the color of one column for the current state. Columns inside the
/// gradient tail fade by 10 lightness per cell behind the head, starting at
/// 50 on the head itself; everything else is transparent.
pub(crate) fn cell_color(column: u16, state: &WaveState, config: &GridConfig) -> Option<HslColor> {
    let distance = match state.direction {
        Direction::Forward => state.head - column as i32,
        Direction::Backward => column as i32 - state.head,
    };
    if distance < 0 || distance >= config.wave_width as i32 {
        return None;
    }

    let base = config.palette[state.color_index];
    let lightness = (50 - distance * 10).max(0) as u8;
    Some(HslColor { hue: base.hue, saturation: base.saturation, lightness })
}

/// Convert HSL to RGB components
/// H: hue (0-360), S: saturation (0-100), L: lightness (0-100)
pub(crate) fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    let s = s / 100.0;
    let l = l / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    )
}
