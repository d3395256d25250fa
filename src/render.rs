use crate::animations::hsl_to_rgb;
use crate::animator::WaveAnimator;
use crate::config::{GridConfig, WaveStyle};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout, Write};
use std::time::Instant;

/// Cells are two character-columns wide so they come out roughly square
const CELL_WIDTH: u16 = 2;
/// Blank columns between neighboring cells
const CELL_GAP: u16 = 1;

/// Raw-mode terminal handle. Acquiring it enters the alternate screen and
/// hides the cursor; dropping it restores the terminal exactly once, on every
/// exit path out of the run loop.
struct TerminalGuard {
    out: Stdout,
}

impl TerminalGuard {
    fn new() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { out })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(self.out, ResetColor, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Run the animation until the user quits. Owns the terminal for its whole
/// lifetime; one tick fires per configured interval.
pub(crate) fn run(animator: &mut WaveAnimator, style: WaveStyle) -> io::Result<()> {
    let mut guard = TerminalGuard::new()?;
    let interval = animator.config().tick_interval();
    let mut origin = grid_origin(animator.config(), terminal::size()?);
    let mut paused = false;
    let mut next_tick = Instant::now() + interval;

    draw(&mut guard.out, animator, origin, style, paused)?;

    loop {
        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match (key.code, key.modifiers) {
                        (KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc, _) => {
                            return Ok(());
                        }
                        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Ok(()),
                        (KeyCode::Char(' '), _) => {
                            paused = !paused;
                            draw(&mut guard.out, animator, origin, style, paused)?;
                        }
                        (KeyCode::Char('r') | KeyCode::Char('R'), _) => {
                            animator.reset();
                            draw(&mut guard.out, animator, origin, style, paused)?;
                        }
                        _ => {}
                    }
                }
                Event::Resize(columns, rows) => {
                    origin = grid_origin(animator.config(), (columns, rows));
                    execute!(guard.out, terminal::Clear(terminal::ClearType::All))?;
                    draw(&mut guard.out, animator, origin, style, paused)?;
                }
                _ => {}
            }
        }

        if Instant::now() >= next_tick {
            if !paused {
                animator.tick();
                draw(&mut guard.out, animator, origin, style, paused)?;
            }
            next_tick += interval;
        }
    }
}

/// Top-left corner that centers the grid when the terminal is large enough
fn grid_origin(config: &GridConfig, (term_columns, term_rows): (u16, u16)) -> (u16, u16) {
    let grid_width = config
        .columns
        .saturating_mul(CELL_WIDTH + CELL_GAP)
        .saturating_sub(CELL_GAP);
    let grid_height = config.rows.saturating_add(2);
    let x = term_columns.saturating_sub(grid_width) / 2;
    let y = term_rows.saturating_sub(grid_height) / 2;
    (x, y)
}

fn draw(
    out: &mut Stdout,
    animator: &WaveAnimator,
    origin: (u16, u16),
    style: WaveStyle,
    paused: bool,
) -> io::Result<()> {
    let config = animator.config();
    let colors = animator.color_row();

    for row in 0..config.rows {
        queue!(out, cursor::MoveTo(origin.0, origin.1.saturating_add(row)))?;
        for cell in &colors {
            match cell {
                Some(hsl) => {
                    let (r, g, b) = hsl_to_rgb(
                        hsl.hue as f32,
                        hsl.saturation as f32,
                        hsl.lightness as f32,
                    );
                    queue!(
                        out,
                        SetBackgroundColor(Color::Rgb { r, g, b }),
                        Print("  "),
                        ResetColor
                    )?;
                }
                None => queue!(out, Print("  "))?,
            }
            queue!(out, Print(" "))?;
        }
    }

    let footer = format!(
        "style:{style}  {}  q quit  space pause  r restart",
        if paused { "paused " } else { "running" }
    );
    queue!(
        out,
        cursor::MoveTo(origin.0, origin.1.saturating_add(config.rows).saturating_add(1)),
        Print(footer)
    )?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_centers_the_grid() {
        let config = GridConfig::default();
        // 20 columns of 2 cells + 19 gaps = 59 wide, 15 rows + footer = 17 tall
        assert_eq!(grid_origin(&config, (119, 37)), (30, 10));
    }

    #[test]
    fn origin_clamps_to_zero_on_small_terminals() {
        let config = GridConfig::default();
        assert_eq!(grid_origin(&config, (10, 5)), (0, 0));
    }
}
