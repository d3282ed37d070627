use macroquad::prelude::*;
use crate::domain::Grid;
use crate::application::GameState;
use crate::ui::{Button, buttons_bottom, panel_x, grid_area_width, grid_area_height, PANEL_WIDTH};

/// Hue in degrees reached by a fully alive cell
const MAX_HUE: f32 = 340.0;

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Convert HSV (hue in degrees, saturation and value in [0,1]) to RGB in [0,1]
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> (f32, f32, f32) {
    let chroma = value * saturation;
    let sector = hue.rem_euclid(360.0) / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = value - chroma;
    (r + m, g + m, b + m)
}

/// Colour for a cell state: hue, saturation and value all scale with the state,
/// so dead cells are black and fully alive cells are a saturated pink.
pub fn state_color(state: f32) -> Color {
    let s = state.clamp(0.0, 1.0);
    let (r, g, b) = hsv_to_rgb(MAX_HUE * s, s, s);
    Color::new(r, g, b, 1.0)
}

/// Largest square cell size that fits the whole grid in the area
pub fn fit_cell_size(area_width: f32, area_height: f32, grid_width: usize, grid_height: usize) -> f32 {
    let by_width = area_width / grid_width as f32;
    let by_height = area_height / grid_height as f32;
    by_width.min(by_height).max(1.0)
}

/// Draw every cell as a filled square, outlined when cells are large enough
pub fn draw_grid(grid: &Grid) {
    let (grid_width, grid_height) = grid.dimensions();
    let cell_size = fit_cell_size(grid_area_width(), grid_area_height(), grid_width, grid_height);
    let draw_outlines = cell_size >= 4.0;

    for (x, y, state) in grid.iter_cells() {
        let screen_x = x as f32 * cell_size;
        let screen_y = y as f32 * cell_size;

        draw_rectangle(screen_x, screen_y, cell_size, cell_size, state_color(state));
        if draw_outlines {
            draw_rectangle_lines(screen_x, screen_y, cell_size, cell_size, 1.0, BLACK);
        }
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255)
    );
}

/// Key bindings handled by `input::process_keyboard_input`
const KEY_HELP: [&str; 4] = [
    "Space: Toggle  S: Step",
    "R: Reseed  C: Clear",
    "P: Serial/Parallel",
    "Up/Down: Speed",
];

/// Text, size and colour of each panel line below the buttons
fn panel_lines(state: &GameState) -> Vec<(String, f32, Color)> {
    let grid = state.simulator.grid();
    let rule = state.simulator.rule();
    let (gw, gh) = grid.dimensions();
    let muted = Color::from_rgba(180, 180, 180, 255);

    let status_color = if state.is_running {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };

    let mut lines = vec![("Controls:".to_owned(), 14.0, WHITE)];
    lines.extend(KEY_HELP.iter().map(|help| (help.to_string(), 12.0, GRAY)));
    lines.extend([
        (format!("Rule: {}", rule.name()), 13.0, WHITE),
        (rule.description().to_owned(), 11.0, GRAY),
        (format!("Grid: {}x{} ({})", gw, gh, format_number(gw * gh)), 12.0, muted),
        (format!("Generation: {}", state.generation()), 16.0, WHITE),
        (if state.is_running { "Running" } else { "Paused" }.to_owned(), 16.0, status_color),
        (format!("Speed: {:.0} gen/s", state.updates_per_second), 13.0, muted),
        (
            format!("{}: {:.1}ms  Render: {:.1}ms", state.algorithm.name(), state.last_evolution_time_ms, state.last_render_time_ms),
            12.0,
            muted,
        ),
        (state.algorithm.description().to_owned(), 11.0, GRAY),
        (
            format!("Mean {:.3}  Alive {}  Live {}", grid.mean_state(), grid.alive_count(), grid.live_count()),
            12.0,
            muted,
        ),
    ]);
    lines
}

/// Draw the control panel with buttons and simulation info
pub fn draw_controls(state: &GameState, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_panel_background();

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x();
    let top = buttons_bottom() + 10.0;

    panel_lines(state).iter().enumerate().for_each(|(i, (text, size, color))| {
        draw_text(text, px + 4.0, top + i as f32 * 20.0, *size, *color);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rgb(actual: (f32, f32, f32), expected: (f32, f32, f32)) {
        let close = |a: f32, b: f32| (a - b).abs() < 1e-5;
        assert!(
            close(actual.0, expected.0) && close(actual.1, expected.1) && close(actual.2, expected.2),
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn test_hsv_primaries() {
        assert_rgb(hsv_to_rgb(0.0, 1.0, 1.0), (1.0, 0.0, 0.0));
        assert_rgb(hsv_to_rgb(120.0, 1.0, 1.0), (0.0, 1.0, 0.0));
        assert_rgb(hsv_to_rgb(240.0, 1.0, 1.0), (0.0, 0.0, 1.0));
        assert_rgb(hsv_to_rgb(360.0, 1.0, 1.0), (1.0, 0.0, 0.0));
    }

    #[test]
    fn test_zero_saturation_is_grey() {
        assert_rgb(hsv_to_rgb(200.0, 0.0, 0.4), (0.4, 0.4, 0.4));
    }

    #[test]
    fn test_dead_cell_is_black() {
        let c = state_color(0.0);
        assert_eq!((c.r, c.g, c.b), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_alive_cell_is_pink() {
        let c = state_color(1.0);
        assert_rgb((c.r, c.g, c.b), hsv_to_rgb(340.0, 1.0, 1.0));
        assert!(c.r > c.b && c.b > c.g);
    }

    #[test]
    fn test_fit_cell_size_uses_tighter_axis() {
        assert_eq!(fit_cell_size(800.0, 600.0, 100, 100), 6.0);
        assert_eq!(fit_cell_size(800.0, 600.0, 400, 10), 2.0);
        assert_eq!(fit_cell_size(10.0, 10.0, 1000, 1000), 1.0);
    }

    fn panel_text() -> Vec<String> {
        let state = GameState::new(crate::config::SimConfig {
            width: 20,
            height: 20,
            ..crate::config::SimConfig::default()
        })
        .unwrap();
        panel_lines(&state).into_iter().map(|(text, _, _)| text).collect()
    }

    #[test]
    fn test_panel_lists_every_key_binding() {
        let text = panel_text().join("\n");
        for key in ["Space:", "S:", "R:", "C:", "P:", "Up/Down:"] {
            assert!(text.contains(key), "missing {key}");
        }
    }

    #[test]
    fn test_panel_shows_rule_and_algorithm() {
        let text = panel_text();
        assert!(text.contains(&"Rule: Continuous".to_owned()));
        assert!(text.iter().any(|line| line == crate::domain::Algorithm::Serial.description()));
        assert!(text.iter().any(|line| line.starts_with("Mean ") && line.contains("Live ")));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(10_000), "10.0K");
        assert_eq!(format_number(2_500_000), "2.5M");
    }
}
