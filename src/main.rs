use macroquad::prelude::*;
use continuous_life::{GameState, SimConfig, input, rendering, ui};

fn window_conf() -> Conf {
    Conf {
        window_title: "Continuous Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

/// Config from the first CLI argument, or defaults when absent or unreadable
fn load_config() -> SimConfig {
    let Some(path) = std::env::args().nth(1) else {
        return SimConfig::default();
    };
    SimConfig::load(&path).unwrap_or_else(|err| {
        log::warn!("{err}; falling back to default config");
        SimConfig::default()
    })
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let mut state = match GameState::new(load_config()) {
        Ok(state) => state,
        Err(err) => {
            log::error!("cannot start simulation: {err}");
            return;
        }
    };

    loop {
        let mouse_pos = mouse_position();

        // Recreate buttons with current panel position
        let buttons = ui::create_buttons();

        state = input::process_button_clicks(state, &buttons, mouse_pos);
        state = input::process_keyboard_input(state);

        state = state.tick(get_frame_time());

        let render_start = std::time::Instant::now();
        clear_background(BLACK);
        rendering::draw_grid(state.simulator.grid());

        let plain_buttons: Vec<_> = buttons.into_iter().map(|(_, btn)| btn).collect();
        rendering::draw_controls(&state, &plain_buttons, mouse_pos);
        state.last_render_time_ms = render_start.elapsed().as_secs_f32() * 1000.0;

        next_frame().await;
    }
}
