use macroquad::prelude::*;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use life_board::{
    AppConfig, Controller, FileStore, PatternCatalog,
    application::{MAX_INTERVAL_MS, MIN_INTERVAL_MS, interval_from_slider},
    input, presets, rendering,
    ui::{self, Dropdown, GRID_SIZES, PATTERN_DROPDOWN_Y, SIZE_DROPDOWN_Y, Slider},
};

// Order of the dropdowns handed to `ui::update_dropdowns`
const SIZE_MENU: usize = 0;

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        warn!(error = %e, "bad configuration, using defaults");
        AppConfig::default()
    });
    info!(
        grid_size = config.grid_size,
        interval_ms = config.interval_ms,
        pattern = %config.pattern,
        state_dir = %config.state_dir.display(),
        "configuration loaded"
    );

    let store = FileStore::new(&config.state_dir);
    let mut controller = match Controller::new(
        PatternCatalog::standard(),
        store,
        config.grid_size,
        config.interval_ms,
        &config.pattern,
    ) {
        Ok(controller) => controller,
        Err(e) => {
            error!(error = %e, "could not create the board");
            return;
        }
    };

    let px = ui::panel_x();
    let size_items: Vec<String> = GRID_SIZES.iter().map(|&size| ui::grid_size_label(size)).collect();
    let mut size_dropdown = Dropdown::new(px, SIZE_DROPDOWN_Y, ui::PANEL_WIDTH, "Grid Size", size_items);
    ui::select_grid_size(&mut size_dropdown, controller.grid_size());

    let pattern_items: Vec<String> = controller.catalog().names().iter().map(|n| n.to_string()).collect();
    let mut pattern_dropdown = Dropdown::new(px, PATTERN_DROPDOWN_Y, ui::PANEL_WIDTH, "Pattern", pattern_items);
    if let Some(name) = controller.pattern() {
        pattern_dropdown.select_item(name);
    }

    let mut speed_slider = Slider::new(
        px + 10.0,
        ui::slider_y(),
        ui::PANEL_WIDTH - 20.0,
        MIN_INTERVAL_MS,
        MAX_INTERVAL_MS,
        // the slider mapping is its own inverse
        interval_from_slider(controller.scheduler().interval_ms()),
    );

    loop {
        let mouse_pos = mouse_position();

        // Keep the panel glued to the right edge
        let px = ui::panel_x();
        size_dropdown.set_position(px, SIZE_DROPDOWN_Y);
        pattern_dropdown.set_position(px, PATTERN_DROPDOWN_Y);
        speed_slider.set_position(px + 10.0, ui::slider_y());

        // Clicks that close a menu must not fall through to what lies under it
        let menu_was_open = size_dropdown.is_open() || pattern_dropdown.is_open();

        let controls = controller.controls();
        size_dropdown.set_enabled(controls.grid_size);
        pattern_dropdown.set_enabled(controls.pattern);

        let clicked = is_mouse_button_pressed(MouseButton::Left);
        match ui::update_dropdowns(&mut [&mut size_dropdown, &mut pattern_dropdown], mouse_pos, clicked) {
            Some(SIZE_MENU) => {
                if let Some(size) = size_dropdown.selected_item().and_then(ui::grid_size_from_label) {
                    match controller.resize(size) {
                        Ok(()) => {
                            pattern_dropdown.select_item(presets::GLIDER.name);
                        }
                        Err(e) => error!(size, error = %e, "resize failed"),
                    }
                }
            }
            Some(_) => {
                let name = pattern_dropdown.selected_item().unwrap_or_default().to_owned();
                if let Err(e) = controller.select_pattern(&name) {
                    error!(pattern = %name, error = %e, "pattern selection failed");
                }
            }
            None => {}
        }

        if speed_slider.update(mouse_pos) {
            controller.set_interval(interval_from_slider(speed_slider.value()));
        }

        let menu_open = menu_was_open || size_dropdown.is_open() || pattern_dropdown.is_open();
        let buttons = ui::create_buttons(&controller.controls());
        let layout = ui::board_layout(controller.game().rows(), controller.game().cols());
        if !menu_open {
            input::process_button_clicks(&mut controller, &buttons, mouse_pos);
            input::handle_cell_click(&mut controller, &layout, mouse_pos);
        }
        input::process_keyboard_input(&mut controller);

        controller.tick(get_frame_time());

        // Restore may have changed the board size
        ui::select_grid_size(&mut size_dropdown, controller.grid_size());
        let layout = ui::board_layout(controller.game().rows(), controller.game().cols());
        let buttons = ui::create_buttons(&controller.controls());

        clear_background(BLACK);
        rendering::draw_board(controller.game(), &layout, mouse_pos);
        rendering::draw_controls(
            &controller,
            &buttons,
            &[&size_dropdown, &pattern_dropdown],
            &speed_slider,
            mouse_pos,
        );

        next_frame().await;
    }
}
