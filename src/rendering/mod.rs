use macroquad::prelude::*;

use crate::application::{Controller, KeyValueStore};
use crate::domain::GameOfLife;
use crate::ui::{BoardLayout, Button, Dropdown, PANEL_WIDTH, PATTERN_DROPDOWN_Y, Slider, panel_x};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const DEAD_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// Draw every cell of the board. The hovered cell is outlined while the
/// simulation is stopped, since only then do clicks edit it.
pub fn draw_board(game: &GameOfLife, layout: &BoardLayout, mouse_pos: (f32, f32)) {
    let size = layout.cell_size;
    let draw_lines = size >= 4.0;

    for (row, col, cell) in game.grid().iter_cells() {
        let (x, y) = layout.cell_origin(row, col);
        let color = if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };
        draw_rectangle(x, y, size, size, color);
        if draw_lines {
            draw_rectangle_lines(x, y, size, size, 1.0, LINE_COLOR);
        }
    }

    if game.is_running() {
        return;
    }
    if let Some((row, col)) = layout.cell_at(mouse_pos.0, mouse_pos.1) {
        let (x, y) = layout.cell_origin(row, col);
        draw_rectangle_lines(x, y, size, size, 2.0, Color::from_rgba(255, 255, 0, 200));
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the control panel: buttons, speed, generation, status, dropdowns
pub fn draw_controls<S: KeyValueStore>(
    controller: &Controller<S>,
    buttons: &[Button],
    dropdowns: &[&Dropdown],
    speed: &Slider,
    mouse_pos: (f32, f32),
) {
    draw_panel_background();
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x();
    let game = controller.game();
    let running = game.is_running();

    if let Some(pattern) = controller.pattern().and_then(|name| controller.catalog().get(name)) {
        draw_text(pattern.description, px, PATTERN_DROPDOWN_Y + 48.0, 13.0, GRAY);
    }

    let speed_y = crate::ui::slider_y();
    draw_text("Speed:", px, speed_y - 15.0, 16.0, WHITE);
    speed.draw();
    let info_y = speed_y + 30.0;

    let labels = [
        (
            format!("{} gen/s", controller.scheduler().generations_per_second()),
            info_y,
            14.0,
            Color::from_rgba(180, 180, 180, 255),
        ),
        ("Generation:".to_owned(), info_y + 30.0, 16.0, WHITE),
        (
            controller.display().value().to_string(),
            info_y + 52.0,
            20.0,
            ALIVE_COLOR,
        ),
        (
            format!("Grid: {}×{}  Alive: {}", game.rows(), game.cols(), game.population()),
            info_y + 78.0,
            12.0,
            GRAY,
        ),
        ("Status:".to_owned(), info_y + 105.0, 16.0, WHITE),
        (
            if running { "Running" } else { "Stopped" }.to_owned(),
            info_y + 125.0,
            16.0,
            if running {
                Color::from_rgba(0, 255, 0, 255)
            } else {
                Color::from_rgba(255, 165, 0, 255)
            },
        ),
    ];
    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });

    if let Some(status) = controller.status() {
        draw_text(status, px, info_y + 155.0, 16.0, ALIVE_COLOR);
    }

    // Open dropdown last so its menu sits on top
    dropdowns
        .iter()
        .filter(|d| !d.is_open())
        .chain(dropdowns.iter().filter(|d| d.is_open()))
        .for_each(|d| d.draw(mouse_pos));
}
