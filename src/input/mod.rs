use macroquad::prelude::*;
use tracing::error;

use crate::application::{Command, Controller, KeyValueStore};
use crate::ui::{BoardLayout, Button};

fn dispatch<S: KeyValueStore>(controller: &mut Controller<S>, command: Command) {
    if let Err(e) = controller.on_command(command) {
        error!(?command, error = %e, "command failed");
    }
}

/// Forward a left click on the board to the controller
pub fn handle_cell_click<S: KeyValueStore>(
    controller: &mut Controller<S>,
    layout: &BoardLayout,
    mouse_pos: (f32, f32),
) {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }
    if let Some((row, col)) = layout.cell_at(mouse_pos.0, mouse_pos.1) {
        controller.on_cell_activated(row, col);
    }
}

/// Keyboard shortcuts, honoring the same enablement as the buttons
pub fn process_keyboard_input<S: KeyValueStore>(controller: &mut Controller<S>) {
    let controls = controller.controls();
    let bindings = [
        (KeyCode::Space, if controls.start { Command::Start } else { Command::Stop }),
        (KeyCode::N, Command::Step),
        (KeyCode::C, Command::Clear),
        (KeyCode::R, Command::Randomize),
        (KeyCode::S, Command::Save),
        (KeyCode::L, Command::Restore),
    ];

    for (key, command) in bindings {
        if controls.allows(command) && is_key_pressed(key) {
            dispatch(controller, command);
        }
    }
}

/// Dispatch the command of whichever enabled button was clicked
pub fn process_button_clicks<S: KeyValueStore>(
    controller: &mut Controller<S>,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) {
    if let Some(button) = buttons.iter().find(|b| b.is_clicked(mouse_pos)) {
        dispatch(controller, button.command());
    }
}
