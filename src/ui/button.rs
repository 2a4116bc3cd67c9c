use macroquad::prelude::*;

use crate::application::Command;

/// Push button bound to a controller command
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    command: Command,
    enabled: bool,
}

impl Button {
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        text: impl Into<String>,
        command: Command,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            command,
            enabled: true,
        }
    }

    /// Builder for the enabled flag
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub const fn command(&self) -> Command {
        self.command
    }

    /// Check if mouse is hovering over button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Draw button; disabled buttons are greyed out and ignore hover
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let (fill, label) = match (self.enabled, self.is_hovered(mouse_pos)) {
            (false, _) => (Color::from_rgba(60, 60, 60, 255), GRAY),
            (true, true) => (Color::from_rgba(100, 149, 237, 255), WHITE),
            (true, false) => (Color::from_rgba(70, 130, 180, 255), WHITE),
        };

        draw_rectangle(self.x, self.y, self.width, self.height, fill);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, label);

        let text_size = measure_text(&self.text, None, 20, 1.0);
        draw_text(
            &self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            label,
        );
    }

    /// Check if an enabled button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.enabled && self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
