use macroquad::prelude::*;

const TRACK_HEIGHT: f32 = 6.0;
const KNOB_RADIUS: f32 = 8.0;

/// Horizontal slider over an integer range, dragged with the left button
#[derive(Clone)]
pub struct Slider {
    x: f32,
    y: f32,
    width: f32,
    min: u32,
    max: u32,
    value: u32,
    dragging: bool,
}

impl Slider {
    pub fn new(x: f32, y: f32, width: f32, min: u32, max: u32, value: u32) -> Self {
        Self {
            x,
            y,
            width,
            min,
            max,
            value: value.clamp(min, max),
            dragging: false,
        }
    }

    pub const fn value(&self) -> u32 {
        self.value
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn knob_x(&self) -> f32 {
        let span = (self.max - self.min).max(1) as f32;
        self.x + (self.value - self.min) as f32 / span * self.width
    }

    fn value_at(&self, mouse_x: f32) -> u32 {
        let t = ((mouse_x - self.x) / self.width).clamp(0.0, 1.0);
        self.min + (t * (self.max - self.min) as f32).round() as u32
    }

    fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x - KNOB_RADIUS
            && mouse_pos.0 <= self.x + self.width + KNOB_RADIUS
            && (mouse_pos.1 - self.y).abs() <= KNOB_RADIUS
    }

    /// Track drags. Returns true if the value changed this frame.
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if is_mouse_button_pressed(MouseButton::Left) && self.is_hovered(mouse_pos) {
            self.dragging = true;
        }
        if !is_mouse_button_down(MouseButton::Left) {
            self.dragging = false;
        }
        if !self.dragging {
            return false;
        }

        let value = self.value_at(mouse_pos.0);
        let changed = value != self.value;
        self.value = value;
        changed
    }

    pub fn draw(&self) {
        draw_rectangle(
            self.x,
            self.y - TRACK_HEIGHT / 2.0,
            self.width,
            TRACK_HEIGHT,
            Color::from_rgba(60, 60, 60, 255),
        );
        draw_rectangle(
            self.x,
            self.y - TRACK_HEIGHT / 2.0,
            self.knob_x() - self.x,
            TRACK_HEIGHT,
            Color::from_rgba(70, 130, 180, 255),
        );
        draw_circle(self.knob_x(), self.y, KNOB_RADIUS, Color::from_rgba(100, 149, 237, 255));
    }
}
