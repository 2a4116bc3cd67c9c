use macroquad::prelude::*;

const ITEM_HEIGHT: f32 = 30.0;
const FONT_SIZE: f32 = 16.0;

/// Shorten `text` with an ellipsis until it fits in `max_width`
fn fit_text(text: &str, max_width: f32) -> String {
    if measure_text(text, None, FONT_SIZE as u16, 1.0).width <= max_width {
        return text.to_owned();
    }
    let mut truncated = text.to_owned();
    while !truncated.is_empty()
        && measure_text(&format!("{truncated}..."), None, FONT_SIZE as u16, 1.0).width > max_width
    {
        truncated.pop();
    }
    format!("{truncated}...")
}

/// Dropdown selector for grid sizes and patterns
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
    enabled: bool,
    label: String,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            items,
            selected: 0,
            is_open: false,
            enabled: true,
            label: label.into(),
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.items.get(self.selected).map(String::as_str)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Insert an entry before `index` (appended when past the end),
    /// keeping the current selection on the same entry
    pub fn insert_item(&mut self, index: usize, item: impl Into<String>) {
        let index = index.min(self.items.len());
        self.items.insert(index, item.into());
        if index <= self.selected && self.items.len() > 1 {
            self.selected += 1;
        }
    }

    /// Select an entry by index; out-of-range indices are ignored
    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    /// Select an entry by its text. Returns false if there is no such entry.
    pub fn select_item(&mut self, item: &str) -> bool {
        match self.items.iter().position(|i| i == item) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// A disabled dropdown closes and ignores clicks
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.is_open = false;
        }
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Draw without handling interaction
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let header_color = if !self.enabled {
            Color::from_rgba(60, 60, 60, 255)
        } else if self.is_hovered_header(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        draw_rectangle(self.x, self.y, self.width, ITEM_HEIGHT, header_color);
        draw_rectangle_lines(self.x, self.y, self.width, ITEM_HEIGHT, 2.0, WHITE);

        let text = fit_text(self.selected_item().unwrap_or(""), self.width - 30.0);
        let text_color = if self.enabled { WHITE } else { GRAY };
        draw_text(&text, self.x + 5.0, self.y + 21.0, FONT_SIZE, text_color);
        draw_text("v", self.x + self.width - 18.0, self.y + 21.0, 14.0, text_color);

        if !self.is_open {
            return;
        }

        let menu_height = self.items.len() as f32 * ITEM_HEIGHT;
        draw_rectangle(
            self.x,
            self.y + ITEM_HEIGHT,
            self.width,
            menu_height,
            Color::from_rgba(30, 30, 30, 255),
        );

        for (i, item) in self.items.iter().enumerate() {
            let item_y = self.item_y(i);
            let item_color = if self.is_hovered_item(mouse_pos, i) {
                Color::from_rgba(100, 149, 237, 255)
            } else if i == self.selected {
                Color::from_rgba(50, 100, 150, 255)
            } else {
                Color::from_rgba(45, 45, 45, 255)
            };

            draw_rectangle(self.x, item_y, self.width, ITEM_HEIGHT, item_color);
            draw_rectangle_lines(
                self.x,
                item_y,
                self.width,
                ITEM_HEIGHT,
                1.0,
                Color::from_rgba(80, 80, 80, 255),
            );
            draw_text(&fit_text(item, self.width - 10.0), self.x + 5.0, item_y + 21.0, FONT_SIZE, WHITE);
        }

        draw_rectangle_lines(self.x, self.y + ITEM_HEIGHT, self.width, menu_height, 2.0, WHITE);
    }

    /// Handle a left click at `mouse_pos`. Returns true if the selection changed.
    pub fn click(&mut self, mouse_pos: (f32, f32)) -> bool {
        if !self.enabled {
            return false;
        }

        if self.is_hovered_header(mouse_pos) {
            self.is_open = !self.is_open;
            return false;
        }

        if !self.is_open {
            return false;
        }

        // any click while open closes the menu
        self.is_open = false;
        match (0..self.items.len()).find(|&i| self.is_hovered_item(mouse_pos, i)) {
            Some(i) if i != self.selected => {
                self.selected = i;
                true
            }
            _ => false,
        }
    }

    fn item_y(&self, index: usize) -> f32 {
        self.y + ITEM_HEIGHT + index as f32 * ITEM_HEIGHT
    }

    fn is_hovered_header(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + ITEM_HEIGHT
    }

    fn is_hovered_item(&self, mouse_pos: (f32, f32), index: usize) -> bool {
        let item_y = self.item_y(index);
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= item_y
            && mouse_pos.1 <= item_y + ITEM_HEIGHT
    }
}
