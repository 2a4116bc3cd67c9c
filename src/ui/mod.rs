mod button;
mod dropdown;
mod layout;
mod slider;

pub use button::Button;
pub use dropdown::Dropdown;
pub use layout::BoardLayout;
pub use slider::Slider;

// UI constants - functions where the layout follows the window size
use macroquad::prelude::{screen_height, screen_width};

use crate::application::{Command, ControlStates};

pub const PANEL_WIDTH: f32 = 180.0;
pub const SIZE_DROPDOWN_Y: f32 = 20.0;
pub const PATTERN_DROPDOWN_Y: f32 = 70.0;
pub const BUTTON_HEIGHT: f32 = 34.0;
const BUTTON_SPACING: f32 = 42.0;
const BUTTONS_TOP: f32 = 200.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Layout of the board in the current window for a `rows x cols` grid
pub fn board_layout(rows: usize, cols: usize) -> BoardLayout {
    BoardLayout::fit(grid_area_width(), grid_area_height(), rows, cols)
}

/// Preset square grid sizes
pub const GRID_SIZES: [usize; 5] = [20, 40, 60, 80, 100];

pub fn grid_size_label(size: usize) -> String {
    format!("{size}×{size}")
}

/// Grid size named by a size dropdown entry
pub fn grid_size_from_label(label: &str) -> Option<usize> {
    label.split_once('×')?.0.parse().ok()
}

/// Show `size` in the size dropdown. Sizes outside the presets get an
/// entry of their own, kept in ascending order.
pub fn select_grid_size(dropdown: &mut Dropdown, size: usize) {
    let label = grid_size_label(size);
    if dropdown.select_item(&label) {
        return;
    }
    let index = dropdown
        .items()
        .iter()
        .position(|item| grid_size_from_label(item).is_some_and(|s| s > size))
        .unwrap_or(dropdown.items().len());
    dropdown.insert_item(index, label);
    dropdown.set_selected(index);
}

/// Route one frame's left click through the dropdowns. An open menu gets
/// the click first and swallows it, so nothing underneath reacts too; the
/// other menus close. Returns the index of the dropdown whose selection
/// changed.
pub fn update_dropdowns(
    dropdowns: &mut [&mut Dropdown],
    mouse_pos: (f32, f32),
    clicked: bool,
) -> Option<usize> {
    if !clicked {
        return None;
    }

    let mut order: Vec<usize> = (0..dropdowns.len()).collect();
    order.sort_by_key(|&i| !dropdowns[i].is_open());

    for i in order {
        let was_open = dropdowns[i].is_open();
        let changed = dropdowns[i].click(mouse_pos);
        if was_open || dropdowns[i].is_open() {
            for (j, other) in dropdowns.iter_mut().enumerate() {
                if j != i {
                    other.close();
                }
            }
            return changed.then_some(i);
        }
    }
    None
}

/// Y position of the speed slider, below the buttons
pub fn slider_y() -> f32 {
    BUTTONS_TOP + BUTTON_SPACING * BUTTON_LABELS.len() as f32 + 30.0
}

const BUTTON_LABELS: [(&str, Command); 7] = [
    ("Start", Command::Start),
    ("Stop", Command::Stop),
    ("Step", Command::Step),
    ("Clear", Command::Clear),
    ("Random", Command::Randomize),
    ("Save", Command::Save),
    ("Restore", Command::Restore),
];

/// Create the command buttons, greyed out where the controls say so
pub fn create_buttons(controls: &ControlStates) -> Vec<Button> {
    let px = panel_x();
    BUTTON_LABELS
        .iter()
        .enumerate()
        .map(|(i, &(label, command))| {
            Button::new(
                px,
                BUTTONS_TOP + i as f32 * BUTTON_SPACING,
                PANEL_WIDTH,
                BUTTON_HEIGHT,
                label,
                command,
            )
            .enabled(controls.allows(command))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menus() -> (Dropdown, Dropdown) {
        let sizes = GRID_SIZES.iter().map(|&s| grid_size_label(s)).collect();
        let patterns = vec!["Glider".to_owned(), "Block".to_owned(), "Toad".to_owned()];
        (
            Dropdown::new(0.0, SIZE_DROPDOWN_Y, PANEL_WIDTH, "Grid Size", sizes),
            Dropdown::new(0.0, PATTERN_DROPDOWN_Y, PANEL_WIDTH, "Pattern", patterns),
        )
    }

    #[test]
    fn test_size_entry_over_pattern_header() {
        let (mut size, mut pattern) = menus();
        assert_eq!(update_dropdowns(&mut [&mut size, &mut pattern], (10.0, 30.0), true), None);
        assert!(size.is_open());

        // the 40x40 entry covers the pattern header
        assert_eq!(update_dropdowns(&mut [&mut size, &mut pattern], (10.0, 90.0), true), Some(0));
        assert_eq!(size.selected_item(), Some("40×40"));
        assert!(!size.is_open());
        assert!(!pattern.is_open());
        assert_eq!(pattern.selected_item(), Some("Glider"));
    }

    #[test]
    fn test_click_outside_open_menu_only_closes_it() {
        let (mut size, mut pattern) = menus();
        update_dropdowns(&mut [&mut size, &mut pattern], (10.0, 85.0), true);
        assert!(pattern.is_open());

        assert_eq!(update_dropdowns(&mut [&mut size, &mut pattern], (10.0, 30.0), true), None);
        assert!(!pattern.is_open());
        assert!(!size.is_open());

        assert_eq!(update_dropdowns(&mut [&mut size, &mut pattern], (10.0, 85.0), true), None);
        assert_eq!(update_dropdowns(&mut [&mut size, &mut pattern], (10.0, 145.0), true), Some(1));
        assert_eq!(pattern.selected_item(), Some("Block"));
    }

    #[test]
    fn test_no_click_and_disabled_menus() {
        let (mut size, mut pattern) = menus();
        assert_eq!(update_dropdowns(&mut [&mut size, &mut pattern], (10.0, 30.0), false), None);
        assert!(!size.is_open());

        size.set_enabled(false);
        assert_eq!(update_dropdowns(&mut [&mut size, &mut pattern], (10.0, 30.0), true), None);
        assert!(!size.is_open());
    }

    #[test]
    fn test_grid_size_labels() {
        assert_eq!(grid_size_label(60), "60×60");
        assert_eq!(grid_size_from_label("100×100"), Some(100));
        assert_eq!(grid_size_from_label("Glider"), None);
    }

    #[test]
    fn test_select_grid_size_adds_missing_sizes_in_order() {
        let (mut size, _) = menus();
        select_grid_size(&mut size, 60);
        assert_eq!(size.selected_item(), Some("60×60"));
        assert_eq!(size.items().len(), GRID_SIZES.len());

        select_grid_size(&mut size, 50);
        select_grid_size(&mut size, 50);
        assert_eq!(size.selected_item(), Some("50×50"));
        assert_eq!(size.selected(), 2);

        select_grid_size(&mut size, 12);
        select_grid_size(&mut size, 500);
        let sizes: Vec<_> = size.items().iter().filter_map(|l| grid_size_from_label(l)).collect();
        assert_eq!(sizes, vec![12, 20, 40, 50, 60, 80, 100, 500]);
        assert_eq!(size.selected_item(), Some("500×500"));
    }
}
