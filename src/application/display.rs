use super::controller::Command;

/// Generation number as shown to the user.
/// Moves forward with the simulation and only goes back when told about a reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationDisplay {
    shown: u64,
}

impl GenerationDisplay {
    pub const fn value(&self) -> u64 {
        self.shown
    }

    /// Show `generation` if it is ahead of what is displayed
    pub fn observe(&mut self, generation: u64) {
        if generation > self.shown {
            self.shown = generation;
        }
    }

    /// Explicit reset (clear, randomize, new grid, restore)
    pub fn reset_to(&mut self, generation: u64) {
        self.shown = generation;
    }
}

/// How long a status message stays on screen
pub const STATUS_SECONDS: f32 = 1.2;

/// Transient feedback for save and restore, shown in the panel
#[derive(Clone, Debug, PartialEq)]
pub struct StatusMessage {
    text: String,
    remaining: f32,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            remaining: STATUS_SECONDS,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Count down by `delta_seconds`. Returns true once the message has expired.
    pub fn expire(&mut self, delta_seconds: f32) -> bool {
        self.remaining -= delta_seconds.max(0.0);
        self.remaining <= 0.0
    }
}

/// Which controls accept input, derived from the running flag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlStates {
    pub start: bool,
    pub stop: bool,
    pub step: bool,
    pub clear: bool,
    pub randomize: bool,
    pub save: bool,
    pub restore: bool,
    pub grid_size: bool,
    pub pattern: bool,
    pub speed: bool,
}

impl ControlStates {
    pub const fn for_running(running: bool) -> Self {
        let idle = !running;
        Self {
            start: idle,
            stop: running,
            step: idle,
            clear: idle,
            randomize: idle,
            save: idle,
            restore: idle,
            grid_size: idle,
            pattern: idle,
            speed: true,
        }
    }

    /// Whether a command's button is enabled
    pub const fn allows(&self, command: Command) -> bool {
        match command {
            Command::Start => self.start,
            Command::Stop => self.stop,
            Command::Step => self.step,
            Command::Clear => self.clear,
            Command::Randomize => self.randomize,
            Command::Save => self.save,
            Command::Restore => self.restore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_monotonic() {
        let mut display = GenerationDisplay::default();
        display.observe(3);
        display.observe(1);
        assert_eq!(display.value(), 3);

        display.reset_to(0);
        assert_eq!(display.value(), 0);
        display.observe(1);
        assert_eq!(display.value(), 1);
    }

    #[test]
    fn test_status_message_expires() {
        let mut status = StatusMessage::new("State saved!");
        assert_eq!(status.text(), "State saved!");
        assert!(!status.expire(1.0));
        assert!(!status.expire(-5.0));
        assert!(status.expire(0.5));
    }

    #[test]
    fn test_controls_while_running() {
        let running = ControlStates::for_running(true);
        assert!(running.stop && running.speed);
        assert!(!running.start && !running.step && !running.clear && !running.save);

        let idle = ControlStates::for_running(false);
        assert!(idle.start && idle.step && idle.restore && idle.pattern);
        assert!(!idle.stop);
        assert!(idle.allows(Command::Restore));
        assert!(!idle.allows(Command::Stop));
    }
}
