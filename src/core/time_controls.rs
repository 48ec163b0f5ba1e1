//! Keyboard control over virtual time.
//!
//! The rain advances by `Time<Virtual>` deltas, so scaling or pausing virtual
//! time scales or freezes the fall without touching the pool.

use bevy::prelude::*;

use crate::core::constants::hotkeys;

/// Selectable playback rates, slowest first
pub const SPEED_STEPS: [f32; 5] = [0.25, 0.5, 1.0, 2.0, 4.0];
const NORMAL_STEP: usize = 2;

pub struct TimeControlPlugin;

impl Plugin for TimeControlPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TimeControlSettings>()
            .add_systems(Update, time_control_input_system);
    }
}

/// Index into `SPEED_STEPS`
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeControlSettings {
    step: usize,
}

impl Default for TimeControlSettings {
    fn default() -> Self {
        Self { step: NORMAL_STEP }
    }
}

/// What a key press asks of virtual time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeCommand {
    Faster,
    Slower,
    Reset,
    TogglePause,
}

impl TimeCommand {
    fn from_input(input: &ButtonInput<KeyCode>) -> Vec<Self> {
        let mut commands = Vec::new();
        if input.any_just_pressed([hotkeys::SPEED_UP, hotkeys::SPEED_UP_ALT]) {
            commands.push(Self::Faster);
        }
        if input.any_just_pressed([hotkeys::SLOW_DOWN, hotkeys::SLOW_DOWN_ALT]) {
            commands.push(Self::Slower);
        }
        if input.just_pressed(hotkeys::RESET_SPEED) {
            commands.push(Self::Reset);
        }
        if input.just_pressed(hotkeys::TOGGLE_PAUSE) {
            commands.push(Self::TogglePause);
        }
        commands
    }
}

impl TimeControlSettings {
    pub fn speed(&self) -> f32 {
        SPEED_STEPS[self.step]
    }

    /// Move `steps` entries along `SPEED_STEPS`, stopping at either end
    pub fn shift(&mut self, steps: isize) -> f32 {
        let last = SPEED_STEPS.len() as isize - 1;
        self.step = (self.step as isize + steps).clamp(0, last) as usize;
        self.speed()
    }

    pub fn reset(&mut self) -> f32 {
        self.step = NORMAL_STEP;
        self.speed()
    }

    pub fn label(&self) -> String {
        match self.speed() {
            s if s == 1.0 => "Normal".to_string(),
            s if s < 1.0 => format!("{:.2}x Slow", s),
            s => format!("{}x Fast", s),
        }
    }
}

pub fn time_control_input_system(
    mut settings: ResMut<TimeControlSettings>,
    mut time: ResMut<Time<Virtual>>,
    keyboard_input: Res<ButtonInput<KeyCode>>,
) {
    for command in TimeCommand::from_input(&keyboard_input) {
        let speed = match command {
            TimeCommand::Faster => settings.shift(1),
            TimeCommand::Slower => settings.shift(-1),
            TimeCommand::Reset => settings.reset(),
            TimeCommand::TogglePause => {
                if time.is_paused() {
                    time.unpause();
                    info!("Rain resumed");
                } else {
                    time.pause();
                    info!("Rain paused");
                }
                continue;
            }
        };
        time.set_relative_speed(speed);
        info!("Rain speed: {}", settings.label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_app() -> App {
        let mut app = App::new();
        app.init_resource::<TimeControlSettings>()
            .init_resource::<Time<Virtual>>()
            .init_resource::<ButtonInput<KeyCode>>()
            .add_systems(Update, time_control_input_system);
        app
    }

    #[test]
    fn test_shift_clamps_at_ends() {
        let mut settings = TimeControlSettings::default();
        assert_eq!(settings.shift(1), 2.0);
        assert_eq!(settings.shift(5), 4.0);
        assert_eq!(settings.reset(), 1.0);
        assert_eq!(settings.shift(-1), 0.5);
        assert_eq!(settings.shift(-10), 0.25);
    }

    #[test]
    fn test_label() {
        let mut settings = TimeControlSettings::default();
        assert_eq!(settings.label(), "Normal");
        settings.shift(1);
        assert_eq!(settings.label(), "2x Fast");
        settings.shift(-2);
        assert_eq!(settings.label(), "0.50x Slow");
    }

    #[test]
    fn test_space_toggles_pause() {
        let mut app = input_app();

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(hotkeys::TOGGLE_PAUSE);
        app.update();
        assert!(app.world().resource::<Time<Virtual>>().is_paused());

        {
            let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            input.release(hotkeys::TOGGLE_PAUSE);
            input.clear();
            input.press(hotkeys::TOGGLE_PAUSE);
        }
        app.update();
        assert!(!app.world().resource::<Time<Virtual>>().is_paused());
    }

    #[test]
    fn test_speed_up_key_scales_virtual_time() {
        let mut app = input_app();

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(hotkeys::SPEED_UP);
        app.update();

        assert_eq!(app.world().resource::<Time<Virtual>>().relative_speed(), 2.0);
    }
}
