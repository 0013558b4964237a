use egui::Key;

use crate::gfx::camera::Direction::{self, Negative, Positive};

use super::state::Action;

/// How a key event arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPhase {
    /// First down event of a key.
    Pressed,
    /// Auto-repeat while the key is held.
    Repeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub key: Key,
    pub phase: KeyPhase,
    pub action: Action,
}

/// Key table for the viewer.
///
/// Directional actions fire on repeat events only, so a single tap does
/// nothing; reset, shader toggle and exit fire on the initial press.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: Vec<Binding>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let held_keys: [(Key, fn(Direction) -> Action, Direction); 16] = [
            (Key::ArrowUp, Action::PitchModel, Positive),
            (Key::ArrowDown, Action::PitchModel, Negative),
            (Key::ArrowRight, Action::YawModel, Positive),
            (Key::ArrowLeft, Action::YawModel, Negative),
            (Key::Z, Action::RollModel, Positive),
            (Key::X, Action::RollModel, Negative),
            (Key::W, Action::Zoom, Positive),
            (Key::S, Action::Zoom, Negative),
            (Key::A, Action::YawCamera, Positive),
            (Key::D, Action::YawCamera, Negative),
            (Key::I, Action::PitchOrbitCenter, Positive),
            (Key::K, Action::PitchOrbitCenter, Negative),
            (Key::J, Action::YawOrbitCenter, Positive),
            (Key::L, Action::YawOrbitCenter, Negative),
            (Key::U, Action::RollOrbitCenter, Positive),
            (Key::O, Action::RollOrbitCenter, Negative),
        ];

        let mut bindings: Vec<Binding> = held_keys
            .into_iter()
            .map(|(key, action, direction)| Binding {
                key,
                phase: KeyPhase::Repeat,
                action: action(direction),
            })
            .collect();

        bindings.extend([
            Binding {
                key: Key::R,
                phase: KeyPhase::Pressed,
                action: Action::Reset,
            },
            Binding {
                key: Key::T,
                phase: KeyPhase::Pressed,
                action: Action::ToggleShader,
            },
            Binding {
                key: Key::Escape,
                phase: KeyPhase::Pressed,
                action: Action::Exit,
            },
        ]);

        Self { bindings }
    }
}

impl KeyBindings {
    pub fn lookup(&self, key: Key, phase: KeyPhase) -> Option<Action> {
        self.bindings
            .iter()
            .find(|b| b.key == key && b.phase == phase)
            .map(|b| b.action)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }

    /// Maps this frame's key-down events to actions, in arrival order.
    /// Releases are ignored.
    pub fn actions(&self, events: &[egui::Event]) -> Vec<Action> {
        events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat,
                    ..
                } => {
                    let phase = if *repeat {
                        KeyPhase::Repeat
                    } else {
                        KeyPhase::Pressed
                    };
                    self.lookup(*key, phase)
                }
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(key: Key, pressed: bool, repeat: bool) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn directional_keys_fire_on_repeat_only() {
        let keys = KeyBindings::default();
        assert_eq!(
            keys.lookup(Key::ArrowRight, KeyPhase::Repeat),
            Some(Action::YawModel(Positive))
        );
        assert_eq!(keys.lookup(Key::ArrowRight, KeyPhase::Pressed), None);
        assert_eq!(
            keys.lookup(Key::S, KeyPhase::Repeat),
            Some(Action::Zoom(Negative))
        );
    }

    #[test]
    fn command_keys_fire_on_press_only() {
        let keys = KeyBindings::default();
        assert_eq!(keys.lookup(Key::R, KeyPhase::Pressed), Some(Action::Reset));
        assert_eq!(keys.lookup(Key::R, KeyPhase::Repeat), None);
        assert_eq!(
            keys.lookup(Key::T, KeyPhase::Pressed),
            Some(Action::ToggleShader)
        );
        assert_eq!(keys.lookup(Key::Escape, KeyPhase::Pressed), Some(Action::Exit));
    }

    #[test]
    fn every_directional_action_has_both_signs() {
        let keys = KeyBindings::default();
        let repeats: Vec<Action> = keys
            .iter()
            .filter(|b| b.phase == KeyPhase::Repeat)
            .map(|b| b.action)
            .collect();
        assert_eq!(repeats.len(), 16);
        let sample: [fn(Direction) -> Action; 3] =
            [Action::PitchOrbitCenter, Action::RollModel, Action::YawCamera];
        for action in sample {
            assert!(repeats.contains(&action(Positive)));
            assert!(repeats.contains(&action(Negative)));
        }
    }

    #[test]
    fn events_translate_in_order() {
        let keys = KeyBindings::default();
        let events = [
            key_event(Key::W, true, false),
            key_event(Key::W, true, true),
            key_event(Key::W, false, false),
            egui::Event::Text("w".to_string()),
            key_event(Key::T, true, false),
            key_event(Key::Escape, true, false),
        ];
        assert_eq!(
            keys.actions(&events),
            vec![
                Action::Zoom(Positive),
                Action::ToggleShader,
                Action::Exit
            ]
        );
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let keys = KeyBindings::default();
        assert!(keys.actions(&[key_event(Key::Q, true, true)]).is_empty());
    }
}
