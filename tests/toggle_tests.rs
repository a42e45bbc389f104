use transform_cube::core::{Button, Controller};
use transform_cube::{AppState, ToggleSet, TransformKind};

struct Held(Vec<Button>);

impl Controller for Held {
    fn is_down(&self, button: Button) -> bool {
        self.0.contains(&button)
    }
}

fn none() -> Held {
    Held(vec![])
}

#[cfg(test)]
mod edge_trigger_tests {
    use super::*;

    #[test]
    fn test_holding_key_flips_once() {
        let mut toggles = ToggleSet::new();
        let held = Held(vec![Button::Digit2]);

        for _ in 0..30 {
            toggles.process(&held);
        }

        assert!(toggles.is_enabled(TransformKind::Rotation), "Held key should flip exactly once");
    }

    #[test]
    fn test_release_and_repress_flips_again() {
        let mut toggles = ToggleSet::new();
        let held = Held(vec![Button::Digit4]);

        toggles.process(&held);
        toggles.process(&held);
        assert!(toggles.is_enabled(TransformKind::Shearing));

        toggles.process(&none());
        toggles.process(&held);
        assert!(!toggles.is_enabled(TransformKind::Shearing));

        toggles.process(&none());
        toggles.process(&held);
        assert!(toggles.is_enabled(TransformKind::Shearing));
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut toggles = ToggleSet::new();
        toggles.process(&Held(vec![Button::Digit1, Button::Digit5]));
        toggles.process(&Held(vec![Button::Digit1, Button::Digit5, Button::Digit3]));

        assert!(toggles.is_enabled(TransformKind::Translation));
        assert!(!toggles.is_enabled(TransformKind::Rotation));
        assert!(toggles.is_enabled(TransformKind::Scaling));
        assert!(!toggles.is_enabled(TransformKind::Shearing));
        assert!(toggles.is_enabled(TransformKind::Reflection));
    }

    #[test]
    fn test_every_combination_is_reachable() {
        for mask in 0u32..32 {
            let mut toggles = ToggleSet::new();
            let keys: Vec<_> = TransformKind::ALL
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, kind)| kind.key())
                .collect();
            toggles.process(&Held(keys));

            for (i, kind) in TransformKind::ALL.iter().enumerate() {
                assert_eq!(toggles.is_enabled(*kind), mask & (1 << i) != 0);
            }
        }
    }
}

#[cfg(test)]
mod reset_tests {
    use super::*;

    #[test]
    fn test_reset_disables_everything() {
        let mut toggles = ToggleSet::new();
        toggles.process(&Held(vec![
            Button::Digit1,
            Button::Digit2,
            Button::Digit3,
            Button::Digit4,
            Button::Digit5,
        ]));
        assert_eq!(toggles.enabled().count(), 5);

        toggles.process(&Held(vec![Button::Digit0]));
        assert_eq!(toggles.enabled().count(), 0);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut toggles = ToggleSet::new();
        toggles.process(&Held(vec![Button::Digit2]));

        for _ in 0..5 {
            toggles.process(&Held(vec![Button::Digit0]));
            assert_eq!(toggles.enabled().count(), 0);
            assert!(toggles.iter().all(|t| !t.edge_guard));
        }
    }

    #[test]
    fn test_toggle_works_after_reset() {
        let mut toggles = ToggleSet::new();
        toggles.process(&Held(vec![Button::Digit3]));
        toggles.process(&Held(vec![Button::Digit0]));
        toggles.process(&none());
        toggles.process(&Held(vec![Button::Digit3]));
        assert!(toggles.is_enabled(TransformKind::Scaling));
    }

    #[test]
    fn test_app_state_routes_toggle_keys() {
        let mut state = AppState::new(800, 600);
        state.process_frame(&Held(vec![Button::Digit1]), 0.016);
        assert!(state.toggles.is_enabled(TransformKind::Translation));

        state.process_frame(&Held(vec![Button::Digit0]), 0.016);
        assert!(!state.toggles.is_enabled(TransformKind::Translation));
    }
}
