use crate::core::{Button, Controller};

/// Model transforms that can be switched on and off, in composition order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformKind {
    Translation,
    Rotation,
    Scaling,
    Shearing,
    Reflection,
}

impl TransformKind {
    pub const ALL: [TransformKind; 5] = [
        TransformKind::Translation,
        TransformKind::Rotation,
        TransformKind::Scaling,
        TransformKind::Shearing,
        TransformKind::Reflection,
    ];

    /// Key that toggles this transform
    pub const fn key(self) -> Button {
        match self {
            TransformKind::Translation => Button::Digit1,
            TransformKind::Rotation => Button::Digit2,
            TransformKind::Scaling => Button::Digit3,
            TransformKind::Shearing => Button::Digit4,
            TransformKind::Reflection => Button::Digit5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TransformKind::Translation => "Translation",
            TransformKind::Rotation => "Rotation",
            TransformKind::Scaling => "Scaling",
            TransformKind::Shearing => "Shearing",
            TransformKind::Reflection => "Reflection",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Key that forces every toggle off while held
pub const RESET_KEY: Button = Button::Digit0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    pub kind: TransformKind,
    pub enabled: bool,
    /// Set while the key is held so a long press flips only once
    pub edge_guard: bool,
}

impl Toggle {
    const fn new(kind: TransformKind) -> Self {
        Self {
            kind,
            enabled: false,
            edge_guard: false,
        }
    }

    /// Feed the current physical key state; flips on the released -> pressed edge
    pub fn update(&mut self, key_down: bool) {
        if key_down {
            if !self.edge_guard {
                self.enabled = !self.enabled;
                self.edge_guard = true;
            }
        } else {
            self.edge_guard = false;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleSet {
    toggles: [Toggle; 5],
}

impl Default for ToggleSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ToggleSet {
    pub const fn new() -> Self {
        Self {
            toggles: [
                Toggle::new(TransformKind::Translation),
                Toggle::new(TransformKind::Rotation),
                Toggle::new(TransformKind::Scaling),
                Toggle::new(TransformKind::Shearing),
                Toggle::new(TransformKind::Reflection),
            ],
        }
    }

    /// Poll the toggle keys and the reset key for this frame
    pub fn process(&mut self, controller: &dyn Controller) {
        for toggle in &mut self.toggles {
            toggle.update(controller.is_down(toggle.kind.key()));
        }

        if controller.is_down(RESET_KEY) {
            self.reset();
        }
    }

    /// Clear every enabled flag. Guards keep tracking the physical keys.
    pub fn reset(&mut self) {
        for toggle in &mut self.toggles {
            toggle.enabled = false;
        }
    }

    pub fn is_enabled(&self, kind: TransformKind) -> bool {
        self.toggles[kind.index()].enabled
    }

    pub fn set_enabled(&mut self, kind: TransformKind, enabled: bool) {
        self.toggles[kind.index()].enabled = enabled;
    }

    pub fn get(&self, kind: TransformKind) -> &Toggle {
        &self.toggles[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toggle> {
        self.toggles.iter()
    }

    /// Enabled transforms in composition order
    pub fn enabled(&self) -> impl Iterator<Item = TransformKind> + '_ {
        self.toggles.iter().filter(|t| t.enabled).map(|t| t.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Keys(Vec<Button>);

    impl Controller for Keys {
        fn is_down(&self, button: Button) -> bool {
            self.0.contains(&button)
        }
    }

    #[test]
    fn toggles_start_disabled() {
        let set = ToggleSet::new();
        assert!(set.iter().all(|t| !t.enabled && !t.edge_guard));
        assert_eq!(set.enabled().count(), 0);
    }

    #[test]
    fn index_matches_kind() {
        let set = ToggleSet::new();
        for kind in TransformKind::ALL {
            assert_eq!(set.get(kind).kind, kind);
        }
    }

    #[test]
    fn held_key_flips_once() {
        let mut toggle = Toggle::new(TransformKind::Rotation);
        toggle.update(true);
        toggle.update(true);
        toggle.update(true);
        assert!(toggle.enabled);

        toggle.update(false);
        assert!(!toggle.edge_guard);
        toggle.update(true);
        assert!(!toggle.enabled);
    }

    #[test]
    fn keys_map_to_digits() {
        let keys: Vec<_> = TransformKind::ALL.iter().map(|k| k.key()).collect();
        assert_eq!(
            keys,
            vec![
                Button::Digit1,
                Button::Digit2,
                Button::Digit3,
                Button::Digit4,
                Button::Digit5
            ]
        );
    }

    #[test]
    fn process_toggles_only_pressed_kind() {
        let mut set = ToggleSet::new();
        set.process(&Keys(vec![Button::Digit3]));

        assert!(set.is_enabled(TransformKind::Scaling));
        assert_eq!(set.enabled().collect::<Vec<_>>(), vec![TransformKind::Scaling]);
    }

    #[test]
    fn reset_overrides_toggles() {
        let mut set = ToggleSet::new();
        set.process(&Keys(vec![Button::Digit1, Button::Digit2]));
        assert_eq!(set.enabled().count(), 2);

        set.process(&Keys(vec![Button::Digit0]));
        set.process(&Keys(vec![Button::Digit0]));
        assert_eq!(set.enabled().count(), 0);
        assert!(set.iter().all(|t| !t.edge_guard));
    }

    #[test]
    fn reset_keeps_guard_of_held_key() {
        let mut set = ToggleSet::new();
        set.process(&Keys(vec![Button::Digit1]));
        assert!(set.is_enabled(TransformKind::Translation));

        set.process(&Keys(vec![Button::Digit1, Button::Digit0]));
        assert!(!set.is_enabled(TransformKind::Translation));
        assert!(set.get(TransformKind::Translation).edge_guard);

        // 1 was never released, so letting go of 0 must not count as a new press
        set.process(&Keys(vec![Button::Digit1]));
        assert!(!set.is_enabled(TransformKind::Translation));

        set.process(&Keys(vec![]));
        set.process(&Keys(vec![Button::Digit1]));
        assert!(set.is_enabled(TransformKind::Translation));
    }

    #[test]
    fn enabled_iterates_in_composition_order() {
        let mut set = ToggleSet::new();
        set.set_enabled(TransformKind::Reflection, true);
        set.set_enabled(TransformKind::Translation, true);
        assert_eq!(
            set.enabled().collect::<Vec<_>>(),
            vec![TransformKind::Translation, TransformKind::Reflection]
        );
    }
}
