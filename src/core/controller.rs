/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    MouseLeft,
}

/// Discrete pointer input, delivered synchronously into the app state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer position in window coordinates (y grows downward)
    PointerMoved { x: f32, y: f32 },
    /// Pointer button transition
    PointerButton { button: Button, pressed: bool },
}

/// Controller - polled physical button states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;
}
