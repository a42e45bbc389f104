use crate::camera::{Camera, PointerTracking};
use crate::core::{Button, Controller, InputEvent};
use crate::toggles::ToggleSet;
use crate::transform::{compose_model, FrameMatrices};

/// Cursor behaviour the window layer should switch to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMode {
    /// Hidden and locked to the window while looking around
    Locked,
    Normal,
}

/// Everything the input handlers and the frame loop mutate
#[derive(Debug, Clone)]
pub struct AppState {
    pub camera: Camera,
    pub pointer: PointerTracking,
    pub toggles: ToggleSet,
    look_active: bool,
}

impl AppState {
    /// Fresh state for a window of the given size; pointer tracking starts at its centre
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            camera: Camera::new(),
            pointer: PointerTracking::new(width as f32 / 2.0, height as f32 / 2.0),
            toggles: ToggleSet::new(),
            look_active: false,
        }
    }

    pub fn look_active(&self) -> bool {
        self.look_active
    }

    /// Pointer input. Returns a cursor change when look mode starts or stops.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<CursorMode> {
        match event {
            InputEvent::PointerButton {
                button: Button::MouseLeft,
                pressed: true,
            } => {
                self.look_active = true;
                Some(CursorMode::Locked)
            }
            InputEvent::PointerButton {
                button: Button::MouseLeft,
                pressed: false,
            } => {
                self.look_active = false;
                self.pointer.reset();
                Some(CursorMode::Normal)
            }
            InputEvent::PointerButton { .. } => None,
            InputEvent::PointerMoved { x, y } => {
                if self.look_active {
                    let (dx, dy) = self.pointer.sample(x, y);
                    self.camera.apply_look_delta(dx, dy);
                }
                None
            }
        }
    }

    /// Poll held keys once per frame: continuous movement plus edge-triggered toggles
    pub fn process_frame(&mut self, keys: &dyn Controller, delta_time: f32) {
        if keys.is_down(Button::KeyW) {
            self.camera.move_forward(delta_time);
        }
        if keys.is_down(Button::KeyS) {
            self.camera.move_backward(delta_time);
        }
        if keys.is_down(Button::KeyA) {
            self.camera.move_left(delta_time);
        }
        if keys.is_down(Button::KeyD) {
            self.camera.move_right(delta_time);
        }

        self.toggles.process(keys);
    }

    pub fn frame_matrices(&self, aspect: f32, time: f32) -> FrameMatrices {
        FrameMatrices {
            model: compose_model(&self.toggles, time),
            view: self.camera.view_matrix(),
            projection: self.camera.projection_matrix(aspect),
        }
    }
}
