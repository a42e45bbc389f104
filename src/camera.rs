use glam::{Mat4, Vec3};

pub const CAMERA_SPEED: f32 = 2.5;
pub const LOOK_SENSITIVITY: f32 = 0.1;
pub const PITCH_LIMIT: f32 = 89.0;

pub const FOV_Y_DEGREES: f32 = 45.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 3.0);
const DEFAULT_YAW: f32 = -90.0;

/// Free-fly camera. Angles are kept in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    front: Vec3,
    up: Vec3,
    yaw: f32,
    pitch: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    pub fn new() -> Self {
        Self {
            position: DEFAULT_POSITION,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            yaw: DEFAULT_YAW,
            pitch: 0.0,
        }
    }

    /// Unit facing vector for the given yaw/pitch in degrees
    pub fn facing_from(yaw: f32, pitch: f32) -> Vec3 {
        let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());
        Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize()
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.front.cross(self.up).normalize()
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn move_forward(&mut self, delta_time: f32) {
        self.position += self.front * CAMERA_SPEED * delta_time;
    }

    pub fn move_backward(&mut self, delta_time: f32) {
        self.position -= self.front * CAMERA_SPEED * delta_time;
    }

    pub fn move_left(&mut self, delta_time: f32) {
        self.position -= self.right() * CAMERA_SPEED * delta_time;
    }

    pub fn move_right(&mut self, delta_time: f32) {
        self.position += self.right() * CAMERA_SPEED * delta_time;
    }

    /// Apply a raw pointer delta in window coordinates (y grows downward).
    /// Moving the pointer up raises the pitch.
    pub fn apply_look_delta(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * LOOK_SENSITIVITY;
        self.pitch = (self.pitch - dy * LOOK_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.front = Self::facing_from(self.yaw, self.pitch);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Perspective projection with wgpu's 0..1 depth range
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), aspect, Z_NEAR, Z_FAR)
    }
}

/// Last observed pointer position, used to turn absolute samples into deltas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerTracking {
    last_x: f32,
    last_y: f32,
    first_sample: bool,
}

impl PointerTracking {
    /// Start tracking from the given position (normally the window centre)
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            last_x: x,
            last_y: y,
            first_sample: true,
        }
    }

    /// Record a sample and return the offset from the previous one.
    /// The first sample after a reset only seeds the position.
    pub fn sample(&mut self, x: f32, y: f32) -> (f32, f32) {
        if self.first_sample {
            self.last_x = x;
            self.last_y = y;
            self.first_sample = false;
        }

        let offset = (x - self.last_x, y - self.last_y);
        self.last_x = x;
        self.last_y = y;
        offset
    }

    pub fn reset(&mut self) {
        self.first_sample = true;
    }

    pub fn is_first_sample(&self) -> bool {
        self.first_sample
    }
}
