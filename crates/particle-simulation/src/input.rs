//! Drag-to-rotate input model
//!
//! Window events are captured elsewhere and forwarded here as plain cursor
//! coordinates; this only turns them into accumulated cube angles.

use particle_physics::Orientation;

/// Supplies the cube orientation for the next frame.
pub trait InputSource {
    fn orientation(&mut self) -> Orientation;
}

/// Accumulates pitch/yaw from left-button drags.
#[derive(Debug, Clone)]
pub struct DragRotation {
    orientation: Orientation,
    /// Degrees per pixel of cursor travel
    sensitivity: f32,
    /// Last cursor position while the button is held
    anchor: Option<(f64, f64)>,
}

impl DragRotation {
    pub fn new(sensitivity: f32) -> Self {
        Self {
            orientation: Orientation::default(),
            sensitivity,
            anchor: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Button pressed at the given cursor position.
    pub fn press(&mut self, x: f64, y: f64) {
        self.anchor = Some((x, y));
    }

    pub fn release(&mut self) {
        self.anchor = None;
    }

    /// Cursor moved. Only rotates while a drag is active.
    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        let Some((last_x, last_y)) = self.anchor else {
            return;
        };

        let dx = (x - last_x) as f32;
        let dy = (y - last_y) as f32;
        self.orientation.yaw_degrees += dx * self.sensitivity;
        self.orientation.pitch_degrees += dy * self.sensitivity;
        self.anchor = Some((x, y));
    }

    pub fn current(&self) -> Orientation {
        self.orientation
    }
}

impl InputSource for DragRotation {
    fn orientation(&mut self) -> Orientation {
        self.orientation
    }
}

/// Fixed orientation, e.g. for headless runs.
impl InputSource for Orientation {
    fn orientation(&mut self) -> Orientation {
        *self
    }
}
