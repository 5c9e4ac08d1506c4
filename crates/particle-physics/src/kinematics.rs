//! Gravity integration and wall collision against the bounding cube
//!
//! The cube's collision planes stay axis-aligned in world space. The cube's
//! orientation only redirects gravity, so "down" tracks what the viewer sees
//! while the walls themselves never move.

use glam::Vec3;

use crate::constants::*;
use crate::orientation::RotationTransform;

/// A face of the bounding cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Bottom,
    Top,
    NegX,
    PosX,
    PosZ,
    NegZ,
}

impl Wall {
    /// Faces tested after the floor, in order. Only the first one violated is
    /// resolved per call.
    pub const CHAIN: [Wall; 5] = [
        Wall::Top,
        Wall::NegX,
        Wall::PosX,
        Wall::PosZ,
        Wall::NegZ,
    ];

    /// Axis index (0 = x, 1 = y, 2 = z) the face is perpendicular to.
    pub fn axis(self) -> usize {
        match self {
            Wall::NegX | Wall::PosX => 0,
            Wall::Bottom | Wall::Top => 1,
            Wall::PosZ | Wall::NegZ => 2,
        }
    }
}

/// Faces resolved by one wall pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContacts {
    /// The floor was penetrated and clamped
    pub floor: bool,
    /// First face of [`Wall::CHAIN`] that was penetrated and clamped
    pub other: Option<Wall>,
}

impl WallContacts {
    pub fn count(&self) -> usize {
        usize::from(self.floor) + usize::from(self.other.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn contains(&self, wall: Wall) -> bool {
        match wall {
            Wall::Bottom => self.floor,
            wall => self.other == Some(wall),
        }
    }
}

/// Gravity and wall-response settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    /// Acceleration along local -Y before rotation (negative is down)
    pub gravity: f32,
    /// Fraction of normal velocity kept after a wall bounce, in [0, 1]
    pub restitution: f32,
    /// Inward bias applied when clamping against the top face
    pub top_bias: f32,
    /// Half-extent of the cube on every axis
    pub half_extent: f32,
}

impl Default for Kinematics {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            restitution: WALL_RESTITUTION,
            top_bias: TOP_WALL_BIAS,
            half_extent: CUBE_HALF_EXTENT,
        }
    }
}

impl Kinematics {
    /// Gravity vector after rotation into the cube's frame.
    pub fn rotated_gravity(&self, rotation: &RotationTransform) -> Vec3 {
        *rotation * Vec3::new(0.0, self.gravity, 0.0)
    }

    /// Add `rotated_gravity * delta_time` to `velocity`.
    pub fn apply_gravity(
        &self,
        velocity: Vec3,
        delta_time: f32,
        rotation: &RotationTransform,
    ) -> Vec3 {
        velocity + self.rotated_gravity(rotation) * delta_time
    }

    /// Whether a sphere at `position` strictly crosses `wall`. Touching is not
    /// a contact.
    pub fn penetrates(&self, wall: Wall, position: Vec3, radius: f32) -> bool {
        let value = position[wall.axis()];
        match wall {
            Wall::Bottom | Wall::NegX | Wall::NegZ => value - radius < -self.half_extent,
            Wall::Top | Wall::PosX | Wall::PosZ => value + radius > self.half_extent,
        }
    }

    /// Resolve wall contacts and return the new position and velocity.
    ///
    /// The floor is handled on its own, then at most one face of
    /// [`Wall::CHAIN`]. Two side walls hit at once get the second one
    /// resolved on a later call.
    pub fn handle_collision(&self, position: Vec3, velocity: Vec3, radius: f32) -> (Vec3, Vec3) {
        let (position, velocity, _) = self.resolve_walls(position, velocity, radius);
        (position, velocity)
    }

    /// Like [`Kinematics::handle_collision`] but reports which faces were hit.
    pub fn resolve_walls(
        &self,
        mut position: Vec3,
        mut velocity: Vec3,
        radius: f32,
    ) -> (Vec3, Vec3, WallContacts) {
        let mut contacts = WallContacts::default();

        if self.penetrates(Wall::Bottom, position, radius) {
            self.bounce(Wall::Bottom, &mut position, &mut velocity, radius);
            contacts.floor = true;
        }

        contacts.other = Wall::CHAIN
            .into_iter()
            .find(|&wall| self.penetrates(wall, position, radius));
        if let Some(wall) = contacts.other {
            self.bounce(wall, &mut position, &mut velocity, radius);
        }

        (position, velocity, contacts)
    }

    /// Clamp onto `wall` and reflect the normal velocity component.
    fn bounce(&self, wall: Wall, position: &mut Vec3, velocity: &mut Vec3, radius: f32) {
        let axis = wall.axis();
        position[axis] = match wall {
            Wall::Bottom | Wall::NegX | Wall::NegZ => -self.half_extent + radius,
            Wall::Top => self.half_extent - radius - self.top_bias,
            Wall::PosX | Wall::PosZ => self.half_extent - radius,
        };
        velocity[axis] = -velocity[axis] * self.restitution;

        log::trace!("wall contact {wall:?}: position={position}, velocity={velocity}");
    }
}

/// [`Kinematics::apply_gravity`] with reference constants.
pub fn apply_gravity(velocity: Vec3, delta_time: f32, rotation: &RotationTransform) -> Vec3 {
    Kinematics::default().apply_gravity(velocity, delta_time, rotation)
}

/// [`Kinematics::handle_collision`] with reference constants and the given restitution.
pub fn handle_collision(
    position: Vec3,
    velocity: Vec3,
    radius: f32,
    restitution: f32,
) -> (Vec3, Vec3) {
    Kinematics {
        restitution,
        ..Kinematics::default()
    }
    .handle_collision(position, velocity, radius)
}
