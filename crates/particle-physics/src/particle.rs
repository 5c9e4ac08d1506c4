//! Spherical point-mass particle living inside the cube

use glam::Vec3;

use crate::constants::*;
use crate::error::PhysicsError;
use crate::kinematics::{Kinematics, WallContacts};
use crate::orientation::RotationTransform;

/// A sphere with position, velocity and a speed-derived display color.
///
/// Radius is only used for contact tests; there is no angular state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    radius: f32,
    /// RGB, derived from speed on every update. Not fed back into physics.
    pub color: [f32; 3],
}

impl Particle {
    /// Create a stationary particle.
    pub fn new(position: Vec3, radius: f32) -> Result<Self, PhysicsError> {
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(PhysicsError::NonPositiveRadius(radius));
        }
        if !position.is_finite() {
            return Err(PhysicsError::NonFinitePosition(position.to_array()));
        }

        Ok(Self {
            position,
            velocity: Vec3::ZERO,
            radius,
            color: INITIAL_COLOR,
        })
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }

    /// Advance one step with the reference constants.
    pub fn update(&mut self, delta_time: f32, rotation: &RotationTransform) {
        self.step(delta_time, rotation, &Kinematics::default());
    }

    /// Advance one step: gravity, position integration, wall contacts, color.
    ///
    /// Stored velocity is never rotated, only the gravity increment is.
    /// Returns the faces that were resolved. A non-positive `delta_time`
    /// leaves the particle untouched.
    pub fn step(
        &mut self,
        delta_time: f32,
        rotation: &RotationTransform,
        kinematics: &Kinematics,
    ) -> WallContacts {
        debug_assert!(delta_time.is_finite(), "non-finite delta time {delta_time}");
        if !(delta_time > 0.0) {
            return WallContacts::default();
        }

        self.velocity = kinematics.apply_gravity(self.velocity, delta_time, rotation);
        self.position += self.velocity * delta_time;

        let (position, velocity, contacts) =
            kinematics.resolve_walls(self.position, self.velocity, self.radius);
        self.position = position;
        self.velocity = velocity;

        self.color = speed_color(self.speed());
        contacts
    }
}

/// Blue at rest, fading to red as speed approaches [`COLOR_SPEED_SCALE`].
pub fn speed_color(speed: f32) -> [f32; 3] {
    let t = speed / COLOR_SPEED_SCALE;
    [t.min(1.0), 0.0, (1.0 - t).max(0.0)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics::Wall;
    use crate::orientation::Orientation;
    use glam::Mat3;

    #[test]
    fn test_new_particle_at_rest() {
        let p = Particle::new(Vec3::ZERO, PARTICLE_RADIUS).unwrap();
        assert_eq!(p.velocity, Vec3::ZERO);
        assert_eq!(p.radius(), 0.05);
        assert_eq!(p.color, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_rejects_bad_radius() {
        assert_eq!(
            Particle::new(Vec3::ZERO, 0.0),
            Err(PhysicsError::NonPositiveRadius(0.0))
        );
        assert!(Particle::new(Vec3::ZERO, -0.1).is_err());
        assert!(Particle::new(Vec3::ZERO, f32::NAN).is_err());
        assert!(Particle::new(Vec3::ZERO, f32::INFINITY).is_err());
    }

    #[test]
    fn test_rejects_non_finite_position() {
        assert!(matches!(
            Particle::new(Vec3::new(0.0, f32::NAN, 0.0), 0.05),
            Err(PhysicsError::NonFinitePosition(_))
        ));
    }

    #[test]
    fn test_update_integrates_gravity_then_position() {
        let mut p = Particle::new(Vec3::ZERO, 0.05).unwrap();
        p.update(0.1, &Mat3::IDENTITY);
        assert!((p.velocity.y - -0.18).abs() < 1e-6);
        // Semi-implicit: position uses the updated velocity
        assert!((p.position.y - -0.018).abs() < 1e-6);
        assert_eq!(p.position.x, 0.0);
        assert_eq!(p.position.z, 0.0);
    }

    #[test]
    fn test_update_does_not_rotate_stored_velocity() {
        let mut p = Particle::new(Vec3::ZERO, 0.05).unwrap();
        p.velocity = Vec3::new(1.0, 0.0, 0.0);
        let rotation = Orientation::new(0.0, 90.0).rotation();
        p.update(0.01, &rotation);
        // Yaw leaves gravity on -Y; an X velocity stays on X
        assert!((p.velocity.x - 1.0).abs() < 1e-6);
        assert!(p.velocity.z.abs() < 1e-6);
    }

    #[test]
    fn test_non_positive_delta_is_noop() {
        let mut p = Particle::new(Vec3::new(0.1, 0.2, 0.3), 0.05).unwrap();
        p.velocity = Vec3::new(1.0, -1.0, 0.5);
        let before = p;
        let contacts = p.step(0.0, &Mat3::IDENTITY, &Kinematics::default());
        assert!(contacts.is_empty());
        assert_eq!(p, before);
        p.update(-0.5, &Mat3::IDENTITY);
        assert_eq!(p, before);
    }

    #[test]
    fn test_update_resolves_floor() {
        let mut p = Particle::new(Vec3::new(0.0, -0.44, 0.0), 0.05).unwrap();
        p.velocity = Vec3::new(0.0, -2.0, 0.0);
        let contacts = p.step(0.1, &Mat3::IDENTITY, &Kinematics::default());
        assert!(contacts.contains(Wall::Bottom));
        assert_eq!(contacts.count(), 1);
        assert!((p.position.y - -0.45).abs() < 1e-4);
        assert!(p.velocity.y > 0.0);
    }

    #[test]
    fn test_settles_on_floor() {
        let mut p = Particle::new(Vec3::ZERO, 0.05).unwrap();
        for _ in 0..5000 {
            p.update(1.0 / 60.0, &Mat3::IDENTITY);
            assert!(p.position.y >= -0.45 - 1e-4);
        }
        assert!(p.speed() < 0.1);
    }

    #[test]
    fn test_resting_on_tilted_floor_stays_inside() {
        let mut p = Particle::new(Vec3::ZERO, 0.05).unwrap();
        let rotation = Orientation::new(20.0, 0.0).rotation();
        for _ in 0..3000 {
            p.update(1.0 / 60.0, &rotation);
            for axis in 0..3 {
                assert!(p.position[axis].abs() <= 0.45 + 1e-4, "{}", p.position);
            }
        }
        assert!((p.position.z - -0.45).abs() < 1e-4);
    }

    #[test]
    fn test_color_from_speed() {
        assert_eq!(speed_color(0.0), [0.0, 0.0, 1.0]);
        assert_eq!(speed_color(5.0), [0.5, 0.0, 0.5]);
        assert_eq!(speed_color(10.0), [1.0, 0.0, 0.0]);
        assert_eq!(speed_color(25.0), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_update_refreshes_color() {
        let mut p = Particle::new(Vec3::ZERO, 0.05).unwrap();
        p.velocity = Vec3::new(3.0, 0.0, 4.0);
        p.update(0.001, &Mat3::IDENTITY);
        let expected = speed_color(p.speed());
        assert_eq!(p.color, expected);
        assert!(p.color[0] > 0.49 && p.color[0] < 0.51);
        assert_eq!(p.color[1], 0.0);
    }
}
