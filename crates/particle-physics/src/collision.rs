//! Pairwise particle-particle contact
//!
//! Equal masses are assumed. The velocity response uses an impulse along the
//! contact normal, then both spheres are pushed apart by half the overlap so
//! they end the call exactly touching.

use crate::constants::PAIR_RESTITUTION;
use crate::particle::Particle;

/// What [`resolve_collision`] did with a pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PairOutcome {
    /// Impulse and de-penetration applied
    Resolved { impulse: f32, overlap: f32 },
    /// Relative velocity already points apart; nothing changed
    Separating,
    /// Centers coincide, so the normal is undefined; nothing changed
    Coincident,
}

/// True when the spheres overlap. Touching exactly is not a collision.
pub fn check_collision(a: &Particle, b: &Particle) -> bool {
    let radius_sum = a.radius() + b.radius();
    a.position.distance_squared(b.position) < radius_sum * radius_sum
}

/// Resolve a contact with the reference pair restitution.
pub fn resolve_collision(a: &mut Particle, b: &mut Particle) -> PairOutcome {
    resolve_collision_with(a, b, PAIR_RESTITUTION)
}

/// Resolve a contact between `a` and `b`, mutating both.
///
/// A pair whose relative normal velocity is exactly zero is still treated as
/// colliding and gets the positional correction.
pub fn resolve_collision_with(a: &mut Particle, b: &mut Particle, restitution: f32) -> PairOutcome {
    let separation = a.position - b.position;
    let distance = separation.length();
    if distance == 0.0 {
        return PairOutcome::Coincident;
    }

    // Points from b towards a
    let normal = separation / distance;

    let relative_velocity = a.velocity - b.velocity;
    let dot = relative_velocity.dot(normal);
    if dot > 0.0 {
        return PairOutcome::Separating;
    }

    let impulse = -(1.0 + restitution) * dot / 2.0;
    a.velocity += impulse * normal;
    b.velocity -= impulse * normal;

    let overlap = 0.5 * (a.radius() + b.radius() - distance);
    a.position += overlap * normal;
    b.position -= overlap * normal;

    log::trace!("pair contact: impulse={impulse}, overlap={overlap}");
    PairOutcome::Resolved { impulse, overlap }
}

/// Check and resolve every pair once. Returns the number of resolved contacts.
///
/// O(n²) over the slice.
pub fn resolve_all(particles: &mut [Particle], restitution: f32) -> usize {
    let mut resolved = 0;
    for i in 0..particles.len() {
        let (head, tail) = particles.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if !check_collision(a, b) {
                continue;
            }
            if let PairOutcome::Resolved { .. } = resolve_collision_with(a, b, restitution) {
                resolved += 1;
            }
        }
    }
    resolved
}
