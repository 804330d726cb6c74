use crate::trail::Trail;
use glam::Vec2;

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub trail: Trail,
}

impl Particle {
    pub fn new(pos: Vec2, radius: f32, trail_len: usize) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            trail: Trail::filled(pos, trail_len),
        }
    }

    /// Moves the particle back into the stream at `pos`, dropping all
    /// velocity and collapsing the trail so no segment bridges the jump.
    pub fn respawn_at(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
        self.trail.reset(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_at_rest_with_collapsed_trail() {
        let p = Particle::new(Vec2::new(10.0, 20.0), 2.0, 5);

        assert_eq!(p.pos, Vec2::new(10.0, 20.0));
        assert_eq!(p.vel, Vec2::ZERO);
        assert_eq!(p.radius, 2.0);
        assert_eq!(p.trail.len(), 5);
        for age in 0..5 {
            assert_eq!(p.trail.get(age), p.pos);
        }
    }

    #[test]
    fn respawn_clears_velocity_and_trail() {
        let mut p = Particle::new(Vec2::ZERO, 2.0, 3);
        p.vel = Vec2::new(1.0, 9.0);
        p.trail.record(Vec2::new(5.0, 5.0));

        let spawn = Vec2::new(120.0, 4.0);
        p.respawn_at(spawn);

        assert_eq!(p.pos, spawn);
        assert_eq!(p.vel, Vec2::ZERO);
        for age in 0..3 {
            assert_eq!(p.trail.get(age), spawn);
        }
    }
}
