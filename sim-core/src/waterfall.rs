use crate::config::Config;
use crate::particle::Particle;
use crate::phases;
use crate::surface::Surface;
use crate::types::ParticleId;
use glam::Vec2;
use rand::Rng;

/// Depth of the respawn strip below the band origin.
pub const SPAWN_DEPTH: f32 = 10.0;

/// Horizontal strip at the top of the surface where particles (re)enter
/// the stream.
#[derive(Clone, Copy, Debug)]
pub struct SpawnBand {
    pub origin: Vec2,
    pub width: f32,
}

impl SpawnBand {
    /// Band of `band_width` centered horizontally at the top edge.
    pub fn centered(surface_width: f32, band_width: f32) -> Self {
        Self {
            origin: Vec2::new(surface_width / 2.0 - band_width / 2.0, 0.0),
            width: band_width,
        }
    }

    /// Uniform point in the respawn strip: `x` across the band,
    /// `y` within [`SPAWN_DEPTH`] of the origin. Half-open on both axes.
    pub fn respawn_point(&self, rng: &mut impl Rng) -> Vec2 {
        Vec2::new(
            self.origin.x + rng.random_range(0.0..self.width),
            self.origin.y + rng.random_range(0.0..SPAWN_DEPTH),
        )
    }

    /// Uniform point in the full column under the band. First-generation
    /// particles seed the whole fall, not just the top strip.
    pub fn initial_point(&self, surface_height: f32, rng: &mut impl Rng) -> Vec2 {
        Vec2::new(
            self.origin.x + rng.random_range(0.0..self.width),
            self.origin.y + rng.random_range(0.0..surface_height),
        )
    }
}

#[derive(Debug)]
pub struct Waterfall {
    pub band: SpawnBand,
    waypoint: Vec2,
    pub particles: Vec<Particle>,
}

impl Waterfall {
    /// Builds a waterfall for a surface of `surface_size`, seeding
    /// `cfg.particle_count` particles over the full column and placing
    /// the waypoint at the default steering target.
    pub fn new(cfg: &Config, surface_size: Vec2, rng: &mut impl Rng) -> Self {
        let band = SpawnBand::centered(surface_size.x, cfg.band_width);
        let particles = (0..cfg.particle_count)
            .map(|_| {
                Particle::new(
                    band.initial_point(surface_size.y, rng),
                    cfg.particle_radius,
                    cfg.trail_len,
                )
            })
            .collect();

        Self {
            band,
            waypoint: Vec2::new(surface_size.x / 2.0, band.origin.y + 200.0),
            particles,
        }
    }

    /// Builds a waterfall from explicit parts. Useful for scripted setups.
    pub fn from_particles(band: SpawnBand, waypoint: Vec2, particles: Vec<Particle>) -> Self {
        Self {
            band,
            waypoint,
            particles,
        }
    }

    #[inline]
    pub fn waypoint(&self) -> Vec2 {
        self.waypoint
    }

    /// Moves the steering target. The only external mutation between ticks.
    pub fn set_waypoint(&mut self, waypoint: Vec2) {
        self.waypoint = waypoint;
    }

    /// Finds the other particle closest to `index` by squared distance.
    ///
    /// Strict `<` means the first particle in scan order wins ties.
    /// Returns `None` when no other particle exists.
    pub fn nearest_neighbor(&self, index: ParticleId) -> Option<(ParticleId, f32)> {
        let pos = self.particles[index].pos;
        let mut best = None;
        let mut best_d2 = f32::MAX;
        for (id, p) in self.particles.iter().enumerate() {
            if id == index {
                continue;
            }
            let d2 = (p.pos - pos).length_squared();
            if d2 < best_d2 {
                best_d2 = d2;
                best = Some(id);
            }
        }
        best.map(|id| (id, best_d2))
    }

    /// Advances the simulation by one step and redraws it onto `surface`.
    pub fn tick(&mut self, cfg: &Config, rng: &mut impl Rng, surface: &mut impl Surface) {
        surface.clear();
        phases::draw_waypoint(self, surface);
        let height = surface.height();
        phases::move_phase(self, cfg, height, rng);
        phases::draw_phase(self, surface);
    }

    /// Redraws the current state without advancing it. Immediate-mode
    /// canvases repaint every frame, including between ticks and while
    /// paused.
    pub fn render(&self, surface: &mut impl Surface) {
        surface.clear();
        phases::draw_waypoint(self, surface);
        phases::draw_phase(self, surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn particle_at(x: f32, y: f32) -> Particle {
        Particle::new(Vec2::new(x, y), 2.0, 5)
    }

    fn band() -> SpawnBand {
        SpawnBand::centered(800.0, 400.0)
    }

    #[test]
    fn centered_band_sits_at_the_top_middle() {
        let band = SpawnBand::centered(800.0, 400.0);
        assert_eq!(band.origin, Vec2::new(200.0, 0.0));
        assert_eq!(band.width, 400.0);
    }

    #[test]
    fn respawn_point_stays_inside_the_strip() {
        let band = SpawnBand {
            origin: Vec2::new(100.0, 0.0),
            width: 400.0,
        };
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let p = band.respawn_point(&mut rng);
            assert!(p.x >= 100.0 && p.x < 500.0);
            assert!(p.y >= 0.0 && p.y < SPAWN_DEPTH);
        }
    }

    #[test]
    fn initial_point_spans_the_full_column() {
        let band = SpawnBand {
            origin: Vec2::new(100.0, 0.0),
            width: 400.0,
        };
        let mut rng = StdRng::seed_from_u64(7);

        let mut deepest = 0.0f32;
        for _ in 0..200 {
            let p = band.initial_point(600.0, &mut rng);
            assert!(p.x >= 100.0 && p.x < 500.0);
            assert!(p.y >= 0.0 && p.y < 600.0);
            deepest = deepest.max(p.y);
        }
        // Seeding covers far more than the respawn strip.
        assert!(deepest > SPAWN_DEPTH);
    }

    #[test]
    fn new_seeds_count_band_and_waypoint() {
        let cfg = Config::default();
        let mut rng = StdRng::seed_from_u64(42);
        let w = Waterfall::new(&cfg, Vec2::new(800.0, 600.0), &mut rng);

        assert_eq!(w.particles.len(), cfg.particle_count);
        assert_eq!(w.band.origin, Vec2::new(200.0, 0.0));
        assert_eq!(w.waypoint(), Vec2::new(400.0, 200.0));
        for p in &w.particles {
            assert!(p.pos.x >= 200.0 && p.pos.x < 600.0);
            assert!(p.pos.y >= 0.0 && p.pos.y < 600.0);
            assert_eq!(p.vel, Vec2::ZERO);
        }
    }

    #[test]
    fn set_waypoint_moves_the_target() {
        let mut w = Waterfall::from_particles(band(), Vec2::ZERO, vec![particle_at(0.0, 0.0)]);
        w.set_waypoint(Vec2::new(123.0, 456.0));
        assert_eq!(w.waypoint(), Vec2::new(123.0, 456.0));
    }

    #[test]
    fn nearest_neighbor_is_mutual_for_a_pair() {
        let w = Waterfall::from_particles(
            band(),
            Vec2::ZERO,
            vec![particle_at(0.0, 0.0), particle_at(3.0, 4.0)],
        );

        assert_eq!(w.nearest_neighbor(0), Some((1, 25.0)));
        assert_eq!(w.nearest_neighbor(1), Some((0, 25.0)));
    }

    #[test]
    fn nearest_neighbor_never_returns_the_query_particle() {
        // Two particles on the same spot: the scan must still skip self.
        let w = Waterfall::from_particles(
            band(),
            Vec2::ZERO,
            vec![particle_at(5.0, 5.0), particle_at(5.0, 5.0)],
        );

        assert_eq!(w.nearest_neighbor(0), Some((1, 0.0)));
        assert_eq!(w.nearest_neighbor(1), Some((0, 0.0)));
    }

    #[test]
    fn nearest_neighbor_is_none_for_a_single_particle() {
        let w = Waterfall::from_particles(band(), Vec2::ZERO, vec![particle_at(0.0, 0.0)]);
        assert_eq!(w.nearest_neighbor(0), None);
    }

    #[test]
    fn nearest_neighbor_ties_go_to_scan_order() {
        let w = Waterfall::from_particles(
            band(),
            Vec2::ZERO,
            vec![
                particle_at(0.0, 0.0),
                particle_at(1.0, 0.0),
                particle_at(-1.0, 0.0),
            ],
        );

        assert_eq!(w.nearest_neighbor(0), Some((1, 1.0)));
    }
}
