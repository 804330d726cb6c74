use glam::Vec2;

#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Number of particles; fixed for the lifetime of a simulation.
    pub particle_count: usize,
    /// Width of the spawn band at the top of the surface.
    pub band_width: f32,
    /// Per-tick velocity increment applied to every particle.
    pub gravity: Vec2,
    /// Numerator of the inverse-square waypoint steering force.
    pub attraction: f32,
    /// Upper bound on the steering force magnitude.
    pub max_steer: f32,
    /// Number of past positions kept per particle.
    pub trail_len: usize,
    /// Draw radius of a particle.
    pub particle_radius: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            particle_count: 100,
            band_width: 400.0,
            gravity: Vec2::new(0.0, 0.1),
            attraction: 500.0,
            max_steer: 0.3,
            trail_len: 5,
            particle_radius: 2.0,
        }
    }
}
