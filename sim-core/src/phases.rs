//! Per-tick passes of the waterfall simulation.
//!
//! A tick walks the stream in three passes:
//! 1. [`draw_waypoint`] — marker at the current steering target.
//! 2. [`move_phase`] — per particle: record history, apply gravity and
//!    waypoint steering, advance, respawn past the bottom edge.
//! 3. [`draw_phase`] — particles and their fading trails.
//!
//! Clearing the surface is the caller's job ([`Waterfall::tick`] issues
//! it before the first pass).

use crate::{
    config::Config,
    particle::Particle,
    surface::{Rgba, Surface},
    types::ParticleId,
    waterfall::{SpawnBand, Waterfall},
};
use glam::Vec2;
use rand::Rng;

/// Hue of the whole stream: particles, trails and the waypoint marker.
pub const STREAM_COLOR: Rgba = Rgba::opaque(0, 153, 255);

/// Radius of the waypoint marker.
pub const WAYPOINT_RADIUS: f32 = 5.0;

/// Draws the waypoint marker as a filled circle at full alpha.
pub fn draw_waypoint(w: &Waterfall, surface: &mut impl Surface) {
    surface.circle(w.waypoint(), WAYPOINT_RADIUS, STREAM_COLOR);
}

/// Advances every particle by one step.
///
/// For each particle, in index order:
///
/// 1. Runs [`Waterfall::nearest_neighbor`] for the particle.
/// 2. Hands the particle to [`move_particle`] together with the scan
///    result, the current waypoint and the spawn band.
///
/// The scan result is threaded through per particle; the motion law
/// ignores it (see [`move_particle`]).
///
/// ### Parameters
/// - `w` - The waterfall to advance; every particle is mutated.
/// - `cfg` - Global configuration, providing gravity, the steering
///   constants and the respawn parameters.
/// - `height` - Bottom edge of the surface; falling past it triggers a
///   respawn.
/// - `rng` - Randomness for respawn points.
pub fn move_phase(w: &mut Waterfall, cfg: &Config, height: f32, rng: &mut impl Rng) {
    let waypoint = w.waypoint();
    let band = w.band;

    for i in 0..w.particles.len() {
        let nearest = w.nearest_neighbor(i);
        move_particle(
            &mut w.particles[i],
            waypoint,
            nearest,
            cfg,
            band,
            height,
            rng,
        );
    }
}

/// Moves one particle through a single step.
///
/// 1. Records the current position into the trail.
/// 2. Adds `cfg.gravity` to the velocity.
/// 3. Steers relative to `waypoint` with an inverse-square force: with
///    `d2` the squared distance to the waypoint,
///    `strength = clamp(cfg.attraction / d2, 0, cfg.max_steer)`, and the
///    normalized direction toward the waypoint scaled by `strength` is
///    subtracted from the velocity. At `d2 == 0` the steering term is
///    zero.
/// 4. Advances the position by the velocity.
/// 5. Respawns the particle into `band` if it ends up below `height`.
///
/// ### Parameters
/// - `particle` - Particle to advance; mutated in place.
/// - `waypoint` - Current steering target.
/// - `_nearest` - Neighbor scan result from [`move_phase`]; the motion
///   law does not read it.
/// - `cfg` - Motion parameters.
/// - `band` - Where the particle re-enters the stream after falling out.
/// - `height` - Bottom edge of the surface.
/// - `rng` - Randomness for the respawn point.
pub fn move_particle(
    particle: &mut Particle,
    waypoint: Vec2,
    _nearest: Option<(ParticleId, f32)>,
    cfg: &Config,
    band: SpawnBand,
    height: f32,
    rng: &mut impl Rng,
) {
    particle.trail.record(particle.pos);

    particle.vel += cfg.gravity;

    // Inverse-square falloff, capped at max_steer.
    let toward = waypoint - particle.pos;
    let d2 = toward.length_squared();
    if d2 > 0.0 {
        let strength = (cfg.attraction / d2).clamp(0.0, cfg.max_steer);
        particle.vel -= toward.normalize_or_zero() * strength;
    }

    particle.pos += particle.vel;

    if particle.pos.y > height {
        particle.respawn_at(band.respawn_point(rng));
    }
}

/// Draws every in-bounds particle and its fading trail.
///
/// Particles below the bottom edge are skipped. Each drawn particle is a
/// filled circle at full alpha, followed by one segment per pair of
/// consecutive trail entries; the segment ending at the entry of age `i`
/// gets alpha `(K - i) / K` for a trail of length `K`.
///
/// ### Parameters
/// - `w` - The waterfall to draw; only read access is required.
/// - `surface` - Drawing surface receiving the circle and line calls.
pub fn draw_phase(w: &Waterfall, surface: &mut impl Surface) {
    let height = surface.height();

    for p in &w.particles {
        if p.pos.y > height {
            continue;
        }

        surface.circle(p.pos, p.radius, STREAM_COLOR);

        let k = p.trail.len();
        for (i, (a, b)) in p.trail.iter().zip(p.trail.iter().skip(1)).enumerate() {
            // Segment i ends at the entry of age i + 1.
            let age = i + 1;
            let alpha = (k - age) as f32 / k as f32;
            surface.line(a, b, STREAM_COLOR.with_alpha(alpha));
        }
    }
}
