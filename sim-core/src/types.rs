/// Identifier for a particle in a [`crate::waterfall::Waterfall`].
///
/// This is an index into `Waterfall::particles`, and is only meaningful
/// within the lifetime of a given `Waterfall` instance. Particles are
/// never removed from the collection, so ids stay stable.
pub type ParticleId = usize;
