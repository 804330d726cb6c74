use glam::Vec2;

/// A fixed-length ring buffer of a particle's most recent positions.
///
/// For each particle, the trail stores:
///
/// - The last `len` positions the particle occupied, newest first.
/// - A head index marking where the most recent entry lives.
///
/// This allows you to record one position per step in O(1) without
/// shifting, and later walk the history from newest to oldest for
/// fading rendering.
///
/// Internally, entry `age` lives at `points[(head + age) % len]`, so
/// `age == 0` is the most recent position and `age == len - 1` the
/// oldest one still kept.
#[derive(Clone, Debug)]
pub struct Trail {
    /// Ring storage of past positions.
    points: Vec<Vec2>,
    /// Index of the most recent entry in `points`.
    head: usize,
}

impl Trail {
    /// Creates a new [`Trail`] with every entry set to `pos`.
    ///
    /// A freshly spawned particle has no history yet; filling the ring
    /// with its spawn position makes every fade segment degenerate
    /// (zero length) instead of pointing at stale coordinates.
    ///
    /// ### Parameters
    /// - `pos` - Position to fill the ring with.
    /// - `len` - Number of past positions to keep.
    ///
    /// ### Returns
    /// A new [`Trail`] of length `len` collapsed onto `pos`.
    pub fn filled(pos: Vec2, len: usize) -> Self {
        Self {
            points: vec![pos; len],
            head: 0,
        }
    }

    /// Returns the number of positions this trail keeps.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the trail keeps no history at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Records `pos` as the newest entry, evicting the oldest one.
    ///
    /// The head index steps backwards through the ring and the evicted
    /// slot is overwritten in place, so no entries are moved.
    ///
    /// A zero-length trail has nowhere to write; recording onto it is
    /// a no-op.
    ///
    /// ### Parameters
    /// - `pos` - Position to record.
    pub fn record(&mut self, pos: Vec2) {
        let len = self.points.len();
        if len == 0 {
            return;
        }
        self.head = (self.head + len - 1) % len;
        self.points[self.head] = pos;
    }

    /// Collapses the entire history onto `pos`.
    ///
    /// Used when a particle respawns: its previous positions belong to
    /// the old fall and must not be drawn as segments stretching across
    /// the surface.
    ///
    /// ### Parameters
    /// - `pos` - Position to collapse the ring onto.
    pub fn reset(&mut self, pos: Vec2) {
        for p in &mut self.points {
            *p = pos;
        }
    }

    /// Returns the recorded position `age` steps in the past.
    ///
    /// ### Parameters
    /// - `age` - How many records ago; `0` is the most recent entry.
    ///
    /// ### Returns
    /// The position recorded `age` steps ago.
    ///
    /// ### Panics
    /// Panics if `age >= len()` or if the trail is empty.
    #[inline]
    pub fn get(&self, age: usize) -> Vec2 {
        let len = self.points.len();
        self.points[(self.head + age) % len]
    }

    /// Returns an iterator over the history from newest to oldest.
    ///
    /// ### Returns
    /// An iterator yielding `len()` positions, starting at age `0`.
    pub fn iter<'a>(&'a self) -> impl Iterator<Item = Vec2> + 'a {
        (0..self.points.len()).map(move |age| self.get(age))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn filled_collapses_every_entry_onto_pos() {
        let pos = Vec2::new(3.0, 4.0);
        let trail = Trail::filled(pos, 5);

        assert_eq!(trail.len(), 5);
        for age in 0..5 {
            assert_eq!(trail.get(age), pos);
        }
    }

    #[test]
    fn record_yields_newest_first_order() {
        let mut trail = Trail::filled(Vec2::ZERO, 3);
        trail.record(Vec2::new(1.0, 0.0));
        trail.record(Vec2::new(2.0, 0.0));

        assert_eq!(trail.get(0), Vec2::new(2.0, 0.0));
        assert_eq!(trail.get(1), Vec2::new(1.0, 0.0));
        assert_eq!(trail.get(2), Vec2::ZERO);
    }

    #[test]
    fn record_wraps_and_evicts_the_oldest_entry() {
        let mut trail = Trail::filled(Vec2::ZERO, 3);
        for i in 1..=5 {
            trail.record(Vec2::new(i as f32, 0.0));
        }

        // Only the last three records survive.
        assert_eq!(trail.get(0), Vec2::new(5.0, 0.0));
        assert_eq!(trail.get(1), Vec2::new(4.0, 0.0));
        assert_eq!(trail.get(2), Vec2::new(3.0, 0.0));
    }

    #[test]
    fn len_is_fixed_across_records() {
        let mut trail = Trail::filled(Vec2::ZERO, 4);
        for i in 0..10 {
            trail.record(Vec2::new(i as f32, i as f32));
            assert_eq!(trail.len(), 4);
        }
    }

    #[test]
    fn iter_matches_get_order() {
        let mut trail = Trail::filled(Vec2::ZERO, 3);
        trail.record(Vec2::new(1.0, 1.0));
        trail.record(Vec2::new(2.0, 2.0));

        let collected: Vec<Vec2> = trail.iter().collect();
        assert_eq!(
            collected,
            vec![Vec2::new(2.0, 2.0), Vec2::new(1.0, 1.0), Vec2::ZERO]
        );
    }

    #[test]
    fn reset_collapses_history_onto_new_pos() {
        let mut trail = Trail::filled(Vec2::ZERO, 3);
        trail.record(Vec2::new(1.0, 0.0));
        trail.record(Vec2::new(2.0, 0.0));

        let spawn = Vec2::new(7.0, 8.0);
        trail.reset(spawn);

        for age in 0..3 {
            assert_eq!(trail.get(age), spawn);
        }
    }

    #[test]
    fn empty_trail_is_inert() {
        let mut trail = Trail::filled(Vec2::ZERO, 0);
        assert!(trail.is_empty());
        assert_eq!(trail.len(), 0);

        // Recording onto a zero-length trail must not panic.
        trail.record(Vec2::new(1.0, 1.0));
        assert!(trail.iter().next().is_none());
    }
}
