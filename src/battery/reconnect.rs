//! Peripheral reconnection detection from battery samples.
//!
//! The split link reports a level below 1% while a peripheral is gone.
//! A source that goes from "< 1%" (or never reported) to a real reading has
//! just come back, and the screen should wake once for it.

/// Stored level for a source that has not reported yet.
const NEVER_SEEN: i16 = -1;

/// What a source looked like before the sample that brought it back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PriorState {
    /// First report since boot.
    NeverSeen,
    /// Last report was below 1%.
    Disconnected,
}

/// A detected disconnected -> connected edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reconnection {
    pub source: usize,
    pub previous: PriorState,
    pub level: u8,
}

/// Last observed level per battery source.
#[derive(Clone, Debug)]
pub struct ReconnectTracker<const K: usize> {
    last_level: [i16; K],
}

impl<const K: usize> ReconnectTracker<K> {
    /// All sources start as never seen.
    pub const fn new() -> Self {
        Self {
            last_level: [NEVER_SEEN; K],
        }
    }

    /// Record a sample and report whether it is a reconnection.
    ///
    /// Out-of-range sources are ignored and leave the tracker unchanged.
    pub fn observe(&mut self, source: usize, level: u8) -> bool {
        self.observe_detailed(source, level).is_some()
    }

    /// Like [`observe`](Self::observe), also saying what the source was
    /// before.
    pub fn observe_detailed(&mut self, source: usize, level: u8) -> Option<Reconnection> {
        let slot = self.last_level.get_mut(source)?;
        let previous = *slot;
        *slot = i16::from(level);

        if previous < 1 && level >= 1 {
            Some(Reconnection {
                source,
                previous: if previous == NEVER_SEEN {
                    PriorState::NeverSeen
                } else {
                    PriorState::Disconnected
                },
                level,
            })
        } else {
            None
        }
    }

    /// Last level seen for `source`, `None` if never seen or out of range.
    pub fn last_level(&self, source: usize) -> Option<u8> {
        self.last_level
            .get(source)
            .and_then(|&l| u8::try_from(l).ok())
    }
}

impl<const K: usize> Default for ReconnectTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}
