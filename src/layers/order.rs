//! Logical layer index <-> roller display slot mapping.
//!
//! The base layer sits in the middle of the roller so it is the resting
//! selection. Odd layers stack upward from the centre and even layers
//! stack downward:
//!
//! ```text
//! count = 6, centre = 3
//!
//! slot:     0  1  2  3  4  5
//! logical:  5  3  1  0  2  4
//! ```

use crate::config::MAX_LAYERS;
use crate::error::{Error, Result};
use heapless::Vec;

/// Bijection between logical layers and display slots.
///
/// Positions the walk never reaches stay `None`; lookups on them return
/// `None` and callers skip the update.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerOrderMap {
    display_of: Vec<Option<u8>, MAX_LAYERS>,
    logical_of: Vec<Option<u8>, MAX_LAYERS>,
}

impl LayerOrderMap {
    /// Compute the centre-out zig-zag order for `count` layers.
    pub fn assign(count: usize) -> Result<Self> {
        if count == 0 {
            return Err(Error::NoLayers);
        }
        if count > MAX_LAYERS {
            return Err(Error::TooManyLayers(count));
        }

        let mut map = Self {
            display_of: Vec::new(),
            logical_of: Vec::new(),
        };
        // Capacity checked above.
        let _ = map.display_of.resize(count, None);
        let _ = map.logical_of.resize(count, None);

        let center = count / 2;
        map.place(0, center);

        // Upward: slots centre-1 ..= 0 take 1, 3, 5, ...
        for (logical, slot) in (1..count).step_by(2).zip((0..center).rev()) {
            map.place(logical, slot);
        }

        // Downward: slots centre+1 .. count take 2, 4, 6, ...
        for (logical, slot) in (2..count).step_by(2).zip(center + 1..count) {
            map.place(logical, slot);
        }

        Ok(map)
    }

    fn place(&mut self, logical: usize, slot: usize) {
        self.display_of[logical] = Some(slot as u8);
        self.logical_of[slot] = Some(logical as u8);
    }

    /// Number of layers (and slots). Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.display_of.len()
    }

    /// Slot holding the base layer.
    pub fn center(&self) -> usize {
        self.len() / 2
    }

    /// Display slot of a logical layer, `None` if out of range or unassigned.
    pub fn display_slot(&self, logical: usize) -> Option<usize> {
        self.display_of.get(logical).copied().flatten().map(usize::from)
    }

    /// Logical layer shown at a display slot, `None` if out of range or unassigned.
    pub fn logical_at(&self, slot: usize) -> Option<usize> {
        self.logical_of.get(slot).copied().flatten().map(usize::from)
    }

    /// Logical layer per slot, top to bottom.
    pub fn slots(&self) -> impl Iterator<Item = Option<usize>> + '_ {
        self.logical_of.iter().map(|l| l.map(usize::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logical_order(count: usize) -> std::vec::Vec<Option<usize>> {
        LayerOrderMap::assign(count).unwrap().slots().collect()
    }

    #[test]
    fn six_layers_zig_zag() {
        assert_eq!(
            logical_order(6),
            [Some(5), Some(3), Some(1), Some(0), Some(2), Some(4)]
        );
    }

    #[test]
    fn small_counts() {
        assert_eq!(logical_order(1), [Some(0)]);
        assert_eq!(logical_order(2), [Some(1), Some(0)]);
        assert_eq!(logical_order(3), [Some(1), Some(0), Some(2)]);
        assert_eq!(logical_order(4), [Some(3), Some(1), Some(0), Some(2)]);
        assert_eq!(
            logical_order(5),
            [Some(3), Some(1), Some(0), Some(2), Some(4)]
        );
    }

    #[test]
    fn every_count_is_a_bijection() {
        for count in 1..=MAX_LAYERS {
            let map = LayerOrderMap::assign(count).unwrap();
            let mut seen = [false; MAX_LAYERS];
            for slot in 0..count {
                let logical = map.logical_at(slot).expect("slot unassigned");
                assert!(!seen[logical], "logical {logical} placed twice");
                seen[logical] = true;
                assert_eq!(map.display_slot(logical), Some(slot));
            }
            assert!(seen[..count].iter().all(|&s| s));
        }
    }

    #[test]
    fn base_layer_is_centered() {
        for count in 1..=MAX_LAYERS {
            let map = LayerOrderMap::assign(count).unwrap();
            assert_eq!(map.display_slot(0), Some(count / 2));
            assert_eq!(map.center(), count / 2);
        }
    }

    #[test]
    fn odd_up_even_down() {
        for count in 1..=MAX_LAYERS {
            let map = LayerOrderMap::assign(count).unwrap();
            let center = count / 2;

            let mut expected = 1;
            for slot in (0..center).rev() {
                assert_eq!(map.logical_at(slot), Some(expected));
                expected += 2;
            }

            let mut expected = 2;
            for slot in center + 1..count {
                assert_eq!(map.logical_at(slot), Some(expected));
                expected += 2;
            }
        }
    }

    #[test]
    fn out_of_range_lookups_are_none() {
        let map = LayerOrderMap::assign(4).unwrap();
        assert_eq!(map.display_slot(4), None);
        assert_eq!(map.display_slot(200), None);
        assert_eq!(map.logical_at(4), None);
    }

    #[test]
    fn rejects_empty_and_oversized() {
        assert_eq!(LayerOrderMap::assign(0), Err(Error::NoLayers));
        assert_eq!(
            LayerOrderMap::assign(MAX_LAYERS + 1),
            Err(Error::TooManyLayers(MAX_LAYERS + 1))
        );
    }
}
