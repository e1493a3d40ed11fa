//! Layer roller - the active layer's name, centred between its neighbours.
//!
//! The order map and the option text are built once at start-up from the
//! keymap's layer names. Layer-change events only move the selection.

pub mod names;
pub mod order;

pub use names::{roller_text, LayerNames, RollerText, StaticLayerNames};
pub use order::LayerOrderMap;

use crate::error::Result;

/// Roller contents plus the currently selected slot.
#[derive(Clone, Debug)]
pub struct LayerRoller {
    order: LayerOrderMap,
    text: RollerText,
    selected: usize,
}

impl LayerRoller {
    /// Build the roller with the base layer selected.
    pub fn new<N>(names: &N, all_caps: bool) -> Result<Self>
    where
        N: LayerNames + ?Sized,
    {
        let order = LayerOrderMap::assign(names.layer_count())?;
        let text = roller_text(&order, names, all_caps)?;
        let selected = order.center();
        Ok(Self {
            order,
            text,
            selected,
        })
    }

    /// Roller for a keymap whose names could not be laid out: one numbered
    /// row per layer.
    pub fn numbered(count: usize) -> Result<Self> {
        let unnamed: [Option<&str>; 0] = [];
        let order = LayerOrderMap::assign(count)?;
        let text = roller_text(&order, &unnamed[..], false)?;
        let selected = order.center();
        Ok(Self {
            order,
            text,
            selected,
        })
    }

    /// Select the slot showing `logical`.
    ///
    /// Returns the new slot when the selection moved. Unknown layers leave
    /// the roller untouched.
    pub fn select(&mut self, logical: usize) -> Option<usize> {
        let slot = self.order.display_slot(logical)?;
        if slot == self.selected {
            return None;
        }
        self.selected = slot;
        Some(slot)
    }

    /// Currently selected display slot.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn order(&self) -> &LayerOrderMap {
        &self.order
    }

    /// Full option text, one name per slot.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Label of a display slot.
    pub fn label(&self, slot: usize) -> Option<&str> {
        self.text.as_str().split('\n').nth(slot)
    }

    /// Labels of the `rows` rows centred on the selection; rows past either
    /// end of the list are `None`.
    pub fn visible(&self, rows: usize) -> impl Iterator<Item = Option<&str>> + '_ {
        let half = rows / 2;
        (0..rows).map(move |row| {
            (self.selected + row)
                .checked_sub(half)
                .and_then(|slot| self.label(slot))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: StaticLayerNames = StaticLayerNames(&["Base", "Nav", "Sym", "Num", "Fun", "Game"]);

    #[test]
    fn starts_on_base_layer() {
        let roller = LayerRoller::new(&NAMES, false).unwrap();
        assert_eq!(roller.selected(), 3);
        assert_eq!(roller.label(roller.selected()), Some("Base"));
    }

    #[test]
    fn select_moves_to_display_slot() {
        let mut roller = LayerRoller::new(&NAMES, false).unwrap();
        assert_eq!(roller.select(1), Some(2));
        assert_eq!(roller.label(roller.selected()), Some("Nav"));
        assert_eq!(roller.select(4), Some(5));
        assert_eq!(roller.label(roller.selected()), Some("Fun"));
    }

    #[test]
    fn reselecting_same_layer_is_noop() {
        let mut roller = LayerRoller::new(&NAMES, false).unwrap();
        assert_eq!(roller.select(0), None);
        assert_eq!(roller.select(2), Some(4));
        assert_eq!(roller.select(2), None);
    }

    #[test]
    fn unknown_layer_is_ignored() {
        let mut roller = LayerRoller::new(&NAMES, false).unwrap();
        roller.select(2);
        assert_eq!(roller.select(6), None);
        assert_eq!(roller.select(255), None);
        assert_eq!(roller.selected(), 4);
    }

    #[test]
    fn visible_rows_around_selection() {
        let mut roller = LayerRoller::new(&NAMES, false).unwrap();
        let rows: std::vec::Vec<_> = roller.visible(3).collect();
        assert_eq!(rows, [Some("Nav"), Some("Base"), Some("Sym")]);

        // Top of the list: nothing above "Game".
        roller.select(5);
        let rows: std::vec::Vec<_> = roller.visible(3).collect();
        assert_eq!(rows, [None, Some("Game"), Some("Num")]);
    }

    #[test]
    fn multi_line_name_does_not_shift_labels() {
        let names = StaticLayerNames(&["Base", "Nav\nAlt", "Sym"]);
        let roller = LayerRoller::new(&names, false).unwrap();
        assert_eq!(roller.selected(), 1);
        assert_eq!(roller.label(roller.selected()), Some("Base"));
        let rows: std::vec::Vec<_> = roller.visible(3).collect();
        assert_eq!(rows, [Some("Nav Alt"), Some("Base"), Some("Sym")]);
    }

    #[test]
    fn numbered_fallback() {
        let roller = LayerRoller::numbered(3).unwrap();
        assert_eq!(roller.text(), "0\n1\n2");
        assert_eq!(roller.selected(), 1);
    }
}
