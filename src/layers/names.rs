//! Roller option text: layer names in display order, one per line.

use core::fmt::Write;

use super::order::LayerOrderMap;
use crate::config::LAYER_NAMES_BUFFER_LEN;
use crate::error::{Error, Result};
use heapless::String;

/// Newline-delimited layer names, top slot first.
pub type RollerText = String<LAYER_NAMES_BUFFER_LEN>;

/// Source of layer names, keyed by logical layer index.
pub trait LayerNames {
    /// Number of layers the keymap defines.
    fn layer_count(&self) -> usize;

    /// Name of a logical layer. `None` or `""` means unnamed.
    fn layer_name(&self, logical: usize) -> Option<&str>;
}

/// Names baked into the firmware image.
#[derive(Clone, Copy, Debug)]
pub struct StaticLayerNames(pub &'static [&'static str]);

impl LayerNames for StaticLayerNames {
    fn layer_count(&self) -> usize {
        self.0.len()
    }

    fn layer_name(&self, logical: usize) -> Option<&str> {
        self.0.get(logical).copied()
    }
}

impl LayerNames for [Option<&str>] {
    fn layer_count(&self) -> usize {
        self.len()
    }

    fn layer_name(&self, logical: usize) -> Option<&str> {
        self.get(logical).copied().flatten()
    }
}

/// Build the roller text for `order`.
///
/// Unnamed layers show their display-slot number. Line breaks inside a
/// name become spaces so every slot stays one line. Fails with
/// [`Error::BufferOverflow`] rather than truncating when the names do not
/// fit.
pub fn roller_text<N>(order: &LayerOrderMap, names: &N, all_caps: bool) -> Result<RollerText>
where
    N: LayerNames + ?Sized,
{
    let mut text = RollerText::new();

    for (slot, logical) in order.slots().enumerate() {
        if slot > 0 {
            text.push('\n').map_err(|_| Error::BufferOverflow)?;
        }

        let name = logical
            .and_then(|l| names.layer_name(l))
            .filter(|n| !n.is_empty());

        match name {
            Some(name) => {
                for c in name.chars() {
                    let c = match c {
                        '\n' | '\r' => ' ',
                        c if all_caps => c.to_ascii_uppercase(),
                        c => c,
                    };
                    text.push(c).map_err(|_| Error::BufferOverflow)?;
                }
            }
            None => write!(text, "{}", slot).map_err(|_| Error::BufferOverflow)?,
        }
    }

    Ok(text)
}
