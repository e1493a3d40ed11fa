//! Persistent screen settings.
//!
//! Uses the nRF52840's internal flash via `sequential-storage` so the
//! brightness chosen with the buttons survives a power cycle.
//!
//! Storage layout:
//!   - One key-value map over the reserved pages.
//!   - `KEY_BRIGHTNESS` holds the brightness percentage as a single byte.

use dongle_screen::brightness;
use dongle_screen::config::{
    BRIGHTNESS_DEFAULT, STORAGE_FLASH_PAGE_COUNT, STORAGE_FLASH_PAGE_START,
};
use dongle_screen::{Error, Result};
use defmt::{debug, error, info};
use embedded_storage_async::nor_flash::NorFlash;

/// Flash page size for nRF52840 (4 KB).
const FLASH_PAGE_SIZE: u32 = 4096;

/// Start address of our storage region.
const STORAGE_START: u32 = STORAGE_FLASH_PAGE_START * FLASH_PAGE_SIZE;

/// End address (exclusive) of our storage region.
const STORAGE_END: u32 = (STORAGE_FLASH_PAGE_START + STORAGE_FLASH_PAGE_COUNT) * FLASH_PAGE_SIZE;

/// Key for the brightness setting in the map storage.
const KEY_BRIGHTNESS: u8 = 0x01;

/// Scratch buffer for sequential-storage item (de)serialisation.
const SCRATCH_SIZE: usize = 32;

/// In-memory copy of the settings, synced with flash.
pub struct SettingsStore {
    brightness: u8,
    /// Dirty flag - true if the cache differs from flash.
    dirty: bool,
}

impl SettingsStore {
    /// Defaults, not yet loaded.
    pub const fn new() -> Self {
        Self {
            brightness: BRIGHTNESS_DEFAULT,
            dirty: false,
        }
    }

    /// Load settings from flash; missing or unreadable values keep the
    /// defaults.
    pub async fn load_from_flash(&mut self, flash: &mut impl NorFlash) {
        let mut buf = [0u8; SCRATCH_SIZE];

        match sequential_storage::map::fetch_item::<u8, u8, _>(
            flash,
            STORAGE_START..STORAGE_END,
            &mut sequential_storage::cache::NoCache::new(),
            &mut buf,
            &KEY_BRIGHTNESS,
        )
        .await
        {
            Ok(Some(value)) => {
                self.brightness = brightness::clamp(value);
                info!("Loaded brightness {}% from flash", self.brightness);
            }
            Ok(None) => {
                info!("No stored brightness - using {}%", BRIGHTNESS_DEFAULT);
            }
            Err(e) => {
                error!("Flash read error: {:?}", defmt::Debug2Format(&e));
            }
        }
        self.dirty = false;
    }

    /// Persist changed settings to flash.
    pub async fn save_to_flash(&mut self, flash: &mut impl NorFlash) -> Result<()> {
        if !self.dirty {
            debug!("SettingsStore: no changes to save");
            return Ok(());
        }

        let mut buf = [0u8; SCRATCH_SIZE];

        sequential_storage::map::store_item::<u8, u8, _>(
            flash,
            STORAGE_START..STORAGE_END,
            &mut sequential_storage::cache::NoCache::new(),
            &mut buf,
            &KEY_BRIGHTNESS,
            &self.brightness,
        )
        .await
        .map_err(|e| {
            error!("Flash write error: {:?}", defmt::Debug2Format(&e));
            Error::Storage
        })?;

        info!("Saved brightness {}% to flash", self.brightness);
        self.dirty = false;
        Ok(())
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn set_brightness(&mut self, percent: u8) {
        if self.brightness != percent {
            self.brightness = percent;
            self.dirty = true;
        }
    }
}
