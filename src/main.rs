//! dongle-screen firmware for nRF52840.
//!
//! Boot order: load settings from flash, build the layer roller, bring up
//! the SSD1306, then hand everything to the screen task. Keyboard-side code
//! feeds the screen through `dongle_screen::bus::publish`.

#![no_std]
#![no_main]

mod firmware;

use defmt::{error, info};
use dongle_screen::bus;
use dongle_screen::config::{LAYER_NAMES, LAYER_ROLLER_ALL_CAPS, MAX_LAYERS};
use dongle_screen::layers::{LayerRoller, StaticLayerNames};
use dongle_screen::ui::{ButtonEvent, ScreenState};
use embassy_embedded_hal::adapter::BlockingAsync;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{AnyPin, Pin};
use embassy_nrf::nvmc::Nvmc;
use embassy_nrf::{bind_interrupts, peripherals, twim};
use embassy_time::Instant;
use firmware::display::Display;
use firmware::storage::SettingsStore;
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

type I2c = twim::Twim<'static, peripherals::TWISPI0>;
type Flash = BlockingAsync<Nvmc<'static>>;

#[embassy_executor::task]
async fn screen_task(
    display: Display<I2c>,
    state: ScreenState,
    settings: SettingsStore,
    flash: Flash,
) {
    firmware::screen::run(display, state, settings, flash).await
}

#[embassy_executor::task(pool_size = 2)]
async fn button_task(pin: AnyPin, event: ButtonEvent) {
    firmware::buttons::button_task(pin, event, bus::BUTTONS.sender()).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("dongle-screen starting");

    let mut flash = BlockingAsync::new(Nvmc::new(p.NVMC));
    let mut settings = SettingsStore::new();
    settings.load_from_flash(&mut flash).await;

    let roller = LayerRoller::new(&StaticLayerNames(LAYER_NAMES), LAYER_ROLLER_ALL_CAPS)
        .or_else(|e| {
            error!("Layer names unusable ({:?}) - numbering layers instead", e);
            LayerRoller::numbered(LAYER_NAMES.len().clamp(1, MAX_LAYERS))
        });
    let roller = defmt::unwrap!(roller);
    info!("Layer roller: {} layers", roller.order().len());

    let mut config = twim::Config::default();
    config.frequency = twim::Frequency::K400;
    let i2c = twim::Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, config);

    let display = match firmware::display::init(i2c, settings.brightness()) {
        Ok(display) => display,
        Err(e) => {
            // Publishers keep running; `bus::publish` warns once and then drops quietly.
            error!("Display init failed: {:?} - running without screen", e);
            return;
        }
    };

    let state = ScreenState::new(roller, settings.brightness(), Instant::now().as_millis());

    spawner.must_spawn(button_task(p.P0_11.degrade(), ButtonEvent::BrightnessUp));
    spawner.must_spawn(button_task(p.P0_12.degrade(), ButtonEvent::BrightnessDown));
    spawner.must_spawn(screen_task(display, state, settings, flash));
}
