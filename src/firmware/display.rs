//! SSD1306 OLED rendering of the screen state.

use core::fmt::Write;

use dongle_screen::battery::{BatteryBand, BatteryBar};
use dongle_screen::brightness;
use dongle_screen::config::{BATTERY_BAR_MAX, BATTERY_BAR_MIN, LAYER_ROLLER_VISIBLE_ROWS};
use dongle_screen::gauge;
use dongle_screen::ui::ScreenState;
use dongle_screen::{Error, Result};
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10, FONT_9X18_BOLD};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

const WIDTH: i32 = 128;

const BATTERY_ROW_Y: i32 = 0;
const BATTERY_BAR_HEIGHT: u32 = 8;
const BATTERY_LABEL_WIDTH: i32 = 22;

const ROLLER_Y: i32 = 11;
const ROLLER_SMALL_ROW: i32 = 10;
const ROLLER_SELECTED_ROW: i32 = 18;

const BOTTOM_ROW_Y: i32 = 53;
const WPM_BAR_WIDTH: u32 = 48;
const LAMPS_X: i32 = 54;

/// Initialise the SSD1306 display, apply the brightness and clear the screen.
pub fn init<I2C>(i2c: I2C, brightness_percent: u8) -> Result<Display<I2C>>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| Error::Display)?;
    set_brightness(&mut display, brightness_percent)?;
    display.clear_buffer();
    display.flush().map_err(|_| Error::Display)?;
    Ok(display)
}

pub fn set_brightness<I2C>(display: &mut Display<I2C>, percent: u8) -> Result<()>
where
    I2C: embedded_hal::i2c::I2c,
{
    display
        .set_brightness(Brightness::custom(0x2, brightness::contrast(percent)))
        .map_err(|_| Error::Display)
}

pub fn set_power<I2C>(display: &mut Display<I2C>, on: bool) -> Result<()>
where
    I2C: embedded_hal::i2c::I2c,
{
    display.set_display_on(on).map_err(|_| Error::Display)
}

fn text_style(font: &'static MonoFont<'static>) -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(font)
        .text_color(BinaryColor::On)
        .build()
}

fn inverted_style(font: &'static MonoFont<'static>) -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(font)
        .text_color(BinaryColor::Off)
        .background_color(BinaryColor::On)
        .build()
}

/// Render the full screen for `state` at `now_ms`.
pub fn draw<I2C>(display: &mut Display<I2C>, state: &ScreenState, now_ms: u64) -> Result<()>
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    if let Some(percent) = state.overlay(now_ms) {
        draw_brightness_overlay(display, percent);
    } else {
        draw_batteries(display, state.batteries());
        draw_roller(display, state);
        draw_wpm(display, state);
        draw_indicators(display, state);
    }

    display.flush().map_err(|_| Error::Display)
}

fn draw_batteries<D>(display: &mut D, bars: &[BatteryBar])
where
    D: DrawTarget<Color = BinaryColor>,
{
    if bars.is_empty() {
        return;
    }
    let cell = WIDTH / bars.len() as i32;
    let bar_width = (cell - BATTERY_LABEL_WIDTH - 2).max(4) as u32;

    for (i, bar) in bars.iter().enumerate() {
        // Hidden until the first report.
        let Some(level) = bar.level else { continue };
        let x = i as i32 * cell;

        let outline = Rectangle::new(
            Point::new(x, BATTERY_ROW_Y),
            Size::new(bar_width, BATTERY_BAR_HEIGHT),
        );
        let _ = outline
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(display);

        let fill = gauge::fill_width(
            u32::from(level),
            u32::from(BATTERY_BAR_MIN),
            u32::from(BATTERY_BAR_MAX),
            bar_width,
        );
        if fill > 0 {
            let _ = Rectangle::new(
                Point::new(x, BATTERY_ROW_Y),
                Size::new(fill, BATTERY_BAR_HEIGHT),
            )
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(display);
        }

        let mut label: heapless::String<6> = heapless::String::new();
        if bar.usb_present {
            let _ = label.push('+');
        }
        let _ = write!(label, "{}", level);
        if bar.band() == Some(BatteryBand::Critical) {
            let _ = label.push('!');
        }
        let _ = Text::with_baseline(
            label.as_str(),
            Point::new(x + bar_width as i32 + 2, BATTERY_ROW_Y),
            text_style(&FONT_6X10),
            Baseline::Top,
        )
        .draw(display);
    }
}

fn draw_roller<D>(display: &mut D, state: &ScreenState)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let centered = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Top)
        .build();

    let mut y = ROLLER_Y;
    let middle = LAYER_ROLLER_VISIBLE_ROWS / 2;

    for (row, label) in state.roller().visible(LAYER_ROLLER_VISIBLE_ROWS).enumerate() {
        let selected = row == middle;
        let (font, height) = if selected {
            (&FONT_9X18_BOLD, ROLLER_SELECTED_ROW)
        } else {
            (&FONT_6X10, ROLLER_SMALL_ROW)
        };

        if let Some(label) = label {
            let _ = Text::with_text_style(
                label,
                Point::new(WIDTH / 2, y),
                text_style(font),
                centered,
            )
            .draw(display);
        }
        y += height;
    }
}

fn draw_wpm<D>(display: &mut D, state: &ScreenState)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let wpm = state.wpm();
    if !wpm.is_shown() {
        return;
    }

    let _ = Rectangle::new(Point::new(0, BOTTOM_ROW_Y), Size::new(WPM_BAR_WIDTH, 8))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(display);

    let fill = wpm.fill(WPM_BAR_WIDTH);
    if fill > 0 {
        let _ = Rectangle::new(Point::new(0, BOTTOM_ROW_Y), Size::new(fill, 8))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(display);
    }
}

fn draw_indicators<D>(display: &mut D, state: &ScreenState)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let mut x = LAMPS_X;
    for lamp in state.indicators().lamps() {
        let style = if lamp.active {
            inverted_style(&FONT_6X10)
        } else {
            text_style(&FONT_6X10)
        };
        let next = Text::with_baseline(lamp.label, Point::new(x, BOTTOM_ROW_Y), style, Baseline::Top)
            .draw(display)
            .unwrap_or(Point::new(x + 6 * lamp.label.len() as i32, BOTTOM_ROW_Y));
        x = next.x + 3;
    }
}

fn draw_brightness_overlay<D>(display: &mut D, percent: u8)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let centered = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();

    let _ = Text::with_text_style(
        brightness::label(percent).as_str(),
        Point::new(WIDTH / 2, 32),
        text_style(&FONT_10X20),
        centered,
    )
    .draw(display);
}
