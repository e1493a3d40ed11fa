//! Target-only pieces: SSD1306 driver glue, buttons, flash settings and the
//! screen task.

pub mod buttons;
pub mod display;
pub mod screen;
pub mod storage;
