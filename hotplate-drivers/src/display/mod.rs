//! Display drivers

pub mod font;
pub mod ssd1306;

pub use ssd1306::Ssd1306;
