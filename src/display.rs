//! SSD1306 128×64 monochrome OLED over I2C.

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::Rectangle,
};
use esp_hal::{
    Blocking,
    i2c::master::{
        Config,
        I2c,
    },
    time::Rate,
};
use ssd1306::{
    I2CDisplayInterface,
    Ssd1306,
    mode::BufferedGraphicsMode,
    prelude::*,
};
use tictactoe_core::render::Screen;

use crate::DisplayResources;

type Oled<'a> =
    Ssd1306<I2CInterface<I2c<'a, Blocking>>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

type OledError<'a> = <Oled<'a> as DrawTarget>::Error;

/// The board's OLED, ready to draw on with `embedded-graphics`.
///
/// Drawing goes to an in-RAM frame; [`Screen::flush`] sends it over I2C.
pub struct Display<'a> {
    oled: Oled<'a>,
}

impl<'a> From<DisplayResources<'a>> for Display<'a> {
    fn from(res: DisplayResources<'a>) -> Self {
        let i2c = I2c::new(res.i2c, Config::default().with_frequency(Rate::from_khz(400)))
            .unwrap()
            .with_sda(res.sda)
            .with_scl(res.scl);

        // Default address 0x3C.
        let interface = I2CDisplayInterface::new(i2c);
        let mut oled = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        oled.init().unwrap();

        Self { oled }
    }
}

impl OriginDimensions for Display<'_> {
    fn size(&self) -> Size {
        OriginDimensions::size(&self.oled)
    }
}

impl<'a> DrawTarget for Display<'a> {
    type Color = BinaryColor;
    type Error = OledError<'a>;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        DrawTarget::draw_iter(&mut self.oled, pixels)
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        DrawTarget::fill_solid(&mut self.oled, area, color)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        DrawTarget::clear(&mut self.oled, color)
    }
}

impl Screen for Display<'_> {
    fn flush(&mut self) -> Result<(), Self::Error> {
        self.oled.flush()
    }
}
