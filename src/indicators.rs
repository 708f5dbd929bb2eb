//! Outcome indicator lamps: blue (X wins), green (O wins), red (draw and
//! invalid-move flash).

use esp_hal::gpio::{
    Level,
    Output,
    OutputConfig,
};
use tictactoe_core::Indicator;

use crate::IndicatorResources;

/// The three discrete indicator LEDs. All start off.
pub struct Indicators {
    blue: Output<'static>,
    green: Output<'static>,
    red: Output<'static>,
}

impl From<IndicatorResources<'static>> for Indicators {
    fn from(res: IndicatorResources<'static>) -> Self {
        Self {
            blue: Output::new(res.blue, Level::Low, OutputConfig::default()),
            green: Output::new(res.green, Level::Low, OutputConfig::default()),
            red: Output::new(res.red, Level::Low, OutputConfig::default()),
        }
    }
}

impl Indicators {
    fn pin(&mut self, indicator: Indicator) -> &mut Output<'static> {
        match indicator {
            Indicator::Blue => &mut self.blue,
            Indicator::Green => &mut self.green,
            Indicator::Red => &mut self.red,
        }
    }

    pub fn set(&mut self, indicator: Indicator, on: bool) {
        let pin = self.pin(indicator);
        if on {
            pin.set_high();
        } else {
            pin.set_low();
        }
    }
}
