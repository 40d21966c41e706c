use core::convert::Infallible;

use trackbot_display::{Panel, PanelSink};
use vexide::devices::{
    display::{Display, Font, FontFamily, FontSize, Text},
    rgb::Rgb,
};

const MARGIN: i16 = 8;
const ROW_HEIGHT: i16 = 30;

/// The V5 brain screen as a six-row status panel.
pub struct BrainPanel(pub Display);

impl PanelSink for BrainPanel {
    type Error = Infallible;

    fn show(&mut self, panel: &Panel) -> Result<(), Self::Error> {
        let font = Font::new(FontSize::MEDIUM, FontFamily::Monospace);

        for (row, line) in panel.lines().enumerate() {
            let text = Text::new(line, font, [MARGIN, MARGIN + row as i16 * ROW_HEIGHT]);
            self.0
                .draw_text(&text, Rgb::new(255, 255, 255), Some(Rgb::new(0, 0, 0)));
        }

        Ok(())
    }
}
