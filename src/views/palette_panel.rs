use crate::components::color_swatch;
use crate::message::Message;
use crate::views::Swatch;
use iced::widget::text::Wrapping;
use iced::widget::{column, text, Column, Row};

pub fn palette_panel(swatches: &[Swatch], summary: Option<&str>) -> Column<'static, Message> {
    let chips = swatches
        .iter()
        .fold(Row::new().spacing(8), |row, swatch| {
            row.push(color_swatch(swatch))
        });

    let mut panel = column![text("Dominant Colors").size(18), chips].spacing(8);

    if let Some(summary) = summary {
        panel = panel.push(text(summary.to_string()).size(14).wrapping(Wrapping::Word));
    }

    panel
}
