use crate::message::Message;
use crate::views::Swatch;
use iced::border::{Border, Radius};
use iced::widget::text::Wrapping;
use iced::widget::{column, container, text, tooltip};
use iced::{Alignment, Background, Color, Element, Length, Theme};

const SWATCH_SIZE: f32 = 64.0;

/// A filled chip labelled with the raw triple; hovering shows its CSS color.
pub fn color_swatch(swatch: &Swatch) -> Element<'static, Message> {
    let fill = swatch.fill;
    let chip = container(text(""))
        .width(Length::Fixed(SWATCH_SIZE))
        .height(Length::Fixed(SWATCH_SIZE))
        .style(move |theme: &Theme| swatch_style(theme, fill));

    let css = container(text(swatch.css.clone()).size(12))
        .padding(4)
        .style(container::rounded_box);

    column![
        tooltip(chip, css, tooltip::Position::Top),
        text(swatch.label.clone())
            .size(12)
            .wrapping(Wrapping::None),
    ]
    .spacing(4)
    .align_x(Alignment::Center)
    .into()
}

fn swatch_style(theme: &Theme, fill: Color) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(fill)),
        border: Border {
            color: palette.background.strong.color.scale_alpha(0.6),
            width: 1.0,
            radius: Radius::new(6.0),
        },
        ..Default::default()
    }
}
