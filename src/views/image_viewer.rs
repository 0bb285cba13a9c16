use crate::image_pipeline::ResultPreview;
use crate::message::Message;
use iced::widget::image::Handle;
use iced::widget::{column, container, row, text, Image};
use iced::{Alignment, Element, Length};

const PREVIEW_SIZE: f32 = 192.0;

pub fn images_panel(preview: &ResultPreview) -> Element<'static, Message> {
    row![
        image_card("Original Image", preview.original.as_ref()),
        image_card("Segmented Image", preview.segmented.as_ref()),
    ]
    .spacing(16)
    .into()
}

fn image_card(title: &'static str, handle: Option<&Handle>) -> Element<'static, Message> {
    let body: Element<'static, Message> = if let Some(handle) = handle {
        Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        text("Image preview unavailable").into()
    };

    column![
        text(title).size(18),
        container(body)
            .width(Length::Fixed(PREVIEW_SIZE))
            .height(Length::Fixed(PREVIEW_SIZE))
            .align_x(Alignment::Center)
            .align_y(Alignment::Center),
    ]
    .spacing(8)
    .into()
}
