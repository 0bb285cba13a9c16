use crate::message::Message;
use crate::views::WorkflowView;
use iced::widget::text::Wrapping;
use iced::widget::{button, column, row, text};
use iced::{Alignment, Element, Theme};

const PROGRESS_TEXT: &str = "Processing your image...";

pub fn controls_panel(view: &WorkflowView<'_>) -> Element<'static, Message> {
    let pick_button = button("Choose Image").on_press(Message::PickFile);
    let file_text = text(
        view.selected_file
            .clone()
            .unwrap_or_else(|| "No file selected".to_string()),
    )
    .wrapping(Wrapping::Word);

    let submit_button = button(text(view.submit_label))
        .padding([8, 16])
        .on_press_maybe(view.submit_enabled.then_some(Message::Submit));

    let mut content = column![
        row![pick_button, file_text]
            .spacing(12)
            .align_y(Alignment::Center),
        submit_button,
    ]
    .spacing(12);

    if view.show_progress {
        content = content.push(text(PROGRESS_TEXT).size(14));
    }

    if let Some(notice) = view.failure_notice {
        content = content.push(text(notice).size(14).style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().danger.base.color),
        }));
    }

    content.into()
}
