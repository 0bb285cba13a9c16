use crate::image_pipeline::ResultPreview;
use crate::message::Message;
use crate::model::{SelectedFile, Submission, Workflow, WorkflowState};
use crate::service::UploadController;
use crate::views::{controls_panel, images_panel, palette_panel, WorkflowView};
use iced::widget::{column, container, row, scrollable, text};
use iced::{application, Alignment, Element, Length, Task, Theme};
use rfd::AsyncFileDialog;

const APP_TITLE: &str = "Palettescope";
const HEADING: &str = "Dominant Color Detection";
const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

pub fn run() -> iced::Result {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();

    application(APP_TITLE, App::update, App::view)
        .theme(App::theme)
        .centered()
        .run()
}

#[derive(Default)]
pub struct App {
    workflow: Workflow,
    controller: UploadController,
    preview: Option<ResultPreview>,
}

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickFile => Task::perform(pick_image(), Message::FilePicked),
            Message::FilePicked(Some(file)) => {
                self.workflow.select_file(file);
                self.refresh_preview();
                Task::none()
            }
            Message::FilePicked(None) => Task::none(),
            Message::Submit => {
                let Some(Submission { generation, file }) = self.workflow.submit() else {
                    return Task::none();
                };
                self.refresh_preview();

                let controller = self.controller.clone();
                Task::perform(
                    async move { controller.analyze(file).await },
                    move |outcome| Message::AnalysisFinished(generation, outcome),
                )
            }
            Message::AnalysisFinished(generation, outcome) => {
                self.workflow.complete(generation, outcome);
                self.refresh_preview();
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let projection = WorkflowView::project(&self.workflow, self.preview.as_ref());

        let mut results = row![].spacing(24);
        if let Some(preview) = projection.images {
            results = results.push(images_panel(preview));
        }
        if projection.palette_summary.is_some() {
            results = results.push(palette_panel(
                &projection.swatches,
                projection.palette_summary.as_deref(),
            ));
        }

        let content = column![
            text(HEADING).size(28),
            controls_panel(&projection),
            results,
        ]
        .padding(20)
        .spacing(20)
        .align_x(Alignment::Start);

        container(scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn refresh_preview(&mut self) {
        self.preview = match self.workflow.state() {
            WorkflowState::Succeeded(result) => Some(ResultPreview::build(result)),
            _ => None,
        };
    }
}

async fn pick_image() -> Option<SelectedFile> {
    let handle = AsyncFileDialog::new()
        .set_title("Select an image to analyze")
        .add_filter("Images", &IMAGE_EXTENSIONS)
        .pick_file()
        .await?;

    let bytes = handle.read().await;
    selection_from(handle.file_name(), bytes)
}

/// The picker hands back no bytes for a file it could not read.
fn selection_from(name: String, bytes: Vec<u8>) -> Option<SelectedFile> {
    if bytes.is_empty() {
        log::warn!("{name}: selected file is empty or could not be read");
        return None;
    }
    Some(SelectedFile::new(name, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnalysisResult, ImageDataUri, RgbTriple};
    use crate::service::UploadError;

    fn pick(app: &mut App, name: &str) {
        let _ = app.update(Message::FilePicked(Some(SelectedFile::new(name, vec![1, 2, 3]))));
    }

    fn result() -> AnalysisResult {
        AnalysisResult {
            original_image: ImageDataUri::from_base64("iVBORw0KGgo="),
            segmented_image: ImageDataUri::from_base64("iVBORw0KGgo="),
            dominant_colors: vec![RgbTriple([10, 20, 30]), RgbTriple([255, 0, 0])],
        }
    }

    #[test]
    fn cancelled_picker_changes_nothing() {
        let mut app = App::default();
        let _ = app.update(Message::FilePicked(None));
        assert!(matches!(app.workflow.state(), WorkflowState::Idle));
    }

    #[test]
    fn submit_without_file_is_ignored() {
        let mut app = App::default();
        let _ = app.update(Message::Submit);
        assert!(matches!(app.workflow.state(), WorkflowState::Idle));
    }

    #[test]
    fn unreadable_pick_keeps_previous_selection() {
        let mut app = App::default();
        pick(&mut app, "leaf.png");

        let _ = app.update(Message::FilePicked(selection_from(
            "gone.png".to_string(),
            Vec::new(),
        )));
        assert!(matches!(app.workflow.state(), WorkflowState::Ready(f) if f.name == "leaf.png"));

        let picked = selection_from("bark.png".to_string(), vec![7, 8]);
        assert_eq!(picked.as_ref().map(SelectedFile::byte_len), Some(2));
    }

    #[test]
    fn submit_message_starts_loading_once() {
        let mut app = App::default();
        pick(&mut app, "leaf.png");
        let _ = app.update(Message::Submit);
        assert!(app.workflow.is_loading());

        let _ = app.update(Message::Submit);
        assert!(app.workflow.is_loading());
        assert!(app.workflow.submit().is_none());
    }

    #[test]
    fn previews_follow_the_workflow_state() {
        let mut app = App::default();
        pick(&mut app, "leaf.png");
        let submission = app.workflow.submit().expect("submission");
        assert!(app.preview.is_none());

        let _ = app.update(Message::AnalysisFinished(submission.generation, Ok(result())));
        assert!(matches!(app.workflow.state(), WorkflowState::Succeeded(_)));
        assert!(app.preview.as_ref().is_some_and(|p| p.original.is_some()));

        pick(&mut app, "bark.png");
        assert!(matches!(app.workflow.state(), WorkflowState::Ready(_)));
        assert!(app.preview.is_none());

        let submission = app.workflow.submit().expect("submission");
        let _ = app.update(Message::AnalysisFinished(
            submission.generation,
            Err(UploadError::Status(500)),
        ));
        assert!(matches!(app.workflow.state(), WorkflowState::Failed));
        assert!(app.preview.is_none());
    }
}
