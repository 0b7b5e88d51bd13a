use action::ActionResult;
use error::AppError;
use model::Model;
use screen::Screen;
use settings::Settings;
use squint_buffer::{model::LineBuffer, surface::Surface};
use terminal::TerminalScreen;
use update::update_model;

pub mod action;
pub mod error;
pub mod model;
pub mod screen;
pub mod settings;
mod terminal;
mod update;
mod view;

pub async fn run(settings: Settings) -> Result<(), AppError> {
    let content = match tokio::fs::read(&settings.path).await {
        Ok(it) => it,
        Err(source) => {
            return Err(AppError::FileReadFailed {
                path: settings.path.clone(),
                source,
            })
        }
    };

    let lines = LineBuffer::new(&content);
    tracing::debug!(
        "loaded {:?} with {} bytes in {} lines",
        settings.path,
        content.len(),
        lines.line_count()
    );

    let mut screen = TerminalScreen::start(settings.theme.default)?;
    let mut model = Model::new(lines, &settings, screen.size());

    let result = run_loop(&mut screen, &mut model).await;

    screen.shutdown()?;

    result
}

/// Drives the viewer until a quit binding fires or input ends. Each pass
/// paints the header for the pointer of the previous pass before waiting for
/// the next event.
pub async fn run_loop<S: Screen>(screen: &mut S, model: &mut Model) -> Result<(), AppError> {
    view::render_document(screen, model);

    loop {
        view::render_header(screen, model);
        screen.render()?;

        let Some(event) = screen.next_event().await? else {
            tracing::debug!("input stream closed");
            break;
        };

        tracing::trace!("received event: {:?}", event);

        squint_buffer::update(screen, &mut model.document, model.theme.text);

        if let Some(rect) = model.selection.get_active() {
            squint_buffer::view_selection(screen, &rect, false);
        }

        if update_model(screen, model, &event)? == ActionResult::Quit {
            tracing::debug!("quit requested");
            break;
        }

        if let Some(rect) = model.selection.get_active() {
            squint_buffer::view_selection(screen, &rect, true);
        }
    }

    Ok(())
}
