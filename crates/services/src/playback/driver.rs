use log::warn;
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};

use drill_core::model::Scope;

use super::controller::SessionController;
use super::input::InputEvent;
use super::session::SessionSummary;
use crate::presenter::Presenter;

/// Requests accepted by `drive`.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackCommand {
    Start(Scope),
    Input(InputEvent),
    Shutdown,
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}

/// Runs the controller on the current task until `Shutdown` arrives or every
/// sender is dropped.
///
/// Commands and timer deadlines are handled one at a time, so no transition
/// ever interleaves with another. A failed start is reported to the presenter
/// and the loop keeps going. On exit the running session is stopped and its
/// summary returned.
pub async fn drive<P: Presenter>(
    controller: &mut SessionController<P>,
    mut commands: mpsc::UnboundedReceiver<PlaybackCommand>,
) -> Option<SessionSummary> {
    loop {
        let deadline = controller.next_deadline();
        tokio::select! {
            command = commands.recv() => match command {
                Some(PlaybackCommand::Start(scope)) => {
                    if let Err(err) = controller.start_session(scope) {
                        warn!("could not start session: {err}");
                        controller.presenter_mut().session_failed(&err);
                    }
                }
                Some(PlaybackCommand::Input(event)) => controller.handle_input(event),
                Some(PlaybackCommand::Shutdown) | None => break,
            },
            () = wait_until(deadline) => controller.tick(),
        }
    }
    controller.stop()
}
