use drill_core::model::{PhaseFrame, Scope};
use services::{InputEvent, Key, PlaybackCommand, PlaybackStatus, Presenter, SessionError};
use storage::CategorySummary;

const BAR_WIDTH: usize = 12;

/// Prints frames and session state to stdout.
pub struct TerminalPresenter {
    menu: Vec<CategorySummary>,
    total_sentences: usize,
}

impl TerminalPresenter {
    pub fn new(menu: Vec<CategorySummary>) -> Self {
        let total_sentences = menu.iter().map(|c| c.sentence_count).sum();
        Self {
            menu,
            total_sentences,
        }
    }

    pub fn print_menu(&self) {
        println!();
        println!("Choose what to drill:");
        println!("  0) All categories ({})", self.total_sentences);
        for (index, category) in self.menu.iter().enumerate() {
            println!("  {}) {}", index + 1, category.label());
        }
        println!("Controls: Enter = next, p = pause/resume, q = back to menu, exit = quit");
    }
}

fn progress_bar(fraction: f32) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * BAR_WIDTH as f32).round() as usize).min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

impl Presenter for TerminalPresenter {
    fn render(&mut self, frame: &PhaseFrame) {
        println!(
            "{} {}/3  {}    ({})",
            progress_bar(frame.progress_fraction),
            frame.phase.ordinal(),
            frame.display_text,
            frame.progress_label
        );
    }

    fn progress(&mut self, items_completed: u64) {
        println!("Sentences learned: {items_completed}");
    }

    fn status(&mut self, status: PlaybackStatus) {
        match status {
            PlaybackStatus::Paused => println!("-- paused (p to resume) --"),
            PlaybackStatus::Playing | PlaybackStatus::Idle => {}
        }
    }

    fn reset(&mut self) {
        self.print_menu();
    }

    fn session_failed(&mut self, error: &SessionError) {
        eprintln!("cannot start: {error}");
    }
}

/// Turns one line of user input into a playback command.
///
/// Control words win over menu entries; then a menu number, `all`, or a
/// category id starts a session. Control words and `all` ignore case; ids
/// match case-insensitively, preferring an exact match. Returns `None` for
/// anything else.
pub fn parse_line(line: &str, menu: &[CategorySummary]) -> Option<PlaybackCommand> {
    if !line.is_empty() && line.trim().is_empty() {
        return Some(PlaybackCommand::Input(InputEvent::Key(Key::Space)));
    }

    let typed = line.trim();
    let command = match typed.to_lowercase().as_str() {
        "" | "n" | "next" => PlaybackCommand::Input(InputEvent::Key(Key::Enter)),
        "p" | "space" | "pause" => PlaybackCommand::Input(InputEvent::Key(Key::Space)),
        "q" | "esc" | "home" => PlaybackCommand::Input(InputEvent::Key(Key::Escape)),
        "hide" => PlaybackCommand::Input(InputEvent::VisibilityLost),
        "exit" | "quit" => PlaybackCommand::Shutdown,
        "0" => PlaybackCommand::Start(Scope::All),
        _ => {
            if let Ok(number) = typed.parse::<usize>() {
                let category = menu.get(number.checked_sub(1)?)?;
                PlaybackCommand::Start(Scope::Category(category.id.clone()))
            } else {
                match Scope::parse(typed) {
                    Scope::All => PlaybackCommand::Start(Scope::All),
                    Scope::Category(_) => {
                        let category = menu
                            .iter()
                            .find(|c| c.id.as_str() == typed)
                            .or_else(|| {
                                menu.iter()
                                    .find(|c| c.id.as_str().eq_ignore_ascii_case(typed))
                            })?;
                        PlaybackCommand::Start(Scope::Category(category.id.clone()))
                    }
                }
            }
        }
    };
    Some(command)
}
