use crate::command::Command;
use crate::config::Config;
use crate::consts;
use crate::feedback::Feedback;
use crate::game::{GameEvent, GameSession, Status};
use crate::util::get_display_area;
use crate::warning::{Warning, WarningOutcome};
use crossterm::event::{poll, read, Event};
use ratatui::{backend::Backend, buffer::Buffer, layout::Rect, widgets::Widget, Terminal};
use std::io;
use std::time::Instant;

/// The running program: one game session plus its sound cues and any
/// pending warning pop-up
#[derive(Debug)]
pub(crate) struct App {
    session: GameSession,
    feedback: Feedback,
    warning: Option<Warning>,

    /// Number of timer firings left for which the score bar stays
    /// highlighted
    flash_ticks: u8,

    quitting: bool,
}

impl App {
    pub(crate) fn new(config: &Config, warning: Option<Warning>) -> App {
        App {
            session: GameSession::new(config.options),
            feedback: Feedback::select(&config.feedback),
            warning,
            flash_ticks: 0,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;
            self.process_input()?;
        }
        Ok(())
    }

    /// Wait for either the next input event or the session's next timer
    /// firing, whichever comes first, and handle it
    fn process_input(&mut self) -> io::Result<()> {
        if let Some(wait) = self.session.scheduler().time_left(Instant::now()) {
            if wait.is_zero() || !poll(wait)? {
                self.tick();
                return Ok(());
            }
        }
        self.handle_event(read()?);
        Ok(())
    }

    fn tick(&mut self) {
        self.flash_ticks = self.flash_ticks.saturating_sub(1);
        self.session.on_timer();
        self.dispatch_events();
    }

    fn handle_event(&mut self, event: Event) {
        if let Some(ref warning) = self.warning {
            if let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) {
                match warning.handle_command(cmd) {
                    Some(WarningOutcome::Dismissed) => self.warning = None,
                    Some(WarningOutcome::Quit) => self.quitting = true,
                    None => (),
                }
            }
            return;
        }
        if event == Event::FocusLost {
            if self.session.status() == Status::Running {
                log::debug!("Terminal lost focus; pausing");
                self.session.toggle_pause();
            }
            return;
        }
        let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) else {
            return;
        };
        match cmd {
            Command::Quit => self.quitting = true,
            Command::Pause => self.session.toggle_pause(),
            Command::Restart => self.session.restart(),
            Command::Start => self.session.start(),
            _ => {
                if let Some(direction) = cmd.direction() {
                    self.session.steer(direction);
                }
            }
        }
        self.dispatch_events();
    }

    /// Pass the session's notifications on to the sound cues & score bar
    fn dispatch_events(&mut self) {
        for event in self.session.drain_events() {
            match event {
                GameEvent::Scored { .. } => self.flash_ticks = consts::SCORE_FLASH_TICKS,
                GameEvent::GameOver { .. } | GameEvent::Reset => self.flash_ticks = 0,
            }
            self.feedback.react(event);
        }
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.session.snapshot().render(area, buf);
        let display = get_display_area(area);
        if self.flash_ticks > 0 {
            let score_bar = Rect {
                height: display.height.min(1),
                ..display
            };
            buf.set_style(score_bar, consts::SCORE_FLASH_STYLE);
        }
        if let Some(ref warning) = self.warning {
            warning.render(display, buf);
        }
    }
}
