use crate::command::Command;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect, Size},
    text::{Line, Text},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};
use std::borrow::Cow;
use std::error::Error;

/// A dismissible pop-up describing a non-fatal problem, such as a broken
/// configuration file, along with the chain of errors behind it
///
/// Text that does not fit in the pop-up is cut short; the full error is in
/// the log.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Warning {
    lines: Vec<String>,
}

impl Warning {
    const MAX_LINES: u16 = 16;
    const TEXT_WIDTH: u16 = 48;
    const WIDTH: u16 = Self::TEXT_WIDTH + 4;

    /// Describe `err` and its sources, preceded by `summary` of what the
    /// program is doing about it
    pub(crate) fn new(summary: &str, err: &dyn Error) -> Warning {
        let mut causes = Vec::new();
        let mut source = err.source();
        while let Some(src) = source {
            causes.push(src.to_string());
            source = src.source();
        }
        Warning::from_messages(summary, &err.to_string(), &causes)
    }

    fn from_messages(summary: &str, error: &str, causes: &[String]) -> Warning {
        let mut lines = wrap(summary, "", "");
        lines.push(String::new());
        lines.extend(wrap(error, "", ""));
        match causes {
            [] => (),
            [cause] => {
                lines.push(String::new());
                lines.push(String::from("Caused by:"));
                lines.extend(wrap(cause, "    ", "    "));
            }
            _ => {
                lines.push(String::new());
                lines.push(String::from("Caused by:"));
                for (i, cause) in causes.iter().enumerate() {
                    lines.extend(wrap(cause, &format!("{i:>5}: "), "       "));
                }
            }
        }
        Warning { lines }
    }

    pub(crate) fn handle_command(&self, cmd: Command) -> Option<WarningOutcome> {
        match cmd {
            Command::Start | Command::Pause => Some(WarningOutcome::Dismissed),
            Command::Quit => Some(WarningOutcome::Quit),
            _ => None,
        }
    }

    fn visible_lines(&self) -> Vec<Line<'_>> {
        let max = usize::from(Warning::MAX_LINES);
        let mut lines = self
            .lines
            .iter()
            .map(|s| Line::raw(s.as_str()))
            .collect::<Vec<_>>();
        if lines.len() > max {
            let hidden = lines.len() - (max - 1);
            lines.truncate(max - 1);
            lines.push(Line::raw(format!("… and {hidden} more lines")));
        }
        lines
    }
}

fn wrap(text: &str, initial_indent: &str, subsequent_indent: &str) -> Vec<String> {
    let opts = textwrap::Options::new(usize::from(Warning::TEXT_WIDTH))
        .break_words(true)
        .initial_indent(initial_indent)
        .subsequent_indent(subsequent_indent);
    textwrap::wrap(text, opts)
        .into_iter()
        .map(Cow::into_owned)
        .collect()
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum WarningOutcome {
    Dismissed,
    Quit,
}

impl Widget for &Warning {
    // `area` is the whole display; the pop-up centers itself within it.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.visible_lines();
        let text_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let popup = center_rect(
            area,
            Size {
                width: Warning::WIDTH,
                height: text_height.saturating_add(4),
            },
        );
        let block = Block::bordered()
            .title(" WARNING ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));
        let [text_area, _, ok_area] = Layout::vertical([
            Constraint::Length(text_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(block.inner(popup));
        Clear.render(popup, buf);
        block.render(popup, buf);
        Text::from(lines).render(text_area, buf);
        Line::from("[OK]").centered().render(ok_area, buf);
    }
}
