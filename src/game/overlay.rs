use super::{EndReason, Snapshot, Status};
use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// A pop-up drawn over the middle of the board when the game is not simply
/// running
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Overlay {
    AwaitingDirection,
    Paused,
    GameOver { reason: EndReason, score: u32 },
}

impl Overlay {
    pub(super) fn for_snapshot(snapshot: &Snapshot) -> Option<Overlay> {
        match snapshot.status {
            Status::Ready | Status::Running => None,
            Status::AwaitingDirection => Some(Overlay::AwaitingDirection),
            Status::Paused => Some(Overlay::Paused),
            Status::GameOver(reason) => Some(Overlay::GameOver {
                reason,
                score: snapshot.score,
            }),
        }
    }

    fn title(self) -> &'static str {
        match self {
            Overlay::AwaitingDirection => " READY ",
            Overlay::Paused => " PAUSED ",
            Overlay::GameOver { .. } => " GAME OVER ",
        }
    }

    fn lines(self) -> Vec<Line<'static>> {
        match self {
            Overlay::AwaitingDirection => vec![
                Line::from("Press a direction"),
                Line::from_iter([
                    Span::raw("("),
                    Span::styled("←↓↑→", consts::KEY_STYLE),
                    Span::raw(")"),
                ]),
            ],
            Overlay::Paused => vec![Line::from_iter([
                Span::raw("Press "),
                Span::styled("p", consts::KEY_STYLE),
                Span::raw(" to resume"),
            ])],
            Overlay::GameOver { reason, score } => vec![
                Line::from(match reason {
                    EndReason::Collision => "You crashed!",
                    EndReason::BoardFull => "You filled the board!",
                }),
                Line::from(format!("Final score: {score}")),
                Line::from_iter([
                    Span::raw("Press "),
                    Span::styled("r", consts::KEY_STYLE),
                    Span::raw(" to play again"),
                ]),
            ],
        }
    }

    /// The size of the `Rect` that should be passed to `Overlay::render()`
    pub(super) fn size(self) -> Size {
        let lines = self.lines();
        let text_width = lines
            .iter()
            .map(Line::width)
            .chain(std::iter::once(self.title().chars().count()))
            .max()
            .unwrap_or_default();
        Size {
            width: u16::try_from(text_width)
                .unwrap_or(u16::MAX)
                .saturating_add(4),
            height: u16::try_from(lines.len())
                .unwrap_or(u16::MAX)
                .saturating_add(2),
        }
    }
}

impl Widget for Overlay {
    /*
     * ┌───── PAUSED ──────┐
     * │ Press p to resume │
     * └───────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(self.title())
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);
        for (line, row) in self.lines().into_iter().zip(inner.rows()) {
            line.centered().render(row, buf);
        }
    }
}
