use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::grid::{Cell, Direction, GridState};
use crate::sim::Status;

/// Terminal columns per grid cell, so cells come out roughly square.
pub const CELL_WIDTH: u16 = 2;

const BODY_STYLE: Style = Style::new().bg(Color::Green);
const HEAD_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Yellow);
const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);
const FOOD_SYMBOL: &str = "●";

/// Driver-side state shown next to the board.
#[derive(Debug, Default)]
pub struct Hud {
    pub fps: f64,
    pub paused: bool,
}

pub fn draw(frame: &mut Frame, state: &GridState, hud: &Hud) {
    let [bar, body] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(frame.area());

    frame.render_widget(
        Paragraph::new(format!(
            "RINGSNEK    Score: {}    FPS: {:.1}",
            state.score(),
            hud.fps
        ))
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL)),
        bar,
    );

    let size = state.size();
    let arena = Rect {
        x: body.x,
        y: body.y,
        width: size.width * CELL_WIDTH + 2,
        height: size.height + 2,
    };
    if arena.width > body.width || arena.height > body.height {
        frame.render_widget(
            Paragraph::new(format!(
                "Terminal too small, need {}x{}",
                arena.width,
                arena.height + bar.height
            ))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
            body,
        );
        return;
    }

    let block = match state.status() {
        Status::Running if hud.paused => Block::default().title("Paused. Press SPACE to continue"),
        Status::Running => Block::default().title("Playing"),
        Status::GameOver => Block::default().style(Style::new().bg(Color::Red)),
        Status::Won => Block::default().title("Cleared"),
    }
    .borders(Borders::ALL);
    let inner = block.inner(arena);

    frame.render_widget(block, arena);
    frame.render_widget(state, inner);

    let banner = match state.status() {
        Status::Running => return,
        Status::GameOver => "GAME OVER",
        Status::Won => "YOU WIN",
    };
    let message = Rect {
        y: inner.y + inner.height.saturating_sub(3) / 2,
        height: inner.height.min(3),
        ..inner
    };
    frame.render_widget(
        Paragraph::new(format!(
            "{}\nFinal Score: {}\nPress R to play again",
            banner,
            state.score()
        ))
        .alignment(Alignment::Center),
        message,
    );
}

fn head_symbol(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "^",
        Direction::Right => ">",
        Direction::Down => "v",
        Direction::Left => "<",
    }
}

fn paint(area: Rect, buf: &mut Buffer, cell: Cell, symbol: &str, style: Style) {
    let x = area.x + cell.x * CELL_WIDTH;
    let y = area.y + cell.y;
    if y >= area.bottom() {
        return;
    }
    for dx in 0..CELL_WIDTH {
        if x + dx >= area.right() {
            break;
        }
        let glyph = if dx == 0 { symbol } else { " " };
        buf[(x + dx, y)].set_symbol(glyph).set_style(style);
    }
}

impl Widget for &GridState {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for part in self.segments().skip(1) {
            paint(area, buf, part, " ", BODY_STYLE);
        }

        if self.status() == Status::Running {
            paint(area, buf, self.food(), FOOD_SYMBOL, FOOD_STYLE);
        }

        paint(area, buf, self.head(), head_symbol(self.direction()), HEAD_STYLE);
    }
}
