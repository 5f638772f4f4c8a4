mod clock;
mod config;
mod error;
mod grid;
mod input;
mod sim;
mod ui;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::prelude::*;
use simplelog::WriteLogger;
use std::fs::File;
use std::io::{self, Stdout};

use crate::clock::FrameClock;
use crate::config::Settings;
use crate::error::Error;
use crate::grid::GridState;
use crate::input::Command;
use crate::sim::{Intent, StepResult};
use crate::ui::Hud;

fn main() -> Result<(), Error> {
    let settings = Settings::parse();
    settings.validate()?;

    // Set up logging before anything else; the terminal belongs to the UI
    WriteLogger::init(
        settings.log_level,
        simplelog::Config::default(),
        File::create(&settings.log_file)?,
    )?;

    info!("Starting ringsnek with {:?}", settings);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &settings);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!("Game loop failed: {}", e);
    }
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, settings: &Settings) -> Result<(), Error> {
    let mut game = GridState::new(settings.grid_size(), settings.frq, settings.rng());
    let mut clock = FrameClock::new(settings.fps);
    let mut hud = Hud::default();
    let mut pending: Option<Intent> = None;

    loop {
        terminal.draw(|f| ui::draw(f, &game, &hud))?;

        match input::poll_command(clock.until_next_frame())? {
            Some(Command::Quit) => break,
            Some(Command::Pause) => {
                hud.paused = !hud.paused;
                info!("Paused: {}", hud.paused);
            }
            Some(Command::Game(intent)) => input::queue_intent(&mut pending, intent),
            None => {}
        }

        let frames = clock.tick();
        hud.fps = clock.rate();
        if hud.paused {
            continue;
        }

        for _ in 0..frames {
            match game.on_frame(pending.take()) {
                Some(StepResult::Collision) => info!("Game over, score {}", game.score()),
                Some(StepResult::Filled) => info!("Board cleared, score {}", game.score()),
                _ => {}
            }
        }
    }

    info!("Quitting with score {}", game.score());
    Ok(())
}
