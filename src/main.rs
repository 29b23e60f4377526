use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};

use flap::constants::TICK_INTERVAL_MS;
use flap::game::logic::{process_input, process_tick, SessionInput};
use flap::game::ticker::Ticker;
use flap::ui;
use flap::GameSession;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("flap {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Flap - Terminal Flappy Bird\n");
                println!("Usage: flap\n");
                println!("Controls:");
                println!("  Space      Flap");
                println!("  R          Restart (after game over)");
                println!("  Q / Esc    Quit");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'flap --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut session = GameSession::new();
    let mut rng = rand::thread_rng();
    let mut ticker = Ticker::new(Duration::from_millis(TICK_INTERVAL_MS));
    ticker.start();

    // Main loop: draw, handle input, tick. Everything runs on this one
    // thread, so input and ticks are serialized by construction.
    loop {
        terminal.draw(|frame| ui::draw_ui(frame, &session))?;

        // Poll well under the tick period so input stays responsive.
        if event::poll(Duration::from_millis(5))? {
            if let Event::Key(key_event) = event::read()? {
                match key_event.code {
                    KeyCode::Char(' ') => {
                        process_input(&mut session, SessionInput::Jump);
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') => {
                        process_input(&mut session, SessionInput::Restart);
                        if !session.game_over && !ticker.is_running() {
                            ticker.start();
                        }
                    }
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        break;
                    }
                    _ => {
                        process_input(&mut session, SessionInput::Other);
                    }
                }
            }
        }

        // Game tick every 20ms while the session is active
        if ticker.poll() {
            process_tick(&mut session, &mut rng);
            if session.game_over {
                // Release the timer the moment the session ends.
                ticker.stop();
            }
        }
    }

    // Cleanup terminal
    ticker.stop();
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    Ok(())
}
