use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::build_info;
use flappy::config::{parse_args, AppConfig, Command, USAGE};
use flappy::constants::MAX_FRAME_MS;
use flappy::game::{Session, Spawner};
use flappy::input::{handle_key, InputResult};
use flappy::ui::draw_ui;
use rand::Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::time::{Duration, Instant};

/// Input poll timeout while the run is over and nothing is scheduled.
const IDLE_POLL_MS: u64 = 100;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let config = match parse_args(&args) {
        Ok(Command::Play(config)) => config,
        Ok(Command::Version) => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Ok(Command::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'flappy --help' for usage.");
            std::process::exit(1);
        }
    };

    init_logging(&config)?;

    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("Starting flappy {} with seed {}", build_info::BUILD_COMMIT, seed);
    let mut session = Session::new(Spawner::seeded(seed));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_game(&mut terminal, &mut session, seed);

    // Restore the terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("Game loop failed: {}", e);
    }
    result
}

/// Logs go to a file so they do not tear the alternate screen.
fn init_logging(config: &AppConfig) -> io::Result<()> {
    if let Some(path) = &config.log_file {
        let file = File::create(path)?;
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
    }
    Ok(())
}

/// Real-time loop: draw, wait for input until the next scheduled event, then
/// feed elapsed wall time to the session's fixed-step scheduler.
fn run_game<B, R>(
    terminal: &mut Terminal<B>,
    session: &mut Session<R>,
    seed: u64,
) -> io::Result<()>
where
    B: ratatui::backend::Backend,
    R: Rng,
{
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| draw_ui(frame, session.simulation(), Some(seed)))?;

        let wait_ms = session.ms_until_next_event().unwrap_or(IDLE_POLL_MS);
        if event::poll(Duration::from_millis(wait_ms))? {
            if let Event::Key(key) = event::read()? {
                if handle_key(session, key) == InputResult::Quit {
                    log::info!(
                        "Quit at tick {} with score {}",
                        session.simulation().tick_count,
                        session.simulation().score
                    );
                    return Ok(());
                }
            }
        }

        // Whole milliseconds only; the remainder carries into the next frame.
        let elapsed_ms = last_frame.elapsed().as_millis() as u64;
        last_frame += Duration::from_millis(elapsed_ms);
        if elapsed_ms > MAX_FRAME_MS {
            log::warn!(
                "Frame took {}ms, capping to {}ms",
                elapsed_ms,
                MAX_FRAME_MS
            );
        }
        session.advance(elapsed_ms.min(MAX_FRAME_MS));
    }
}
