use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::accounts::CredentialStore;
use flappy::config::GameConfig;
use flappy::constants::REALTIME_FRAME_MS;
use flappy::high_score::HighScoreFile;
use flappy::input::{handle_auth_input, handle_game_input, InputResult};
use flappy::session::GameSession;
use flappy::ui::auth_screen::AuthScreen;
use flappy::ui::game_scene::render_game;
use flappy::utils::build_info::version_line;
use flappy::utils::logging::init_logging;
use flappy::utils::persistence::{save_json, DataPaths};
use log::{info, warn};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

enum Screen {
    Auth,
    Game,
}

#[derive(Default)]
struct CliArgs {
    seed: Option<u64>,
    user: Option<String>,
    data_dir: Option<PathBuf>,
}

fn print_help() {
    println!("Flappy - Flappy Bird in the terminal\n");
    println!("Usage: flappy [options]\n");
    println!("Options:");
    println!("  --seed <N>         Seed the pipe generator");
    println!("  --user <name>      Skip login and play as <name>");
    println!("  --data-dir <path>  Store data in <path> instead of ~/.flappy");
    println!("  --version          Show version information");
    println!("  --help             Show this help message");
}

fn usage_error(message: String) -> ! {
    eprintln!("{}", message);
    eprintln!("Run 'flappy --help' for usage.");
    std::process::exit(1);
}

fn parse_args() -> CliArgs {
    let mut cli = CliArgs::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--seed" => {
                let value = args
                    .next()
                    .unwrap_or_else(|| usage_error("--seed needs a value".to_string()));
                let seed = value
                    .parse()
                    .unwrap_or_else(|_| usage_error(format!("Invalid seed: {}", value)));
                cli.seed = Some(seed);
            }
            "--user" => {
                let name = args
                    .next()
                    .unwrap_or_else(|| usage_error("--user needs a name".to_string()));
                cli.user = Some(name);
            }
            "--data-dir" => {
                let dir = args
                    .next()
                    .unwrap_or_else(|| usage_error("--data-dir needs a path".to_string()));
                cli.data_dir = Some(PathBuf::from(dir));
            }
            other => usage_error(format!("Unknown option: {}", other)),
        }
    }
    cli
}

fn main() -> io::Result<()> {
    let cli = parse_args();

    let paths = match &cli.data_dir {
        Some(dir) => DataPaths::at(dir)?,
        None => DataPaths::from_home()?,
    };
    init_logging(&paths.log());
    info!("{} starting, data in {}", version_line(), paths.root().display());

    let config_path = paths.config();
    let config = GameConfig::load_or_default(&config_path);
    if !config_path.exists() {
        if let Err(e) = save_json(&config_path, &config) {
            warn!("Could not write default config: {}", e);
        }
    }

    let mut store = CredentialStore::load(paths.users());
    let mut auth_screen = AuthScreen::new();

    // --user skips the login screen
    let mut current_screen = Screen::Auth;
    let mut session = None;
    if let Some(name) = cli.user.clone() {
        session = Some(GameSession::new(
            config,
            HighScoreFile::new(paths.high_score()),
            cli.seed,
            Some(name),
        ));
        current_screen = Screen::Game;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let frame_time = Duration::from_millis(REALTIME_FRAME_MS);

    // Main loop
    'main: loop {
        match current_screen {
            Screen::Auth => {
                terminal.draw(|f| {
                    let area = f.size();
                    auth_screen.draw(f, area);
                })?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key_event) = event::read()? {
                        match handle_auth_input(key_event, &mut auth_screen, &mut store) {
                            InputResult::Continue => {}
                            InputResult::Quit => break 'main,
                            InputResult::LoggedIn(username) => {
                                info!("{} logged in", username);
                                session = Some(GameSession::new(
                                    config,
                                    HighScoreFile::new(paths.high_score()),
                                    cli.seed,
                                    Some(username),
                                ));
                                current_screen = Screen::Game;
                            }
                        }
                    }
                }
            }
            Screen::Game => {
                let Some(game_session) = session.as_mut() else {
                    current_screen = Screen::Auth;
                    continue;
                };

                let mut last_frame = Instant::now();
                loop {
                    terminal.draw(|f| {
                        let area = f.size();
                        render_game(f, area, game_session.game(), game_session.username());
                    })?;

                    // Wait for input until the next frame is due
                    let budget = frame_time.saturating_sub(last_frame.elapsed());
                    if event::poll(budget)? {
                        if let Event::Key(key_event) = event::read()? {
                            if handle_game_input(key_event, game_session) == InputResult::Quit {
                                break 'main;
                            }
                        }
                    }

                    if last_frame.elapsed() >= frame_time {
                        if game_session.is_running() {
                            game_session.tick();
                        }
                        last_frame = Instant::now();
                    }
                }
            }
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    info!("Exiting");
    println!("Goodbye!");

    Ok(())
}
