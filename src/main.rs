use std::fs::File;
use std::io::{self, stdout};
use std::panic;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use colored::{Color, Colorize};
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use tokio::sync::{Notify, mpsc};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pandemic_directive::simulation::{
    ObserverSnapshot, SimulationConfig, SimulationWorld, TurnResult, kind_color,
};

mod ui;

use ui::ConsoleState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Policy {
    /// Always take the first option
    First,
    /// Pick uniformly among the offered options
    Random,
}

#[derive(Debug, Parser)]
#[command(name = "pandemic_directive", about = "Steer a nation through an outbreak, one decision a day")]
struct Cli {
    /// Seed for the session RNG; overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file overriding the default tuning
    #[arg(long)]
    config: Option<PathBuf>,

    /// Play headless until an ending is reached
    #[arg(long)]
    autoplay: bool,

    /// Decision policy used by --autoplay
    #[arg(long, value_enum, default_value_t = Policy::First)]
    policy: Policy,

    /// Emit each turn result as one JSON line (autoplay only)
    #[arg(long)]
    json: bool,

    /// Log destination while the terminal UI owns the screen
    #[arg(long, default_value = "pandemic_directive.log")]
    log_file: PathBuf,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pandemic_directive=info"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.autoplay {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(io::stderr)
            .init();
    } else {
        let file = File::create(&cli.log_file)
            .with_context(|| format!("creating log file {}", cli.log_file.display()))?;
        colored::control::set_override(false);
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }

    let mut config = match &cli.config {
        Some(path) => SimulationConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SimulationConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let simulation = SimulationWorld::new(config);
    info!("session seed {} (replay with --seed {})", simulation.seed(), simulation.seed());

    if cli.autoplay {
        run_autoplay(simulation, cli.policy, cli.json)
    } else {
        run_console(simulation, cli.log_file.display().to_string()).await
    }
}

fn run_autoplay(mut simulation: SimulationWorld, policy: Policy, json: bool) -> anyhow::Result<()> {
    let mut picker = SmallRng::seed_from_u64(simulation.seed().rotate_left(17));
    let mut choice = None;

    loop {
        let result = simulation.advance_turn(choice);
        if json {
            println!("{}", result.to_json()?);
        } else {
            print_turn(&result);
        }
        if result.ended {
            break;
        }

        choice = match policy {
            Policy::First => Some(0),
            Policy::Random => Some(picker.gen_range(0..result.choice_count.max(1))),
        };
    }

    Ok(())
}

fn turn_banner(result: &TurnResult) -> String {
    let badge = match result.kind {
        Some(kind) => format!("[{}]", kind.label()).color(kind_color(kind)).bold(),
        None => "[Ending]".color(Color::BrightRed).bold(),
    };
    format!("{} {}", badge, result.headline.as_str().bold())
}

fn print_turn(result: &TurnResult) {
    println!("{}", turn_banner(result));
    if result.critical {
        println!("{}", "!! CRITICAL !!".color(Color::BrightRed).bold());
    }
    println!("{}\n", result.text);
}

async fn run_console(simulation: SimulationWorld, log_path: String) -> anyhow::Result<()> {
    let observer = Arc::new(RwLock::new(ObserverSnapshot::default()));
    let shutdown_notify = Arc::new(Notify::new());
    let (choice_tx, mut choice_rx) = mpsc::channel::<Option<usize>>(16);

    let mut console = ConsoleState {
        seed: simulation.seed(),
        log_path,
        last_input: None,
    };

    let mut simulation = simulation.with_observer(observer.clone());
    let notify_for_simulation = shutdown_notify.clone();
    let simulation_task = tokio::spawn(async move {
        simulation.advance_turn(None);
        loop {
            tokio::select! {
                received = choice_rx.recv() => match received {
                    Some(choice) => {
                        let result = simulation.advance_turn(choice);
                        if result.ended {
                            info!("final day {}: {}", result.day, result.headline);
                        }
                    }
                    // Channel closed, time to shut down
                    None => break,
                },
                _ = notify_for_simulation.notified() => break,
            }
        }
    });
    let ctrlc_notify = shutdown_notify.clone();
    let ctrl_c_task = tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        ctrlc_notify.notify_waiters();
    });

    let mut terminal = init_terminal()?;
    let mut term_guard = TerminalGuard::new();
    panic::set_hook(Box::new(|info| {
        let _ = restore_terminal();
        eprintln!("panic: {info}");
    }));
    let mut app_should_run = true;

    while app_should_run {
        let snapshot = match observer.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };
        terminal.draw(|frame| ui::render(frame, &snapshot, &console))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => app_should_run = false,
                        KeyCode::Char(digit @ '1'..='9') => {
                            console.last_input = Some(digit);
                            let index = digit as usize - '1' as usize;
                            if choice_tx.try_send(Some(index)).is_err() {
                                warn!("input queue full; dropped choice {}", digit);
                            }
                        }
                        _ => {}
                    }
                }
            }
        }

        if ctrl_c_task.is_finished() {
            app_should_run = false;
        }
    }

    // Shutdown
    shutdown_notify.notify_waiters();
    drop(choice_tx);
    simulation_task.await?;
    restore_terminal()?;
    term_guard.disarm();

    Ok(())
}

fn init_terminal() -> io::Result<Terminal<impl Backend>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    Terminal::new(backend)
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Ensures terminal is restored on panic/early-return.
struct TerminalGuard {
    armed: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { armed: true }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.armed {
            let _ = restore_terminal();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_borrows_the_turn_result() {
        colored::control::set_override(false);
        let mut session = SimulationWorld::with_seed(SimulationConfig::default(), 1);
        let result = session.advance_turn(None);

        let banner = turn_banner(&result);
        assert_eq!(banner, "[Directive] DAY 1: PATIENT ZERO");
        assert_eq!(result.headline, "DAY 1: PATIENT ZERO");
    }
}
