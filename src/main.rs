#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::{
    fs::File,
    io::{self, BufReader, IsTerminal},
    path::PathBuf,
};

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use toy_robot::{
    init_logging, print_banner, Console, ConsoleOptions, LogSink, TableConfig, ToyRobot,
};

#[derive(Parser)]
#[command(author, version, about = "Toy robot on a square table", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// JSON file with `board_width` and `board_height`.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Table X-extent; overrides the config file.
    #[arg(long)]
    width: Option<usize>,
    /// Table Y-extent; overrides the config file.
    #[arg(long)]
    height: Option<usize>,
    /// Read commands from a file instead of stdin.
    #[arg(long)]
    script: Option<PathBuf>,
    /// Print the table after each REPORT.
    #[arg(long)]
    grid: bool,
    /// Skip the banner and prompt.
    #[arg(long)]
    quiet: bool,
    #[arg(long, help = "Log level (e.g. --log-level debug); defaults to TOY_ROBOT_LOG or info")]
    log_level: Option<LevelFilter>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let mut config = match &cli.config {
        Some(path) => TableConfig::load(path)?,
        None => TableConfig::default(),
    };
    if let Some(w) = cli.width {
        config.board_width = w;
    }
    if let Some(h) = cli.height {
        config.board_height = h;
    }
    let robot = ToyRobot::from_config(&config, LogSink)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            let options = ConsoleOptions {
                prompt: false,
                show_grid: cli.grid,
            };
            Console::new(robot, options).run(BufReader::new(file), out)?
        }
        None => {
            let stdin = io::stdin();
            let interactive = !cli.quiet && stdin.is_terminal();
            if interactive {
                print_banner(&mut out, robot.table())?;
            }
            let options = ConsoleOptions {
                prompt: interactive,
                show_grid: cli.grid,
            };
            Console::new(robot, options).run(stdin.lock(), out)?
        }
    };
    log::debug!(
        "session ended: {} commands, {} unknown, {} rejected, {} reports",
        summary.commands,
        summary.unknown,
        summary.rejected,
        summary.reports
    );
    Ok(())
}

