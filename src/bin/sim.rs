use anyhow::{bail, Context};
use clap::Parser;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde_json::json;
use toy_robot::{Command, Facing, Outcome, Table, TableConfig, ToyRobot};

/// Drive robots with random command streams and check they never leave the table.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 1000)]
    steps: usize,
    #[arg(long, default_value_t = 1)]
    robots: usize,
    #[arg(long, default_value_t = 5)]
    width: usize,
    #[arg(long, default_value_t = 5)]
    height: usize,
}

#[derive(Default)]
struct Tally {
    placed: usize,
    rejected: usize,
    moved: usize,
    blocked: usize,
    rotated: usize,
    reports: usize,
    ignored: usize,
    unknown: usize,
}

/// A random command line, sometimes malformed or out of range.
fn random_line<R: Rng>(rng: &mut R, table: &Table) -> String {
    match rng.random_range(0..10) {
        0 => {
            let p = table.random_pose(rng);
            format!("PLACE {},{},{}", p.x, p.y, p.facing)
        }
        1 => {
            let x = rng.random_range(-2..table.width() as i64 + 2);
            let y = rng.random_range(-2..table.height() as i64 + 2);
            let facing = if rng.random_bool(0.8) {
                Facing::ALL[rng.random_range(0..4)].name()
            } else {
                "UP"
            };
            format!("PLACE {},{},{}", x, y, facing)
        }
        2 | 3 | 4 => "MOVE".to_string(),
        5 => "LEFT".to_string(),
        6 => "RIGHT".to_string(),
        7 | 8 => "REPORT".to_string(),
        _ => "JUMP".to_string(),
    }
}

fn soak(table: Table, rng: &mut SmallRng, steps: usize) -> anyhow::Result<(Tally, Option<String>)> {
    let mut robot = ToyRobot::with_sink(table, toy_robot::NullSink);
    let mut tally = Tally::default();
    for step in 0..steps {
        let line = random_line(rng, &table);
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(_) => {
                tally.unknown += 1;
                continue;
            }
        };
        match robot.execute(command) {
            Outcome::Placed(_) => tally.placed += 1,
            Outcome::Rejected(_) => tally.rejected += 1,
            Outcome::Moved(_) => tally.moved += 1,
            Outcome::Blocked(_) => tally.blocked += 1,
            Outcome::Rotated(_) => tally.rotated += 1,
            Outcome::Reported(_) => tally.reports += 1,
            Outcome::NotPlaced(_) => tally.ignored += 1,
        }
        if let Some(pose) = robot.pose() {
            if !table.contains_pose(pose) {
                bail!("step {}: robot left the table at {:?} after {:?}", step, pose, line);
            }
        }
    }
    Ok((tally, robot.report()))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let table = Table::from_config(&TableConfig::new(args.width, args.height))
        .context("invalid table dimensions")?;
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());

    let mut runs = Vec::with_capacity(args.robots);
    for i in 0..args.robots {
        // robots are independent; each gets its own stream
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
        let (t, report) = soak(table, &mut rng, args.steps)?;
        runs.push(json!({
            "placed": t.placed,
            "rejected": t.rejected,
            "moved": t.moved,
            "blocked": t.blocked,
            "rotated": t.rotated,
            "reports": t.reports,
            "ignored": t.ignored,
            "unknown": t.unknown,
            "final": report,
        }));
    }

    let result = json!({
        "seed": seed,
        "steps": args.steps,
        "table": { "board_width": table.width(), "board_height": table.height() },
        "robots": runs,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
