#![cfg(feature = "std")]

//! Line-oriented command shell around [`ToyRobot`].
//!
//! Input comes from any `BufRead` (stdin, a script file, a byte slice in
//! tests) and responses go to any `Write`. Each line is trimmed and
//! uppercased before parsing. `EXIT` ends the session and `HELP` prints the
//! command list; everything else goes to the robot.

use std::io::{BufRead, Write};

use anyhow::Context;

use crate::command::Command;
use crate::diagnostics::{DiagnosticSink, Event};
use crate::render::render_grid;
use crate::robot::{Outcome, ToyRobot};
use crate::table::Table;

pub const EXIT_KEYWORD: &str = "EXIT";
pub const HELP_KEYWORD: &str = "HELP";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsoleOptions {
    /// Print `> ` before reading each line.
    pub prompt: bool,
    /// Print the grid view after every successful report.
    pub show_grid: bool,
}

/// Counters for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Non-blank lines handed to the robot, unknown ones included.
    pub commands: usize,
    pub unknown: usize,
    pub rejected: usize,
    pub reports: usize,
    /// Session ended on `EXIT` rather than end of input.
    pub exited: bool,
}

/// Whether the shell should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Console<D: DiagnosticSink> {
    robot: ToyRobot<D>,
    options: ConsoleOptions,
    summary: SessionSummary,
}

impl<D: DiagnosticSink> Console<D> {
    pub fn new(robot: ToyRobot<D>, options: ConsoleOptions) -> Self {
        Self {
            robot,
            options,
            summary: SessionSummary::default(),
        }
    }

    pub fn robot(&self) -> &ToyRobot<D> {
        &self.robot
    }

    pub fn into_robot(self) -> ToyRobot<D> {
        self.robot
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// Handle a single raw input line.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> anyhow::Result<Flow> {
        let line = line.trim().to_uppercase();
        if line.is_empty() {
            return Ok(Flow::Continue);
        }
        if line == EXIT_KEYWORD {
            self.summary.exited = true;
            return Ok(Flow::Exit);
        }
        if line == HELP_KEYWORD {
            print_help(out, self.robot.table())?;
            return Ok(Flow::Continue);
        }

        self.summary.commands += 1;
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(unknown) => {
                self.summary.unknown += 1;
                self.robot
                    .sink_mut()
                    .record(&Event::UnknownCommand(unknown.0));
                return Ok(Flow::Continue);
            }
        };

        match self.robot.execute(command) {
            Outcome::Rejected(e) => {
                self.summary.rejected += 1;
                writeln!(out, "{}", e)?;
            }
            Outcome::Reported(report) => {
                self.summary.reports += 1;
                writeln!(out, "{}", report)?;
                if self.options.show_grid {
                    writeln!(out, "{}", render_grid(self.robot.pose(), self.robot.table()))?;
                }
            }
            Outcome::Placed(_)
            | Outcome::Moved(_)
            | Outcome::Blocked(_)
            | Outcome::Rotated(_)
            | Outcome::NotPlaced(_) => {}
        }
        Ok(Flow::Continue)
    }

    /// Read lines until `EXIT` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> anyhow::Result<SessionSummary> {
        let mut line = String::new();
        loop {
            if self.options.prompt {
                write!(out, "> ")?;
                out.flush()?;
            }
            line.clear();
            let read = input
                .read_line(&mut line)
                .context("failed to read command")?;
            if read == 0 {
                break;
            }
            if self.handle_line(&line, &mut out)? == Flow::Exit {
                break;
            }
        }
        out.flush()?;
        Ok(self.summary)
    }
}

/// Welcome text shown at the start of an interactive session.
pub fn print_banner<W: Write>(out: &mut W, table: &Table) -> std::io::Result<()> {
    writeln!(out, "Toy Robot Simulator")?;
    writeln!(
        out,
        "A robot on a {} x {} table. It must stay on the table and will not move off an edge.",
        table.width(),
        table.height()
    )?;
    writeln!(out)?;
    print_help(out, table)?;
    writeln!(
        out,
        "Enter a command (PLACE X,Y,F, MOVE, LEFT, RIGHT, REPORT), HELP, or EXIT to quit:"
    )
}

/// List of commands with the table's coordinate ranges.
pub fn print_help<W: Write>(out: &mut W, table: &Table) -> std::io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  PLACE X,Y,F  put the robot at (X, Y) facing F")?;
    writeln!(out, "               X: 0 to {}, Y: 0 to {}", table.max_x(), table.max_y())?;
    writeln!(out, "               F: NORTH, EAST, SOUTH or WEST")?;
    writeln!(out, "  MOVE         one step forward, ignored at the edge")?;
    writeln!(out, "  LEFT         turn 90 degrees counterclockwise")?;
    writeln!(out, "  RIGHT        turn 90 degrees clockwise")?;
    writeln!(out, "  REPORT       print X,Y and facing")?;
    writeln!(out, "  EXIT         quit")
}
