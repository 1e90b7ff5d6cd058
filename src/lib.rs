#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod command;
mod common;
mod config;
pub mod diagnostics;
mod facing;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod render;
mod robot;
mod table;
mod validation;
#[cfg(feature = "std")]
pub mod console;

pub use command::*;
pub use common::*;
pub use config::*;
pub use diagnostics::{DiagnosticSink, Event, LogSink, NullSink, RecordingSink};
pub use facing::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use render::*;
pub use robot::*;
pub use table::*;
pub use validation::*;
#[cfg(feature = "std")]
pub use console::{print_banner, print_help, Console, ConsoleOptions, Flow, SessionSummary};
