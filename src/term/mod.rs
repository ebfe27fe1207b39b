/*!
# Terminal Frontend

Runs one program file on the controlling terminal.

*/

mod console;

pub use console::TerminalConsole;

use crate::host::{Host, LocalFiles};
use crate::mach::Runtime;
use crate::{error, lang::Error};
use ansi_term::Style;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;

#[derive(Parser, Debug)]
#[command(name = "basic", version, about = "Runs a label-based BASIC program")]
struct Args {
    /// Program source file
    file: PathBuf,

    /// Diagnostics written to stderr
    #[arg(long, value_enum, default_value_t = Level::Warn)]
    log_level: Level,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Level {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> LevelFilter {
        match level {
            Level::Off => LevelFilter::Off,
            Level::Error => LevelFilter::Error,
            Level::Warn => LevelFilter::Warn,
            Level::Info => LevelFilter::Info,
            Level::Debug => LevelFilter::Debug,
            Level::Trace => LevelFilter::Trace,
        }
    }
}

pub fn main() {
    let args = Args::parse();
    if let Err(error) = SimpleLogger::new().with_level(args.log_level.into()).init() {
        eprintln!("{}", error);
    }
    if let Err(error) = run(&args.file) {
        eprintln!("{}", Style::new().bold().paint(format!("?{}", error)));
        std::process::exit(1);
    }
}

fn run(file: &Path) -> Result<(), Error> {
    let source = load(file)?;
    let base = file
        .canonicalize()
        .ok()
        .and_then(|path| path.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    let host = Host::new(Box::new(TerminalConsole::new()))
        .with_files(Box::new(LocalFiles::new(&base)));
    let mut runtime = Runtime::new(host);
    runtime.set_base_path(&base);
    let interrupted = runtime.interrupt_handle();
    if let Err(e) = ctrlc::set_handler(move || interrupted.store(true, Ordering::SeqCst)) {
        log::warn!("Ctrl-C handler not installed: {}", e);
    }
    runtime.execute(&source)
}

fn load(file: &Path) -> Result<String, Error> {
    match std::fs::read_to_string(file) {
        Ok(source) => Ok(source),
        Err(e) => {
            let msg = format!("{}: {}", file.display(), e);
            match e.kind() {
                ErrorKind::NotFound => Err(error!(FileNotFound; msg)),
                _ => Err(error!(InternalError; msg)),
            }
        }
    }
}
