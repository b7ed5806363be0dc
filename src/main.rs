use std::io::{self, BufRead, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;

use logline::cli::Cli;
use logline::config::Config;
use logline::render_into;

fn main() -> ExitCode {
    reset_sigpipe();

    let cli = Cli::parse();
    let (mut config, color_mode) = match Config::from_cli(&cli) {
        Ok(merged) => merged,
        Err(e) => {
            eprintln!("logline: {e}");
            return ExitCode::from(1);
        }
    };
    config.no_color = !color_mode.colors_enabled();

    let stdin = io::stdin();
    let stdout = io::stdout();
    match pump(stdin.lock(), BufWriter::new(stdout.lock()), &config) {
        Ok(()) => ExitCode::SUCCESS,
        // A downstream pager or `head` closing early is a normal way to stop.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("logline: {e}");
            ExitCode::from(2)
        }
    }
}

/// Render every input line to the sink. Lines that do not decode as one JSON
/// object pass through unchanged; lines that are not valid UTF-8 are skipped.
fn pump(input: impl BufRead, mut sink: impl Write, config: &Config) -> io::Result<()> {
    let mut rendered = String::new();
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => continue,
            Err(e) => return Err(e),
        };

        rendered.clear();
        if render_into(line.as_bytes(), config, &mut rendered).is_err() {
            rendered.push_str(&line);
            rendered.push('\n');
        }
        sink.write_all(rendered.as_bytes())?;
    }
    sink.flush()
}

/// Reset SIGPIPE to the default (terminate) disposition. Rust ignores SIGPIPE
/// at startup, which would surface every closed pipe as a `BrokenPipe` error
/// instead of the silent exit the shell expects from a filter.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
