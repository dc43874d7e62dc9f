use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use reckon::session::{Outcome, Session};
use tracing_subscriber::{EnvFilter, fmt};

/// reckon evaluates integer expressions with variables, `+ - * / ^` and
/// parentheses.
///
/// Without arguments it starts an interactive session on standard input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells reckon to read the lines from a file instead of the argument.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Lines to evaluate, or a file path with `--file`.
    contents: Option<String>,
}

/// Installs the log subscriber.
///
/// The filter comes from `RECKON_LOG` (for example `RECKON_LOG=reckon=debug`)
/// and defaults to `warn`. Logs go to stderr.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("RECKON_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(io::stderr).with_target(true).init();
}

/// Feeds every line to the session and prints the replies.
///
/// Stops early on `/exit`.
fn run_lines<'a>(session: &mut Session, lines: impl Iterator<Item = &'a str>) {
    for line in lines {
        match session.handle(line) {
            Outcome::Skip => {},
            Outcome::Reply(text) => println!("{text}"),
            Outcome::Exit(text) => {
                println!("{text}");
                return;
            },
        }
    }
}

fn run_interactive(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        match session.handle(&line?) {
            Outcome::Skip => {},
            Outcome::Reply(text) => writeln!(stdout, "{text}")?,
            Outcome::Exit(text) => {
                writeln!(stdout, "{text}")?;
                break;
            },
        }
        stdout.flush()?;
    }

    Ok(())
}

fn main() {
    init_tracing();
    let args = Args::parse();
    let mut session = Session::new();

    let Some(contents) = args.contents else {
        if let Err(e) = run_interactive(&mut session) {
            eprintln!("Failed to read input: {e}");
            std::process::exit(1);
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
                                         eprintln!("Failed to read the input file '{contents}'. \
                                                    Perhaps this file does not exist?");
                                         std::process::exit(1);
                                     })
    } else {
        contents
    };

    run_lines(&mut session, script.lines());
}
