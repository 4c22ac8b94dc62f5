// ============================================================================
// roman
// Interactive converter; command-line arguments run as one-shot commands
// ============================================================================

use roman_twelfths::shell::{Reply, Shell, ShellConfig};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = if args.is_empty() {
        interactive(ShellConfig::interactive())
    } else {
        one_shot(&args)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "terminal I/O failed");
            ExitCode::FAILURE
        },
    }
}

fn one_shot(args: &[String]) -> io::Result<()> {
    let mut shell = Shell::new(ShellConfig::one_shot());
    let mut stdout = io::stdout().lock();

    for arg in args {
        match shell.execute(arg) {
            Reply::Output(text) => writeln!(stdout, "{}", text)?,
            Reply::Nothing => {},
            Reply::Quit => break,
        }
    }
    Ok(())
}

fn interactive(config: ShellConfig) -> io::Result<()> {
    if let Err(reason) = config.validate() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, reason));
    }

    let prompt = config.prompt.clone();
    let mut shell = Shell::new(config);
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut line = String::new();

    loop {
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            return Ok(());
        }

        match shell.execute(&line) {
            Reply::Output(text) => writeln!(stdout, "{}", text)?,
            Reply::Nothing => {},
            Reply::Quit => return Ok(()),
        }
    }
}
