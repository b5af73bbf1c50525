use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use logsort::LogSortError;
use logsort::cli::Cli;
use logsort::config::Config;
use logsort::emit::sort_log;

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so `logsort app.log | head` exits
    // quietly instead of reporting a write error.
    reset_sigpipe();

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "logsort", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("logsort: {e}");
            return ExitCode::from(e.exit_code());
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(LogSortError::Output { source, .. }) if source.kind() == io::ErrorKind::BrokenPipe => {
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("logsort: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(config: &Config) -> Result<(), LogSortError> {
    // Input is opened first so a bad input path never creates the output file.
    let (reader, input_name): (Box<dyn BufRead>, &Path) = if config.reads_stdin() {
        let stdin: Box<dyn BufRead> = Box::new(io::stdin().lock());
        (stdin, Path::new("<stdin>"))
    } else {
        let file = File::open(&config.input).map_err(|source| LogSortError::Input {
            path: config.input.clone(),
            source,
        })?;
        let file: Box<dyn BufRead> = Box::new(BufReader::new(file));
        (file, config.input.as_path())
    };

    let (mut writer, output_name): (Box<dyn Write>, &Path) = match config.output {
        Some(ref path) => {
            let file = File::create(path).map_err(|source| LogSortError::Output {
                path: path.clone(),
                source,
            })?;
            let file: Box<dyn Write> = Box::new(BufWriter::new(file));
            (file, path.as_path())
        }
        None => {
            let stdout: Box<dyn Write> = Box::new(BufWriter::new(io::stdout().lock()));
            (stdout, Path::new("<stdout>"))
        }
    };

    let summary = sort_log(reader, input_name, &mut writer, output_name, config.order)?;

    if config.verbose {
        eprintln!(
            "logsort: {} lines, {} records, {} threads, {} preamble lines, order {}",
            summary.lines, summary.records, summary.threads, summary.preamble_lines, config.order
        );
    }

    Ok(())
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// By default, Rust ignores SIGPIPE to surface `BrokenPipe` I/O errors.
/// Restoring `SIG_DFL` lets a downstream `head` end the run quietly.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
