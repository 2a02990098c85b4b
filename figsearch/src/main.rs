use clap::Parser;
use clap::error::ErrorKind;
use figsearch::cli::{Cli, USAGE};
use figsearch::commands::{self, EXIT_USAGE};
use figsearch::logging;
use std::io::{self, Write};
use std::process::ExitCode;

fn usage(code: u8) -> ExitCode {
    print!("{}", USAGE);
    let _ = io::stdout().flush();
    ExitCode::from(code)
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayVersion => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        // `--help` after an operation
        Err(e) if e.kind() == ErrorKind::DisplayHelp => return usage(commands::EXIT_OK),
        Err(_) => return usage(EXIT_USAGE),
    };

    logging::init_logging(cli.verbose);

    if cli.help {
        return usage(commands::EXIT_OK);
    }
    let Some(command) = cli.command else {
        return usage(EXIT_USAGE);
    };

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    match commands::execute(&command, &mut out, &mut err) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            let _ = writeln!(err, "error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
