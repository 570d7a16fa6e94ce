#[cfg(not(feature = "cli"))]
compile_error!("The `wtx` binary requires the `cli` feature. Build with `--features cli`.");

use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::Write;
use std::process;

use wtu::cli;
use wtu::cli::app::{Cli, ColorMode, Commands};
use wtu::WtError;

fn main() {
    let cli = Cli::parse();

    match cli.color {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {} // colored auto-detects tty
    }

    let writer_result: Result<Box<dyn Write>, WtError> = match &cli.output {
        Some(path) => File::create(path)
            .map(|f| Box::new(f) as Box<dyn Write>)
            .map_err(|e| WtError::Io(format!("Cannot create {}: {}", path, e))),
        None => Ok(Box::new(std::io::stdout()) as Box<dyn Write>),
    };

    let mut writer = match writer_result {
        Ok(w) => w,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Explore {
            wt,
            home,
            ksdecode,
            timestamp,
        } => {
            let stdin = std::io::stdin();
            cli::explore::execute(
                &cli::explore::ExploreOptions {
                    wt,
                    home,
                    ksdecode,
                    timestamp,
                },
                &mut stdin.lock(),
                &mut writer,
            )
        }

        Commands::Catalog {
            wt,
            home,
            timestamp,
            json,
        } => cli::catalog::execute(
            &cli::catalog::CatalogOptions {
                wt,
                home,
                timestamp,
                json,
            },
            &mut writer,
        ),

        Commands::Dump {
            wt,
            home,
            ident,
            timestamp,
            raw,
        } => cli::dump::execute(
            &cli::dump::DumpOptions {
                wt,
                home,
                ident,
                timestamp,
                raw,
            },
            &mut writer,
        ),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "wtx", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red(), e);
        process::exit(1);
    }
}
