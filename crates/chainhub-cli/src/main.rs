//! Chain wholesale catalog CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;

use chainhub_catalog::SiteProfile;
use chainhub_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use chainhub_cli::commands::{
    open_catalog, run_doctor, run_inquire, run_pricing, run_quote, run_search, run_show,
};
use chainhub_cli::logging::{LogConfig, LogFormat, init_logging};
use chainhub_cli::summary::{
    print_ack, print_detail, print_pricing, print_profile, print_quote_ack, print_report,
    print_search,
};
use serde::Serialize;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }
    match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let profile = SiteProfile::default();
    let catalog_path = cli.catalog.as_deref();
    match &cli.command {
        Command::Search(args) => {
            let result = run_search(open_catalog(catalog_path)?, args);
            if args.json {
                print_json(&result)?;
            } else {
                print_search(&result);
            }
        }
        Command::Show(args) => {
            let result = run_show(open_catalog(catalog_path)?, &args.sku, &profile)?;
            if args.json {
                print_json(&result)?;
            } else {
                print_detail(&result);
            }
        }
        Command::Pricing(args) => {
            let result = run_pricing(args.quantity, &profile);
            if args.json {
                print_json(&result)?;
            } else {
                print_pricing(&result);
            }
        }
        Command::Inquire(args) => {
            let catalog = open_catalog(catalog_path)?;
            let ack = run_inquire(&catalog, args, cli.log_contact)?;
            if args.json {
                print_json(&ack)?;
            } else {
                print_ack(&ack);
            }
        }
        Command::Quote(args) => {
            let catalog = open_catalog(catalog_path)?;
            let ack = run_quote(&catalog, args, cli.log_contact)?;
            if args.json {
                print_json(&ack)?;
            } else {
                print_quote_ack(&ack);
            }
        }
        Command::Info(args) => {
            if args.json {
                print_json(&profile)?;
            } else {
                print_profile(&profile);
            }
        }
        Command::Doctor(args) => {
            let report = run_doctor(&open_catalog(catalog_path)?);
            if args.json {
                print_json(&report)?;
            } else {
                print_report(&report);
            }
            if report.has_problems() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let mut config = LogConfig::default()
        .with_level_filter(level_filter)
        .with_format(format)
        .with_log_file(cli.log_file.clone());
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
