use anyhow::Context;
use card_field_format::adapters::memory::MemoryForm;
use card_field_format::config::{CliConfig, Command};
use card_field_format::utils::error::ErrorSeverity;
use card_field_format::utils::{logger, validation::Validate};
use card_field_format::{formatter_for, FieldKind, FormBinder, FormatError, FormatterConfig};
use clap::Parser;
use serde_json::json;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

fn main() {
    let cli = CliConfig::parse();
    let loaded = load_config(&cli);

    // --verbose wins over the [logging] section
    let logging = loaded
        .as_ref()
        .ok()
        .filter(|_| !cli.verbose)
        .map(|c| (c.logging_filter(), c.json_logs()));
    match logging {
        Some((Some(filter), json)) => logger::init_with_filter(filter, json),
        Some((None, true)) => logger::init_json_logger(),
        _ => logger::init_cli_logger(cli.verbose),
    }

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(e.severity()));
        }
    };

    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli, &config) {
        match e.downcast_ref::<FormatError>() {
            Some(err) => {
                tracing::error!("❌ {:#}", e);
                eprintln!("❌ {}", err.user_friendly_message());
                eprintln!("💡 {}", err.recovery_suggestion());
                std::process::exit(exit_code(err.severity()));
            }
            None => {
                eprintln!("❌ {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

fn load_config(cli: &CliConfig) -> card_field_format::Result<FormatterConfig> {
    let config = match &cli.config {
        Some(path) => FormatterConfig::from_file(path)?,
        None => FormatterConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn run(cli: &CliConfig, config: &FormatterConfig) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::CardNumber { value } => print_one(&mut out, cli.json, FieldKind::CardNumber, value),
        Command::Cvv { value } => print_one(&mut out, cli.json, FieldKind::Cvv, value),
        Command::Stream { field } => {
            let kind = resolve_kind(config, field)?;
            tracing::info!("Formatting stdin as '{}' ({})", field, kind);

            let stdin = io::stdin();
            let mut count = 0usize;
            for line in stdin.lock().lines() {
                let line = line.map_err(FormatError::from).context("reading stdin")?;
                print_one(&mut out, cli.json, kind, &line)?;
                count += 1;
            }
            tracing::debug!(lines = count, "Stream finished");
            Ok(())
        }
        Command::Type { field, text } => {
            resolve_kind(config, field)?;

            let form = Rc::new(MemoryForm::new());
            let input = form.add_input(field);
            FormBinder::from_config(config).install(Rc::clone(&form))?;
            form.mark_ready();

            let strokes = input.type_text(text);
            if cli.json {
                let encoded = serde_json::to_string(&strokes).map_err(FormatError::from)?;
                writeln!(out, "{}", encoded).map_err(FormatError::from)?;
            } else {
                for stroke in &strokes {
                    writeln!(out, "{}", stroke.value).map_err(FormatError::from)?;
                }
            }
            Ok(())
        }
    }
}

fn resolve_kind(config: &FormatterConfig, field: &str) -> card_field_format::Result<FieldKind> {
    FormBinder::from_config(config)
        .kind_for(field)
        .ok_or_else(|| FormatError::UnknownFieldError {
            name: field.to_string(),
        })
}

fn print_one(out: &mut impl Write, as_json: bool, kind: FieldKind, raw: &str) -> anyhow::Result<()> {
    let value = formatter_for(kind).format(raw);
    if as_json {
        let line = json!({ "kind": kind, "value": value });
        writeln!(out, "{}", line).map_err(FormatError::from)?;
    } else {
        writeln!(out, "{}", value).map_err(FormatError::from)?;
    }
    Ok(())
}
