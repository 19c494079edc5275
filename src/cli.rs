use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::api::{log_audit, run_http_server, validate_input};
use crate::config::AppConfig;
use crate::core::{ALERT_LIBRARY, AnalysisResult, FinancialInput, compute_audit};
use crate::error::AppError;
use crate::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "wealth-audit",
    about = "Deterministic wealth accumulation audit for household finance questionnaires",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Audit one questionnaire and print the result as JSON
    Audit(AuditArgs),
    /// List the alert library in evaluation order
    Rules,
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Questionnaire JSON file; reads stdin when omitted or "-"
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Pretty-print the result
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(cli: Cli) -> Result<(), AppError> {
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Audit(args) => run_audit(args),
        Command::Rules => {
            print!("{}", render_rules());
            Ok(())
        }
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let addr = config.server.socket_addr()?;
    run_http_server(addr).await?;
    Ok(())
}

fn run_audit(args: AuditArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let raw = read_input(args.input, io::stdin().lock())?;
    let result = audit_document(&raw)?;
    log_audit(&result);

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{rendered}");
    Ok(())
}

/// Reads the document from `path`, or from `stdin` when no path or "-" is given.
fn read_input<R: Read>(path: Option<PathBuf>, mut stdin: R) -> Result<String, AppError> {
    match path {
        Some(path) if path.as_os_str() != "-" => Ok(fs::read_to_string(path)?),
        _ => {
            let mut raw = String::new();
            stdin.read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

/// Parses, validates and audits one questionnaire document.
pub fn audit_document(raw: &str) -> Result<AnalysisResult, AppError> {
    let mut input: FinancialInput = serde_json::from_str(raw)?;
    validate_input(&mut input).map_err(AppError::InvalidInput)?;
    Ok(compute_audit(&input))
}

pub fn render_rules() -> String {
    ALERT_LIBRARY
        .iter()
        .map(|alert| {
            format!(
                "{:<22} {:<8} {:>5}  {:<13} {}\n",
                alert.id,
                alert.status.as_str(),
                alert.sort_score,
                alert.category.as_str(),
                alert.title
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::quiet_input;
    use crate::core::{BASELINE_ID, SNAPSHOT_ID};

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["wealth-audit"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn serve_accepts_host_and_port_overrides() {
        let cli = Cli::try_parse_from([
            "wealth-audit",
            "serve",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
                assert_eq!(args.port, Some(9000));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn audit_accepts_input_path_and_pretty_flag() {
        let cli = Cli::try_parse_from([
            "wealth-audit",
            "audit",
            "--input",
            "household.json",
            "--pretty",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Audit(args)) => {
                assert_eq!(args.input, Some(PathBuf::from("household.json")));
                assert!(args.pretty);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn audit_document_runs_engine_on_valid_json() {
        let raw = serde_json::to_string(&quiet_input()).expect("serializable input");
        let result = audit_document(&raw).expect("valid document");
        assert_eq!(
            result.compliance.presented_alert_ids,
            vec![SNAPSHOT_ID, BASELINE_ID]
        );
    }

    #[test]
    fn audit_document_reports_payload_and_validation_errors() {
        let err = audit_document("{}").expect_err("required fields missing");
        assert!(matches!(err, AppError::Payload(_)));

        let mut input = quiet_input();
        input.age = 200;
        let raw = serde_json::to_string(&input).expect("serializable input");
        let err = audit_document(&raw).expect_err("age out of range");
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn read_input_prefers_file_over_stdin() {
        let path = std::env::temp_dir().join(format!(
            "wealth-audit-input-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{"from":"file"}"#).expect("temp file written");

        let raw = read_input(Some(path.clone()), io::Cursor::new(r#"{"from":"stdin"}"#));
        fs::remove_file(&path).expect("temp file removed");
        assert_eq!(raw.expect("file readable"), r#"{"from":"file"}"#);
    }

    #[test]
    fn read_input_uses_stdin_when_path_is_dash_or_absent() {
        let stdin = r#"{"from":"stdin"}"#;
        let dash = read_input(Some(PathBuf::from("-")), io::Cursor::new(stdin))
            .expect("stdin readable");
        assert_eq!(dash, stdin);

        let absent = read_input(None, io::Cursor::new(stdin)).expect("stdin readable");
        assert_eq!(absent, stdin);
    }

    #[test]
    fn missing_input_file_is_an_io_error() {
        let path = std::env::temp_dir().join("wealth-audit-does-not-exist.json");
        let err = read_input(Some(path), io::empty()).expect_err("file is missing");
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn rules_listing_covers_the_whole_library() {
        let listing = render_rules();
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), ALERT_LIBRARY.len());
        assert!(lines[0].starts_with(SNAPSHOT_ID));
        assert!(lines[1].contains("critical"));
        assert!(lines[lines.len() - 1].starts_with(BASELINE_ID));
    }
}
