use chrono::Utc;
use clap::Parser;

use check_fr24feed::{evaluate, fetch_monitor, monitor_url, safe_run};
use check_fr24feed::{CheckOutcome, MonitorReport, State, Thresholds};

/// This plugin lets you track if a fr24feeder is connected.
#[derive(Parser, Debug)]
#[command(name = "check_fr24feed", version, about)]
struct Cli {
    /// Host IP address of your feeder.
    #[arg(long)]
    host: String,

    /// Monitor port of your feeder.
    #[arg(long, default_value_t = 8754)]
    port: u16,

    /// Warning threshold in seconds since the last connection update.
    #[arg(short = 'w', long, default_value_t = 600)]
    warning: i64,

    /// Critical threshold in seconds since the last connection update.
    #[arg(short = 'c', long, default_value_t = 3600)]
    critical: i64,

    /// Always return OK.
    #[arg(long)]
    always_ok: bool,
}

fn main() {
    env_logger::init();

    let cli = parse_cli_or_exit();
    safe_run(|| run_check(&cli))
}

/// Plugin convention wants bad arguments reported as UNKNOWN (exit 3), while
/// `--help` and `--version` remain a clean exit 0.
fn parse_cli_or_exit() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                State::Unknown.exit_code()
            } else {
                0
            };
            let _ = err.print();
            std::process::exit(code)
        }
    }
}

fn run_check(cli: &Cli) -> Result<CheckOutcome, anyhow::Error> {
    let url = monitor_url(&cli.host, cli.port);

    let body = fetch_monitor(&url)?;
    let report = MonitorReport::from_json(&body)?;
    let status = report.status_at(Utc::now())?;
    log::debug!("feeder status: {:?}", status);

    let thresholds = Thresholds {
        warning: cli.warning,
        critical: cli.critical,
    };

    Ok(evaluate(&status, &thresholds, cli.always_ok))
}
