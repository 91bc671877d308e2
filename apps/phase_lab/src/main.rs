use anyhow::Context;
use clap::{Parser, Subcommand};
use phasewheel::aspects::all_aspects;
use phasewheel::phases::all_phases;
use phasewheel::quota::{GenerationLedger, QuotaPolicy};
use phasewheel::report::{build_prompt, ReportRequest};
use phasewheel::resolve;
use phasewheel_config::PhasewheelSettings;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Settings file (otherwise configs/phasewheel.toml, then defaults).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a degree separation into phase and aspect.
    Resolve {
        #[arg(allow_hyphen_values = true)]
        degrees: f64,
    },
    /// Print the phase table.
    Phases,
    /// Print the aspect table.
    Aspects,
    /// Print the chat-completion payload for a synthesis report.
    Prompt {
        #[arg(long)]
        pair: String,
        #[arg(long)]
        sign1: String,
        #[arg(long)]
        sign2: String,
        /// Degree separation between the two planets (0-360).
        #[arg(long)]
        degrees: Option<f64>,
    },
    /// Inspect or update the monthly generation allowance.
    Quota {
        #[command(subcommand)]
        action: QuotaAction,
    },
}

#[derive(Subcommand, Debug)]
enum QuotaAction {
    Status {
        #[arg(long)]
        pair: String,
    },
    Record {
        #[arg(long)]
        pair: String,
    },
    Unlock {
        #[arg(long)]
        pair: String,
        #[arg(long)]
        password: String,
    },
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn quota_policy(settings: &PhasewheelSettings) -> QuotaPolicy {
    QuotaPolicy {
        max_free_generations: settings.quota.max_free_generations,
        unlock_duration: chrono::Duration::minutes(i64::from(settings.quota.unlock_minutes)),
        unlock_password: settings.quota.unlock_password(),
    }
}

fn run_quota(action: QuotaAction, settings: &PhasewheelSettings) -> anyhow::Result<()> {
    let path = &settings.quota.ledger_path;
    let policy = quota_policy(settings);
    let now = chrono::Utc::now();
    let mut ledger = GenerationLedger::load(path)
        .with_context(|| format!("Failed to load ledger {}", path.display()))?;

    let status = match action {
        QuotaAction::Status { pair } => ledger.status(&pair, &policy, now),
        QuotaAction::Record { pair } => ledger.record_generation(&pair, &policy, now)?,
        QuotaAction::Unlock { pair, password } => {
            let until = ledger.unlock(&pair, &password, &policy, now)?;
            log::info!("{} unlocked until {}", pair, until.to_rfc3339());
            ledger.status(&pair, &policy, now)
        }
    };

    ledger
        .save(path)
        .with_context(|| format!("Failed to save ledger {}", path.display()))?;
    print_json(&status)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => phasewheel_config::load_settings_from(path)?,
        None => phasewheel_config::load_settings()?,
    };
    match &settings.source {
        Some(path) => log::debug!("Settings loaded from {}", path.display()),
        None => log::debug!("Using default settings"),
    }

    match args.command {
        Command::Resolve { degrees } => {
            if !degrees.is_finite() {
                anyhow::bail!("Degree separation must be a finite number, got {}", degrees);
            }
            print_json(&resolve(degrees))
        }
        Command::Phases => print_json(&all_phases()),
        Command::Aspects => print_json(&all_aspects()),
        Command::Prompt {
            pair,
            sign1,
            sign2,
            degrees,
        } => {
            let mut request = ReportRequest::new(&pair, &sign1, &sign2);
            request.degree_separation = degrees;
            let report = request.validate()?;
            let payload = build_prompt(&report).into_chat_request(&settings.report.model);
            print_json(&payload)
        }
        Command::Quota { action } => run_quota(action, &settings),
    }
}
