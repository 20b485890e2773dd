use clap::{Parser, Subcommand, ValueEnum};
use dotenv::dotenv;
use fraud_monitor_client::{
    models::{AlertFeedback, AnalystDecision},
    services::{self, DEFAULT_INGESTION_LIMIT, DEFAULT_PAGE, DEFAULT_PAGE_SIZE},
    Config, Gateway, GatewayResult,
};
use serde::Serialize;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "fraud-monitor", version, about = "Query the fraud-monitoring API")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Dashboard counters
    Kpis,
    /// Recent risk time series
    RiskStats,
    /// Pending alerts
    Alerts,
    /// Resolve the alert of a transaction
    Resolve {
        transaction_id: String,
        #[arg(value_enum)]
        decision: DecisionArg,
        #[arg(long)]
        reason: Option<String>,
    },
    /// Paginated transaction listing
    Transactions {
        #[arg(long, default_value_t = DEFAULT_PAGE)]
        page: u32,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: u32,
    },
    /// One transaction by id
    Transaction { id: String },
    /// Model signals for a transaction
    Score { transaction_id: String },
    /// Re-score a transaction and store the result
    Persist { transaction_id: String },
    /// Risk-score histogram
    Distribution,
    /// Analyst feedback on an alert
    Feedback {
        alert_id: Uuid,
        #[arg(long)]
        fraud: bool,
        #[arg(long)]
        analyst: String,
    },
    /// Live decision mix
    OnlineStats,
    /// Offline evaluation report
    OfflineMetrics,
    /// Batch-ingest transactions into the API
    Ingest {
        #[arg(long, default_value_t = DEFAULT_INGESTION_LIMIT)]
        limit: u32,
    },
    /// API health
    Health,
}

#[derive(Clone, Copy, ValueEnum)]
enum DecisionArg {
    Approve,
    ConfirmFraud,
}

impl From<DecisionArg> for AnalystDecision {
    fn from(arg: DecisionArg) -> Self {
        match arg {
            DecisionArg::Approve => AnalystDecision::Approve,
            DecisionArg::ConfirmFraud => AnalystDecision::ConfirmFraud,
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> GatewayResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(gateway: &Gateway, command: Command) -> GatewayResult<()> {
    match command {
        Command::Kpis => print_json(&services::fetch_dashboard_kpis(gateway).await?),
        Command::RiskStats => print_json(&services::fetch_risk_stats(gateway).await?),
        Command::Alerts => print_json(&services::fetch_alerts(gateway).await?),
        Command::Resolve {
            transaction_id,
            decision,
            reason,
        } => print_json(
            &services::resolve_alert(gateway, &transaction_id, decision.into(), reason.as_deref()).await?,
        ),
        Command::Transactions { page, page_size } => {
            print_json(&services::fetch_transactions(gateway, page, page_size).await?)
        }
        Command::Transaction { id } => {
            print_json(&services::fetch_transaction_by_id(gateway, &id, None).await?)
        }
        Command::Score { transaction_id } => {
            print_json(&services::fetch_model_signals(gateway, &transaction_id, None).await?)
        }
        Command::Persist { transaction_id } => {
            print_json(&services::persist_score(gateway, &transaction_id).await?)
        }
        Command::Distribution => print_json(&services::fetch_score_distribution(gateway).await?),
        Command::Feedback {
            alert_id,
            fraud,
            analyst,
        } => {
            let feedback = AlertFeedback::new(alert_id, fraud, analyst);
            print_json(&services::submit_feedback(gateway, &feedback).await?)
        }
        Command::OnlineStats => print_json(&services::fetch_online_stats(gateway).await?),
        Command::OfflineMetrics => print_json(&services::fetch_offline_metrics(gateway).await?),
        Command::Ingest { limit } => print_json(&services::start_ingestion(gateway, limit).await?),
        Command::Health => print_json(&services::check_health(gateway).await?),
    }
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = Cli::parse();

    // Sem API_BASE_URL não há gateway
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ {}", e);
            std::process::exit(2);
        }
    };

    let gateway = Gateway::new(&config);

    if let Err(e) = run(&gateway, cli.command).await {
        log::error!("❌ Request failed: {}", e);
        std::process::exit(1);
    }
}
