use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use chrono::{DateTime, Utc};
use citizen_ai::config::AppConfig;
use citizen_ai::error::AppError;
use citizen_ai::suggestions::{
    seed, suggestion_router, EngineConfig, SuggestionReport, SuggestionService, UserId,
};
use citizen_ai::telemetry;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Citizen Services Portal",
    about = "Serve the demo citizen-services portal or generate smart suggestions from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Generate smart suggestions for a seeded demo user
    Suggest(SuggestArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct SuggestArgs {
    /// Demo user to evaluate
    #[arg(long)]
    user: u32,
    /// Evaluation instant (RFC 3339, defaults to now)
    #[arg(long, value_parser = parse_instant)]
    now: Option<DateTime<Utc>>,
    /// Print the full scoring breakdown alongside the suggestions
    #[arg(long)]
    explain: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Suggest(args) => run_suggest(args),
    }
}

fn parse_instant(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|err| format!("failed to parse '{raw}' as an RFC 3339 timestamp ({err})"))
}

fn demo_service() -> SuggestionService<citizen_ai::suggestions::InMemorySnapshotStore> {
    let store = seed::demo_store(Utc::now());
    SuggestionService::new(Arc::new(store), EngineConfig::default())
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

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let service = Arc::new(demo_service());

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(suggestion_router(service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "citizen services portal ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_suggest(args: SuggestArgs) -> Result<(), AppError> {
    let SuggestArgs { user, now, explain } = args;

    let now = now.unwrap_or_else(Utc::now);
    let service = demo_service();
    let report = service.report_for(UserId(user), now)?;

    render_report(user, now, &report, explain);
    Ok(())
}

fn render_report(user: u32, now: DateTime<Utc>, report: &SuggestionReport, explain: bool) {
    println!("Smart suggestions for demo user {user} (evaluated {now})");

    if report.suggestions.is_empty() {
        println!("\nNo suggestions right now.");
    } else {
        println!("\nSuggestions");
        for suggestion in &report.suggestions {
            let remaining = match &suggestion.expiry_date {
                Some(label) => format!(" ({label} remaining)"),
                None => String::new(),
            };
            println!(
                "- [{}] {}: {}{}",
                suggestion.priority.label(),
                suggestion.title,
                suggestion.description,
                remaining
            );
        }
    }

    if explain {
        println!("\nDocuments analyzed");
        if report.documents_analyzed.is_empty() {
            println!("- none on file");
        }
        for analysis in &report.documents_analyzed {
            println!(
                "- {}: {} days to expiry, importance {:?}, score {} (expiry {} + importance {} + history {}), threshold {}, notify {}",
                analysis.document_type,
                analysis.days_to_expiry,
                analysis.document_importance,
                analysis.score,
                analysis.score_breakdown.expiry_score,
                analysis.score_breakdown.importance_score,
                analysis.score_breakdown.history_score,
                analysis.threshold,
                analysis.should_notify
            );
        }

        println!("\nRules applied");
        for rule in &report.rules_applied {
            println!("- {rule}");
        }

        println!(
            "\nTotals: {} suggestion(s) ({} high / {} medium / {} low)",
            report.total_suggestions,
            report.by_priority.high,
            report.by_priority.medium,
            report.by_priority.low
        );
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
