//! VidSynth validation gateway binary.
//!
//! Runs the HTTP validation service by default. Two auxiliary modes:
//! - `--health-check` probes a running instance's `/healthz` endpoint and
//!   exits 0/1 (container health probe).
//! - `--evaluate <corpus.json>` runs the offline LLM-judge evaluation over a
//!   corpus file and reports whether the model cleared the promotion quota.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use vidsynth::embedding::EncoderConfig;
use vidsynth::validator::ValidatorConfig;
use vidsynth::{
    BiasMonitor, Config, CorpusEvaluator, HandlerState, QualityJudge, RatePacer, SummaryValidator,
    create_router_with_state,
};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--health-check") {
        return run_health_check().await;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return ExitCode::FAILURE;
    }

    if let Some(pos) = args.iter().position(|a| a == "--evaluate") {
        let Some(path) = args.get(pos + 1) else {
            error!("--evaluate requires a corpus file path");
            return ExitCode::FAILURE;
        };
        return run_corpus_evaluation(&config, PathBuf::from(path)).await;
    }

    run_server(config).await
}

async fn run_server(config: Config) -> ExitCode {
    let bias_monitor = if config.enable_bias_check {
        let encoder_config = match &config.model_path {
            Some(path) => EncoderConfig::new(path),
            None => {
                warn!("No model path configured, using deterministic stub embeddings");
                EncoderConfig::stub()
            }
        };
        match BiasMonitor::new(encoder_config, config.bias_threshold) {
            Ok(monitor) => Some(Arc::new(monitor)),
            Err(e) => {
                error!(error = %e, "Failed to initialize bias monitor");
                return ExitCode::FAILURE;
            }
        }
    } else {
        info!("Bias checking disabled by configuration");
        None
    };

    let embedder_mode = match (&bias_monitor, &config.model_path) {
        (None, _) => "disabled",
        (Some(_), Some(_)) => "model",
        (Some(_), None) => "stub",
    };

    let validator = Arc::new(SummaryValidator::new(
        ValidatorConfig::from(&config),
        bias_monitor.clone(),
    ));
    let app = create_router_with_state(HandlerState::new(validator, bias_monitor, embedder_mode));

    let addr = config.socket_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %addr, error = %e, "Failed to bind listener");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %addr, embedder = embedder_mode, "VidSynth validation gateway listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn run_corpus_evaluation(config: &Config, path: PathBuf) -> ExitCode {
    let judge = QualityJudge::new(config.judge_model.clone());
    let evaluator = CorpusEvaluator::new(judge, config.judge_threshold, config.corpus_pass_quota);
    let mut pacer = RatePacer::new(Duration::from_secs(config.judge_delay_secs));

    match evaluator.evaluate(&path, &mut pacer).await {
        Ok(report) => {
            info!(
                checks = report.checks,
                passed = report.passed,
                quota = report.quota,
                "Corpus evaluation complete"
            );
            if report.promoted() {
                info!("Model cleared the promotion quota");
                ExitCode::SUCCESS
            } else {
                warn!("Model did not clear the promotion quota");
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            error!(error = %e, "Corpus evaluation failed");
            ExitCode::FAILURE
        }
    }
}

/// Probes a running instance for container health checks.
async fn run_health_check() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(_) => return ExitCode::FAILURE,
    };

    let url = format!("http://127.0.0.1:{}/healthz", config.port);
    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
    {
        Ok(client) => client,
        Err(_) => return ExitCode::FAILURE,
    };

    match client.get(&url).send().await {
        Ok(response) if response.status().is_success() => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            error!("Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
