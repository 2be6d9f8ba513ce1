//! CLI entrypoint for RICA
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use rica_application::{RelayUpdateUseCase, ResolveInquiryUseCase};
use rica_infrastructure::{ConfigLoader, GroqGateway, HttpInquiryClient, Settings, TelegramApi};
use rica_presentation::{
    AppState, AssistantRepl, Cli, ReplMode, StatusFormatter, StatusInfo, server,
};
use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut settings = ConfigLoader::load(cli.config.as_ref())?;

    // CLI flags override config
    if let Some(host) = &cli.host {
        settings.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        settings.server.port = port;
    }
    if cli.debug {
        settings.log.level = "debug".to_string();
    } else if let Some(level) = cli.log_level {
        settings.log.level = level.as_filter().to_string();
    }

    let _log_guard = init_tracing(&settings)?;

    if cli.status {
        println!("{}", StatusFormatter::format(&status_info(&settings)));
        return Ok(());
    }

    if cli.test_audio {
        return test_audio(&settings).await;
    }

    if cli.serve {
        return serve(settings).await;
    }

    let mode = if cli.voice {
        ReplMode::Voice
    } else if cli.text {
        ReplMode::Text
    } else {
        ReplMode::Interactive
    };
    converse(settings, mode, cli.debug).await
}

/// Initialize the tracing subscriber; returns the appender guard when
/// logging to a file (dropping it flushes the writer at exit).
fn init_tracing(
    settings: &Settings,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let filter = EnvFilter::new(&settings.log.level);

    if let Some(path) = &settings.log.file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .init();
        Ok(Some(guard))
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
        Ok(None)
    }
}

// === Dependency Injection ===

fn build_resolver(settings: &Settings) -> Result<Arc<ResolveInquiryUseCase>> {
    let api_key = settings.require_api_key()?;
    let gateway = Arc::new(GroqGateway::new(&settings.model, api_key)?);
    Ok(Arc::new(ResolveInquiryUseCase::new(
        gateway,
        settings.resolver.clone(),
    )))
}

#[cfg(feature = "voice")]
fn build_voice(
    settings: &Settings,
    resolver: Arc<ResolveInquiryUseCase>,
) -> Result<Arc<rica_application::VoiceTurnUseCase>> {
    use rica_infrastructure::{CommandSynthesizer, GroqWhisperRecognizer};

    let api_key = settings.require_api_key()?;
    let recognizer = Arc::new(GroqWhisperRecognizer::new(
        &settings.audio,
        &settings.model,
        api_key,
    )?);
    let synthesizer = Arc::new(CommandSynthesizer::new());
    Ok(Arc::new(rica_application::VoiceTurnUseCase::new(
        recognizer,
        synthesizer,
        resolver,
    )))
}

// === Modes ===

async fn serve(settings: Settings) -> Result<()> {
    let resolver = build_resolver(&settings)?;
    let mut state = AppState::new(resolver);

    // The Telegram bridge is optional: without a bot token the API still
    // serves, just without the webhook routes.
    if let Ok(token) = settings.require_bot_token() {
        let client = Arc::new(HttpInquiryClient::new(
            &settings.telegram.ask_endpoint,
            Duration::from_secs(settings.telegram.timeout_secs),
        )?);
        let messenger = Arc::new(TelegramApi::new(token)?);
        state = state.with_relay(Arc::new(RelayUpdateUseCase::new(client, messenger)));
    }

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .with_context(|| {
            format!(
                "Invalid server address {}:{}",
                settings.server.host, settings.server.port
            )
        })?;

    info!("Starting RICA API v{}", env!("CARGO_PKG_VERSION"));
    server::run(state, addr).await.context("HTTP server failed")
}

async fn converse(settings: Settings, mode: ReplMode, debug: bool) -> Result<()> {
    let resolver = build_resolver(&settings)?;
    #[allow(unused_mut)]
    let mut repl = AssistantRepl::new(resolver.clone(), status_info(&settings)).with_debug(debug);

    #[cfg(feature = "voice")]
    match build_voice(&settings, resolver) {
        Ok(voice) => repl = repl.with_voice(voice),
        Err(e) if mode == ReplMode::Voice => return Err(e),
        Err(e) => tracing::warn!("Voice support unavailable: {}", e),
    }

    #[cfg(not(feature = "voice"))]
    if mode == ReplMode::Voice {
        anyhow::bail!("This build does not include voice support");
    }

    repl.run(mode).await.context("Conversation loop failed")
}

#[cfg(feature = "voice")]
async fn test_audio(settings: &Settings) -> Result<()> {
    use rica_application::SpeechSynthesizer;
    use rica_infrastructure::CommandSynthesizer;
    use rica_infrastructure::audio::capture::{self, CaptureSettings};

    println!("Testing Audio System...");
    println!("{}", "=".repeat(30));

    let devices = rica_infrastructure::audio::input_device_names();
    if devices.is_empty() {
        println!("  input devices:  FAIL (none found)");
    } else {
        println!("  input devices:  PASS ({})", devices.join(", "));
    }

    let mut capture_settings = CaptureSettings::from(&settings.audio);
    capture_settings.duration = Duration::from_secs(1);
    let capture_result =
        tokio::task::spawn_blocking(move || capture::record(&capture_settings)).await?;
    match capture_result {
        Ok(samples) => println!("  capture:        PASS ({} samples)", samples.len()),
        Err(e) => println!("  capture:        FAIL ({})", e),
    }

    match CommandSynthesizer::new()
        .speak("Audio system test successful")
        .await
    {
        Ok(()) => println!("  text-to-speech: PASS"),
        Err(e) => println!("  text-to-speech: FAIL ({})", e),
    }

    Ok(())
}

#[cfg(not(feature = "voice"))]
async fn test_audio(_settings: &Settings) -> Result<()> {
    anyhow::bail!("This build does not include voice support")
}

fn status_info(settings: &Settings) -> StatusInfo {
    StatusInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: settings.model.model.clone(),
        host: settings.server.host.clone(),
        port: settings.server.port,
        default_inquirer: settings.resolver.default_inquirer.clone(),
        review_enabled: settings.resolver.enable_review,
        log_level: settings.log.level.clone(),
        sample_rate: settings.audio.sample_rate,
        channels: settings.audio.channels,
        voice_available: cfg!(feature = "voice"),
        input_devices: input_devices(),
    }
}

fn input_devices() -> Vec<String> {
    #[cfg(feature = "voice")]
    {
        rica_infrastructure::audio::input_device_names()
    }
    #[cfg(not(feature = "voice"))]
    {
        Vec::new()
    }
}
