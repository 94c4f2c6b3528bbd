mod cli;

use anyhow::Context;
use cli::{Args, Command};
use owo_colors::OwoColorize;
use runtime_inventory::adapters::outbound::console::StderrProgressReporter;
use runtime_inventory::adapters::outbound::filesystem::{JBossModuleSystem, StdoutPresenter};
use runtime_inventory::adapters::outbound::formatters::CycloneDxFormatter;
use runtime_inventory::adapters::outbound::host::SystemHostIdentity;
use runtime_inventory::adapters::outbound::queue::ChannelQueue;
use runtime_inventory::adapters::outbound::runtime::ClasspathProbe;
use runtime_inventory::application::dto::SbomRequest;
use runtime_inventory::application::factories::{PresenterFactory, PresenterType};
use runtime_inventory::application::use_cases::{
    GenerateSbomUseCase, IdentifyWorkloadUseCase, TrackLoadEventsUseCase,
};
use runtime_inventory::config::{self, AgentArgs, ConfigFile};
use runtime_inventory::inventory::policies::MarkerRegistry;
use runtime_inventory::inventory::services::{ArchiveIdentityResolver, LoadEventDeduplicator};
use runtime_inventory::logging::{init_logging, DEFAULT_LEVEL};
use runtime_inventory::ports::outbound::{OutputPresenter, SbomFormatter};
use runtime_inventory::shared::error::ExitCode;
use runtime_inventory::shared::Result;
use std::io::BufRead;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    let exit_code = match run(args) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            report_error(&e);
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

fn report_error(e: &anyhow::Error) {
    eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
    eprintln!("{}", e);

    let mut source = e.source();
    while let Some(err) = source {
        eprintln!("\n{} {}", "Caused by:".yellow(), err);
        source = err.source();
    }

    eprintln!();
}

fn run(args: Args) -> Result<()> {
    let mut config = load_config(args.global.config.as_ref())?;
    if let Some(raw) = args.global.agent_args.as_deref() {
        config.apply_agent_args(AgentArgs::parse(raw)?);
    }

    let level = args
        .log_level()
        .map(str::to_string)
        .or_else(|| config.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string());
    init_logging(&level, args.global.log_json);

    match args.command {
        Command::Scan { archives, output } => run_scan(archives, output),
        Command::Fingerprint {
            classpath,
            properties,
        } => run_fingerprint(&config, classpath, properties),
        Command::Watch => run_watch(&config),
    }
}

fn load_config(explicit: Option<&PathBuf>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => config::load_config_from_path(path),
        None => {
            let cwd = std::env::current_dir().context("Failed to read the current directory")?;
            Ok(config::discover_config(&cwd)?.unwrap_or_default())
        }
    }
}

fn run_scan(archives: Vec<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let use_case = GenerateSbomUseCase::new(
        ArchiveIdentityResolver::new(),
        SystemHostIdentity::new(),
        StderrProgressReporter::new(),
    );
    let response = use_case.execute(SbomRequest::new(archives))?;

    eprintln!("📝 Generating CycloneDX JSON format output...");
    let formatted = CycloneDxFormatter::new().format(&response.document)?;

    let presenter = PresenterFactory::create(PresenterType::from(output));
    presenter.present(&formatted)
}

fn run_fingerprint(
    config: &ConfigFile,
    classpath: Vec<PathBuf>,
    properties: Vec<(String, String)>,
) -> Result<()> {
    let classpath = if classpath.is_empty() {
        config.classpath.clone().unwrap_or_default()
    } else {
        classpath
    };
    let mut merged = config.properties.clone().unwrap_or_default();
    merged.extend(properties);

    let probe = ClasspathProbe::new(classpath, merged).with_module_system(JBossModuleSystem::new());
    let use_case = IdentifyWorkloadUseCase::new(MarkerRegistry::standard(config.poll_settings()));
    let report = use_case.execute(&probe, &config.deployment_context());

    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    StdoutPresenter::new().present(&format!("{}\n", json))
}

fn run_watch(config: &ConfigFile) -> Result<()> {
    let origins = read_origins(std::io::stdin().lock())?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;
    let lines = runtime.block_on(watch(origins, config.queue_capacity()))?;

    let output: String = lines.into_iter().map(|line| line + "\n").collect();
    StdoutPresenter::new().present(&output)
}

/// One origin per line; a blank line is a code unit without an origin.
fn read_origins<R: BufRead>(reader: R) -> Result<Vec<Option<String>>> {
    reader
        .lines()
        .map(|line| {
            let line = line.context("Failed to read load events from stdin")?;
            let origin = line.trim();
            Ok((!origin.is_empty()).then(|| origin.to_string()))
        })
        .collect()
}

async fn watch(origins: Vec<Option<String>>, queue_capacity: usize) -> Result<Vec<String>> {
    let (queue, mut receiver) = ChannelQueue::with_capacity(queue_capacity);
    let deduplicator = Arc::new(LoadEventDeduplicator::new(
        ArchiveIdentityResolver::new(),
        queue,
    ));

    let consumer = tokio::spawn(async move {
        let mut records = Vec::new();
        while let Some(record) = receiver.recv().await {
            records.push(record);
        }
        records
    });

    let use_case = TrackLoadEventsUseCase::new(Arc::clone(&deduplicator));
    let dispatched = use_case.execute(origins).await?;
    info!(
        events = dispatched,
        origins = deduplicator.seen().origin_count(),
        archives = deduplicator.seen().hash_count(),
        "load events processed"
    );

    // Dropping the last producer closes the queue and ends the consumer.
    drop(use_case);
    drop(deduplicator);
    let records = consumer.await.context("Record consumer failed")?;

    records
        .iter()
        .map(|record| serde_json::to_string(record).context("Failed to serialize record"))
        .collect()
}
