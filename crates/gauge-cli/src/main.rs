use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use gauge_cli::cli::{Cli, Commands};
use gauge_cli::commands;
use gauge_cli::config::{self, LogFormat};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config_path = config::config_path(cli.config.as_deref())?;
    init_tracing(config::peek_log_format(&config_path));
    let config = config::load_config(&config_path)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Heatmap(args) => commands::heatmap(args, &config, cli.strict, &mut out),
        Commands::Export(args) => commands::export(args, &config, cli.strict),
        Commands::Report(args) => commands::report(args, &config, cli.strict, &mut out),
        Commands::Periods(args) => commands::periods(args, cli.strict, &mut out),
        Commands::Compare(args) => commands::compare(args, cli.strict, &mut out),
        Commands::Validate(args) => commands::validate(args, &mut out),
        Commands::Config(command) => commands::config_command(*command, &config_path, &mut out),
    }
}

fn init_tracing(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
