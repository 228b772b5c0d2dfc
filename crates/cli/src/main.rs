use anyhow::Result;
use clap::Parser;
use monero_rpc_cli::{args::CliArgs, commands, config::CliConfig, LOG_TARGET};
use monero_rpc_client::RpcProxy;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config = match CliConfig::from_args(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.logger.level);

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(target: LOG_TARGET, error = %format!("{err:#}"), "rpc command failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs, config: &CliConfig) -> Result<()> {
    let client = RpcProxy::with_timeout(&config.rpc.url, config.timeout())?;
    debug!(
        target: LOG_TARGET,
        url = %client.session().rpc_url(),
        timeout_secs = config.rpc.timeout_secs,
        "rpc session ready"
    );

    let output = commands::execute(&client, &args.command)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn init_tracing(level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,{LOG_TARGET}={level}")));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
