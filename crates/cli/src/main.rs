use clap::{Parser, Subcommand};
use stark_resolver_domain::{CliOverrides, Config, Resolution, ResolutionSubject};
use tracing::{debug, info};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "stark-resolver")]
#[command(version)]
#[command(about = "Stark Resolver - Starknet naming client with offchain resolving")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Starknet JSON-RPC endpoint
    #[arg(long, global = true)]
    rpc_url: Option<String>,

    /// Naming contract address
    #[arg(long, value_name = "ADDRESS", global = true)]
    contract: Option<String>,

    /// Parent domain subjects must belong to
    #[arg(long, global = true)]
    parent_domain: Option<String>,

    /// Offchain server timeout in milliseconds
    #[arg(long, value_name = "MS", global = true)]
    offchain_timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a stark name to an address
    Resolve {
        domain: String,

        /// Read a record field instead of the main address; without a value
        /// the configured default field is used
        #[arg(long, num_args = 0..=1, value_name = "NAME")]
        field: Option<Option<String>>,
    },

    /// Find the stark name of an address
    Reverse { address: String },

    /// Print the effective configuration
    Config {
        /// Write it to this file instead
        #[arg(long, value_name = "FILE")]
        output: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        rpc_url: cli.rpc_url.clone(),
        naming_contract: cli.contract.clone(),
        parent_domain: cli.parent_domain.clone(),
        offchain_timeout_ms: cli.offchain_timeout,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    debug!(
        config_path = ?cli.config.clone().or_else(Config::get_config_path),
        rpc_url = %config.network.rpc_url,
        contract = %config.network.naming_contract,
        "Stark Resolver v{}",
        env!("CARGO_PKG_VERSION")
    );

    let adapters = di::Adapters::new(&config)?;
    let use_cases = di::UseCases::new(&adapters);

    let resolution = match cli.command {
        Command::Resolve { domain, field } => {
            let subject = ResolutionSubject::domain(&domain, &config.resolution.parent_domain)?;
            match field {
                Some(field) => {
                    let field = field.unwrap_or_else(|| config.resolution.default_field.clone());
                    use_cases
                        .resolve_domain
                        .execute_field(&subject.to_string(), &field)
                        .await?
                }
                None => use_cases.resolve_domain.execute(&subject.to_string()).await?,
            }
        }
        Command::Reverse { address } => {
            let address = ResolutionSubject::parse_address(&address)?;
            use_cases.resolve_address.execute(address).await?
        }
        Command::Config { output } => return print_config(&config, output.as_deref()),
    };

    report(&resolution);
    Ok(())
}

fn report(resolution: &Resolution) {
    info!(source = %resolution.source, "Resolved");
    println!("{}", resolution.value);
}

fn print_config(config: &Config, output: Option<&str>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            config.save(path)?;
            info!(path = %path, "Configuration written");
        }
        None => print!("{}", config.to_toml_string()?),
    }
    Ok(())
}
