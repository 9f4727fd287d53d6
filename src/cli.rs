// ABOUTME: Command-line arguments for the greeter binary.
// ABOUTME: Flags override the GREETER_* environment configuration.

use std::path::PathBuf;

use clap::Parser;
use greeter_server::GreeterConfig;

#[derive(Debug, Parser)]
#[command(name = "greeter", version)]
#[command(about = "Serve /hello and /healthz, optionally reversing names first")]
pub struct Cli {
    /// Logical listener name (overrides GREETER_LISTENER)
    #[arg(long)]
    pub listener: Option<String>,

    /// host:port to bind, e.g. 0.0.0.0:8080 or localhost:12345 (overrides GREETER_LOCAL_ADDRESS)
    #[arg(long)]
    pub address: Option<String>,

    /// Reverse names before greeting (overrides GREETER_REVERSE)
    #[arg(long)]
    pub reverse: bool,

    /// Do not register /healthz (overrides GREETER_HEALTHZ)
    #[arg(long)]
    pub no_healthz: bool,

    /// Load environment variables from this file instead of ./.env
    #[arg(long)]
    pub env_file: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides on top of the environment configuration.
    pub fn apply(&self, config: &mut GreeterConfig) {
        if let Some(name) = &self.listener {
            config.listener.name = name.clone();
        }
        if let Some(address) = &self.address {
            config.listener.local_address = Some(address.clone());
        }
        if self.reverse {
            config.options.reverse = true;
        }
        if self.no_healthz {
            config.options.healthz = false;
        }
    }
}
