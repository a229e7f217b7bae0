//! rootswitch TUI entry point.
//!
//! # Usage
//!
//! ```bash
//! # Log in after a short delay, logs go to rootswitch-tui.log
//! rootswitch-tui
//!
//! # Every login fails; the login screen shows the error banner
//! rootswitch-tui --reject-login --log-level debug
//!
//! # Require a shared password
//! rootswitch-tui --password hunter2
//! ```

use std::{fs::File, path::PathBuf, sync::Mutex, time::Duration};

use clap::Parser;
use rootswitch_app::{DEFAULT_NAMESPACE, Routes, Runtime, RuntimeConfig, StalePolicy};
use rootswitch_tui::{
    BannerListener, DemoAuthConfig, DemoAuthenticator, Navigator, TerminalDriver,
    TerminalRenderer,
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// rootswitch terminal shell
#[derive(Parser, Debug)]
#[command(name = "rootswitch-tui")]
#[command(about = "Terminal shell that switches from a login screen to a tabbed layout")]
#[command(version)]
struct Args {
    /// Prefix for registered screen IDs
    #[arg(long, default_value = DEFAULT_NAMESPACE)]
    namespace: String,

    /// Simulated login latency in milliseconds
    #[arg(long, default_value = "300")]
    login_delay_ms: u64,

    /// Reject every login attempt
    #[arg(long)]
    reject_login: bool,

    /// Password every login must use (any password when omitted)
    #[arg(long)]
    password: Option<String>,

    /// Drop root changes from lifecycle tasks older than the newest one
    /// already committed
    #[arg(long)]
    discard_stale: bool,

    /// File to write logs to
    #[arg(long, default_value = "rootswitch-tui.log")]
    log_file: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    let log_file = File::create(&args.log_file)?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(log_file)).with_ansi(false))
        .with(filter)
        .init();

    let config = RuntimeConfig {
        namespace: args.namespace,
        stale_policy: if args.discard_stale {
            StalePolicy::DiscardStale
        } else {
            StalePolicy::Preserve
        },
    };
    let auth = DemoAuthenticator::new(DemoAuthConfig {
        login_delay: Duration::from_millis(args.login_delay_ms),
        reject_login: args.reject_login,
        password: args.password,
    });

    tracing::info!(
        namespace = %config.namespace,
        policy = ?config.stale_policy,
        login_delay = ?auth.config().login_delay,
        reject_login = auth.config().reject_login,
        password_required = auth.config().password.is_some(),
        "rootswitch starting"
    );

    let navigator = Navigator::shared();
    let routes = Routes::new(config.namespace.clone());
    let renderer = TerminalRenderer::new(&routes, navigator.clone())?;
    let driver = TerminalDriver::new(navigator.clone())?;

    let mut runtime = Runtime::new(driver, renderer, auth, config);
    runtime.subscribe(BannerListener::new(navigator));

    let result = runtime.run().await;
    tracing::info!("rootswitch stopped");

    Ok(result?)
}
