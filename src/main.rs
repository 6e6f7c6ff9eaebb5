use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payment_contracts::application::checkout::CheckoutService;
use payment_contracts::config::GatewayConfig;
use payment_contracts::domain::ports::OrderPaymentsHandle;
use payment_contracts::infrastructure::in_memory::InMemoryOrderPayments;
use payment_contracts::infrastructure::stub_gateway::StubGateway;
use payment_contracts::interfaces::csv::checkout_writer::CheckoutWriter;
use payment_contracts::interfaces::csv::order_reader::OrderReader;
use payment_contracts::interfaces::webhook::event_reader::EventReader;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input orders CSV file
    input: PathBuf,

    /// JSON-lines file of webhook bodies to replay after checkout
    #[arg(long)]
    events: Option<PathBuf>,

    /// Base URL for redirect links minted by the stub gateway
    #[arg(long)]
    redirect_base: Option<String>,

    /// Prefix for provider references minted by the stub gateway
    #[arg(long)]
    ref_prefix: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let mut config = GatewayConfig::default();
    if let Some(redirect_base) = cli.redirect_base {
        config = config.with_redirect_base(redirect_base);
    }
    if let Some(ref_prefix) = cli.ref_prefix {
        config = config.with_ref_prefix(ref_prefix);
    }

    let payments = InMemoryOrderPayments::new();
    let handle: OrderPaymentsHandle = std::sync::Arc::new(payments.clone());
    let gateway = StubGateway::new(config, handle.clone());
    let service = CheckoutService::new(Box::new(gateway), handle);

    // Ctrl-C stops the run at the next order or event.
    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_signal.cancel();
        }
    });

    // Open sessions
    let file = File::open(cli.input).into_diagnostic()?;
    let sessions = service
        .start_checkouts(OrderReader::new(file).orders(), &cancel)
        .await;

    // Replay webhooks
    if let Some(events) = cli.events {
        let file = File::open(events).into_diagnostic()?;
        let handled = service
            .receive_webhooks(EventReader::new(BufReader::new(file)).requests(), &cancel)
            .await;
        tracing::debug!(handled, "webhook replay finished");
    }

    let stdout = io::stdout();
    let mut writer = CheckoutWriter::new(stdout.lock());
    writer
        .write_checkouts(payments.records().await, &sessions)
        .into_diagnostic()?;

    Ok(())
}
