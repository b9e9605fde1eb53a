use clap::{Parser, Subcommand};
use hub3_cli::commands;
use hub3_cli::config::Settings;
use hub3_cli::error::Result;
use hub3_cli::output::{self, OutputFormat};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "hub3",
    about = "Validate and encode HUB-3 payment barcode payloads",
    version = env!("CARGO_PKG_VERSION")
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, short, global = true)]
    debug: bool,

    /// Output format (json or text)
    #[arg(long, global = true, env = "HUB3_FORMAT", default_value = "json")]
    format: String,

    /// Validation policy (default, lenient or strict)
    #[arg(long, global = true, env = "HUB3_POLICY", default_value = "default")]
    policy: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a payment record into the barcode payload
    Encode(commands::encode::EncodeArgs),
    /// Validate a payment record and list every violation
    Validate(commands::validate::ValidateArgs),
    /// Check an IBAN
    Iban(commands::iban::IbanArgs),
    /// Check an OIB
    Oib(commands::oib::OibArgs),
    /// Encode the payment barcode payload for an invoice
    Invoice(commands::invoice::InvoiceArgs),
    /// List payment models and purpose codes
    Codes {
        #[command(subcommand)]
        cmd: commands::codes::CodesCommands,
    },
    /// Convert between cents and displayed amounts
    Amount {
        #[command(subcommand)]
        cmd: commands::amount::AmountCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging to stderr; stdout carries only the result
    let level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("hub3_cli={},hub3_codec={}", level, level).into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true),
        )
        .init();

    let settings = match Settings::resolve(&cli.format, &cli.policy) {
        Ok(settings) => settings,
        Err(e) => {
            output::print_error(OutputFormat::default(), &e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&cli, settings) {
        output::print_error(settings.format, &e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, settings: Settings) -> Result<()> {
    let Settings { format, policy } = settings;
    debug!("Using validation policy {:?}", policy);

    match &cli.command {
        Commands::Encode(args) => commands::encode::handle(args, format, &policy),
        Commands::Validate(args) => commands::validate::handle(args, format, &policy),
        Commands::Iban(args) => commands::iban::handle(args, format),
        Commands::Oib(args) => commands::oib::handle(args, format),
        Commands::Invoice(args) => commands::invoice::handle(args, format, &policy),
        Commands::Codes { cmd } => commands::codes::handle(cmd, format),
        Commands::Amount { cmd } => commands::amount::handle(cmd, format),
    }
}
