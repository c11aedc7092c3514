use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};

use shiplabel::config::AppConfig;
use shiplabel::constants::{DEFAULT_CONFIG_FILE, MAX_COPIES};
use shiplabel::export;
use shiplabel::logging;
use shiplabel::pipeline;
use shiplabel::sender::{SenderAddress, SenderStore, SenderUpdate};

#[derive(Parser)]
#[command(name = "shiplabel")]
#[command(about = "Turn customer address sheets into shipping-label CSVs")]
#[command(version)]
struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or edit the stored "ship from" address
    Sender {
        #[command(subcommand)]
        command: SenderCommand,
    },
    /// Clean a customer file (.xlsx, .csv, .txt) into label CSVs
    Parse {
        file: PathBuf,
        /// Directory for the output files (defaults to the configured output_dir)
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Copies of each label row
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=MAX_COPIES as i64))]
        copies: Option<u32>,
    },
    /// Conform a hand-edited label CSV: reorder columns, fill sender blanks, apply Copies
    Finalize {
        file: PathBuf,
        /// Output path (defaults to <file>_final.csv)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum SenderCommand {
    /// Print the stored sender address
    Show,
    /// Update fields of the stored sender address
    Set(SenderArgs),
}

#[derive(Args)]
struct SenderArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    company: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    street1: Option<String>,
    #[arg(long)]
    street2: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    state: Option<String>,
    #[arg(long)]
    zip: Option<String>,
    #[arg(long)]
    country: Option<String>,
}

impl From<SenderArgs> for SenderUpdate {
    fn from(args: SenderArgs) -> Self {
        SenderUpdate {
            country: args.country,
            name: args.name,
            company: args.company,
            phone: args.phone,
            street1: args.street1,
            street2: args.street2,
            city: args.city,
            zip: args.zip,
            state: args.state,
        }
    }
}

fn print_sender(sender: &SenderAddress) {
    println!("   Name:     {}", sender.name);
    println!("   Company:  {}", sender.company);
    println!("   Phone:    {}", sender.phone);
    println!("   Street 1: {}", sender.street1);
    println!("   Street 2: {}", sender.street2);
    println!("   City:     {}", sender.city);
    println!("   State:    {}", sender.state);
    println!("   Zip:      {}", sender.zip);
    println!("   Country:  {}", sender.country);
}

fn run_parse(
    config: &AppConfig,
    store: &SenderStore,
    file: PathBuf,
    output_dir: Option<PathBuf>,
    copies: Option<u32>,
) -> Result<()> {
    let span = tracing::info_span!("parse", file = %file.display());
    let _enter = span.enter();

    // The sender must exist before the input file is touched
    let sender = store
        .load()
        .context("You must first set up your sender address (shiplabel sender set ...)")?;

    let output = pipeline::run_parser(&file, &sender)
        .with_context(|| format!("Failed to parse {}", file.display()))?;
    info!(
        total = output.total_rows,
        valid = output.labels.len(),
        invalid = output.invalid.len(),
        "Pipeline finished"
    );

    println!("✅ File parsed successfully!");
    if !output.report.is_empty() {
        println!("\n⚠️  {} rows were skipped due to missing required fields.", output.invalid.len());
        println!("Missing field breakdown:");
        for line in &output.report {
            println!("   {}", line);
        }
    }

    let output_dir = output_dir.unwrap_or_else(|| config.output_dir.clone());
    let copies = copies.unwrap_or(config.default_copies);
    let summary = export::write_outputs(&output, &file, &output_dir, copies)
        .with_context(|| format!("Failed to write outputs to {}", output_dir.display()))?;

    println!("\n📊 Results for {}:", summary.input_file);
    println!("   Total rows: {}", summary.total_rows);
    println!("   Valid: {}", summary.valid_rows);
    println!("   Missing fields: {}", summary.invalid_rows);
    println!("   Labels file: {}", summary.valid_output);
    if let Some(path) = &summary.invalid_output {
        println!("   Rows needing attention: {}", path);
    }
    Ok(())
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;
    let _guard = logging::init_logging(&config.log_dir);

    let store = SenderStore::new(&config.sender_store);

    let result = match cli.command {
        Commands::Sender { command: SenderCommand::Show } => {
            let sender = store.load()?;
            println!("📦 Sender address ({}):", store.path().display());
            print_sender(&sender);
            Ok(())
        }
        Commands::Sender { command: SenderCommand::Set(args) } => {
            let mut sender = store.load_or_default()?;
            sender.apply(args.into());
            store.save(&sender)?;
            println!("✅ Sender address saved and ready to use!");
            print_sender(&sender);
            Ok(())
        }
        Commands::Parse { file, output_dir, copies } => run_parse(&config, &store, file, output_dir, copies),
        Commands::Finalize { file, output } => {
            let defaults = store.load_or_default()?;
            let output = output.unwrap_or_else(|| export::finalized_path(&file));
            let written = export::finalize_file(&file, &output, &defaults)
                .with_context(|| format!("Failed to finalize {}", file.display()))?;
            println!("✅ Wrote {} label rows to {}", written, output.display());
            Ok(())
        }
    };

    if let Err(e) = &result {
        error!("{:#}", e);
    }
    result
}
