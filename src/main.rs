//! Sharpline EV — Command Line Entry Point
//!
//! Wiring sequence:
//! 1. Parse CLI arguments
//! 2. Load sharpline.toml (or built-in defaults) + validate
//! 3. Init tracing (stderr, plain or JSON)
//! 4. Open the bankroll store (file, or in-memory with --ephemeral)
//! 5. Run the requested calculator and print its result

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use sharpline_ev::adapters::persistence::{FileBankrollStore, InMemoryBankrollStore};
use sharpline_ev::config::{self, AppSection};
use sharpline_ev::domain::kelly::{KellyResult, calculate_kelly};
use sharpline_ev::domain::odds::{BetSide, OddsQuote, SharpMarket};
use sharpline_ev::domain::teaser::{PushPolicy, TeaserLeg, TeaserResult};
use sharpline_ev::ports::BankrollStore;
use sharpline_ev::usecases::{
    BankrollManager, TeaserEvaluator, TeaserRequest, WagerRecommendation, WagerRequest,
    analyze_wager, implied_probabilities,
};

#[derive(Debug, Parser)]
#[command(name = "sharpline", version, about = "Odds conversion, EV, Kelly sizing and Wong teasers")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, env = "SHARPLINE_CONFIG", global = true)]
    config: Option<String>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Keep the bankroll in memory for this run only.
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Express one price as American, decimal and implied probability.
    Convert(ConvertArgs),

    /// Implied probabilities of a sharp two-way market.
    Implied {
        #[arg(long, allow_negative_numbers = true)]
        favorite: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        underdog: Option<f64>,
    },

    /// EV and recommended stake for an offered price against a sharp line.
    Ev {
        /// Sharp book favorite price.
        #[arg(long, allow_negative_numbers = true)]
        favorite: Option<f64>,
        /// Sharp book underdog price.
        #[arg(long, allow_negative_numbers = true)]
        underdog: Option<f64>,
        /// Price offered by the book you are betting into.
        #[arg(long, allow_negative_numbers = true)]
        offered: Option<f64>,
        #[arg(long, default_value = "favorite")]
        side: BetSide,
        /// Bankroll to size with; saved for later runs.
        #[arg(long)]
        bankroll: Option<f64>,
    },

    /// Capped half-Kelly stake for a known win probability.
    Kelly {
        #[arg(long)]
        probability: f64,
        #[arg(long, allow_negative_numbers = true)]
        odds: f64,
        #[arg(long)]
        bankroll: Option<f64>,
    },

    /// Price a Wong teaser.
    Teaser {
        /// Price of the whole teaser.
        #[arg(long, allow_negative_numbers = true)]
        odds: Option<f64>,
        /// LOCATION:LINE:ODDS, e.g. home:-2.5:-110. Repeat per leg.
        #[arg(long = "leg", required = true)]
        legs: Vec<TeaserLeg>,
        /// loss, void or push. Defaults to the configured policy.
        #[arg(long)]
        push_policy: Option<PushPolicy>,
        #[arg(long)]
        bankroll: Option<f64>,
    },

    /// Show or change the saved bankroll.
    #[command(subcommand)]
    Bankroll(BankrollAction),
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
struct ConvertArgs {
    #[arg(long, allow_negative_numbers = true)]
    american: Option<f64>,
    #[arg(long)]
    decimal: Option<f64>,
    #[arg(long)]
    probability: Option<f64>,
}

#[derive(Debug, Subcommand)]
enum BankrollAction {
    Show,
    Set { amount: f64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── 1. Load configuration ───────────────────────────────
    let config = config::loader::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    // ── 2. Initialize logging ───────────────────────────────
    init_tracing(&config.app);

    info!(
        name = %config.app.name,
        version = env!("CARGO_PKG_VERSION"),
        ephemeral = cli.ephemeral,
        "Starting"
    );

    // ── 3. Bankroll store ───────────────────────────────────
    let store: Arc<dyn BankrollStore> = if cli.ephemeral {
        Arc::new(InMemoryBankrollStore::new())
    } else {
        Arc::new(
            FileBankrollStore::new(&config.bankroll.data_dir, &config.bankroll.file_name)
                .await
                .context("Failed to open bankroll store")?,
        )
    };
    let bankroll = BankrollManager::new(store);
    if !bankroll.is_healthy().await {
        warn!("Bankroll store is not readable; continuing without it");
    }

    // ── 4. Run the calculator ───────────────────────────────
    let out = Output { json: cli.json };

    match cli.command {
        Command::Convert(args) => {
            let quote = match (args.american, args.decimal, args.probability) {
                (Some(american), _, _) => OddsQuote::from_american(american),
                (_, Some(decimal), _) => OddsQuote::from_decimal(decimal),
                (_, _, Some(prob)) => OddsQuote::from_implied_prob(prob),
                _ => anyhow::bail!("one of --american, --decimal or --probability is required"),
            };
            out.emit(&quote, print_quote)?;
        }
        Command::Implied { favorite, underdog } => {
            let market = implied_probabilities(favorite, underdog)?;
            out.emit(&market, print_market)?;
        }
        Command::Ev {
            favorite,
            underdog,
            offered,
            side,
            bankroll: explicit,
        } => {
            let request = WagerRequest {
                sharp_favorite: favorite,
                sharp_underdog: underdog,
                offered_odds: offered,
                side,
                bankroll: bankroll.resolve(explicit).await,
            };
            let recommendation = analyze_wager(&request)?;
            out.emit(&recommendation, print_wager)?;
        }
        Command::Kelly {
            probability,
            odds,
            bankroll: explicit,
        } => {
            let kelly = calculate_kelly(probability, odds, bankroll.resolve(explicit).await);
            out.emit(&kelly, print_kelly)?;
        }
        Command::Teaser {
            odds,
            legs,
            push_policy,
            bankroll: explicit,
        } => {
            let evaluator = TeaserEvaluator::new(&config.teaser);
            let request = TeaserRequest {
                legs,
                push_policy,
                teaser_odds: odds,
                bankroll: bankroll.resolve(explicit).await,
            };
            let result = evaluator.evaluate(&request)?;
            out.emit(&result, print_teaser)?;
        }
        Command::Bankroll(BankrollAction::Show) => {
            let current = bankroll.current().await;
            out.emit(&serde_json::json!({ "bankroll": current }), |_| match current {
                Some(amount) => println!("Bankroll: ${}", money(amount)),
                None => println!("No bankroll saved"),
            })?;
        }
        Command::Bankroll(BankrollAction::Set { amount }) => {
            anyhow::ensure!(amount.is_finite(), "bankroll must be a number");
            bankroll.update(amount).await;
            out.emit(&serde_json::json!({ "bankroll": amount }), |_| {
                println!("Bankroll set to ${}", money(amount));
            })?;
        }
    }

    Ok(())
}

/// Structured logs on stderr so stdout only carries results.
fn init_tracing(app: &AppSection) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&app.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if app.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}

struct Output {
    json: bool,
}

impl Output {
    fn emit<T: Serialize>(&self, value: &T, human: impl FnOnce(&T)) -> Result<()> {
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(value).context("Failed to serialize result")?
            );
        } else {
            human(value);
        }
        Ok(())
    }
}

/// Two-decimal currency amount. Values outside `Decimal` range print as floats.
fn money(amount: f64) -> String {
    Decimal::from_f64(amount).map_or_else(
        || format!("{amount:.2}"),
        |d| format!("{:.2}", d.round_dp(2)),
    )
}

fn percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

fn print_quote(quote: &OddsQuote) {
    println!("American:    {:+.2}", quote.american);
    println!("Decimal:     {:.4}", quote.decimal);
    println!("Implied:     {}", percent(quote.implied_prob));
}

fn print_market(market: &SharpMarket) {
    println!("Favorite {:+}: {}", market.favorite_odds, percent(market.favorite_prob));
    println!("Underdog {:+}: {}", market.underdog_odds, percent(market.underdog_prob));
}

fn print_kelly(kelly: &KellyResult) {
    println!("Kelly:       {:.2}%", kelly.percent);
    println!("Amount:      ${}", money(kelly.amount));
}

fn print_wager(rec: &WagerRecommendation) {
    println!("EV:            {:.2}%", rec.ev.ev_percent);
    println!("True prob:     {}", percent(rec.ev.true_prob));
    println!("Kelly:         {:.2}%", rec.kelly.percent);
    println!("Optimal wager: ${}", money(rec.wager));
    println!("Potential win: ${}", money(rec.potential_win));
}

fn print_teaser(result: &TeaserResult) {
    for (i, leg) in result.legs.iter().enumerate() {
        println!(
            "Leg {} ({} {:+} @ {:+}): win {} push {}",
            i + 1,
            leg.leg.location,
            leg.leg.line,
            leg.leg.offered_odds,
            percent(leg.implied_prob),
            percent(leg.push_prob),
        );
    }
    println!("Push policy:   {}", result.push_policy);
    println!("Teaser EV:     {:.2}%", result.ev.ev_percent);
    println!("Win prob:      {}", percent(result.combined_prob));
    println!("Kelly:         {:.2}%", result.kelly.percent);
    println!("Wager:         ${}", money(result.wager));
}
