//! CLI administration tool for the clinic dashboard.
//!
//! Runs status changes, currency checks and database diagnostics without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List the currency catalog
//! cargo run --bin clinic-admin -- currencies
//!
//! # Format an amount the way invoice pages do
//! cargo run --bin clinic-admin -- format -- -1234.5 EGP
//!
//! # Change an appointment status
//! cargo run --bin clinic-admin -- appointment status 42 completed
//!
//! # Mark an invoice as paid
//! cargo run --bin clinic-admin -- invoice pay 7
//!
//! # View statistics
//! cargo run --bin clinic-admin -- stats
//!
//! # Check database connection
//! cargo run --bin clinic-admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (see `clinic_dashboard::config`). With `REDIS_URL`
//! set, status changes invalidate the shared view cache; otherwise running
//! servers pick the change up when their cached pages expire.

use clinic_dashboard::application::services::{
    DashboardService, RevalidationService, StatusService,
};
use clinic_dashboard::config::{self, Config};
use clinic_dashboard::domain::entities::AppointmentStatus;
use clinic_dashboard::domain::outcome::ActionOutcome;
use clinic_dashboard::domain::repositories::Repositories;
use clinic_dashboard::infrastructure::cache::{MemoryViewCache, RedisViewCache, ViewCache};
use clinic_dashboard::infrastructure::persistence::pg_repositories;
use clinic_dashboard::server::connect_database;
use clinic_dashboard::utils::currency::{currencies, format_currency};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

/// CLI tool for managing the clinic dashboard.
#[derive(Parser)]
#[command(name = "clinic-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// List supported currencies
    Currencies,

    /// Format an amount in a currency
    Format {
        /// Amount, e.g. 1234.5 or -5
        #[arg(allow_hyphen_values = true)]
        amount: f64,

        /// ISO 4217 code, case-insensitive
        code: String,
    },

    /// Appointment operations
    Appointment {
        #[command(subcommand)]
        action: AppointmentAction,
    },

    /// Invoice operations
    Invoice {
        #[command(subcommand)]
        action: InvoiceAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum AppointmentAction {
    /// Set the status of an appointment
    Status {
        id: i64,

        /// scheduled, completed, cancelled or no_show
        status: AppointmentStatus,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum InvoiceAction {
    /// Mark an invoice as paid
    Pay {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Currencies => list_currencies(),
        Commands::Format { amount, code } => format_amount(amount, &code)?,
        command => {
            let config = config::load_from_env()?;
            let pool = connect_database(&config).await?;
            run_with_database(command, &config, pool).await?;
        }
    }

    Ok(())
}

async fn run_with_database(command: Commands, config: &Config, pool: PgPool) -> Result<()> {
    match command {
        Commands::Appointment {
            action: AppointmentAction::Status { id, status, yes },
        } => {
            let service = status_service(config, &pool).await;
            set_appointment_status(&service, id, status, yes).await?;
        }
        Commands::Invoice {
            action: InvoiceAction::Pay { id, yes },
        } => {
            let service = status_service(config, &pool).await;
            pay_invoice(&service, id, yes).await?;
        }
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Currencies | Commands::Format { .. } => {}
    }

    Ok(())
}

/// Prints the catalog in declaration order.
fn list_currencies() {
    println!("{}", "💱 Currencies".bright_blue().bold());
    println!();
    println!(
        "  {:<6} {:<8} {}",
        "Code".bright_white().bold(),
        "Symbol".bright_white().bold(),
        "Name".bright_white().bold()
    );
    println!("  {}", "─".repeat(40).bright_black());

    for currency in currencies() {
        println!(
            "  {:<6} {:<8} {}",
            currency.code.cyan(),
            currency.symbol,
            currency.name
        );
    }
    println!();
}

fn format_amount(amount: f64, code: &str) -> Result<()> {
    let formatted = format_currency(amount, code)?;
    println!("{}", formatted.bright_green().bold());
    Ok(())
}

/// Builds a status service whose invalidations reach the shared Redis
/// cache when one is configured.
async fn status_service(config: &Config, pool: &PgPool) -> StatusService {
    let view_cache: Arc<dyn ViewCache> = match &config.redis_url {
        Some(url) => match RedisViewCache::connect(url, config.view_cache_ttl_seconds).await {
            Ok(redis) => Arc::new(redis),
            Err(e) => {
                println!(
                    "{}",
                    format!("⚠️  Redis unavailable ({}), cached pages expire on their own", e)
                        .yellow()
                );
                Arc::new(MemoryViewCache::new(Duration::from_secs(1)))
            }
        },
        None => {
            println!(
                "{}",
                "⚠️  REDIS_URL not set, cached pages expire on their own".yellow()
            );
            Arc::new(MemoryViewCache::new(Duration::from_secs(1)))
        }
    };

    let Repositories {
        appointments,
        invoices,
        ..
    } = pg_repositories(Arc::new(pool.clone()));

    StatusService::new(appointments, invoices, RevalidationService::new(view_cache))
}

async fn set_appointment_status(
    service: &StatusService,
    id: i64,
    status: AppointmentStatus,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "📅 Appointment status".bright_blue().bold());
    println!();
    println!("  Appointment: {}", id.to_string().cyan());
    println!("  New status:  {}", status.label().bright_yellow());
    println!();

    if !skip_confirm && !confirm("Apply this change?")? {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    report(service.update_appointment_status(id, status).await)
}

async fn pay_invoice(service: &StatusService, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🧾 Mark invoice as paid".bright_blue().bold());
    println!();
    println!("  Invoice: {}", id.to_string().cyan());
    println!();

    if !skip_confirm && !confirm("Mark as paid?")? {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    report(service.mark_invoice_as_paid(id).await)
}

fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}

fn report(outcome: ActionOutcome) -> Result<()> {
    match outcome {
        ActionOutcome::Success => {
            println!("{}", "✅ Done".green().bold());
            Ok(())
        }
        ActionOutcome::Failure { message } => {
            println!("{}", format!("❌ {}", message).red().bold());
            anyhow::bail!(message)
        }
    }
}

/// Displays patient, appointment and invoice counts.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let summary = DashboardService::new(pg_repositories(Arc::new(pool.clone())))
        .summary()
        .await?;

    println!(
        "  Patients:          {}",
        summary.patients.to_string().bright_green().bold()
    );
    println!(
        "  Appointments:      {}",
        summary.appointments.to_string().bright_green().bold()
    );
    for entry in &summary.appointments_by_status {
        println!(
            "    {:<16} {}",
            entry.status.label(),
            entry.count.to_string().bright_white()
        );
    }
    println!(
        "  Unpaid invoices:   {}",
        summary.unpaid_invoices.to_string().bright_yellow().bold()
    );
    println!(
        "  Overdue invoices:  {}",
        summary.overdue_invoices.to_string().bright_red().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let migrations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
