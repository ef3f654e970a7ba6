//! Expensa terminal front-end.
//!
//! Each subcommand opens a session against the expense API, loads what the
//! matching page displays and prints it.

mod cli;
mod render;

use std::fmt::Write;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use expensa_client::{ApiClient, ExpenseFilter, PageData, Session, TripFilter};
use expensa_core::MonthPeriod;
use expensa_core::export::{ExportFilters, ExportRequest};
use expensa_core::page::Page;
use expensa_core::receipt::ReceiptUpload;
use expensa_shared::AppConfig;
use expensa_shared::types::{ClientId, Currency, VehicleId};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "expensa=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load().context("failed to load configuration")?;
    if let Some(base_url) = cli.api {
        config.api.base_url = base_url;
    }
    let currency: Currency = config
        .display
        .currency
        .parse()
        .map_err(anyhow::Error::msg)?;

    let api = ApiClient::new(&config.api)?;
    info!(base_url = %api.base_url(), "using expense API");

    // Health needs no reference data.
    if matches!(cli.command, Command::Health) {
        let health = api.health().await?;
        println!("{}", render::health(&health));
        return Ok(());
    }

    let session = match Session::start(api, config.display.clone()).await {
        Ok(session) => session,
        Err(err) if err.is_connectivity() => {
            warn!(error = %err, "expense API unreachable");
            anyhow::bail!("cannot reach the expense API at {}", config.api.base_url);
        }
        Err(err) => return Err(err.into()),
    };

    run(&session, cli.command, currency).await
}

async fn run(session: &Session, command: Command, currency: Currency) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    let mut out = String::new();

    match command {
        Command::Dashboard { local, month } => {
            let view = if local {
                let period = month.unwrap_or_else(|| MonthPeriod::containing(today));
                session.local_dashboard(period, today).await?
            } else {
                session.dashboard(today).await?
            };
            render::dashboard(&mut out, &view, currency)?;
        }
        Command::Expenses {
            from,
            to,
            client,
            billable,
        } => {
            let filter = ExpenseFilter {
                start_date: from,
                end_date: to,
                client_id: client.map(ClientId::new),
                billable: billable.then_some(true),
                ..ExpenseFilter::default()
            };
            let expenses = session.api().expenses(&filter).await?;
            render::expenses(&mut out, &expenses, session.reference(), currency)?;
        }
        Command::Trips { from, to, vehicle } => {
            let filter = TripFilter {
                start_date: from,
                end_date: to,
                vehicle_id: vehicle.map(VehicleId::new),
                ..TripFilter::default()
            };
            let view = session.trips_view(&filter).await?;
            render::trips(&mut out, &view, currency)?;
        }
        Command::Clients => {
            if let PageData::Clients(clients) = session.navigate(Page::Clients, today).await? {
                render::clients(&mut out, &clients)?;
            }
        }
        Command::Vehicles => {
            if let PageData::Vehicles(vehicles) = session.navigate(Page::Vehicles, today).await? {
                render::vehicles(&mut out, &vehicles, currency)?;
            }
        }
        Command::Monthly { year, local } => {
            let rows = if local {
                session.local_yearly_series(year).await?
            } else {
                session.yearly_series(year).await?
            };
            render::monthly(&mut out, &rows, currency)?;
        }
        Command::Scan { file } => {
            let bytes = tokio::fs::read(&file)
                .await
                .with_context(|| format!("cannot read {}", file.display()))?;
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let upload = ReceiptUpload::new(name, bytes)?;
            let prefill = session.scan_receipt(&upload).await?;
            render::prefill(&mut out, &prefill, currency)?;
        }
        Command::Export {
            kind,
            from,
            to,
            client,
            out: path,
        } => {
            let request = ExportRequest::new(
                kind,
                ExportFilters {
                    start_date: from,
                    end_date: to,
                    client_id: client.map(ClientId::new),
                },
            );
            let (file_name, bytes) = session.export(&request, today).await?;
            let path = path.unwrap_or_else(|| file_name.into());
            tokio::fs::write(&path, &bytes)
                .await
                .with_context(|| format!("cannot write {}", path.display()))?;
            info!(path = %path.display(), size = bytes.len(), "export saved");
            writeln!(out, "saved {}", path.display())?;
        }
        Command::Health => {
            let health = session.api().health().await?;
            writeln!(out, "{}", render::health(&health))?;
        }
    }

    print!("{out}");
    Ok(())
}
