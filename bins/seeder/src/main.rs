//! Demo data seeder for Expensa development and testing.
//!
//! Creates clients, projects, vehicles, about ninety days of expenses and
//! sixty days of mileage trips through the REST API. Existing data is kept.
//! Only point it at a test backend.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use chrono::{Days, Local, NaiveDate};
use expensa_client::ApiClient;
use expensa_core::forms::{ClientForm, ExpenseForm, ProjectForm, TripForm, VehicleForm};
use expensa_core::records::{Category, Vehicle};
use expensa_shared::AppConfig;
use expensa_shared::types::{ClientId, ProjectId};
use rand::Rng;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Number of expenses generated.
const EXPENSE_COUNT: usize = 30;
/// Expenses are dated up to this many days back.
const EXPENSE_DAYS: u64 = 90;
/// Number of trips generated.
const TRIP_COUNT: usize = 20;
/// Trips are dated up to this many days back.
const TRIP_DAYS: u64 = 60;

/// Departure and arrival pairs.
const ROUTES: [(&str, &str); 6] = [
    ("Gussago", "Brescia"),
    ("Brescia", "Milano"),
    ("Milano", "Bergamo"),
    ("Bergamo", "Brescia"),
    ("Gussago", "Verona"),
    ("Brescia", "Mantova"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "expensa=info,seeder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("failed to load configuration")?;
    let api = ApiClient::new(&config.api)?;
    let health = api
        .health()
        .await
        .with_context(|| format!("expense API not reachable at {}", api.base_url()))?;
    info!(status = %health.status, "connected to expense API");

    let today = Local::now().date_naive();
    let mut rng = rand::thread_rng();

    println!("Seeding clients...");
    let clients = seed_clients(&api).await?;

    println!("Seeding projects...");
    let projects = seed_projects(&api, &clients).await?;

    println!("Seeding vehicles...");
    let vehicles = seed_vehicles(&api).await?;

    println!("Seeding expenses...");
    let categories = api.categories().await?;
    let expenses = seed_expenses(&api, &mut rng, today, &categories, &clients, &projects).await?;

    println!("Seeding trips...");
    let trips = seed_trips(&api, &mut rng, today, &vehicles, &clients, &projects).await?;

    println!("Seeding complete!");
    println!("  Clients:  {}", clients.len());
    println!("  Projects: {}", projects.len());
    println!("  Vehicles: {}", vehicles.len());
    println!("  Expenses: {expenses}");
    println!("  Trips:    {trips}");
    Ok(())
}

async fn seed_clients(api: &ApiClient) -> anyhow::Result<Vec<ClientId>> {
    let forms = [
        ("Acqua Minerale SpA", "CLI001", "12345678901", "info@acquaminerale.it", "+39 030 1234567", "Brescia", "BS"),
        ("Detergenti Industriali SRL", "CLI002", "98765432109", "ordini@detergenti.it", "+39 030 7654321", "Bergamo", "BG"),
        ("Chimica Pulita SRL", "CLI003", "11223344556", "info@chimicapulita.it", "+39 030 9988776", "Milano", "MI"),
    ];

    let mut ids = Vec::with_capacity(forms.len());
    for (name, code, vat_id, email, phone, city, province) in forms {
        let form = ClientForm {
            name: name.to_string(),
            code: Some(code.to_string()),
            vat_id: Some(vat_id.to_string()),
            email: Some(email.to_string()),
            phone: Some(phone.to_string()),
            city: Some(city.to_string()),
            province: Some(province.to_string()),
        };
        let client = api.create_client(&form.validate()?).await?;
        println!("  Created client: {}", client.name);
        ids.push(client.id);
    }
    Ok(ids)
}

async fn seed_projects(api: &ApiClient, clients: &[ClientId]) -> anyhow::Result<Vec<ProjectId>> {
    let forms = [
        ("PRJ-2024-001", "Manutenzione Linea Imbottigliamento 1", (2024, 1, 1), "attivo"),
        ("PRJ-2024-002", "Installazione Mixer Detergenti", (2024, 2, 15), "attivo"),
        ("PRJ-2024-003", "Upgrade Sistema PLC", (2024, 3, 1), "completato"),
    ];

    let mut ids = Vec::with_capacity(forms.len());
    for ((code, name, (y, m, d), status), client) in forms.into_iter().zip(clients) {
        let form = ProjectForm {
            client_id: Some(*client),
            code: Some(code.to_string()),
            name: name.to_string(),
            start_date: NaiveDate::from_ymd_opt(y, m, d),
            status: Some(status.to_string()),
        };
        let project = api.create_project(&form.validate()?).await?;
        println!("  Created project: {}", project.name);
        ids.push(project.id);
    }
    Ok(ids)
}

async fn seed_vehicles(api: &ApiClient) -> anyhow::Result<Vec<Vehicle>> {
    let forms = [
        VehicleForm {
            plate: "AB123CD".to_string(),
            kind: Some("Auto".to_string()),
            make: Some("Volkswagen".to_string()),
            model: Some("Golf".to_string()),
            year: Some(2020),
            standard_rate: Some(Decimal::new(680, 3)),
            custom_rate: None,
            uses_custom_rate: false,
        },
        VehicleForm {
            plate: "EF456GH".to_string(),
            kind: Some("Furgone".to_string()),
            make: Some("Fiat".to_string()),
            model: Some("Ducato".to_string()),
            year: Some(2019),
            standard_rate: Some(Decimal::new(850, 3)),
            custom_rate: Some(Decimal::new(900, 3)),
            uses_custom_rate: true,
        },
    ];

    let mut vehicles = Vec::with_capacity(forms.len());
    for form in forms {
        let vehicle = api.create_vehicle(&form.validate()?).await?;
        println!("  Created vehicle: {} - {}", vehicle.plate, vehicle.label());
        vehicles.push(vehicle);
    }
    Ok(vehicles)
}

/// Amount range in euros for a category name.
fn amount_range(category: &str) -> (i64, i64) {
    match category {
        "Pedaggi" => (5, 30),
        "Ristoranti" => (15, 60),
        "Alberghi" => (80, 150),
        "Carburante" => (40, 90),
        "Materiali" => (50, 500),
        "Interventi" => (100, 1000),
        _ => (10, 100),
    }
}

/// A date up to `max_days` before `today`.
fn days_back(rng: &mut impl Rng, today: NaiveDate, max_days: u64) -> NaiveDate {
    today
        .checked_sub_days(Days::new(rng.gen_range(0..=max_days)))
        .unwrap_or(today)
}

async fn seed_expenses(
    api: &ApiClient,
    rng: &mut impl Rng,
    today: NaiveDate,
    categories: &[Category],
    clients: &[ClientId],
    projects: &[ProjectId],
) -> anyhow::Result<usize> {
    let mut created = 0;
    for _ in 0..EXPENSE_COUNT {
        let date = days_back(rng, today, EXPENSE_DAYS);
        let category = categories.choose(rng);
        let name = category.map_or("Altre Spese", |c| c.name.as_str());
        let (min, max) = amount_range(name);
        let cents = rng.gen_range(min * 100..=max * 100);

        let mut form = ExpenseForm {
            amount: Some(Decimal::new(cents, 2)),
            category_id: category.map(|c| c.id),
            description: format!("{name} - {date}"),
            billable: rng.gen_bool(0.6),
            ..ExpenseForm::new(date)
        };
        if rng.gen_bool(0.7) {
            form.client_id = clients.choose(rng).copied();
            form.project_id = projects.choose(rng).copied();
        }
        if rng.gen_bool(0.5) {
            form.supplier = Some(format!("Fornitore {}", rng.gen_range(1..=10)));
        }

        api.create_expense(&form.validate()?).await?;
        created += 1;
    }
    println!("  Created {created} expenses");
    Ok(created)
}

async fn seed_trips(
    api: &ApiClient,
    rng: &mut impl Rng,
    today: NaiveDate,
    vehicles: &[Vehicle],
    clients: &[ClientId],
    projects: &[ProjectId],
) -> anyhow::Result<usize> {
    let mut created = 0;
    for _ in 0..TRIP_COUNT {
        let Some(vehicle) = vehicles.choose(rng) else {
            break;
        };
        let Some((origin, destination)) = ROUTES.choose(rng) else {
            break;
        };

        let mut form = TripForm::for_vehicle(vehicle, days_back(rng, today, TRIP_DAYS));
        form.origin = (*origin).to_string();
        form.destination = (*destination).to_string();
        form.distance = Some(Decimal::new(rng.gen_range(200..=2000), 1));
        form.billable = rng.gen_bool(0.7);
        if rng.gen_bool(0.8) {
            form.client_id = clients.choose(rng).copied();
            form.project_id = projects.choose(rng).copied();
        }

        api.create_trip(&form.validate()?).await?;
        created += 1;
    }
    println!("  Created {created} trips");
    Ok(created)
}
