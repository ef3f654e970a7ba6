//! Session state and page navigation.
//!
//! A [`Session`] loads categories, clients, vehicles and projects once and
//! hands them out as a read-only [`ReferenceData`]. Mutations of clients and
//! vehicles refresh the affected collection.

use bytes::Bytes;
use chrono::{Days, NaiveDate};
use expensa_core::breakdown::CategoryShares;
use expensa_core::dashboard::{DashboardService, DashboardStats, MonthlyTotals};
use expensa_core::export::ExportRequest;
use expensa_core::forms::{ClientForm, ExpenseForm, TripForm, TripPatch, VehicleForm};
use expensa_core::mileage::{MileageService, MileageTotals};
use expensa_core::page::Page;
use expensa_core::receipt::{ExpensePrefill, ReceiptExtractor, ReceiptUpload};
use expensa_core::records::{Client, Expense, Trip, Vehicle};
use expensa_core::{MonthPeriod, ReferenceData};
use expensa_shared::config::DisplayConfig;
use expensa_shared::types::{ClientId, ExpenseId, TripId, VehicleId};
use expensa_shared::{AppError, AppResult};
use tracing::{debug, info};

use crate::client::ApiClient;
use crate::filters::{ExpenseFilter, TripFilter};

/// Dashboard page content.
#[derive(Debug, Clone)]
pub struct DashboardView {
    /// Monthly figures.
    pub stats: DashboardStats,
    /// Category chart.
    pub shares: CategoryShares,
    /// Latest expenses, newest first.
    pub recent: Vec<Expense>,
}

/// Trips page content.
#[derive(Debug, Clone)]
pub struct TripsView {
    /// Trips, newest first.
    pub trips: Vec<Trip>,
    /// Footer totals.
    pub totals: MileageTotals,
}

/// What a page displays.
#[derive(Debug, Clone)]
pub enum PageData {
    /// Dashboard.
    Dashboard(DashboardView),
    /// Expense list.
    Expenses(Vec<Expense>),
    /// Trip list with totals.
    Trips(TripsView),
    /// Active clients.
    Clients(Vec<Client>),
    /// Vehicles.
    Vehicles(Vec<Vehicle>),
    /// Export form; lists the clients to filter by.
    Export(Vec<Client>),
}

impl PageData {
    /// The page this data belongs to.
    #[must_use]
    pub const fn page(&self) -> Page {
        match self {
            Self::Dashboard(_) => Page::Dashboard,
            Self::Expenses(_) => Page::Expenses,
            Self::Trips(_) => Page::Trips,
            Self::Clients(_) => Page::Clients,
            Self::Vehicles(_) => Page::Vehicles,
            Self::Export(_) => Page::Export,
        }
    }
}

/// An open session against the API.
#[derive(Debug)]
pub struct Session {
    api: ApiClient,
    reference: ReferenceData,
    display: DisplayConfig,
    extractor: ReceiptExtractor,
}

impl Session {
    /// Loads the reference collections concurrently.
    ///
    /// # Errors
    ///
    /// Fails if any of the four collections cannot be loaded, or if the
    /// receipt patterns do not compile.
    pub async fn start(api: ApiClient, display: DisplayConfig) -> AppResult<Self> {
        let extractor = ReceiptExtractor::new()?;
        let (categories, clients, vehicles, projects) = tokio::try_join!(
            api.categories(),
            api.clients(),
            api.vehicles(),
            api.projects(None),
        )?;

        debug!(
            categories = categories.len(),
            clients = clients.len(),
            vehicles = vehicles.len(),
            projects = projects.len(),
            "reference data loaded"
        );

        Ok(Self {
            api,
            reference: ReferenceData::new(categories, clients, vehicles).with_projects(projects),
            display,
            extractor,
        })
    }

    /// The underlying client.
    #[must_use]
    pub const fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Cached reference data.
    #[must_use]
    pub const fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Display preferences.
    #[must_use]
    pub const fn display(&self) -> &DisplayConfig {
        &self.display
    }

    /// Reloads the client list.
    pub async fn refresh_clients(&mut self) -> AppResult<()> {
        let clients = self.api.clients().await?;
        debug!(clients = clients.len(), "clients reloaded");
        self.reference = std::mem::take(&mut self.reference).with_clients(clients);
        Ok(())
    }

    /// Reloads the vehicle list.
    pub async fn refresh_vehicles(&mut self) -> AppResult<()> {
        let vehicles = self.api.vehicles().await?;
        debug!(vehicles = vehicles.len(), "vehicles reloaded");
        self.reference = std::mem::take(&mut self.reference).with_vehicles(vehicles);
        Ok(())
    }

    /// Loads what `page` displays.
    pub async fn navigate(&self, page: Page, today: NaiveDate) -> AppResult<PageData> {
        info!(page = %page, "navigate");

        match page {
            Page::Dashboard => self.dashboard(today).await.map(PageData::Dashboard),
            Page::Expenses => self
                .api
                .expenses(&ExpenseFilter::default())
                .await
                .map(PageData::Expenses),
            Page::Trips => self
                .trips_view(&TripFilter::default())
                .await
                .map(PageData::Trips),
            Page::Clients => Ok(PageData::Clients(
                self.reference.active_clients().cloned().collect(),
            )),
            Page::Vehicles => Ok(PageData::Vehicles(self.reference.vehicles().to_vec())),
            Page::Export => Ok(PageData::Export(
                self.reference.active_clients().cloned().collect(),
            )),
        }
    }

    /// Dashboard from the API's pre-aggregated figures for the month of
    /// `today`.
    pub async fn dashboard(&self, today: NaiveDate) -> AppResult<DashboardView> {
        let (server, recent) =
            tokio::try_join!(self.api.dashboard_stats(), self.recent_expenses(today))?;

        let stats = DashboardService::from_server(MonthPeriod::containing(today), server);
        Ok(DashboardView {
            shares: stats.category_shares(),
            stats,
            recent,
        })
    }

    /// Dashboard computed locally from the month's raw records.
    pub async fn local_dashboard(
        &self,
        period: MonthPeriod,
        today: NaiveDate,
    ) -> AppResult<DashboardView> {
        let expense_filter = ExpenseFilter::for_period(&period);
        let trip_filter = TripFilter::for_period(&period);
        let (expenses, trips, recent) = tokio::try_join!(
            self.api.expenses(&expense_filter),
            self.api.trips(&trip_filter),
            self.recent_expenses(today),
        )?;

        let stats = DashboardService::compute(period, &expenses, &trips, &self.reference);
        Ok(DashboardView {
            shares: stats.category_shares(),
            stats,
            recent,
        })
    }

    async fn recent_expenses(&self, today: NaiveDate) -> AppResult<Vec<Expense>> {
        let days = self.display.recent_days;
        let since = today
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);

        let expenses = self
            .api
            .expenses(&ExpenseFilter::between(since, today))
            .await?;

        Ok(
            DashboardService::recent_expenses(&expenses, today, days, self.display.recent_limit)
                .into_iter()
                .cloned()
                .collect(),
        )
    }

    /// Trips matching `filter` with their totals.
    pub async fn trips_view(&self, filter: &TripFilter) -> AppResult<TripsView> {
        let trips = self.api.trips(filter).await?;
        let totals = MileageService::totals(&trips);
        Ok(TripsView { trips, totals })
    }

    /// Twelve monthly rows for `year`, from the API.
    pub async fn yearly_series(&self, year: i32) -> AppResult<Vec<MonthlyTotals>> {
        self.api.monthly_stats(year).await
    }

    /// Twelve monthly rows for `year`, computed from the year's records.
    pub async fn local_yearly_series(&self, year: i32) -> AppResult<Vec<MonthlyTotals>> {
        let months = MonthPeriod::months_of(year)?;
        let (Some(first), Some(last)) = (months.first(), months.last()) else {
            return Ok(Vec::new());
        };

        let expense_filter = ExpenseFilter::between(first.start(), last.end());
        let trip_filter = TripFilter {
            start_date: Some(first.start()),
            end_date: Some(last.end()),
            ..TripFilter::default()
        };
        let (expenses, trips) = tokio::try_join!(
            self.api.expenses(&expense_filter),
            self.api.trips(&trip_filter),
        )?;

        Ok(DashboardService::yearly_series(year, &expenses, &trips)?)
    }

    /// Validates and creates (`id` = `None`) or updates an expense.
    pub async fn save_expense(
        &self,
        id: Option<ExpenseId>,
        form: &ExpenseForm,
    ) -> AppResult<Expense> {
        let draft = form.validate()?;
        match id {
            Some(id) => self.api.update_expense(id, &draft).await,
            None => self.api.create_expense(&draft).await,
        }
    }

    /// New trip form for a cached vehicle, with its rate snapshot.
    pub fn new_trip_form(&self, vehicle: VehicleId, today: NaiveDate) -> AppResult<TripForm> {
        self.reference
            .vehicle(vehicle)
            .map(|v| TripForm::for_vehicle(v, today))
            .ok_or_else(|| AppError::NotFound(format!("vehicle {vehicle}")))
    }

    /// Validates and creates (`id` = `None`) or replaces a trip.
    pub async fn save_trip(&self, id: Option<TripId>, form: &TripForm) -> AppResult<Trip> {
        let draft = form.validate()?;
        match id {
            Some(id) => self.api.update_trip(id, &draft).await,
            None => self.api.create_trip(&draft).await,
        }
    }

    /// Applies a partial update, recomputing the reimbursement when the
    /// distance or the rate changes.
    pub async fn patch_trip(&self, current: &Trip, patch: TripPatch) -> AppResult<Trip> {
        let patch = patch.reconcile(current);
        self.api.patch_trip(current.id, &patch).await
    }

    /// Validates and creates (`id` = `None`) or updates a client, then
    /// reloads the client list.
    pub async fn save_client(&mut self, id: Option<ClientId>, form: &ClientForm) -> AppResult<Client> {
        let draft = form.validate()?;
        let client = match id {
            Some(id) => self.api.update_client(id, &draft).await?,
            None => self.api.create_client(&draft).await?,
        };
        self.refresh_clients().await?;
        Ok(client)
    }

    /// Deactivates a client and reloads the client list.
    pub async fn deactivate_client(&mut self, id: ClientId) -> AppResult<()> {
        self.api.deactivate_client(id).await?;
        self.refresh_clients().await
    }

    /// Validates and creates (`id` = `None`) or updates a vehicle, then
    /// reloads the vehicle list.
    pub async fn save_vehicle(
        &mut self,
        id: Option<VehicleId>,
        form: &VehicleForm,
    ) -> AppResult<Vehicle> {
        let draft = form.validate()?;
        let vehicle = match id {
            Some(id) => self.api.update_vehicle(id, &draft).await?,
            None => self.api.create_vehicle(&draft).await?,
        };
        self.refresh_vehicles().await?;
        Ok(vehicle)
    }

    /// Uploads a receipt and returns the values to prefill the expense form
    /// with.
    ///
    /// Fields the OCR service did not recognize are looked up in the
    /// returned text.
    pub async fn scan_receipt(&self, upload: &ReceiptUpload) -> AppResult<ExpensePrefill> {
        let mut scan = self.api.upload_receipt(upload).await?;
        scan.ocr_data = self.extractor.complete(scan.ocr_data);
        debug!(
            amount = ?scan.ocr_data.amount,
            date = ?scan.ocr_data.date_text,
            "receipt scanned"
        );
        Ok(ExpensePrefill::from_scan(&scan))
    }

    /// Downloads a workbook and returns its suggested file name with it.
    pub async fn export(
        &self,
        request: &ExportRequest,
        today: NaiveDate,
    ) -> AppResult<(String, Bytes)> {
        let bytes = self.api.export(request).await?;
        Ok((request.file_name(today), bytes))
    }
}
