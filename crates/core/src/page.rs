//! Navigable pages.
//!
//! Each page names the resources it must load before it can render. The
//! session matches on [`Page`] to pick a loader, so adding a page without a
//! loader is a compile error.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A page of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// Monthly summary, category chart and recent expenses.
    #[default]
    Dashboard,
    /// Expense list with filters.
    Expenses,
    /// Mileage trip list with totals.
    Trips,
    /// Client registry.
    Clients,
    /// Vehicles and their rates.
    Vehicles,
    /// Spreadsheet export.
    Export,
}

/// A collection fetched from the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    /// `/categorie`
    Categories,
    /// `/clienti`
    Clients,
    /// `/progetti`
    Projects,
    /// `/veicoli`
    Vehicles,
    /// `/spese`
    Expenses,
    /// `/chilometriche`
    Trips,
    /// `/stats/dashboard`
    DashboardStats,
}

impl Page {
    /// All pages in menu order.
    pub const ALL: [Self; 6] = [
        Self::Dashboard,
        Self::Expenses,
        Self::Trips,
        Self::Clients,
        Self::Vehicles,
        Self::Export,
    ];

    /// URL-style identifier.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Expenses => "expenses",
            Self::Trips => "trips",
            Self::Clients => "clients",
            Self::Vehicles => "vehicles",
            Self::Export => "export",
        }
    }

    /// Heading shown above the page.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Expenses => "Expenses",
            Self::Trips => "Mileage",
            Self::Clients => "Clients",
            Self::Vehicles => "Vehicles",
            Self::Export => "Export",
        }
    }

    /// Resources loaded when the page is opened.
    ///
    /// Reference collections are listed too; the session serves them from its
    /// cache instead of refetching.
    #[must_use]
    pub const fn required_resources(self) -> &'static [Resource] {
        match self {
            Self::Dashboard => &[
                Resource::DashboardStats,
                Resource::Expenses,
                Resource::Categories,
            ],
            Self::Expenses => &[
                Resource::Expenses,
                Resource::Categories,
                Resource::Clients,
                Resource::Projects,
            ],
            Self::Trips => &[Resource::Trips, Resource::Vehicles, Resource::Clients],
            Self::Clients => &[Resource::Clients],
            Self::Vehicles => &[Resource::Vehicles],
            Self::Export => &[Resource::Clients],
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Unknown page identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown page: {0}")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dashboard" | "" => Ok(Self::Dashboard),
            "expenses" | "spese" => Ok(Self::Expenses),
            "trips" | "mileage" | "km" | "chilometriche" => Ok(Self::Trips),
            "clients" | "clienti" => Ok(Self::Clients),
            "vehicles" | "veicoli" => Ok(Self::Vehicles),
            "export" => Ok(Self::Export),
            _ => Err(UnknownPage(s.to_string())),
        }
    }
}
