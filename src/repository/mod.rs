use std::str::FromStr;

use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::risk::Risk;
use crate::domain::types::{TypeConstraintError, WorkationId};
use crate::domain::workation::{NewWorkation, Workation};
use crate::dto::query::SortDirection;
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod workation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Zero-based page index.
    pub page: usize,
    pub per_page: usize,
}

/// Column a workation listing can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Id,
    Employee,
    Country,
    CountryDest,
    StartDate,
    EndDate,
    Days,
    Risk,
}

impl FromStr for SortField {
    type Err = TypeConstraintError;

    /// Accepts both the wire (camelCase) and the column (snake_case) names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "id" => Ok(SortField::Id),
            "employee" => Ok(SortField::Employee),
            "country" => Ok(SortField::Country),
            "countryDest" | "country_dest" => Ok(SortField::CountryDest),
            "startDate" | "start_date" => Ok(SortField::StartDate),
            "endDate" | "end_date" => Ok(SortField::EndDate),
            "days" => Ok(SortField::Days),
            "risk" => Ok(SortField::Risk),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "cannot sort by `{other}`"
            ))),
        }
    }
}

/// Optional constraints applied to a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkationFilters {
    /// Case-insensitive substring of the employee name.
    pub employee: Option<String>,
    pub country: Option<String>,
    pub country_dest: Option<String>,
    pub risk: Option<Risk>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkationListQuery {
    pub filters: WorkationFilters,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub pagination: Option<Pagination>,
}

impl WorkationListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn employee(mut self, employee: impl Into<String>) -> Self {
        self.filters.employee = Some(employee.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.filters.country = Some(country.into());
        self
    }

    pub fn country_dest(mut self, country_dest: impl Into<String>) -> Self {
        self.filters.country_dest = Some(country_dest.into());
        self
    }

    pub fn risk(mut self, risk: Risk) -> Self {
        self.filters.risk = Some(risk);
        self
    }

    pub fn sort(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort_field = field;
        self.sort_direction = direction;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait WorkationReader {
    fn get_workation_by_id(&self, id: WorkationId) -> RepositoryResult<Option<Workation>>;
    /// Returns the total number of matches and the requested page of them.
    fn list_workations(&self, query: WorkationListQuery)
    -> RepositoryResult<(usize, Vec<Workation>)>;
    fn count_workations(&self) -> RepositoryResult<usize>;
}

pub trait WorkationWriter {
    fn create_workation(&self, new_workation: &NewWorkation) -> RepositoryResult<Workation>;
    fn create_workations(&self, new_workations: &[NewWorkation]) -> RepositoryResult<usize>;
    fn update_workation(
        &self,
        id: WorkationId,
        updates: &NewWorkation,
    ) -> RepositoryResult<Workation>;
    fn delete_workation(&self, id: WorkationId) -> RepositoryResult<()>;
}

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}
