use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::types::{TypeConstraintError, WorkationId};
use crate::domain::workation::{NewWorkation as DomainNewWorkation, Workation as DomainWorkation};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::workations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::workation::Workation`].
pub struct Workation {
    pub id: i32,
    pub employee: String,
    pub country: String,
    pub country_dest: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i32,
    pub risk: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::workations)]
/// Insertable and changeset form of [`Workation`].
pub struct NewWorkation<'a> {
    pub employee: &'a str,
    pub country: &'a str,
    pub country_dest: &'a str,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i32,
    pub risk: &'a str,
}

impl TryFrom<Workation> for DomainWorkation {
    type Error = TypeConstraintError;

    fn try_from(workation: Workation) -> Result<Self, Self::Error> {
        Ok(Self {
            id: WorkationId::new(workation.id)?,
            employee: workation.employee,
            country: workation.country,
            country_dest: workation.country_dest,
            start_date: workation.start_date,
            end_date: workation.end_date,
            days: workation.days,
            risk: workation.risk.parse()?,
        })
    }
}

impl<'a> From<&'a DomainNewWorkation> for NewWorkation<'a> {
    fn from(workation: &'a DomainNewWorkation) -> Self {
        Self {
            employee: workation.employee.as_str(),
            country: workation.country.as_str(),
            country_dest: workation.country_dest.as_str(),
            start_date: workation.start_date,
            end_date: workation.end_date,
            days: workation.days,
            risk: workation.risk.as_str(),
        }
    }
}
