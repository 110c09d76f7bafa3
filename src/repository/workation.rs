//! Repository implementation for workation records.

use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::{
    domain::{
        types::{TypeConstraintError, WorkationId},
        workation::{NewWorkation, Workation},
    },
    dto::query::SortDirection,
    models::workation::{NewWorkation as DbNewWorkation, Workation as DbWorkation},
    repository::{
        DieselRepository, SortField, WorkationFilters, WorkationListQuery, WorkationReader,
        WorkationWriter,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::workations,
};

fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Base query with every present filter applied.
fn filtered(filters: &WorkationFilters) -> workations::BoxedQuery<'static, Sqlite> {
    let mut query = workations::table.into_boxed();

    if let Some(employee) = non_empty(&filters.employee) {
        query = query.filter(workations::employee.like(format!("%{employee}%")));
    }
    if let Some(country) = non_empty(&filters.country) {
        query = query.filter(workations::country.like(format!("%{country}%")));
    }
    if let Some(country_dest) = non_empty(&filters.country_dest) {
        query = query.filter(workations::country_dest.like(format!("%{country_dest}%")));
    }
    if let Some(risk) = filters.risk {
        query = query.filter(workations::risk.eq(risk.as_str()));
    }

    query
}

/// Orders by the requested column, then by id so pages stay stable.
fn sorted(
    query: workations::BoxedQuery<'static, Sqlite>,
    field: SortField,
    direction: SortDirection,
) -> workations::BoxedQuery<'static, Sqlite> {
    macro_rules! order {
        ($column:expr) => {
            match direction {
                SortDirection::Asc => query.order($column.asc()),
                SortDirection::Desc => query.order($column.desc()),
            }
        };
    }

    let query = match field {
        SortField::Id => order!(workations::id),
        SortField::Employee => order!(workations::employee),
        SortField::Country => order!(workations::country),
        SortField::CountryDest => order!(workations::country_dest),
        SortField::StartDate => order!(workations::start_date),
        SortField::EndDate => order!(workations::end_date),
        SortField::Days => order!(workations::days),
        SortField::Risk => order!(workations::risk),
    };

    query.then_order_by(workations::id.asc())
}

fn into_domain(rows: Vec<DbWorkation>) -> RepositoryResult<Vec<Workation>> {
    rows.into_iter()
        .map(Workation::try_from)
        .collect::<Result<Vec<_>, TypeConstraintError>>()
        .map_err(RepositoryError::from)
}

impl WorkationReader for DieselRepository {
    fn get_workation_by_id(&self, id: WorkationId) -> RepositoryResult<Option<Workation>> {
        let mut conn = self.conn()?;

        let workation = workations::table
            .find(id.get())
            .first::<DbWorkation>(&mut conn)
            .optional()?;

        workation
            .map(Workation::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn list_workations(
        &self,
        query: WorkationListQuery,
    ) -> RepositoryResult<(usize, Vec<Workation>)> {
        let mut conn = self.conn()?;

        let total: i64 = filtered(&query.filters).count().get_result(&mut conn)?;

        let mut items = sorted(
            filtered(&query.filters),
            query.sort_field,
            query.sort_direction,
        );

        if let Some(pagination) = query.pagination {
            let out_of_range = || {
                RepositoryError::ValidationError(format!(
                    "page {} of size {} is out of range",
                    pagination.page, pagination.per_page
                ))
            };
            let limit = i64::try_from(pagination.per_page).map_err(|_| out_of_range())?;
            let offset = pagination
                .page
                .checked_mul(pagination.per_page)
                .and_then(|offset| i64::try_from(offset).ok())
                .ok_or_else(out_of_range)?;
            items = items.limit(limit).offset(offset);
        }

        let items = into_domain(items.load::<DbWorkation>(&mut conn)?)?;

        Ok((total as usize, items))
    }

    fn count_workations(&self) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;

        let total: i64 = workations::table.count().get_result(&mut conn)?;
        Ok(total as usize)
    }
}

impl WorkationWriter for DieselRepository {
    fn create_workation(&self, new_workation: &NewWorkation) -> RepositoryResult<Workation> {
        let mut conn = self.conn()?;

        let insertable: DbNewWorkation = new_workation.into();
        let created = diesel::insert_into(workations::table)
            .values(&insertable)
            .get_result::<DbWorkation>(&mut conn)?;

        Ok(Workation::try_from(created)?)
    }

    fn create_workations(&self, new_workations: &[NewWorkation]) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;

        let insertables: Vec<DbNewWorkation> = new_workations.iter().map(Into::into).collect();
        let affected = diesel::insert_into(workations::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn update_workation(
        &self,
        id: WorkationId,
        updates: &NewWorkation,
    ) -> RepositoryResult<Workation> {
        let mut conn = self.conn()?;

        let changeset: DbNewWorkation = updates.into();
        let updated = diesel::update(workations::table.find(id.get()))
            .set(&changeset)
            .get_result::<DbWorkation>(&mut conn)?;

        Ok(Workation::try_from(updated)?)
    }

    fn delete_workation(&self, id: WorkationId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let affected = diesel::delete(workations::table.find(id.get())).execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
