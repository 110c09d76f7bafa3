use crate::domain::types::WorkationId;
use crate::domain::workation::{NewWorkation, Workation};
use crate::dto::query::ListingQuery;
use crate::forms::workation::WorkationForm;
use crate::pagination::{DEFAULT_PAGE_SIZE, Page};
use crate::repository::{
    SortField, WorkationFilters, WorkationListQuery, WorkationReader, WorkationWriter,
};
use crate::services::{ServiceError, ServiceResult};

fn not_found(id: i32) -> ServiceError {
    ServiceError::NotFound(format!("Workation not found with id: {id}"))
}

/// Non-positive ids can never exist, so they are reported as missing.
fn parse_id(id: i32) -> ServiceResult<WorkationId> {
    WorkationId::new(id).map_err(|_| not_found(id))
}

fn not_found_on_missing(id: i32) -> impl FnOnce(ServiceError) -> ServiceError {
    move |err| match err {
        ServiceError::NotFound(_) => not_found(id),
        other => other,
    }
}

/// Translates the wire query into a repository query, applying defaults of
/// page 0, ten items, sorted by id ascending.
pub fn build_list_query(query: ListingQuery) -> ServiceResult<(WorkationListQuery, usize, usize)> {
    let page = query.page.unwrap_or(0);
    let size = query.size.unwrap_or(DEFAULT_PAGE_SIZE);
    if size == 0 {
        return Err(ServiceError::BadRequest(
            "Page size must not be less than one".to_string(),
        ));
    }
    let offset = page
        .checked_mul(size)
        .and_then(|offset| i64::try_from(offset).ok());
    if i64::try_from(size).is_err() || offset.is_none() {
        return Err(ServiceError::BadRequest(format!(
            "Page {page} with size {size} is out of range"
        )));
    }

    let sort_field = match query.sort_by.as_deref() {
        Some(name) => name
            .parse::<SortField>()
            .map_err(|err| ServiceError::BadRequest(err.to_string()))?,
        None => SortField::Id,
    };

    let mut list_query = WorkationListQuery::new()
        .sort(sort_field, query.sort_direction.unwrap_or_default())
        .paginate(page, size);
    list_query.filters = WorkationFilters {
        employee: query.employee,
        country: query.country,
        country_dest: query.country_dest,
        risk: query.risk,
    };

    Ok((list_query, page, size))
}

/// Returns one page of workations matching the filters.
pub fn list_workations<R>(repo: &R, query: ListingQuery) -> ServiceResult<Page<Workation>>
where
    R: WorkationReader + ?Sized,
{
    let (list_query, page, size) = build_list_query(query)?;

    let (total, items) = repo.list_workations(list_query).map_err(|err| {
        log::error!("Failed to list workations: {err}");
        ServiceError::from(err)
    })?;

    Ok(Page::new(items, page, size, total, true))
}

/// Fetches a single workation.
pub fn get_workation<R>(repo: &R, id: i32) -> ServiceResult<Workation>
where
    R: WorkationReader + ?Sized,
{
    let workation_id = parse_id(id)?;

    repo.get_workation_by_id(workation_id)
        .map_err(|err| {
            log::error!("Failed to get workation {id}: {err}");
            ServiceError::from(err)
        })?
        .ok_or_else(|| not_found(id))
}

/// Validates the body and stores a new workation.
pub fn create_workation<R>(repo: &R, form: WorkationForm) -> ServiceResult<Workation>
where
    R: WorkationWriter + ?Sized,
{
    let new_workation = form.into_new_workation()?;

    repo.create_workation(&new_workation).map_err(|err| {
        log::error!("Failed to create workation: {err}");
        ServiceError::from(err)
    })
}

/// Replaces every field of an existing workation.
pub fn update_workation<R>(repo: &R, id: i32, form: WorkationForm) -> ServiceResult<Workation>
where
    R: WorkationWriter + ?Sized,
{
    let workation_id = parse_id(id)?;
    let updates = form.into_new_workation()?;

    repo.update_workation(workation_id, &updates)
        .map_err(|err| {
            log::error!("Failed to update workation {id}: {err}");
            ServiceError::from(err)
        })
        .map_err(not_found_on_missing(id))
}

/// Removes a workation.
pub fn delete_workation<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: WorkationWriter + ?Sized,
{
    let workation_id = parse_id(id)?;

    repo.delete_workation(workation_id)
        .map_err(|err| {
            log::error!("Failed to delete workation {id}: {err}");
            ServiceError::from(err)
        })
        .map_err(not_found_on_missing(id))
}

/// Stores a batch of already validated workations.
pub fn import_workations<R>(repo: &R, workations: &[NewWorkation]) -> ServiceResult<usize>
where
    R: WorkationWriter + ?Sized,
{
    if workations.is_empty() {
        return Ok(0);
    }

    repo.create_workations(workations).map_err(|err| {
        log::error!("Failed to import workations: {err}");
        ServiceError::from(err)
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::risk::Risk;
    use crate::dto::query::SortDirection;
    use crate::repository::Pagination;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_form() -> WorkationForm {
        WorkationForm {
            employee: "Jane Smith".to_string(),
            country: "Germany".to_string(),
            country_dest: "Spain".to_string(),
            start_date: date(2025, 6, 1),
            end_date: date(2025, 8, 15),
            days: 75,
            risk: Risk::LowRisk,
        }
    }

    fn sample_workation(id: i32) -> Workation {
        Workation::with_fields(
            WorkationId::new(id).unwrap(),
            sample_form().into_new_workation().unwrap(),
        )
    }

    #[test]
    fn list_applies_defaults() {
        let mut repo = MockRepository::new();
        repo.expect_list_workations()
            .withf(|query| {
                query.sort_field == SortField::Id
                    && query.sort_direction == SortDirection::Asc
                    && query.pagination == Some(Pagination { page: 0, per_page: 10 })
                    && query.filters == WorkationFilters::default()
            })
            .times(1)
            .returning(|_| Ok((25, vec![sample_workation(1)])));

        let page = list_workations(&repo, ListingQuery::new()).unwrap();

        assert_eq!(page.total_elements, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.number, 0);
        assert_eq!(page.size, 10);
        assert!(page.first);
        assert_eq!(page.content.len(), 1);
    }

    #[test]
    fn list_passes_filters_and_sort() {
        let mut repo = MockRepository::new();
        repo.expect_list_workations()
            .withf(|query| {
                query.sort_field == SortField::CountryDest
                    && query.sort_direction == SortDirection::Desc
                    && query.filters.employee.as_deref() == Some("jane")
                    && query.filters.risk == Some(Risk::LowRisk)
                    && query.pagination == Some(Pagination { page: 2, per_page: 5 })
            })
            .times(1)
            .returning(|_| Ok((11, vec![sample_workation(11)])));

        let query = ListingQuery::new()
            .page(2)
            .size(5)
            .sort("countryDest", SortDirection::Desc)
            .employee("jane")
            .risk(Risk::LowRisk);
        let page = list_workations(&repo, query).unwrap();

        assert!(page.last);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn list_rejects_unknown_sort_field() {
        let repo = MockRepository::new();

        let result = list_workations(&repo, ListingQuery::new().sort("salary", SortDirection::Asc));

        assert!(matches!(result, Err(ServiceError::BadRequest(_))));
    }

    #[test]
    fn list_rejects_zero_page_size() {
        let repo = MockRepository::new();

        let result = list_workations(&repo, ListingQuery::new().size(0));

        assert!(matches!(result, Err(ServiceError::BadRequest(_))));
    }

    #[test]
    fn list_rejects_page_and_size_beyond_sql_range() {
        let repo = MockRepository::new();

        for query in [
            ListingQuery::new().page(usize::MAX).size(2),
            ListingQuery::new().size(1 << 63),
            ListingQuery::new().page(1_000_000_000_000_000_000).size(10),
        ] {
            let result = list_workations(&repo, query);
            assert!(matches!(result, Err(ServiceError::BadRequest(_))));
        }
    }

    #[test]
    fn get_reports_missing_record() {
        let mut repo = MockRepository::new();
        repo.expect_get_workation_by_id()
            .with(eq(WorkationId::new(99).unwrap()))
            .returning(|_| Ok(None));

        match get_workation(&repo, 99) {
            Err(ServiceError::NotFound(message)) => {
                assert_eq!(message, "Workation not found with id: 99")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn get_treats_non_positive_id_as_missing() {
        let repo = MockRepository::new();

        assert!(matches!(
            get_workation(&repo, 0),
            Err(ServiceError::NotFound(_))
        ));
    }

    #[test]
    fn create_validates_before_touching_repository() {
        let repo = MockRepository::new();
        let mut form = sample_form();
        form.days = 0;

        match create_workation(&repo, form) {
            Err(ServiceError::Validation(messages)) => assert_eq!(messages.len(), 1),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn create_returns_stored_record() {
        let mut repo = MockRepository::new();
        repo.expect_create_workation()
            .withf(|new| new.employee == "Jane Smith" && new.days == 75)
            .times(1)
            .returning(|new| Ok(Workation::with_fields(WorkationId::new(2).unwrap(), new.clone())));

        let created = create_workation(&repo, sample_form()).unwrap();

        assert_eq!(created.id.get(), 2);
        assert_eq!(created.country_dest, "Spain");
    }

    #[test]
    fn update_maps_missing_record() {
        let mut repo = MockRepository::new();
        repo.expect_update_workation()
            .returning(|_, _| Err(RepositoryError::NotFound));

        match update_workation(&repo, 5, sample_form()) {
            Err(ServiceError::NotFound(message)) => {
                assert_eq!(message, "Workation not found with id: 5")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn update_replaces_all_fields() {
        let mut repo = MockRepository::new();
        repo.expect_update_workation()
            .withf(|id, updates| id.get() == 4 && updates.country_dest == "Spain")
            .returning(|id, updates| Ok(Workation::with_fields(id, updates.clone())));

        let updated = update_workation(&repo, 4, sample_form()).unwrap();

        assert_eq!(updated.id.get(), 4);
        assert_eq!(updated.end_date, date(2025, 8, 15));
    }

    #[test]
    fn delete_maps_missing_record() {
        let mut repo = MockRepository::new();
        repo.expect_delete_workation()
            .returning(|_| Err(RepositoryError::NotFound));

        assert!(matches!(
            delete_workation(&repo, 1),
            Err(ServiceError::NotFound(_))
        ));
    }

    #[test]
    fn delete_surfaces_database_failures_as_internal() {
        let mut repo = MockRepository::new();
        repo.expect_delete_workation()
            .returning(|_| Err(RepositoryError::DatabaseError("disk full".to_string())));

        assert!(matches!(
            delete_workation(&repo, 1),
            Err(ServiceError::Internal(_))
        ));
    }

    #[test]
    fn import_skips_empty_batches() {
        let repo = MockRepository::new();

        assert_eq!(import_workations(&repo, &[]).unwrap(), 0);
    }
}
