//! Initial data import for an empty database.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::workation::NewWorkation;
use crate::repository::{WorkationReader, WorkationWriter};
use crate::services::workations::import_workations;
use crate::services::{ServiceError, ServiceResult};

/// One CSV row; the `id` column, when present, is ignored.
#[derive(Debug, Deserialize)]
struct SeedRow {
    employee: String,
    country: String,
    country_dest: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    days: i32,
    risk: String,
}

/// Parses workation rows, logging and skipping the ones that are malformed.
pub fn parse_seed_csv<Rd: Read>(reader: Rd) -> Vec<NewWorkation> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut workations = Vec::new();
    for (index, row) in rdr.deserialize::<SeedRow>().enumerate() {
        // Header is line 1.
        let line = index + 2;
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                log::warn!("Line {line}: invalid format - skipping ({err})");
                continue;
            }
        };

        let risk = match row.risk.parse() {
            Ok(risk) => risk,
            Err(err) => {
                log::error!("Line {line}: failed to parse - {err}");
                continue;
            }
        };

        workations.push(NewWorkation::new(
            row.employee,
            row.country,
            row.country_dest,
            row.start_date,
            row.end_date,
            row.days,
            risk,
        ));
    }

    workations
}

/// Imports `path` when the database holds no workations yet.
pub fn seed_from_csv<R>(repo: &R, path: &Path) -> ServiceResult<usize>
where
    R: WorkationReader + WorkationWriter + ?Sized,
{
    let existing = repo.count_workations().map_err(ServiceError::from)?;
    if existing > 0 {
        log::info!("Database already contains {existing} workations. Skipping CSV import.");
        return Ok(0);
    }

    log::info!("Initializing database with {}", path.display());
    let file = File::open(path).map_err(|err| {
        log::error!("Failed to load CSV data: {err}");
        ServiceError::Internal(format!("cannot open {}: {err}", path.display()))
    })?;

    let workations = parse_seed_csv(file);
    let imported = import_workations(repo, &workations)?;
    log::info!("Successfully imported {imported} workations from CSV");

    Ok(imported)
}
