#![allow(dead_code)]

use chrono::NaiveDate;
use tempfile::TempDir;
use workations::db::{DbPool, establish_connection_pool, run_migrations};
use workations::domain::risk::Risk;
use workations::domain::workation::NewWorkation;

/// Migrated SQLite database living in a temporary directory.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("create pool");
        run_migrations(&pool).expect("run migrations");
        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn workation(employee: &str, country: &str, country_dest: &str, days: i32) -> NewWorkation {
    let start = date(2025, 1, 1);
    NewWorkation::new(
        employee.to_string(),
        country.to_string(),
        country_dest.to_string(),
        start,
        start + chrono::Days::new((days - 1) as u64),
        days,
        Risk::from_days(days),
    )
}

pub fn sample_workations() -> Vec<NewWorkation> {
    vec![
        workation("John Doe", "United States", "Portugal", 76),
        workation("Jane Smith", "Germany", "Spain", 75),
        workation("Carlos Ruiz", "Mexico", "Japan", 26),
        workation("Emma Brown", "United Kingdom", "Thailand", 150),
        workation("Liam Chen", "Canada", "Iceland", 30),
    ]
}
