use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::risk::Risk;
use crate::domain::types::WorkationId;

/// A stored workation: one employee working from abroad for a period.
///
/// `days` is expected to equal the inclusive span between `start_date` and
/// `end_date`; the value is taken as supplied.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Workation {
    pub id: WorkationId,
    pub employee: String,
    pub country: String,
    pub country_dest: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i32,
    pub risk: Risk,
}

/// Workation payload without an identifier, used for create and update.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkation {
    pub employee: String,
    pub country: String,
    pub country_dest: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i32,
    pub risk: Risk,
}

impl NewWorkation {
    #[must_use]
    pub fn new(
        employee: String,
        country: String,
        country_dest: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        days: i32,
        risk: Risk,
    ) -> Self {
        Self {
            employee: employee.trim().to_string(),
            country: country.trim().to_string(),
            country_dest: country_dest.trim().to_string(),
            start_date,
            end_date,
            days,
            risk,
        }
    }

    /// Number of calendar days covered by the dates, both ends included.
    pub fn span_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

impl Workation {
    /// Attaches an identifier to a payload.
    pub fn with_fields(id: WorkationId, fields: NewWorkation) -> Self {
        Self {
            id,
            employee: fields.employee,
            country: fields.country,
            country_dest: fields.country_dest,
            start_date: fields.start_date,
            end_date: fields.end_date,
            days: fields.days,
            risk: fields.risk,
        }
    }

    /// Returns the record's fields without its identifier.
    pub fn fields(&self) -> NewWorkation {
        NewWorkation {
            employee: self.employee.clone(),
            country: self.country.clone(),
            country_dest: self.country_dest.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            days: self.days,
            risk: self.risk,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_trims_text_fields() {
        let new = NewWorkation::new(
            "  Jane Smith ".to_string(),
            "Germany ".to_string(),
            " Spain".to_string(),
            date(2025, 6, 1),
            date(2025, 8, 15),
            76,
            Risk::LowRisk,
        );
        assert_eq!(new.employee, "Jane Smith");
        assert_eq!(new.country, "Germany");
        assert_eq!(new.country_dest, "Spain");
    }

    #[test]
    fn span_counts_both_ends() {
        let new = NewWorkation::new(
            "A".into(),
            "B".into(),
            "C".into(),
            date(2025, 6, 1),
            date(2025, 6, 1),
            1,
            Risk::NoRisk,
        );
        assert_eq!(new.span_days(), 1);
    }

    #[test]
    fn uses_camel_case_on_the_wire() {
        let value = json!({
            "id": 1,
            "employee": "John Doe",
            "country": "United States",
            "countryDest": "Portugal",
            "startDate": "2025-03-15",
            "endDate": "2025-05-29",
            "days": 75,
            "risk": "LOW_RISK"
        });

        let workation: Workation = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(workation.country_dest, "Portugal");
        assert_eq!(workation.start_date, date(2025, 3, 15));
        assert_eq!(serde_json::to_value(&workation).unwrap(), value);
    }
}
