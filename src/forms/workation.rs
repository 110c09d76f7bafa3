use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::risk::Risk;
use crate::domain::workation::NewWorkation;
use crate::forms::FormError;

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// JSON body accepted by the create and update endpoints.
pub struct WorkationForm {
    #[validate(
        custom(function = "not_blank", message = "Employee name is required"),
        length(
            min = 2,
            max = 100,
            message = "Employee name must be between 2 and 100 characters"
        )
    )]
    pub employee: String,
    #[validate(
        custom(function = "not_blank", message = "Country is required"),
        length(
            min = 2,
            max = 100,
            message = "Country name must be between 2 and 100 characters"
        )
    )]
    pub country: String,
    #[validate(
        custom(function = "not_blank", message = "Destination country is required"),
        length(
            min = 2,
            max = 100,
            message = "Destination country name must be between 2 and 100 characters"
        )
    )]
    pub country_dest: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[validate(range(
        min = 1,
        max = 365,
        message = "Trip duration must be between 1 and 365 days"
    ))]
    pub days: i32,
    pub risk: Risk,
}

impl WorkationForm {
    /// Validates the body and converts it into a domain payload.
    pub fn into_new_workation(self) -> Result<NewWorkation, FormError> {
        self.validate()?;

        Ok(NewWorkation::new(
            self.employee,
            self.country,
            self.country_dest,
            self.start_date,
            self.end_date,
            self.days,
            self.risk,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> WorkationForm {
        WorkationForm {
            employee: "Jane Smith".to_string(),
            country: "Germany".to_string(),
            country_dest: "Spain".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
            days: 75,
            risk: Risk::LowRisk,
        }
    }

    #[test]
    fn valid_form_converts() {
        let new = form().into_new_workation().unwrap();
        assert_eq!(new.employee, "Jane Smith");
        assert_eq!(new.days, 75);
        assert_eq!(new.risk, Risk::LowRisk);
    }

    #[test]
    fn rejects_out_of_range_days() {
        let mut too_short = form();
        too_short.days = 0;
        let err = too_short.into_new_workation().unwrap_err();
        assert_eq!(
            err.messages(),
            vec!["Trip duration must be between 1 and 365 days"]
        );

        let mut too_long = form();
        too_long.days = 366;
        assert!(too_long.into_new_workation().is_err());
    }

    #[test]
    fn rejects_blank_and_short_names() {
        let mut blank = form();
        blank.employee = "   ".to_string();
        let messages = blank.into_new_workation().unwrap_err().messages();
        assert_eq!(messages.len(), 1);

        let mut short = form();
        short.country = "D".to_string();
        let messages = short.into_new_workation().unwrap_err().messages();
        assert_eq!(
            messages,
            vec!["Country name must be between 2 and 100 characters"]
        );
    }

    #[test]
    fn deserializes_camel_case_body() {
        let form: WorkationForm = serde_json::from_str(
            r#"{"employee":"Jane Smith","country":"Germany","countryDest":"Spain",
                "startDate":"2025-06-01","endDate":"2025-08-15","days":75,"risk":"LOW_RISK"}"#,
        )
        .unwrap();
        assert_eq!(form.country_dest, "Spain");
    }
}
