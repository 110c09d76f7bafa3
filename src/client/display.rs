//! Presentation helpers for listing rows.

use chrono::NaiveDate;

use crate::domain::risk::Risk;
use crate::domain::workation::Workation;

/// Shown for countries missing from the flag table.
pub const UNKNOWN_FLAG: &str = "🏳️";

const COUNTRY_FLAGS: &[(&str, &str)] = &[
    ("United States", "🇺🇸"),
    ("Portugal", "🇵🇹"),
    ("Singapore", "🇸🇬"),
    ("Japan", "🇯🇵"),
    ("Spain", "🇪🇸"),
    ("Mexico", "🇲🇽"),
    ("United Kingdom", "🇬🇧"),
    ("Thailand", "🇹🇭"),
    ("Canada", "🇨🇦"),
    ("Iceland", "🇮🇸"),
    ("Germany", "🇩🇪"),
    ("Croatia", "🇭🇷"),
    ("Australia", "🇦🇺"),
    ("Indonesia", "🇮🇩"),
    ("France", "🇫🇷"),
    ("Morocco", "🇲🇦"),
    ("Netherlands", "🇳🇱"),
    ("Greece", "🇬🇷"),
    ("Sweden", "🇸🇪"),
    ("Italy", "🇮🇹"),
    ("South Korea", "🇰🇷"),
    ("Vietnam", "🇻🇳"),
    ("Costa Rica", "🇨🇷"),
    ("India", "🇮🇳"),
    ("United Arab Emirates", "🇦🇪"),
    ("Switzerland", "🇨🇭"),
    ("Austria", "🇦🇹"),
    ("Ireland", "🇮🇪"),
    ("Israel", "🇮🇱"),
    ("Turkey", "🇹🇷"),
    ("Malaysia", "🇲🇾"),
    ("Czech Republic", "🇨🇿"),
    ("Brazil", "🇧🇷"),
    ("Argentina", "🇦🇷"),
    ("China", "🇨🇳"),
    ("Norway", "🇳🇴"),
    ("Denmark", "🇩🇰"),
    ("Russia", "🇷🇺"),
    ("Georgia", "🇬🇪"),
    ("New Zealand", "🇳🇿"),
    ("Poland", "🇵🇱"),
    ("Hungary", "🇭🇺"),
    ("Belgium", "🇧🇪"),
    ("Luxembourg", "🇱🇺"),
    ("Egypt", "🇪🇬"),
    ("Jordan", "🇯🇴"),
    ("Malta", "🇲🇹"),
    ("Philippines", "🇵🇭"),
    ("Sri Lanka", "🇱🇰"),
];

/// Flag emoji for a country name, matched exactly.
pub fn country_flag(country: &str) -> &'static str {
    COUNTRY_FLAGS
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, flag)| *flag)
        .unwrap_or(UNKNOWN_FLAG)
}

/// `dd/mm/yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Human label, e.g. `LOW RISK`.
pub fn format_risk(risk: Risk) -> String {
    risk.as_str().replacen('_', " ", 1)
}

pub fn risk_class(risk: Risk) -> &'static str {
    match risk {
        Risk::HighRisk => "risk-high",
        Risk::LowRisk => "risk-low",
        Risk::NoRisk => "risk-none",
    }
}

pub fn risk_icon(risk: Risk) -> &'static str {
    match risk {
        Risk::HighRisk => "🔴",
        Risk::LowRisk => "🟡",
        Risk::NoRisk => "🟢",
    }
}

/// Risk recomputed from the row's day count, ignoring the stored tier.
pub fn derived_risk(workation: &Workation) -> Risk {
    Risk::from_days(workation.days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::WorkationId;
    use crate::domain::workation::NewWorkation;

    #[test]
    fn formats_dates_with_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert_eq!(format_date(date), "05/03/2025");
    }

    #[test]
    fn looks_up_flags() {
        assert_eq!(country_flag("Portugal"), "🇵🇹");
        assert_eq!(country_flag("Sri Lanka"), "🇱🇰");
        assert_eq!(country_flag("Atlantis"), UNKNOWN_FLAG);
        assert_eq!(country_flag("portugal"), UNKNOWN_FLAG);
    }

    #[test]
    fn flag_table_has_no_duplicates() {
        let mut names: Vec<_> = COUNTRY_FLAGS.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), COUNTRY_FLAGS.len());
    }

    #[test]
    fn risk_presentation() {
        assert_eq!(format_risk(Risk::NoRisk), "NO RISK");
        assert_eq!(format_risk(Risk::HighRisk), "HIGH RISK");
        assert_eq!(risk_class(Risk::LowRisk), "risk-low");
        assert_eq!(risk_class(Risk::NoRisk), "risk-none");
        assert_eq!(risk_icon(Risk::HighRisk), "🔴");
        assert_eq!(risk_icon(Risk::NoRisk), "🟢");
    }

    #[test]
    fn derived_risk_uses_days() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let stored = NewWorkation::new(
            "Ana".to_string(),
            "Brazil".to_string(),
            "Japan".to_string(),
            date,
            date,
            120,
            Risk::NoRisk,
        );
        let workation = Workation::with_fields(WorkationId::new(1).unwrap(), stored);

        assert_eq!(derived_risk(&workation), Risk::HighRisk);
    }
}
