//! Listing query shared by the REST backend and the HTTP client.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::risk::Risk;

/// Sort direction of a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", from = "String")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    /// The opposite direction.
    pub const fn toggle(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything other than `DESC` (in any case) sorts ascending.
impl From<String> for SortDirection {
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

/// Filter, sort and page request for the workation listing.
///
/// Every field is independent; `None` means unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,
    /// Substring of the employee name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_dest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk: Option<Risk>,
}

impl ListingQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn sort(mut self, sort_by: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_by = Some(sort_by.into());
        self.sort_direction = Some(direction);
        self
    }

    pub fn employee(mut self, employee: impl Into<String>) -> Self {
        self.employee = Some(employee.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn country_dest(mut self, country_dest: impl Into<String>) -> Self {
        self.country_dest = Some(country_dest.into());
        self
    }

    pub fn risk(mut self, risk: Risk) -> Self {
        self.risk = Some(risk);
        self
    }

    /// Wire query parameters for the present fields only.
    ///
    /// Values are not URL-encoded here; the transport does that.
    pub fn to_params(&self) -> BTreeMap<&'static str, String> {
        let mut params = BTreeMap::new();

        if let Some(page) = self.page {
            params.insert("page", page.to_string());
        }
        if let Some(size) = self.size {
            params.insert("size", size.to_string());
        }
        if let Some(sort_by) = &self.sort_by {
            params.insert("sortBy", sort_by.clone());
        }
        if let Some(direction) = self.sort_direction {
            params.insert("sortDirection", direction.as_str().to_string());
        }
        if let Some(employee) = &self.employee {
            params.insert("employee", employee.clone());
        }
        if let Some(country) = &self.country {
            params.insert("country", country.clone());
        }
        if let Some(country_dest) = &self.country_dest {
            params.insert("countryDest", country_dest.clone());
        }
        if let Some(risk) = self.risk {
            params.insert("risk", risk.as_str().to_string());
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_has_no_params() {
        assert!(ListingQuery::new().to_params().is_empty());
    }

    #[test]
    fn sort_only_query_emits_exactly_sort_params() {
        let params = ListingQuery::new()
            .sort("employee", SortDirection::Desc)
            .to_params();

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("sortBy").map(String::as_str), Some("employee"));
        assert_eq!(params.get("sortDirection").map(String::as_str), Some("DESC"));
    }

    #[test]
    fn all_fields_use_wire_names() {
        let params = ListingQuery::new()
            .page(3)
            .size(25)
            .sort("startDate", SortDirection::Asc)
            .employee("jane")
            .country("Germany")
            .country_dest("Costa Rica")
            .risk(Risk::HighRisk)
            .to_params();

        assert_eq!(params["page"], "3");
        assert_eq!(params["size"], "25");
        assert_eq!(params["sortBy"], "startDate");
        assert_eq!(params["sortDirection"], "ASC");
        assert_eq!(params["employee"], "jane");
        assert_eq!(params["country"], "Germany");
        assert_eq!(params["countryDest"], "Costa Rica");
        assert_eq!(params["risk"], "HIGH_RISK");
    }

    #[test]
    fn large_numbers_are_not_locale_formatted() {
        let params = ListingQuery::new().page(12345).to_params();
        assert_eq!(params["page"], "12345");
    }

    #[test]
    fn direction_parsing_defaults_to_ascending() {
        assert_eq!(SortDirection::from("desc".to_string()), SortDirection::Desc);
        assert_eq!(SortDirection::from("DESC".to_string()), SortDirection::Desc);
        assert_eq!(SortDirection::from("sideways".to_string()), SortDirection::Asc);
        assert_eq!(SortDirection::Asc.toggle(), SortDirection::Desc);
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let query: ListingQuery = serde_json::from_str(
            r#"{"page":1,"sortBy":"days","sortDirection":"desc","countryDest":"Spain","risk":"NO_RISK"}"#,
        )
        .unwrap();

        assert_eq!(query.page, Some(1));
        assert_eq!(query.sort_by.as_deref(), Some("days"));
        assert_eq!(query.sort_direction, Some(SortDirection::Desc));
        assert_eq!(query.country_dest.as_deref(), Some("Spain"));
        assert_eq!(query.risk, Some(Risk::NoRisk));
        assert_eq!(query.size, None);
    }
}
