use std::str::FromStr;

use chrono::NaiveDate;
use docdash_contract::{parse_date, DocdashError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    User,
    DateFrom,
    DateTo,
    DocumentType,
    Action,
}

impl FilterField {
    pub const ALL: [FilterField; 5] = [
        FilterField::User,
        FilterField::DateFrom,
        FilterField::DateTo,
        FilterField::DocumentType,
        FilterField::Action,
    ];
}

impl FromStr for FilterField {
    type Err = DocdashError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "user" => Ok(FilterField::User),
            "datefrom" => Ok(FilterField::DateFrom),
            "dateto" => Ok(FilterField::DateTo),
            "documenttype" => Ok(FilterField::DocumentType),
            "action" => Ok(FilterField::Action),
            _ => Err(DocdashError::UnknownFilterField(raw.to_string())),
        }
    }
}

/// Values of the report filter form. Empty strings mean "any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilters {
    pub user: String,
    pub date_from: String,
    pub date_to: String,
    pub document_type: String,
    pub action: String,
}

impl ReportFilters {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::User => &self.user,
            FilterField::DateFrom => &self.date_from,
            FilterField::DateTo => &self.date_to,
            FilterField::DocumentType => &self.document_type,
            FilterField::Action => &self.action,
        }
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let slot = match field {
            FilterField::User => &mut self.user,
            FilterField::DateFrom => &mut self.date_from,
            FilterField::DateTo => &mut self.date_to,
            FilterField::DocumentType => &mut self.document_type,
            FilterField::Action => &mut self.action,
        };
        *slot = value.into();
    }

    /// Form-style update keyed by field name, e.g. `dateFrom` or `date-from`.
    pub fn set_named(&mut self, name: &str, value: impl Into<String>) -> Result<(), DocdashError> {
        let field = name.parse::<FilterField>()?;
        self.set(field, value);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        FilterField::ALL
            .iter()
            .all(|field| self.get(*field).trim().is_empty())
    }

    /// Parsed date bounds; blank bounds are open.
    pub fn date_range(&self) -> Result<(Option<NaiveDate>, Option<NaiveDate>), DocdashError> {
        Ok((parse_bound(&self.date_from)?, parse_bound(&self.date_to)?))
    }
}

fn parse_bound(raw: &str) -> Result<Option<NaiveDate>, DocdashError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_date(raw).map(Some)
}
