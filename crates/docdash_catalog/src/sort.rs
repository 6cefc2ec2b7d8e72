use std::cmp::Ordering;
use std::str::FromStr;

use docdash_contract::{DocdashError, DocumentRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    LastModified,
    Owner,
    Size,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    fn orient(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortField {
    type Err = DocdashError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "name" => Ok(SortField::Name),
            "lastmodified" => Ok(SortField::LastModified),
            "owner" => Ok(SortField::Owner),
            "size" => Ok(SortField::Size),
            _ => Err(DocdashError::UnknownSortField(raw.to_string())),
        }
    }
}

impl FromStr for SortDirection {
    type Err = DocdashError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(DocdashError::UnknownSortDirection(raw.to_string())),
        }
    }
}

/// Column/direction selection of the document table header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: SortField::LastModified,
            direction: SortDirection::Desc,
        }
    }
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Clicking the active column flips direction; any other column starts ascending.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Asc;
        }
    }

    pub fn indicator(&self, field: SortField) -> Option<&'static str> {
        if self.field != field {
            return None;
        }
        Some(match self.direction {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        })
    }

    pub fn apply(&self, records: &[DocumentRecord]) -> Vec<DocumentRecord> {
        sort_documents(records, self.field, self.direction)
    }
}

/// Returns a sorted copy; `records` is left untouched. Equal keys keep input order.
pub fn sort_documents(
    records: &[DocumentRecord],
    field: SortField,
    direction: SortDirection,
) -> Vec<DocumentRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare_by(a, b, field, direction));
    sorted
}

fn compare_by(
    a: &DocumentRecord,
    b: &DocumentRecord,
    field: SortField,
    direction: SortDirection,
) -> Ordering {
    match field {
        SortField::Name => direction.orient(a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        SortField::Owner => direction.orient(a.owner.to_lowercase().cmp(&b.owner.to_lowercase())),
        SortField::LastModified => direction.orient(a.last_modified.cmp(&b.last_modified)),
        SortField::Size => compare_sizes(
            size_magnitude(&a.size),
            size_magnitude(&b.size),
            direction,
        ),
    }
}

// Unparsable sizes sort after every number in both directions and tie with each other.
fn compare_sizes(a: Option<f64>, b: Option<f64>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => direction.orient(a.total_cmp(&b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Numeric magnitude of a human size string with the unit discarded:
/// `"2.4 MB"` is `2.4` and `"856 KB"` is `856`.
///
/// Every character other than ASCII digits and `.` is stripped, then the
/// longest leading decimal number is parsed.
pub fn size_magnitude(size: &str) -> Option<f64> {
    let stripped: String = size
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut end = 0;
    let mut seen_dot = false;
    for (idx, c) in stripped.char_indices() {
        if c == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
        }
        end = idx + c.len_utf8();
    }

    let number = &stripped[..end];
    if !number.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    number.parse::<f64>().ok()
}
