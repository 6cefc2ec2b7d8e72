use serde::{Deserialize, Serialize};

/// Colour family of a status pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Green,
    Blue,
    Purple,
    Orange,
    Red,
    Gray,
}

impl BadgeTone {
    pub fn label(self) -> &'static str {
        match self {
            BadgeTone::Green => "green",
            BadgeTone::Blue => "blue",
            BadgeTone::Purple => "purple",
            BadgeTone::Orange => "orange",
            BadgeTone::Red => "red",
            BadgeTone::Gray => "gray",
        }
    }
}
