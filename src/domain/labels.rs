//! Presentation vocabulary of the reports
//!
//! Reports ship in two languages. The language selects the room-type
//! translation table, the host-category labels, and (in
//! [`crate::core::report`]) the CSV headers and filenames.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language of labels, headers and filenames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportLanguage {
    /// French labels, room types translated
    #[default]
    Fr,
    /// English labels, room types kept in the source vocabulary
    En,
}

impl ReportLanguage {
    /// Translates a source room type
    ///
    /// Values absent from the table are returned unchanged.
    pub fn translate_room_type<'a>(&self, room_type: &'a str) -> &'a str {
        match self {
            ReportLanguage::Fr => match room_type {
                "Entire home/apt" => "Logement entier",
                "Private room" => "Chambre privée",
                "Shared room" => "Chambre partagée",
                "Hotel room" => "Chambre d’hôtel",
                other => other,
            },
            ReportLanguage::En => room_type,
        }
    }

    /// Label of a host category in this language
    pub fn host_label(&self, category: HostCategory) -> &'static str {
        match (self, category) {
            (ReportLanguage::Fr, HostCategory::Superhost) => "Superhôte",
            (ReportLanguage::Fr, HostCategory::NonSuperhost) => "Non superhôte",
            (ReportLanguage::En, HostCategory::Superhost) => "superhost",
            (ReportLanguage::En, HostCategory::NonSuperhost) => "non_superhost",
        }
    }
}

impl FromStr for ReportLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fr" | "french" => Ok(ReportLanguage::Fr),
            "en" | "english" => Ok(ReportLanguage::En),
            other => Err(format!(
                "Invalid report language '{other}'. Must be one of: fr, en"
            )),
        }
    }
}

impl fmt::Display for ReportLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLanguage::Fr => write!(f, "fr"),
            ReportLanguage::En => write!(f, "en"),
        }
    }
}

/// Host category derived from the superhost flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HostCategory {
    /// `host_is_superhost == "t"`
    Superhost,
    /// Any other value, including a missing flag
    NonSuperhost,
}

impl HostCategory {
    /// Derives the category from the raw flag
    pub fn from_flag(flag: Option<&str>) -> Self {
        if flag == Some("t") {
            HostCategory::Superhost
        } else {
            HostCategory::NonSuperhost
        }
    }
}
