//! The closed set of item categories and their advisory detail attributes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IngestError;

/// Item category. Gates matching: items of different categories never match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Smartphone,
    Laptop,
    Tablet,
    Headphone,
    Smartwatch,
    Wallet,
    Keys,
    Bag,
    Other,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Smartphone,
        Category::Laptop,
        Category::Tablet,
        Category::Headphone,
        Category::Smartwatch,
        Category::Wallet,
        Category::Keys,
        Category::Bag,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Smartphone => "Smartphone",
            Category::Laptop => "Laptop",
            Category::Tablet => "Tablet",
            Category::Headphone => "Headphone",
            Category::Smartwatch => "Smartwatch",
            Category::Wallet => "Wallet",
            Category::Keys => "Keys",
            Category::Bag => "Bag",
            Category::Other => "Other",
        }
    }

    /// Detail keys the reporting form asks for. Advisory only: the data model
    /// accepts any key.
    pub fn attributes(&self) -> &'static [&'static str] {
        match self {
            Category::Smartphone => &[
                "brand",
                "model",
                "color",
                "case_description",
                "has_lock_screen",
            ],
            Category::Laptop => &["brand", "model", "color", "has_stickers", "laptop_bag"],
            Category::Tablet => &["brand", "model", "color", "has_case", "screen_size"],
            Category::Headphone => &["brand", "model", "color", "wired_wireless", "has_case"],
            Category::Smartwatch => &["brand", "model", "color", "band_type"],
            Category::Wallet => &["color", "size", "distinguishing_features"],
            Category::Keys => &[
                "color",
                "size",
                "distinguishing_features",
                "number_of_keys",
                "keychain_description",
            ],
            Category::Bag => &["color", "size", "distinguishing_features", "brand", "type"],
            Category::Other => &["color", "size", "distinguishing_features", "description"],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = IngestError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| IngestError::InvalidCategory(s.to_string()))
    }
}

/// Turn an attribute key into a form label: `case_description` → `Case description`.
pub fn attribute_label(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
