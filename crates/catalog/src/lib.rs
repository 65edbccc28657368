//! # Location Catalog (`catalog`)
//!
//! Read-only reference data describing where items can be lost or found on
//! campus. Every entry is a `(building, floor, description)` triple; the
//! reporting form walks building → floor → location using the three list
//! operations below, then stores the formatted string on the item.
//!
//! The catalog is seeded once at process start and never mutated. Lookups for
//! unknown buildings or floors return empty results rather than errors.
//!
//! ## Floor ordering
//!
//! [`LocationCatalog::list_floors`] sorts floors with `"Ground"` first, then
//! numeric floors by integer value, then any remaining named floors
//! lexicographically. Entries without a floor are not listed.
//!
//! ## Example
//!
//! ```
//! use catalog::LocationCatalog;
//!
//! let catalog = LocationCatalog::default();
//! assert_eq!(catalog.list_floors("UB"), vec!["1", "2", "4", "6"]);
//! assert_eq!(catalog.list_floors("Meenakshi"), vec!["Ground"]);
//!
//! let lobby = &catalog.list_locations("UB", "4")[0];
//! assert_eq!(lobby.to_string(), "UB, Floor 4 (Entrance Lobby)");
//! ```

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Floor label that always sorts before numbered floors.
pub const GROUND_FLOOR: &str = "Ground";

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub building_name: String,
    /// Empty when the building has no floor distinction.
    #[serde(default)]
    pub floor_number: String,
    #[serde(default)]
    pub description: String,
}

impl Location {
    pub fn new(
        building_name: impl Into<String>,
        floor_number: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            building_name: building_name.into(),
            floor_number: floor_number.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.building_name)?;
        if !self.floor_number.is_empty() {
            write!(f, ", Floor {}", self.floor_number)?;
        }
        if !self.description.is_empty() {
            write!(f, " ({})", self.description)?;
        }
        Ok(())
    }
}

/// Render a location the way it is stored on an item report:
/// `"Building, Floor N (Description)"`, omitting the empty parts.
pub fn format_location(location: &Location) -> String {
    location.to_string()
}

/// Sort key for floor labels. Variant order is the display order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum FloorKey<'a> {
    Ground,
    Numbered(i64),
    Named(&'a str),
}

impl<'a> FloorKey<'a> {
    fn of(floor: &'a str) -> Self {
        let floor = floor.trim();
        if floor == GROUND_FLOOR {
            return FloorKey::Ground;
        }
        match floor.parse::<i64>() {
            Ok(n) => FloorKey::Numbered(n),
            Err(_) => FloorKey::Named(floor),
        }
    }
}

fn compare_floors(a: &str, b: &str) -> Ordering {
    FloorKey::of(a).cmp(&FloorKey::of(b))
}

/// Immutable set of known locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationCatalog {
    locations: Vec<Location>,
}

impl LocationCatalog {
    /// Build a catalog from caller-supplied entries, keeping their order.
    pub fn with_locations(locations: Vec<Location>) -> Self {
        debug!(entries = locations.len(), "catalog_loaded");
        Self { locations }
    }

    /// All entries in catalog order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Distinct building names, ascending.
    pub fn list_buildings(&self) -> Vec<String> {
        self.locations
            .iter()
            .map(|loc| loc.building_name.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    /// Distinct, non-empty floors of `building` in display order.
    pub fn list_floors(&self, building: &str) -> Vec<String> {
        let mut floors: Vec<&str> = self
            .locations
            .iter()
            .filter(|loc| loc.building_name == building && !loc.floor_number.is_empty())
            .map(|loc| loc.floor_number.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        floors.sort_by(|a, b| compare_floors(a, b));
        floors.into_iter().map(str::to_owned).collect()
    }

    /// Entries whose building and floor both match exactly.
    pub fn list_locations(&self, building: &str, floor: &str) -> Vec<Location> {
        self.locations
            .iter()
            .filter(|loc| loc.building_name == building && loc.floor_number == floor)
            .cloned()
            .collect()
    }
}

impl Default for LocationCatalog {
    /// The campus locations the reporting form ships with.
    fn default() -> Self {
        Self::with_locations(vec![
            Location::new("UB", "4", "Entrance Lobby"),
            Location::new("UB", "6", "Near Lift"),
            Location::new("TP", "7", "Near Computer Lab"),
            Location::new("Architecture", "2", "Inside the Classroom"),
            Location::new("Java", "", "Near Evergreen"),
            Location::new("BEL", "3", "Infront of FittingLab"),
            Location::new("Meenakshi", GROUND_FLOOR, "Infront of sofa"),
            Location::new("Auditorium", "1", "Inside Restroom"),
            Location::new("UB", "2", "Library"),
            Location::new("UB", "1", "Own Book Reading Room"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buildings_are_sorted_and_deduplicated() {
        let catalog = LocationCatalog::default();
        assert_eq!(
            catalog.list_buildings(),
            vec!["Architecture", "Auditorium", "BEL", "Java", "Meenakshi", "TP", "UB"]
        );
    }

    #[test]
    fn ub_floors_sort_numerically() {
        let catalog = LocationCatalog::default();
        assert_eq!(catalog.list_floors("UB"), vec!["1", "2", "4", "6"]);
    }

    #[test]
    fn ground_floor_is_listed_alone_for_meenakshi() {
        let catalog = LocationCatalog::default();
        assert_eq!(catalog.list_floors("Meenakshi"), vec!["Ground"]);
    }

    #[test]
    fn empty_floor_is_not_listed() {
        let catalog = LocationCatalog::default();
        assert!(catalog.list_floors("Java").is_empty());
        assert_eq!(catalog.list_locations("Java", "").len(), 1);
    }

    #[test]
    fn numeric_order_is_not_lexicographic() {
        let catalog = LocationCatalog::with_locations(vec![
            Location::new("Tower", "10", ""),
            Location::new("Tower", "9", ""),
            Location::new("Tower", "Ground", ""),
            Location::new("Tower", "-1", ""),
        ]);
        assert_eq!(catalog.list_floors("Tower"), vec!["Ground", "-1", "9", "10"]);
    }

    #[test]
    fn named_floors_sort_after_numbers() {
        let catalog = LocationCatalog::with_locations(vec![
            Location::new("Hall", "Mezzanine", ""),
            Location::new("Hall", "2", ""),
            Location::new("Hall", "Basement", ""),
            Location::new("Hall", "Ground", ""),
            Location::new("Hall", "2", "duplicate floor"),
        ]);
        assert_eq!(
            catalog.list_floors("Hall"),
            vec!["Ground", "2", "Basement", "Mezzanine"]
        );
    }

    #[test]
    fn padded_labels_sort_like_trimmed_ones() {
        let catalog = LocationCatalog::with_locations(vec![
            Location::new("Hall", "Basement", ""),
            Location::new("Hall", " 4", ""),
            Location::new("Hall", " Ground", ""),
        ]);
        assert_eq!(catalog.list_floors("Hall"), vec![" Ground", " 4", "Basement"]);
    }

    #[test]
    fn unknown_lookups_are_empty() {
        let catalog = LocationCatalog::default();
        assert!(catalog.list_floors("Nowhere").is_empty());
        assert!(catalog.list_locations("UB", "99").is_empty());
        assert!(catalog.list_locations("Nowhere", "1").is_empty());
    }

    #[test]
    fn list_locations_requires_exact_match() {
        let catalog = LocationCatalog::default();
        let hits = catalog.list_locations("UB", "4");
        assert_eq!(hits, vec![Location::new("UB", "4", "Entrance Lobby")]);
        assert!(catalog.list_locations("ub", "4").is_empty());
    }

    #[test]
    fn formatting_omits_missing_parts() {
        assert_eq!(
            format_location(&Location::new("UB", "4", "Entrance Lobby")),
            "UB, Floor 4 (Entrance Lobby)"
        );
        assert_eq!(
            format_location(&Location::new("Java", "", "Near Evergreen")),
            "Java (Near Evergreen)"
        );
        assert_eq!(format_location(&Location::new("Gym", "", "")), "Gym");
        assert_eq!(format_location(&Location::new("TP", "7", "")), "TP, Floor 7");
    }

    #[test]
    fn location_deserializes_with_missing_optional_fields() {
        let loc: Location =
            serde_json::from_str(r#"{"building_name":"Library"}"#).expect("valid location json");
        assert_eq!(loc, Location::new("Library", "", ""));
    }
}
