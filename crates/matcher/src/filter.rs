//! Report search: category, free text, location and event-time window.
//!
//! Every supplied predicate must hold (logical AND). Empty strings count as
//! "not supplied". Filtering never reorders and never fails; an unparsable
//! date bound simply matches nothing.
use chrono::{DateTime, Utc};
use ingest::{parse_event_time, parse_lower_bound, parse_upper_bound, Category, Item};
use serde::{Deserialize, Serialize};

/// Search predicates over an item collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterQuery {
    /// Case-insensitive substring of a detail value, `additional_info` or `location`.
    pub text: Option<String>,
    pub category: Option<Category>,
    /// Case-insensitive substring of `location`.
    pub building: Option<String>,
    /// Case-insensitive substring of `location`.
    pub floor: Option<String>,
    /// Inclusive lower bound on `event_time`.
    pub date_from: Option<String>,
    /// Inclusive upper bound on `event_time`. A bare date covers the whole day.
    pub date_to: Option<String>,
}

impl FilterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_building(mut self, building: impl Into<String>) -> Self {
        self.building = Some(building.into());
        self
    }

    pub fn with_floor(mut self, floor: impl Into<String>) -> Self {
        self.floor = Some(floor.into());
        self
    }

    pub fn with_date_range(
        mut self,
        from: Option<impl Into<String>>,
        to: Option<impl Into<String>>,
    ) -> Self {
        self.date_from = from.map(Into::into);
        self.date_to = to.map(Into::into);
        self
    }

    /// True when no predicate is supplied.
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && [
                &self.text,
                &self.building,
                &self.floor,
                &self.date_from,
                &self.date_to,
            ]
            .iter()
            .all(|field| non_empty(field).is_none())
    }

    /// Pre-lowercase the needles and parse the date bounds once.
    pub fn compile(&self) -> CompiledFilter {
        CompiledFilter {
            text: non_empty(&self.text).map(str::to_lowercase),
            category: self.category,
            building: non_empty(&self.building).map(str::to_lowercase),
            floor: non_empty(&self.floor).map(str::to_lowercase),
            from: non_empty(&self.date_from).map(parse_lower_bound),
            to: non_empty(&self.date_to).map(parse_upper_bound),
        }
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// A [`FilterQuery`] ready to be evaluated against many items.
///
/// Date bounds are `Some(None)` when supplied but unparsable.
#[derive(Debug, Clone)]
pub struct CompiledFilter {
    text: Option<String>,
    category: Option<Category>,
    building: Option<String>,
    floor: Option<String>,
    from: Option<Option<DateTime<Utc>>>,
    to: Option<Option<DateTime<Utc>>>,
}

impl CompiledFilter {
    pub fn matches(&self, item: &Item) -> bool {
        if let Some(category) = self.category {
            if item.category != category {
                return false;
            }
        }

        if let Some(needle) = &self.text {
            let in_details = item
                .details
                .values()
                .any(|value| value.to_lowercase().contains(needle.as_str()));
            if !in_details
                && !item.additional_info.to_lowercase().contains(needle.as_str())
                && !item.location.to_lowercase().contains(needle.as_str())
            {
                return false;
            }
        }

        if self.building.is_some() || self.floor.is_some() {
            let location = item.location.to_lowercase();
            for needle in [&self.building, &self.floor].into_iter().flatten() {
                if !location.contains(needle.as_str()) {
                    return false;
                }
            }
        }

        if self.from.is_none() && self.to.is_none() {
            return true;
        }
        let Some(event_time) = parse_event_time(&item.event_time) else {
            return false;
        };
        match self.from {
            Some(Some(from)) if event_time < from => return false,
            Some(None) => return false,
            _ => {}
        }
        match self.to {
            Some(Some(to)) if event_time > to => return false,
            Some(None) => return false,
            _ => {}
        }
        true
    }
}

/// Return the items satisfying every supplied predicate, in their original order.
pub fn filter_items(items: &[Item], query: &FilterQuery) -> Vec<Item> {
    if query.is_empty() {
        return items.to_vec();
    }
    let compiled = query.compile();
    items
        .iter()
        .filter(|item| compiled.matches(item))
        .cloned()
        .collect()
}
