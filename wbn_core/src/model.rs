//! The collection data extracted from the council page.

use std::fmt;

use chrono::NaiveDate;

use crate::date::FORMAT;

/// A kind of kerbside bin collected by the council.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Garbage,
    Green,
    Recycling,
}

impl Category {
    /// All categories, in the order a scraped label is matched against them.
    pub const ALL: [Category; 3] = [Category::Garbage, Category::Green, Category::Recycling];

    /// The label used on the council page and in the notification.
    pub fn label(self) -> &'static str {
        match self {
            Category::Garbage => "Garbage",
            Category::Green => "Green",
            Category::Recycling => "Recycling",
        }
    }

    /// Classify a scraped label by substring match.
    pub fn classify(label: &str) -> Option<Category> {
        Self::ALL
            .into_iter()
            .find(|category| label.contains(category.label()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The next collection date of each category, in the order they were found.
///
/// Each category appears at most once; inserting it again replaces the date in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionRecord {
    entries: Vec<(Category, NaiveDate)>,
}

impl CollectionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: Category, date: NaiveDate) {
        match self.entries.iter_mut().find(|(key, _)| *key == category) {
            Some(entry) => entry.1 = date,
            None => self.entries.push((category, date)),
        }
    }

    pub fn get(&self, category: Category) -> Option<NaiveDate> {
        self.entries
            .iter()
            .find(|(key, _)| *key == category)
            .map(|(_, date)| *date)
    }

    pub fn contains(&self, category: Category) -> bool {
        self.get(category).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, NaiveDate)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Category, NaiveDate)> for CollectionRecord {
    fn from_iter<I: IntoIterator<Item = (Category, NaiveDate)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (category, date) in iter {
            record.insert(category, date);
        }
        record
    }
}

/// The categories collected in the current week.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyResult {
    /// The date of the last matching category, if any matched.
    pub collection_date: Option<NaiveDate>,
    pub categories: Vec<Category>,
}

impl WeeklyResult {
    /// The notification message: the collection date (or an empty string) followed by the
    /// category labels.
    pub fn message(&self) -> Vec<String> {
        let date = self
            .collection_date
            .map(|date| date.format(FORMAT).to_string())
            .unwrap_or_default();
        std::iter::once(date)
            .chain(self.categories.iter().map(|category| category.label().to_string()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
