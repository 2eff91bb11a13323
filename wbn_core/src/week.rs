//! Selection of the collections falling in the current ISO week.

use chrono::{Datelike, NaiveDate};

use crate::model::{CollectionRecord, WeeklyResult};

/// Get the categories collected in the same ISO week as `today`.
///
/// Only the week number is compared, not the ISO year. When several categories match, the
/// result carries the date of the last one in record order.
pub fn this_week(record: &CollectionRecord, today: NaiveDate) -> WeeklyResult {
    let current_week = today.iso_week().week();
    let mut result = WeeklyResult::default();
    for (category, date) in record.iter() {
        if date.iso_week().week() == current_week {
            result.categories.push(category);
            result.collection_date = Some(date);
        }
    }
    tracing::info!(
        week = current_week,
        categories = ?result.categories,
        "matched collections"
    );
    result
}

/// Get the categories collected in the current ISO week by the local clock.
pub fn this_week_now(record: &CollectionRecord) -> WeeklyResult {
    this_week(record, chrono::Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use crate::{
        model::{Category, CollectionRecord},
        week::{this_week, this_week_now},
    };

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Wednesday of ISO week 32 in 2024.
    fn today() -> NaiveDate {
        date(2024, 8, 7)
    }

    #[test]
    fn test_single_match() {
        let record = CollectionRecord::from_iter([(Category::Garbage, today())]);
        let result = this_week(&record, today());
        assert_eq!(result.message(), vec!["07-08-2024", "Garbage"]);
    }

    #[test]
    fn test_today_by_local_clock() {
        let today = chrono::Local::now().date_naive();
        let record = CollectionRecord::from_iter([(Category::Garbage, today)]);
        let result = this_week_now(&record);
        assert_eq!(
            result.message(),
            vec![today.format("%d-%m-%Y").to_string(), "Garbage".to_string()]
        );
    }

    #[test]
    fn test_no_match() {
        let record = CollectionRecord::from_iter([
            (Category::Garbage, date(2024, 8, 12)),
            (Category::Green, date(2024, 8, 4)),
        ]);
        let result = this_week(&record, today());
        assert!(result.is_empty());
        assert_eq!(result.message(), vec![""]);
    }

    #[test]
    fn test_week_boundaries() {
        // Monday and Sunday of week 32 match, the days around them do not.
        let record = CollectionRecord::from_iter([
            (Category::Garbage, date(2024, 8, 5)),
            (Category::Green, date(2024, 8, 11)),
            (Category::Recycling, date(2024, 8, 4)),
        ]);
        let result = this_week(&record, today());
        assert_eq!(result.categories, vec![Category::Garbage, Category::Green]);
    }

    /// The prepended date is the one of the last matching entry in record order, which need
    /// not be the earliest or the latest date.
    #[test]
    fn test_last_match_wins() {
        let record = CollectionRecord::from_iter([
            (Category::Recycling, date(2024, 8, 9)),
            (Category::Garbage, date(2024, 8, 5)),
            (Category::Green, date(2024, 8, 20)),
        ]);
        let result = this_week(&record, today());
        assert_eq!(result.message(), vec!["05-08-2024", "Recycling", "Garbage"]);
    }

    /// The ISO year is ignored: week 32 of 2023 matches week 32 of 2024.
    #[test]
    fn test_week_number_only() {
        let record = CollectionRecord::from_iter([(Category::Green, date(2023, 8, 9))]);
        let result = this_week(&record, today());
        assert_eq!(result.message(), vec!["09-08-2023", "Green"]);
        let next_year = today() + Duration::weeks(52);
        assert_eq!(this_week(&record, next_year).categories, vec![Category::Green]);
    }
}
