//! Parsing of the date fragments scraped from the collection page.

use chrono::NaiveDate;

use crate::Error;

/// The normalized date format used in messages.
pub static FORMAT: &str = "%d-%m-%Y";
/// The date format following the weekday on the collection page, e.g. `5 August 2024`.
static PAGE_FORMAT: &str = "%d %B %Y";

/// Parse a fragment like `Monday, 5 August 2024` to a date.
///
/// The weekday before the comma is ignored.
pub fn parse_collection_date(fragment: &str) -> Result<NaiveDate, Error> {
    let Some(date_string) = fragment.split(',').nth(1).map(str::trim) else {
        return Err(Error::MissingSeparator(fragment.to_string()));
    };
    tracing::debug!(date_string, "parsing collection date");
    NaiveDate::parse_from_str(date_string, PAGE_FORMAT).map_err(|source| Error::DateFormat {
        fragment: fragment.to_string(),
        source,
    })
}

/// Parse a fragment like `Monday, 5 August 2024` to `05-08-2024`.
pub fn get_date(fragment: &str) -> Result<String, Error> {
    let date = parse_collection_date(fragment)?;
    Ok(date.format(FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::{
        date::{get_date, parse_collection_date},
        Error,
    };

    static MONTHS: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];

    #[test]
    fn test_get_date() {
        assert_eq!(get_date(" Monday, 5 August 2024").unwrap(), "05-08-2024");
        assert_eq!(get_date("Tuesday, 31 December 2024 ").unwrap(), "31-12-2024");
    }

    #[test]
    fn test_every_month() {
        for (index, month) in MONTHS.iter().enumerate() {
            for day in [1, 9, 10, 28] {
                let fragment = format!("Someday, {day} {month} 2025");
                let expected = format!("{day:02}-{:02}-2025", index + 1);
                assert_eq!(get_date(&fragment).unwrap(), expected, "{fragment}");
            }
        }
    }

    #[test]
    fn test_missing_comma() {
        let err = parse_collection_date("Monday 5 August 2024").unwrap_err();
        assert!(matches!(err, Error::MissingSeparator(_)));
    }

    #[test]
    fn test_bad_date() {
        let err = parse_collection_date("Monday, 5 Augst 2024").unwrap_err();
        assert!(matches!(err, Error::DateFormat { .. }));
        let err = parse_collection_date("Friday, 31 February 2024").unwrap_err();
        assert!(matches!(err, Error::DateFormat { .. }));
    }

    #[test]
    fn test_parse_collection_date() {
        assert_eq!(
            parse_collection_date("Wednesday, 7 August 2024").unwrap(),
            NaiveDate::from_ymd_opt(2024, 8, 7).unwrap()
        );
    }
}
