//! # newsprep-dates
//!
//! Assigns a uniformly random publication date within a fixed calendar
//! range to each article, replacing any existing `date` field. The
//! randomness source is injectable so tests can seed it.

use chrono::NaiveDate;
use newsprep_common::{Article, Error, Result};
use rand::Rng;

/// Calendar range for random dates: inclusive start, exclusive end,
/// whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end <= start {
            return Err(Error::InvalidInput(format!(
                "Date range end {end} must be after start {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// The standard range: 2020-01-01 up to (not including) 2024-11-01
    pub fn standard() -> Self {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid start date");
        let end = NaiveDate::from_ymd_opt(2024, 11, 1).expect("valid end date");
        Self { start, end }
    }

    /// Draw a uniformly random date in `[start, end)`
    pub fn random_date<R: Rng>(&self, rng: &mut R) -> NaiveDate {
        let days = (self.end - self.start).num_days();
        self.start + chrono::Duration::days(rng.gen_range(0..days))
    }
}

/// Overwrite every article's `date` with a random date from `range`,
/// formatted `YYYY-MM-DD`. Returns the number of articles touched.
pub fn randomize_dates<R: Rng>(articles: &mut [Article], range: DateRange, rng: &mut R) -> usize {
    for article in articles.iter_mut() {
        let date = range.random_date(rng);
        article.date = Some(date.format("%Y-%m-%d").to_string());
    }

    articles.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_invalid_range_rejected() {
        let day = NaiveDate::from_ymd_opt(2022, 5, 1).unwrap();
        assert!(DateRange::new(day, day).is_err());
        assert!(DateRange::new(day, day.pred_opt().unwrap()).is_err());
    }

    #[test]
    fn test_random_dates_stay_in_range() {
        let range = DateRange::standard();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let date = range.random_date(&mut rng);
            assert!(date >= range.start);
            assert!(date < range.end);
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let range = DateRange::standard();

        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(range.random_date(&mut a), range.random_date(&mut b));
        }
    }

    #[test]
    fn test_randomize_overwrites_existing_dates() {
        let mut articles = vec![
            Article {
                date: Some("1999-01-01".to_string()),
                ..Default::default()
            },
            Article::default(),
        ];
        let mut rng = StdRng::seed_from_u64(3);

        let touched = randomize_dates(&mut articles, DateRange::standard(), &mut rng);
        assert_eq!(touched, 2);

        for article in &articles {
            let date = article.date.as_deref().unwrap();
            assert_ne!(date, "1999-01-01");
            // YYYY-MM-DD shape
            assert_eq!(date.len(), 10);
            assert!(NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok());
        }
    }

    #[test]
    fn test_one_day_range_is_constant() {
        let start = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
        let range = DateRange::new(start, start.succ_opt().unwrap()).unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..10 {
            assert_eq!(range.random_date(&mut rng), start);
        }
    }
}
