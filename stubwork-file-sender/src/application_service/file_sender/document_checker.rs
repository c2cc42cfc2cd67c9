use chrono::Months;

use crate::domain::{Document, SkipReason};

use super::{Clock, DocumentCheck};

/// Document formats accepted when no policy overrides them.
pub const DEFAULT_ACCEPTED_FORMATS: [&str; 2] = ["4.0", "3.1"];

/// Maximum document age, in calendar months, when no policy overrides it.
pub const DEFAULT_MAX_AGE_MONTHS: u32 = 1;

/// Accepts documents whose format is in an exact allow-list and which are
/// younger than a number of calendar months.
///
/// - Format comparison is plain string equality, no version semantics.
/// - A document is fresh while `created + max_age > now`; month addition clamps
///   to the last day of a shorter month.
pub struct DocumentChecker<C> {
    clock: C,
    accepted_formats: Vec<String>,
    max_age: Months,
}

impl<C> DocumentChecker<C>
where
    C: Clock,
{
    pub fn new(clock: C) -> Self {
        Self::with_policy(
            clock,
            DEFAULT_ACCEPTED_FORMATS.iter().map(|f| f.to_string()).collect(),
            DEFAULT_MAX_AGE_MONTHS,
        )
    }

    pub fn with_policy(clock: C, accepted_formats: Vec<String>, max_age_months: u32) -> Self {
        Self {
            clock,
            accepted_formats,
            max_age: Months::new(max_age_months),
        }
    }

    fn check_format(&self, document: &Document) -> Result<(), SkipReason> {
        if self
            .accepted_formats
            .iter()
            .any(|format| format == document.format())
        {
            Ok(())
        } else {
            Err(SkipReason::UnsupportedFormat(document.format().to_string()))
        }
    }

    fn check_actual(&self, document: &Document) -> Result<(), SkipReason> {
        let created = document.created();
        // Out of range only for dates near the end of time, which are not stale.
        let fresh = created
            .checked_add_months(self.max_age)
            .map_or(true, |expires| expires > self.clock.now());

        if fresh {
            Ok(())
        } else {
            Err(SkipReason::Outdated { created })
        }
    }
}

impl<C> DocumentCheck for DocumentChecker<C>
where
    C: Clock,
{
    fn check(&self, document: &Document) -> Result<(), SkipReason> {
        self.check_format(document)?;
        self.check_actual(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn document(created: DateTime<Utc>, format: &str) -> Document {
        Document::new("doc", vec![1, 2, 3], created, format)
    }

    #[test]
    fn accepts_known_formats() {
        let now = at(2024, 5, 15);
        let checker = DocumentChecker::new(FixedClock(now));

        assert_eq!(checker.check(&document(now, "4.0")), Ok(()));
        assert_eq!(checker.check(&document(now, "3.1")), Ok(()));
    }

    #[test]
    fn rejects_other_formats_without_version_semantics() {
        let now = at(2024, 5, 15);
        let checker = DocumentChecker::new(FixedClock(now));

        for format in ["3.0", "4.00", "4", " 4.0", "5.0", ""] {
            assert_eq!(
                checker.check(&document(now, format)),
                Err(SkipReason::UnsupportedFormat(format.to_string()))
            );
        }
    }

    #[test]
    fn exactly_one_month_old_is_outdated() {
        let now = at(2024, 5, 15);
        let checker = DocumentChecker::new(FixedClock(now));
        let created = at(2024, 4, 15);

        assert_eq!(
            checker.check(&document(created, "4.0")),
            Err(SkipReason::Outdated { created })
        );
    }

    #[test]
    fn one_second_inside_the_month_is_fresh() {
        let now = at(2024, 5, 15);
        let checker = DocumentChecker::new(FixedClock(now));
        let created = at(2024, 4, 15) + Duration::seconds(1);

        assert_eq!(checker.check(&document(created, "4.0")), Ok(()));
    }

    #[test]
    fn month_addition_clamps_to_month_end() {
        // Jan 31 + 1 month = Feb 29 (2024 is a leap year).
        let created = at(2024, 1, 31);

        let before = DocumentChecker::new(FixedClock(at(2024, 2, 29) - Duration::seconds(1)));
        assert_eq!(before.check(&document(created, "4.0")), Ok(()));

        let on = DocumentChecker::new(FixedClock(at(2024, 2, 29)));
        assert_eq!(
            on.check(&document(created, "4.0")),
            Err(SkipReason::Outdated { created })
        );
    }

    #[test]
    fn future_documents_are_fresh() {
        let now = at(2024, 5, 15);
        let checker = DocumentChecker::new(FixedClock(now));

        assert_eq!(checker.check(&document(at(2025, 1, 1), "3.1")), Ok(()));
    }

    #[test]
    fn custom_policy_replaces_defaults() {
        let now = at(2024, 5, 15);
        let checker = DocumentChecker::with_policy(FixedClock(now), vec!["5.0".into()], 3);

        assert_eq!(checker.check(&document(at(2024, 3, 1), "5.0")), Ok(()));
        assert_eq!(
            checker.check(&document(now, "4.0")),
            Err(SkipReason::UnsupportedFormat("4.0".into()))
        );
    }

    #[test]
    fn format_is_checked_before_age() {
        let now = at(2024, 5, 15);
        let checker = DocumentChecker::new(FixedClock(now));

        assert_eq!(
            checker.check(&document(at(2020, 1, 1), "1.0")),
            Err(SkipReason::UnsupportedFormat("1.0".into()))
        );
    }
}
