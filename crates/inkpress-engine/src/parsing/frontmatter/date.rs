use chrono::NaiveDate;

/// Date formats accepted in front matter, tried in order.
const FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%m/%d/%Y",
];

/// Parses a human-readable date permissively, normalizing to a single
/// calendar-date representation.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2014-01-02")]
    #[case("2014/01/02")]
    #[case("January 2, 2014")]
    #[case("Jan 2, 2014")]
    #[case("January 2 2014")]
    #[case("2 January 2014")]
    #[case("2 Jan 2014")]
    #[case("01/02/2014")]
    #[case("  2014-01-02  ")]
    fn accepted_formats_normalize(#[case] input: &str) {
        assert_eq!(
            parse_date(input),
            NaiveDate::from_ymd_opt(2014, 1, 2),
            "failed for {input:?}"
        );
    }

    #[rstest]
    #[case("")]
    #[case("someday")]
    #[case("2014-13-40")]
    #[case("Januaryish 2, 2014")]
    fn rejected_formats_return_none(#[case] input: &str) {
        assert_eq!(parse_date(input), None, "accepted {input:?}");
    }
}
