use chrono::{DateTime, FixedOffset, Utc};

/// Expiry requested for a signed URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timeout {
    /// Absolute Unix timestamp in seconds
    At(i64),
    /// Date/time expression, e.g. `+1 minute` or `2030-01-01T00:00:00Z`
    Expression(String),
    /// Structured date/time value
    DateTime(DateTime<Utc>),
}

impl Timeout {
    /// Interpret a command-line argument: digits only is a timestamp,
    /// anything else an expression.
    pub fn from_arg(arg: &str) -> Self {
        let trimmed = arg.trim();
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(timestamp) = trimmed.parse() {
                return Timeout::At(timestamp);
            }
        }
        Timeout::Expression(arg.to_string())
    }
}

impl From<i64> for Timeout {
    fn from(timestamp: i64) -> Self {
        Timeout::At(timestamp)
    }
}

impl From<&str> for Timeout {
    fn from(expression: &str) -> Self {
        Timeout::Expression(expression.to_string())
    }
}

impl From<String> for Timeout {
    fn from(expression: String) -> Self {
        Timeout::Expression(expression)
    }
}

impl From<DateTime<Utc>> for Timeout {
    fn from(datetime: DateTime<Utc>) -> Self {
        Timeout::DateTime(datetime)
    }
}

impl From<DateTime<FixedOffset>> for Timeout {
    fn from(datetime: DateTime<FixedOffset>) -> Self {
        Timeout::DateTime(datetime.with_timezone(&Utc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_arg_digits_is_timestamp() {
        assert_eq!(Timeout::from_arg("1700000000"), Timeout::At(1_700_000_000));
    }

    #[test]
    fn test_from_arg_expression() {
        assert_eq!(
            Timeout::from_arg("+1 minute"),
            Timeout::Expression("+1 minute".to_string())
        );
        assert_eq!(
            Timeout::from_arg("-5"),
            Timeout::Expression("-5".to_string())
        );
    }

    #[test]
    fn test_from_arg_overflow_falls_back_to_expression() {
        let arg = "99999999999999999999999";
        assert_eq!(Timeout::from_arg(arg), Timeout::Expression(arg.to_string()));
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Timeout::from(42i64), Timeout::At(42));
        assert_eq!(
            Timeout::from("tomorrow"),
            Timeout::Expression("tomorrow".to_string())
        );

        let fixed = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2030, 1, 1, 1, 0, 0)
            .unwrap();
        let utc = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(Timeout::from(fixed), Timeout::DateTime(utc));
    }
}
