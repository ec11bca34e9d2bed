//! The statistic contract shared by every probe.

use std::fmt;

use crate::error::StatResult;

/// A single statistic produced by a probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatValue {
    /// A plain count (pages, or a number with no known unit)
    Count(u64),
    /// A byte count
    Bytes(u64),
    /// Descriptive text
    Text(String),
    /// The source did not report the statistic
    NotDetected,
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Count(n) | StatValue::Bytes(n) => write!(f, "{}", n),
            StatValue::Text(s) => f.write_str(s),
            StatValue::NotDetected => f.write_str("Not detected"),
        }
    }
}

/// One labelled output line.
pub type StatLine = (String, StatValue);

/// Something that queries the OS once and yields a labelled value.
pub trait OsStat {
    /// Human-readable label
    fn name(&self) -> &str;

    /// Issue the query
    fn stat(&self) -> StatResult<StatValue>;

    /// All lines this stat prints, queried before anything is emitted.
    fn lines(&self) -> StatResult<Vec<StatLine>> {
        Ok(vec![(self.name().to_string(), self.stat()?)])
    }
}

/// Two stats reported together, in order.
///
/// The first failure aborts the pair; no line of a partially successful
/// pair is ever returned.
#[derive(Debug)]
pub struct CombinedOsStat<A, B> {
    first: A,
    second: B,
}

impl<A: OsStat, B: OsStat> CombinedOsStat<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: OsStat, B: OsStat> OsStat for CombinedOsStat<A, B> {
    fn name(&self) -> &str {
        "System"
    }

    fn stat(&self) -> StatResult<StatValue> {
        let text = self
            .lines()?
            .iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect::<Vec<_>>()
            .join("\n");
        Ok(StatValue::Text(text))
    }

    fn lines(&self) -> StatResult<Vec<StatLine>> {
        let mut lines = self.first.lines()?;
        lines.extend(self.second.lines()?);
        Ok(lines)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::StatError;
    use std::cell::Cell;

    /// Fixed-result stat that counts how often it was queried.
    pub(crate) struct FixedStat {
        pub label: &'static str,
        pub result: fn() -> StatResult<StatValue>,
        pub calls: Cell<u32>,
    }

    impl FixedStat {
        pub(crate) fn new(label: &'static str, result: fn() -> StatResult<StatValue>) -> Self {
            Self { label, result, calls: Cell::new(0) }
        }
    }

    impl OsStat for FixedStat {
        fn name(&self) -> &str {
            self.label
        }

        fn stat(&self) -> StatResult<StatValue> {
            self.calls.set(self.calls.get() + 1);
            (self.result)()
        }
    }

    #[test]
    fn value_display() {
        assert_eq!(StatValue::Count(42).to_string(), "42");
        assert_eq!(StatValue::Bytes(1024).to_string(), "1024");
        assert_eq!(StatValue::Text("Home".into()).to_string(), "Home");
        assert_eq!(StatValue::NotDetected.to_string(), "Not detected");
    }

    #[test]
    fn combined_keeps_order() {
        let combined = CombinedOsStat::new(
            FixedStat::new("OS code name", || Ok(StatValue::Text("Home".into()))),
            FixedStat::new("Available memory", || Ok(StatValue::Bytes(4096))),
        );
        let lines = combined.lines().unwrap();
        assert_eq!(
            lines,
            vec![
                ("OS code name".to_string(), StatValue::Text("Home".into())),
                ("Available memory".to_string(), StatValue::Bytes(4096)),
            ]
        );
        assert_eq!(
            combined.stat().unwrap(),
            StatValue::Text("OS code name: Home\nAvailable memory: 4096".into())
        );
    }

    #[test]
    fn combined_fails_on_first_error() {
        let combined = CombinedOsStat::new(
            FixedStat::new("OS code name", || {
                Err(StatError::NativeQueryFailure { query: "OS version info", code: 87 })
            }),
            FixedStat::new("Available memory", || Ok(StatValue::Bytes(4096))),
        );
        assert!(matches!(
            combined.lines(),
            Err(StatError::NativeQueryFailure { code: 87, .. })
        ));
        assert_eq!(combined.second.calls.get(), 0);
    }
}
