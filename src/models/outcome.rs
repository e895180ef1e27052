// Per-domain collection outcome

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Result of collecting one domain.
///
/// A failed domain carries the reason in memory but serializes as `{}`, so the
/// exported document keeps one object per domain whatever happened.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainOutcome<T> {
    Collected(T),
    Failed { reason: String },
}

impl<T> DomainOutcome<T> {
    pub fn failed(reason: impl Into<String>) -> Self {
        DomainOutcome::Failed {
            reason: reason.into(),
        }
    }

    pub fn is_collected(&self) -> bool {
        matches!(self, DomainOutcome::Collected(_))
    }

    pub fn collected(&self) -> Option<&T> {
        match self {
            DomainOutcome::Collected(record) => Some(record),
            DomainOutcome::Failed { .. } => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            DomainOutcome::Collected(_) => None,
            DomainOutcome::Failed { reason } => Some(reason),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for DomainOutcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(record) => DomainOutcome::Collected(record),
            Err(e) => DomainOutcome::failed(e.to_string()),
        }
    }
}

impl<T: Serialize> Serialize for DomainOutcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DomainOutcome::Collected(record) => record.serialize(serializer),
            DomainOutcome::Failed { .. } => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_domain_serializes_as_empty_object() {
        let outcome: DomainOutcome<u32> = DomainOutcome::failed("boom");
        assert_eq!(serde_json::to_string(&outcome).unwrap(), "{}");
        assert_eq!(outcome.failure_reason(), Some("boom"));
    }

    #[test]
    fn collected_domain_serializes_transparently() {
        let outcome = DomainOutcome::Collected(vec![1, 2]);
        assert_eq!(serde_json::to_string(&outcome).unwrap(), "[1,2]");
        assert!(outcome.is_collected());
    }

    #[test]
    fn from_result_keeps_error_text() {
        let outcome: DomainOutcome<u8> = Err::<u8, _>("provider gone").into();
        assert_eq!(outcome.failure_reason(), Some("provider gone"));
    }
}
