//! Store collaborator boundary and the gated upload.
//!
//! The engine never talks to the store directly. A `Publisher` fetches and
//! pushes records; `publish` runs the guardrail gate first and pushes only
//! when the gate allows, so nothing is partially uploaded.

use crate::error::{Error, Result};
use crate::guardrail::enforce;
use crate::models::{Decision, GuardrailWarning, MetadataRecord};
use tracing::{info, warn};

/// Remote store operations consumed by the engine. Synchronous request /
/// response; failures carry the store's error body in `Error::Store`.
pub trait Publisher {
    fn fetch_metadata(&self, app_id: &str, locale: &str) -> Result<MetadataRecord>;
    fn fetch_app_name(&self, app_id: &str) -> Result<String>;
    /// Update the localization named by `record.locale` with the fields
    /// present in `record`.
    fn push_metadata(&mut self, app_id: &str, record: &MetadataRecord) -> Result<()>;
}

/// Outcome of an accepted upload.
#[derive(Debug, Clone)]
pub struct PublishReport {
    pub overridden: bool,
    /// WARN findings bypassed with `force`, kept for the audit trail.
    pub bypassed: Vec<GuardrailWarning>,
}

/// Validate `record` and push it if the gate allows.
///
/// BLOCK findings reject with `GuardrailBlocked`; WARN findings without
/// `force` reject with `GuardrailUnconfirmed`.
pub fn publish<P: Publisher + ?Sized>(
    publisher: &mut P,
    app_id: &str,
    record: &MetadataRecord,
    force: bool,
) -> Result<PublishReport> {
    let decision = enforce(record, force);
    publish_decided(publisher, app_id, record, decision)
}

/// Push `record` under an already computed gate decision for it.
pub fn publish_decided<P: Publisher + ?Sized>(
    publisher: &mut P,
    app_id: &str,
    record: &MetadataRecord,
    decision: Decision,
) -> Result<PublishReport> {
    if !decision.allowed {
        if decision.summary.blocks > 0 {
            let mut fields: Vec<String> = decision
                .warnings
                .iter()
                .filter(|w| w.is_block())
                .map(|w| w.field.clone())
                .collect();
            fields.dedup();
            return Err(Error::GuardrailBlocked {
                fields,
                warnings: decision.warnings,
            });
        }
        return Err(Error::GuardrailUnconfirmed {
            warnings: decision.warnings,
        });
    }
    publisher.push_metadata(app_id, record)?;
    if decision.overridden {
        warn!(app_id, bypassed = decision.warnings.len(), "published with overridden warnings");
    } else {
        info!(app_id, "published");
    }
    Ok(PublishReport {
        overridden: decision.overridden,
        bypassed: decision.warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Field;

    #[derive(Default)]
    struct Recorder {
        pushed: Vec<(String, MetadataRecord)>,
        fail_with: Option<String>,
    }

    impl Publisher for Recorder {
        fn fetch_metadata(&self, _app_id: &str, _locale: &str) -> Result<MetadataRecord> {
            Ok(MetadataRecord::default())
        }

        fn fetch_app_name(&self, _app_id: &str) -> Result<String> {
            Ok("Pulse".into())
        }

        fn push_metadata(&mut self, app_id: &str, record: &MetadataRecord) -> Result<()> {
            if let Some(detail) = &self.fail_with {
                return Err(Error::Store {
                    detail: detail.clone(),
                });
            }
            self.pushed.push((app_id.to_string(), record.clone()));
            Ok(())
        }
    }

    #[test]
    fn test_block_never_pushes() {
        let mut p = Recorder::default();
        let r = MetadataRecord::default()
            .with(Field::Subtitle, "x".repeat(31))
            .with(Field::Keywords, "fit,health");
        let err = publish(&mut p, "123", &r, true).unwrap_err();
        match err {
            Error::GuardrailBlocked { fields, .. } => assert_eq!(fields, vec!["subtitle"]),
            other => panic!("unexpected {other:?}"),
        }
        assert!(p.pushed.is_empty());
    }

    #[test]
    fn test_warn_requires_force() {
        let mut p = Recorder::default();
        let r = MetadataRecord::default().with(Field::Description, "Email hi@pulse.app");
        let err = publish(&mut p, "123", &r, false).unwrap_err();
        assert!(matches!(err, Error::GuardrailUnconfirmed { .. }));
        assert_eq!(err.exit_code(), 1);
        assert!(p.pushed.is_empty());

        let report = publish(&mut p, "123", &r, true).unwrap();
        assert!(report.overridden);
        assert!(!report.bypassed.is_empty());
        assert_eq!(p.pushed.len(), 1);
    }

    #[test]
    fn test_clean_record_pushes_once() {
        let mut p = Recorder::default();
        let r = MetadataRecord::default()
            .with(Field::Locale, "en-US")
            .with(Field::PromotionalText, "Now with widgets");
        let report = publish(&mut p, "123", &r, false).unwrap();
        assert!(!report.overridden);
        assert!(report.bypassed.is_empty());
        assert_eq!(p.pushed, vec![("123".to_string(), r)]);
    }

    #[test]
    fn test_store_error_is_verbatim() {
        let mut p = Recorder {
            fail_with: Some("ENTITY_ERROR.ATTRIBUTE.INVALID: subtitle".into()),
            ..Default::default()
        };
        let r = MetadataRecord::default().with(Field::Subtitle, "Fine");
        let err = publish(&mut p, "123", &r, false).unwrap_err();
        assert_eq!(err.to_string(), "ENTITY_ERROR.ATTRIBUTE.INVALID: subtitle");
    }
}
