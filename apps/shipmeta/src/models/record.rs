//! Store listing metadata record.
//!
//! Records are values: transformations return new records instead of
//! mutating in place. The JSON form uses the store's camelCase field names
//! and omits absent fields.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotional_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whats_new: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_category: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Addressable record fields.
pub enum Field {
    Locale,
    Description,
    Keywords,
    PromotionalText,
    WhatsNew,
    Subtitle,
    PrimaryCategory,
    SecondaryCategory,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Locale,
        Field::Subtitle,
        Field::Keywords,
        Field::PromotionalText,
        Field::Description,
        Field::WhatsNew,
        Field::PrimaryCategory,
        Field::SecondaryCategory,
    ];

    /// Free-text fields scanned for contact and identity content.
    pub const TEXT: [Field; 4] = [
        Field::Description,
        Field::PromotionalText,
        Field::WhatsNew,
        Field::Subtitle,
    ];

    /// Wire name, as used in record files and warnings.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Locale => "locale",
            Field::Description => "description",
            Field::Keywords => "keywords",
            Field::PromotionalText => "promotionalText",
            Field::WhatsNew => "whatsNew",
            Field::Subtitle => "subtitle",
            Field::PrimaryCategory => "primaryCategory",
            Field::SecondaryCategory => "secondaryCategory",
        }
    }
}

impl MetadataRecord {
    pub fn get(&self, field: Field) -> Option<&str> {
        let v = match field {
            Field::Locale => &self.locale,
            Field::Description => &self.description,
            Field::Keywords => &self.keywords,
            Field::PromotionalText => &self.promotional_text,
            Field::WhatsNew => &self.whats_new,
            Field::Subtitle => &self.subtitle,
            Field::PrimaryCategory => &self.primary_category,
            Field::SecondaryCategory => &self.secondary_category,
        };
        v.as_deref()
    }

    /// Return a copy with `field` set to `value`.
    pub fn with(&self, field: Field, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let slot = match field {
            Field::Locale => &mut next.locale,
            Field::Description => &mut next.description,
            Field::Keywords => &mut next.keywords,
            Field::PromotionalText => &mut next.promotional_text,
            Field::WhatsNew => &mut next.whats_new,
            Field::Subtitle => &mut next.subtitle,
            Field::PrimaryCategory => &mut next.primary_category,
            Field::SecondaryCategory => &mut next.secondary_category,
        };
        *slot = Some(value.into());
        next
    }

    /// Fields present in `self` win; absent ones are taken from `base`.
    pub fn overlay(&self, base: &MetadataRecord) -> Self {
        Field::ALL.iter().fold(base.clone(), |acc, f| match self.get(*f) {
            Some(v) => acc.with(*f, v),
            None => acc,
        })
    }

    /// Locale, defaulting to `en-US` like the store tooling does.
    pub fn locale_or_default(&self) -> &str {
        self.locale.as_deref().unwrap_or("en-US")
    }
}
