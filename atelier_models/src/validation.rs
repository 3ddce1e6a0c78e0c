use std::{collections::BTreeMap, fmt::Display};

use serde::{Deserialize, Serialize};

use crate::inquiry::InquiryField;

/// The human readable validation errors of a form, at most one per field,
/// iterated in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrorSet(BTreeMap<InquiryField, String>);

impl ValidationErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: InquiryField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: InquiryField) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: InquiryField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: InquiryField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = InquiryField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (InquiryField, &str)> {
        self.0.iter().map(|(&field, message)| (field, message.as_str()))
    }
}

impl FromIterator<(InquiryField, String)> for ValidationErrorSet {
    fn from_iter<T: IntoIterator<Item = (InquiryField, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Display for ValidationErrorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}
