use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    email_address::EmailAddress,
    macros::{nutype_string, select_options},
};

/// The raw, unvalidated values of the consultation form exactly as the user
/// entered them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub dress_type: String,
    pub budget: String,
    pub timeline: String,
    pub message: String,
}

impl InquiryForm {
    pub fn get(&self, field: InquiryField) -> &str {
        match field {
            InquiryField::Name => &self.name,
            InquiryField::Email => &self.email,
            InquiryField::Phone => &self.phone,
            InquiryField::DressType => &self.dress_type,
            InquiryField::Budget => &self.budget,
            InquiryField::Timeline => &self.timeline,
            InquiryField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: InquiryField, value: String) {
        let slot = match field {
            InquiryField::Name => &mut self.name,
            InquiryField::Email => &mut self.email,
            InquiryField::Phone => &mut self.phone,
            InquiryField::DressType => &mut self.dress_type,
            InquiryField::Budget => &mut self.budget,
            InquiryField::Timeline => &mut self.timeline,
            InquiryField::Message => &mut self.message,
        };
        *slot = value;
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum InquiryField {
    Name,
    Email,
    Phone,
    DressType,
    Budget,
    Timeline,
    Message,
}

impl InquiryField {
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::DressType,
        Self::Budget,
        Self::Timeline,
        Self::Message,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::DressType => "dressType",
            Self::Budget => "budget",
            Self::Timeline => "timeline",
            Self::Message => "message",
        }
    }
}

impl Display for InquiryField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InquiryField {
    type Err = UnknownInquiryFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownInquiryFieldError(s.into()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown inquiry field {0:?}.")]
pub struct UnknownInquiryFieldError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown option {0:?}.")]
pub struct UnknownOptionError(pub String);

select_options!(
    /// The kind of garment the customer would like to commission.
    DressType {
        Wedding => ("wedding", "Wedding Dress"),
        Evening => ("evening", "Evening Gown"),
        CustomSuit => ("custom-suit", "Custom Suit"),
        Other => ("other", "Other"),
    }
);

select_options!(
    BudgetBand {
        From1000To3000 => ("1000-3000", "$1,000 - $3,000"),
        From3000To5000 => ("3000-5000", "$3,000 - $5,000"),
        From5000To10000 => ("5000-10000", "$5,000 - $10,000"),
        Above10000 => ("10000-plus", "$10,000+"),
    }
);

select_options!(
    Timeline {
        OneToThreeMonths => ("1-3-months", "1-3 Months"),
        ThreeToSixMonths => ("3-6-months", "3-6 Months"),
        SixToTwelveMonths => ("6-12-months", "6-12 Months"),
        AboveTwelveMonths => ("12-plus-months", "12+ Months"),
    }
);

nutype_string!(InquiryName(
    sanitize(trim),
    validate(not_empty, len_char_max = 100),
));

nutype_string!(InquiryPhone(sanitize(trim), validate(not_empty)));

nutype_string!(InquiryMessage(
    sanitize(trim),
    validate(not_empty, len_char_max = 1000),
));

/// An inquiry that passed a full validation pass. All string values are
/// trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInquiry {
    pub name: InquiryName,
    pub email: EmailAddress,
    pub phone: Option<InquiryPhone>,
    pub dress_type: DressType,
    pub budget: BudgetBand,
    pub timeline: Timeline,
    pub message: InquiryMessage,
}
