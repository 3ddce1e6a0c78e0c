use std::sync::LazyLock;

use atelier_models::inquiry::{BudgetBand, DressType, InquiryForm, Timeline, ValidatedInquiry};

pub static JANE_DOE_FORM: LazyLock<InquiryForm> = LazyLock::new(|| InquiryForm {
    name: "Jane Doe".into(),
    email: "jane@example.com".into(),
    phone: "".into(),
    dress_type: "evening".into(),
    budget: "5000-10000".into(),
    timeline: "3-6-months".into(),
    message: "A flowing gown for a gala.".into(),
});

pub static JANE_DOE_INQUIRY: LazyLock<ValidatedInquiry> = LazyLock::new(|| ValidatedInquiry {
    name: "Jane Doe".to_owned().try_into().unwrap(),
    email: "jane@example.com".parse().unwrap(),
    phone: None,
    dress_type: DressType::Evening,
    budget: BudgetBand::From5000To10000,
    timeline: Timeline::ThreeToSixMonths,
    message: "A flowing gown for a gala.".to_owned().try_into().unwrap(),
});

/// A form with surrounding whitespace in every text field and a phone number.
pub static PADDED_FORM: LazyLock<InquiryForm> = LazyLock::new(|| InquiryForm {
    name: "  Amelia Hart ".into(),
    email: " amelia.hart@example.org\t".into(),
    phone: " +44 20 7946 0958 ".into(),
    dress_type: "wedding".into(),
    budget: "10000-plus".into(),
    timeline: "12-plus-months".into(),
    message: "\nA cathedral-length veil to match a lace corset gown.  ".into(),
});

pub static PADDED_INQUIRY: LazyLock<ValidatedInquiry> = LazyLock::new(|| ValidatedInquiry {
    name: "Amelia Hart".to_owned().try_into().unwrap(),
    email: "amelia.hart@example.org".parse().unwrap(),
    phone: Some("+44 20 7946 0958".to_owned().try_into().unwrap()),
    dress_type: DressType::Wedding,
    budget: BudgetBand::Above10000,
    timeline: Timeline::AboveTwelveMonths,
    message: "A cathedral-length veil to match a lace corset gown."
        .to_owned()
        .try_into()
        .unwrap(),
});
