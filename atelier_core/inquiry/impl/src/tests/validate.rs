use atelier_core_inquiry_contracts::InquiryFormService;
use atelier_demo::inquiry::{JANE_DOE_FORM, JANE_DOE_INQUIRY, PADDED_FORM, PADDED_INQUIRY};
use atelier_models::{
    inquiry::{InquiryField, InquiryForm},
    validation::ValidationErrorSet,
};
use atelier_notify_contracts::MockInquiryNotifier;
use pretty_assertions::assert_eq;

use crate::{schema, tests::make_sut};

fn errors(form: &InquiryForm) -> ValidationErrorSet {
    schema::validate(form).unwrap_err()
}

#[test]
fn ok() {
    // Arrange
    let sut = make_sut(MockInquiryNotifier::new());

    // Act
    let result = sut.validate(&JANE_DOE_FORM);

    // Assert
    assert_eq!(result.unwrap(), *JANE_DOE_INQUIRY);
}

#[test]
fn trims_every_field() {
    let result = schema::validate(&PADDED_FORM);
    assert_eq!(result.unwrap(), *PADDED_INQUIRY);
}

#[test]
fn reports_every_missing_field() {
    // Act
    let errors = errors(&InquiryForm::default());

    // Assert
    let expected = [
        (InquiryField::Name, "Name is required."),
        (InquiryField::Email, "Email is required."),
        (InquiryField::DressType, "Please select a dress type."),
        (InquiryField::Budget, "Please select a budget range."),
        (InquiryField::Timeline, "Please select a timeline."),
        (InquiryField::Message, "Message is required."),
    ]
    .into_iter()
    .map(|(field, message)| (field, message.to_owned()))
    .collect::<ValidationErrorSet>();
    assert_eq!(errors, expected);
}

#[test]
fn whitespace_only_counts_as_missing() {
    let form = InquiryForm {
        name: "   ".into(),
        message: "\n\t".into(),
        ..JANE_DOE_FORM.clone()
    };

    let errors = errors(&form);

    assert_eq!(
        errors.iter().collect::<Vec<_>>(),
        [
            (InquiryField::Name, "Name is required."),
            (InquiryField::Message, "Message is required."),
        ]
    );
}

#[test]
fn name_too_long() {
    let form = InquiryForm {
        name: "x".repeat(101),
        ..JANE_DOE_FORM.clone()
    };

    let errors = errors(&form);

    assert_eq!(
        errors.iter().collect::<Vec<_>>(),
        [(InquiryField::Name, "Name must be at most 100 characters.")]
    );
}

#[test]
fn name_at_limit() {
    let form = InquiryForm {
        name: format!("  {}  ", "é".repeat(100)),
        ..JANE_DOE_FORM.clone()
    };

    let inquiry = schema::validate(&form).unwrap();

    assert_eq!(inquiry.name.chars().count(), 100);
}

#[test]
fn message_too_long() {
    let form = InquiryForm {
        message: "x".repeat(1001),
        ..JANE_DOE_FORM.clone()
    };

    let errors = errors(&form);

    assert_eq!(
        errors.iter().collect::<Vec<_>>(),
        [(
            InquiryField::Message,
            "Message must be at most 1000 characters."
        )]
    );
}

#[test]
fn invalid_email() {
    for email in ["not-an-email", "jane@", "@example.com", "jane doe@example.com"] {
        let form = InquiryForm {
            email: email.into(),
            ..JANE_DOE_FORM.clone()
        };

        let errors = errors(&form);

        assert_eq!(
            errors.iter().collect::<Vec<_>>(),
            [(InquiryField::Email, "Please enter a valid email address.")],
            "{email:?}"
        );
    }
}

#[test]
fn unknown_options() {
    let form = InquiryForm {
        dress_type: "ballgown".into(),
        budget: "$5,000 - $10,000".into(),
        timeline: "tomorrow".into(),
        ..JANE_DOE_FORM.clone()
    };

    let errors = errors(&form);

    assert_eq!(
        errors.iter().collect::<Vec<_>>(),
        [
            (InquiryField::DressType, "Please select a valid dress type."),
            (InquiryField::Budget, "Please select a valid budget range."),
            (InquiryField::Timeline, "Please select a valid timeline."),
        ]
    );
}

#[test]
fn phone_is_optional_and_unconstrained() {
    let blank = InquiryForm {
        phone: "   ".into(),
        ..JANE_DOE_FORM.clone()
    };
    assert_eq!(schema::validate(&blank).unwrap().phone, None);

    let free_form = InquiryForm {
        phone: " call me after 6pm ".into(),
        ..JANE_DOE_FORM.clone()
    };
    assert_eq!(
        schema::validate(&free_form)
            .unwrap()
            .phone
            .as_deref()
            .map(String::as_str),
        Some("call me after 6pm")
    );
}

#[test]
fn idempotent() {
    let form = InquiryForm {
        email: "not-an-email".into(),
        message: "x".repeat(1001),
        ..Default::default()
    };

    assert_eq!(schema::validate(&form), schema::validate(&form));
}
