use atelier_models::{
    email_address::EmailAddress,
    inquiry::{
        BudgetBand, DressType, InquiryField, InquiryForm, InquiryMessage, InquiryName,
        InquiryPhone, Timeline, ValidatedInquiry,
    },
    validation::ValidationErrorSet,
};

pub const NAME_MAX_CHARS: usize = 100;
pub const MESSAGE_MAX_CHARS: usize = 1000;

/// A single constraint on the trimmed value of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The value must not be empty.
    Required,
    /// One of the options must be chosen.
    Selected,
    MaxChars(usize),
    EmailAddress,
    OneOf(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    pub field: InquiryField,
    /// Lowercase name of the field as used in error messages.
    pub label: &'static str,
    pub rules: &'static [Rule],
}

pub static INQUIRY_SCHEMA: [FieldSchema; 7] = [
    FieldSchema {
        field: InquiryField::Name,
        label: "name",
        rules: &[Rule::Required, Rule::MaxChars(NAME_MAX_CHARS)],
    },
    FieldSchema {
        field: InquiryField::Email,
        label: "email",
        rules: &[Rule::Required, Rule::EmailAddress],
    },
    FieldSchema {
        field: InquiryField::Phone,
        label: "phone number",
        rules: &[],
    },
    FieldSchema {
        field: InquiryField::DressType,
        label: "dress type",
        rules: &[Rule::Selected, Rule::OneOf(DressType::SLUGS)],
    },
    FieldSchema {
        field: InquiryField::Budget,
        label: "budget range",
        rules: &[Rule::Selected, Rule::OneOf(BudgetBand::SLUGS)],
    },
    FieldSchema {
        field: InquiryField::Timeline,
        label: "timeline",
        rules: &[Rule::Selected, Rule::OneOf(Timeline::SLUGS)],
    },
    FieldSchema {
        field: InquiryField::Message,
        label: "message",
        rules: &[Rule::Required, Rule::MaxChars(MESSAGE_MAX_CHARS)],
    },
];

impl Rule {
    pub fn is_satisfied_by(self, value: &str) -> bool {
        match self {
            Self::Required | Self::Selected => !value.is_empty(),
            Self::MaxChars(max) => value.chars().count() <= max,
            Self::EmailAddress => value.parse::<EmailAddress>().is_ok(),
            Self::OneOf(options) => options.contains(&value),
        }
    }

    pub fn message(self, label: &str) -> String {
        match self {
            Self::Required => format!("{} is required.", capitalize(label)),
            Self::Selected => format!("Please select a {label}."),
            Self::MaxChars(max) => {
                format!("{} must be at most {max} characters.", capitalize(label))
            }
            Self::EmailAddress => "Please enter a valid email address.".into(),
            Self::OneOf(_) => format!("Please select a valid {label}."),
        }
    }
}

impl FieldSchema {
    pub fn of(field: InquiryField) -> &'static Self {
        // INQUIRY_SCHEMA lists the fields in declaration order
        &INQUIRY_SCHEMA[field as usize]
    }

    pub fn is_required(&self) -> bool {
        self.rules
            .iter()
            .any(|rule| matches!(rule, Rule::Required | Rule::Selected))
    }

    /// Returns the message of the first rule the field violates in `form`.
    pub fn check(&self, form: &InquiryForm) -> Option<String> {
        let value = form.get(self.field).trim();
        if value.is_empty() && !self.is_required() {
            return None;
        }

        self.rules
            .iter()
            .find(|rule| !rule.is_satisfied_by(value))
            .map(|rule| rule.message(self.label))
    }
}

/// Checks every field of `form` against [`INQUIRY_SCHEMA`] and reports all
/// violations at once.
pub fn validate(form: &InquiryForm) -> Result<ValidatedInquiry, ValidationErrorSet> {
    let errors = INQUIRY_SCHEMA
        .iter()
        .filter_map(|schema| schema.check(form).map(|message| (schema.field, message)))
        .collect::<ValidationErrorSet>();

    if !errors.is_empty() {
        return Err(errors);
    }

    build(form)
}

fn build(form: &InquiryForm) -> Result<ValidatedInquiry, ValidationErrorSet> {
    let mut errors = ValidationErrorSet::new();

    let name = parse(
        &mut errors,
        InquiryField::Name,
        InquiryName::try_new(form.name.clone()),
    );
    let email = parse(
        &mut errors,
        InquiryField::Email,
        form.email.trim().parse::<EmailAddress>(),
    );
    let phone = match form.phone.trim() {
        "" => Some(None),
        phone => parse(
            &mut errors,
            InquiryField::Phone,
            InquiryPhone::try_new(phone.to_owned()),
        )
        .map(Some),
    };
    let dress_type = parse(
        &mut errors,
        InquiryField::DressType,
        form.dress_type.trim().parse::<DressType>(),
    );
    let budget = parse(
        &mut errors,
        InquiryField::Budget,
        form.budget.trim().parse::<BudgetBand>(),
    );
    let timeline = parse(
        &mut errors,
        InquiryField::Timeline,
        form.timeline.trim().parse::<Timeline>(),
    );
    let message = parse(
        &mut errors,
        InquiryField::Message,
        InquiryMessage::try_new(form.message.clone()),
    );

    match (name, email, phone, dress_type, budget, timeline, message) {
        (
            Some(name),
            Some(email),
            Some(phone),
            Some(dress_type),
            Some(budget),
            Some(timeline),
            Some(message),
        ) => Ok(ValidatedInquiry {
            name,
            email,
            phone,
            dress_type,
            budget,
            timeline,
            message,
        }),
        _ => Err(errors),
    }
}

fn parse<T, E>(
    errors: &mut ValidationErrorSet,
    field: InquiryField,
    result: Result<T, E>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(_) => {
            let label = FieldSchema::of(field).label;
            errors.insert(field, format!("Please enter a valid {label}."));
            None
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn schema_covers_every_field_in_order() {
        assert_eq!(
            INQUIRY_SCHEMA.map(|schema| schema.field),
            InquiryField::ALL
        );
        for field in InquiryField::ALL {
            assert_eq!(FieldSchema::of(field).field, field);
        }
    }

    #[test]
    fn only_phone_is_optional() {
        for schema in &INQUIRY_SCHEMA {
            assert_eq!(schema.is_required(), schema.field != InquiryField::Phone);
        }
    }

    #[test]
    fn bounds_agree_with_models() {
        assert!(InquiryName::try_new("x".repeat(NAME_MAX_CHARS)).is_ok());
        assert!(InquiryName::try_new("x".repeat(NAME_MAX_CHARS + 1)).is_err());
        assert!(InquiryMessage::try_new("x".repeat(MESSAGE_MAX_CHARS)).is_ok());
        assert!(InquiryMessage::try_new("x".repeat(MESSAGE_MAX_CHARS + 1)).is_err());
    }

    #[test]
    fn rules() {
        assert!(Rule::Required.is_satisfied_by("x"));
        assert!(!Rule::Required.is_satisfied_by(""));
        assert!(Rule::MaxChars(3).is_satisfied_by("äöü"));
        assert!(!Rule::MaxChars(3).is_satisfied_by("äöüß"));
        assert!(Rule::EmailAddress.is_satisfied_by("jane@example.com"));
        assert!(!Rule::EmailAddress.is_satisfied_by("not-an-email"));
        assert!(Rule::OneOf(&["a", "b"]).is_satisfied_by("b"));
        assert!(!Rule::OneOf(&["a", "b"]).is_satisfied_by("c"));
    }

    #[test]
    fn messages() {
        assert_eq!(Rule::Required.message("name"), "Name is required.");
        assert_eq!(
            Rule::Selected.message("dress type"),
            "Please select a dress type."
        );
        assert_eq!(
            Rule::MaxChars(100).message("name"),
            "Name must be at most 100 characters."
        );
        assert_eq!(
            Rule::OneOf(&[]).message("timeline"),
            "Please select a valid timeline."
        );
    }

    #[test]
    fn first_failing_rule_wins() {
        let form = InquiryForm::default();
        assert_eq!(
            FieldSchema::of(InquiryField::Email).check(&form).as_deref(),
            Some("Email is required.")
        );
        assert_eq!(FieldSchema::of(InquiryField::Phone).check(&form), None);
    }
}
