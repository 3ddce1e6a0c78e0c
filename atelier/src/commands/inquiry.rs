use std::fmt::Write;

use atelier_config::Config;
use atelier_core_inquiry_contracts::{Acknowledgment, InquiryFormService, SubmitOutcome};
use atelier_core_inquiry_impl::schema;
use atelier_models::inquiry::{BudgetBand, DressType, InquiryField, InquiryForm, Timeline};
use anyhow::bail;
use clap::{Args, Subcommand};
use tracing::{info, warn};

use crate::environment;

#[derive(Debug, Subcommand)]
pub enum InquiryCommand {
    /// Send a consultation request to the atelier
    #[command(aliases(["s"]))]
    Submit {
        #[command(flatten)]
        form: FormArgs,
    },
    /// Check a consultation request without sending it
    #[command(aliases(["v"]))]
    Validate {
        #[command(flatten)]
        form: FormArgs,
    },
    /// List the available dress types, budget ranges and timelines
    #[command(aliases(["o"]))]
    Options,
}

#[derive(Debug, Args)]
pub struct FormArgs {
    /// Full name of the customer
    #[arg(long, default_value = "")]
    name: String,
    /// Email address the atelier should reply to
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
    /// One of the dress type slugs listed by `inquiry options`
    #[arg(long, default_value = "")]
    dress_type: String,
    /// One of the budget slugs listed by `inquiry options`
    #[arg(long, default_value = "")]
    budget: String,
    /// One of the timeline slugs listed by `inquiry options`
    #[arg(long, default_value = "")]
    timeline: String,
    #[arg(long, default_value = "")]
    message: String,
}

impl From<FormArgs> for InquiryForm {
    fn from(args: FormArgs) -> Self {
        Self {
            name: args.name,
            email: args.email,
            phone: args.phone,
            dress_type: args.dress_type,
            budget: args.budget,
            timeline: args.timeline,
            message: args.message,
        }
    }
}

impl InquiryCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            InquiryCommand::Submit { form } => {
                let service = environment::inquiry_form_service(&config)?;
                let acknowledgment = submit(&service, form.into()).await?;
                println!("{}\n{}", acknowledgment.title, acknowledgment.description);
            }
            InquiryCommand::Validate { form } => {
                if let Err(errors) = schema::validate(&form.into()) {
                    bail!("The inquiry is invalid:\n{errors}");
                }
                println!("The inquiry is valid.");
            }
            InquiryCommand::Options => print!("{}", options_table()),
        }

        Ok(())
    }
}

/// Enters every value of `form` into the controller and submits it.
pub async fn submit(
    service: &impl InquiryFormService,
    form: InquiryForm,
) -> anyhow::Result<Acknowledgment> {
    for field in InquiryField::ALL {
        service.update_field(field, form.get(field).to_owned());
    }

    let outcome = service.submit().await;
    match &outcome {
        SubmitOutcome::Sent => info!("inquiry submitted"),
        outcome => warn!(?outcome, "inquiry was not submitted"),
    }

    match outcome {
        SubmitOutcome::Sent => Ok(Acknowledgment::sent()),
        SubmitOutcome::Invalid(errors) => bail!("The inquiry is invalid:\n{errors}"),
        SubmitOutcome::AlreadySubmitting => bail!("Another submission is still in flight"),
        SubmitOutcome::Failed(reason) => bail!("Failed to send the inquiry: {reason}"),
    }
}

pub fn options_table() -> String {
    let mut out = String::new();

    let sections: [(&str, Vec<(&str, &str)>); 3] = [
        (
            "Dress types",
            DressType::ALL.iter().map(|x| (x.slug(), x.label())).collect(),
        ),
        (
            "Budget ranges",
            BudgetBand::ALL.iter().map(|x| (x.slug(), x.label())).collect(),
        ),
        (
            "Timelines",
            Timeline::ALL.iter().map(|x| (x.slug(), x.label())).collect(),
        ),
    ];

    for (title, options) in sections {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "{title}:");
        for (slug, label) in options {
            let _ = writeln!(out, "  {slug:<16}{label}");
        }
    }

    out
}
