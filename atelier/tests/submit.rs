use std::path::Path;

use atelier::{commands::inquiry::submit, environment};
use atelier_config::DEFAULT_CONFIG_PATH;
use atelier_core_inquiry_contracts::{Acknowledgment, InquiryFormService, SubmissionState};
use atelier_demo::inquiry::{JANE_DOE_FORM, PADDED_FORM};
use atelier_models::inquiry::InquiryForm;
use atelier_testing::emailjs::{EmailJsCredentials, SpawnedServer};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn submit_through_emailjs() {
    // Arrange
    let server = spawn_server().await;
    let service = make_service(&server);

    // Act
    let acknowledgment = submit(&service, PADDED_FORM.clone()).await.unwrap();

    // Assert
    assert_eq!(acknowledgment, Acknowledgment::sent());

    let emails = server.outbox.emails();
    assert_eq!(emails.len(), 1);
    assert_eq!(emails[0].template_params["from_name"], "Amelia Hart");
    assert_eq!(emails[0].template_params["budget"], "$10,000+");
    assert_eq!(emails[0].template_params["timeline"], "12+ Months");

    let snapshot = service.snapshot();
    assert_eq!(snapshot.submission, SubmissionState::Succeeded);
    assert_eq!(snapshot.form, InquiryForm::default());
}

#[tokio::test]
async fn submit_rejected_by_emailjs() {
    // Arrange
    let server = atelier_testing::emailjs::spawn(EmailJsCredentials {
        public_key: "another-public-key".into(),
        ..credentials()
    })
    .await
    .unwrap();
    let service = make_service(&server);

    // Act
    let err = submit(&service, JANE_DOE_FORM.clone()).await.unwrap_err();

    // Assert
    assert!(err.to_string().contains("The Public Key is invalid"), "{err}");
    assert!(server.outbox.emails().is_empty());

    let snapshot = service.snapshot();
    assert!(matches!(snapshot.submission, SubmissionState::Failed(_)));
    assert_eq!(snapshot.form, *JANE_DOE_FORM);
}

fn credentials() -> EmailJsCredentials {
    EmailJsCredentials {
        service_id: "service_atelier".into(),
        template_id: "template_consultation".into(),
        public_key: "your-public-key".into(),
    }
}

async fn spawn_server() -> SpawnedServer {
    atelier_testing::emailjs::spawn(credentials()).await.unwrap()
}

fn make_service(server: &SpawnedServer) -> environment::InquiryFormService {
    let overrides = format!(
        r#"
            [notifier.emailjs]
            endpoint_override = "{}"
        "#,
        server.base_url
    );
    let config = atelier_config::load_with_overrides(
        &[Path::new(DEFAULT_CONFIG_PATH)],
        &[overrides.as_str()],
    )
    .unwrap();

    environment::inquiry_form_service(&config).unwrap()
}
