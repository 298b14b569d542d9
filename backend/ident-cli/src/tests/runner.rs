use crate::tests::test_service;
use crate::{Commands, run};

use googletest::assert_that;
use googletest::prelude::{anything, eq, none, some};
use serde_json::Value;
use uuid::Uuid;

fn signup(email: &str, password: &str, confirmation: &str) -> Commands {
    Commands::Signup {
        name: String::from("Ann"),
        email: String::from(email),
        password: String::from(password),
        password_confirmation: String::from(confirmation),
    }
}

fn error_codes(body: &Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["code"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn given_valid_signup_when_run_then_identity_printed_without_credentials() {
    // Given
    let service = test_service().await;

    // When
    let output = run(signup("ann@example.com", "secret1", "secret1"), &service)
        .await
        .unwrap();

    // Then
    assert_that!(output.success, eq(true));
    assert_that!(output.body["email"].as_str(), some(eq("ann@example.com")));
    assert_that!(output.body.get("salt"), none());
    assert_that!(output.body.get("password_digest"), none());
}

#[tokio::test]
async fn given_invalid_signup_when_run_then_failure_lists_codes() {
    // Given
    let service = test_service().await;

    // When
    let output = run(signup("not-an-email", "abc", "abd"), &service)
        .await
        .unwrap();

    // Then
    assert_that!(output.success, eq(false));
    assert_that!(
        error_codes(&output.body),
        eq(&vec![
            String::from("email.invalid"),
            String::from("password.too_short"),
            String::from("password.confirmation"),
        ])
    );
}

#[tokio::test]
async fn given_existing_email_in_other_case_when_signup_then_email_taken() {
    // Given
    let service = test_service().await;
    run(signup("ann@example.com", "secret1", "secret1"), &service)
        .await
        .unwrap();

    // When
    let output = run(signup("ANN@EXAMPLE.COM", "secret1", "secret1"), &service)
        .await
        .unwrap();

    // Then
    assert_that!(output.success, eq(false));
    assert_that!(error_codes(&output.body), eq(&vec![String::from("email.taken")]));
}

#[tokio::test]
async fn given_registered_identity_when_login_then_success() {
    // Given
    let service = test_service().await;
    run(signup("ann@example.com", "secret1", "secret1"), &service)
        .await
        .unwrap();

    // When
    let output = run(
        Commands::Login {
            email: String::from("Ann@Example.com"),
            password: String::from("secret1"),
        },
        &service,
    )
    .await
    .unwrap();

    // Then
    assert_that!(output.success, eq(true));
    assert_that!(output.body["name"].as_str(), some(eq("Ann")));
}

#[tokio::test]
async fn given_wrong_password_or_unknown_email_when_login_then_same_failure_body() {
    // Given
    let service = test_service().await;
    run(signup("ann@example.com", "secret1", "secret1"), &service)
        .await
        .unwrap();

    // When
    let wrong_password = run(
        Commands::Login {
            email: String::from("ann@example.com"),
            password: String::from("secret2"),
        },
        &service,
    )
    .await
    .unwrap();
    let unknown_email = run(
        Commands::Login {
            email: String::from("bob@example.com"),
            password: String::from("secret1"),
        },
        &service,
    )
    .await
    .unwrap();

    // Then
    assert_that!(wrong_password.success, eq(false));
    assert_that!(unknown_email.success, eq(false));
    assert_that!(wrong_password.body, eq(&unknown_email.body));
}

#[tokio::test]
async fn given_created_identity_when_show_then_found_and_unknown_id_fails() {
    // Given
    let service = test_service().await;
    let created = run(signup("ann@example.com", "secret1", "secret1"), &service)
        .await
        .unwrap();
    let id = Uuid::parse_str(created.body["id"].as_str().unwrap()).unwrap();

    // When
    let found = run(Commands::Show { id }, &service).await.unwrap();
    let missing = run(Commands::Show { id: Uuid::new_v4() }, &service)
        .await
        .unwrap();

    // Then
    assert_that!(found.success, eq(true));
    assert_that!(found.body["id"].as_str(), some(eq(id.to_string().as_str())));
    assert_that!(missing.success, eq(false));
}

#[tokio::test]
async fn given_identity_created_in_sqlite_when_authenticated_then_equal_to_created() {
    // Given
    let service = test_service().await;
    let candidate =
        ident_core::NewIdentity::new("Ann", "ann@example.com", "foobar", "foobar");
    let outcome = service.create_identity(candidate).await.unwrap();
    let created = outcome.identity().cloned();

    // When
    let authenticated = service
        .authenticate("ann@example.com", "foobar")
        .await
        .unwrap();

    // Then
    assert_that!(created, some(anything()));
    assert_that!(authenticated, eq(&created));
}
