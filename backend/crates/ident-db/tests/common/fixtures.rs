use ident_core::{Identity, PasswordDigest, Salt};

/// Creates a test Identity with fixed credential material
pub fn create_test_identity(email: &str) -> Identity {
    Identity::new(
        "Example User".to_string(),
        email.to_string(),
        Salt::try_from("c2FsdHNhbHRzYWx0c2FsdA".to_string()).unwrap(),
        PasswordDigest::try_from("m=1024,t=1,p=1$ZGlnZXN0ZGlnZXN0ZGlnZXN0".to_string()).unwrap(),
    )
}
