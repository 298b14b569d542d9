use crate::hashing_policy::{MAX_ITERATIONS, MAX_MEMORY_KIB, MIN_ITERATIONS, MIN_MEMORY_KIB};
use crate::{AuthError, HashingPolicy};

use googletest::prelude::*;

#[test]
fn given_default_policy_when_encoded_then_round_trips_through_param_string() {
    let policy = HashingPolicy::default();

    let parsed: HashingPolicy = policy.to_param_string().parse().unwrap();

    assert_that!(parsed, eq(policy));
    assert_that!(policy.to_param_string(), eq("m=19456,t=2,p=1"));
}

#[test]
fn given_missing_parameter_when_parsed_then_corrupt_credential() {
    let result = "m=1024,t=1".parse::<HashingPolicy>();

    assert!(matches!(result, Err(AuthError::CorruptCredential { .. })));
}

#[test]
fn given_unknown_parameter_when_parsed_then_corrupt_credential() {
    let result = "m=1024,t=1,p=1,x=9".parse::<HashingPolicy>();

    assert!(matches!(result, Err(AuthError::CorruptCredential { .. })));
}

#[test]
fn given_non_numeric_value_when_parsed_then_corrupt_credential() {
    let result = "m=lots,t=1,p=1".parse::<HashingPolicy>();

    assert!(matches!(result, Err(AuthError::CorruptCredential { .. })));
}

#[test]
fn given_costs_beyond_supported_range_when_parsed_then_corrupt_credential() {
    for params in [
        "m=4294967295,t=1,p=1",
        "m=1024,t=4294967295,p=1",
        "m=1024,t=1,p=4294967295",
        "m=4,t=1,p=1",
        "m=16,t=1,p=4",
    ] {
        let result = params.parse::<HashingPolicy>();

        assert!(
            matches!(result, Err(AuthError::CorruptCredential { .. })),
            "{params} should be rejected"
        );
    }
}

#[test]
fn given_costs_at_range_limits_when_parsed_then_accepted() {
    let result = format!("m={},t={},p=1", MAX_MEMORY_KIB, MAX_ITERATIONS).parse::<HashingPolicy>();

    assert_that!(result, ok(anything()));
    assert_that!(
        HashingPolicy::default()
            .memory_kib(MIN_MEMORY_KIB)
            .iterations(MIN_ITERATIONS)
            .within_bounds(),
        eq(true)
    );
}
