//! Integration tests for the generated user table

use fixture_gen_rs::{default_model, generate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rstest::rstest;

#[rstest]
#[case("andersson123", "8ea0e6ff616aadc163735903138fa1061a415e0fdd3884142959eed7c4939831")]
#[case("dloose", "98739abc8c5aedf09c2a2f4f8d752484938ce6e3454d388929ad649ed1e47b89")]
#[case("ashuntu", "fe5f36e9fa5f9600816528a3c283f9975e34e46feb06f262864b0362d2835106")]
#[case("hk21702", "ca78062653ce7bc029a0036da07a6c014d2b4c48a6b3df2426166ebe5759d392")]
fn user_keys_are_sha256_digests(#[case] username: &str, #[case] expected_key: &str) {
    let fixtures = generate(&default_model(), &mut StdRng::seed_from_u64(20));

    let user = fixtures
        .users
        .iter()
        .find(|u| u.username == username)
        .expect("configured user is emitted");
    assert_eq!(user.key, expected_key);
}

#[test]
fn every_user_gets_the_fixed_maximum_priority() {
    let fixtures = generate(&default_model(), &mut StdRng::seed_from_u64(21));

    assert_eq!(fixtures.users.len(), 4);
    for user in &fixtures.users {
        assert_eq!(user.maximum_priority, 10);
    }
}
