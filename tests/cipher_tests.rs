//! Tests for the password-based field cipher.

use botfile::core::cipher::{decrypt_value, encrypt_value};
use botfile::DecryptStatus;
use proptest::prelude::*;

#[test]
fn test_roundtrip() {
    let encrypted = encrypt_value("app-password-value", "secret").unwrap();

    // Hex-encoded ciphertext, not the plaintext.
    assert!(encrypted.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(encrypted, "app-password-value");

    let outcome = decrypt_value(&encrypted, "secret");
    assert!(outcome.succeeded());
    assert_eq!(outcome.value, "app-password-value");
}

#[test]
fn test_wrong_secret_reports_failure_status() {
    let encrypted = encrypt_value("value", "secret").unwrap();
    let outcome = decrypt_value(&encrypted, "other-secret");

    assert!(matches!(outcome.status, DecryptStatus::Failed { .. }));
    assert_eq!(outcome.value, encrypted);
}

#[test]
fn test_plaintext_input_reports_failure_status() {
    let outcome = decrypt_value("never encrypted", "secret");
    assert!(matches!(outcome.status, DecryptStatus::Failed { .. }));
    assert_eq!(outcome.value, "never encrypted");
}

proptest! {
    #[test]
    fn prop_roundtrip_preserves_plaintext(plaintext in ".{0,64}", secret in "[a-zA-Z0-9]{1,32}") {
        let encrypted = encrypt_value(&plaintext, &secret).unwrap();
        let outcome = decrypt_value(&encrypted, &secret);
        prop_assert!(outcome.succeeded());
        prop_assert_eq!(outcome.value, plaintext);
    }

    #[test]
    fn prop_decrypt_never_panics_on_arbitrary_input(input in ".{0,128}", secret in ".{0,32}") {
        // Whatever comes in, the fallback policy returns a value.
        let outcome = decrypt_value(&input, &secret);
        if !outcome.succeeded() {
            prop_assert_eq!(outcome.value, input);
        }
    }
}
