//! Password-based field cipher.
//!
//! Sensitive fields in a `.bot` file are hex-encoded AES-192-CBC
//! ciphertext produced by the MSBot CLI, which derives key and IV from
//! the secret with OpenSSL's `EVP_BytesToKey` (MD5, no salt, one round).
//! This module reproduces that derivation so existing documents decrypt
//! without re-encryption.
//!
//! Decryption never raises to the caller: a value that fails to decrypt
//! (wrong secret, malformed hex, already plaintext) is logged and
//! returned unchanged. Callers that need a hard signal inspect the
//! [`DecryptOutcome`] status instead of the logs.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use md5::{Digest, Md5};
use tracing::warn;
use zeroize::Zeroizing;

use crate::error::{BotfileError, Result};

type Aes192CbcEnc = cbc::Encryptor<aes::Aes192>;
type Aes192CbcDec = cbc::Decryptor<aes::Aes192>;

const KEY_LEN: usize = 24;
const IV_LEN: usize = 16;

/// Result of a single field decryption attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptOutcome {
    /// The plaintext on success, or the original input on failure.
    pub value: String,
    pub status: DecryptStatus,
}

/// Whether a decryption attempt succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecryptStatus {
    Decrypted,
    /// The original value was kept; `reason` says why the attempt failed.
    Failed { reason: String },
}

impl DecryptOutcome {
    pub fn succeeded(&self) -> bool {
        self.status == DecryptStatus::Decrypted
    }
}

/// Derive the AES-192 key and CBC IV from the secret.
///
/// `EVP_BytesToKey` with MD5 and no salt: hash blocks are chained
/// (`D_i = MD5(D_{i-1} || secret)`) and concatenated until 40 bytes of
/// material exist. The buffer is wiped when dropped.
fn derive_key_iv(secret: &str) -> Zeroizing<Vec<u8>> {
    let mut material = Zeroizing::new(Vec::with_capacity(KEY_LEN + IV_LEN));
    let mut block = Zeroizing::new(Vec::new());
    while material.len() < KEY_LEN + IV_LEN {
        let mut hasher = Md5::new();
        hasher.update(&*block);
        hasher.update(secret.as_bytes());
        *block = hasher.finalize().to_vec();
        material.extend_from_slice(&block);
    }
    // Three MD5 blocks overshoot to 48 bytes; only 40 are key material.
    material.truncate(KEY_LEN + IV_LEN);
    material
}

/// Encrypt a field value with the given secret.
///
/// Inverse of [`decrypt_value`]; primarily used to produce documents and
/// test fixtures compatible with externally encrypted `.bot` files.
///
/// # Returns
///
/// Hex-encoded AES-192-CBC ciphertext.
///
/// # Errors
///
/// Returns `BotfileError::DecryptionFailed` only if cipher construction
/// fails, which cannot happen with the fixed-length derived key material.
pub fn encrypt_value(plaintext: &str, secret: &str) -> Result<String> {
    let material = derive_key_iv(secret);
    let cipher = Aes192CbcEnc::new_from_slices(&material[..KEY_LEN], &material[KEY_LEN..])
        .map_err(|e| BotfileError::DecryptionFailed(format!("bad key material: {e}")))?;
    let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());
    Ok(hex::encode(ciphertext))
}

/// Decrypt a single field value, falling back to the original on failure.
///
/// # Arguments
///
/// * `ciphertext` - Hex-encoded ciphertext (or a value that may already
///   be plaintext)
/// * `secret` - The caller-supplied passphrase
///
/// # Returns
///
/// A [`DecryptOutcome`] whose `value` is the UTF-8 plaintext on success,
/// or the original input unchanged on failure. Failures are also emitted
/// on the diagnostic channel as `tracing` warnings.
pub fn decrypt_value(ciphertext: &str, secret: &str) -> DecryptOutcome {
    match try_decrypt(ciphertext, secret) {
        Ok(plaintext) => DecryptOutcome {
            value: plaintext,
            status: DecryptStatus::Decrypted,
        },
        Err(e) => {
            let reason = e.to_string();
            warn!(%reason, "failed to decrypt value, keeping original");
            DecryptOutcome {
                value: ciphertext.to_string(),
                status: DecryptStatus::Failed { reason },
            }
        }
    }
}

fn try_decrypt(ciphertext: &str, secret: &str) -> Result<String> {
    let raw = hex::decode(ciphertext)?;
    let material = derive_key_iv(secret);
    let cipher = Aes192CbcDec::new_from_slices(&material[..KEY_LEN], &material[KEY_LEN..])
        .map_err(|e| BotfileError::DecryptionFailed(format!("bad key material: {e}")))?;
    let plaintext = cipher
        .decrypt_padded_vec_mut::<Pkcs7>(&raw)
        .map_err(|_| BotfileError::DecryptionFailed("bad padding (wrong secret?)".to_string()))?;
    String::from_utf8(plaintext)
        .map_err(|e| BotfileError::DecryptionFailed(format!("UTF-8 error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let encrypted = encrypt_value("super secret password 123!", "hunter2").unwrap();
        assert_ne!(encrypted, "super secret password 123!");

        let outcome = decrypt_value(&encrypted, "hunter2");
        assert!(outcome.succeeded());
        assert_eq!(outcome.value, "super secret password 123!");
    }

    #[test]
    fn test_encrypt_is_deterministic() {
        // No salt in the key derivation, so identical inputs produce
        // identical ciphertext.
        let a = encrypt_value("value", "secret").unwrap();
        let b = encrypt_value("value", "secret").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_wrong_secret_returns_original() {
        let encrypted = encrypt_value("value", "right-secret").unwrap();

        let outcome = decrypt_value(&encrypted, "wrong-secret");
        assert!(!outcome.succeeded());
        assert_eq!(outcome.value, encrypted);
    }

    #[test]
    fn test_plaintext_input_returns_original() {
        // A value that was never encrypted is not valid hex.
        let outcome = decrypt_value("already plain", "secret");
        assert!(!outcome.succeeded());
        assert_eq!(outcome.value, "already plain");
    }

    #[test]
    fn test_hex_but_not_ciphertext_returns_original() {
        // Valid hex, wrong length for a CBC block stream.
        let outcome = decrypt_value("deadbeef", "secret");
        assert!(!outcome.succeeded());
        assert_eq!(outcome.value, "deadbeef");
    }

    #[test]
    fn test_empty_string_roundtrip() {
        let encrypted = encrypt_value("", "secret").unwrap();
        let outcome = decrypt_value(&encrypted, "secret");
        assert!(outcome.succeeded());
        assert_eq!(outcome.value, "");
    }

    #[test]
    fn test_unicode_roundtrip() {
        let plaintext = "пароль 密码 🔑";
        let encrypted = encrypt_value(plaintext, "secret").unwrap();
        let outcome = decrypt_value(&encrypted, "secret");
        assert!(outcome.succeeded());
        assert_eq!(outcome.value, plaintext);
    }

    #[test]
    fn test_key_derivation_is_stable() {
        let a = derive_key_iv("secret");
        let b = derive_key_iv("secret");
        assert_eq!(*a, *b);
        assert_eq!(a.len(), KEY_LEN + IV_LEN);
    }
}
