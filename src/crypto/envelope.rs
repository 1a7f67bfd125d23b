//! Crypto envelope for the removed-values payload
//!
//! Encrypts the ordered list of removed PII values into a single
//! opaque, text-safe token, and reverses it. One fresh key per record;
//! keys are never reused across records.
//!
//! Wire format: the values are joined with `\n`, encrypted with
//! AES-256-GCM under a random 96-bit nonce, and the token is
//! `base64(nonce || ciphertext)`. GCM authenticates the ciphertext, so
//! a tampered token or a wrong key fails cleanly instead of yielding
//! garbage. Tokens carry no expiry; the re-identification window is
//! unbounded.

use crate::domain::errors::DecryptionError;
use crate::domain::{Result, VeilError};
use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroize;

/// AES-256 key length in bytes
pub const KEY_LEN: usize = 32;

/// GCM nonce length in bytes
const NONCE_LEN: usize = 12;

/// Per-record symmetric key
///
/// Generated fresh for every redaction. Key material is zeroized on
/// drop and never printed by Debug.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct EnvelopeKey([u8; KEY_LEN]);

impl EnvelopeKey {
    /// Generates a fresh key from OS randomness
    pub fn generate() -> Self {
        let mut key = [0u8; KEY_LEN];
        OsRng.fill_bytes(&mut key);
        Self(key)
    }

    /// Decodes a key from its base64 storage form
    ///
    /// # Errors
    ///
    /// Returns [`DecryptionError::MalformedKey`] if the input is not
    /// base64 or does not decode to exactly 32 bytes.
    pub fn from_base64(encoded: &str) -> std::result::Result<Self, DecryptionError> {
        let raw = BASE64
            .decode(encoded.as_bytes())
            .map_err(|e| DecryptionError::MalformedKey(e.to_string()))?;
        if raw.len() != KEY_LEN {
            return Err(DecryptionError::MalformedKey(format!(
                "expected {} key bytes, got {}",
                KEY_LEN,
                raw.len()
            )));
        }
        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(&raw);
        Ok(Self(key))
    }

    /// Encodes the key for storage
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.0)
    }
}

impl std::fmt::Debug for EnvelopeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("EnvelopeKey([REDACTED])")
    }
}

/// Encrypts the ordered removed-values list into an opaque token
///
/// Values are joined with `\n` before encryption, so a value must not
/// itself contain a newline.
///
/// # Errors
///
/// Returns [`VeilError::InvalidInput`] if any value contains a newline,
/// and [`VeilError::Crypto`] if encryption itself fails.
pub fn encrypt_values(key: &EnvelopeKey, values: &[String]) -> Result<String> {
    if let Some(bad) = values.iter().position(|v| v.contains('\n')) {
        return Err(VeilError::InvalidInput(format!(
            "removed value at index {bad} contains a newline"
        )));
    }

    let plaintext = values.join("\n");
    let cipher = Aes256Gcm::new_from_slice(&key.0)
        .map_err(|e| VeilError::Crypto(format!("invalid key length: {e}")))?;

    let mut nonce_bytes = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext.as_bytes())
        .map_err(|e| VeilError::Crypto(format!("encryption failed: {e}")))?;

    let mut token_bytes = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    token_bytes.extend_from_slice(&nonce_bytes);
    token_bytes.extend_from_slice(&ciphertext);
    Ok(BASE64.encode(token_bytes))
}

/// Decrypts a token back into the ordered removed-values list
///
/// Splits the plaintext on `\n`, discards blank entries, and preserves
/// order. Never returns partial output: any failure yields a
/// [`DecryptionError`].
pub fn decrypt_values(
    key: &EnvelopeKey,
    token: &str,
) -> std::result::Result<Vec<String>, DecryptionError> {
    let raw = BASE64
        .decode(token.as_bytes())
        .map_err(|e| DecryptionError::MalformedToken(e.to_string()))?;
    if raw.len() <= NONCE_LEN {
        return Err(DecryptionError::MalformedToken(format!(
            "token too short: {} bytes",
            raw.len()
        )));
    }

    let (nonce_bytes, ciphertext) = raw.split_at(NONCE_LEN);
    let cipher = Aes256Gcm::new_from_slice(&key.0)
        .map_err(|e| DecryptionError::MalformedKey(e.to_string()))?;
    let nonce = Nonce::from_slice(nonce_bytes);

    let plaintext = cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| DecryptionError::AuthenticationFailed)?;
    let text = String::from_utf8(plaintext).map_err(|_| DecryptionError::InvalidPlaintext)?;

    Ok(text
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
