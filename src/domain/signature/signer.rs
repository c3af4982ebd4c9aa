//! HMAC-SHA256 payload signing and verification.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::errors::SignatureError;

type HmacSha256 = Hmac<Sha256>;

/// Signs and verifies webhook payloads with a shared secret.
///
/// Construction fails when the secret is empty, so holding a `WebhookSigner`
/// is proof that a usable secret is configured.
#[derive(Clone)]
pub struct WebhookSigner {
    secret: SecretString,
}

impl WebhookSigner {
    /// Creates a signer from a configured secret.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::MissingSecret`] for an empty secret.
    pub fn new(secret: SecretString) -> Result<Self, SignatureError> {
        if secret.expose_secret().is_empty() {
            return Err(SignatureError::MissingSecret);
        }
        Ok(Self { secret })
    }

    /// Convenience constructor for plain-string secrets.
    pub fn from_secret(secret: impl Into<String>) -> Result<Self, SignatureError> {
        Self::new(SecretString::new(secret.into()))
    }

    /// Computes the hex-encoded HMAC-SHA256 signature over `payload`.
    ///
    /// Signature correctness depends on byte-for-byte identity of the
    /// payload between signer and verifier.
    pub fn sign(&self, payload: &[u8]) -> String {
        hex::encode(self.compute_mac(payload))
    }

    /// Recomputes the signature over `payload` and compares it to
    /// `candidate` in constant time.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::InvalidSignature`] on any mismatch,
    /// including malformed hex and length mismatch.
    pub fn verify(&self, payload: &[u8], candidate: &str) -> Result<(), SignatureError> {
        let candidate = hex::decode(candidate).map_err(|_| SignatureError::InvalidSignature)?;
        let expected = self.compute_mac(payload);

        if constant_time_compare(&expected, &candidate) {
            Ok(())
        } else {
            Err(SignatureError::InvalidSignature)
        }
    }

    fn compute_mac(&self, payload: &[u8]) -> Vec<u8> {
        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(payload);
        mac.finalize().into_bytes().to_vec()
    }
}

impl std::fmt::Debug for WebhookSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the secret.
        f.debug_struct("WebhookSigner").finish_non_exhaustive()
    }
}

/// Constant-time byte comparison, so mismatch timing leaks nothing about
/// the expected signature bytes.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TEST_SECRET: &str = "test_webhook_secret";

    fn signer(secret: &str) -> WebhookSigner {
        WebhookSigner::from_secret(secret).unwrap()
    }

    #[test]
    fn empty_secret_is_rejected() {
        assert_eq!(
            WebhookSigner::from_secret("").unwrap_err(),
            SignatureError::MissingSecret
        );
    }

    #[test]
    fn sign_produces_fixed_length_hex() {
        let signature = signer(TEST_SECRET).sign(b"payload");
        assert_eq!(signature.len(), 64); // 32 bytes hex-encoded
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn verify_accepts_own_signature() {
        let signer = signer(TEST_SECRET);
        let signature = signer.sign(b"{\"id\":\"abc\"}");
        assert!(signer.verify(b"{\"id\":\"abc\"}", &signature).is_ok());
    }

    #[test]
    fn verify_rejects_tampered_payload() {
        let signer = signer(TEST_SECRET);
        let signature = signer.sign(b"{\"amount\":100}");
        assert_eq!(
            signer.verify(b"{\"amount\":999}", &signature).unwrap_err(),
            SignatureError::InvalidSignature
        );
    }

    #[test]
    fn verify_rejects_signature_from_other_secret() {
        let signature = signer("other_secret").sign(b"payload");
        assert_eq!(
            signer(TEST_SECRET).verify(b"payload", &signature).unwrap_err(),
            SignatureError::InvalidSignature
        );
    }

    #[test]
    fn verify_rejects_altered_byte() {
        let signer = signer(TEST_SECRET);
        let mut signature = signer.sign(b"payload");
        // Flip one hex digit.
        let last = signature.pop().unwrap();
        signature.push(if last == '0' { '1' } else { '0' });
        assert_eq!(
            signer.verify(b"payload", &signature).unwrap_err(),
            SignatureError::InvalidSignature
        );
    }

    #[test]
    fn verify_rejects_truncated_signature() {
        let signer = signer(TEST_SECRET);
        let signature = signer.sign(b"payload");
        assert!(signer.verify(b"payload", &signature[..32]).is_err());
    }

    #[test]
    fn verify_rejects_non_hex_candidate() {
        let signer = signer(TEST_SECRET);
        assert_eq!(
            signer.verify(b"payload", "not hex at all").unwrap_err(),
            SignatureError::InvalidSignature
        );
    }

    #[test]
    fn debug_does_not_leak_the_secret() {
        let rendered = format!("{:?}", signer("super_secret_value"));
        assert!(!rendered.contains("super_secret_value"));
    }

    proptest! {
        #[test]
        fn round_trip_verifies_for_any_secret_and_payload(
            secret in "[a-zA-Z0-9_]{1,64}",
            payload in proptest::collection::vec(any::<u8>(), 0..512),
        ) {
            let signer = WebhookSigner::from_secret(secret).unwrap();
            let signature = signer.sign(&payload);
            prop_assert!(signer.verify(&payload, &signature).is_ok());
        }

        #[test]
        fn distinct_payloads_do_not_cross_verify(
            secret in "[a-zA-Z0-9_]{1,64}",
            p1 in proptest::collection::vec(any::<u8>(), 0..256),
            p2 in proptest::collection::vec(any::<u8>(), 0..256),
        ) {
            prop_assume!(p1 != p2);
            let signer = WebhookSigner::from_secret(secret).unwrap();
            let signature = signer.sign(&p1);
            prop_assert!(signer.verify(&p2, &signature).is_err());
        }

        #[test]
        fn distinct_secrets_do_not_cross_verify(
            s1 in "[a-z]{1,32}",
            s2 in "[a-z]{1,32}",
            payload in proptest::collection::vec(any::<u8>(), 0..256),
        ) {
            prop_assume!(s1 != s2);
            let signature = WebhookSigner::from_secret(s1).unwrap().sign(&payload);
            let verifier = WebhookSigner::from_secret(s2).unwrap();
            prop_assert!(verifier.verify(&payload, &signature).is_err());
        }
    }
}
