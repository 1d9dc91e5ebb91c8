use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Computes the expected signature for a webhook body: the base64-encoded
/// HMAC-SHA256 of the raw bytes, keyed with the shared app secret.
pub fn sign(raw_body: &[u8], secret: &str) -> String {
    // HMAC-SHA256 accepts keys of any length, so construction cannot fail.
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(raw_body);
    BASE64.encode(mac.finalize().into_bytes())
}

/// Verifies a webhook signature header against the raw request body.
///
/// An empty `secret` disables verification: every request is treated as valid.
/// That is a deliberate escape hatch for local development, hence the warning.
/// With a secret configured, an absent or blank header is invalid.
pub fn verify(raw_body: &[u8], provided: Option<&str>, secret: &str) -> bool {
    if secret.is_empty() {
        tracing::warn!(
            "webhook secret not configured; accepting request without signature validation \
             (NOT recommended for production)"
        );
        return true;
    }

    let provided = match provided {
        Some(header) => sanitize(header),
        None => return false,
    };
    if provided.is_empty() {
        return false;
    }

    let expected = sign(raw_body, secret);

    // Constant-time comparison to prevent timing attacks
    expected.as_bytes().ct_eq(provided.as_bytes()).into()
}

/// Trims the header value and strips one matching pair of surrounding quotes.
/// Some senders wrap the signature in `"` or `'`.
fn sanitize(sig: &str) -> &str {
    let s = sig.trim();
    s.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .or_else(|| {
            s.strip_prefix('\'')
                .and_then(|inner| inner.strip_suffix('\''))
        })
        .unwrap_or(s)
}
