//! Opaque secret form.
//!
//! AriaNg stores RPC secrets base64-encoded. The plaintext lives in the
//! endpoint URL's password slot; the options object only ever sees the
//! opaque form produced here.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::error::{Result, RpcLinkError};

/// Plaintext secret to its opaque (base64) form. Empty stays empty.
pub fn conceal_secret(plaintext: &str) -> String {
    BASE64.encode(plaintext.as_bytes())
}

/// Opaque (base64) secret back to plaintext
pub fn reveal_secret(opaque: &str) -> Result<String> {
    let bytes = BASE64.decode(opaque.trim())?;
    String::from_utf8(bytes)
        .map_err(|e| RpcLinkError::SecretDecode(format!("Invalid UTF-8: {e}")))
}
