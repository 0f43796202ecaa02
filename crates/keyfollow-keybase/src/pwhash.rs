//! Login hash derivation for the salted-challenge protocol.
//!
//! The server hands out a per-user salt and a one-time `login_session` blob;
//! the client proves knowledge of the passphrase by deriving a key with
//! scrypt and returning an HMAC-SHA512 of the blob under that key. The
//! passphrase itself never goes over the wire. Parameters must match the
//! server's verifier bit-for-bit.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::error::{KeybaseError, KeybaseResult};

/// scrypt cost: N = 2^15.
const SCRYPT_LOG_N: u8 = 15;
/// scrypt block size.
const SCRYPT_R: u32 = 8;
/// scrypt parallelization.
const SCRYPT_P: u32 = 1;
/// Total scrypt output length in bytes.
const DERIVED_LEN: usize = 224;
/// The final 32 bytes of the derived output are the HMAC key; everything
/// before this offset is reserved for other client keys and discarded here.
const PWH_OFFSET: usize = 192;

type HmacSha512 = Hmac<Sha512>;

/// Computes the `hmac_pwh` login proof.
///
/// `salt_hex` is the server-supplied hex salt and `login_session_b64` the
/// base64 session blob from `getsalt`. Returns the lowercase hex digest.
///
/// # Errors
///
/// Returns [`KeybaseError::Decode`] when the salt or session blob is
/// malformed; the derivation itself has no failure modes.
pub fn compute_login_hash(
    passphrase: &str,
    salt_hex: &str,
    login_session_b64: &str,
) -> KeybaseResult<String> {
    let salt = hex::decode(salt_hex).map_err(|e| KeybaseError::Decode {
        what: "salt (hex)",
        detail: e.to_string(),
    })?;
    let session = BASE64
        .decode(login_session_b64)
        .map_err(|e| KeybaseError::Decode {
            what: "login_session (base64)",
            detail: e.to_string(),
        })?;

    let params = scrypt::Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, DERIVED_LEN - PWH_OFFSET)
        .expect("scrypt parameters are valid constants");
    let mut derived = [0u8; DERIVED_LEN];
    scrypt::scrypt(passphrase.as_bytes(), &salt, &params, &mut derived)
        .expect("output length is a valid constant");

    let mut mac = <HmacSha512 as Mac>::new_from_slice(&derived[PWH_OFFSET..])
        .expect("HMAC can take key of any size");
    mac.update(&session);

    Ok(hex::encode(mac.finalize().into_bytes()))
}
