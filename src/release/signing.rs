// src/release/signing.rs

use std::fmt;

use tracing::warn;

use crate::errors::Result;
use crate::graph::TaskGraph;
use crate::release::secrets::SecretSource;
use crate::types::TaskKind;

pub const SIGN_KEY_ID: &str = "libs.sign.key.id";
pub const SIGN_KEY_PRIVATE: &str = "libs.sign.key.private";
pub const SIGN_PASSPHRASE: &str = "libs.sign.passphrase";

/// In-memory PGP key material used by signer tasks.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey {
    pub key_id: Option<String>,
    pub private_key: String,
    pub passphrase: Option<String>,
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("key_id", &self.key_id)
            .field("private_key", &"<redacted>")
            .field("passphrase", &self.passphrase.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Resolve the signing key, or `None` when no usable private key is set.
///
/// A blank private key counts as absent.
pub fn resolve_signing_key(secrets: &impl SecretSource) -> Option<SigningKey> {
    let private_key = secrets
        .lookup(SIGN_KEY_PRIVATE)
        .filter(|k| !k.trim().is_empty())?;

    Some(SigningKey {
        key_id: secrets.lookup(SIGN_KEY_ID),
        private_key,
        passphrase: secrets.lookup(SIGN_PASSPHRASE),
    })
}

/// Without a key nothing gets signed, so signer tasks are demoted to
/// [`TaskKind::Other`] and take no part in ordering. Returns the number of
/// demoted tasks.
pub fn apply_signing_policy(graph: &mut TaskGraph, key: Option<&SigningKey>) -> Result<usize> {
    if key.is_some() {
        return Ok(0);
    }

    let signers: Vec<String> = graph
        .tasks_of_kind(TaskKind::Signer)
        .map(|t| t.name.clone())
        .collect();

    for name in signers.iter() {
        graph.reclassify(name, TaskKind::Other)?;
    }

    if !signers.is_empty() {
        warn!(
            demoted = signers.len(),
            "no signing key configured; signer tasks will not be ordered"
        );
    }
    Ok(signers.len())
}
