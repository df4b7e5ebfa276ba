// src/release/repository.rs

use crate::release::secrets::SecretSource;

/// Staging repository id; when set, uploads go to that staging repository.
pub const REPOSITORY_ID: &str = "libs.repository.id";

pub const DEFAULT_REPOSITORY_BASE: &str = "https://oss.sonatype.org/service/local/staging";

/// Upload URL for a release.
///
/// - no repository id: `<base>/deploy/maven2/`
/// - repository id `X`: `<base>/deployByRepositoryId/X`
pub fn repository_url(base: &str, secrets: &impl SecretSource) -> String {
    let base = base.trim_end_matches('/');
    match secrets.lookup(REPOSITORY_ID) {
        Some(id) if !id.trim().is_empty() => {
            format!("{base}/deployByRepositoryId/{}", id.trim())
        }
        _ => format!("{base}/deploy/maven2/"),
    }
}
