//! Credential provisioning for yt-dlp
//!
//! Materializes the externally-supplied authentication blob (browser session
//! cookies) as a file the extraction tool can consume. Every failure mode
//! degrades to "proceed without credential"; a missing credential only
//! limits access to restricted media, it never aborts the process.

use base64::{engine::general_purpose, Engine as _};
use std::path::{Path, PathBuf};

/// Decode the credential blob and write it to `target`.
///
/// The blob is expected to be base64-encoded; a value that does not decode
/// is written verbatim on the assumption it is an already-plain cookie file.
/// Returns the cookie file path on success, `None` when no credential is
/// available or the file could not be written. Never returns an error:
/// downstream extraction simply runs unauthenticated.
pub fn provision_cookies(raw: Option<&str>, target: &Path) -> Option<PathBuf> {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty())?;

    let decoded = match general_purpose::STANDARD.decode(raw) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("YOUTUBE_COOKIES is not valid base64 ({}), using the value verbatim", e);
            raw.as_bytes().to_vec()
        }
    };

    if let Err(e) = std::fs::write(target, &decoded) {
        log::error!("Failed to write cookie file {}: {}", target.display(), e);
        return None;
    }

    // 0644: readable by the extractor, writable only by the owner.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Err(e) = std::fs::set_permissions(target, std::fs::Permissions::from_mode(0o644)) {
            log::warn!("Failed to set permissions on {}: {}", target.display(), e);
        }
    }

    log::info!("Cookie file provisioned at {}", target.display());
    Some(target.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose, Engine as _};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_provision_decodes_base64_blob() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("cookies.txt");
        let blob = general_purpose::STANDARD.encode("# Netscape HTTP Cookie File\n.youtube.com\tTRUE\t/\n");

        let path = provision_cookies(Some(&blob), &target).unwrap();

        assert_eq!(path, target);
        let written = std::fs::read_to_string(&target).unwrap();
        assert_eq!(written, "# Netscape HTTP Cookie File\n.youtube.com\tTRUE\t/\n");
    }

    #[test]
    fn test_provision_falls_back_to_verbatim_value() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("cookies.txt");
        // '#' and tab characters are not in the base64 alphabet
        let plain = "# Netscape HTTP Cookie File\n.youtube.com\tTRUE";

        let path = provision_cookies(Some(plain), &target).unwrap();

        assert_eq!(path, target);
        assert_eq!(std::fs::read_to_string(&target).unwrap(), plain);
    }

    #[test]
    fn test_provision_without_credential_returns_none() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("cookies.txt");

        assert!(provision_cookies(None, &target).is_none());
        assert!(provision_cookies(Some(""), &target).is_none());
        assert!(provision_cookies(Some("   "), &target).is_none());
        assert!(!target.exists());
    }

    #[test]
    fn test_provision_degrades_on_unwritable_target() {
        let dir = tempdir().unwrap();
        // Parent directory does not exist, so the write must fail
        let target = dir.path().join("missing").join("cookies.txt");

        assert!(provision_cookies(Some("dGVzdA=="), &target).is_none());
    }
}
