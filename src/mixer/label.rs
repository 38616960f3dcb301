//! Display-label derivation from raw session identity data.

use super::SessionIdentity;

/// Marker the session identifier puts between the executable path and
/// the per-instance suffix, e.g. `...\chrome.exe%b{guid}`.
const EXECUTABLE_MARKER: &str = "%b";

/// Derive a short human label for one session.
///
/// Precedence: executable base name recovered from the identifier, then
/// a non-empty display name, then the raw identifier, then `"Unknown"`
/// when no identity data exists at all. Display-width truncation is the
/// status line's job, not ours.
pub fn derive_label(identity: &SessionIdentity) -> String {
    if let Some(identifier) = identity.identifier.as_deref() {
        if let Some(name) = executable_name(identifier) {
            return name.to_string();
        }
        if let Some(display) = identity.display_name.as_deref() {
            if !display.is_empty() {
                return display.to_string();
            }
        }
        return identifier.to_string();
    }
    match identity.display_name.as_deref() {
        Some(display) if !display.is_empty() => display.to_string(),
        _ => "Unknown".to_string(),
    }
}

/// Extract the substring strictly between the last path separator and
/// the marker; the marker must come after the separator.
fn executable_name(identifier: &str) -> Option<&str> {
    let separator = identifier.rfind('\\')?;
    let marker = identifier.find(EXECUTABLE_MARKER)?;
    if marker <= separator {
        return None;
    }
    Some(&identifier[separator + 1..marker])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(identifier: Option<&str>, display_name: Option<&str>) -> SessionIdentity {
        SessionIdentity {
            identifier: identifier.map(str::to_string),
            display_name: display_name.map(str::to_string),
        }
    }

    #[test]
    fn recovers_executable_from_identifier() {
        let id = r"{0.0.0.00000000}.{guid}|\Device\HarddiskVolume4\Program Files\chrome.exe%b{instance}";
        assert_eq!(derive_label(&identity(Some(id), None)), "chrome.exe");
    }

    #[test]
    fn prefers_identifier_extraction_over_display_name() {
        let id = r"\Device\HarddiskVolume4\spotify.exe%b{instance}";
        assert_eq!(derive_label(&identity(Some(id), Some("Spotify"))), "spotify.exe");
    }

    #[test]
    fn falls_back_to_display_name_without_marker() {
        assert_eq!(
            derive_label(&identity(Some("no-marker-here"), Some("Spotify"))),
            "Spotify"
        );
    }

    #[test]
    fn empty_display_name_falls_back_to_identifier() {
        assert_eq!(
            derive_label(&identity(Some("raw-identifier"), Some(""))),
            "raw-identifier"
        );
    }

    #[test]
    fn marker_before_last_separator_is_ignored() {
        let id = r"prefix%bmiddle\suffix";
        assert_eq!(derive_label(&identity(Some(id), None)), id);
    }

    #[test]
    fn display_name_used_when_identifier_missing() {
        assert_eq!(derive_label(&identity(None, Some("Spotify"))), "Spotify");
    }

    #[test]
    fn unknown_without_any_identity_data() {
        assert_eq!(derive_label(&identity(None, None)), "Unknown");
        assert_eq!(derive_label(&identity(None, Some(""))), "Unknown");
    }
}
