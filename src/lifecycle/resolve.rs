//! Version-to-release resolution.

use super::response::ReleaseRecord;

/// Which rule selected a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// `cycle` equals the requested version
    Cycle,
    /// `name` equals the requested version
    Name,
    /// `name` starts with the requested version
    NamePrefix,
}

/// The fields extracted from a matched release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRelease {
    /// Display label for the version column
    pub label: String,
    /// Published EOL value, `None` when the release carries none
    pub eol: Option<String>,
    /// Rule that selected the release
    pub matched_by: MatchKind,
}

/// Outcome of matching a requested version against a release list.
///
/// `NotFound` is an ordinary outcome: the caller still emits a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(ResolvedRelease),
    NotFound,
}

impl Resolution {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Match a requested version to a release.
///
/// Rules, in precedence order, each scanning the whole list in native order:
/// 1. exact `cycle`
/// 2. exact `name`
/// 3. `name` prefix
#[must_use]
pub fn resolve(releases: &[ReleaseRecord], wanted: &str) -> Resolution {
    match find_release(releases, wanted) {
        Some((release, matched_by)) => Resolution::Found(ResolvedRelease {
            label: release
                .display_label()
                .unwrap_or_else(|| wanted.to_string()),
            eol: release.eol_text(),
            matched_by,
        }),
        None => Resolution::NotFound,
    }
}

fn find_release<'a>(
    releases: &'a [ReleaseRecord],
    wanted: &str,
) -> Option<(&'a ReleaseRecord, MatchKind)> {
    if let Some(release) = releases
        .iter()
        .find(|r| r.cycle_text().as_deref() == Some(wanted))
    {
        return Some((release, MatchKind::Cycle));
    }

    if let Some(release) = releases
        .iter()
        .find(|r| r.name_text().as_deref() == Some(wanted))
    {
        return Some((release, MatchKind::Name));
    }

    // An empty request would prefix-match everything.
    if wanted.is_empty() {
        return None;
    }

    releases
        .iter()
        .find(|r| r.name_text().is_some_and(|name| name.starts_with(wanted)))
        .map(|release| (release, MatchKind::NamePrefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::response::FieldValue;

    fn release(cycle: Option<&str>, name: Option<&str>) -> ReleaseRecord {
        ReleaseRecord {
            cycle: cycle.map(FieldValue::from),
            name: name.map(FieldValue::from),
            ..Default::default()
        }
    }

    fn found(resolution: Resolution) -> ResolvedRelease {
        match resolution {
            Resolution::Found(r) => r,
            Resolution::NotFound => panic!("expected a match"),
        }
    }

    #[test]
    fn test_cycle_exact_beats_later_name_exact() {
        let mut first = release(Some("12"), Some("12.0"));
        first.eol = Some("2026-06-30".into());
        let mut second = release(Some("12.0"), Some("12"));
        second.eol = Some("2099-01-01".into());

        let resolved = found(resolve(&[first, second], "12"));
        assert_eq!(resolved.matched_by, MatchKind::Cycle);
        assert_eq!(resolved.label, "12");
        assert_eq!(resolved.eol.as_deref(), Some("2026-06-30"));
    }

    #[test]
    fn test_cycle_exact_found_later_beats_earlier_name_exact() {
        let releases = [release(Some("a"), Some("7")), release(Some("7"), None)];
        let resolved = found(resolve(&releases, "7"));
        assert_eq!(resolved.matched_by, MatchKind::Cycle);
        assert_eq!(resolved.label, "7");
    }

    #[test]
    fn test_name_exact() {
        let releases = [release(None, Some("bookworm")), release(None, Some("trixie"))];
        let resolved = found(resolve(&releases, "trixie"));
        assert_eq!(resolved.matched_by, MatchKind::Name);
        assert_eq!(resolved.label, "trixie");
    }

    #[test]
    fn test_prefix_fallback() {
        let releases = [release(None, Some("24.04 LTS"))];
        let resolved = found(resolve(&releases, "24.04"));
        assert_eq!(resolved.matched_by, MatchKind::NamePrefix);
        assert_eq!(resolved.label, "24.04 LTS");
        assert_eq!(resolved.eol, None);
    }

    #[test]
    fn test_prefix_takes_first_occurrence() {
        let releases = [release(None, Some("3.1x")), release(None, Some("3.10"))];
        assert_eq!(found(resolve(&releases, "3.1")).label, "3.1x");
    }

    #[test]
    fn test_label_falls_back_to_name() {
        // Matched by name prefix, neither label nor cycle published
        let releases = [release(None, Some("2.0.1"))];
        let resolved = found(resolve(&releases, "2.0"));
        assert_eq!(resolved.label, "2.0.1");

        // An empty name never matches
        let bare = release(None, Some(""));
        assert_eq!(resolve(&[bare], "5"), Resolution::NotFound);
    }

    #[test]
    fn test_numeric_cycle_matches() {
        let record: ReleaseRecord = serde_json::from_str(r#"{"cycle":22,"eol":"2027-04-30"}"#).unwrap();
        let resolved = found(resolve(&[record], "22"));
        assert_eq!(resolved.label, "22");
        assert_eq!(resolved.eol.as_deref(), Some("2027-04-30"));
    }

    #[test]
    fn test_not_found() {
        let releases = [release(Some("3.11"), Some("3.11"))];
        assert_eq!(resolve(&releases, "4.0"), Resolution::NotFound);
        assert_eq!(resolve(&[], "1"), Resolution::NotFound);
        assert!(!resolve(&releases, "").is_found());
    }

    #[test]
    fn test_release_label_used_for_display() {
        let record: ReleaseRecord = serde_json::from_str(
            r#"{"cycle":"13","releaseLabel":"13 (Trixie)","eol":"2028-08-09"}"#,
        )
        .unwrap();
        let resolved = found(resolve(&[record], "13"));
        assert_eq!(resolved.label, "13 (Trixie)");
        assert_eq!(resolved.eol.as_deref(), Some("2028-08-09"));
    }
}
