//! Field-level fallback resolution against a site profile.

use tracing::debug;

/// Fallback merge between a current record and a reference profile of the
/// same shape.
///
/// Implementations fill each eligible field of `self` from `profile` when
/// the field is missing (empty string, the literal `"NaN"`, numeric NaN,
/// or an absent option). Fields already holding a real value are left
/// untouched, and each record's excluded fields keep their compiled-in
/// defaults regardless of the profile.
pub trait ProfileFallback {
    fn fill_from(&mut self, profile: &Self);
}

/// Complete `current` from `profile`, mutating it in place.
///
/// Returns `false` without touching `current` when no profile is
/// available; this is a recoverable, expected outcome for sites seen for
/// the first time. Returns `true` whenever a profile was supplied,
/// regardless of how many fields actually changed.
pub fn resolve<T: ProfileFallback>(current: &mut T, profile: Option<&T>) -> bool {
    match profile {
        Some(profile) => {
            current.fill_from(profile);
            true
        }
        None => {
            debug!("no site profile available, metadata left as parsed");
            false
        }
    }
}

/// Whether a string field counts as missing: empty or the literal "NaN"
/// sentinel some upstream producers write.
pub fn string_is_missing(value: &str) -> bool {
    value.is_empty() || value == "NaN"
}

/// Fill a string field from the profile when missing.
pub fn fill_string(current: &mut String, profile: &str) {
    if string_is_missing(current) {
        *current = profile.to_string();
    }
}

/// Fill a float field from the profile when NaN.
pub fn fill_f64(current: &mut f64, profile: f64) {
    if current.is_nan() {
        *current = profile;
    }
}

/// Adopt the profile's whole value when the current one is absent.
pub fn fill_option<T: Clone>(current: &mut Option<T>, profile: &Option<T>) {
    if current.is_none() {
        *current = profile.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Pair {
        site: String,
        depth: f64,
    }

    impl ProfileFallback for Pair {
        fn fill_from(&mut self, profile: &Self) {
            fill_string(&mut self.site, &profile.site);
            fill_f64(&mut self.depth, profile.depth);
        }
    }

    #[test]
    fn test_missing_profile_is_recoverable() {
        let mut current = Pair {
            site: String::new(),
            depth: f64::NAN,
        };
        assert!(!resolve(&mut current, None));
        assert!(current.site.is_empty());
        assert!(current.depth.is_nan());
    }

    #[test]
    fn test_resolve_reports_true_even_when_nothing_changes() {
        let mut current = Pair {
            site: "MATX".to_string(),
            depth: 4.0,
        };
        let profile = Pair {
            site: "OTHR".to_string(),
            depth: 9.0,
        };
        assert!(resolve(&mut current, Some(&profile)));
        assert_eq!(current.site, "MATX");
        assert_eq!(current.depth, 4.0);
    }

    #[test]
    fn test_string_missing_rules() {
        assert!(string_is_missing(""));
        assert!(string_is_missing("NaN"));
        assert!(!string_is_missing("nan"));
        assert!(!string_is_missing("MATX"));
    }

    #[test]
    fn test_fill_string_sentinels() {
        let mut s = "NaN".to_string();
        fill_string(&mut s, "MATX");
        assert_eq!(s, "MATX");

        let mut s = String::new();
        fill_string(&mut s, "MATX");
        assert_eq!(s, "MATX");

        let mut s = "KEEP".to_string();
        fill_string(&mut s, "MATX");
        assert_eq!(s, "KEEP");
    }

    #[test]
    fn test_fill_f64_nan_only() {
        let mut v = f64::NAN;
        fill_f64(&mut v, 2.5);
        assert_eq!(v, 2.5);

        let mut v = 0.0;
        fill_f64(&mut v, 2.5);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn test_fill_option_adopts_whole_value() {
        let mut current: Option<u32> = None;
        fill_option(&mut current, &Some(7));
        assert_eq!(current, Some(7));

        let mut current = Some(1);
        fill_option(&mut current, &Some(7));
        assert_eq!(current, Some(1));
    }
}
