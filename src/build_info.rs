//! Version stamp embedded by `build.rs`

use serde::Serialize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Which binary is running, reported by the status tool and at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildStamp {
    pub version: &'static str,
    /// Local build counter; `None` when built without `build.rs` output
    pub build_number: Option<u64>,
    pub built_at: Option<&'static str>,
}

impl BuildStamp {
    pub fn current() -> Self {
        Self::from_env_values(
            option_env!("DIETCALC_BUILD_NUMBER"),
            option_env!("DIETCALC_BUILD_TIMESTAMP"),
        )
    }

    fn from_env_values(build_number: Option<&str>, built_at: Option<&'static str>) -> Self {
        Self {
            version: VERSION,
            build_number: build_number.and_then(|n| n.trim().parse().ok()),
            built_at: built_at.filter(|t| !t.is_empty()),
        }
    }

    /// One-line summary, e.g. `dietcalc 1.0.0 (build 42, 2026-03-02T10:00:00Z)`
    pub fn summary(&self) -> String {
        let build = self.build_number.map_or_else(|| "dev".to_string(), |n| n.to_string());
        format!(
            "dietcalc {} (build {}, {})",
            self.version,
            build,
            self.built_at.unwrap_or("unknown time")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamp_from_build_script_values() {
        let stamp = BuildStamp::from_env_values(Some("42"), Some("2026-03-02T10:00:00Z"));
        assert_eq!(stamp.build_number, Some(42));
        assert_eq!(
            stamp.summary(),
            format!("dietcalc {} (build 42, 2026-03-02T10:00:00Z)", VERSION)
        );
    }

    #[test]
    fn test_stamp_without_build_script() {
        let stamp = BuildStamp::from_env_values(Some("4x"), Some(""));
        assert_eq!(stamp.build_number, None);
        assert_eq!(stamp.built_at, None);
        assert!(stamp.summary().ends_with("(build dev, unknown time)"));
    }
}
