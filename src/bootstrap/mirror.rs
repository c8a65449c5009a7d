//! Package source selection: snapshot archive, custom mirror or tool default.

use std::fmt;

use crate::config::RecipeParams;

/// Base URL of the dated Debian snapshot archive.
pub const SNAPSHOT_ARCHIVE_URL: &str = "http://snapshot.debian.org/archive/debian";

/// Disables the Release file `Valid-Until` check.
pub const APTOPT_NO_VALID_UNTIL: &str = "Acquire::Check-Valid-Until \"false\"";

/// Switches gpgv to mmdebstrap's wrapper that accepts signatures from
/// keys which have expired since signing.
pub const APTOPT_GPGV_NO_EXPIRED_KEYS: &str =
    "Apt::Key::gpgvcommand \"/usr/libexec/mmdebstrap/gpgvnoexpkeysig\"";

/// Which package source the bootstrap uses.
///
/// A snapshot takes priority over a mirror when both are given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorSelection<'a> {
    /// Bootstrap from the snapshot archive at this timestamp.
    Snapshot(&'a str),
    /// Bootstrap from a custom mirror accepted without key verification.
    Mirror(&'a str),
    /// Let the tool pick its built-in mirror for the suite.
    Default,
}

impl<'a> MirrorSelection<'a> {
    pub fn from_params(params: &'a RecipeParams) -> Self {
        match (params.snapshot.as_deref(), params.mirror.as_deref()) {
            (Some(snapshot), mirror) => {
                if let Some(mirror) = mirror {
                    tracing::warn!(
                        snapshot,
                        mirror,
                        "both snapshot and mirror are set; the snapshot takes priority \
                         and the mirror is ignored"
                    );
                }
                MirrorSelection::Snapshot(snapshot)
            }
            (None, Some(mirror)) => MirrorSelection::Mirror(mirror),
            (None, None) => MirrorSelection::Default,
        }
    }

    /// apt options this source needs on top of the always-present ones.
    pub fn aptopts(&self) -> &'static [&'static str] {
        match self {
            MirrorSelection::Snapshot(_) => &[APTOPT_NO_VALID_UNTIL, APTOPT_GPGV_NO_EXPIRED_KEYS],
            MirrorSelection::Mirror(_) | MirrorSelection::Default => &[],
        }
    }

    /// The positional mirror argument, if any, for `suite`.
    pub fn target_mirror(&self, suite: &str) -> Option<TargetMirror> {
        match self {
            MirrorSelection::Snapshot(id) => Some(TargetMirror::Snapshot(format!(
                "{}/{}/",
                SNAPSHOT_ARCHIVE_URL, id
            ))),
            MirrorSelection::Mirror(url) => Some(TargetMirror::SourceLine(format!(
                "deb [trusted=yes] {} {} main",
                url, suite
            ))),
            MirrorSelection::Default => None,
        }
    }
}

/// Mirror specification passed as the tool's final positional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetMirror {
    /// URL of a dated snapshot archive.
    Snapshot(String),
    /// Full `deb [trusted=yes] ...` source line for a custom mirror.
    SourceLine(String),
}

impl TargetMirror {
    pub fn as_str(&self) -> &str {
        match self {
            TargetMirror::Snapshot(s) | TargetMirror::SourceLine(s) => s,
        }
    }
}

impl fmt::Display for TargetMirror {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
