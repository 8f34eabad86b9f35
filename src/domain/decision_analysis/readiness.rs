//! Readiness verdict of a decision analysis.

wire_enum! {
    /// Whether a decision can safely be made now.
    ///
    /// Supplied by the producer of an analysis and never re-derived from its
    /// risks or blocks. `Outdated` means the underlying data has expired and
    /// overrides whatever the content would otherwise suggest.
    Readiness, kind = "readiness" {
        Ready => "ready",
        Uncertain => "uncertain",
        Blocked => "blocked",
        Outdated => "outdated",
    }
}

impl Readiness {
    /// Returns true for the terminal "data expired" verdict.
    pub fn is_outdated(&self) -> bool {
        matches!(self, Readiness::Outdated)
    }
}
