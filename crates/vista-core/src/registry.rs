//! Section offsets as reported by the layout engine.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::section::SectionKey;

/// Key → vertical offset store (logical pixels)
///
/// A section that has not finished layout has no entry; callers must treat
/// it as unreachable rather than as offset zero.
#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    offsets: HashMap<SectionKey, f64>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the offset for `key`, replacing any previous value
    ///
    /// Negative offsets are clamped to zero and non-finite ones are dropped.
    /// Returns true when the stored value changed.
    pub fn record_offset(&mut self, key: SectionKey, y: f64) -> bool {
        if !y.is_finite() {
            warn!("Ignoring non-finite offset {} for section {}", y, key);
            return false;
        }
        let y = y.max(0.0);

        let previous = self.offsets.insert(key, y);
        let changed = previous != Some(y);
        if changed {
            debug!(section = %key, y, "section offset recorded");
        }
        changed
    }

    /// Offset of `key`, or None while its layout is unknown
    #[inline]
    pub fn offset(&self, key: SectionKey) -> Option<f64> {
        self.offsets.get(&key).copied()
    }

    /// Where navigation should scroll to for `key` (top of page when unknown)
    pub fn scroll_target(&self, key: SectionKey) -> f64 {
        self.offset(key).unwrap_or(0.0)
    }

    /// Number of sections with a known offset
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}
