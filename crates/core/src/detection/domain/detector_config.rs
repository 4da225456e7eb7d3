/// Threshold used when the configured one is outside `(0, 1]`.
pub const DEFAULT_THRESHOLD: f32 = 0.5;

/// Typed detector configuration.
///
/// `threshold` is the minimum confidence a candidate must strictly exceed
/// to be drawn. It is always within `(0, 1]`: anything else, NaN included,
/// is replaced by [`DEFAULT_THRESHOLD`] at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectorConfig {
    threshold: f32,
}

impl DetectorConfig {
    pub fn new(threshold: f32) -> Self {
        let threshold = if is_valid_threshold(threshold) {
            threshold
        } else {
            log::warn!("Threshold {threshold} outside (0, 1], using {DEFAULT_THRESHOLD}");
            DEFAULT_THRESHOLD
        };
        Self { threshold }
    }

    /// Reads an opaque configuration blob whose first four bytes hold a
    /// native-endian `f32` threshold. Shorter blobs yield the default.
    pub fn from_bytes(data: &[u8]) -> Self {
        match data.get(..4).and_then(|b| <[u8; 4]>::try_from(b).ok()) {
            Some(bytes) => Self::new(f32::from_ne_bytes(bytes)),
            None => Self::default(),
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Whether `value` lies in (0, 1].
pub fn is_valid_threshold(value: f32) -> bool {
    value > 0.0 && value <= 1.0
}
