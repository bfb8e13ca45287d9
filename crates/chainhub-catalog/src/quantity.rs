/// Bounded, stepped quantity input (the MOQ slider).
///
/// Only the selector is bounded; [`crate::pricing::discount_percent`]
/// accepts any integer. Built through [`MoqSelector::new`], which keeps
/// `min <= default <= max` and `step > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoqSelector {
    min: u32,
    max: u32,
    step: u32,
    default: u32,
}

/// The selector on the pricing panel: 10 to 150 pieces in steps of 5.
pub const MOQ_SELECTOR: MoqSelector = MoqSelector {
    min: 10,
    max: 150,
    step: 5,
    default: 50,
};

impl MoqSelector {
    /// Returns `None` unless `min <= default <= max` and `step > 0`.
    pub const fn new(min: u32, max: u32, step: u32, default: u32) -> Option<Self> {
        if min > max || step == 0 || default < min || default > max {
            return None;
        }
        Some(Self {
            min,
            max,
            step,
            default,
        })
    }

    pub const fn min(&self) -> u32 {
        self.min
    }

    pub const fn max(&self) -> u32 {
        self.max
    }

    pub const fn step(&self) -> u32 {
        self.step
    }

    pub const fn default_quantity(&self) -> u32 {
        self.default
    }

    /// Clamp `requested` into range and snap to the nearest step counted
    /// from `min`. Ties snap upward.
    pub fn select(&self, requested: i64) -> u32 {
        let min = i64::from(self.min);
        let max = i64::from(self.max);
        let step = i64::from(self.step);
        let clamped = requested.clamp(min, max);
        let offset = clamped - min;
        let steps = (offset * 2 + step) / (step * 2);
        let mut snapped = min + steps * step;
        if snapped > max {
            snapped -= step;
        }
        // snapped lies within [min, max], both of which came from u32.
        u32::try_from(snapped).unwrap_or(self.max)
    }

    pub fn contains(&self, quantity: u32) -> bool {
        (self.min..=self.max).contains(&quantity)
    }
}

impl Default for MoqSelector {
    fn default() -> Self {
        MOQ_SELECTOR
    }
}
