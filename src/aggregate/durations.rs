#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
}

/// Mean, max and min of `values`; `None` when there is nothing to average.
pub fn duration_stats(values: &[f64]) -> Option<DurationStats> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    Some(DurationStats {
        mean: sum / values.len() as f64,
        max,
        min,
    })
}

/// Two-decimal rounding of the exact binary value; exact ties go to the
/// even digit. `2.675` is stored below the half and gives `2.67`.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

impl DurationStats {
    pub fn rounded(self) -> Self {
        Self {
            mean: round2(self.mean),
            max: round2(self.max),
            min: round2(self.min),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/aggregate/durations.rs"]
mod tests;
