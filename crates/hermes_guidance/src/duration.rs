/// Edge durations and weights are fixed-point, in tenths of a second.
pub type Deciseconds = i32;

pub(crate) const DECISECONDS_PER_SECOND: f64 = 10.0;

/// Converts an accumulated fixed-point duration into seconds.
///
/// Accumulate in [`Deciseconds`] and convert once, when a step is materialized.
pub fn to_seconds(duration: Deciseconds) -> f64 {
    duration as f64 / DECISECONDS_PER_SECOND
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_seconds() {
        assert_eq!(to_seconds(0), 0.0);
        assert_eq!(to_seconds(70), 7.0);
        assert_eq!(to_seconds(3), 0.3);
    }
}
