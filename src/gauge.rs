/// Width in pixels of a bar's filled part for `value` in `min..=max`.
///
/// Values outside the range clamp to an empty or full bar.
pub fn fill_width(value: u32, min: u32, max: u32, width: u32) -> u32 {
    if max <= min {
        return 0;
    }
    let clamped = value.clamp(min, max) - min;
    clamped * width / (max - min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_proportionally() {
        assert_eq!(fill_width(0, 0, 100, 50), 0);
        assert_eq!(fill_width(50, 0, 100, 50), 25);
        assert_eq!(fill_width(100, 0, 100, 50), 50);
        assert_eq!(fill_width(80, 0, 160, 120), 60);
    }

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(fill_width(250, 0, 160, 120), 120);
        assert_eq!(fill_width(5, 10, 20, 40), 0);
    }

    #[test]
    fn empty_range_is_empty_bar() {
        assert_eq!(fill_width(5, 10, 10, 40), 0);
    }
}
