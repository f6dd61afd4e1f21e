//! Small arithmetic helpers consumed by surrounding application code.
//! These have no dependency on the numeric core.

use crate::error::MathError;

/// Restrict `value` to the inclusive range `[min, max]`.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Everything needed to render pagination links or build an offset query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageInfo {
    pub current: usize,
    pub total: usize,
    pub total_items: usize,
    pub offset: usize,
    pub number: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Compute page counts and the item offset for a 1-based `requested_page`.
/// The requested page is clamped into the valid range rather than rejected.
pub fn compute_page_info(
    items_per_page: usize,
    total_items: usize,
    requested_page: usize,
) -> Result<PageInfo, MathError> {
    if items_per_page == 0 {
        return Err(MathError::invalid_argument(
            "items_per_page must be a positive integer",
        ));
    }

    let total = total_items.div_ceil(items_per_page);
    let current = clamp(requested_page, 1, total.max(1));
    let offset = items_per_page * (current - 1);

    Ok(PageInfo {
        current,
        total,
        total_items,
        offset,
        number: items_per_page,
        has_prev: current > 1,
        has_next: current < total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5, 1, 10), 5);
        assert_eq!(clamp(-3, 1, 10), 1);
        assert_eq!(clamp(42, 1, 10), 10);
        assert_eq!(clamp(2.5, 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_middle_page() {
        let info = compute_page_info(10, 95, 3).unwrap();
        assert_eq!(info.current, 3);
        assert_eq!(info.total, 10);
        assert_eq!(info.total_items, 95);
        assert_eq!(info.offset, 20);
        assert_eq!(info.number, 10);
        assert!(info.has_prev);
        assert!(info.has_next);
    }

    #[test]
    fn test_first_and_last_pages() {
        let first = compute_page_info(10, 95, 1).unwrap();
        assert!(!first.has_prev);
        assert!(first.has_next);
        assert_eq!(first.offset, 0);

        let last = compute_page_info(10, 95, 10).unwrap();
        assert!(last.has_prev);
        assert!(!last.has_next);
        assert_eq!(last.offset, 90);
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let info = compute_page_info(10, 35, 99).unwrap();
        assert_eq!(info.current, 4);
        assert_eq!(info.offset, 30);

        let info = compute_page_info(10, 35, 0).unwrap();
        assert_eq!(info.current, 1);
        assert_eq!(info.offset, 0);
    }

    #[test]
    fn test_no_items() {
        let info = compute_page_info(10, 0, 5).unwrap();
        assert_eq!(info.total, 0);
        assert_eq!(info.current, 1);
        assert_eq!(info.offset, 0);
        assert!(!info.has_prev);
        assert!(!info.has_next);
    }

    #[test]
    fn test_zero_items_per_page_rejected() {
        assert!(matches!(
            compute_page_info(0, 10, 1),
            Err(MathError::InvalidArgument { .. })
        ));
    }
}
