//! Pointer-to-tilt derivation
//!
//! Converts a pointer sample over a rectangle into rotation angles. The pointer
//! is clamped to the rectangle first, so each angle is bounded by
//! `size / (2 * divisor)` wherever the pointer actually is.

/// Bounding rectangle of a surface in viewport coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    #[cfg(test)]
    fn contains(&self, sample: PointerSample) -> bool {
        sample.x >= self.left
            && sample.x <= self.left + self.width
            && sample.y >= self.top
            && sample.y <= self.top + self.height
    }
}

/// Pointer position in viewport coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Derived pose inputs for one pointer sample
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltResponse {
    /// Pointer position relative to the rectangle's top-left corner
    pub local_x: f64,
    pub local_y: f64,
    /// Pointer offset from the rectangle's center
    pub offset_x: f64,
    pub offset_y: f64,
    /// Rotation around the horizontal axis, degrees
    pub rotate_x: f64,
    /// Rotation around the vertical axis, degrees
    pub rotate_y: f64,
}

/// Compute the tilt for `sample` over `rect`.
///
/// A smaller `divisor` gives a stronger tilt. A non-positive or non-finite
/// divisor, or an empty rectangle, yields no rotation.
pub fn tilt_response(sample: PointerSample, rect: Rect, divisor: f64) -> TiltResponse {
    if rect.is_empty() || !sample.x.is_finite() || !sample.y.is_finite() {
        return TiltResponse::default();
    }

    let local_x = (sample.x - rect.left).clamp(0.0, rect.width);
    let local_y = (sample.y - rect.top).clamp(0.0, rect.height);
    let center_x = rect.width / 2.0;
    let center_y = rect.height / 2.0;
    let offset_x = local_x - center_x;
    let offset_y = local_y - center_y;

    let (rotate_x, rotate_y) = if divisor.is_finite() && divisor > 0.0 {
        ((local_y - center_y) / divisor, (center_x - local_x) / divisor)
    } else {
        (0.0, 0.0)
    };

    TiltResponse {
        local_x,
        local_y,
        offset_x,
        offset_y,
        rotate_x,
        rotate_y,
    }
}

/// Largest rotation (degrees) `tilt_response` can produce for `rect` per axis
pub fn max_tilt(rect: Rect, divisor: f64) -> (f64, f64) {
    if rect.is_empty() || !(divisor.is_finite() && divisor > 0.0) {
        return (0.0, 0.0);
    }
    (
        rect.height / (2.0 * divisor),
        rect.width / (2.0 * divisor),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: Rect = Rect::new(0.0, 0.0, 200.0, 200.0);

    #[test]
    fn test_reference_scenario() {
        let r = tilt_response(PointerSample::new(150.0, 50.0), SQUARE, 10.0);
        assert_eq!(r.local_x, 150.0);
        assert_eq!(r.local_y, 50.0);
        assert_eq!(r.rotate_x, -5.0);
        assert_eq!(r.rotate_y, -5.0);
        assert_eq!(r.offset_x, 50.0);
        assert_eq!(r.offset_y, -50.0);
    }

    #[test]
    fn test_center_is_flat() {
        let r = tilt_response(PointerSample::new(100.0, 100.0), SQUARE, 10.0);
        assert_eq!(r.rotate_x, 0.0);
        assert_eq!(r.rotate_y, 0.0);
    }

    #[test]
    fn test_offset_rect_uses_local_coordinates() {
        let rect = Rect::new(300.0, 1200.0, 400.0, 300.0);
        let r = tilt_response(PointerSample::new(300.0, 1200.0), rect, 20.0);
        assert_eq!(r.local_x, 0.0);
        assert_eq!(r.local_y, 0.0);
        assert_eq!(r.rotate_x, -7.5);
        assert_eq!(r.rotate_y, 10.0);
    }

    #[test]
    fn test_tilt_is_monotonic_in_offset() {
        let mut previous = 0.0;
        for step in 0..=10 {
            let x = 100.0 + step as f64 * 10.0;
            let r = tilt_response(PointerSample::new(x, 100.0), SQUARE, 10.0);
            assert!(r.rotate_y.abs() >= previous);
            previous = r.rotate_y.abs();
        }
        assert_eq!(previous, 10.0);
    }

    #[test]
    fn test_tilt_is_bounded_inside_and_outside() {
        for divisor in [10.0, 15.0, 20.0] {
            let (max_x, max_y) = max_tilt(SQUARE, divisor);
            for (x, y) in [
                (0.0, 0.0),
                (200.0, 200.0),
                (-5000.0, 90.0),
                (90.0, 12000.0),
                (1e9, -1e9),
            ] {
                let r = tilt_response(PointerSample::new(x, y), SQUARE, divisor);
                assert!(r.rotate_x.abs() <= max_x + 1e-12, "{x},{y} / {divisor}");
                assert!(r.rotate_y.abs() <= max_y + 1e-12, "{x},{y} / {divisor}");
            }
        }
    }

    #[test]
    fn test_smaller_divisor_tilts_more() {
        let p = PointerSample::new(180.0, 30.0);
        let strong = tilt_response(p, SQUARE, 10.0);
        let weak = tilt_response(p, SQUARE, 20.0);
        assert!(strong.rotate_y.abs() > weak.rotate_y.abs());
        assert!(strong.rotate_x.abs() > weak.rotate_x.abs());
    }

    #[test]
    fn test_degenerate_inputs_produce_no_tilt() {
        let empty = Rect::new(10.0, 10.0, 0.0, 50.0);
        assert_eq!(
            tilt_response(PointerSample::new(10.0, 10.0), empty, 10.0),
            TiltResponse::default()
        );
        let r = tilt_response(PointerSample::new(0.0, 0.0), SQUARE, 0.0);
        assert_eq!((r.rotate_x, r.rotate_y), (0.0, 0.0));
        let r = tilt_response(PointerSample::new(f64::NAN, 0.0), SQUARE, 10.0);
        assert_eq!(r, TiltResponse::default());
    }

    #[test]
    fn test_contains() {
        assert!(SQUARE.contains(PointerSample::new(0.0, 200.0)));
        assert!(!SQUARE.contains(PointerSample::new(-0.1, 10.0)));
    }
}
