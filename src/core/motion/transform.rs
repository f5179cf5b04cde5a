//! Animatable values
//!
//! [`Transform`] is the pose of a surface (rotation, translation, scale and
//! opacity). [`Point`] and plain `f64` are used by the cursor followers.

use std::fmt::Write;

/// Values a tween can interpolate between
pub trait Lerp: Copy {
    /// Linear interpolation; `t` may leave `[0, 1]` for overshooting curves.
    fn lerp(&self, to: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

/// A 2D position in CSS pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Lerp for Point {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        Point {
            x: self.x.lerp(&to.x, t),
            y: self.y.lerp(&to.y, t),
        }
    }
}

/// Pose applied to an element. Rotations are in degrees, translations in px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl Transform {
    /// Neutral pose: no rotation, no offset, scale 1, fully opaque
    pub const IDENTITY: Transform = Transform {
        rotate_x: 0.0,
        rotate_y: 0.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };

    pub fn with_rotation(mut self, rotate_x: f64, rotate_y: f64) -> Self {
        self.rotate_x = rotate_x;
        self.rotate_y = rotate_y;
        self
    }

    pub fn with_translation(mut self, x: f64, y: f64) -> Self {
        self.translate_x = x;
        self.translate_y = y;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Component-wise comparison within `epsilon`
    pub fn approx_eq(&self, other: &Transform, epsilon: f64) -> bool {
        (self.rotate_x - other.rotate_x).abs() <= epsilon
            && (self.rotate_y - other.rotate_y).abs() <= epsilon
            && (self.translate_x - other.translate_x).abs() <= epsilon
            && (self.translate_y - other.translate_y).abs() <= epsilon
            && (self.scale - other.scale).abs() <= epsilon
            && (self.opacity - other.opacity).abs() <= epsilon
    }

    /// CSS `transform` value. The surrounding element supplies `perspective`.
    pub fn to_css(&self) -> String {
        let mut css = String::with_capacity(96);
        let _ = write!(
            css,
            "translate3d({:.3}px, {:.3}px, 0px) rotateX({:.3}deg) rotateY({:.3}deg) scale({:.4})",
            self.translate_x, self.translate_y, self.rotate_x, self.rotate_y, self.scale
        );
        css
    }

    /// CSS `transform` value with its own `perspective()` prefix, for elements
    /// that tilt without a 3D parent
    pub fn to_css_with_perspective(&self, perspective: f64) -> String {
        format!("perspective({perspective}px) {}", self.to_css())
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Lerp for Transform {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        Transform {
            rotate_x: self.rotate_x.lerp(&to.rotate_x, t),
            rotate_y: self.rotate_y.lerp(&to.rotate_y, t),
            translate_x: self.translate_x.lerp(&to.translate_x, t),
            translate_y: self.translate_y.lerp(&to.translate_y, t),
            scale: self.scale.lerp(&to.scale, t),
            // Opacity cannot overshoot even when the curve does
            opacity: self.opacity.lerp(&to.opacity, t).clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_neutral() {
        let t = Transform::IDENTITY;
        assert_eq!(t.rotate_x, 0.0);
        assert_eq!(t.rotate_y, 0.0);
        assert_eq!(t.translate_x, 0.0);
        assert_eq!(t.translate_y, 0.0);
        assert_eq!(t.scale, 1.0);
        assert_eq!(Transform::default(), t);
    }

    #[test]
    fn test_lerp_endpoints() {
        let to = Transform::IDENTITY
            .with_rotation(-5.0, 3.0)
            .with_scale(1.05)
            .with_translation(4.0, -10.0);
        assert_eq!(Transform::IDENTITY.lerp(&to, 0.0), Transform::IDENTITY);
        assert_eq!(Transform::IDENTITY.lerp(&to, 1.0), to);
    }

    #[test]
    fn test_lerp_midpoint() {
        let to = Transform::IDENTITY.with_rotation(10.0, -10.0).with_scale(2.0);
        let mid = Transform::IDENTITY.lerp(&to, 0.5);
        assert!(mid.approx_eq(
            &Transform::IDENTITY.with_rotation(5.0, -5.0).with_scale(1.5),
            1e-9
        ));
    }

    #[test]
    fn test_opacity_does_not_overshoot() {
        let from = Transform::IDENTITY.with_opacity(0.0);
        let to = Transform::IDENTITY.with_opacity(1.0);
        assert_eq!(from.lerp(&to, 1.3).opacity, 1.0);
        assert_eq!(to.lerp(&from, 1.3).opacity, 0.0);
    }

    #[test]
    fn test_point_lerp() {
        let p = Point::new(0.0, 10.0).lerp(&Point::new(10.0, 20.0), 0.25);
        assert_eq!(p, Point::new(2.5, 12.5));
    }

    #[test]
    fn test_to_css() {
        let css = Transform::IDENTITY
            .with_rotation(-5.0, 2.5)
            .with_translation(0.0, -10.0)
            .with_scale(1.05)
            .to_css();
        assert_eq!(
            css,
            "translate3d(0.000px, -10.000px, 0px) rotateX(-5.000deg) rotateY(2.500deg) scale(1.0500)"
        );
    }

    #[test]
    fn test_to_css_with_perspective() {
        let css = Transform::IDENTITY.to_css_with_perspective(1000.0);
        assert!(css.starts_with("perspective(1000px) translate3d(0.000px, 0.000px, 0px)"));
        assert!(css.ends_with("scale(1.0000)"));
    }
}
