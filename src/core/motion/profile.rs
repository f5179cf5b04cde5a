//! Tuning presets for each class of interactive card

use super::easing::{Ease, Timing};

/// Kinds of card that respond to the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceClass {
    /// Primary feature tiles, strongest tilt and an elastic return
    Feature,
    /// "Why self-host" benefit tiles
    Benefit,
    /// Template gallery tiles with a pointer-following glow
    Template,
    /// Pricing plans, gentlest tilt, lift instead of scale
    Pricing,
}

impl SurfaceClass {
    pub fn profile(self) -> TiltProfile {
        match self {
            SurfaceClass::Feature => TiltProfile {
                divisor: 10.0,
                hover_scale: 1.05,
                hover_lift: 0.0,
                enter: Timing::new(0.5, Ease::Power2Out),
                leave: Timing::new(0.8, Ease::ELASTIC_OUT),
                layer: Some(LayerProfile::Parallax {
                    divisor: 8.0,
                    rest_y: 0.0,
                }),
            },
            SurfaceClass::Benefit => TiltProfile {
                divisor: 15.0,
                hover_scale: 1.03,
                hover_lift: 0.0,
                enter: Timing::new(0.4, Ease::Power2Out),
                leave: Timing::new(0.6, Ease::Power3Out),
                layer: None,
            },
            SurfaceClass::Template => TiltProfile {
                divisor: 15.0,
                hover_scale: 1.02,
                hover_lift: 0.0,
                enter: Timing::new(0.4, Ease::Power2Out),
                leave: Timing::new(0.6, Ease::Power3Out),
                layer: Some(LayerProfile::Glow {
                    radius: 100.0,
                    follow: Timing::new(0.1, Ease::Power1Out),
                    fade: Timing::new(0.3, Ease::Power1Out),
                }),
            },
            SurfaceClass::Pricing => TiltProfile {
                divisor: 20.0,
                hover_scale: 1.0,
                hover_lift: -10.0,
                enter: Timing::new(0.4, Ease::Power2Out),
                leave: Timing::new(0.6, Ease::BACK_OUT),
                layer: Some(LayerProfile::Parallax {
                    divisor: 10.0,
                    rest_y: -16.0,
                }),
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SurfaceClass::Feature => "feature",
            SurfaceClass::Benefit => "benefit",
            SurfaceClass::Template => "template",
            SurfaceClass::Pricing => "pricing",
        }
    }
}

/// How one class of card moves
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltProfile {
    /// Pointer offset is divided by this to get degrees
    pub divisor: f64,
    /// Scale while the pointer is over the card
    pub hover_scale: f64,
    /// Vertical offset while the pointer is over the card (negative is up)
    pub hover_lift: f64,
    /// Transition toward each new pointer target
    pub enter: Timing,
    /// Transition back to rest when the pointer leaves
    pub leave: Timing,
    /// Decorative element inside the card, if any
    pub layer: Option<LayerProfile>,
}

/// Decorative sub-element driven from the same pointer offsets
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayerProfile {
    /// Translates by `offset / divisor`, resting at `(0, rest_y)`.
    /// Uses the card's enter and leave timings.
    Parallax { divisor: f64, rest_y: f64 },
    /// A soft light centered under the pointer that fades out on leave
    Glow {
        radius: f64,
        follow: Timing,
        fade: Timing,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divisor_presets() {
        assert_eq!(SurfaceClass::Feature.profile().divisor, 10.0);
        assert_eq!(SurfaceClass::Benefit.profile().divisor, 15.0);
        assert_eq!(SurfaceClass::Template.profile().divisor, 15.0);
        assert_eq!(SurfaceClass::Pricing.profile().divisor, 20.0);
    }

    #[test]
    fn test_leave_is_slower_than_enter() {
        for class in [
            SurfaceClass::Feature,
            SurfaceClass::Benefit,
            SurfaceClass::Template,
            SurfaceClass::Pricing,
        ] {
            let p = class.profile();
            assert!(p.leave.duration > p.enter.duration, "{}", class.as_str());
            assert!(!p.enter.ease.overshoots());
        }
    }

    #[test]
    fn test_bouncy_returns() {
        assert!(SurfaceClass::Feature.profile().leave.ease.overshoots());
        assert!(SurfaceClass::Pricing.profile().leave.ease.overshoots());
    }

    #[test]
    fn test_pricing_lifts_instead_of_scaling() {
        let p = SurfaceClass::Pricing.profile();
        assert_eq!(p.hover_scale, 1.0);
        assert_eq!(p.hover_lift, -10.0);
    }
}
