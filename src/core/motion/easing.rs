//! Easing curves
//!
//! Every curve maps normalized time `t ∈ [0, 1]` to progress, with `0 → 0` and
//! `1 → 1` exactly. The names follow the ones animation authors already use
//! (`power2.out`, `elastic.out(1, 0.3)`, `back.out(1.7)`).

use std::f64::consts::{FRAC_PI_2, TAU};

/// Time-to-progress mapping for a transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    /// Quadratic deceleration (`power1.out`)
    Power1Out,
    /// Cubic deceleration (`power2.out`)
    Power2Out,
    /// Quartic deceleration (`power3.out`)
    Power3Out,
    /// Cubic S-curve (`power2.inOut`)
    Power2InOut,
    SineOut,
    /// Overshoots past the target by `overshoot` before settling (`back.out(s)`)
    BackOut { overshoot: f64 },
    /// Damped oscillation around the target (`elastic.out(amplitude, period)`)
    ElasticOut { amplitude: f64, period: f64 },
}

impl Ease {
    /// `back.out(1.7)`
    pub const BACK_OUT: Ease = Ease::BackOut { overshoot: 1.7 };

    /// `elastic.out(1, 0.3)`
    pub const ELASTIC_OUT: Ease = Ease::ElasticOut {
        amplitude: 1.0,
        period: 0.3,
    };

    /// Apply the curve to normalized time. Input is clamped to `[0, 1]`.
    pub fn apply(&self, t: f64) -> f64 {
        let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match *self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Ease::SineOut => (t * FRAC_PI_2).sin(),
            Ease::BackOut { overshoot } => {
                let p = t - 1.0;
                p * p * ((overshoot + 1.0) * p + overshoot) + 1.0
            }
            Ease::ElasticOut { amplitude, period } => elastic_out(t, amplitude, period),
        }
    }

    /// Parse an ease name such as `"power2.out"` or `"elastic.out(1, 0.3)"`.
    ///
    /// Returns `None` for names this module does not know.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        let (base, args) = match name.split_once('(') {
            Some((base, rest)) => (base.trim(), Some(rest.trim_end_matches(')'))),
            None => (name.as_str(), None),
        };
        let params: Vec<f64> = args
            .map(|a| {
                a.split(',')
                    .filter_map(|p| p.trim().parse::<f64>().ok())
                    .collect()
            })
            .unwrap_or_default();

        let ease = match base {
            "none" | "linear" => Ease::Linear,
            "power1.out" | "quad.out" => Ease::Power1Out,
            "power2.out" | "cubic.out" => Ease::Power2Out,
            "power3.out" | "quart.out" => Ease::Power3Out,
            "power2.inout" | "cubic.inout" => Ease::Power2InOut,
            "sine.out" => Ease::SineOut,
            "back.out" => Ease::BackOut {
                overshoot: params.first().copied().unwrap_or(1.7),
            },
            "elastic.out" => Ease::ElasticOut {
                amplitude: params.first().copied().unwrap_or(1.0),
                period: params.get(1).copied().unwrap_or(0.3),
            },
            _ => return None,
        };
        Some(ease)
    }

    /// Whether the curve can leave the `[0, 1]` range before settling
    pub fn overshoots(&self) -> bool {
        matches!(self, Ease::BackOut { .. } | Ease::ElasticOut { .. })
    }
}

impl Default for Ease {
    fn default() -> Self {
        Ease::Power1Out
    }
}

fn elastic_out(t: f64, amplitude: f64, period: f64) -> f64 {
    let a = amplitude.max(1.0);
    let period = if period > 0.0 { period } else { 0.3 };
    let p = period / amplitude.min(1.0).max(f64::EPSILON);
    let phase = p / TAU * (1.0 / a).asin();
    a * 2f64.powf(-10.0 * t) * ((t - phase) * (TAU / p)).sin() + 1.0
}

/// Duration and curve of one transition, in seconds
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub duration: f64,
    pub ease: Ease,
}

impl Timing {
    pub const fn new(duration: f64, ease: Ease) -> Self {
        Self { duration, ease }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 8] = [
        Ease::Linear,
        Ease::Power1Out,
        Ease::Power2Out,
        Ease::Power3Out,
        Ease::Power2InOut,
        Ease::SineOut,
        Ease::BACK_OUT,
        Ease::ELASTIC_OUT,
    ];

    #[test]
    fn test_endpoints_are_exact() {
        for ease in ALL {
            assert_eq!(ease.apply(0.0), 0.0, "{ease:?} at 0");
            assert_eq!(ease.apply(1.0), 1.0, "{ease:?} at 1");
        }
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(Ease::Power2Out.apply(-3.0), 0.0);
        assert_eq!(Ease::Power2Out.apply(7.0), 1.0);
        assert_eq!(Ease::Power2Out.apply(f64::NAN), 1.0);
    }

    #[test]
    fn test_out_curves_decelerate() {
        // An ease-out is ahead of linear at the midpoint
        for ease in [Ease::Power1Out, Ease::Power2Out, Ease::Power3Out, Ease::SineOut] {
            assert!(ease.apply(0.5) > 0.5, "{ease:?}");
        }
        assert!(Ease::Power3Out.apply(0.3) > Ease::Power2Out.apply(0.3));
    }

    #[test]
    fn test_back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Ease::BACK_OUT.apply(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
        assert!(peak < 1.2);
    }

    #[test]
    fn test_elastic_out_overshoots_and_settles() {
        let samples: Vec<f64> = (1..100)
            .map(|i| Ease::ELASTIC_OUT.apply(i as f64 / 100.0))
            .collect();
        assert!(samples.iter().any(|v| *v > 1.0));
        assert!((samples[98] - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_parse_known_names() {
        assert_eq!(Ease::parse("power2.out"), Some(Ease::Power2Out));
        assert_eq!(Ease::parse("Power3.Out"), Some(Ease::Power3Out));
        assert_eq!(Ease::parse("none"), Some(Ease::Linear));
        assert_eq!(Ease::parse("back.out(1.7)"), Some(Ease::BACK_OUT));
        assert_eq!(Ease::parse("elastic.out(1, 0.3)"), Some(Ease::ELASTIC_OUT));
        assert_eq!(
            Ease::parse("elastic.out"),
            Some(Ease::ElasticOut {
                amplitude: 1.0,
                period: 0.3
            })
        );
    }

    #[test]
    fn test_parse_unknown_name() {
        assert_eq!(Ease::parse("bounce.sideways"), None);
        assert_eq!(Ease::parse(""), None);
    }

    #[test]
    fn test_overshoots() {
        assert!(Ease::BACK_OUT.overshoots());
        assert!(Ease::ELASTIC_OUT.overshoots());
        assert!(!Ease::Power2Out.overshoots());
    }
}
