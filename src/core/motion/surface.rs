//! Tilt surface state machine
//!
//! A [`Surface`] is one interactive card. Pointer samples retarget its pose,
//! a pointer leave sends it home, and [`Surface::tick`] advances whatever
//! transition is in flight. Disposal is terminal.

use super::profile::{LayerProfile, SurfaceClass, TiltProfile};
use super::tilt::{PointerSample, Rect, tilt_response};
use super::transform::Transform;
use super::tween::Animated;

/// Perspective distance of a tilting card, px
pub const CARD_PERSPECTIVE: f64 = 1000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceState {
    /// No pointer over the card; any remaining motion is the return to rest
    Resting,
    /// Following the pointer
    Tracking,
}

#[derive(Clone, Debug)]
pub struct Surface {
    class: SurfaceClass,
    profile: TiltProfile,
    state: SurfaceState,
    card: Animated<Transform>,
    layer: Option<Animated<Transform>>,
    disposed: bool,
}

impl Surface {
    pub fn new(class: SurfaceClass) -> Self {
        let profile = class.profile();
        let layer = profile.layer.map(|l| Animated::new(layer_rest(&l)));
        Self {
            class,
            profile,
            state: SurfaceState::Resting,
            card: Animated::new(Transform::IDENTITY),
            layer,
            disposed: false,
        }
    }

    /// Retarget toward the pose for `sample` over `rect`.
    ///
    /// Returns `false` when the event was ignored (disposed surface or a
    /// rectangle with no area).
    pub fn on_pointer_move(&mut self, sample: PointerSample, rect: Rect) -> bool {
        if self.disposed || rect.is_empty() {
            return false;
        }

        let p = &self.profile;
        let r = tilt_response(sample, rect, p.divisor);
        let target = Transform::IDENTITY
            .with_rotation(r.rotate_x, r.rotate_y)
            .with_translation(0.0, p.hover_lift)
            .with_scale(p.hover_scale);
        self.card.animate_to(target, p.enter);

        if let (Some(layer), Some(profile)) = (self.layer.as_mut(), p.layer) {
            match profile {
                LayerProfile::Parallax { divisor, rest_y } => {
                    let to = Transform::IDENTITY
                        .with_translation(r.offset_x / divisor, r.offset_y / divisor + rest_y);
                    layer.animate_to(to, p.enter);
                }
                LayerProfile::Glow { radius, follow, .. } => {
                    let to = Transform::IDENTITY
                        .with_translation(r.local_x - radius, r.local_y - radius)
                        .with_opacity(1.0);
                    layer.animate_to(to, follow);
                }
            }
        }

        self.state = SurfaceState::Tracking;
        true
    }

    /// Send the card (and its layer) back to rest. Calling it again while
    /// already returning changes nothing.
    pub fn on_pointer_leave(&mut self) -> bool {
        if self.disposed {
            return false;
        }

        let p = &self.profile;
        self.card.animate_to(Transform::IDENTITY, p.leave);

        if let (Some(layer), Some(profile)) = (self.layer.as_mut(), p.layer) {
            match profile {
                LayerProfile::Parallax { .. } => layer.animate_to(layer_rest(&profile), p.leave),
                LayerProfile::Glow { fade, .. } => {
                    // Fade out where it is
                    let to = layer.target().with_opacity(0.0);
                    layer.animate_to(to, fade);
                }
            }
        }

        self.state = SurfaceState::Resting;
        true
    }

    /// Advance by `dt` seconds. Returns `true` while anything is still moving.
    pub fn tick(&mut self, dt: f64) -> bool {
        if self.disposed {
            return false;
        }
        let card = self.card.tick(dt);
        let layer = self.layer.as_mut().is_some_and(|l| l.tick(dt));
        card || layer
    }

    pub fn is_animating(&self) -> bool {
        !self.disposed
            && (self.card.is_animating() || self.layer.as_ref().is_some_and(|l| l.is_animating()))
    }

    /// Stop reacting to input and drop any in-flight motion
    pub fn dispose(&mut self) {
        self.disposed = true;
        let card = self.card.value();
        self.card.set(card);
        if let Some(layer) = self.layer.as_mut() {
            let value = layer.value();
            layer.set(value);
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn state(&self) -> SurfaceState {
        self.state
    }

    pub fn class(&self) -> SurfaceClass {
        self.class
    }

    pub fn card_transform(&self) -> Transform {
        self.card.value()
    }

    /// Inline `transform` of the card element
    pub fn card_css(&self) -> String {
        self.card.value().to_css_with_perspective(CARD_PERSPECTIVE)
    }

    pub fn layer_transform(&self) -> Option<Transform> {
        self.layer.as_ref().map(|l| l.value())
    }
}

fn layer_rest(profile: &LayerProfile) -> Transform {
    match *profile {
        LayerProfile::Parallax { rest_y, .. } => Transform::IDENTITY.with_translation(0.0, rest_y),
        LayerProfile::Glow { .. } => Transform::IDENTITY.with_opacity(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;
    const SQUARE: Rect = Rect::new(0.0, 0.0, 200.0, 200.0);

    fn settle(surface: &mut Surface) -> usize {
        let mut frames = 0;
        while surface.tick(FRAME) {
            frames += 1;
            assert!(frames < 10_000, "surface never settled");
        }
        frames
    }

    #[test]
    fn test_feature_card_reaches_hover_pose() {
        let mut s = Surface::new(SurfaceClass::Feature);
        assert!(s.on_pointer_move(PointerSample::new(150.0, 50.0), SQUARE));
        assert_eq!(s.state(), SurfaceState::Tracking);
        settle(&mut s);

        let card = s.card_transform();
        assert_eq!(card.rotate_x, -5.0);
        assert_eq!(card.rotate_y, -5.0);
        assert_eq!(card.scale, 1.05);

        // Icon drifts toward the pointer by offset / 8
        let icon = s.layer_transform().unwrap();
        assert_eq!(icon.translate_x, 50.0 / 8.0);
        assert_eq!(icon.translate_y, -50.0 / 8.0);
    }

    #[test]
    fn test_leave_returns_exactly_to_rest() {
        for class in [
            SurfaceClass::Feature,
            SurfaceClass::Benefit,
            SurfaceClass::Template,
            SurfaceClass::Pricing,
        ] {
            let mut s = Surface::new(class);
            s.on_pointer_move(PointerSample::new(190.0, 10.0), SQUARE);
            s.tick(0.2);
            s.on_pointer_leave();
            assert_eq!(s.state(), SurfaceState::Resting);
            settle(&mut s);
            assert_eq!(s.card_transform(), Transform::IDENTITY, "{}", class.as_str());
        }
    }

    #[test]
    fn test_pricing_badge_rests_above_card() {
        let mut s = Surface::new(SurfaceClass::Pricing);
        assert_eq!(s.layer_transform().unwrap().translate_y, -16.0);

        s.on_pointer_move(PointerSample::new(100.0, 200.0), SQUARE);
        settle(&mut s);
        assert_eq!(s.card_transform().translate_y, -10.0);
        assert_eq!(s.card_transform().scale, 1.0);
        assert_eq!(s.layer_transform().unwrap().translate_y, 100.0 / 10.0 - 16.0);

        s.on_pointer_leave();
        settle(&mut s);
        assert_eq!(s.layer_transform().unwrap().translate_y, -16.0);
    }

    #[test]
    fn test_template_glow_follows_then_fades() {
        let mut s = Surface::new(SurfaceClass::Template);
        assert_eq!(s.layer_transform().unwrap().opacity, 0.0);

        s.on_pointer_move(PointerSample::new(120.0, 80.0), SQUARE);
        settle(&mut s);
        let glow = s.layer_transform().unwrap();
        assert_eq!(glow.opacity, 1.0);
        assert_eq!(glow.translate_x, 20.0);
        assert_eq!(glow.translate_y, -20.0);

        s.on_pointer_leave();
        settle(&mut s);
        let glow = s.layer_transform().unwrap();
        assert_eq!(glow.opacity, 0.0);
        assert_eq!(glow.translate_x, 20.0);
    }

    #[test]
    fn test_latest_sample_wins() {
        let first = PointerSample::new(0.0, 0.0);
        let second = PointerSample::new(200.0, 200.0);
        let stale = tilt_response(first, SQUARE, 15.0);
        let expected = tilt_response(second, SQUARE, 15.0);

        let mut s = Surface::new(SurfaceClass::Benefit);
        s.on_pointer_move(first, SQUARE);
        s.tick(0.1);
        s.on_pointer_move(second, SQUARE);

        let distance = |t: Transform, rx: f64, ry: f64| (t.rotate_x - rx).hypot(t.rotate_y - ry);
        let mut last = distance(s.card_transform(), expected.rotate_x, expected.rotate_y);
        let mut frames = 0;
        while s.tick(FRAME) {
            let pose = s.card_transform();
            // Never parks on the superseded target
            assert!(distance(pose, stale.rotate_x, stale.rotate_y) > 1e-9, "frame {frames}");
            // Heads straight for the newest target
            let now = distance(pose, expected.rotate_x, expected.rotate_y);
            assert!(now <= last + 1e-9, "frame {frames}: {now} > {last}");
            last = now;
            frames += 1;
            assert!(frames < 1000);
        }
        assert!(frames > 1);
        assert_eq!(s.card_transform().rotate_x, expected.rotate_x);
        assert_eq!(s.card_transform().rotate_y, expected.rotate_y);
    }

    #[test]
    fn test_leave_twice_matches_leave_once() {
        let mut once = Surface::new(SurfaceClass::Feature);
        let mut twice = Surface::new(SurfaceClass::Feature);
        for s in [&mut once, &mut twice] {
            s.on_pointer_move(PointerSample::new(30.0, 170.0), SQUARE);
            s.tick(0.3);
            s.on_pointer_leave();
            s.tick(0.1);
        }
        twice.on_pointer_leave();

        for _ in 0..20 {
            once.tick(FRAME);
            twice.tick(FRAME);
            assert_eq!(once.card_transform(), twice.card_transform());
        }
    }

    #[test]
    fn test_leave_at_rest_is_idle() {
        let mut s = Surface::new(SurfaceClass::Benefit);
        s.on_pointer_leave();
        assert!(!s.is_animating());
        assert!(!s.tick(FRAME));
    }

    #[test]
    fn test_disposed_surface_ignores_everything() {
        let mut s = Surface::new(SurfaceClass::Feature);
        s.on_pointer_move(PointerSample::new(150.0, 50.0), SQUARE);
        s.tick(0.1);
        let frozen = s.card_transform();

        s.dispose();
        assert!(s.is_disposed());
        assert!(!s.is_animating());
        assert!(!s.on_pointer_move(PointerSample::new(0.0, 0.0), SQUARE));
        assert!(!s.on_pointer_leave());
        assert!(!s.tick(1.0));
        assert_eq!(s.card_transform(), frozen);
    }

    #[test]
    fn test_empty_rect_is_ignored() {
        let mut s = Surface::new(SurfaceClass::Feature);
        assert!(!s.on_pointer_move(PointerSample::new(5.0, 5.0), Rect::default()));
        assert_eq!(s.state(), SurfaceState::Resting);
        assert!(!s.is_animating());
    }
}
