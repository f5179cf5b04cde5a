//! Pointer interaction and animation engine
//!
//! Everything here is plain data and arithmetic so it runs (and is tested)
//! the same on the server and in the browser. The browser bindings live in
//! `ui::motion`.

pub mod cursor;
pub mod easing;
pub mod profile;
pub mod scheduler;
pub mod surface;
pub mod tilt;
pub mod timeline;
pub mod transform;
pub mod tween;

pub use cursor::{CursorState, FollowerPose, INTERACTIVE_CLASS, INTERACTIVE_SELECTOR};
pub use easing::{Ease, Timing};
pub use profile::{LayerProfile, SurfaceClass, TiltProfile};
pub use scheduler::{Animate, FrameClock, Scheduler, SlotId};
pub use surface::{CARD_PERSPECTIVE, Surface, SurfaceState};
pub use tilt::{PointerSample, Rect, TiltResponse, max_tilt, tilt_response};
pub use timeline::{
    BarTiming, CHART_LAYER_LOOPS, CHART_LOOP_WIDTH, CIRCUIT_PATHS, DATA_PACKETS, HERO_CTA, HERO_INTRO,
    HERO_SUBTITLE, HERO_TITLE, HERO_VISUAL, IntroStep, IntroTimeline, LineTiming, PacketTiming,
    Position, REVEAL_DURATION, REVEAL_OFFSET, REVEAL_ROOT_MARGIN, bar_timing, line_timing,
    packet_timing, timeline_offsets,
};
pub use transform::{Lerp, Point, Transform};
pub use tween::{Animated, Tween};
