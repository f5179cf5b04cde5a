//! Circuit lines behind the page
//!
//! Paths draw themselves in with a stroke-dash animation and data packets
//! ride them with SMIL `animateMotion`, so none of this needs the frame
//! driver. Timings come from index-seeded draws and render identically on
//! the server and in the browser.

use std::fmt::Write;

use leptos::prelude::*;

use crate::core::motion::{CIRCUIT_PATHS, DATA_PACKETS, line_timing, packet_timing};

const PATHS: [&str; CIRCUIT_PATHS] = [
    "M-100 200 L400 200 L600 400 L1600 400",
    "M1600 100 L1000 100 L800 300 L-200 300",
    "M200 -100 L200 400 L400 600 L400 1000",
    "M1200 1000 L1200 600 L1000 400 L1000 -100",
    "M-100 700 L500 700 L700 500 L1600 500",
    "M1600 800 L1100 800 L900 600 L-100 600",
];

/// Inner markup of the background SVG
pub fn circuit_markup() -> String {
    let mut svg = String::with_capacity(4096);
    svg.push_str(
        r##"<defs><linearGradient id="lineGrad" x1="0%" y1="0%" x2="100%" y2="0%"><stop offset="0%" stop-color="#EA4B71" stop-opacity="0"/><stop offset="50%" stop-color="#EA4B71" stop-opacity="1"/><stop offset="100%" stop-color="#EA4B71" stop-opacity="0"/></linearGradient></defs>"##,
    );

    for (index, d) in PATHS.iter().enumerate() {
        let timing = line_timing(index);
        let _ = write!(
            svg,
            r#"<path id="path-{index}" d="{d}" class="cyber-line" stroke="url(#lineGrad)" stroke-width="1.5" style="--line-opacity: {:.3}; animation-duration: {:.2}s;"/>"#,
            timing.opacity, timing.draw
        );
    }

    for index in 0..DATA_PACKETS {
        let timing = packet_timing(index);
        let _ = write!(
            svg,
            concat!(
                r##"<circle r="2.5" fill="#EA4B71" class="data-packet" opacity="0">"##,
                r#"<set attributeName="opacity" to="1" begin="{delay:.2}s"/>"#,
                r#"<animateMotion dur="{duration:.2}s" begin="{delay:.2}s" repeatCount="indefinite" rotate="auto">"#,
                r##"<mpath href="#path-{path}"/>"##,
                r#"</animateMotion></circle>"#,
            ),
            delay = timing.delay,
            duration = timing.duration,
            path = timing.path,
        );
    }

    svg
}

#[component]
pub fn BackgroundLines() -> impl IntoView {
    view! {
        <div class="fixed inset-0 pointer-events-none z-0 overflow-hidden opacity-60 dark:opacity-40" aria-hidden="true">
            <svg
                width="100%"
                height="100%"
                viewBox="0 0 1440 900"
                preserveAspectRatio="xMidYMid slice"
                fill="none"
                xmlns="http://www.w3.org/2000/svg"
                inner_html=circuit_markup()
            ></svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_path_and_packet_is_rendered() {
        let markup = circuit_markup();
        assert_eq!(markup.matches(r#"class="cyber-line""#).count(), CIRCUIT_PATHS);
        assert_eq!(markup.matches("<animateMotion").count(), DATA_PACKETS);
        assert_eq!(
            markup
                .matches(r##"<circle r="2.5" fill="#EA4B71" class="data-packet" opacity="0">"##)
                .count(),
            DATA_PACKETS
        );
        for index in 0..CIRCUIT_PATHS {
            assert!(markup.contains(&format!(r#"id="path-{index}""#)));
        }
    }

    #[test]
    fn test_packets_cycle_through_paths() {
        let markup = circuit_markup();
        // Packets 0, 6 and 12 share the first path
        assert_eq!(markup.matches(r##"<mpath href="#path-0"/>"##).count(), 3);
        assert_eq!(markup.matches(r##"<mpath href="#path-5"/>"##).count(), 2);
    }

    #[test]
    fn test_markup_is_stable() {
        assert_eq!(circuit_markup(), circuit_markup());
    }
}
