//! Decorative particle field in the hero section. Each dot loops an
//! infinite drift animation with a randomized direction, distance, and
//! duration. Page-lifetime; nothing is ever cleaned up.

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config;

const DISTANCE_MIN_PX: f64 = 50.0;
const DISTANCE_SPAN_PX: f64 = 100.0;
const DURATION_MIN_MS: f64 = 2_000.0;
const DURATION_SPAN_MS: f64 = 3_000.0;

/// How many dots the hero gets for a given viewport width.
pub fn particle_count(viewport_width: f64) -> usize {
    if viewport_width < config::PARTICLE_BREAKPOINT_PX {
        20
    } else {
        50
    }
}

/// Randomized drift parameters for one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleMotion {
    pub direction_rad: f64,
    pub distance_px: f64,
    pub duration_ms: f64,
}

impl ParticleMotion {
    /// Draws a motion from a uniform [0, 1) source.
    pub fn sample(mut random: impl FnMut() -> f64) -> Self {
        Self {
            direction_rad: random() * TAU,
            distance_px: random() * DISTANCE_SPAN_PX + DISTANCE_MIN_PX,
            duration_ms: random() * DURATION_SPAN_MS + DURATION_MIN_MS,
        }
    }

    /// End-of-animation offset from the spawn point.
    pub fn drift(&self) -> (f64, f64) {
        (
            self.direction_rad.cos() * self.distance_px,
            self.direction_rad.sin() * self.distance_px,
        )
    }
}

/// Fills `.hero` with drifting dots; count depends on the viewport width.
/// No-op when the hero is absent.
pub fn spawn_particles() {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let Some(hero) = document.query_selector(".hero").ok().flatten() else { return };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);

    for _ in 0..particle_count(width) {
        let Ok(el) = document.create_element("div") else { continue };
        el.set_class_name("hero-particle");
        let motion = ParticleMotion::sample(js_sys::Math::random);
        let (dx, dy) = motion.drift();
        if let Some(style) = el.dyn_ref::<HtmlElement>().map(|h| h.style()) {
            let _ = style.set_property("left", &format!("{:.2}%", js_sys::Math::random() * 100.0));
            let _ = style.set_property("top", &format!("{:.2}%", js_sys::Math::random() * 100.0));
            let _ = style.set_property("--drift-x", &format!("{:.1}px", dx));
            let _ = style.set_property("--drift-y", &format!("{:.1}px", dy));
            let _ = style.set_property("animation-duration", &format!("{}ms", motion.duration_ms as u32));
        }
        let _ = hero.append_child(&el);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_switches_at_the_768px_breakpoint() {
        assert_eq!(particle_count(767.0), 20);
        assert_eq!(particle_count(768.0), 50);
        assert_eq!(particle_count(320.0), 20);
        assert_eq!(particle_count(1_920.0), 50);
    }

    #[test]
    fn sampled_motion_stays_in_range() {
        // Deterministic low/high draws cover the bounds.
        let low = ParticleMotion::sample(|| 0.0);
        assert_eq!(low.direction_rad, 0.0);
        assert_eq!(low.distance_px, 50.0);
        assert_eq!(low.duration_ms, 2_000.0);

        let high = ParticleMotion::sample(|| 0.999_999);
        assert!(high.direction_rad < TAU);
        assert!(high.distance_px < 150.0);
        assert!(high.duration_ms < 5_000.0);
    }

    #[test]
    fn drift_distance_matches_the_sampled_radius() {
        let motion = ParticleMotion { direction_rad: 1.2, distance_px: 80.0, duration_ms: 3_000.0 };
        let (dx, dy) = motion.drift();
        let radius = (dx * dx + dy * dy).sqrt();
        assert!((radius - 80.0).abs() < 1e-9);
    }
}
