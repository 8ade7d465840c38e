use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Offset after which the navigation bar switches to its solid treatment.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

const HERO_SHIFT_INPUT: (f64, f64) = (0.0, 1000.0);
const HERO_SHIFT_OUTPUT: (f64, f64) = (0.0, 200.0);
const HERO_FADE_INPUT: (f64, f64) = (0.0, 500.0);
const HERO_FADE_OUTPUT: (f64, f64) = (1.0, 0.0);

/// Maps `value` linearly from the `input` range onto the `output` range,
/// holding the output at its end values outside the input range.
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    if in_end == in_start {
        return out_start;
    }
    let progress = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * progress
}

/// One sample of the page's vertical scroll offset. Every scroll-driven value
/// on the page is derived from a snapshot, never from the window directly.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScrollSnapshot {
    offset_y: f64,
}

impl ScrollSnapshot {
    pub fn new(offset_y: f64) -> Self {
        let offset_y = if offset_y.is_finite() { offset_y } else { 0.0 };
        Self { offset_y }
    }

    #[cfg(test)]
    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    pub fn is_past_threshold(&self) -> bool {
        self.offset_y > NAV_SCROLL_THRESHOLD
    }

    /// Downward shift of the hero background in pixels.
    pub fn hero_translate_y(&self) -> f64 {
        interpolate(self.offset_y, HERO_SHIFT_INPUT, HERO_SHIFT_OUTPUT)
    }

    pub fn hero_opacity(&self) -> f64 {
        interpolate(self.offset_y, HERO_FADE_INPUT, HERO_FADE_OUTPUT)
    }

    pub fn hero_background_style(&self) -> String {
        format!("transform: translate3d(0, {:.2}px, 0);", self.hero_translate_y())
    }

    pub fn hero_content_style(&self) -> String {
        format!("opacity: {:.3};", self.hero_opacity())
    }
}

/// Subscribes once to the window's `scroll` event and returns the latest snapshot.
/// The listener is removed when the calling component unmounts.
#[hook]
pub fn use_scroll_snapshot() -> ScrollSnapshot {
    let snapshot = use_state_eq(ScrollSnapshot::default);

    {
        let snapshot = snapshot.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();

                let scroll_callback = window.clone().map(|window| {
                    let snapshot = snapshot.clone();
                    Closure::wrap(Box::new(move || {
                        if let Ok(offset_y) = window.scroll_y() {
                            snapshot.set(ScrollSnapshot::new(offset_y));
                        }
                    }) as Box<dyn FnMut()>)
                });

                if let (Some(window), Some(callback)) = (&window, &scroll_callback) {
                    if let Err(err) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        log::warn!("Could not subscribe to scroll events: {:?}", err);
                    }
                    // Initial sample, the page may be restored mid-scroll
                    if let Ok(offset_y) = window.scroll_y() {
                        snapshot.set(ScrollSnapshot::new(offset_y));
                    }
                }

                move || {
                    if let (Some(window), Some(callback)) = (window, scroll_callback) {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    *snapshot
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn threshold_is_strictly_greater_than_fifty() {
        assert!(!ScrollSnapshot::new(0.0).is_past_threshold());
        assert!(!ScrollSnapshot::new(50.0).is_past_threshold());
        assert!(ScrollSnapshot::new(50.5).is_past_threshold());
        assert!(ScrollSnapshot::new(51.0).is_past_threshold());
    }

    #[test]
    fn hero_shift_follows_a_fifth_of_the_offset() {
        for offset in [0.0, 1.0, 125.0, 500.0, 999.0, 1000.0] {
            let snapshot = ScrollSnapshot::new(offset);
            assert!(close(snapshot.hero_translate_y(), offset * 0.2), "offset {}", offset);
        }
    }

    #[test]
    fn hero_shift_is_clamped_outside_its_range() {
        assert!(close(ScrollSnapshot::new(4000.0).hero_translate_y(), 200.0));
        assert!(close(ScrollSnapshot::new(-80.0).hero_translate_y(), 0.0));
    }

    #[test]
    fn hero_fades_out_over_the_first_five_hundred_pixels() {
        assert!(close(ScrollSnapshot::new(0.0).hero_opacity(), 1.0));
        assert!(close(ScrollSnapshot::new(250.0).hero_opacity(), 0.5));
        assert!(close(ScrollSnapshot::new(500.0).hero_opacity(), 0.0));
        assert!(close(ScrollSnapshot::new(900.0).hero_opacity(), 0.0));
        assert!(close(ScrollSnapshot::new(-10.0).hero_opacity(), 1.0));
    }

    #[test]
    fn mappings_are_monotonic() {
        let mut previous = ScrollSnapshot::new(0.0);
        for step in 1..=120 {
            let current = ScrollSnapshot::new(step as f64 * 10.0);
            assert!(current.hero_translate_y() >= previous.hero_translate_y());
            assert!(current.hero_opacity() <= previous.hero_opacity());
            previous = current;
        }
    }

    #[test]
    fn non_finite_offsets_read_as_top_of_page() {
        let snapshot = ScrollSnapshot::new(f64::NAN);
        assert_eq!(snapshot.offset_y(), 0.0);
        assert!(!snapshot.is_past_threshold());
        assert!(close(snapshot.hero_opacity(), 1.0));
    }

    #[test]
    fn degenerate_input_range_yields_start_of_output() {
        assert_eq!(interpolate(10.0, (5.0, 5.0), (3.0, 9.0)), 3.0);
    }

    #[test]
    fn styles_carry_the_derived_values() {
        let snapshot = ScrollSnapshot::new(250.0);
        assert_eq!(snapshot.hero_background_style(), "transform: translate3d(0, 50.00px, 0);");
        assert_eq!(snapshot.hero_content_style(), "opacity: 0.500;");
    }
}
