use serde::{Deserialize, Serialize};

use crate::constants::EMULATED_MOUSE_WINDOW_MS;

/// A client-space pointer position in CSS pixels.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Laid-out box of an element, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn center(&self) -> Point {
        Point {
            x: self.left + self.width / 2.0,
            y: self.top + self.height / 2.0,
        }
    }
}

/// Angle in degrees of `point` around the centre of `bounds`.
/// Returns 0 while the element has not been laid out.
pub fn pointer_angle(bounds: Option<Bounds>, point: Point) -> f64 {
    match bounds {
        Some(bounds) => {
            let center = bounds.center();
            (point.y - center.y).atan2(point.x - center.x).to_degrees()
        }
        None => 0.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// Drops the compatibility mouse events a browser synthesizes after a
/// touch, so one tap is never handled as two gestures.
#[derive(Debug, Clone, Default)]
pub struct EmulatedMouseGuard {
    last_touch_ms: Option<f64>,
}

impl EmulatedMouseGuard {
    /// Records touch activity at event timestamp `at_ms`.
    pub fn touched(&mut self, at_ms: f64) {
        self.last_touch_ms = Some(at_ms);
    }

    pub fn accepts(&self, source: PointerSource, at_ms: f64) -> bool {
        match (source, self.last_touch_ms) {
            (PointerSource::Touch, _) | (PointerSource::Mouse, None) => true,
            (PointerSource::Mouse, Some(last)) => at_ms - last > EMULATED_MOUSE_WINDOW_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Bounds {
        Bounds { left: 0.0, top: 0.0, width: 200.0, height: 200.0 }
    }

    #[test]
    fn test_angle_without_geometry_is_zero() {
        assert_eq!(pointer_angle(None, Point::new(40.0, 12.0)), 0.0);
    }

    #[test]
    fn test_angle_quadrants() {
        let bounds = Some(square());
        assert!((pointer_angle(bounds, Point::new(200.0, 100.0)) - 0.0).abs() < 1e-9);
        assert!((pointer_angle(bounds, Point::new(100.0, 200.0)) - 90.0).abs() < 1e-9);
        assert!((pointer_angle(bounds, Point::new(0.0, 100.0)) - 180.0).abs() < 1e-9);
        assert!((pointer_angle(bounds, Point::new(100.0, 0.0)) + 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_distance() {
        assert_eq!(Point::new(0.0, 0.0).distance_to(&Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_mouse_right_after_touch_is_dropped() {
        let mut guard = EmulatedMouseGuard::default();
        assert!(guard.accepts(PointerSource::Mouse, 50.0));

        guard.touched(1000.0);
        guard.touched(1080.0);
        assert!(guard.accepts(PointerSource::Touch, 1100.0));
        assert!(!guard.accepts(PointerSource::Mouse, 1120.0));
        assert!(!guard.accepts(PointerSource::Mouse, 1800.0));
        assert!(guard.accepts(PointerSource::Mouse, 2500.0));
    }
}
