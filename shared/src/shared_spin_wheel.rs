use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;
use crate::pointer::Point;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelSection {
    pub id: u32,
    pub label: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct WheelConfig {
    pub sections: Vec<WheelSection>,
    pub initial_rotation: f64,
}

impl WheelConfig {
    /// Sections labelled `1..=count`, ids matching the label.
    pub fn numbered(count: u32) -> Self {
        Self {
            sections: (1..=count)
                .map(|id| WheelSection { id, label: id.to_string() })
                .collect(),
            initial_rotation: 0.0,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.initial_rotation.is_finite() {
            return Err(ConfigError::InvalidRotation);
        }
        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(section.id) {
                return Err(ConfigError::DuplicateSectionId(section.id));
            }
        }
        Ok(())
    }
}

/// Degrees covered by each section, `None` for an empty wheel.
pub fn section_angle(count: usize) -> Option<f64> {
    if count == 0 {
        None
    } else {
        Some(FULL_TURN_DEGREES / count as f64)
    }
}

/// Index of the section sitting under the pointer marker for `rotation`.
pub fn active_index(rotation: f64, count: usize) -> Option<usize> {
    let angle = section_angle(count)?;
    let normalized = rotation.rem_euclid(FULL_TURN_DEGREES);
    let position = (normalized + POINTER_OFFSET_DEGREES) % FULL_TURN_DEGREES;
    let index = (position / angle).floor() as usize;
    (index < count).then_some(index)
}

/// Rotation state of the selector wheel.
#[derive(Debug, Clone)]
pub struct WheelState {
    pub sections: Vec<WheelSection>,
    pub rotation: f64,
    pub drag_anchor: f64,
    pub is_dragging: bool,
    pub last_position: Option<Point>,
    pub active_section: Option<u32>,
}

impl WheelState {
    /// A non-finite initial rotation starts the wheel at 0.
    pub fn new(config: WheelConfig) -> Self {
        let rotation = if config.initial_rotation.is_finite() {
            config.initial_rotation
        } else {
            log::warn!("Ignoring initial rotation {}", config.initial_rotation);
            0.0
        };
        let mut state = Self {
            sections: config.sections,
            rotation,
            drag_anchor: 0.0,
            is_dragging: false,
            last_position: None,
            active_section: None,
        };
        state.refresh_active();
        state
    }

    pub fn section_angle(&self) -> Option<f64> {
        section_angle(self.sections.len())
    }

    pub fn set_sections(&mut self, sections: Vec<WheelSection>) {
        self.sections = sections;
        self.refresh_active();
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        if !rotation.is_finite() {
            return;
        }
        self.rotation = rotation;
        self.refresh_active();
    }

    fn refresh_active(&mut self) {
        self.active_section = active_index(self.rotation, self.sections.len())
            .and_then(|index| self.sections.get(index))
            .map(|section| section.id);
    }

    pub fn begin_drag(&mut self, pointer_angle: f64, point: Point) {
        self.is_dragging = true;
        self.drag_anchor = pointer_angle - self.rotation;
        self.last_position = Some(point);
    }

    /// Rotation follows the pointer relative to the drag anchor. Fast moves
    /// add a flick proportional to the distance travelled since the last event.
    pub fn drag_to(&mut self, pointer_angle: f64, point: Point) {
        if !self.is_dragging {
            return;
        }

        let mut rotation = pointer_angle - self.drag_anchor;
        if let Some(last) = self.last_position {
            let dx = point.x - last.x;
            let dy = point.y - last.y;
            if dx.abs() > FLICK_THRESHOLD || dy.abs() > FLICK_THRESHOLD {
                let direction = if dx * dy > 0.0 { 1.0 } else { -1.0 };
                rotation += direction * (dx * dx + dy * dy).sqrt() * FLICK_FACTOR;
            }
        }

        self.set_rotation(rotation);
        self.last_position = Some(point);
    }

    /// Ends the gesture. Returns the selected section id, at most once per drag.
    pub fn end_drag(&mut self) -> Option<u32> {
        if !self.is_dragging {
            return None;
        }
        self.is_dragging = false;
        self.last_position = None;

        if self.sections.is_empty() {
            return None;
        }
        self.active_section
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheel(count: u32, rotation: f64) -> WheelState {
        WheelState::new(WheelConfig { initial_rotation: rotation, ..WheelConfig::numbered(count) })
    }

    #[test]
    fn test_active_index_four_sections() {
        assert_eq!(active_index(0.0, 4), Some(3));
        assert_eq!(active_index(90.0, 4), Some(0));
        assert_eq!(active_index(180.0, 4), Some(1));
        assert_eq!(active_index(270.0, 4), Some(2));
        assert_eq!(active_index(450.0, 4), Some(0));
        assert_eq!(active_index(-270.0, 4), Some(0));
    }

    #[test]
    fn test_active_section_ids() {
        assert_eq!(wheel(4, 0.0).active_section, Some(4));
        assert_eq!(wheel(4, 90.0).active_section, Some(1));
    }

    #[test]
    fn test_zero_sections_never_select() {
        let mut state = wheel(0, 0.0);
        assert_eq!(state.section_angle(), None);
        assert_eq!(state.active_section, None);

        state.begin_drag(10.0, Point::new(0.0, 0.0));
        state.drag_to(80.0, Point::new(1.0, 1.0));
        assert_eq!(state.active_section, None);
        assert_eq!(state.end_drag(), None);
    }

    #[test]
    fn test_drag_is_relative_to_anchor() {
        let mut state = wheel(4, 400.0);
        state.begin_drag(30.0, Point::new(100.0, 100.0));
        assert_eq!(state.drag_anchor, -370.0);

        // Small moves skip the flick
        state.drag_to(35.0, Point::new(102.0, 103.0));
        assert_eq!(state.rotation, 405.0);
    }

    #[test]
    fn test_flick_adds_extra_rotation() {
        let mut state = wheel(4, 0.0);
        state.begin_drag(0.0, Point::new(0.0, 0.0));

        // dx and dy share a sign, spin forward by 0.1 * 10
        state.drag_to(20.0, Point::new(6.0, 8.0));
        assert!((state.rotation - 21.0).abs() < 1e-9);

        // Opposite signs spin backward
        state.drag_to(20.0, Point::new(12.0, 0.0));
        assert!((state.rotation - 19.0).abs() < 1e-9);
    }

    #[test]
    fn test_end_drag_fires_once() {
        let mut state = wheel(4, 0.0);
        state.begin_drag(0.0, Point::new(0.0, 0.0));
        state.drag_to(90.0, Point::new(1.0, 1.0));
        assert_eq!(state.end_drag(), Some(1));
        assert!(!state.is_dragging);
        assert_eq!(state.last_position, None);
        assert_eq!(state.end_drag(), None);
    }

    #[test]
    fn test_end_drag_without_movement_keeps_section() {
        let mut state = wheel(10, 123.0);
        let before = state.active_section;
        state.begin_drag(45.0, Point::new(5.0, 5.0));
        assert_eq!(state.end_drag(), before);
        assert_eq!(state.rotation, 123.0);
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let mut state = wheel(4, 0.0);
        state.drag_to(90.0, Point::new(50.0, 50.0));
        assert_eq!(state.rotation, 0.0);
    }

    #[test]
    fn test_set_sections_refreshes_active() {
        let mut state = wheel(4, 90.0);
        state.set_sections(Vec::new());
        assert_eq!(state.active_section, None);
        state.set_sections(WheelConfig::numbered(2).sections);
        assert_eq!(state.active_section, Some(1));
    }

    #[test]
    fn test_non_finite_rotation_keeps_wheel_usable() {
        let mut state = wheel(4, f64::NAN);
        assert_eq!(state.rotation, 0.0);
        assert_eq!(state.active_section, Some(4));

        state.begin_drag(0.0, Point::new(0.0, 0.0));
        state.drag_to(90.0, Point::new(1.0, 1.0));
        assert_eq!(state.rotation, 90.0);
        assert_eq!(state.end_drag(), Some(1));

        state.set_rotation(f64::INFINITY);
        assert_eq!(state.rotation, 90.0);
    }

    #[test]
    fn test_validate() {
        assert!(WheelConfig::numbered(10).validate().is_ok());
        let mut config = WheelConfig::numbered(3);
        config.sections[2].id = 1;
        assert_eq!(config.validate(), Err(ConfigError::DuplicateSectionId(1)));
        let config = WheelConfig { initial_rotation: f64::NAN, ..WheelConfig::numbered(3) };
        assert_eq!(config.validate(), Err(ConfigError::InvalidRotation));
    }
}
