use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;
use crate::pointer::Point;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LaneItem {
    pub id: String,
    pub value: String,
}

/// One horizontally scrolling row of the ticker.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Lane {
    pub items: Vec<LaneItem>,
    /// Base scroll speed in px/s at multiplier 1.
    pub speed: f64,
    /// Start delay in seconds.
    #[serde(default)]
    pub delay: f64,
    #[serde(default)]
    pub direction: ScrollDirection,
}

impl Lane {
    fn percent(lane: usize, speed: f64, values: &[&str]) -> Self {
        Self {
            items: values
                .iter()
                .enumerate()
                .map(|(i, value)| LaneItem {
                    id: format!("percent-{}-{}", i + 1, lane),
                    value: value.to_string(),
                })
                .collect(),
            speed,
            delay: 0.0,
            direction: ScrollDirection::Left,
        }
    }

    /// Seconds one marquee cycle of `track_px` takes at the base speed.
    /// The speed multiplier is applied as a playback rate on top, so the
    /// duration never changes while the lane is running.
    pub fn cycle_seconds(&self, track_px: f64) -> f64 {
        track_px / self.speed.max(f64::EPSILON)
    }
}

/// Lanes plus the tuning of the speed controller.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TickerConfig {
    pub lanes: Vec<Lane>,
    pub smoothing: f64,
    pub snap_threshold: f64,
    pub rest_speed: f64,
    pub press_speed: f64,
    pub max_drag_speed: f64,
    pub drag_divisor: f64,
    pub hold_step: f64,
    pub hold_ceiling: f64,
    pub hold_delay_ms: u32,
    pub hold_interval_ms: u32,
    pub release_grace_ms: u32,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            lanes: vec![
                Lane::percent(0, 40.0, &["12%", "49%", "85%", "150%"]),
                Lane::percent(1, 25.0, &["3%", "35%", "70%", "115%"]),
                Lane::percent(2, 35.0, &["1%", "26%", "63%", "100%", "200%"]),
                Lane::percent(3, 42.0, &["7%", "43%", "76%", "130%"]),
            ],
            smoothing: SMOOTHING_FACTOR,
            snap_threshold: SNAP_THRESHOLD,
            rest_speed: REST_SPEED,
            press_speed: PRESS_SPEED,
            max_drag_speed: MAX_DRAG_SPEED,
            drag_divisor: DRAG_DISTANCE_DIVISOR,
            hold_step: HOLD_STEP,
            hold_ceiling: HOLD_CEILING,
            hold_delay_ms: HOLD_DELAY_MS,
            hold_interval_ms: HOLD_INTERVAL_MS,
            release_grace_ms: RELEASE_GRACE_MS,
        }
    }
}

impl TickerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lanes.is_empty() {
            return Err(ConfigError::NoLanes);
        }
        for (index, lane) in self.lanes.iter().enumerate() {
            if lane.items.is_empty() {
                return Err(ConfigError::EmptyLane(index));
            }
            if !lane.speed.is_finite() || lane.speed <= 0.0 {
                return Err(ConfigError::InvalidLaneSpeed { lane: index, speed: lane.speed });
            }
        }
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(ConfigError::InvalidSmoothing(self.smoothing));
        }
        if !(self.snap_threshold > 0.0) {
            return Err(ConfigError::InvalidSnapThreshold(self.snap_threshold));
        }
        let ordered = self.rest_speed > 0.0
            && self.rest_speed <= self.press_speed
            && self.press_speed <= self.max_drag_speed
            && self.press_speed <= self.hold_ceiling
            && self.hold_step > 0.0
            && self.drag_divisor > 0.0;
        if !ordered {
            return Err(ConfigError::InvalidSpeedBounds);
        }
        Ok(())
    }

    /// Falls back to the built-in lanes and tuning when `self` is rejected.
    pub fn or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                log::warn!("Ticker configured with {}; using defaults", e);
                Self::default()
            }
        }
    }
}

/// Speed controller behind the ticker.
///
/// Pointer handlers move `target_speed`; `step` eases `current_speed`
/// toward it once per animation frame. Timers live in the view, this type
/// only exposes the transitions they trigger.
#[derive(Debug, Clone)]
pub struct TickerState {
    pub config: TickerConfig,
    pub current_speed: f64,
    pub target_speed: f64,
    pub indicator: Option<Point>,
    pub is_interacting: bool,
    pub last_position: Option<Point>,
    hold_speed: f64,
}

impl TickerState {
    pub fn new(config: TickerConfig) -> Self {
        let rest = config.rest_speed;
        Self {
            config,
            current_speed: rest,
            target_speed: rest,
            indicator: None,
            is_interacting: false,
            last_position: None,
            hold_speed: rest,
        }
    }

    pub fn press(&mut self, point: Point) {
        self.target_speed = self.config.press_speed;
        self.hold_speed = self.config.press_speed;
        self.last_position = Some(point);
        self.indicator = Some(point);
        self.is_interacting = true;
    }

    /// One hold-acceleration interval elapsed without movement.
    pub fn hold_tick(&mut self) {
        if !self.is_interacting {
            return;
        }
        let before = self.hold_speed;
        self.hold_speed = (self.hold_speed + self.config.hold_step).min(self.config.hold_ceiling);
        self.target_speed = self.hold_speed;
        if before < self.config.hold_ceiling && self.hold_speed >= self.config.hold_ceiling {
            log::debug!("Hold ramp reached ceiling {}", self.config.hold_ceiling);
        }
    }

    /// Returns false when no gesture is in progress.
    pub fn drag(&mut self, point: Point) -> bool {
        let last = match (self.is_interacting, self.last_position) {
            (true, Some(last)) => last,
            _ => return false,
        };

        let distance = last.distance_to(&point);
        self.target_speed = (self.config.press_speed + distance / self.config.drag_divisor)
            .min(self.config.max_drag_speed);
        self.last_position = Some(point);
        self.indicator = Some(point);
        true
    }

    /// Returns whether a gesture was actually ended.
    pub fn release(&mut self) -> bool {
        let was_interacting = self.is_interacting;
        self.is_interacting = false;
        self.last_position = None;
        self.target_speed = self.config.rest_speed;
        was_interacting
    }

    pub fn clear_indicator(&mut self) {
        self.indicator = None;
    }

    /// Advances the smoothing by one frame. Returns true while another
    /// frame is needed to reach the target.
    pub fn step(&mut self) -> bool {
        if (self.current_speed - self.target_speed).abs() < self.config.snap_threshold {
            self.current_speed = self.target_speed;
            false
        } else {
            self.current_speed += (self.target_speed - self.current_speed) * self.config.smoothing;
            true
        }
    }

    pub fn is_settled(&self) -> bool {
        self.current_speed == self.target_speed
    }

    /// Playback rate applied to every lane animation.
    pub fn playback_rate(&self) -> f64 {
        self.current_speed
    }
}

impl Default for TickerState {
    fn default() -> Self {
        Self::new(TickerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn settle(state: &mut TickerState) -> usize {
        let mut steps = 0;
        while state.step() {
            steps += 1;
            assert!(steps < 1000, "smoothing did not converge");
        }
        steps
    }

    #[test]
    fn test_rest_state() {
        let state = TickerState::default();
        assert_eq!(state.target_speed, 1.0);
        assert_eq!(state.current_speed, 1.0);
        assert!(!state.is_interacting);
        assert!(state.indicator.is_none());
    }

    #[test]
    fn test_drag_targets_follow_distance() {
        let mut state = TickerState::default();
        state.press(Point::new(0.0, 0.0));
        assert_eq!(state.target_speed, 2.0);

        state.drag(Point::new(3.0, 4.0));
        assert!(approx(state.target_speed, 2.5));

        state.drag(Point::new(3.0, 14.0));
        assert!(approx(state.target_speed, 3.0));

        state.drag(Point::new(3.0, 114.0));
        assert_eq!(state.target_speed, 4.0);

        state.drag(Point::new(3.0, 114.0));
        assert_eq!(state.target_speed, 2.0);
        assert_eq!(state.indicator, Some(Point::new(3.0, 114.0)));

        assert!(state.release());
        assert_eq!(state.target_speed, 1.0);
        assert!(state.indicator.is_some());
        state.clear_indicator();
        assert!(state.indicator.is_none());
    }

    #[test]
    fn test_drag_without_press_is_ignored() {
        let mut state = TickerState::default();
        assert!(!state.drag(Point::new(50.0, 50.0)));
        assert_eq!(state.target_speed, 1.0);
        assert!(!state.release());
    }

    #[test]
    fn test_smoothing_converges_then_snaps() {
        let mut state = TickerState::default();
        state.press(Point::new(0.0, 0.0));
        state.drag(Point::new(0.0, 100.0));

        assert!(state.step());
        assert!(approx(state.current_speed, 1.3));

        let steps = settle(&mut state);
        assert!(steps <= 40);
        assert_eq!(state.current_speed, 4.0);
        assert!(state.is_settled());
        assert!(!state.step());
    }

    #[test]
    fn test_smoothing_tracks_new_target() {
        let mut state = TickerState::default();
        state.press(Point::new(0.0, 0.0));
        for _ in 0..5 {
            state.step();
        }
        state.release();
        settle(&mut state);
        assert_eq!(state.current_speed, 1.0);
        assert!(state.current_speed > 0.0);
    }

    #[test]
    fn test_hold_ramp() {
        let mut state = TickerState::default();
        state.press(Point::new(10.0, 10.0));
        let mut seen = vec![state.target_speed];
        for _ in 0..3 {
            state.hold_tick();
            seen.push(state.target_speed);
        }
        let expected = [2.0, 2.2, 2.4, 2.6];
        for (got, want) in seen.iter().zip(expected.iter()) {
            assert!(approx(*got, *want), "{} != {}", got, want);
        }

        for _ in 0..20 {
            state.hold_tick();
        }
        assert_eq!(state.target_speed, 3.5);
    }

    #[test]
    fn test_hold_ramp_restarts_on_press() {
        let mut state = TickerState::default();
        state.press(Point::new(0.0, 0.0));
        for _ in 0..10 {
            state.hold_tick();
        }
        state.release();
        state.hold_tick();
        assert_eq!(state.target_speed, 1.0);

        state.press(Point::new(0.0, 0.0));
        state.hold_tick();
        assert!(approx(state.target_speed, 2.2));
    }

    #[test]
    fn test_default_lanes() {
        let config = TickerConfig::default();
        assert_eq!(config.lanes.len(), 4);
        assert_eq!(config.lanes[2].items.len(), 5);
        assert_eq!(config.lanes[2].items[4].id, "percent-5-2");
        assert_eq!(config.lanes[0].items[3].value, "150%");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_lane_cycle_is_fixed_while_rate_follows_speed() {
        let mut state = TickerState::default();
        let lane = state.config.lanes[0].clone();
        let cycle = lane.cycle_seconds(800.0);
        assert_eq!(cycle, 20.0);
        assert_eq!(state.playback_rate(), 1.0);

        state.press(Point::new(0.0, 0.0));
        state.drag(Point::new(0.0, 100.0));
        let mut rates = vec![state.playback_rate()];
        while state.step() {
            rates.push(state.playback_rate());
            assert_eq!(lane.cycle_seconds(800.0), cycle);
        }
        rates.push(state.playback_rate());

        // Eases up without jumps and ends on the target
        for pair in rates.windows(2) {
            assert!(pair[1] >= pair[0]);
            assert!(pair[1] - pair[0] <= 0.3 + 1e-9);
        }
        assert_eq!(state.playback_rate(), 4.0);
    }

    #[test]
    fn test_default_timings() {
        let config = TickerConfig::default();
        assert_eq!(config.hold_delay_ms, 300);
        assert_eq!(config.hold_interval_ms, 200);
        assert_eq!(config.release_grace_ms, 1000);
    }

    #[test]
    fn test_or_default_replaces_rejected_config() {
        let config = TickerConfig { smoothing: 0.0, ..TickerConfig::default() }.or_default();
        assert_eq!(config, TickerConfig::default());

        let mut state = TickerState::new(config);
        state.press(Point::new(0.0, 0.0));
        let mut steps = 0;
        while state.step() {
            steps += 1;
            assert!(steps < 100);
        }
        assert!(state.is_settled());

        let custom = TickerConfig { smoothing: 0.5, ..TickerConfig::default() };
        assert_eq!(custom.clone().or_default(), custom);
    }

    #[test]
    fn test_validate_rejects_bad_config() {
        let mut config = TickerConfig::default();
        config.lanes[1].items.clear();
        assert_eq!(config.validate(), Err(ConfigError::EmptyLane(1)));

        let mut config = TickerConfig::default();
        config.lanes[3].speed = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidLaneSpeed { lane: 3, .. })));

        let config = TickerConfig { lanes: vec![], ..TickerConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::NoLanes));

        let config = TickerConfig { smoothing: 0.0, ..TickerConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::InvalidSmoothing(0.0)));

        let config = TickerConfig { snap_threshold: -1.0, ..TickerConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::InvalidSnapThreshold(-1.0)));

        let config = TickerConfig { max_drag_speed: 1.5, ..TickerConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::InvalidSpeedBounds));
    }
}
