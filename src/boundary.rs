//! Failure policy at the engine/renderer boundary
//!
//! A malformed frame is a producer bug: it is dropped and logged, never
//! retried. A rejected settings change leaves the previous settings active.

use std::collections::VecDeque;

use crate::config::ContractConfig;
use crate::contract::{validate_event_settings_with, validate_renderer_data_with};
use crate::error::ContractResult;
use crate::schema::{EventSettings, FluidEventSettings, RendererData, RigidBodyEventSettings, SimulationKind};

/// Bounded FIFO of recent frames; the oldest is evicted when full
#[derive(Debug, Clone)]
pub struct FrameHistory<T> {
    frames: VecDeque<T>,
    capacity: usize,
}

impl<T> FrameHistory<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            frames: VecDeque::new(),
            capacity,
        }
    }

    /// Capacity of `seconds * fps` frames
    pub fn for_duration(seconds: f32, frames_per_second: f32) -> Self {
        Self::new((seconds * frames_per_second).max(0.0) as usize)
    }

    pub fn push(&mut self, frame: T) {
        if self.capacity == 0 {
            return;
        }
        if self.frames.len() == self.capacity {
            self.frames.pop_front();
        }
        self.frames.push_back(frame);
    }

    pub fn latest(&self) -> Option<&T> {
        self.frames.back()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.frames.iter()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

/// Frame counters kept by a [`FrameGate`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GateStats {
    pub accepted: u64,
    pub dropped: u64,
}

/// Validates incoming frames for one demo, dropping the bad ones
#[derive(Debug)]
pub struct FrameGate {
    kind: SimulationKind,
    config: ContractConfig,
    history: FrameHistory<RendererData>,
    last_accepted: Option<RendererData>,
    stats: GateStats,
}

impl FrameGate {
    pub fn new(kind: SimulationKind) -> Self {
        Self::with_config(kind, ContractConfig::default())
    }

    pub fn with_config(kind: SimulationKind, config: ContractConfig) -> Self {
        let history = FrameHistory::new(config.history_capacity());
        Self {
            kind,
            config,
            history,
            last_accepted: None,
            stats: GateStats::default(),
        }
    }

    pub fn kind(&self) -> SimulationKind {
        self.kind
    }

    /// Validate a frame. Returns the frame to draw, or `None` to skip it.
    pub fn accept(&mut self, data: RendererData) -> Option<&RendererData> {
        let result = validate_renderer_data_with(self.kind, data, &self.config);
        self.record(result)
    }

    /// Decode and validate a JSON frame, with the same policy as [`FrameGate::accept`]
    pub fn accept_json(&mut self, json: &str) -> Option<&RendererData> {
        let result = crate::codec::decode_frame_with(self.kind, json, &self.config);
        self.record(result)
    }

    fn record(&mut self, result: ContractResult<RendererData>) -> Option<&RendererData> {
        match result {
            Ok(frame) => {
                self.stats.accepted += 1;
                log::trace!("{} frame {} accepted", self.kind, self.stats.accepted);
                if self.history.capacity() > 0 {
                    self.history.push(frame.clone());
                }
                self.last_accepted = Some(frame);
                self.last_accepted.as_ref()
            }
            Err(err) => {
                self.stats.dropped += 1;
                log::warn!(
                    "Dropping {} frame ({} dropped so far): {} [{}]",
                    self.kind,
                    self.stats.dropped,
                    err,
                    err.code()
                );
                None
            }
        }
    }

    /// Most recent frame that passed validation
    pub fn last_accepted(&self) -> Option<&RendererData> {
        self.last_accepted.as_ref()
    }

    pub fn stats(&self) -> GateStats {
        self.stats
    }

    pub fn history(&self) -> &FrameHistory<RendererData> {
        &self.history
    }
}

/// Holds the last settings the engine accepted
#[derive(Debug, Clone)]
pub struct SettingsPanel {
    kind: SimulationKind,
    config: ContractConfig,
    current: EventSettings,
}

impl SettingsPanel {
    /// Panel seeded with the demo's default settings. Bouncing balls have
    /// no tunables, so `None` is returned for that demo.
    pub fn new(kind: SimulationKind) -> Option<Self> {
        Self::with_config(kind, ContractConfig::default())
    }

    pub fn with_config(kind: SimulationKind, config: ContractConfig) -> Option<Self> {
        let current = match kind {
            SimulationKind::Fluid => EventSettings::Fluid(FluidEventSettings::default()),
            SimulationKind::RigidBody => EventSettings::RigidBody(RigidBodyEventSettings::default()),
            SimulationKind::BouncingBalls => return None,
        };
        Some(Self { kind, config, current })
    }

    pub fn current(&self) -> &EventSettings {
        &self.current
    }

    /// Replace the current settings if `settings` is valid; otherwise keep
    /// the previous value and return the error.
    pub fn propose(&mut self, settings: EventSettings) -> ContractResult<&EventSettings> {
        match validate_event_settings_with(self.kind, settings, &self.config) {
            Ok(settings) => {
                log::info!("Applied {} settings", self.kind);
                self.current = settings;
                Ok(&self.current)
            }
            Err(err) => {
                log::warn!("Rejected {} settings, keeping previous: {}", self.kind, err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FluidParticles, Vector2, WorkSpace};

    #[test]
    fn test_history_evicts_oldest() {
        let mut history = FrameHistory::new(3);
        for i in 0..5 {
            history.push(i);
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(history.latest(), Some(&4));
    }

    #[test]
    fn test_history_for_duration() {
        let history: FrameHistory<u8> = FrameHistory::for_duration(0.5, 60.0);
        assert_eq!(history.capacity(), 30);
    }

    #[test]
    fn test_zero_capacity_history_stays_empty() {
        let mut history = FrameHistory::new(0);
        history.push(1);
        assert!(history.is_empty());
    }

    #[test]
    fn test_gate_drops_bad_frames() {
        let mut gate = FrameGate::new(SimulationKind::Fluid);

        let mut good = FluidParticles::new(1.0, 5.0, 0.75, 3.5, 30.0);
        good.push(Vector2::new(1.0, 1.0));
        assert!(gate.accept(good.clone().into()).is_some());

        let mut bad = good.clone();
        bad.colors.clear();
        assert!(gate.accept(bad.into()).is_none());

        assert!(gate.accept(WorkSpace::new().into()).is_none());

        assert_eq!(gate.stats(), GateStats { accepted: 1, dropped: 2 });
        assert_eq!(gate.history().len(), 1);
    }

    #[test]
    fn test_gate_json() {
        let mut gate = FrameGate::new(SimulationKind::BouncingBalls);
        assert!(gate.accept_json(r#"{"balls": []}"#).is_some());
        assert!(gate.accept_json("{not json").is_none());
        assert_eq!(gate.stats().dropped, 1);
    }

    #[test]
    fn test_gate_without_history_still_returns_frames() {
        let config = ContractConfig::from_json(r#"{"history_seconds": 0.0}"#).unwrap();
        let mut gate = FrameGate::with_config(SimulationKind::Fluid, config);

        let frame = RendererData::from(crate::sample::fluid(1, 4));
        assert_eq!(gate.accept(frame.clone()), Some(&frame));
        assert!(gate.accept_json(&crate::codec::encode(&frame).unwrap()).is_some());

        assert_eq!(gate.stats(), GateStats { accepted: 2, dropped: 0 });
        assert!(gate.history().is_empty());
        assert_eq!(gate.last_accepted(), Some(&frame));
    }

    #[test]
    fn test_rejected_frame_keeps_last_accepted() {
        let mut gate = FrameGate::new(SimulationKind::Fluid);
        let frame = RendererData::from(crate::sample::fluid(2, 3));
        gate.accept(frame.clone());
        assert!(gate.accept(WorkSpace::new().into()).is_none());
        assert_eq!(gate.last_accepted(), Some(&frame));
    }

    #[test]
    fn test_panel_keeps_previous_on_reject() {
        let mut panel = SettingsPanel::new(SimulationKind::Fluid).unwrap();

        let tuned = EventSettings::Fluid(FluidEventSettings {
            gravity: 9.81,
            visual_filter: 2,
            ..Default::default()
        });
        assert!(panel.propose(tuned.clone()).is_ok());

        let broken = EventSettings::Fluid(FluidEventSettings {
            visual_filter: 99,
            ..Default::default()
        });
        assert!(panel.propose(broken).is_err());
        assert_eq!(panel.current(), &tuned);
    }

    #[test]
    fn test_no_panel_for_bouncing_balls() {
        assert!(SettingsPanel::new(SimulationKind::BouncingBalls).is_none());
    }
}
