use std::time::Instant;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::Rng;
use crate::data::CHAMPIONS;
use crate::engine::random::random_index;
use crate::engine::timer::{TimerHandle, TimerQueue};
use crate::engine::SpinTiming;
use crate::models::{
    Champion, DamageType, Dimension, Lane, SelectedIndices, SlotField, SlotMachineState, SpinResult,
};

/// What `SlotMachine::spin` did with the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinOutcome {
    Started,
    /// Every reel is switched off; nothing happened.
    AllDisabled,
    /// A spin is already in flight; nothing happened.
    AlreadySpinning,
}

/// Values drawn when a spin is accepted. `None` means the reel was off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SpinDraw {
    lane: Option<Lane>,
    champion: Option<&'static Champion>,
    damage_type: Option<DamageType>,
}

#[derive(Debug)]
enum SingleEvent {
    Settle(SpinDraw),
}

/// Solo slot machine: three toggleable reels and one timed reveal.
pub struct SlotMachine<R: Rng = StdRng> {
    state: SlotMachineState,
    selected: SelectedIndices,
    show_result: bool,
    timing: SpinTiming,
    timers: TimerQueue<SingleEvent>,
    pending: Option<TimerHandle>,
    rng: R,
}

impl SlotMachine<StdRng> {
    pub fn new(timing: SpinTiming) -> Self {
        Self::with_rng(timing, StdRng::from_os_rng())
    }
}

impl<R: Rng> SlotMachine<R> {
    /// Starts idle with every reel on and a random combination showing.
    pub fn with_rng(timing: SpinTiming, mut rng: R) -> Self {
        let selected = SelectedIndices {
            lane: random_index(&mut rng, Lane::ALL.len()),
            champion: random_index(&mut rng, CHAMPIONS.len()),
            damage_type: random_index(&mut rng, DamageType::ALL.len()),
        };
        let state = SlotMachineState {
            lane: SlotField::new(Lane::ALL[selected.lane]),
            champion: SlotField::new(&CHAMPIONS[selected.champion]),
            damage_type: SlotField::new(DamageType::ALL[selected.damage_type]),
        };

        Self {
            state,
            selected,
            show_result: false,
            timing,
            timers: TimerQueue::new(),
            pending: None,
            rng,
        }
    }

    pub fn state(&self) -> &SlotMachineState {
        &self.state
    }

    pub fn selected_indices(&self) -> SelectedIndices {
        self.selected
    }

    pub fn show_result(&self) -> bool {
        self.show_result
    }

    pub fn is_spinning(&self) -> bool {
        self.state.is_spinning()
    }

    pub fn all_disabled(&self) -> bool {
        self.state.all_disabled()
    }

    /// Takes effect from the next spin.
    pub fn set_timing(&mut self, timing: SpinTiming) {
        self.timing = timing;
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Flips a reel on or off. Only future spins are affected.
    pub fn toggle(&mut self, dimension: Dimension) {
        match dimension {
            Dimension::Lane => self.state.lane.enabled = !self.state.lane.enabled,
            Dimension::Champion => self.state.champion.enabled = !self.state.champion.enabled,
            Dimension::DamageType => self.state.damage_type.enabled = !self.state.damage_type.enabled,
        }
    }

    pub fn spin(&mut self, now: Instant) -> SpinOutcome {
        if self.is_spinning() || self.pending.is_some() {
            return SpinOutcome::AlreadySpinning;
        }
        if self.state.all_disabled() {
            return SpinOutcome::AllDisabled;
        }

        self.show_result = false;

        // Draw everything now; settlement only reveals it.
        if self.state.lane.enabled {
            self.selected.lane = random_index(&mut self.rng, Lane::ALL.len());
        }
        if self.state.champion.enabled {
            self.selected.champion = random_index(&mut self.rng, CHAMPIONS.len());
        }
        if self.state.damage_type.enabled {
            self.selected.damage_type = random_index(&mut self.rng, DamageType::ALL.len());
        }

        let draw = SpinDraw {
            lane: self.state.lane.enabled.then(|| Lane::ALL[self.selected.lane]),
            champion: self.state.champion.enabled.then(|| &CHAMPIONS[self.selected.champion]),
            damage_type: self.state.damage_type.enabled.then(|| DamageType::ALL[self.selected.damage_type]),
        };

        self.state.lane.is_spinning = self.state.lane.enabled;
        self.state.champion.is_spinning = self.state.champion.enabled;
        self.state.damage_type.is_spinning = self.state.damage_type.enabled;

        let handle = self.timers.schedule(now, self.timing.spin_duration, SingleEvent::Settle(draw));
        self.pending = Some(handle);
        log::debug!("Spin started, settling in {:?}", self.timing.spin_duration);
        SpinOutcome::Started
    }

    /// Fires the settlement if it is due. Returns the final combination when
    /// a spin settles with all three values resolved.
    pub fn tick(&mut self, now: Instant) -> Option<SpinResult> {
        let mut completed = None;
        for event in self.timers.poll(now) {
            match event {
                SingleEvent::Settle(draw) => completed = self.settle(draw),
            }
        }
        completed
    }

    fn settle(&mut self, draw: SpinDraw) -> Option<SpinResult> {
        self.pending = None;

        if let Some(lane) = draw.lane {
            self.state.lane.current_value = Some(lane);
        }
        if let Some(champion) = draw.champion {
            self.state.champion.current_value = Some(champion);
        }
        if let Some(damage_type) = draw.damage_type {
            self.state.damage_type.current_value = Some(damage_type);
        }
        self.state.lane.is_spinning = false;
        self.state.champion.is_spinning = false;
        self.state.damage_type.is_spinning = false;
        self.show_result = true;

        let result = match (
            self.state.lane.current_value,
            self.state.champion.current_value,
            self.state.damage_type.current_value,
        ) {
            (Some(lane), Some(champion), Some(damage_type)) => Some(SpinResult {
                lane,
                champion,
                damage_type,
            }),
            _ => None,
        };
        if let Some(result) = &result {
            log::debug!(
                "Spin settled: {} / {} / {}",
                result.lane.id(),
                result.champion.id,
                result.damage_type.id()
            );
        }
        result
    }

    pub fn hide_result(&mut self) {
        self.show_result = false;
    }

    /// Cancels a pending settlement. Reels that were spinning stop where
    /// they were and keep their previous values.
    pub fn shutdown(&mut self) {
        let dropped = self.timers.cancel_all();
        if dropped > 0 {
            log::debug!("Cancelled {} pending solo timer(s)", dropped);
        }
        self.pending = None;
        self.state.lane.is_spinning = false;
        self.state.champion.is_spinning = false;
        self.state.damage_type.is_spinning = false;
    }
}

impl<R: Rng> Drop for SlotMachine<R> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
