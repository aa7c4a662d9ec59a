use std::time::{Duration, Instant};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::Rng;
use crate::data::CHAMPIONS;
use crate::engine::random::{distinct_indices, random_index};
use crate::engine::timer::TimerQueue;
use crate::engine::{SpinTiming, MAX_MEMBERS, MIN_MEMBERS};
use crate::error::SlotError;
use crate::models::{
    DamageType, Lane, PartyMemberSlotState, PartyResult, PartySlotMachineState, PartyVariant, SlotField,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartySpinOutcome {
    Started,
    AlreadySpinning,
}

#[derive(Debug)]
enum PartyEvent {
    /// Cosmetic cascade: member at this index starts moving.
    StartMember(usize),
    /// Commit every member at once.
    Settle(Vec<PartyResult>),
}

pub fn validate_member_count(count: usize) -> Result<(), SlotError> {
    if (MIN_MEMBERS..=MAX_MEMBERS).contains(&count) {
        Ok(())
    } else {
        Err(SlotError::InvalidMemberCount {
            requested: count,
            min: MIN_MEMBERS,
            max: MAX_MEMBERS,
        })
    }
}

/// Draws one assignment for `count` members under `variant`'s rules.
pub fn draw_party<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    variant: PartyVariant,
) -> Result<Vec<PartyResult>, SlotError> {
    validate_member_count(count)?;

    let draws = match variant {
        PartyVariant::FixedLanes => (0..count)
            .map(|i| PartyResult {
                lane: Lane::ALL[i],
                champion: &CHAMPIONS[random_index(rng, CHAMPIONS.len())],
                damage_type: DamageType::ALL[random_index(rng, DamageType::ALL.len())],
            })
            .collect(),
        PartyVariant::RandomLanes => {
            let lanes = distinct_indices(rng, Lane::ALL.len(), count)?;
            let champions = distinct_indices(rng, CHAMPIONS.len(), count)?;
            lanes
                .into_iter()
                .zip(champions)
                .map(|(lane, champion)| PartyResult {
                    lane: Lane::ALL[lane],
                    champion: &CHAMPIONS[champion],
                    damage_type: DamageType::ALL[random_index(rng, DamageType::ALL.len())],
                })
                .collect()
        }
    };
    Ok(draws)
}

fn member_from(result: &PartyResult) -> PartyMemberSlotState {
    PartyMemberSlotState {
        lane: SlotField::new(result.lane),
        champion: SlotField::new(result.champion),
        damage_type: SlotField::new(result.damage_type),
    }
}

/// Party slot machine: one champion and damage type (and possibly lane) per member.
pub struct PartySlotMachine<R: Rng = StdRng> {
    state: PartySlotMachineState,
    variant: PartyVariant,
    timing: SpinTiming,
    timers: TimerQueue<PartyEvent>,
    rng: R,
}

impl PartySlotMachine<StdRng> {
    pub fn new(member_count: usize, variant: PartyVariant, timing: SpinTiming) -> Result<Self, SlotError> {
        Self::with_rng(member_count, variant, timing, StdRng::from_os_rng())
    }
}

impl<R: Rng> PartySlotMachine<R> {
    pub fn with_rng(
        member_count: usize,
        variant: PartyVariant,
        timing: SpinTiming,
        mut rng: R,
    ) -> Result<Self, SlotError> {
        let initial = draw_party(&mut rng, member_count, variant)?;
        Ok(Self {
            state: PartySlotMachineState {
                members: initial.iter().map(member_from).collect(),
                is_spinning: false,
                show_result: false,
            },
            variant,
            timing,
            timers: TimerQueue::new(),
            rng,
        })
    }

    pub fn state(&self) -> &PartySlotMachineState {
        &self.state
    }

    pub fn members(&self) -> &[PartyMemberSlotState] {
        &self.state.members
    }

    pub fn member_count(&self) -> usize {
        self.state.members.len()
    }

    pub fn variant(&self) -> PartyVariant {
        self.variant
    }

    pub fn is_spinning(&self) -> bool {
        self.state.is_spinning
    }

    pub fn show_result(&self) -> bool {
        self.state.show_result
    }

    /// Takes effect from the next spin.
    pub fn set_timing(&mut self, timing: SpinTiming) {
        self.timing = timing;
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Delay from `spin` until every member settles.
    pub fn settle_delay(&self) -> Duration {
        let last = self.member_count().saturating_sub(1) as u32;
        self.timing.spin_duration + self.timing.stagger_delay * last
    }

    /// Draws every member's result up front and schedules the cascade.
    /// Fails only if the current party size cannot be dealt distinct values.
    pub fn spin(&mut self, now: Instant) -> Result<PartySpinOutcome, SlotError> {
        if self.state.is_spinning {
            return Ok(PartySpinOutcome::AlreadySpinning);
        }

        let count = self.member_count();
        let results = draw_party(&mut self.rng, count, self.variant)?;

        self.state.is_spinning = true;
        self.state.show_result = false;

        for index in 0..count {
            self.timers.schedule(now, self.timing.stagger_delay * index as u32, PartyEvent::StartMember(index));
        }
        let settle_delay = self.settle_delay();
        self.timers.schedule(now, settle_delay, PartyEvent::Settle(results));
        log::debug!("Party spin started for {} members, settling in {:?}", count, settle_delay);
        Ok(PartySpinOutcome::Started)
    }

    /// Fires due timers. Returns every member's result when the spin settles.
    pub fn tick(&mut self, now: Instant) -> Option<Vec<PartyResult>> {
        let mut completed = None;
        for event in self.timers.poll(now) {
            match event {
                PartyEvent::StartMember(index) => self.start_member(index),
                PartyEvent::Settle(results) => {
                    self.settle(&results);
                    completed = Some(results);
                }
            }
        }
        completed
    }

    fn start_member(&mut self, index: usize) {
        let randomize_lane = self.variant == PartyVariant::RandomLanes;
        if let Some(member) = self.state.members.get_mut(index) {
            member.lane.is_spinning = randomize_lane;
            member.champion.is_spinning = true;
            member.damage_type.is_spinning = true;
        }
    }

    fn settle(&mut self, results: &[PartyResult]) {
        for (member, result) in self.state.members.iter_mut().zip(results) {
            member.lane = SlotField {
                current_value: Some(result.lane),
                is_spinning: false,
                ..member.lane
            };
            member.champion = SlotField {
                current_value: Some(result.champion),
                is_spinning: false,
                ..member.champion
            };
            member.damage_type = SlotField {
                current_value: Some(result.damage_type),
                is_spinning: false,
                ..member.damage_type
            };
        }
        self.state.is_spinning = false;
        self.state.show_result = true;
        log::debug!("Party spin settled for {} members", results.len());
    }

    pub fn hide_result(&mut self) {
        self.state.show_result = false;
    }

    /// Current value of every member, skipping members without a full set.
    pub fn results(&self) -> Vec<PartyResult> {
        self.state
            .members
            .iter()
            .filter_map(|member| {
                Some(PartyResult {
                    lane: member.lane.current_value?,
                    champion: member.champion.current_value?,
                    damage_type: member.damage_type.current_value?,
                })
            })
            .collect()
    }

    /// Discards any spin in flight and deals a fresh party of the same shape.
    pub fn reset(&mut self) {
        let count = self.member_count();
        self.rebuild(count, self.variant)
            .unwrap_or_else(|e| log::error!("Party reset failed: {}", e));
    }

    pub fn set_member_count(&mut self, count: usize) -> Result<(), SlotError> {
        validate_member_count(count)?;
        self.rebuild(count, self.variant)
    }

    pub fn set_variant(&mut self, variant: PartyVariant) {
        let count = self.member_count();
        self.rebuild(count, variant)
            .unwrap_or_else(|e| log::error!("Party variant change failed: {}", e));
    }

    fn rebuild(&mut self, count: usize, variant: PartyVariant) -> Result<(), SlotError> {
        let initial = draw_party(&mut self.rng, count, variant)?;
        self.shutdown();
        self.variant = variant;
        self.state = PartySlotMachineState {
            members: initial.iter().map(member_from).collect(),
            is_spinning: false,
            show_result: false,
        };
        Ok(())
    }

    /// Cancels every pending stagger and settlement timer.
    pub fn shutdown(&mut self) {
        let dropped = self.timers.cancel_all();
        if dropped > 0 {
            log::debug!("Cancelled {} pending party timer(s)", dropped);
        }
        self.state.is_spinning = false;
        for member in &mut self.state.members {
            member.lane.is_spinning = false;
            member.champion.is_spinning = false;
            member.damage_type.is_spinning = false;
        }
    }
}

impl<R: Rng> Drop for PartySlotMachine<R> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
