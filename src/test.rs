use std::collections::HashSet;
use std::fs;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;

use cpal::{SampleFormat, SampleRate, SupportedBufferSize, SupportedStreamConfig, SupportedStreamConfigRange};

use crate::audio::player::choose_output_config;
use crate::audio::{Cue, Mixer, SoundBoard};
use crate::error::AudioError;
use crate::gui::LolSlotApp;
use crate::gui::app::{close_cue, settle_cue};
use crate::data::{CHAMPIONS, champion_index, find_champion};
use crate::engine::{
    PartySlotMachine, PartySpinOutcome, SlotMachine, SpinOutcome, SpinTiming, TimerQueue, distinct_indices,
    draw_party,
};
use crate::error::SlotError;
use crate::models::{
    AppMode, AppSettings, DamageType, Dimension, HistoryEntry, HistoryLog, Lane, MAX_HISTORY, PartyVariant, Preferences,
    ThemeName,
};
use crate::utils::assets::{champion_image_url, champion_splash_url};
use crate::utils::color::hsl_to_rgb;
use crate::utils::settings_persistence::save_app_settings;
use crate::utils::{HistoryStore, fallback_color, format_relative, load_app_settings, load_history, load_muted, parse_hex_color};

const SPIN: Duration = Duration::from_millis(2000);
const STAGGER: Duration = Duration::from_millis(200);

fn timing() -> SpinTiming {
    SpinTiming {
        spin_duration: SPIN,
        stagger_delay: STAGGER,
    }
}

fn solo(seed: u64) -> SlotMachine<StdRng> {
    SlotMachine::with_rng(timing(), StdRng::seed_from_u64(seed))
}

fn party(count: usize, variant: PartyVariant, seed: u64) -> PartySlotMachine<StdRng> {
    PartySlotMachine::with_rng(count, variant, timing(), StdRng::seed_from_u64(seed))
        .expect("valid party size")
}

fn entry(champion: &str, timestamp: u64) -> HistoryEntry {
    HistoryEntry {
        champion: champion.to_string(),
        lane: "MID".to_string(),
        damage_type: "AP".to_string(),
        timestamp,
    }
}

fn chi_square(counts: &[usize], total: usize) -> f64 {
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

#[test]
fn test_timer_queue_fires_in_deadline_order() {
    let t0 = Instant::now();
    let mut timers = TimerQueue::new();
    timers.schedule(t0, Duration::from_millis(100), "late");
    timers.schedule(t0, Duration::from_millis(50), "first");
    timers.schedule(t0, Duration::from_millis(50), "second");

    assert!(timers.poll(t0 + Duration::from_millis(49)).is_empty());
    assert_eq!(timers.next_deadline(), Some(t0 + Duration::from_millis(50)));
    assert_eq!(timers.poll(t0 + Duration::from_millis(100)), vec!["first", "second", "late"]);
    assert!(timers.is_empty());
}

#[test]
fn test_timer_queue_cancel() {
    let t0 = Instant::now();
    let mut timers = TimerQueue::new();
    let keep = timers.schedule(t0, Duration::from_millis(10), 1);
    let dropped = timers.schedule(t0, Duration::from_millis(10), 2);

    assert!(timers.cancel(dropped));
    assert!(!timers.cancel(dropped), "Cancelling twice should report nothing pending");
    assert_eq!(timers.len(), 1);
    assert_eq!(timers.poll(t0 + Duration::from_secs(1)), vec![1]);
    assert!(!timers.cancel(keep), "A fired timer is no longer pending");

    timers.schedule(t0, Duration::from_millis(10), 3);
    timers.schedule(t0, Duration::from_millis(20), 4);
    assert_eq!(timers.cancel_all(), 2);
    assert!(timers.poll(t0 + Duration::from_secs(1)).is_empty());
}

#[test]
fn test_solo_spin_settles_once_after_duration() {
    let mut machine = solo(1);
    let t0 = Instant::now();

    assert!(!machine.is_spinning());
    assert_eq!(machine.spin(t0), SpinOutcome::Started);

    let state = machine.state();
    assert!(state.lane.is_spinning && state.champion.is_spinning && state.damage_type.is_spinning);
    assert!(!machine.show_result());

    assert!(machine.tick(t0 + SPIN - Duration::from_millis(1)).is_none());
    assert!(machine.is_spinning(), "Reels should still be moving before the deadline");

    let result = machine.tick(t0 + SPIN).expect("spin should settle at the deadline");
    assert!(!machine.is_spinning());
    assert!(machine.show_result());
    assert_eq!(machine.state().lane.current_value, Some(result.lane));
    assert_eq!(machine.state().champion.current_value, Some(result.champion));
    assert_eq!(machine.state().damage_type.current_value, Some(result.damage_type));

    let selected = machine.selected_indices();
    assert_eq!(Lane::ALL[selected.lane], result.lane);
    assert_eq!(CHAMPIONS[selected.champion].id, result.champion.id);
    assert_eq!(DamageType::ALL[selected.damage_type], result.damage_type);

    assert!(machine.tick(t0 + SPIN * 10).is_none(), "A spin settles exactly once");
}

#[test]
fn test_solo_spin_ignored_while_spinning() {
    let mut machine = solo(2);
    let t0 = Instant::now();

    assert_eq!(machine.spin(t0), SpinOutcome::Started);
    let deadline = machine.next_deadline();
    assert_eq!(machine.spin(t0 + Duration::from_millis(500)), SpinOutcome::AlreadySpinning);
    assert_eq!(machine.next_deadline(), deadline, "A refused spin must not reschedule");

    let mut completions = 0;
    for step in 0..=30 {
        if machine.tick(t0 + Duration::from_millis(step * 100)).is_some() {
            completions += 1;
        }
    }
    assert_eq!(completions, 1);
}

#[test]
fn test_solo_spin_refused_when_all_disabled() {
    let mut machine = solo(3);
    let before = *machine.state();

    machine.toggle(Dimension::Lane);
    machine.toggle(Dimension::Champion);
    machine.toggle(Dimension::DamageType);
    assert!(machine.all_disabled());

    assert_eq!(machine.spin(Instant::now()), SpinOutcome::AllDisabled);
    assert!(!machine.is_spinning());
    assert!(machine.next_deadline().is_none());
    assert_eq!(machine.state().lane.current_value, before.lane.current_value);
    assert_eq!(machine.state().champion.current_value, before.champion.current_value);
}

#[test]
fn test_solo_spin_in_flight_wins_over_all_disabled() {
    let mut machine = solo(8);
    let t0 = Instant::now();
    assert_eq!(machine.spin(t0), SpinOutcome::Started);

    machine.toggle(Dimension::Lane);
    machine.toggle(Dimension::Champion);
    machine.toggle(Dimension::DamageType);
    assert_eq!(machine.spin(t0 + Duration::from_millis(100)), SpinOutcome::AlreadySpinning);

    assert!(machine.tick(t0 + SPIN).is_some());
    assert_eq!(machine.spin(t0 + SPIN * 2), SpinOutcome::AllDisabled);
}

#[test]
fn test_solo_disabled_reel_keeps_its_value() {
    let mut machine = solo(4);
    let champion_before = machine.state().champion.current_value;
    machine.toggle(Dimension::Champion);
    assert!(!machine.state().champion.enabled);

    let t0 = Instant::now();
    for round in 0..20u32 {
        let start = t0 + SPIN * round;
        assert_eq!(machine.spin(start), SpinOutcome::Started);
        assert!(!machine.state().champion.is_spinning);
        assert!(machine.state().lane.is_spinning);

        let result = machine.tick(start + SPIN).expect("spin should settle");
        assert_eq!(Some(result.champion), champion_before);
        machine.hide_result();
    }
}

#[test]
fn test_solo_toggle_mid_spin_only_affects_next_spin() {
    let mut machine = solo(5);
    let t0 = Instant::now();
    machine.spin(t0);
    machine.toggle(Dimension::Lane);

    assert!(machine.state().lane.is_spinning, "The running spin keeps its reels");
    assert!(machine.tick(t0 + SPIN).is_some());
    assert!(!machine.state().lane.enabled);
}

#[test]
fn test_solo_shutdown_cancels_pending_settlement() {
    let mut machine = solo(6);
    let t0 = Instant::now();
    let before = *machine.state();

    machine.spin(t0);
    machine.shutdown();

    assert!(!machine.is_spinning());
    assert!(machine.next_deadline().is_none());
    assert!(machine.tick(t0 + SPIN * 2).is_none());
    assert!(!machine.show_result());
    assert_eq!(machine.state().champion.current_value, before.champion.current_value);

    assert_eq!(machine.spin(t0 + SPIN * 3), SpinOutcome::Started, "Machine is usable after shutdown");
}

#[test]
fn test_solo_drop_while_spinning() {
    let mut machine = solo(7);
    machine.spin(Instant::now());
    drop(machine);
}

#[test]
fn test_solo_distribution_is_uniform() {
    let mut machine = solo(42);
    let t0 = Instant::now();
    let spins = 17_200;
    let mut lanes = [0usize; 5];
    let mut champions = vec![0usize; CHAMPIONS.len()];
    let mut damage_types = [0usize; 2];

    for round in 0..spins {
        let start = t0 + SPIN * round as u32;
        machine.spin(start);
        let result = machine.tick(start + SPIN).expect("spin should settle");
        lanes[Lane::ALL.iter().position(|l| *l == result.lane).unwrap()] += 1;
        champions[champion_index(result.champion.id).unwrap()] += 1;
        damage_types[DamageType::ALL.iter().position(|d| *d == result.damage_type).unwrap()] += 1;
    }

    let lane_chi = chi_square(&lanes, spins);
    let champion_chi = chi_square(&champions, spins);
    let damage_chi = chi_square(&damage_types, spins);
    println!("Lane counts {:?}, chi-square {:.2}", lanes, lane_chi);
    println!("Champion chi-square {:.2}", champion_chi);
    println!("Damage counts {:?}, chi-square {:.2}", damage_types, damage_chi);

    // p = 0.001 critical values for 4, 171 and 1 degrees of freedom
    assert!(lane_chi < 18.47, "Lane draws look biased: {:?}", lanes);
    assert!(champion_chi < 234.0, "Champion draws look biased, chi-square {:.2}", champion_chi);
    assert!(damage_chi < 10.83, "Damage draws look biased: {:?}", damage_types);
}

#[test]
fn test_party_random_lanes_are_distinct() {
    let t0 = Instant::now();
    for count in 2..=5 {
        let mut machine = party(count, PartyVariant::RandomLanes, count as u64);
        for round in 0..200u32 {
            let start = t0 + Duration::from_secs(10) * round;
            assert_eq!(machine.spin(start), Ok(PartySpinOutcome::Started));
            let results = machine.tick(start + machine.settle_delay()).expect("party should settle");
            assert_eq!(results.len(), count);

            let lanes: HashSet<_> = results.iter().map(|r| r.lane).collect();
            let champions: HashSet<_> = results.iter().map(|r| r.champion.id).collect();
            assert_eq!(lanes.len(), count, "Duplicate lane in {:?}", results);
            assert_eq!(champions.len(), count, "Duplicate champion in {:?}", results);
        }
    }
}

#[test]
fn test_party_fixed_lanes_follow_role_order() {
    let mut rng = StdRng::seed_from_u64(9);
    for count in 2..=5 {
        let results = draw_party(&mut rng, count, PartyVariant::FixedLanes).unwrap();
        let lanes: Vec<_> = results.iter().map(|r| r.lane).collect();
        assert_eq!(lanes, Lane::ALL[..count].to_vec());
    }
}

#[test]
fn test_party_stagger_and_settlement_timing() {
    let mut machine = party(3, PartyVariant::RandomLanes, 11);
    let t0 = Instant::now();
    assert_eq!(machine.settle_delay(), SPIN + STAGGER * 2);

    machine.spin(t0).unwrap();
    assert!(machine.is_spinning());

    assert!(machine.tick(t0).is_none());
    assert!(machine.members()[0].champion.is_spinning);
    assert!(!machine.members()[1].champion.is_spinning);

    assert!(machine.tick(t0 + STAGGER).is_none());
    assert!(machine.members()[1].champion.is_spinning);
    assert!(machine.members()[1].lane.is_spinning);
    assert!(!machine.members()[2].champion.is_spinning);

    assert!(machine.tick(t0 + STAGGER * 2).is_none());
    assert!(machine.members()[2].damage_type.is_spinning);

    assert!(machine.tick(t0 + SPIN + STAGGER * 2 - Duration::from_millis(1)).is_none());
    assert!(machine.is_spinning());

    let results = machine.tick(t0 + SPIN + STAGGER * 2).expect("party should settle");
    assert_eq!(results.len(), 3);
    assert!(!machine.is_spinning());
    assert!(machine.show_result());
    assert!(machine.members().iter().all(|m| !m.champion.is_spinning && !m.lane.is_spinning));
    assert_eq!(machine.results(), results);
}

#[test]
fn test_party_fixed_lanes_do_not_spin_lanes() {
    let mut machine = party(5, PartyVariant::FixedLanes, 12);
    let t0 = Instant::now();
    machine.spin(t0).unwrap();
    machine.tick(t0 + STAGGER * 4);

    assert!(machine.members().iter().all(|m| m.champion.is_spinning && !m.lane.is_spinning));
}

#[test]
fn test_party_spin_ignored_while_spinning() {
    let mut machine = party(4, PartyVariant::FixedLanes, 13);
    let t0 = Instant::now();
    assert_eq!(machine.spin(t0), Ok(PartySpinOutcome::Started));
    assert_eq!(machine.spin(t0 + STAGGER), Ok(PartySpinOutcome::AlreadySpinning));

    let settle = machine.settle_delay();
    assert!(machine.tick(t0 + settle).is_some());
    assert!(machine.tick(t0 + settle * 3).is_none());
}

#[test]
fn test_party_rejects_invalid_member_count() {
    let mut machine = party(4, PartyVariant::RandomLanes, 14);
    let before = machine.results();

    assert_eq!(
        machine.set_member_count(6),
        Err(SlotError::InvalidMemberCount {
            requested: 6,
            min: 2,
            max: 5
        })
    );
    assert!(machine.set_member_count(1).is_err());
    assert_eq!(machine.member_count(), 4);
    assert_eq!(machine.results(), before);

    assert!(PartySlotMachine::new(0, PartyVariant::FixedLanes, timing()).is_err());
}

#[test]
fn test_party_resize_cancels_spin_in_flight() {
    let mut machine = party(5, PartyVariant::RandomLanes, 15);
    let t0 = Instant::now();
    machine.spin(t0).unwrap();
    machine.tick(t0 + STAGGER);

    machine.set_member_count(3).unwrap();
    assert_eq!(machine.member_count(), 3);
    assert!(!machine.is_spinning());
    assert!(machine.next_deadline().is_none());
    assert!(machine.tick(t0 + Duration::from_secs(60)).is_none());
    assert!(!machine.show_result());
}

#[test]
fn test_party_variant_change_and_shutdown() {
    let mut machine = party(2, PartyVariant::FixedLanes, 16);
    let t0 = Instant::now();
    machine.spin(t0).unwrap();
    machine.set_variant(PartyVariant::RandomLanes);
    assert_eq!(machine.variant(), PartyVariant::RandomLanes);
    assert!(!machine.is_spinning());

    machine.spin(t0).unwrap();
    machine.shutdown();
    assert!(machine.tick(t0 + Duration::from_secs(60)).is_none());
    assert!(machine.members().iter().all(|m| !m.champion.is_spinning));
}

#[test]
fn test_distinct_indices_needs_enough_candidates() {
    let mut rng = StdRng::seed_from_u64(17);
    assert_eq!(
        distinct_indices(&mut rng, 3, 4),
        Err(SlotError::NotEnoughCandidates {
            requested: 4,
            available: 3
        })
    );

    let mut all = distinct_indices(&mut rng, 5, 5).unwrap();
    all.sort();
    assert_eq!(all, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_champion_roster() {
    assert_eq!(CHAMPIONS.len(), 172);
    let ids: HashSet<_> = CHAMPIONS.iter().map(|c| c.id).collect();
    assert_eq!(ids.len(), CHAMPIONS.len(), "Champion ids must be unique");

    let ahri = find_champion("Ahri").expect("Ahri should be in the roster");
    assert_eq!(ahri.name, "Ahri");
    assert_eq!(champion_index("Ahri").map(|i| CHAMPIONS[i].id), Some("Ahri"));
    assert!(find_champion("NotAChampion").is_none());

    for champion in CHAMPIONS.iter() {
        assert!(parse_hex_color(champion.color).is_some(), "Bad color for {}", champion.id);
    }
}

#[test]
fn test_lane_and_damage_ids() {
    for lane in Lane::ALL {
        assert_eq!(Lane::from_id(lane.id()), Some(lane));
    }
    assert_eq!(DamageType::from_id("AP"), Some(DamageType::Ap));
    assert_eq!(DamageType::from_id("ap"), None);
    assert_eq!(Lane::from_id("BOT"), None);
}

#[test]
fn test_history_log_keeps_newest_five() {
    let mut history = HistoryLog::new();
    for timestamp in 1..=6 {
        history.append(entry("Ahri", timestamp));
    }

    assert_eq!(history.len(), MAX_HISTORY);
    let stamps: Vec<_> = history.entries().iter().map(|e| e.timestamp).collect();
    assert_eq!(stamps, vec![6, 5, 4, 3, 2]);

    history.clear();
    assert!(history.is_empty());
}

#[test]
fn test_history_entry_json_shape() {
    let value = serde_json::to_value(entry("Zoe", 1700000000000)).unwrap();
    assert_eq!(value["champion"], "Zoe");
    assert_eq!(value["lane"], "MID");
    assert_eq!(value["type"], "AP");
    assert_eq!(value["timestamp"], 1700000000000u64);
}

#[test]
fn test_history_store_persists() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = HistoryStore::load(dir.path());
    assert!(store.entries().is_empty());

    for timestamp in 1..=6 {
        store.append(entry("Zyra", timestamp));
    }

    let reloaded = HistoryStore::load(dir.path());
    assert_eq!(reloaded.log(), store.log());
    assert_eq!(reloaded.entries()[0].timestamp, 6);

    store.clear();
    assert!(load_history(dir.path()).is_empty());
}

#[test]
fn test_history_store_records_spin_result() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = HistoryStore::load(dir.path());
    let mut machine = solo(18);
    let t0 = Instant::now();
    machine.spin(t0);
    let result = machine.tick(t0 + SPIN).unwrap();

    store.record(&result);
    let recorded = &store.entries()[0];
    assert_eq!(recorded.champion, result.champion.id);
    assert_eq!(recorded.lane, result.lane.id());
    assert_eq!(recorded.damage_type, result.damage_type.id());
    assert!(recorded.timestamp > 0);
}

#[test]
fn test_history_corrupt_or_oversized_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spin_history.json");

    fs::write(&path, "{ not json").unwrap();
    assert!(load_history(dir.path()).is_empty());

    let seven: Vec<_> = (0..7).map(|i| entry("Ahri", 100 - i)).collect();
    fs::write(&path, serde_json::to_string(&seven).unwrap()).unwrap();
    let history = load_history(dir.path());
    assert_eq!(history.len(), MAX_HISTORY);
    assert_eq!(history.entries()[0].timestamp, 100);
}

#[test]
fn test_muted_flag_parsing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sound_muted");

    assert!(!load_muted(dir.path()), "Missing file means sound on");

    fs::write(&path, "true").unwrap();
    assert!(load_muted(dir.path()));
    fs::write(&path, "false").unwrap();
    assert!(!load_muted(dir.path()));
    fs::write(&path, "yes").unwrap();
    assert!(!load_muted(dir.path()));
}

#[test]
fn test_preferences_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut prefs = Preferences::load(dir.path());
    assert!(!prefs.is_muted());
    assert_eq!(prefs.settings(), &AppSettings::default());

    assert!(prefs.toggle_muted());
    prefs.set_theme(ThemeName::OceanCalm);
    prefs.update_settings(|settings| settings.set_member_count(3));

    let reloaded = Preferences::load(dir.path());
    assert!(reloaded.is_muted());
    assert_eq!(reloaded.theme(), ThemeName::OceanCalm);
    assert_eq!(reloaded.settings().member_count, 3);
    assert_eq!(fs::read_to_string(dir.path().join("sound_muted")).unwrap(), "true");
}

#[test]
fn test_settings_clamping() {
    let mut settings = AppSettings::default();
    settings.set_spin_duration_ms(50);
    assert_eq!(settings.spin_duration_ms, 500);
    settings.set_spin_duration_ms(20_000);
    assert_eq!(settings.spin_duration_ms, 10_000);
    settings.set_stagger_delay_ms(5000);
    assert_eq!(settings.stagger_delay_ms, 1000);
    settings.set_member_count(9);
    assert_eq!(settings.member_count, 5);
    settings.set_member_count(0);
    assert_eq!(settings.member_count, 2);

    assert_eq!(AppSettings::default().timing(), SpinTiming::default());
}

#[test]
fn test_settings_file_is_sanitized() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("settings.json"), r#"{"spin_duration_ms": 20, "member_count": 12}"#).unwrap();

    let settings = load_app_settings(dir.path());
    assert_eq!(settings.spin_duration_ms, 500);
    assert_eq!(settings.member_count, 5);
    assert_eq!(settings.stagger_delay_ms, 200);
    assert_eq!(settings.theme, ThemeName::default());

    fs::write(dir.path().join("settings.json"), "[1, 2").unwrap();
    assert_eq!(load_app_settings(dir.path()), AppSettings::default());

    let mut custom = AppSettings::default();
    custom.party_variant = PartyVariant::RandomLanes;
    save_app_settings(dir.path(), &custom).unwrap();
    assert_eq!(load_app_settings(dir.path()), custom);
}

#[test]
fn test_color_helpers() {
    assert_eq!(parse_hex_color("#ff4444"), Some([255, 68, 68]));
    assert_eq!(parse_hex_color("66ccff"), Some([102, 204, 255]));
    assert_eq!(parse_hex_color("#fff"), None);
    assert_eq!(parse_hex_color("#gg0000"), None);

    assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), [255, 0, 0]);
    assert_eq!(hsl_to_rgb(-240.0, 1.0, 0.5), hsl_to_rgb(120.0, 1.0, 0.5));

    let color = fallback_color("NewChampion");
    assert_eq!(color, fallback_color("NewChampion"));
    assert!(parse_hex_color(&color).is_some());
    assert_ne!(fallback_color("Ahri"), fallback_color("Zyra"));
}

#[test]
fn test_asset_urls() {
    assert_eq!(
        champion_image_url("https://ddragon.leagueoflegends.com/", "16.2.1", "Ahri"),
        "https://ddragon.leagueoflegends.com/cdn/16.2.1/img/champion/Ahri.png"
    );
    assert_eq!(
        champion_splash_url("https://ddragon.leagueoflegends.com", "MissFortune", 0),
        "https://ddragon.leagueoflegends.com/cdn/img/champion/splash/MissFortune_0.jpg"
    );
}

#[test]
fn test_format_relative() {
    assert_eq!(format_relative(0, 30_000), "just now");
    assert_eq!(format_relative(0, 120_000), "2m ago");
    assert_eq!(format_relative(0, 2 * 3_600_000), "2h ago");
    assert_eq!(format_relative(0, 3 * 86_400_000), "3d ago");
    assert_eq!(format_relative(5_000, 1_000), "just now");
}

#[test]
fn test_mixer_click_is_audible_then_finishes() {
    let mut mixer = Mixer::new(44_100.0);
    mixer.play(Cue::Click);
    assert_eq!(mixer.active_voices(), 1);

    let mut buffer = vec![0.0f32; 2205];
    mixer.render(&mut buffer);
    let peak = buffer.iter().fold(0.0f32, |peak, s| peak.max(s.abs()));
    assert!(peak > 0.01, "Click should be audible, peak {}", peak);
    assert!(buffer.iter().all(|s| (-1.0..=1.0).contains(s)));

    let mut tail = vec![0.0f32; 8820];
    mixer.render(&mut tail);
    assert_eq!(mixer.active_voices(), 0);
}

#[test]
fn test_mixer_spin_loop_until_released() {
    let mut mixer = Mixer::new(8_000.0);
    mixer.play(Cue::Spin);
    mixer.play(Cue::Spin);
    assert_eq!(mixer.active_voices(), 1, "Only one spin loop at a time");

    let mut buffer = vec![0.0f32; 24_000];
    mixer.render(&mut buffer);
    assert_eq!(mixer.active_voices(), 1, "Spin loop sustains");

    mixer.release_spin();
    let mut tail = vec![0.0f32; 4_000];
    mixer.render(&mut tail);
    assert_eq!(mixer.active_voices(), 0);

    mixer.play(Cue::Win);
    assert_eq!(mixer.active_voices(), 4);
    mixer.stop_all();
    assert_eq!(mixer.active_voices(), 0);
}

#[test]
fn test_silent_sound_board_mute() {
    let mut sound = SoundBoard::silent(false);
    assert!(!sound.has_output());
    sound.play(Cue::Click);
    sound.start_spin();
    sound.stop_spin();
    sound.set_muted(true);
    assert!(sound.is_muted());
    sound.play(Cue::Win);
}

fn output_range(format: SampleFormat, min: u32, max: u32) -> SupportedStreamConfigRange {
    SupportedStreamConfigRange::new(2, SampleRate(min), SampleRate(max), SupportedBufferSize::Unknown, format)
}

#[test]
fn test_output_config_prefers_f32() {
    let default_f32 = SupportedStreamConfig::new(2, SampleRate(48_000), SupportedBufferSize::Unknown, SampleFormat::F32);
    let chosen = choose_output_config(default_f32, Vec::new()).unwrap();
    assert_eq!(chosen.sample_format(), SampleFormat::F32);

    // I16 default with an F32 range covering the default rate
    let default_i16 = || SupportedStreamConfig::new(2, SampleRate(48_000), SupportedBufferSize::Unknown, SampleFormat::I16);
    let ranges = vec![
        output_range(SampleFormat::I16, 8_000, 192_000),
        output_range(SampleFormat::F32, 44_100, 96_000),
    ];
    let chosen = choose_output_config(default_i16(), ranges).unwrap();
    assert_eq!(chosen.sample_format(), SampleFormat::F32);
    assert_eq!(chosen.sample_rate(), SampleRate(48_000));

    // F32 only at other rates
    let chosen = choose_output_config(default_i16(), vec![output_range(SampleFormat::F32, 8_000, 22_050)]).unwrap();
    assert_eq!(chosen.sample_format(), SampleFormat::F32);
    assert_eq!(chosen.sample_rate(), SampleRate(22_050));

    let refused = choose_output_config(default_i16(), vec![output_range(SampleFormat::I16, 8_000, 192_000)]);
    assert!(matches!(refused, Err(AudioError::UnsupportedFormat(_))));
}

#[test]
fn test_party_spin_again_from_result() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = Preferences::load(dir.path());
    let history = HistoryStore::load(dir.path());
    let mut app = LolSlotApp::new(prefs, history, SoundBoard::silent(false)).unwrap();
    app.set_mode(AppMode::Party);

    let t0 = Instant::now();
    assert!(app.spin_party(t0));
    assert!(!app.spin_party(t0 + STAGGER), "A running party spin is not restarted");

    let settled = t0 + app.party.settle_delay();
    assert!(app.party.tick(settled).is_some());
    assert!(app.party.show_result());

    assert!(app.spin_party_again(settled + Duration::from_secs(1)));
    assert!(!app.party.show_result());
    assert!(app.party.is_spinning());
}

#[test]
fn test_result_cues_per_mode() {
    assert_eq!(settle_cue(AppMode::Solo), Cue::Result);
    assert_eq!(close_cue(AppMode::Solo), None);
    assert_eq!(settle_cue(AppMode::Party), Cue::Win);
    assert_eq!(close_cue(AppMode::Party), Some(Cue::Result));
}
