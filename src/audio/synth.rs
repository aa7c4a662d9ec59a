//! Tone synthesis for the sound effects.
//!
//! Every cue is a handful of oscillator voices with an exponential gain
//! envelope. The mixer renders them into mono `f32` frames and is shared
//! with the output callback.

use std::f32::consts::TAU;

/// Gain that envelopes decay towards.
const FLOOR_GAIN: f32 = 0.01;
/// Fade applied when the spin loop is stopped.
const SPIN_RELEASE_SECS: f32 = 0.2;

/// Named sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Short beep when the spin button is pressed.
    Click,
    /// Rising buzz that runs until `Mixer::release_spin`.
    Spin,
    /// Ascending C-major arpeggio when a party settles.
    Win,
    /// Bell on a solo reveal or when the party result closes.
    Result,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Sawtooth,
}

impl Waveform {
    fn sample(self, phase: f32) -> f32 {
        match self {
            Waveform::Sine => (phase * TAU).sin(),
            Waveform::Sawtooth => 2.0 * phase - 1.0,
        }
    }
}

/// A single oscillator with pitch ramp, gain envelope and optional low-pass.
#[derive(Debug, Clone)]
pub struct Voice {
    pub waveform: Waveform,
    pub freq_start: f32,
    pub freq_end: f32,
    /// Seconds over which the frequency glides from start to end.
    pub freq_ramp: f32,
    pub gain: f32,
    /// Exponential decay to `FLOOR_GAIN` over this many seconds; `None` holds the gain.
    pub decay: Option<f32>,
    /// Seconds of silence before the voice starts.
    pub delay: f32,
    /// Total audible length; `None` sustains until released.
    pub duration: Option<f32>,
    /// One-pole low-pass cutoff in Hz.
    pub lowpass: Option<f32>,
    /// Marks the spin loop so it can be released.
    pub looping: bool,
    elapsed: f32,
    phase: f32,
    filter_state: f32,
    release: Option<(f32, f32)>,
}

impl Voice {
    pub fn tone(waveform: Waveform, freq: f32, gain: f32, length: f32) -> Self {
        Self {
            waveform,
            freq_start: freq,
            freq_end: freq,
            freq_ramp: 0.0,
            gain,
            decay: Some(length),
            delay: 0.0,
            duration: Some(length),
            lowpass: None,
            looping: false,
            elapsed: 0.0,
            phase: 0.0,
            filter_state: 0.0,
            release: None,
        }
    }

    pub fn delayed(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    fn frequency(&self, t: f32) -> f32 {
        if self.freq_ramp <= 0.0 || t >= self.freq_ramp {
            self.freq_end
        } else {
            self.freq_start + (self.freq_end - self.freq_start) * (t / self.freq_ramp)
        }
    }

    fn envelope(&self, t: f32) -> f32 {
        let base = match self.decay {
            Some(decay) if decay > 0.0 => self.gain * (FLOOR_GAIN / self.gain).powf((t / decay).min(1.0)),
            _ => self.gain,
        };
        match self.release {
            Some((started, length)) => {
                let progress = ((t - started) / length).clamp(0.0, 1.0);
                base * (FLOOR_GAIN / self.gain).powf(progress)
            }
            None => base,
        }
    }

    /// True once the voice can produce no more sound.
    pub fn is_finished(&self) -> bool {
        let t = self.elapsed - self.delay;
        if let Some((started, length)) = self.release {
            return t >= started + length;
        }
        match self.duration {
            Some(duration) => t >= duration,
            None => false,
        }
    }

    /// Fades the voice out over `length` seconds from now.
    pub fn release(&mut self, length: f32) {
        if self.release.is_none() {
            let t = (self.elapsed - self.delay).max(0.0);
            self.release = Some((t, length));
        }
    }

    fn next_sample(&mut self, sample_rate: f32) -> f32 {
        let dt = 1.0 / sample_rate;
        let t = self.elapsed - self.delay;
        self.elapsed += dt;
        if t < 0.0 || self.is_finished() {
            return 0.0;
        }

        let freq = self.frequency(t);
        let mut sample = self.waveform.sample(self.phase);
        self.phase = (self.phase + freq * dt).fract();

        if let Some(cutoff) = self.lowpass {
            let rc = 1.0 / (TAU * cutoff);
            let alpha = dt / (rc + dt);
            self.filter_state += alpha * (sample - self.filter_state);
            sample = self.filter_state;
        }

        sample * self.envelope(t)
    }
}

/// Voices making up `cue`.
pub fn cue_voices(cue: Cue) -> Vec<Voice> {
    match cue {
        Cue::Click => vec![Voice::tone(Waveform::Sine, 800.0, 0.3, 0.1)],
        Cue::Spin => vec![Voice {
            freq_start: 200.0,
            freq_end: 400.0,
            freq_ramp: 2.0,
            decay: None,
            duration: None,
            lowpass: Some(1000.0),
            looping: true,
            ..Voice::tone(Waveform::Sawtooth, 200.0, 0.15, 0.0)
        }],
        Cue::Win => [523.25, 659.25, 783.99, 1046.50]
            .iter()
            .enumerate()
            .map(|(i, &freq)| Voice::tone(Waveform::Sine, freq, 0.4, 0.5).delayed(i as f32 * 0.15))
            .collect(),
        Cue::Result => (1..=3)
            .map(|harmonic| {
                let harmonic = harmonic as f32;
                Voice::tone(Waveform::Sine, 800.0 * harmonic, 0.3 / harmonic, 1.5)
            })
            .collect(),
    }
}

/// Sums active voices into mono frames.
#[derive(Debug, Clone)]
pub struct Mixer {
    sample_rate: f32,
    voices: Vec<Voice>,
}

impl Mixer {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            voices: Vec::new(),
        }
    }

    pub fn play(&mut self, cue: Cue) {
        if cue == Cue::Spin {
            // Only one spin loop at a time.
            self.voices.retain(|voice| !voice.looping);
        }
        self.voices.extend(cue_voices(cue));
    }

    pub fn release_spin(&mut self) {
        for voice in self.voices.iter_mut().filter(|voice| voice.looping) {
            voice.release(SPIN_RELEASE_SECS);
        }
    }

    pub fn stop_all(&mut self) {
        self.voices.clear();
    }

    pub fn active_voices(&self) -> usize {
        self.voices.len()
    }

    /// Overwrites `out` with the next frames and drops finished voices.
    pub fn render(&mut self, out: &mut [f32]) {
        let sample_rate = self.sample_rate;
        for frame in out.iter_mut() {
            let mixed: f32 = self.voices.iter_mut().map(|voice| voice.next_sample(sample_rate)).sum();
            *frame = mixed.clamp(-1.0, 1.0);
        }
        self.voices.retain(|voice| !voice.is_finished());
    }
}
