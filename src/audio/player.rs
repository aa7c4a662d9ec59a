use std::sync::{Arc, Mutex};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, Stream, StreamConfig, SupportedStreamConfig, SupportedStreamConfigRange};
use crate::audio::synth::{Cue, Mixer};
use crate::error::{AudioError, AudioResult};

/// Live output stream feeding a shared mixer.
struct AudioOutput {
    _stream: Stream,
    mixer: Arc<Mutex<Mixer>>,
}

impl AudioOutput {
    fn open() -> AudioResult<Self> {
        let host = cpal::default_host();
        let device = host.default_output_device().ok_or(AudioError::NoDevice)?;
        let default = device
            .default_output_config()
            .map_err(|e| AudioError::Config(e.to_string()))?;
        let ranges = match device.supported_output_configs() {
            Ok(configs) => configs.collect::<Vec<_>>(),
            Err(e) => {
                log::warn!("Could not list output configs: {}", e);
                Vec::new()
            }
        };

        let config: StreamConfig = choose_output_config(default, ranges)?.config();
        let channels = config.channels as usize;
        let mixer = Arc::new(Mutex::new(Mixer::new(config.sample_rate.0 as f32)));
        let callback_mixer = Arc::clone(&mixer);
        let mut mono = Vec::new();

        let stream = device
            .build_output_stream(
                &config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    let frames = data.len() / channels.max(1);
                    mono.resize(frames, 0.0);
                    match callback_mixer.lock() {
                        Ok(mut mixer) => mixer.render(&mut mono),
                        Err(_) => mono.fill(0.0),
                    }
                    for (chunk, sample) in data.chunks_mut(channels.max(1)).zip(&mono) {
                        chunk.fill(*sample);
                    }
                },
                move |err| {
                    log::error!("Audio output stream error: {}", err);
                },
                None,
            )
            .map_err(|e| AudioError::Stream(e.to_string()))?;

        stream.play().map_err(|e| AudioError::Stream(e.to_string()))?;

        log::info!(
            "Audio output opened: {} channel(s) @ {}Hz",
            config.channels,
            config.sample_rate.0
        );

        Ok(Self {
            _stream: stream,
            mixer,
        })
    }
}

/// Picks an F32 output config. The device default wins when it is already
/// F32; otherwise the first F32 range, at the default rate if it covers it.
pub(crate) fn choose_output_config(
    default: SupportedStreamConfig,
    ranges: impl IntoIterator<Item = SupportedStreamConfigRange>,
) -> AudioResult<SupportedStreamConfig> {
    if default.sample_format() == SampleFormat::F32 {
        return Ok(default);
    }

    let rate = default.sample_rate();
    let mut fallback = None;
    for range in ranges {
        if range.sample_format() != SampleFormat::F32 {
            continue;
        }
        if range.min_sample_rate() <= rate && range.max_sample_rate() >= rate {
            return Ok(range.with_sample_rate(rate));
        }
        if fallback.is_none() {
            fallback = Some(range.with_max_sample_rate());
        }
    }

    fallback.ok_or_else(|| AudioError::UnsupportedFormat(format!("{:?}", default.sample_format())))
}

/// Plays cues unless muted. Without an output device it stays silent.
pub struct SoundBoard {
    output: Option<AudioOutput>,
    muted: bool,
}

impl SoundBoard {
    /// Opens the default output device, falling back to silence on failure.
    pub fn new(muted: bool) -> Self {
        let output = match AudioOutput::open() {
            Ok(output) => Some(output),
            Err(e) => {
                log::warn!("Sound disabled: {}", e);
                None
            }
        };
        Self { output, muted }
    }

    /// A board that never makes a sound.
    pub fn silent(muted: bool) -> Self {
        Self { output: None, muted }
    }

    pub fn has_output(&self) -> bool {
        self.output.is_some()
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if muted {
            self.with_mixer(Mixer::stop_all);
        }
    }

    pub fn play(&self, cue: Cue) {
        if self.muted {
            return;
        }
        self.with_mixer(|mixer| mixer.play(cue));
    }

    pub fn start_spin(&self) {
        self.play(Cue::Spin);
    }

    pub fn stop_spin(&self) {
        self.with_mixer(Mixer::release_spin);
    }

    fn with_mixer(&self, f: impl FnOnce(&mut Mixer)) {
        if let Some(output) = &self.output {
            match output.mixer.lock() {
                Ok(mut mixer) => f(&mut mixer),
                Err(e) => log::error!("Audio mixer lock poisoned: {}", e),
            }
        }
    }
}
