pub mod synth;
pub mod player;

pub use synth::{Cue, Mixer, Voice, Waveform, cue_voices};
pub use player::SoundBoard;
