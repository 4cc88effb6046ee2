// ---------------- Native audio (cpal) ----------------
//
// A sine drone routed through a gain stage and a feedback echo. The controller
// writes volume and reverb parameters into `MixParams`; the audio callback
// reads them once per buffer.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::Context;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SizedSample, StreamConfig};
use proximity_core::{AudioOutput, ReverbFilter, DEFAULT_MIN_REVERB_LEVEL, ROOM_LEVEL_MIN};

const DRONE_HZ: f32 = 110.0;
const DRONE_FIFTH_RATIO: f32 = 1.5;
const DRONE_AMPLITUDE: f32 = 0.25;
const ECHO_SECONDS: f32 = 0.23;
const ECHO_FEEDBACK: f32 = 0.6;
// Per-sample smoothing toward the target gain, avoids zipper noise
const GAIN_SMOOTHING: f32 = 0.002;

/// Parameter block shared between the controller thread and the audio callback.
#[derive(Clone, Copy, Debug)]
pub struct MixParams {
    pub volume: f32,
    pub reverb_level: f32,
    pub room: f32,
    pub user_preset: bool,
}

impl Default for MixParams {
    fn default() -> Self {
        Self {
            volume: 0.0,
            reverb_level: DEFAULT_MIN_REVERB_LEVEL,
            room: ROOM_LEVEL_MIN,
            user_preset: false,
        }
    }
}

/// Host handle implementing both the gain stage and the reverb filter.
#[derive(Clone, Default)]
pub struct SharedMix(Arc<Mutex<MixParams>>);

impl SharedMix {
    pub fn snapshot(&self) -> MixParams {
        *self.lock()
    }

    fn lock(&self) -> MutexGuard<'_, MixParams> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AudioOutput for SharedMix {
    fn set_volume(&mut self, volume: f32) {
        self.lock().volume = volume;
    }
    fn volume(&self) -> f32 {
        self.lock().volume
    }
}

impl ReverbFilter for SharedMix {
    fn set_user_preset(&mut self) {
        self.lock().user_preset = true;
    }
    fn set_reverb_level(&mut self, level: f32) {
        self.lock().reverb_level = level;
    }
    fn set_room(&mut self, room: f32) {
        self.lock().room = room;
    }
    fn reverb_level(&self) -> f32 {
        self.lock().reverb_level
    }
    fn room(&self) -> f32 {
        self.lock().room
    }
}

/// Millibels to linear amplitude.
pub fn millibels_to_gain(mb: f32) -> f32 {
    10f32.powf(mb / 2000.0)
}

pub struct DroneVoice {
    phase: f32,
    phase_fifth: f32,
    phase_inc: f32,
    gain: f32,
    echo: Vec<f32>,
    echo_pos: usize,
}

impl DroneVoice {
    pub fn new(sample_rate: f32) -> Self {
        let echo_len = ((ECHO_SECONDS * sample_rate) as usize).max(1);
        Self {
            phase: 0.0,
            phase_fifth: 0.0,
            phase_inc: 2.0 * std::f32::consts::PI * DRONE_HZ / sample_rate,
            gain: 0.0,
            echo: vec![0.0; echo_len],
            echo_pos: 0,
        }
    }

    pub fn next_sample(&mut self, params: &MixParams) -> f32 {
        let tau = 2.0 * std::f32::consts::PI;
        let raw = self.phase.sin() + 0.5 * self.phase_fifth.sin();
        self.phase = (self.phase + self.phase_inc) % tau;
        self.phase_fifth = (self.phase_fifth + self.phase_inc * DRONE_FIFTH_RATIO) % tau;

        self.gain += (params.volume - self.gain) * GAIN_SMOOTHING;
        let dry = raw * DRONE_AMPLITUDE * self.gain;

        // Reverb parameters only apply once the filter is in user mode
        let (wet, send) = if params.user_preset {
            (
                millibels_to_gain(params.reverb_level),
                millibels_to_gain(params.room),
            )
        } else {
            (0.0, 0.0)
        };
        let delayed = self.echo[self.echo_pos];
        self.echo[self.echo_pos] = dry * send + delayed * ECHO_FEEDBACK;
        self.echo_pos = (self.echo_pos + 1) % self.echo.len();

        (dry + delayed * wet).tanh()
    }
}

pub fn start_audio_output(mix: SharedMix) -> anyhow::Result<cpal::Stream> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .context("no default output device")?;
    let supported = device.default_output_config()?;
    let sample_format = supported.sample_format();
    let config: StreamConfig = supported.into();
    log::info!(
        "audio output: {} Hz, {} channels, {:?}",
        config.sample_rate.0,
        config.channels,
        sample_format
    );

    match sample_format {
        cpal::SampleFormat::F32 => build_stream::<f32>(&device, &config, mix),
        cpal::SampleFormat::I16 => build_stream::<i16>(&device, &config, mix),
        cpal::SampleFormat::U16 => build_stream::<u16>(&device, &config, mix),
        other => anyhow::bail!("unsupported sample format {other:?}"),
    }
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &StreamConfig,
    mix: SharedMix,
) -> anyhow::Result<cpal::Stream>
where
    T: Sample + FromSample<f32> + SizedSample,
{
    let channels = config.channels as usize;
    let mut voice = DroneVoice::new(config.sample_rate.0 as f32);

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            let params = mix.snapshot();
            for frame in data.chunks_mut(channels) {
                let value = T::from_sample(voice.next_sample(&params));
                for s in frame.iter_mut() {
                    *s = value;
                }
            }
        },
        |err| log::error!("audio stream error: {err}"),
        None,
    )?;
    stream.play()?;
    Ok(stream)
}
