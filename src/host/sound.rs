use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SizedSample};
use log::error;

const TONE_HZ: f32 = 440.0;

/// A 440Hz tone on the default output device, audible only while gated on.
///
/// The stream stays open for the lifetime of the value; the interpreter loop
/// only flips the gate.
pub struct Sound {
    gate: Arc<AtomicBool>,
    _stream: cpal::Stream,
}

impl Sound {
    pub fn new() -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| anyhow!("no output device available"))?;
        let supported_config = device
            .default_output_config()
            .context("error while querying output config")?;
        let sample_format = supported_config.sample_format();
        let config: cpal::StreamConfig = supported_config.into();
        let gate = Arc::new(AtomicBool::new(false));

        let stream = match sample_format {
            cpal::SampleFormat::I8 => Self::run::<i8>(&device, &config, gate.clone()),
            cpal::SampleFormat::I16 => Self::run::<i16>(&device, &config, gate.clone()),
            cpal::SampleFormat::I32 => Self::run::<i32>(&device, &config, gate.clone()),
            cpal::SampleFormat::I64 => Self::run::<i64>(&device, &config, gate.clone()),
            cpal::SampleFormat::U8 => Self::run::<u8>(&device, &config, gate.clone()),
            cpal::SampleFormat::U16 => Self::run::<u16>(&device, &config, gate.clone()),
            cpal::SampleFormat::U32 => Self::run::<u32>(&device, &config, gate.clone()),
            cpal::SampleFormat::U64 => Self::run::<u64>(&device, &config, gate.clone()),
            cpal::SampleFormat::F32 => Self::run::<f32>(&device, &config, gate.clone()),
            cpal::SampleFormat::F64 => Self::run::<f64>(&device, &config, gate.clone()),
            sample_format => bail!("unsupported sample format '{sample_format}'"),
        }?;

        Ok(Self {
            gate,
            _stream: stream,
        })
    }

    pub fn set_active(&self, active: bool) {
        self.gate.store(active, Ordering::Relaxed);
    }

    fn run<T>(
        device: &cpal::Device,
        config: &cpal::StreamConfig,
        gate: Arc<AtomicBool>,
    ) -> Result<cpal::Stream>
    where
        T: SizedSample + FromSample<f32>,
    {
        let sample_rate = config.sample_rate.0 as f32;
        let channels = config.channels as usize;

        // Produce a sinusoid of maximum amplitude.
        let mut sample_clock = 0f32;
        let mut next_value = move || {
            sample_clock = (sample_clock + 1.0) % sample_rate;
            (sample_clock * TONE_HZ * 2.0 * std::f32::consts::PI / sample_rate).sin()
        };

        let err_fn = |err| error!("an error occurred on stream: {err}");

        let stream = device
            .build_output_stream(
                config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                    let on = gate.load(Ordering::Relaxed);
                    Self::write_data(data, channels, on, &mut next_value)
                },
                err_fn,
                None,
            )
            .context("failed to build output stream")?;

        stream.play().context("failed to start output stream")?;
        Ok(stream)
    }

    fn write_data<T>(
        output: &mut [T],
        channels: usize,
        on: bool,
        next_sample: &mut dyn FnMut() -> f32,
    ) where
        T: Sample + FromSample<f32>,
    {
        for frame in output.chunks_mut(channels) {
            let value: T = if on {
                T::from_sample(next_sample())
            } else {
                T::EQUILIBRIUM
            };
            for sample in frame.iter_mut() {
                *sample = value;
            }
        }
    }
}
