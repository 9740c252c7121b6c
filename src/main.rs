//! orbitviz - headless driver for the spectrum analyzer and orbit camera
//!
//! Streams audio through the FFT thread, turns each frame's magnitudes into
//! bars and flies the camera, logging what a renderer would be handed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use orbitviz::audio::{spawn_fft_thread, FrameSlot, SampleSource, ToneSource, WavSource};
use orbitviz::camera::{CameraMode, CameraRig, FrameInputs};
use orbitviz::cli::Args;
use orbitviz::math::{physics_to_view_angle, random_range, Vec3};
use orbitviz::params::VisualizerConfig;
use orbitviz::scene::{SpatialTransform, TrackedTransforms};
use orbitviz::spectrum::SpectrumAnalyzer;

/// Radius of the synthetic entity's circuit in follow mode (world units)
const ENTITY_CIRCUIT_RADIUS: f32 = 120.0;

/// Angular speed of the synthetic entity (radians per frame)
const ENTITY_SPEED: f32 = 0.01;

/// Main application state
struct App {
    analyzer: SpectrumAnalyzer,
    camera: CameraRig,
    config: VisualizerConfig,

    slot: FrameSlot,
    latest: Vec<f32>,
    tracked: TrackedTransforms,
    entity_angle: f32,

    // Per-second summary
    window_start: Instant,
    window_frames: u32,
    window_updates: u32,
}

impl App {
    fn new(config: VisualizerConfig, slot: FrameSlot, args: &Args) -> Result<Self> {
        config.validate().context("invalid configuration")?;

        let analyzer =
            SpectrumAnalyzer::new(config.spectrum.clone()).context("creating spectrum analyzer")?;
        let mut camera =
            CameraRig::new(&config.camera, &config.render).context("creating camera rig")?;
        if args.follow {
            camera.toggle_mode();
        }

        let mut rng = StdRng::seed_from_u64(args.seed);
        let entity_angle = random_range(&mut rng, 0.0, std::f32::consts::TAU);

        Ok(Self {
            analyzer,
            camera,
            latest: vec![0.0; config.spectrum.sample_count],
            config,
            slot,
            tracked: TrackedTransforms::new(),
            entity_angle,
            window_start: Instant::now(),
            window_frames: 0,
            window_updates: 0,
        })
    }

    /// Move the synthetic entity one step around its circuit, facing along it
    fn step_entity(&mut self) {
        self.entity_angle += ENTITY_SPEED;
        let (s, c) = self.entity_angle.sin_cos();
        let position = Vec3::new(c, 0.0, s) * ENTITY_CIRCUIT_RADIUS;
        let heading = physics_to_view_angle(self.entity_angle);

        self.tracked.insert(
            0,
            SpatialTransform {
                position,
                size: Vec3::splat(10.0),
                rotation: Vec3::new(0.0, heading, 0.0),
            },
        );
    }

    /// Run a single frame
    fn run_frame(&mut self, frame: u32, args: &Args) -> Result<()> {
        // Reuse the previous magnitudes when the analysis thread hasn't caught up
        if let Some(buffer) = self.slot.take() {
            self.latest = buffer;
            self.window_updates += 1;
        }

        let bars = self
            .analyzer
            .process(&self.latest)
            .context("processing magnitude buffer")?;
        let loudest = bars
            .iter()
            .max_by(|a, b| a.amplitude.total_cmp(&b.amplitude))
            .map(|bar| (bar.index, bar.amplitude));

        if args.advances_on(frame) {
            self.camera.advance_orbit();
        }
        if args.toggles_on(frame) {
            self.camera.toggle_mode();
        }

        self.step_entity();
        self.camera.update(&FrameInputs {
            tracked: &self.tracked,
        });

        let matrices = self.camera.matrices();
        let layout = self.analyzer.layout(self.config.render.resolution());
        if let Some(bar) = self.analyzer.bars().first() {
            debug!(
                "frame {}: bar 0 model {:?}, view row 3 {}",
                frame,
                bar.model_matrix(&layout).w,
                matrices.view.w
            );
        }

        self.window_frames += 1;
        if self.window_start.elapsed() >= Duration::from_secs(1) {
            self.log_summary(loudest);
        }
        Ok(())
    }

    fn log_summary(&mut self, loudest: Option<(usize, f32)>) {
        let amplitudes = self.analyzer.amplitudes();
        let mean = amplitudes.iter().sum::<f32>() / amplitudes.len() as f32;
        let mode = match self.camera.mode() {
            CameraMode::Orbit => format!("orbit #{}", self.camera.orbit_index()),
            CameraMode::Follow { distance } => format!("follow @ {}", distance),
        };

        info!(
            "{} frames, {} spectra | mean {:.1}, loudest {:?} | camera {} eye {}",
            self.window_frames,
            self.window_updates,
            mean,
            loudest,
            mode,
            self.camera.eye()
        );

        self.window_start = Instant::now();
        self.window_frames = 0;
        self.window_updates = 0;
    }
}

fn open_source(args: &Args) -> Result<Box<dyn SampleSource + Send>> {
    match &args.wav {
        Some(path) => {
            let source = WavSource::open(path)
                .with_context(|| format!("opening WAV file {}", path.display()))?;
            info!(
                "Audio: {} ({} samples @ {} Hz)",
                path.display(),
                source.len(),
                source.sample_rate()
            );
            Ok(Box::new(source))
        }
        None => {
            info!("Audio: {} Hz tone, noise {}", args.tone_hz, args.noise);
            Ok(Box::new(ToneSource::new(args.tone_hz, 44100, args.noise, args.seed)))
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    info!("orbitviz - audio-reactive spectrum and orbit camera");

    let source = open_source(&args)?;
    let config = args.build_config(source.sample_rate());

    let slot = FrameSlot::new();
    let stop = Arc::new(AtomicBool::new(false));
    let mut app = App::new(config.clone(), slot.clone(), &args)?;
    let analysis = spawn_fft_thread(config.fft, source, slot, Arc::clone(&stop));

    let frame_time = Duration::from_secs_f32(1.0 / args.fps.max(1.0));
    for frame in 0..args.frames {
        let started = Instant::now();
        app.run_frame(frame, &args)?;
        if let Some(rest) = frame_time.checked_sub(started.elapsed()) {
            thread::sleep(rest);
        }
    }

    stop.store(true, Ordering::Relaxed);
    if analysis.join().is_err() {
        anyhow::bail!("analysis thread panicked");
    }
    info!("Done after {} frames", args.frames);
    Ok(())
}
