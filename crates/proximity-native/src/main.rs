use std::thread;
use std::time::{Duration, Instant};

use glam::Vec3;
use proximity_core::{
    Gizmo, ProximityConfig, ProximityController, SceneGraph, DEFAULT_MAX_REVERB_DISTANCE,
    DEFAULT_SOURCE_NAME,
};
use rand::prelude::*;

mod audio;
use audio::{start_audio_output, SharedMix};

const TICK: Duration = Duration::from_millis(15);
const RUN_TIME: Duration = Duration::from_secs(45);
const REPORT_EVERY: Duration = Duration::from_secs(1);

// Listener path: an orbit around the source whose radius breathes in and out
const ORBIT_PERIOD_SEC: f32 = 9.0;
const SWEEP_PERIOD_SEC: f32 = 15.0;
const MIN_ORBIT_RADIUS: f32 = 0.5;
const MAX_ORBIT_RADIUS: f32 = DEFAULT_MAX_REVERB_DISTANCE + 4.0;
const JITTER_STEP: f32 = 0.05; // random drift per tick
const JITTER_MAX: f32 = 1.5;

struct ListenerPath {
    rng: StdRng,
    drift: Vec3,
}

impl ListenerPath {
    fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            drift: Vec3::ZERO,
        }
    }

    fn position(&mut self, t: f32) -> Vec3 {
        let tau = std::f32::consts::TAU;
        let sweep = 0.5 - 0.5 * (tau * t / SWEEP_PERIOD_SEC).cos();
        let radius = MIN_ORBIT_RADIUS + (MAX_ORBIT_RADIUS - MIN_ORBIT_RADIUS) * sweep;
        let angle = tau * t / ORBIT_PERIOD_SEC;

        let step = Vec3::new(
            self.rng.gen_range(-JITTER_STEP..=JITTER_STEP),
            self.rng.gen_range(-JITTER_STEP..=JITTER_STEP) * 0.5,
            self.rng.gen_range(-JITTER_STEP..=JITTER_STEP),
        );
        self.drift = (self.drift + step).clamp_length_max(JITTER_MAX);

        Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius) + self.drift
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut scene = SceneGraph::new();
    let source = scene.spawn(DEFAULT_SOURCE_NAME, Vec3::ZERO);
    log::info!("spawned '{}' as {:?}", DEFAULT_SOURCE_NAME, source);

    let mix = SharedMix::default();
    // Keep the stream alive for the duration of the run
    let _stream = match start_audio_output(mix.clone()) {
        Ok(stream) => Some(stream),
        Err(e) => {
            log::warn!("audio output unavailable, running silent: {e:#}");
            None
        }
    };

    let mut controller =
        ProximityController::new(ProximityConfig::default(), mix.clone())?.with_reverb(mix);
    controller.start(&scene)?;

    // Scheduler thread owns the scene and controller; the audio callback only
    // sees the shared mix parameters.
    let scheduler = thread::Builder::new()
        .name("proximity-scheduler".into())
        .spawn(move || run_scheduler(scene, controller, ListenerPath::new(42), RUN_TIME))?;
    scheduler
        .join()
        .map_err(|_| anyhow::anyhow!("scheduler thread panicked"))?;

    log::info!("done");
    Ok(())
}

fn run_scheduler(
    scene: SceneGraph,
    mut controller: ProximityController<SharedMix, SharedMix>,
    mut path: ListenerPath,
    run_time: Duration,
) -> usize {
    let start = Instant::now();
    let mut last_report = start;
    let mut ticks = 0;
    while start.elapsed() < run_time {
        let t = start.elapsed().as_secs_f32();
        let listener = path.position(t);
        if controller.update(&scene, listener).is_some() {
            ticks += 1;
        }

        if last_report.elapsed() >= REPORT_EVERY {
            last_report = Instant::now();
            if let Some(Gizmo::Label { text, .. }) = controller.selected_gizmos(listener, true) {
                log::info!("{}", text.replace('\n', " | "));
            }
            let gizmos = controller.gizmos(&scene, listener, true);
            log::debug!("{} gizmos this frame", gizmos.len());
        }
        thread::sleep(TICK);
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheduler_thread_drives_shared_mix() {
        let mut scene = SceneGraph::new();
        scene.spawn(DEFAULT_SOURCE_NAME, Vec3::ZERO);
        let mix = SharedMix::default();
        let mut controller = ProximityController::new(ProximityConfig::default(), mix.clone())
            .unwrap()
            .with_reverb(mix.clone());
        controller.start(&scene).unwrap();

        let handle = thread::Builder::new()
            .name("proximity-scheduler".into())
            .spawn(move || {
                run_scheduler(scene, controller, ListenerPath::new(1), Duration::from_millis(60))
            })
            .unwrap();
        let ticks = handle.join().unwrap();

        assert!(ticks > 0);
        let params = mix.snapshot();
        assert!(params.user_preset);
        // The path starts inside the full-volume radius.
        assert!(params.volume > 0.9, "volume {}", params.volume);
    }

    #[test]
    fn path_sweeps_through_all_thresholds() {
        let mut path = ListenerPath::new(7);
        let mut min_r = f32::INFINITY;
        let mut max_r = 0.0f32;
        let steps = (SWEEP_PERIOD_SEC / TICK.as_secs_f32()) as usize;
        for i in 0..steps {
            let r = path.position(i as f32 * TICK.as_secs_f32()).length();
            min_r = min_r.min(r);
            max_r = max_r.max(r);
        }
        assert!(min_r < 2.0, "closest approach {min_r}");
        assert!(max_r > DEFAULT_MAX_REVERB_DISTANCE, "farthest point {max_r}");
    }
}
