//! Per-tick proximity controller.
//!
//! Samples the listener-to-source distance once per tick and pushes the mapped
//! volume and reverb parameters into the host's audio output and reverb filter.
//! If the music source cannot be resolved the controller logs the problem once
//! and goes inert: later ticks do nothing instead of failing.

use glam::Vec3;

use crate::config::ProximityConfig;
use crate::error::{ProximityError, Result};
use crate::gizmo::{distance_label, proximity_gizmos, Gizmo, GizmoList};
use crate::host::{AudioOutput, ObjectId, ReverbFilter, Scene, SourceRef};
use crate::mapper::{AudioParameters, ProximityMapper};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerState {
    /// Created but `start` has not run yet.
    Idle,
    Running { source: ObjectId },
    /// A required reference was missing; updates are no-ops from here on.
    Inert,
}

pub struct ProximityController<A, R> {
    config: ProximityConfig,
    mapper: ProximityMapper,
    audio: A,
    reverb: Option<R>,
    state: ControllerState,
    current_distance: f32,
}

impl<A, R> ProximityController<A, R>
where
    A: AudioOutput,
    R: ReverbFilter + Default,
{
    pub fn new(config: ProximityConfig, audio: A) -> Result<Self> {
        let mapper = config.validate()?;
        Ok(Self {
            config,
            mapper,
            audio,
            reverb: None,
            state: ControllerState::Idle,
            current_distance: 0.0,
        })
    }

    /// Use an existing reverb filter instead of attaching a default one on start.
    pub fn with_reverb(mut self, reverb: R) -> Self {
        self.reverb = Some(reverb);
        self
    }

    /// Resolve the music source and prepare the reverb filter.
    ///
    /// Only the first call does any work. An unresolved source is logged here
    /// and leaves the controller [`ControllerState::Inert`].
    pub fn start<S: Scene>(&mut self, scene: &S) -> Result<()> {
        match self.state {
            ControllerState::Running { .. } => return Ok(()),
            ControllerState::Inert => return Err(self.unresolved_source()),
            ControllerState::Idle => {}
        }

        let source = match resolve_source(&self.config.source, scene) {
            Some(id) => id,
            None => {
                let err = self.unresolved_source();
                log::error!("{err}; proximity audio disabled");
                self.state = ControllerState::Inert;
                return Err(err);
            }
        };

        let reverb = self.reverb.get_or_insert_with(|| {
            log::debug!("no reverb filter supplied, attaching a default one");
            R::default()
        });
        reverb.set_user_preset();

        log::info!("proximity audio tracking source {:?}", source);
        self.state = ControllerState::Running { source };
        Ok(())
    }

    /// Sample the distance and apply the mapped parameters. Returns what was
    /// applied, or `None` when the controller is idle or inert.
    pub fn update<S: Scene>(&mut self, scene: &S, listener: Vec3) -> Option<AudioParameters> {
        let ControllerState::Running { source } = self.state else {
            return None;
        };
        let Some(source_pos) = scene.position(source) else {
            log::error!("{}; proximity audio disabled", self.unresolved_source());
            self.state = ControllerState::Inert;
            return None;
        };

        self.current_distance = listener.distance(source_pos);
        let params = self.mapper.map(self.current_distance);

        self.audio.set_volume(params.volume);
        if let Some(reverb) = self.reverb.as_mut() {
            reverb.set_reverb_level(params.reverb_level);
            reverb.set_room(params.room_level);
        }
        log::debug!(
            "distance={:.2} volume={:.3} reverb={:.0} room={:.0}",
            self.current_distance,
            params.volume,
            params.reverb_level,
            params.room_level
        );
        Some(params)
    }

    /// Threshold spheres around the source, plus the listener link while
    /// playing. Empty when the source is not known.
    pub fn gizmos<S: Scene>(&self, scene: &S, listener: Vec3, is_playing: bool) -> GizmoList {
        let source = match (self.state, &self.config.source) {
            (ControllerState::Running { source }, _) => source,
            (ControllerState::Idle, SourceRef::Direct(id)) => *id,
            _ => return GizmoList::new(),
        };
        match scene.position(source) {
            Some(source_pos) => proximity_gizmos(&self.config, source_pos, listener, is_playing),
            None => GizmoList::new(),
        }
    }

    /// Distance/volume/reverb readout shown while the controller is selected.
    pub fn selected_gizmos(&self, listener: Vec3, is_playing: bool) -> Option<Gizmo> {
        if !is_playing || !self.is_running() {
            return None;
        }
        let reverb_level = self.reverb.as_ref().map_or(0.0, |r| r.reverb_level());
        Some(distance_label(
            listener,
            self.current_distance,
            self.audio.volume(),
            reverb_level,
        ))
    }

    fn unresolved_source(&self) -> ProximityError {
        match &self.config.source {
            SourceRef::ByName(name) => ProximityError::missing(format!("source object '{name}'")),
            SourceRef::Direct(id) => ProximityError::missing(format!("source object {id:?}")),
        }
    }
}

impl<A, R> ProximityController<A, R> {
    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, ControllerState::Running { .. })
    }

    /// Distance sampled on the last successful update.
    pub fn current_distance(&self) -> f32 {
        self.current_distance
    }

    pub fn config(&self) -> &ProximityConfig {
        &self.config
    }

    pub fn mapper(&self) -> &ProximityMapper {
        &self.mapper
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn reverb(&self) -> Option<&R> {
        self.reverb.as_ref()
    }
}

fn resolve_source<S: Scene>(source: &SourceRef, scene: &S) -> Option<ObjectId> {
    match source {
        SourceRef::ByName(name) => scene.find_by_name(name),
        SourceRef::Direct(id) => scene.position(*id).map(|_| *id),
    }
}
