//! Traits the controller uses to talk to whatever owns the scene and the
//! audio graph. The controller never creates transforms or mixes audio itself.

use glam::Vec3;

/// Handle to an object owned by a [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectId(pub u32);

/// How the controller finds the music source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceRef {
    Direct(ObjectId),
    ByName(String),
}

impl Default for SourceRef {
    fn default() -> Self {
        Self::ByName(crate::constants::DEFAULT_SOURCE_NAME.to_string())
    }
}

pub trait Scene {
    fn find_by_name(&self, name: &str) -> Option<ObjectId>;
    /// World-space position, or `None` once the object no longer exists.
    fn position(&self, id: ObjectId) -> Option<Vec3>;
}

/// Gain stage of the channel playing the music.
pub trait AudioOutput {
    fn set_volume(&mut self, volume: f32);
    fn volume(&self) -> f32;
}

/// Reverb effect instance on the music channel. Levels are in millibels.
pub trait ReverbFilter {
    /// Switch to user-controlled parameters so per-tick writes take effect.
    fn set_user_preset(&mut self);
    fn set_reverb_level(&mut self, level: f32);
    fn set_room(&mut self, room: f32);
    fn reverb_level(&self) -> f32;
    fn room(&self) -> f32;
}
