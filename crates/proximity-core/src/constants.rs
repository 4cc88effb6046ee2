// Shared tuning constants for the proximity controller and its demo host.

// Source lookup
pub const DEFAULT_SOURCE_NAME: &str = "musica";

// Volume ramp (closer is louder)
pub const DEFAULT_MAX_VOLUME_DISTANCE: f32 = 2.0; // full volume inside this radius
pub const DEFAULT_MIN_VOLUME_DISTANCE: f32 = 15.0; // silent beyond this radius
pub const DEFAULT_MAX_VOLUME: f32 = 1.0;
pub const DEFAULT_MIN_VOLUME: f32 = 0.0;

// Reverb ramp (farther is wetter), levels in millibels
pub const DEFAULT_MIN_REVERB_DISTANCE: f32 = 3.0; // dry inside this radius
pub const DEFAULT_MAX_REVERB_DISTANCE: f32 = 20.0; // fully wet beyond this radius
pub const DEFAULT_MIN_REVERB_LEVEL: f32 = -10_000.0; // no reverb
pub const DEFAULT_MAX_REVERB_LEVEL: f32 = 0.0; // full reverb

// Room attenuation follows the reverb ramp over a fixed range
pub const ROOM_LEVEL_MIN: f32 = -10_000.0;
pub const ROOM_LEVEL_MAX: f32 = -1_000.0;

// Gizmos
pub const MAX_REVERB_GIZMO_ALPHA: f32 = 0.5;
pub const MIDPOINT_CUBE_SIZE: f32 = 0.2;
pub const LABEL_HEIGHT: f32 = 2.0; // label offset above the listener
