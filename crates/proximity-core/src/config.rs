use crate::constants::*;
use crate::curve::{Direction, DistanceCurve};
use crate::error::Result;
use crate::gizmo::Color;
use crate::host::SourceRef;
use crate::mapper::ProximityMapper;

/// Distance thresholds and output range for the volume ramp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VolumeSettings {
    /// Full volume at or inside this distance.
    pub near: f32,
    /// `min_volume` at or beyond this distance.
    pub far: f32,
    pub min_volume: f32,
    pub max_volume: f32,
}

impl Default for VolumeSettings {
    fn default() -> Self {
        Self {
            near: DEFAULT_MAX_VOLUME_DISTANCE,
            far: DEFAULT_MIN_VOLUME_DISTANCE,
            min_volume: DEFAULT_MIN_VOLUME,
            max_volume: DEFAULT_MAX_VOLUME,
        }
    }
}

/// Distance thresholds and level range (millibels) for the reverb ramp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReverbSettings {
    pub near: f32,
    pub far: f32,
    pub min_level: f32,
    pub max_level: f32,
}

impl Default for ReverbSettings {
    fn default() -> Self {
        Self {
            near: DEFAULT_MIN_REVERB_DISTANCE,
            far: DEFAULT_MAX_REVERB_DISTANCE,
            min_level: DEFAULT_MIN_REVERB_LEVEL,
            max_level: DEFAULT_MAX_REVERB_LEVEL,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GizmoPalette {
    pub volume: Color,
    pub zero_volume: Color,
    pub reverb: Color,
}

impl Default for GizmoPalette {
    fn default() -> Self {
        Self {
            volume: Color::GREEN,
            zero_volume: Color::RED,
            reverb: Color::BLUE,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProximityConfig {
    pub source: SourceRef,
    pub volume: VolumeSettings,
    pub reverb: ReverbSettings,
    pub palette: GizmoPalette,
}

impl ProximityConfig {
    pub fn with_source(mut self, source: SourceRef) -> Self {
        self.source = source;
        self
    }

    pub fn with_volume(mut self, volume: VolumeSettings) -> Self {
        self.volume = volume;
        self
    }

    pub fn with_reverb(mut self, reverb: ReverbSettings) -> Self {
        self.reverb = reverb;
        self
    }

    pub fn with_palette(mut self, palette: GizmoPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Check the threshold pairs and build the curves they describe.
    pub fn validate(&self) -> Result<ProximityMapper> {
        let volume = DistanceCurve::new(
            "volume",
            self.volume.near,
            self.volume.far,
            self.volume.min_volume,
            self.volume.max_volume,
            Direction::Decreasing,
        )?;
        let reverb = DistanceCurve::new(
            "reverb",
            self.reverb.near,
            self.reverb.far,
            self.reverb.min_level,
            self.reverb.max_level,
            Direction::Increasing,
        )?;
        let room = DistanceCurve::new(
            "room",
            self.reverb.near,
            self.reverb.far,
            ROOM_LEVEL_MIN,
            ROOM_LEVEL_MAX,
            Direction::Increasing,
        )?;
        Ok(ProximityMapper::new(volume, reverb, room))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProximityError;

    #[test]
    fn defaults_validate() {
        let config = ProximityConfig::default();
        assert_eq!(config.source, SourceRef::ByName("musica".into()));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn equal_volume_thresholds_are_rejected() {
        let config = ProximityConfig::default().with_volume(VolumeSettings {
            near: 5.0,
            far: 5.0,
            ..VolumeSettings::default()
        });
        assert_eq!(
            config.validate().unwrap_err(),
            ProximityError::InvalidThresholds {
                curve: "volume",
                near: 5.0,
                far: 5.0,
            }
        );
    }

    #[test]
    fn inverted_reverb_thresholds_are_rejected() {
        let config = ProximityConfig::default().with_reverb(ReverbSettings {
            near: 30.0,
            far: 10.0,
            ..ReverbSettings::default()
        });
        assert!(matches!(
            config.validate(),
            Err(ProximityError::InvalidThresholds { curve: "reverb", .. })
        ));
    }
}
