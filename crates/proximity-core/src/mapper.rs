use crate::curve::DistanceCurve;

/// Output of one tick: what the host should apply to the music channel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AudioParameters {
    pub volume: f32,
    /// Reverb wet level in millibels.
    pub reverb_level: f32,
    /// Room attenuation in millibels, within \[-10000, -1000\].
    pub room_level: f32,
}

/// Maps a listener-to-source distance to [`AudioParameters`].
///
/// Built by [`ProximityConfig::validate`](crate::ProximityConfig::validate),
/// so every curve it holds has `near < far`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProximityMapper {
    volume: DistanceCurve,
    reverb: DistanceCurve,
    room: DistanceCurve,
}

impl ProximityMapper {
    pub fn new(volume: DistanceCurve, reverb: DistanceCurve, room: DistanceCurve) -> Self {
        Self {
            volume,
            reverb,
            room,
        }
    }

    pub fn map(&self, distance: f32) -> AudioParameters {
        AudioParameters {
            volume: self.volume.evaluate(distance),
            reverb_level: self.reverb.evaluate(distance),
            room_level: self.room.evaluate(distance),
        }
    }

    pub fn volume_curve(&self) -> &DistanceCurve {
        &self.volume
    }

    pub fn reverb_curve(&self) -> &DistanceCurve {
        &self.reverb
    }

    pub fn room_curve(&self) -> &DistanceCurve {
        &self.room
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ProximityConfig;

    #[test]
    fn midpoint_of_default_volume_ramp_is_half() {
        let mapper = ProximityConfig::default().validate().unwrap();
        let p = mapper.map(8.5);
        assert!((p.volume - 0.5).abs() < 1e-6);
    }

    #[test]
    fn room_tracks_reverb_ratio() {
        let mapper = ProximityConfig::default().validate().unwrap();
        // Halfway between 3 and 20.
        let p = mapper.map(11.5);
        assert!((p.reverb_level - -5_000.0).abs() < 1e-2);
        assert!((p.room_level - -5_500.0).abs() < 1e-2);
        assert_eq!(mapper.map(0.0).room_level, -10_000.0);
        assert_eq!(mapper.map(100.0).room_level, -1_000.0);
    }
}
