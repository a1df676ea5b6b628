use crate::MotionError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Time, distance and speed samples of one run.
///
/// `time[i]`, `distance[i]` and `speed[i]` describe one observation. The
/// series are expected to have equal lengths; when they do not, only the
/// first `len()` observations are charted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionSamples {
    #[serde(default)]
    pub time: Vec<f64>,
    #[serde(default)]
    pub distance: Vec<f64>,
    #[serde(default)]
    pub speed: Vec<f64>,
}

impl MotionSamples {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, time_s: f64, distance_m: f64, speed_mps: f64) {
        self.time.push(time_s);
        self.distance.push(distance_m);
        self.speed.push(speed_mps);
    }

    /// Number of complete observations (the shortest series length).
    pub fn len(&self) -> usize {
        self.time
            .len()
            .min(self.distance.len())
            .min(self.speed.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn lengths_match(&self) -> bool {
        self.time.len() == self.distance.len() && self.time.len() == self.speed.len()
    }

    /// Time and distance of every complete observation.
    pub fn time_distance(&self) -> (&[f64], &[f64]) {
        let len = self.len();
        (&self.time[..len], &self.distance[..len])
    }

    /// Time and speed of every complete observation.
    pub fn time_speed(&self) -> (&[f64], &[f64]) {
        let len = self.len();
        (&self.time[..len], &self.speed[..len])
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, MotionError> {
        let data = fs::read(path)?;
        let samples: Self = serde_json::from_slice(&data)?;
        if !samples.lengths_match() {
            log::warn!(
                "sample series lengths differ (time={}, distance={}, speed={}); charting {} observations",
                samples.time.len(),
                samples.distance.len(),
                samples.speed.len(),
                samples.len()
            );
        }
        Ok(samples)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), MotionError> {
        let data = serde_json::to_vec_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }
}
