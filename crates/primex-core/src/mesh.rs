//! Rotating cube in the hero

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

pub const DEFAULT_STEP: f64 = 0.01;

/// Angle in radians, always in `[0, 2π)`
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    pub fn from_radians(radians: f64) -> Self {
        Self(normalize(radians))
    }

    pub fn radians(self) -> f64 {
        self.0
    }

    pub fn degrees(self) -> f64 {
        self.0.to_degrees()
    }

    pub fn rotated_by(self, radians: f64) -> Self {
        Self(normalize(self.0 + radians))
    }
}

fn normalize(radians: f64) -> f64 {
    if !radians.is_finite() {
        return 0.0;
    }
    let r = radians.rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if r >= TAU {
        0.0
    } else {
        r
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshPose {
    pub x: Angle,
    pub y: Angle,
}

impl MeshPose {
    pub fn css_transform(&self) -> String {
        format!(
            "rotateX({:.4}rad) rotateY({:.4}rad)",
            self.x.radians(),
            self.y.radians()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatingMesh {
    pose: MeshPose,
    step: f64,
}

impl RotatingMesh {
    pub fn new(step: f64) -> Self {
        Self {
            pose: MeshPose::default(),
            step,
        }
    }

    pub fn pose(&self) -> MeshPose {
        self.pose
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Called once per rendered frame.
    pub fn on_frame(&mut self) -> MeshPose {
        self.pose.x = self.pose.x.rotated_by(self.step);
        self.pose.y = self.pose.y.rotated_by(self.step);
        self.pose
    }

    pub fn advance_frames(&mut self, frames: u64) -> MeshPose {
        let delta = normalize(self.step * frames as f64);
        self.pose.x = self.pose.x.rotated_by(delta);
        self.pose.y = self.pose.y.rotated_by(delta);
        self.pose
    }

    pub fn css_transform(&self) -> String {
        self.pose.css_transform()
    }
}

impl Default for RotatingMesh {
    fn default() -> Self {
        Self::new(DEFAULT_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_normalises() {
        assert!((Angle::from_radians(TAU + 1.0).radians() - 1.0).abs() < 1e-12);
        assert!((Angle::from_radians(-1.0).radians() - (TAU - 1.0)).abs() < 1e-12);
        assert_eq!(Angle::from_radians(f64::NAN), Angle::ZERO);
        assert!(Angle::from_radians(-1e-18).radians() < TAU);
    }

    #[test]
    fn test_each_frame_adds_step_to_both_axes() {
        let mut mesh = RotatingMesh::default();
        mesh.on_frame();
        let pose = mesh.on_frame();
        assert!((pose.x.radians() - 0.02).abs() < 1e-12);
        assert!((pose.y.radians() - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_angles_stay_bounded() {
        let mut mesh = RotatingMesh::new(0.5);
        for _ in 0..10_000 {
            let pose = mesh.on_frame();
            assert!((0.0..TAU).contains(&pose.x.radians()));
            assert!((0.0..TAU).contains(&pose.y.radians()));
        }
    }

    #[test]
    fn test_advance_frames_matches_per_frame() {
        let mut stepped = RotatingMesh::default();
        for _ in 0..1000 {
            stepped.on_frame();
        }
        let mut jumped = RotatingMesh::default();
        jumped.advance_frames(1000);
        assert!((stepped.pose().x.radians() - jumped.pose().x.radians()).abs() < 1e-9);
    }

    #[test]
    fn test_css_transform() {
        let mut mesh = RotatingMesh::new(0.25);
        mesh.on_frame();
        assert_eq!(mesh.css_transform(), "rotateX(0.2500rad) rotateY(0.2500rad)");
    }
}
