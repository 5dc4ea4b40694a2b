use serde::{Deserialize, Serialize};

/// One visited point: `(position, f(position))`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub position: f64,
    pub value: f64,
}

impl TrajectoryPoint {
    pub fn new(position: f64, value: f64) -> Self {
        Self { position, value }
    }
}

/// Points visited by one descent run, in chronological order
///
/// Never empty: it is created from the starting point and only grows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    pub fn new(start: TrajectoryPoint) -> Self {
        Self::with_capacity(start, 1)
    }

    pub fn with_capacity(start: TrajectoryPoint, capacity: usize) -> Self {
        let mut points = Vec::with_capacity(capacity.max(1));
        points.push(start);
        Self { points }
    }

    pub fn push(&mut self, point: TrajectoryPoint) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<TrajectoryPoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for the usual `len`/`is_empty` pairing
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> &TrajectoryPoint {
        &self.points[0]
    }

    pub fn last(&self) -> &TrajectoryPoint {
        &self.points[self.points.len() - 1]
    }

    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.position)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    /// The last `n` points (fewer if the trajectory is shorter)
    pub fn tail(&self, n: usize) -> &[TrajectoryPoint] {
        let start = self.points.len().saturating_sub(n);
        &self.points[start..]
    }

    /// Smallest and largest position visited
    pub fn position_range(&self) -> (f64, f64) {
        self.positions().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p), hi.max(p))
        })
    }
}

/// Summary of the final step plus one extra derivative evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepDiagnostics {
    pub final_position: f64,
    pub final_value: f64,
    pub final_slope: f64,
    pub converged: bool,
}

/// Background curve point for plotting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainSample {
    pub x: f64,
    pub y: f64,
}
