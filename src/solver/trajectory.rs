//! Dense integrator output
//!
//! A [`Trajectory`] stores every fine-grid point `(t, v, w)` produced by the
//! integrator as three equal-length columns. It is built once and only read
//! afterwards; resampling onto report times is done by
//! [`crate::comparison::resample`].

use std::collections::HashMap;

use crate::error::SettleError;
use crate::physics::MemoryState;

/// Time series of the memory model on the fine grid
///
/// # Invariants
///
/// - the three columns have the same, non-zero length
/// - `times` is strictly increasing (the integrator starts it at 0)
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    times: Vec<f64>,
    velocity: Vec<f64>,
    memory: Vec<f64>,
    metadata: HashMap<String, String>,
}

impl Trajectory {
    /// Assemble a trajectory from its columns
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the columns are empty, differ in length, or the
    /// times are not strictly increasing.
    pub fn from_columns(
        times: Vec<f64>,
        velocity: Vec<f64>,
        memory: Vec<f64>,
    ) -> Result<Self, SettleError> {
        if times.is_empty() {
            return Err(SettleError::invalid("times", 0.0, "trajectory needs at least one point"));
        }
        if velocity.len() != times.len() {
            return Err(SettleError::invalid(
                "velocity",
                velocity.len() as f64,
                "column length must match times",
            ));
        }
        if memory.len() != times.len() {
            return Err(SettleError::invalid(
                "memory",
                memory.len() as f64,
                "column length must match times",
            ));
        }
        if let Some(pair) = times.windows(2).find(|pair| pair[1] <= pair[0]) {
            return Err(SettleError::invalid(
                "times",
                pair[1],
                "must be strictly increasing",
            ));
        }

        Ok(Self {
            times,
            velocity,
            memory,
            metadata: HashMap::new(),
        })
    }

    /// Assemble a trajectory from time points and states (`[v, w]`)
    pub fn from_states(times: Vec<f64>, states: &[MemoryState]) -> Result<Self, SettleError> {
        let velocity = states.iter().map(|state| state[0]).collect();
        let memory = states.iter().map(|state| state[1]).collect();
        Self::from_columns(times, velocity, memory)
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always false for a constructed trajectory
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Time column (s)
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Velocity column v (m/s)
    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    /// Memory state column w
    pub fn memory(&self) -> &[f64] {
        &self.memory
    }

    /// First time point
    pub fn t_min(&self) -> f64 {
        self.times[0]
    }

    /// Last time point
    pub fn t_max(&self) -> f64 {
        self.times[self.times.len() - 1]
    }

    /// `(t, v, w)` at index `index`
    pub fn point(&self, index: usize) -> Option<(f64, f64, f64)> {
        Some((
            *self.times.get(index)?,
            self.velocity[index],
            self.memory[index],
        ))
    }

    /// State `[v, w]` at the last point
    pub fn final_state(&self) -> MemoryState {
        let last = self.len() - 1;
        MemoryState::new(self.velocity[last], self.memory[last])
    }

    /// Iterate over `(t, v, w)` triples
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.times
            .iter()
            .zip(&self.velocity)
            .zip(&self.memory)
            .map(|((&t, &v), &w)| (t, v, w))
    }

    /// Attach a metadata entry (solver name, step size, ...)
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Read a metadata entry
    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn small_trajectory() -> Trajectory {
        Trajectory::from_columns(
            vec![0.0, 1.0, 2.0],
            vec![0.0, 0.5, 0.75],
            vec![0.0, 0.1, 0.2],
        )
        .unwrap()
    }

    #[test]
    fn test_accessors() {
        let trajectory = small_trajectory();

        assert_eq!(trajectory.len(), 3);
        assert!(!trajectory.is_empty());
        assert_eq!(trajectory.t_min(), 0.0);
        assert_eq!(trajectory.t_max(), 2.0);
        assert_eq!(trajectory.point(1), Some((1.0, 0.5, 0.1)));
        assert_eq!(trajectory.point(3), None);
        assert_eq!(trajectory.final_state(), MemoryState::new(0.75, 0.2));
    }

    #[test]
    fn test_iter_yields_triples() {
        let triples: Vec<_> = small_trajectory().iter().collect();
        assert_eq!(triples, vec![(0.0, 0.0, 0.0), (1.0, 0.5, 0.1), (2.0, 0.75, 0.2)]);
    }

    #[test]
    fn test_from_states() {
        let states = [MemoryState::new(0.0, 0.0), MemoryState::new(1.0, 2.0)];
        let trajectory = Trajectory::from_states(vec![0.0, 0.5], &states).unwrap();

        assert_eq!(trajectory.velocity(), &[0.0, 1.0]);
        assert_eq!(trajectory.memory(), &[0.0, 2.0]);
    }

    #[test]
    fn test_invalid_columns_rejected() {
        assert!(Trajectory::from_columns(vec![], vec![], vec![]).is_err());
        assert!(Trajectory::from_columns(vec![0.0, 1.0], vec![0.0], vec![0.0, 0.0]).is_err());
        assert!(Trajectory::from_columns(vec![0.0, 1.0], vec![0.0, 0.0], vec![0.0]).is_err());
        assert!(Trajectory::from_columns(vec![0.0, 0.0], vec![0.0, 0.0], vec![0.0, 0.0]).is_err());
    }

    #[test]
    fn test_metadata() {
        let mut trajectory = small_trajectory();
        trajectory.add_metadata("solver", "Runge-Kutta 4");

        assert_eq!(trajectory.metadata("solver"), Some("Runge-Kutta 4"));
        assert_eq!(trajectory.metadata("missing"), None);
    }
}
