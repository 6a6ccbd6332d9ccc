//! History of the chain endpoint.

use crate::float_types::Real;
use geo::{LineString, coord};
use nalgebra::Point2;
use std::collections::VecDeque;

/// Append-only record of endpoint samples.
///
/// Growth is unbounded unless a capacity is set, in which case the oldest
/// sample is dropped once the trace is full.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathTrace {
    points: VecDeque<Point2<Real>>,
    recording: bool,
    capacity: Option<usize>,
}

impl PathTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// A trace that keeps at most `capacity` samples. `None` means unbounded.
    pub fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub const fn is_recording(&self) -> bool {
        self.recording
    }

    /// Turns recording on and starts a fresh trace.
    pub fn enable(&mut self) {
        self.set_recording(true);
    }

    /// Turns recording off and drops the current trace.
    pub fn disable(&mut self) {
        self.set_recording(false);
    }

    /// Toggling recording in either direction always clears the trace.
    pub fn set_recording(&mut self, recording: bool) {
        self.recording = recording;
        self.clear();
    }

    pub fn clear(&mut self) {
        if !self.points.is_empty() {
            log::debug!("clearing trace of {} samples", self.points.len());
        }
        self.points.clear();
    }

    /// Appends `point` if recording. Returns whether it was recorded.
    pub fn record(&mut self, point: Point2<Real>) -> bool {
        if !self.recording {
            return false;
        }
        if let Some(capacity) = self.capacity {
            if capacity == 0 {
                return false;
            }
            while self.points.len() >= capacity {
                self.points.pop_front();
            }
        }
        self.points.push_back(point);
        true
    }

    pub const fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Changes the bound, dropping the oldest samples if the trace is now over it.
    pub fn set_capacity(&mut self, capacity: Option<usize>) {
        self.capacity = capacity;
        if let Some(capacity) = capacity {
            while self.points.len() > capacity {
                self.points.pop_front();
            }
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&Point2<Real>> {
        self.points.back()
    }

    /// Samples in recording order, oldest first.
    pub fn points(&self) -> impl Iterator<Item = &Point2<Real>> + '_ {
        self.points.iter()
    }

    pub fn to_line_string(&self) -> LineString<Real> {
        self.points
            .iter()
            .map(|p| coord! { x: p.x, y: p.y })
            .collect::<Vec<_>>()
            .into()
    }
}
