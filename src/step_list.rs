//! Ordered, never-empty list of oscillators.
//!
//! Insertion order is composition order: step *i* rotates about the tip of
//! step *i - 1*. The list only grows at the end and shrinks from the end,
//! and always keeps at least one step.

use crate::errors::EpicycleError;
use crate::step::{OscillatorStep, StepHandle};

#[derive(Debug, Clone, PartialEq)]
pub struct StepList {
    // Parallel vectors so the oscillators can be handed to the compositor as a plain slice.
    handles: Vec<StepHandle>,
    steps: Vec<OscillatorStep>,
    next_id: u64,
}

impl StepList {
    /// A list seeded with a single default step.
    pub fn new() -> Self {
        let mut list = Self {
            handles: Vec::new(),
            steps: Vec::new(),
            next_id: 0,
        };
        list.add_step();
        list
    }

    /// Build a list from explicit oscillators, in chain order.
    /// An empty iterator yields the default single-step list.
    pub fn from_steps<I: IntoIterator<Item = OscillatorStep>>(steps: I) -> Self {
        let mut list = Self {
            handles: Vec::new(),
            steps: Vec::new(),
            next_id: 0,
        };
        for step in steps {
            list.push(step);
        }
        if list.steps.is_empty() {
            list.add_step();
        }
        list
    }

    fn push(&mut self, step: OscillatorStep) -> StepHandle {
        let handle = StepHandle(self.next_id);
        self.next_id += 1;
        self.handles.push(handle);
        self.steps.push(step);
        handle
    }

    /// Appends a step with default parameters (length 100, offset 0, speed 1).
    pub fn add_step(&mut self) -> StepHandle {
        let handle = self.push(OscillatorStep::default());
        log::debug!("added step {handle} ({} total)", self.steps.len());
        handle
    }

    /// Removes the most recently added step.
    ///
    /// Returns the handle of the removed step, or `None` (leaving the list
    /// untouched) when only one step remains.
    pub fn remove_last_step(&mut self) -> Option<StepHandle> {
        if self.steps.len() <= 1 {
            log::debug!("refusing to remove the last remaining step");
            return None;
        }
        self.steps.pop();
        let handle = self.handles.pop();
        if let Some(handle) = handle {
            log::debug!("removed step {handle} ({} left)", self.steps.len());
        }
        handle
    }

    /// Overwrites every field of the referenced step at once.
    ///
    /// Only that step changes; derived geometry is recomputed by the caller.
    pub fn update_step(
        &mut self,
        handle: StepHandle,
        step: OscillatorStep,
    ) -> Result<(), EpicycleError> {
        let index = self
            .index_of(handle)
            .ok_or(EpicycleError::UnknownStep(handle))?;
        self.steps[index] = step;
        log::debug!(
            "updated step {handle}: length={} offset={} speed={}",
            step.length,
            step.offset,
            step.speed
        );
        Ok(())
    }

    pub fn get(&self, handle: StepHandle) -> Option<&OscillatorStep> {
        self.index_of(handle).map(|i| &self.steps[i])
    }

    /// Chain position of `handle`, if the step still exists.
    pub fn index_of(&self, handle: StepHandle) -> Option<usize> {
        // Handles are allocated in increasing order, so the vector stays sorted.
        self.handles.binary_search(&handle).ok()
    }

    pub fn handle_at(&self, index: usize) -> Option<StepHandle> {
        self.handles.get(index).copied()
    }

    pub fn last_handle(&self) -> Option<StepHandle> {
        self.handles.last().copied()
    }

    /// UI label of a step: `Step n`, 1-based by chain position.
    pub fn label(&self, handle: StepHandle) -> Option<String> {
        self.index_of(handle).map(|i| format!("Step {}", i + 1))
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for a list built through the public constructors.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn as_slice(&self) -> &[OscillatorStep] {
        &self.steps
    }

    pub fn handles(&self) -> &[StepHandle] {
        &self.handles
    }

    pub fn iter(&self) -> impl Iterator<Item = (StepHandle, &OscillatorStep)> + '_ {
        self.handles.iter().copied().zip(self.steps.iter())
    }
}

impl Default for StepList {
    fn default() -> Self {
        Self::new()
    }
}
