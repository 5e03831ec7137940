//! Central system ordering labels to make the update sequence explicit.
//! Stages (high-level):
//! 1. Input (Update): jump press / release edits velocity and queues impulses
//! 2. Rapier step (FixedPostUpdate, handled by plugin)
//! 3. Boundary checks (FixedPostUpdate, after rapier writeback)
//! 4. Outcomes (Update): crash / clear events become state transitions
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PlayerInputSet; // key handling before physics sees the velocities

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct BoundaryCheckSet; // corridor + finish line checks after each physics step

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct OutcomeSet; // event -> state transitions
