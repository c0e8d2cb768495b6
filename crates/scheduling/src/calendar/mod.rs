// Scheduling calendar: month-grid construction and posting-time heuristics.
// Pure functions only; the rendering layer owns all state.

pub mod grid;
pub mod optimal_times;
