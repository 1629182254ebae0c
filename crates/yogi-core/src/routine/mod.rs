//! Routine requests and generation.

pub mod generate;
pub mod request;

pub use generate::{
    RoutineResult, SHORT_PRACTICE_MINUTES, SectionPlan, generate, generate_with, sample_size,
};
pub use request::{
    DURATION_STEP_MINUTES, MAX_DURATION_MINUTES, MIN_DURATION_MINUTES, RequestError,
    RoutineRequest,
};
