#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod error;
mod exercise;
mod metrics;
mod name;
mod service;
mod set;
mod statistics;
mod unit;

pub use error::{
    CreateError, DeleteError, ReadError, StorageError, SyncError, UpdateError, ValidationError,
};
pub use exercise::{
    Exercise, ExerciseKind, ExerciseRepository, ExerciseService, MuscleGroup, is_assisted,
};
pub use metrics::{
    AllTimeRecords, MetricsError, Session, SessionMetrics, all_time_records, one_rep_max,
    session_history, session_metrics, sessions,
};
pub use name::{Name, NameError};
pub use service::{Service, Settings};
pub use set::{
    LoggedSet, Reps, RepsError, Rpe, RpeError, SetID, SetLogRepository, SetLogService, SetOrder,
    SetOrderError, Weight, WeightError,
};
pub use statistics::{MetricSeries, metric_series, moving_average};
pub use unit::{KG_PER_LB, Unit, UnitError, convert};
