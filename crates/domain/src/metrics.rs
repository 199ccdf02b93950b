use std::collections::BTreeMap;
use std::iter::zip;

use chrono::NaiveDate;
use thiserror::Error;

use crate::{LoggedSet, Name, Reps, Unit, UnitError, convert};

/// The sets of one exercise on one day.
///
/// Construction guarantees a non-empty slice of the log that belongs to a
/// single session; sets are kept in `set_order`.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    exercise: Name,
    date: NaiveDate,
    sets: Vec<LoggedSet>,
}

impl Session {
    pub fn new(mut sets: Vec<LoggedSet>) -> Result<Self, MetricsError> {
        let Some(first) = sets.first() else {
            return Err(MetricsError::EmptyInput);
        };
        let exercise = first.exercise.clone();
        let date = first.date;

        if let Some(other) = sets
            .iter()
            .find(|s| s.exercise != exercise || s.date != date)
        {
            return Err(MetricsError::MismatchedSession(
                exercise,
                date,
                other.exercise.clone(),
                other.date,
            ));
        }

        sets.sort_by_key(|s| s.set_order);

        Ok(Self {
            exercise,
            date,
            sets,
        })
    }

    #[must_use]
    pub fn exercise(&self) -> &Name {
        &self.exercise
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn sets(&self) -> &[LoggedSet] {
        &self.sets
    }

    /// Derives the metrics of this session with every weight normalized to
    /// the canonical unit.
    pub fn metrics(&self, canonical: Unit) -> Result<SessionMetrics, MetricsError> {
        let loads = self
            .sets
            .iter()
            .map(|s| convert(f32::from(s.weight), s.unit, canonical))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.derive(&loads, canonical))
    }

    /// Derives the metrics of a session on a counterweighted machine, where a
    /// lighter setting means a harder set. The effective load of each set is
    /// the lifter's body weight (in kg) minus the assist weight, floored at
    /// zero.
    pub fn assisted_metrics(
        &self,
        body_weight: f32,
        canonical: Unit,
    ) -> Result<SessionMetrics, MetricsError> {
        let body_weight = convert(body_weight, Unit::Kg, canonical)?;
        let loads = self
            .sets
            .iter()
            .map(|s| {
                convert(f32::from(s.weight), s.unit, canonical)
                    .map(|assist| (body_weight - assist).max(0.0))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.derive(&loads, canonical))
    }

    fn derive(&self, loads: &[f32], canonical: Unit) -> SessionMetrics {
        // The best set is selected by an explicit total order: load first,
        // reps as the tie-break. In an all-bodyweight session every set ties
        // at zero load and the selection degenerates to the rep maximum.
        let (best_weight, best_reps) = zip(loads, &self.sets)
            .map(|(load, set)| (*load, set.reps))
            .max_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
            .unwrap(); // a session has at least one set

        #[allow(clippy::cast_precision_loss)]
        let volume = zip(loads, &self.sets)
            .map(|(load, set)| load * u32::from(set.reps) as f32)
            .sum();

        SessionMetrics {
            date: self.date,
            unit: canonical,
            sets: self.sets.len(),
            max_weight: best_weight,
            max_reps: best_reps,
            best_set: (best_weight, best_reps),
            volume,
            one_rep_max: one_rep_max(best_weight, best_reps),
        }
    }
}

/// Derived summary of one session. Recomputed from the set log on demand,
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionMetrics {
    pub date: NaiveDate,
    /// The unit every weight-based value below is expressed in.
    pub unit: Unit,
    pub sets: usize,
    pub max_weight: f32,
    pub max_reps: Reps,
    /// Weight and reps of the heaviest set, the basis of the one-rep max.
    pub best_set: (f32, Reps),
    pub volume: f32,
    /// Epley estimate over the best set. Zero for bodyweight sessions, which
    /// have no conventional one-rep max.
    pub one_rep_max: f32,
}

impl SessionMetrics {
    /// True when every set was performed without external load, in which case
    /// `one_rep_max` is not meaningful.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_bodyweight(&self) -> bool {
        self.max_weight == 0.0
    }
}

/// Estimated one-rep max after Epley: weight × (1 + reps / 30). A single-rep
/// set is already its own max.
#[must_use]
pub fn one_rep_max(weight: f32, reps: Reps) -> f32 {
    if u32::from(reps) == 1 {
        weight
    } else {
        #[allow(clippy::cast_precision_loss)]
        {
            weight * (1.0 + u32::from(reps) as f32 / 30.0)
        }
    }
}

/// Derives the metrics of a single session from its sets.
pub fn session_metrics(
    sets: Vec<LoggedSet>,
    canonical: Unit,
) -> Result<SessionMetrics, MetricsError> {
    Session::new(sets)?.metrics(canonical)
}

/// Splits the history of one exercise into sessions, ordered by date.
///
/// A history spanning more than one exercise is refused instead of being
/// merged silently.
pub fn sessions(history: &[LoggedSet]) -> Result<Vec<Session>, MetricsError> {
    let Some(first) = history.first() else {
        return Ok(vec![]);
    };

    if let Some(other) = history.iter().find(|s| s.exercise != first.exercise) {
        return Err(MetricsError::MismatchedSession(
            first.exercise.clone(),
            first.date,
            other.exercise.clone(),
            other.date,
        ));
    }

    let mut by_date: BTreeMap<NaiveDate, Vec<LoggedSet>> = BTreeMap::new();
    for set in history {
        by_date.entry(set.date).or_default().push(set.clone());
    }

    by_date.into_values().map(Session::new).collect()
}

/// Per-session metrics for the whole history of one exercise, ordered by
/// date.
pub fn session_history(
    history: &[LoggedSet],
    canonical: Unit,
) -> Result<Vec<SessionMetrics>, MetricsError> {
    sessions(history)?
        .iter()
        .map(|s| s.metrics(canonical))
        .collect()
}

/// All-time personal records of one exercise.
///
/// Each field is maximized independently across sessions and may come from a
/// different session than the others.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AllTimeRecords {
    pub best_weight: f32,
    pub best_reps: u32,
    pub best_volume: f32,
    pub best_one_rep_max: f32,
}

/// Records over the full history of one exercise. An empty history is a valid
/// state (nothing logged yet) and yields the zero record.
pub fn all_time_records(
    history: &[LoggedSet],
    canonical: Unit,
) -> Result<AllTimeRecords, MetricsError> {
    let mut records = AllTimeRecords::default();
    for metrics in session_history(history, canonical)? {
        records.best_weight = records.best_weight.max(metrics.max_weight);
        records.best_reps = records.best_reps.max(u32::from(metrics.max_reps));
        records.best_volume = records.best_volume.max(metrics.volume);
        records.best_one_rep_max = records.best_one_rep_max.max(metrics.one_rep_max);
    }
    Ok(records)
}

#[derive(Error, Debug, PartialEq)]
pub enum MetricsError {
    #[error("No sets to summarize")]
    EmptyInput,
    #[error("Sets from more than one session: {0} on {1}, {2} on {3}")]
    MismatchedSession(Name, NaiveDate, Name, NaiveDate),
    #[error(transparent)]
    MixedUnit(#[from] UnitError),
}
