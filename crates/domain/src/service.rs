use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::{debug, error};

use crate::{
    AllTimeRecords, CreateError, DeleteError, Exercise, ExerciseRepository, ExerciseService,
    LoggedSet, MetricSeries, MuscleGroup, Name, ReadError, Session, SessionMetrics, SetID,
    SetLogRepository, SetLogService, SyncError, Unit, UpdateError, all_time_records, is_assisted,
    metric_series, session_history, sessions,
};

/// Preferences owned by the surrounding application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// The unit every derived metric is normalized to.
    pub canonical_unit: Unit,
    /// The lifter's body weight in kilograms, used for assisted exercises.
    pub body_weight: Option<f32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canonical_unit: Unit::Kg,
            body_weight: None,
        }
    }
}

pub struct Service<R> {
    repository: R,
    settings: Settings,
}

impl<R> Service<R> {
    pub fn new(repository: R, settings: Settings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    /// Machine settings stay in machine units: an all-notch history is
    /// summarized as notch instead of the configured canonical unit.
    fn history_unit(&self, history: &[LoggedSet]) -> Unit {
        if !history.is_empty() && history.iter().all(|s| s.unit == Unit::Notch) {
            Unit::Notch
        } else {
            self.settings.canonical_unit
        }
    }
}

impl<R> Service<R>
where
    R: SetLogRepository + ExerciseRepository,
{
    pub async fn sync(&self) -> Result<(), SyncError> {
        self.repository.sync_exercises().await?;
        self.repository.sync_sets().await?;
        Ok(())
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: SetLogRepository> Service<R> {
    /// Per-session metrics for one exercise, taking the assisted-exercise
    /// policy and the unit of the history into account.
    async fn exercise_metrics(&self, exercise: &Name) -> Result<Vec<SessionMetrics>, ReadError> {
        let history = self.get_history(exercise).await?;
        let canonical = self.history_unit(&history);
        match (is_assisted(exercise.as_ref()), self.settings.body_weight) {
            (true, Some(body_weight)) => sessions(&history).and_then(|sessions| {
                sessions
                    .iter()
                    .map(|s| s.assisted_metrics(body_weight, canonical))
                    .collect()
            }),
            _ => session_history(&history, canonical),
        }
        .map_err(|err| ReadError::Other(err.into()))
    }
}

impl<R: SetLogRepository> SetLogService for Service<R> {
    async fn get_sets(&self) -> Result<Vec<LoggedSet>, ReadError> {
        log_on_error!(self.repository.read_sets(), ReadError, "get", "sets")
    }

    async fn get_history(&self, exercise: &Name) -> Result<Vec<LoggedSet>, ReadError> {
        Ok(self
            .get_sets()
            .await?
            .into_iter()
            .filter(|s| s.exercise == *exercise)
            .collect())
    }

    async fn log_set(&self, set: LoggedSet) -> Result<LoggedSet, CreateError> {
        log_on_error!(self.repository.create_set(set), CreateError, "create", "set")
    }

    async fn replace_set(&self, set: LoggedSet) -> Result<LoggedSet, UpdateError> {
        log_on_error!(
            self.repository.replace_set(set),
            UpdateError,
            "replace",
            "set"
        )
    }

    async fn delete_set(&self, id: SetID) -> Result<SetID, DeleteError> {
        log_on_error!(self.repository.delete_set(id), DeleteError, "delete", "set")
    }

    async fn get_session_metrics(
        &self,
        exercise: &Name,
        date: NaiveDate,
    ) -> Result<SessionMetrics, ReadError> {
        let sets = self
            .get_history(exercise)
            .await?
            .into_iter()
            .filter(|s| s.date == date)
            .collect::<Vec<_>>();

        if sets.is_empty() {
            return Err(ReadError::NotFound);
        }

        let canonical = self.history_unit(&sets);
        let session = Session::new(sets).map_err(|err| ReadError::Other(err.into()))?;
        match (is_assisted(exercise.as_ref()), self.settings.body_weight) {
            (true, Some(body_weight)) => session.assisted_metrics(body_weight, canonical),
            _ => session.metrics(canonical),
        }
        .map_err(|err| ReadError::Other(err.into()))
    }

    async fn get_all_time_records(&self, exercise: &Name) -> Result<AllTimeRecords, ReadError> {
        let history = self.get_history(exercise).await?;
        let canonical = self.history_unit(&history);
        all_time_records(&history, canonical).map_err(|err| ReadError::Other(err.into()))
    }

    async fn get_records_wall(&self) -> Result<BTreeMap<Name, AllTimeRecords>, ReadError> {
        let mut by_exercise: BTreeMap<Name, Vec<LoggedSet>> = BTreeMap::new();
        for set in self.get_sets().await? {
            by_exercise
                .entry(set.exercise.clone())
                .or_default()
                .push(set);
        }

        let mut wall = BTreeMap::new();
        for (name, history) in by_exercise {
            let records = all_time_records(&history, self.history_unit(&history))
                .map_err(|err| ReadError::Other(err.into()))?;
            wall.insert(name, records);
        }
        Ok(wall)
    }

    async fn get_metric_series(
        &self,
        exercise: &Name,
        series: MetricSeries,
    ) -> Result<Vec<(NaiveDate, f32)>, ReadError> {
        let metrics = self.exercise_metrics(exercise).await?;
        Ok(metric_series(&metrics, series))
    }
}

impl<R: ExerciseRepository> ExerciseService for Service<R> {
    async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.repository.read_exercises(),
            ReadError,
            "get",
            "exercises"
        )
    }

    async fn create_exercise(
        &self,
        name: Name,
        muscle_group: MuscleGroup,
    ) -> Result<Exercise, CreateError> {
        log_on_error!(
            self.repository.create_exercise(name, muscle_group),
            CreateError,
            "create",
            "exercise"
        )
    }

    async fn delete_exercise(&self, name: Name) -> Result<Name, DeleteError> {
        log_on_error!(
            self.repository.delete_exercise(name),
            DeleteError,
            "delete",
            "exercise"
        )
    }
}
