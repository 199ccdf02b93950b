use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use derive_more::{Deref, Display, Into};
use thiserror::Error;
use uuid::Uuid;

use crate::{
    AllTimeRecords, CreateError, DeleteError, MetricSeries, Name, ReadError, SessionMetrics,
    SyncError, Unit, UpdateError, ValidationError,
};

#[allow(async_fn_in_trait)]
pub trait SetLogService {
    async fn get_sets(&self) -> Result<Vec<LoggedSet>, ReadError>;
    async fn get_history(&self, exercise: &Name) -> Result<Vec<LoggedSet>, ReadError>;
    async fn log_set(&self, set: LoggedSet) -> Result<LoggedSet, CreateError>;
    async fn replace_set(&self, set: LoggedSet) -> Result<LoggedSet, UpdateError>;
    async fn delete_set(&self, id: SetID) -> Result<SetID, DeleteError>;

    async fn get_session_metrics(
        &self,
        exercise: &Name,
        date: NaiveDate,
    ) -> Result<SessionMetrics, ReadError>;
    async fn get_all_time_records(&self, exercise: &Name) -> Result<AllTimeRecords, ReadError>;
    async fn get_records_wall(&self) -> Result<BTreeMap<Name, AllTimeRecords>, ReadError>;
    async fn get_metric_series(
        &self,
        exercise: &Name,
        series: MetricSeries,
    ) -> Result<Vec<(NaiveDate, f32)>, ReadError>;

    fn validate_set_weight(&self, weight: &str) -> Result<Weight, ValidationError> {
        Weight::try_from(weight).map_err(|err| ValidationError::Other(err.into()))
    }

    fn validate_set_reps(&self, reps: &str) -> Result<Reps, ValidationError> {
        Reps::try_from(reps).map_err(|err| ValidationError::Other(err.into()))
    }

    fn validate_set_unit(&self, unit: &str) -> Result<Unit, ValidationError> {
        Unit::try_from(unit).map_err(|err| ValidationError::Other(err.into()))
    }

    fn validate_set_date(&self, date: &str) -> Result<NaiveDate, ValidationError> {
        match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
            Ok(parsed_date) => {
                if parsed_date <= Local::now().date_naive() {
                    Ok(parsed_date)
                } else {
                    Err(ValidationError::Other(
                        "Date must not be in the future".into(),
                    ))
                }
            }
            Err(_) => Err(ValidationError::Other("Invalid date".into())),
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait SetLogRepository {
    async fn sync_sets(&self) -> Result<Vec<LoggedSet>, SyncError>;
    async fn read_sets(&self) -> Result<Vec<LoggedSet>, ReadError>;
    async fn create_set(&self, set: LoggedSet) -> Result<LoggedSet, CreateError>;
    async fn replace_set(&self, set: LoggedSet) -> Result<LoggedSet, UpdateError>;
    async fn delete_set(&self, id: SetID) -> Result<SetID, DeleteError>;
}

/// One performed set of one exercise, as entered in the log.
///
/// `rpe` and `notes` are kept for display only and take no part in any
/// derived metric.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedSet {
    pub id: SetID,
    pub exercise: Name,
    pub date: NaiveDate,
    pub set_order: SetOrder,
    pub weight: Weight,
    pub unit: Unit,
    pub reps: Reps,
    pub rpe: Option<Rpe>,
    pub notes: String,
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SetID(Uuid);

impl SetID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for SetID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for SetID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// The 1-based position of a set within its session.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct SetOrder(u32);

impl SetOrder {
    pub fn new(value: u32) -> Result<Self, SetOrderError> {
        if !(1..100).contains(&value) {
            return Err(SetOrderError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for SetOrder {
    type Error = SetOrderError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => SetOrder::new(parsed_value),
            Err(_) => Err(SetOrderError::ParseError),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum SetOrderError {
    #[error("Set number must be in the range 1 to 99")]
    OutOfRange,
    #[error("Set number must be an integer")]
    ParseError,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(1..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 1 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

/// The external resistance of a set. Zero for unweighted movements.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !(0.0..1000.0).contains(&value) {
            return Err(WeightError::OutOfRange);
        }

        if (value * 10.0 % 1.0).abs() > f32::EPSILON {
            return Err(WeightError::InvalidResolution);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.replace(',', ".").trim().parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be in the range 0.0 to 999.9")]
    OutOfRange,
    #[error("Weight must be a multiple of 0.1")]
    InvalidResolution,
    #[error("Weight must be a decimal")]
    ParseError,
}

/// Rating of perceived exertion, on the whole-number scale 1 to 10.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rpe(u8);

impl Rpe {
    pub fn new(value: u8) -> Result<Self, RpeError> {
        if !(1..=10).contains(&value) {
            return Err(RpeError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Rpe {
    type Error = RpeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u8>() {
            Ok(parsed_value) => Rpe::new(parsed_value),
            Err(_) => Err(RpeError::ParseError),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum RpeError {
    #[error("RPE must be in the range 1 to 10")]
    OutOfRange,
    #[error("RPE must be a whole number")]
    ParseError,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_set_id_nil() {
        assert!(SetID::nil().is_nil());
        assert_eq!(SetID::nil(), SetID::default());
    }

    #[rstest]
    #[case("1", Ok(SetOrder(1)))]
    #[case("99", Ok(SetOrder(99)))]
    #[case("0", Err(SetOrderError::OutOfRange))]
    #[case("100", Err(SetOrderError::OutOfRange))]
    #[case("first", Err(SetOrderError::ParseError))]
    fn test_set_order_try_from(
        #[case] value: &str,
        #[case] expected: Result<SetOrder, SetOrderError>,
    ) {
        assert_eq!(SetOrder::try_from(value), expected);
    }

    #[rstest]
    #[case("1", Ok(Reps(1)))]
    #[case("999", Ok(Reps(999)))]
    #[case("0", Err(RepsError::OutOfRange))]
    #[case("1000", Err(RepsError::OutOfRange))]
    #[case("9.5", Err(RepsError::ParseError))]
    fn test_reps_try_from(#[case] value: &str, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::try_from(value), expected);
    }

    #[rstest]
    #[case("0", Ok(Weight(0.0)))]
    #[case("82.5", Ok(Weight(82.5)))]
    #[case("82,5", Ok(Weight(82.5)))]
    #[case("999.9", Ok(Weight(999.9)))]
    #[case("-1", Err(WeightError::OutOfRange))]
    #[case("1000", Err(WeightError::OutOfRange))]
    #[case("82.55", Err(WeightError::InvalidResolution))]
    #[case("heavy", Err(WeightError::ParseError))]
    fn test_weight_try_from(#[case] value: &str, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::try_from(value), expected);
    }

    #[rstest]
    #[case("1", Ok(Rpe(1)))]
    #[case("10", Ok(Rpe(10)))]
    #[case("0", Err(RpeError::OutOfRange))]
    #[case("11", Err(RpeError::OutOfRange))]
    #[case("8.5", Err(RpeError::ParseError))]
    fn test_rpe_try_from(#[case] value: &str, #[case] expected: Result<Rpe, RpeError>) {
        assert_eq!(Rpe::try_from(value), expected);
    }
}
