use std::slice::Iter;

use derive_more::Display;

use crate::{CreateError, DeleteError, Name, ReadError, SyncError, ValidationError};

#[allow(async_fn_in_trait)]
pub trait ExerciseService {
    async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    async fn create_exercise(
        &self,
        name: Name,
        muscle_group: MuscleGroup,
    ) -> Result<Exercise, CreateError>;
    async fn delete_exercise(&self, name: Name) -> Result<Name, DeleteError>;

    async fn validate_exercise_name(&self, name: &str) -> Result<Name, ValidationError> {
        match Name::new(name) {
            Ok(name) => match self.get_exercises().await {
                Ok(exercises) => {
                    if exercises.iter().all(|e| e.name != name) {
                        Ok(name)
                    } else {
                        Err(ValidationError::Conflict("name".to_string()))
                    }
                }
                Err(err) => Err(ValidationError::Other(err.into())),
            },
            Err(err) => Err(ValidationError::Other(err.into())),
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    async fn sync_exercises(&self) -> Result<Vec<Exercise>, SyncError>;
    async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    async fn create_exercise(
        &self,
        name: Name,
        muscle_group: MuscleGroup,
    ) -> Result<Exercise, CreateError>;
    async fn delete_exercise(&self, name: Name) -> Result<Name, DeleteError>;
}

/// An entry of the exercise library. Exercises are identified by name, scoped
/// to one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub name: Name,
    pub muscle_group: MuscleGroup,
}

impl Exercise {
    #[must_use]
    pub fn kind(&self) -> ExerciseKind {
        ExerciseKind::infer(self.name.as_ref())
    }

    #[must_use]
    pub fn is_assisted(&self) -> bool {
        is_assisted(self.name.as_ref())
    }
}

#[derive(Debug, Default, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MuscleGroup {
    #[display("Chest")]
    Chest,
    #[display("Back")]
    Back,
    #[display("Shoulders")]
    Shoulders,
    #[display("Legs")]
    Legs,
    #[display("Arms")]
    Arms,
    #[display("Core")]
    Core,
    #[default]
    #[display("Other")]
    Other,
}

impl MuscleGroup {
    pub fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 7] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Legs,
            MuscleGroup::Arms,
            MuscleGroup::Core,
            MuscleGroup::Other,
        ];
        MUSCLE_GROUPS.iter()
    }
}

impl From<&str> for MuscleGroup {
    fn from(value: &str) -> Self {
        static KEYWORDS: [(&str, MuscleGroup); 6] = [
            ("chest", MuscleGroup::Chest),
            ("back", MuscleGroup::Back),
            ("shoulder", MuscleGroup::Shoulders),
            ("leg", MuscleGroup::Legs),
            ("arm", MuscleGroup::Arms),
            ("core", MuscleGroup::Core),
        ];
        let normalized = value.trim().to_lowercase();
        KEYWORDS
            .iter()
            .find(|(keyword, _)| normalized.contains(keyword))
            .map_or(MuscleGroup::Other, |(_, group)| *group)
    }
}

/// Equipment category of an exercise, guessed from its name the way the log
/// entry form pre-selects it.
#[derive(Debug, Default, Display, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseKind {
    #[display("Barbell")]
    Barbell,
    #[display("Dumbbell")]
    Dumbbell,
    #[display("Cable")]
    Cable,
    #[display("Machine")]
    Machine,
    #[display("Bodyweight")]
    Bodyweight,
    #[default]
    #[display("Other")]
    Other,
}

impl ExerciseKind {
    #[must_use]
    pub fn infer(name: &str) -> ExerciseKind {
        let name = name.to_lowercase();
        let contains_any = |keywords: &[&str]| keywords.iter().any(|k| name.contains(k));

        if contains_any(&["barbell", "bb "]) {
            ExerciseKind::Barbell
        } else if contains_any(&["dumbbell", "db ", "single-arm"]) {
            ExerciseKind::Dumbbell
        } else if contains_any(&["cable", "pulley"]) {
            ExerciseKind::Cable
        } else if contains_any(&["machine", "seated"]) {
            ExerciseKind::Machine
        } else if contains_any(&["pull-up", "push-up", "dip", "plank", "bodyweight"]) {
            ExerciseKind::Bodyweight
        } else {
            ExerciseKind::Other
        }
    }
}

/// Whether the named movement is machine-assisted. On those machines a lower
/// setting removes less of the lifter's body weight and is the harder set.
#[must_use]
pub fn is_assisted(name: &str) -> bool {
    name.to_lowercase().contains("assist")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Chest", MuscleGroup::Chest)]
    #[case("  BACK  ", MuscleGroup::Back)]
    #[case("shoulders", MuscleGroup::Shoulders)]
    #[case("shoulder", MuscleGroup::Shoulders)]
    #[case("Upper Legs", MuscleGroup::Legs)]
    #[case("arms", MuscleGroup::Arms)]
    #[case("core", MuscleGroup::Core)]
    #[case("grip", MuscleGroup::Other)]
    fn test_muscle_group_from_str(#[case] value: &str, #[case] expected: MuscleGroup) {
        assert_eq!(MuscleGroup::from(value), expected);
    }

    #[test]
    fn test_muscle_group_iter() {
        assert_eq!(MuscleGroup::iter().count(), 7);
    }

    #[rstest]
    #[case("Barbell Bench Press", ExerciseKind::Barbell)]
    #[case("BB Row", ExerciseKind::Barbell)]
    #[case("Incline Dumbbell Press", ExerciseKind::Dumbbell)]
    #[case("Single-Arm Cable Row", ExerciseKind::Dumbbell)]
    #[case("Cable Chest Fly (High-to-Low)", ExerciseKind::Cable)]
    #[case("Seated Chest Press (Machine)", ExerciseKind::Machine)]
    #[case("Pull-up", ExerciseKind::Bodyweight)]
    #[case("Tricep Dip", ExerciseKind::Bodyweight)]
    #[case("Deadlift", ExerciseKind::Other)]
    fn test_exercise_kind_infer(#[case] name: &str, #[case] expected: ExerciseKind) {
        assert_eq!(ExerciseKind::infer(name), expected);
    }

    #[rstest]
    #[case("Assisted Pull-up", true)]
    #[case("Assist Dip Machine", true)]
    #[case("Pull-up", false)]
    #[case("Bench Press", false)]
    fn test_is_assisted(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_assisted(name), expected);
        let exercise = Exercise {
            name: Name::new(name).unwrap(),
            muscle_group: MuscleGroup::Back,
        };
        assert_eq!(exercise.is_assisted(), expected);
    }
}
