//! Built-in exercise library that new users start from.

use crate::{Exercise, MuscleGroup, Name};

static CATALOG: [(MuscleGroup, &[&str]); 6] = [
    (
        MuscleGroup::Chest,
        &[
            "Barbell Bench Press",
            "Incline Bench Press",
            "Incline Dumbbell Press",
            "Dumbbell Fly",
            "Cable Chest Fly",
            "Cable Chest Fly (High-to-Low)",
            "Cable Chest Fly (Low-to-High)",
            "Machine Chest Fly",
            "Seated Chest Press (Machine)",
            "Push-up",
        ],
    ),
    (
        MuscleGroup::Back,
        &[
            "Pull-up",
            "Assisted Pull-up",
            "Lat Pulldown",
            "Lat Pulldown (Wide)",
            "Lat Pulldown (Narrow)",
            "Lat Pulldown (Reverse)",
            "Seated Cable Row",
            "Single-Arm Cable Row",
            "Barbell Row",
            "Dumbbell Row",
            "Back Extension",
            "Dead Hang",
        ],
    ),
    (
        MuscleGroup::Shoulders,
        &[
            "Overhead Press",
            "Lateral Raise",
            "Front Raise",
            "Rear Delt Fly",
            "Shrug",
        ],
    ),
    (
        MuscleGroup::Legs,
        &[
            "Squat",
            "Deadlift",
            "Leg Press",
            "Leg Curl",
            "Leg Extension",
        ],
    ),
    (
        MuscleGroup::Arms,
        &[
            "Bicep Curl",
            "Preacher Curl",
            "Hammer Curl",
            "Dumbbell Bicep Curl (Single Arm)",
            "Tricep Extension",
            "Tricep Dip",
        ],
    ),
    (
        MuscleGroup::Core,
        &["Plank", "Crunches", "Russian Twist", "Leg Raise"],
    ),
];

/// The default library of a fresh account.
#[must_use]
pub fn default_exercises() -> Vec<Exercise> {
    CATALOG
        .iter()
        .flat_map(|(muscle_group, names)| {
            names.iter().filter_map(|name| {
                Name::new(name).ok().map(|name| Exercise {
                    name,
                    muscle_group: *muscle_group,
                })
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_exercises_names_unique() {
        let exercises = default_exercises();
        let names = exercises.iter().map(|e| &e.name).collect::<BTreeSet<_>>();
        assert_eq!(names.len(), exercises.len());
    }

    #[test]
    fn test_default_exercises_cover_all_muscle_groups() {
        let groups = default_exercises()
            .iter()
            .map(|e| e.muscle_group)
            .collect::<BTreeSet<_>>();
        assert_eq!(
            groups,
            MuscleGroup::iter()
                .copied()
                .filter(|g| *g != MuscleGroup::Other)
                .collect::<BTreeSet<_>>()
        );
    }

    #[test]
    fn test_default_exercises_include_assisted_movement() {
        assert!(default_exercises().iter().any(Exercise::is_assisted));
    }
}
