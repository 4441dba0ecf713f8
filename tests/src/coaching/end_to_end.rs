use coachr_common::coaching::activity::{ActivityKind, cardio, strength_training, yoga};
use coachr_common::coaching::profile::Profile;
use coachr_common::config::{Config, Language};
use coachr_core::registry::Registry;

fn carlos() -> Profile {
    Profile::new("Carlos Perez", 70.5, 1.75, 28, "Tres días a la semana")
}

/// The reference run: one profile, the three catalog activities, a three day routine.
#[test]
fn reference_scenario() {
    let mut registry: Registry = Registry::new(Box::new(|| ActivityKind::Strength));

    let profile = registry.add_profile(carlos());
    registry.add_activity(cardio());
    registry.add_activity(strength_training());
    registry.add_activity(yoga());

    let bmi: f64 = profile.bmi().unwrap();
    assert!((bmi - 23.02).abs() < 0.01, "unexpected bmi {bmi}");

    let recommendations = registry.routine_recommendations(&profile).unwrap();
    assert_eq!(
        recommendations,
        [
            "Maintain with cardio exercises.",
            "Endurance routine 4x/week.",
            "Balanced calorie-controlled diet."
        ]
    );

    let routine = registry.create_routine(&profile, 3, 2).unwrap();
    let days: Vec<&str> = routine.tasks().iter().map(|t| t.day().label()).collect();
    assert_eq!(days, ["Lunes", "Martes", "Miércoles"]);
    assert!(routine.tasks().iter().all(|t| t.hours() == 2));
    assert!(routine.tasks().iter().all(|t| !t.is_completed()));
    assert!(routine.tasks().iter().all(|t| t.activity_label() == "Fuerza"));

    let labels: Vec<&str> = registry.activity_history().iter().map(|a| a.label()).collect();
    assert_eq!(labels, ["Cardio", "Entrenamiento de Fuerza", "Yoga"]);
}

#[test]
fn reference_scenario_with_random_activities() {
    let cfg = Config {
        seed: Some(2024),
        language: Language::Spanish,
        ..Config::default()
    };
    let mut registry = Registry::from_config(&cfg);
    let profile = registry.add_profile(carlos());

    let routine = registry.create_routine(&profile, 3, 2).unwrap();
    assert_eq!(routine.tasks().len(), 3);
    for task in routine.tasks() {
        assert!(["Cardio", "Fuerza", "Yoga"].contains(&task.activity_label()));
    }

    assert_eq!(
        registry.routine_recommendations(&profile).unwrap(),
        [
            "Mantener con ejercicios de cardio.",
            "Rutina de resistencia 4 veces por semana.",
            "Dieta balanceada con control calórico."
        ]
    );
}

#[test]
fn completing_the_week() {
    let mut registry = Registry::new(Box::new(|| ActivityKind::Yoga));
    let profile = registry.add_profile(carlos());
    registry.create_routine(&profile, 3, 2).unwrap();

    for task in 0..3 {
        registry.mark_task_completed(0, task).unwrap();
    }
    registry.mark_task_completed(0, 2).unwrap();

    let routine = &registry.routines()[0];
    assert_eq!(routine.completed_count(), 3);
    assert_eq!(routine.total_hours(), 6);
    assert_eq!(routine.tasks()[0].to_string(), "Lunes: 2 horas de Yoga - Completado");
}

#[test]
fn zero_height_surfaces_as_error() {
    let mut registry = Registry::default();
    let profile = registry.add_profile(Profile::new("Nadie", 70.0, 0.0, 30, ""));
    let err = registry.routine_recommendations(&profile).unwrap_err();
    assert!(err.to_string().contains("invalid height"));
}
