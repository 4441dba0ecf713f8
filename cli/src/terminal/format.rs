use colored::*;

use crate::terminal::colors;
use coachr_common::coaching::profile::Profile;
use coachr_common::coaching::routine::{Routine, RoutineTask};
use coachr_core::recommend::BmiCategory;

pub type Detail = (String, ColoredString);

pub fn category_color(category: BmiCategory) -> Color {
    match category {
        BmiCategory::Underweight => colors::UNDERWEIGHT,
        BmiCategory::Normal => colors::NORMAL,
        BmiCategory::Overweight => colors::OVERWEIGHT,
    }
}

pub fn profile_to_details(profile: &Profile) -> Vec<Detail> {
    vec![
        ("Name".to_string(), profile.name().normal()),
        ("Weight".to_string(), format!("{} kg", profile.weight_kg()).normal()),
        ("Height".to_string(), format!("{} m", profile.height_m()).normal()),
        ("Age".to_string(), profile.age().to_string().normal()),
        ("Availability".to_string(), profile.availability().normal()),
    ]
}

pub fn bmi_to_detail(bmi: f64) -> Detail {
    let category: BmiCategory = BmiCategory::from_bmi(bmi);
    let value: ColoredString = format!("{bmi:.2} ({category})").color(category_color(category));
    ("BMI".to_string(), value)
}

pub fn task_to_detail(task: &RoutineTask) -> Detail {
    let status: ColoredString = if task.is_completed() {
        "Completado".color(colors::COMPLETED)
    } else {
        "No completado".color(colors::PENDING)
    };
    let value: String = format!(
        "{} horas de {} - {}",
        task.hours().to_string().color(colors::HOURS),
        task.activity_label().color(colors::ACTIVITY),
        status
    );
    (task.day().label().to_string(), value.normal())
}

pub fn routine_to_details(routine: &Routine) -> Vec<Detail> {
    routine.tasks().iter().map(task_to_detail).collect()
}
