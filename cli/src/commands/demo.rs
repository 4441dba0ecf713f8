use std::sync::Arc;

use colored::*;

use crate::commands::{ProfileArgs, ScheduleArgs};
use crate::mprint;
use crate::terminal::{colors, format, print};
use coachr_common::coaching::activity::{cardio, strength_training, yoga};
use coachr_common::coaching::profile::Profile;
use coachr_common::config::Config;
use coachr_core::registry::Registry;

pub fn demo(profile_args: &ProfileArgs, schedule: &ScheduleArgs, cfg: &Config) -> anyhow::Result<()> {
    let mut registry: Registry = Registry::from_config(cfg);

    print::header("registering", cfg.quiet);
    let profile: Arc<Profile> = registry.add_profile(profile_args.to_profile());
    registry.add_activity(cardio());
    registry.add_activity(strength_training());
    registry.add_activity(yoga());

    registry.create_routine(&profile, schedule.days, schedule.hours)?;

    let recommendations: [&str; 3] = registry.routine_recommendations(&profile)?;
    print_recommendations(&profile, &recommendations, cfg)?;

    print_routines(&registry, cfg);
    Ok(())
}

fn print_recommendations(profile: &Profile, recommendations: &[&str], cfg: &Config) -> anyhow::Result<()> {
    print::header("recommendations", cfg.quiet);
    if cfg.quiet < 2 {
        let mut details: Vec<format::Detail> = format::profile_to_details(profile);
        details.push(format::bmi_to_detail(profile.bmi()?));
        print::tree_head(0, profile.name());
        print::as_tree_one_level(details);
        mprint!();
    }
    for rec in recommendations {
        print::print_status(rec);
    }
    Ok(())
}

fn print_routines(registry: &Registry, cfg: &Config) {
    print::header("routines", cfg.quiet);

    for (idx, routine) in registry.routines().iter().enumerate() {
        print::tree_head(idx, &routine.to_string());
        if routine.tasks().is_empty() {
            print::print_status("No training days scheduled.");
        } else {
            print::as_tree_one_level(format::routine_to_details(routine));
        }
        if idx + 1 != registry.routines().len() {
            mprint!();
        }
    }

    if cfg.quiet == 0 {
        let total_hours: u64 = registry.routines().iter().map(|r| r.total_hours()).sum();
        let summary: ColoredString = format!(
            "{} routines, {} hours of training",
            registry.routines().len().to_string().bold().green(),
            total_hours.to_string().bold().yellow()
        )
        .color(colors::TEXT_DEFAULT);
        print::fat_separator();
        print::centerln(&summary.to_string());
        print::end_of_program();
    }
}
