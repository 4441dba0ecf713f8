pub mod demo;
pub mod recommend;

use clap::{Args, Parser, Subcommand, ValueEnum};
use coachr_common::coaching::profile::Profile;
use coachr_common::config::{Config, Language};

pub const DEMO_NAME: &str = "Carlos Perez";
pub const DEMO_WEIGHT_KG: f64 = 70.5;
pub const DEMO_HEIGHT_M: f64 = 1.75;
pub const DEMO_AGE: u32 = 28;
pub const DEMO_AVAILABILITY: &str = "Tres días a la semana";
pub const DEMO_DAYS: i32 = 3;
pub const DEMO_HOURS: i32 = 2;

#[derive(Parser)]
#[command(name = "coachr")]
#[command(about = "Weekly training routines and BMI based advice.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Reduce output; repeat to print results only
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Language of the recommendations
    #[arg(long, value_enum, default_value_t = Lang::En, global = true)]
    pub lang: Lang,

    /// Seed for activity assignment, makes routines reproducible
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a profile and activities, build a routine and print everything
    #[command(alias = "d")]
    Demo {
        #[command(flatten)]
        profile: ProfileArgs,
        #[command(flatten)]
        schedule: ScheduleArgs,
    },
    /// Print BMI and recommendations for a profile
    #[command(alias = "r")]
    Recommend {
        #[command(flatten)]
        profile: ProfileArgs,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Demo {
            profile: ProfileArgs::default(),
            schedule: ScheduleArgs::default(),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    #[arg(long, default_value = DEMO_NAME)]
    pub name: String,
    /// Weight in kilograms
    #[arg(long, default_value_t = DEMO_WEIGHT_KG, allow_negative_numbers = true)]
    pub weight: f64,
    /// Height in meters
    #[arg(long, default_value_t = DEMO_HEIGHT_M, allow_negative_numbers = true)]
    pub height: f64,
    #[arg(long, default_value_t = DEMO_AGE)]
    pub age: u32,
    #[arg(long, default_value = DEMO_AVAILABILITY)]
    pub availability: String,
}

impl Default for ProfileArgs {
    fn default() -> Self {
        Self {
            name: DEMO_NAME.to_string(),
            weight: DEMO_WEIGHT_KG,
            height: DEMO_HEIGHT_M,
            age: DEMO_AGE,
            availability: DEMO_AVAILABILITY.to_string(),
        }
    }
}

impl ProfileArgs {
    pub fn to_profile(&self) -> Profile {
        Profile::new(
            self.name.clone(),
            self.weight,
            self.height,
            self.age,
            self.availability.clone(),
        )
    }
}

#[derive(Args, Debug, Clone)]
pub struct ScheduleArgs {
    /// Days per week available for training
    #[arg(long, default_value_t = DEMO_DAYS, allow_negative_numbers = true)]
    pub days: i32,
    /// Hours per training day
    #[arg(long, default_value_t = DEMO_HOURS, allow_negative_numbers = true)]
    pub hours: i32,
}

impl Default for ScheduleArgs {
    fn default() -> Self {
        Self {
            days: DEMO_DAYS,
            hours: DEMO_HOURS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Lang {
    En,
    Es,
}

impl From<Lang> for Language {
    fn from(lang: Lang) -> Self {
        match lang {
            Lang::En => Language::English,
            Lang::Es => Language::Spanish,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            quiet: self.quiet,
            no_banner: self.no_banner,
            language: self.lang.into(),
            seed: self.seed,
        }
    }
}
