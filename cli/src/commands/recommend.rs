use crate::commands::ProfileArgs;
use crate::terminal::{format, print};
use coachr_common::coaching::profile::Profile;
use coachr_common::config::Config;
use coachr_core::recommend::{self, BmiCategory};

pub fn recommend(profile_args: &ProfileArgs, cfg: &Config) -> anyhow::Result<()> {
    let profile: Profile = profile_args.to_profile();
    let bmi: f64 = profile.bmi()?;
    let category: BmiCategory = BmiCategory::from_bmi(bmi);

    print::header("body mass index", cfg.quiet);
    if cfg.quiet < 2 {
        let (key, value) = format::bmi_to_detail(bmi);
        print::aligned_line(&key, 8, value);
        print::aligned_line("Category", 8, category.to_string());
    }

    print::header("recommendations", cfg.quiet);
    for rec in recommend::recommendations_for(&profile, cfg.language)? {
        print::print_status(rec);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_config() -> Config {
        Config {
            quiet: 2,
            no_banner: true,
            ..Config::default()
        }
    }

    #[test]
    fn default_profile_succeeds() {
        let cfg = Config {
            no_banner: true,
            ..Config::default()
        };
        assert!(recommend(&ProfileArgs::default(), &cfg).is_ok());
    }

    #[test]
    fn zero_height_fails_with_invalid_height() {
        let profile = ProfileArgs {
            height: 0.0,
            ..ProfileArgs::default()
        };
        let err = recommend(&profile, &quiet_config()).unwrap_err();
        assert!(err.to_string().contains("invalid height"), "unexpected error: {err}");
    }

    #[test]
    fn negative_height_fails() {
        let profile = ProfileArgs {
            height: -1.75,
            ..ProfileArgs::default()
        };
        assert!(recommend(&profile, &quiet_config()).is_err());
    }
}
