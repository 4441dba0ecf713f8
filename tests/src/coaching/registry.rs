use std::sync::{Arc, Mutex};
use std::thread;

use coachr_common::coaching::activity::ActivityKind;
use coachr_common::coaching::profile::Profile;
use coachr_common::coaching::weekday::Weekday;
use coachr_core::registry::Registry;
use rand::SeedableRng;
use rand::rngs::StdRng;

use coachr_core::picker::RandomPicker;

#[test]
fn accumulates_in_call_order() {
    let mut registry = Registry::new(Box::new(RandomPicker::new(StdRng::seed_from_u64(5))));
    let k: usize = 6;

    for idx in 0..k {
        let profile = registry.add_profile(Profile::new(format!("user-{idx}"), 60.0, 1.7, 20, ""));
        registry.add_activity(ActivityKind::ALL[idx % 3]);
        registry.create_routine(&profile, idx as i32, 1).unwrap();
    }

    assert_eq!(registry.profiles().len(), k);
    assert_eq!(registry.activity_history().len(), k);
    assert_eq!(registry.routines().len(), k);

    for (idx, routine) in registry.routines().iter().enumerate() {
        assert_eq!(routine.profile().name(), format!("user-{idx}"));
        assert_eq!(routine.tasks().len(), idx);
    }
}

#[test]
fn long_availability_cycles_weekdays() {
    let mut registry = Registry::new(Box::new(|| ActivityKind::Cardio));
    let profile = registry.add_profile(Profile::new("Ana", 58.0, 1.62, 35, "Todos los días"));
    let routine = registry.create_routine(&profile, 20, 1).unwrap();

    for (idx, task) in routine.tasks().iter().enumerate() {
        assert_eq!(task.day(), Weekday::nth(idx));
    }
    assert_eq!(routine.tasks()[7].day(), Weekday::Monday);
    assert_eq!(routine.tasks()[19].day(), Weekday::Saturday);
}

#[test]
fn shared_behind_a_mutex() {
    let registry = Arc::new(Mutex::new(Registry::new(Box::new(|| ActivityKind::Yoga))));

    let handles: Vec<_> = (0..4)
        .map(|idx| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let mut registry = registry.lock().unwrap();
                let profile = registry.add_profile(Profile::new(format!("t{idx}"), 70.0, 1.8, 40, ""));
                registry.create_routine(&profile, 2, 1).unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let registry = registry.lock().unwrap();
    assert_eq!(registry.profiles().len(), 4);
    assert_eq!(registry.routines().len(), 4);
}
