//! Wall-clock accounting for the CLI's phases.

use std::{cell::RefCell, collections::HashMap, time::Instant};

pub struct Timers {
    phases: RefCell<HashMap<String, (u64, f64)>>,
}

impl Timers {
    pub fn new() -> Timers {
        Timers {
            phases: RefCell::new(HashMap::new()),
        }
    }

    /// Charges the time elapsed since `start` to `name`.
    pub fn record(&self, name: &str, start: Instant) {
        let elapsed = start.elapsed().as_secs_f64();
        self.phases
            .borrow_mut()
            .entry(String::from(name))
            .and_modify(|(count, secs)| {
                *count += 1;
                *secs += elapsed;
            })
            .or_insert((1, elapsed));
    }

    pub fn report(&self) {
        let phases = self.phases.borrow();
        let mut names: Vec<&String> = phases.keys().collect();
        names.sort();
        let total: f64 = phases.values().map(|(_, secs)| secs).sum();
        for name in names {
            let (count, secs) = phases[name];
            println!(
                "{:16} {:10.6}s ({:5.2}%)  count {:4}",
                name,
                secs,
                100.0 * secs / total,
                count,
            );
        }
        println!("--> total: {:.6}s", total);
    }
}

impl Default for Timers {
    fn default() -> Timers {
        Timers::new()
    }
}
