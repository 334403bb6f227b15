/* SPDX-License-Identifier: BSD-3-Clause */
/***********************************************************************************************
 * Copyright 2024-2026 Fraunhofer SIT, sponsored by the ELISA and ProSeCA research projects.
 * All rights reserved.
 **********************************************************************************************/

use log::debug;
use std::sync::{Mutex, MutexGuard, Once};

/* Defaults */
const ITERATIONS_DEFAULT: usize = 100_000;

/* One-time initialization */
static ENV_LOGGER_INIT: Once = Once::new();

/* The mutex lock */
static MUTEX: Mutex<bool> = Mutex::new(false);

/* Accquire the lock */
macro_rules! accquire_lock {
    ($mutex:ident, $lock:ident) => {
        let mut $lock = $mutex.lock().or_else(|err| Ok::<_, ()>(err.into_inner())).unwrap();
        assert_eq!(*$lock, false);
        *$lock = true;
    };
}

pub struct TestConfiguration<'a> {
    uniq_lock: MutexGuard<'a, bool>,
    iterations: usize,
}

impl Default for TestConfiguration<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl TestConfiguration<'_> {
    pub fn new() -> Self {
        accquire_lock!(MUTEX, uniq_lock);
        ENV_LOGGER_INIT.call_once(env_logger::init);

        let iterations = option_env!("TSS2_RC_TEST_ITERATIONS")
            .and_then(|value| value.parse::<usize>().ok())
            .unwrap_or(ITERATIONS_DEFAULT);
        debug!("Iterations for randomized tests: {}", iterations);

        Self { uniq_lock, iterations }
    }

    #[allow(dead_code)]
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

impl Drop for TestConfiguration<'_> {
    fn drop(&mut self) {
        *self.uniq_lock = false;
    }
}
