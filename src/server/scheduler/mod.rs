//! Scheduler for the weekly breach notification sweep.
//!
//! Registers a cron job evaluated in a fixed timezone. Each run builds a [`BreachSweep`]
//! from the injected collaborators and logs its summary. The sweep has no cancellation
//! hook; once started it runs over every opted-in user.

pub mod config;
pub mod sweep;

use std::sync::Arc;

use chrono_tz::Tz;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::Error, model::app::AppState};

use self::sweep::BreachSweep;

/// Job scheduler for background breach notification tasks.
pub struct Scheduler {
    state: AppState,
    sched: JobScheduler,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// # Arguments
    /// - `state` - Collaborators handed to every scheduled run
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Successfully created scheduler instance
    /// - `Err(Error)` - Failed to initialize the underlying job scheduler
    pub async fn new(state: AppState) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self { state, sched })
    }

    /// Registers the breach notification sweep and starts the scheduler.
    ///
    /// Returns the running [`JobScheduler`], which must be kept alive for jobs to keep firing.
    ///
    /// # Arguments
    /// - `cron` - Cron expression of the sweep, e.g. "0 0 20 * * Sun"
    /// - `timezone` - Timezone the cron expression is evaluated in
    ///
    /// # Returns
    /// - `Ok(JobScheduler)` - Sweep registered and scheduler started
    /// - `Err(Error)` - Invalid cron expression or scheduler failure
    pub async fn start(mut self, cron: &str, timezone: Tz) -> Result<JobScheduler, Error> {
        self.schedule_job(cron, timezone, "breach notification sweep", run_breach_sweep)
            .await?;

        self.sched.start().await?;

        Ok(self.sched)
    }

    /// Schedules a recurring job with the specified cron expression.
    ///
    /// The function receives a clone of the application state on every run. Success and
    /// failure are logged with the job name.
    ///
    /// # Arguments
    /// - `cron` - Cron expression defining when the job runs
    /// - `timezone` - Timezone the cron expression is evaluated in
    /// - `name` - Human-readable name for the job (used in log messages)
    /// - `function` - Async function run on every trigger, returning a printable summary
    ///
    /// # Returns
    /// - `Ok(())` - Job successfully registered with the scheduler
    /// - `Err(Error)` - Invalid cron expression, or the scheduler refused the job
    pub async fn schedule_job<F, Fut, T>(
        &mut self,
        cron: &str,
        timezone: Tz,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(AppState) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<T, Error>> + Send + 'static,
        T: std::fmt::Debug,
    {
        let state = self.state.clone();
        let name = name.to_string();
        let function = Arc::new(function);

        self.sched
            .add(Job::new_async_tz(cron, timezone, move |_, _| {
                let state = state.clone();
                let name = name.clone();
                let function = Arc::clone(&function);

                Box::pin(async move {
                    tracing::info!("Starting {}", name);

                    match function(state).await {
                        Ok(summary) => tracing::info!("Finished {}: {:?}", name, summary),
                        Err(e) => tracing::error!("Error running {}: {}", name, e),
                    }
                })
            })?)
            .await?;

        Ok(())
    }
}

/// Runs one breach notification sweep with the collaborators in `state`.
pub async fn run_breach_sweep(state: AppState) -> Result<sweep::SweepSummary, Error> {
    let sweep = BreachSweep::new(
        &state.db,
        &state.hibp_client,
        state.mailer.as_ref(),
        &state.templates,
    );

    sweep.run().await
}
