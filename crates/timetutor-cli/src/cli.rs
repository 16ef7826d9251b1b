//! Command handlers for the TimeTutor CLI.
//!
//! Each handler converts its clap arguments into core parameters, calls the
//! repository, and renders the resulting display type. Storage degradations
//! are logged rather than surfaced: a failed save still reports the operation
//! as done.

use anyhow::{Context, Result};
use jiff::civil::Date;
use log::warn;
use timetutor_core::{
    quotes, CreatePlan, CreateResult, KeyValueStore, ListPlans, OperationStatus, Outcome,
    PlanRepository, PlanStatus, UpdateResult,
};

use crate::{
    args::{AddPlanArgs, ListArgs, PlanIdArgs},
    renderer::TerminalRenderer,
};

pub struct Cli<S> {
    repository: PlanRepository<S>,
    renderer: TerminalRenderer,
}

impl<S: KeyValueStore> Cli<S> {
    pub fn new(repository: PlanRepository<S>, renderer: TerminalRenderer) -> Self {
        Self {
            repository,
            renderer,
        }
    }

    pub fn add_plan(&self, args: AddPlanArgs) -> Result<()> {
        let params = CreatePlan::from(args)
            .validated()
            .context("Subject and time both need to be filled in")?;

        let plan = report(self.repository.create(&params));
        self.renderer.render(&CreateResult::new(plan).to_string())
    }

    pub fn view_day(&self, date: Option<Date>) -> Result<()> {
        let view = report(self.repository.day_view(date));
        self.renderer.render(&view.to_string())
    }

    pub fn track_progress(&self) -> Result<()> {
        let view = report(self.repository.progress_view());
        self.renderer.render(&view.to_string())
    }

    pub fn set_status(&self, args: PlanIdArgs, status: PlanStatus) -> Result<()> {
        let params = args.into_params(status);
        let output = match report(self.repository.update_status(&params.id, params.status)) {
            Some(plan) => UpdateResult::new(plan).to_string(),
            None => OperationStatus::plan_not_found(&params.id).to_string(),
        };
        self.renderer.render(&output)
    }

    pub fn list_plans(&self, args: ListArgs) -> Result<()> {
        let params = ListPlans::from(args);
        let plans = report(self.repository.list_plans(&params));

        let title = match params.date {
            Some(date) => format!("# Plans for {date}"),
            None => "# All Plans".to_string(),
        };
        self.renderer.render(&format!("{title}\n\n{plans}"))
    }

    pub fn show_quote(&self) -> Result<()> {
        self.renderer.render(&format!("{}\n", quotes::random_quote()))
    }
}

/// Logs any absorbed storage failures and returns the value.
fn report<T>(outcome: Outcome<T>) -> T {
    let (value, degradations) = outcome.into_parts();
    for degradation in &degradations {
        warn!("{degradation}");
    }
    value
}
