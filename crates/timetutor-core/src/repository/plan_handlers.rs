//! Plan handler operations that return display wrapper types.

use jiff::civil::Date;

use super::PlanRepository;
use crate::{
    display::{DayView, Plans, ProgressView},
    models::ProgressSummary,
    outcome::Outcome,
    params::ListPlans,
    quotes,
    store::KeyValueStore,
};

impl<S: KeyValueStore> PlanRepository<S> {
    /// Lists every stored plan, or only those of `params.date` when set.
    pub fn list_plans(&self, params: &ListPlans) -> Outcome<Plans> {
        match params.date {
            Some(date) => self.list_for_date(date),
            None => self.list_all(),
        }
        .map(Plans)
    }

    /// Completion statistics for the plans dated `date`.
    pub fn progress_for_date(&self, date: Date) -> Outcome<ProgressSummary> {
        self.list_for_date(date)
            .map(|plans| ProgressSummary::from(&plans))
    }

    /// Completion statistics for today's plans.
    pub fn progress_for_today(&self) -> Outcome<ProgressSummary> {
        self.progress_for_date(self.today())
    }

    /// The plans of one day with their progress and a motivational quote.
    ///
    /// Defaults to today when `date` is `None`.
    pub fn day_view(&self, date: Option<Date>) -> Outcome<DayView> {
        let date = date.unwrap_or_else(|| self.today());
        self.list_for_date(date).map(|plans| DayView {
            date,
            progress: ProgressSummary::from(&plans),
            plans,
            quote: quotes::random_quote(),
        })
    }

    /// Today's plans with their progress, for marking them done or skipped.
    pub fn progress_view(&self) -> Outcome<ProgressView> {
        self.list_for_today().map(|plans| ProgressView {
            progress: ProgressSummary::from(&plans),
            plans,
        })
    }
}
