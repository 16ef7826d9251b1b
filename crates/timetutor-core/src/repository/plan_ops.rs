//! Plan operations for the PlanRepository.

use std::collections::HashSet;

use jiff::{civil::Date, Timestamp};
use log::{debug, info};

use super::PlanRepository;
use crate::{
    models::{PlanStatus, StudyPlan},
    outcome::Outcome,
    params::CreatePlan,
    store::KeyValueStore,
};

impl<S: KeyValueStore> PlanRepository<S> {
    /// Returns every stored plan in insertion order.
    pub fn list_all(&self) -> Outcome<Vec<StudyPlan>> {
        self.store.load()
    }

    /// Appends a new incomplete plan dated today and persists the collection.
    ///
    /// `subject` and `time` are stored as given; trimming and emptiness checks
    /// belong to the caller (see [`CreatePlan::validated`]). The created plan
    /// is returned even when persisting it failed.
    pub fn create(&self, params: &CreatePlan) -> Outcome<StudyPlan> {
        let now = self.clock.now();
        let date = self.day_boundary.date_of(now);

        self.list_all().and_then(|mut plans| {
            let plan = StudyPlan {
                id: next_id(&plans, now),
                subject: params.subject.clone(),
                time: params.time.clone(),
                date,
                importance: params.importance,
                status: PlanStatus::Incomplete,
            };
            info!("Creating plan {} ({}) for {}", plan.id, plan.subject, plan.date);

            plans.push(plan.clone());
            self.store.save(&plans).map(|()| plan)
        })
    }

    /// Returns the plans dated `date`, in insertion order.
    pub fn list_for_date(&self, date: Date) -> Outcome<Vec<StudyPlan>> {
        self.list_all()
            .map(|plans| plans.into_iter().filter(|p| p.date == date).collect())
    }

    /// Returns the plans dated today.
    pub fn list_for_today(&self) -> Outcome<Vec<StudyPlan>> {
        self.list_for_date(self.today())
    }

    /// Sets the status of the plan with `id` and persists the collection.
    ///
    /// Any status may replace any other. When no plan matches, the collection
    /// is written back unchanged and `None` is returned.
    pub fn update_status(&self, id: &str, status: PlanStatus) -> Outcome<Option<StudyPlan>> {
        self.list_all().and_then(|plans| {
            let mut updated = None;
            let plans: Vec<StudyPlan> = plans
                .into_iter()
                .map(|plan| {
                    if plan.id == id {
                        let plan = plan.with_status(status);
                        updated = Some(plan.clone());
                        plan
                    } else {
                        plan
                    }
                })
                .collect();

            match &updated {
                Some(_) => info!("Marked plan {id} as {}", status.as_str()),
                None => debug!("No plan with id {id}; saving collection unchanged"),
            }

            self.store.save(&plans).map(|()| updated)
        })
    }
}

/// Picks an id for a plan created at `now`.
///
/// Ids are the creation time in Unix milliseconds. When that would not exceed
/// the largest numeric id already stored, the next integer after it is used,
/// so ids stay unique and increasing even within one millisecond. If the
/// stored ids already reach `i64::MAX`, the lowest free integer from `now`
/// upward is taken instead.
pub(crate) fn next_id(existing: &[StudyPlan], now: Timestamp) -> String {
    let candidate = now.as_millisecond();
    let taken: HashSet<&str> = existing.iter().map(|plan| plan.id.as_str()).collect();
    let highest = existing
        .iter()
        .filter_map(|plan| plan.id.parse::<i64>().ok())
        .max();

    let start = match highest {
        Some(highest) if highest >= candidate => highest.checked_add(1).unwrap_or(candidate),
        _ => candidate,
    };

    // At most `existing.len()` ids can be taken, so a free one is found.
    (start..=i64::MAX)
        .chain(i64::MIN..start)
        .map(|id| id.to_string())
        .find(|id| !taken.contains(id.as_str()))
        .unwrap_or_else(|| start.to_string())
}
