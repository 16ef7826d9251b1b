use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use jiff::civil::Date;
use timetutor_core::{params::*, Importance, PlanStatus};

/// TimeTutor: plan today's study sessions and track how they went
///
/// Plans are kept in a local SQLite file. Each plan records a subject, a
/// free-form time window and an importance level, and can be marked done or
/// skipped once the session is over.
#[derive(Parser)]
#[command(version, about, name = "timetutor")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/timetutor/timetutor.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Date plans by the local calendar day instead of the UTC day
    #[arg(long, global = true)]
    pub local_dates: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the TimeTutor CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Add a study plan for today
    #[command(alias = "a")]
    Add(AddPlanArgs),
    /// Show a day's plans with progress and a quote (default)
    #[command(alias = "v")]
    View(ViewArgs),
    /// Show today's progress and plan ids
    #[command(alias = "t")]
    Track,
    /// Mark a plan as done
    #[command(alias = "d")]
    Done(PlanIdArgs),
    /// Mark a plan as skipped
    #[command(alias = "s")]
    Skip(PlanIdArgs),
    /// Move a plan back to incomplete
    Reset(PlanIdArgs),
    /// List stored plans
    #[command(aliases = ["l", "ls"])]
    List(ListArgs),
    /// Print a motivational quote
    #[command(alias = "q")]
    Quote,
}

/// Add a study plan for today
#[derive(ClapArgs)]
pub struct AddPlanArgs {
    /// Subject to study, e.g. "Maths"
    pub subject: String,
    /// When to study, e.g. "7PM to 8PM" or "2-3 hours"
    pub time: String,
    /// Priority of the plan
    #[arg(short, long, value_enum, default_value_t = ImportanceArg::Medium)]
    pub importance: ImportanceArg,
}

impl From<AddPlanArgs> for CreatePlan {
    fn from(val: AddPlanArgs) -> Self {
        CreatePlan {
            subject: val.subject,
            time: val.time,
            importance: val.importance.into(),
        }
    }
}

/// Show one day's plans
#[derive(ClapArgs, Default)]
pub struct ViewArgs {
    /// Day to show (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<Date>,
}

/// Identify a plan by id
#[derive(ClapArgs)]
pub struct PlanIdArgs {
    #[arg(help = "ID of the plan, as shown by `track` or `list`")]
    pub id: String,
}

impl PlanIdArgs {
    /// Pair the id with the status the command moves it to.
    pub fn into_params(self, status: PlanStatus) -> UpdateStatus {
        UpdateStatus {
            id: self.id,
            status,
        }
    }
}

/// List stored plans
#[derive(ClapArgs)]
pub struct ListArgs {
    /// Only list plans of this day (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<Date>,
}

impl From<ListArgs> for ListPlans {
    fn from(val: ListArgs) -> Self {
        ListPlans { date: val.date }
    }
}

/// Command-line representation of plan importance
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum ImportanceArg {
    High,
    Medium,
    Low,
}

impl From<ImportanceArg> for Importance {
    fn from(val: ImportanceArg) -> Self {
        match val {
            ImportanceArg::High => Importance::High,
            ImportanceArg::Medium => Importance::Medium,
            ImportanceArg::Low => Importance::Low,
        }
    }
}
