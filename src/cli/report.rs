//! Report CLI command
//!
//! Feeds expenses and a budget given on the command line through the same
//! form operations the TUI uses, then prints the list and totals once.

use std::str::FromStr;

use clap::Args;
use tracing::debug;

use crate::config::Settings;
use crate::display::{format_expense_list, format_summary};
use crate::error::{TrackerError, TrackerResult};
use crate::models::CategoryFilter;
use crate::tracker::ExpenseTracker;

/// One `--expense CATEGORY,AMOUNT,DATE` argument
///
/// Fields are kept as typed; empty fields make the submit a no-op just as an
/// incomplete form does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseArg {
    pub category: String,
    pub amount: String,
    pub date: String,
}

impl FromStr for ExpenseArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.splitn(3, ',').collect();
        match parts.as_slice() {
            [category, amount, date] => Ok(Self {
                category: category.trim().to_string(),
                amount: amount.trim().to_string(),
                date: date.trim().to_string(),
            }),
            _ => Err(format!(
                "expected CATEGORY,AMOUNT,DATE but got '{}'",
                s
            )),
        }
    }
}

/// Arguments for `report`
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Expense as CATEGORY,AMOUNT,DATE (date as YYYY-MM-DD); repeatable
    #[arg(short, long = "expense", value_name = "CATEGORY,AMOUNT,DATE")]
    pub expenses: Vec<ExpenseArg>,

    /// Budget to compare the total against
    #[arg(short, long)]
    pub budget: Option<String>,

    /// Only list expenses in this category ("All" lists everything)
    #[arg(short, long, default_value = "All")]
    pub filter: String,
}

/// Build a tracker from report arguments
pub fn build_tracker(settings: &Settings, args: &ReportArgs) -> TrackerResult<ExpenseTracker> {
    let mut tracker = ExpenseTracker::with_date_format(settings.date_format.clone());

    for arg in &args.expenses {
        if !arg.category.is_empty()
            && !settings
                .category_mode
                .accepts(&settings.categories, &arg.category)
        {
            return Err(TrackerError::Validation(format!(
                "Unknown category '{}'. Choose one of: {}",
                arg.category,
                settings.categories.join(", ")
            )));
        }

        tracker.form.category = arg.category.clone();
        tracker.form.amount = arg.amount.clone();
        tracker.form.date = arg.date.clone();
        let outcome = tracker.submit_expense();
        debug!(?arg, ?outcome, "Submitted expense from command line");
    }

    if let Some(budget) = &args.budget {
        tracker.budget_input = budget.clone();
        tracker.set_budget();
    }

    tracker.set_filter(CategoryFilter::from_selection(&args.filter));
    Ok(tracker)
}

/// Handle the report command
pub fn handle_report_command(settings: &Settings, args: ReportArgs) -> TrackerResult<()> {
    let tracker = build_tracker(settings, &args)?;

    if *tracker.filter() != CategoryFilter::All {
        println!("Filter: {}", tracker.filter());
    }
    println!("{}", format_expense_list(&tracker, &settings.currency_symbol));
    println!();
    print!("{}", format_summary(&tracker, &settings.currency_symbol));

    Ok(())
}
