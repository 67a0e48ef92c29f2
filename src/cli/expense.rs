//! Expense CLI commands
//!
//! `list` and `stats`: load the expense file, build a view for one captured
//! date, and print it.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use crate::config::paths::SpendviewPaths;
use crate::config::settings::Settings;
use crate::display::{format_expense_view, format_stats};
use crate::error::SpendviewResult;
use crate::models::Expense;
use crate::reports::{ExpenseFilter, ExpenseStats, ExpenseView, FilterMode};
use crate::storage::ExpenseStore;

/// Where expenses come from and which date counts as today
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Expense file (JSON array, API response, or CSV); defaults to the data directory
    #[arg(long, env = "SPENDVIEW_FILE")]
    pub file: Option<PathBuf>,

    /// Treat this date as today (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub today: Option<NaiveDate>,
}

impl SourceArgs {
    /// The store to read from
    pub fn store(&self, paths: &SpendviewPaths) -> ExpenseStore {
        match &self.file {
            Some(path) => ExpenseStore::new(path),
            None => ExpenseStore::new(paths.expenses_file()),
        }
    }

    /// The captured date for this invocation
    pub fn today(&self, settings: &Settings) -> NaiveDate {
        self.today.unwrap_or_else(|| settings.time_basis.today())
    }

    /// Load every expense from the selected file
    pub fn load(&self, paths: &SpendviewPaths) -> SpendviewResult<Vec<Expense>> {
        self.store(paths).load()
    }
}

/// Filter and search options for a view
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Date window
    #[arg(short, long, value_enum, default_value_t)]
    pub filter: FilterMode,

    /// Case-insensitive search over description, category, amount and tags
    #[arg(short, long)]
    pub search: Option<String>,
}

impl ViewArgs {
    /// The filter these options describe
    pub fn expense_filter(&self) -> ExpenseFilter {
        ExpenseFilter::new()
            .mode(self.filter)
            .query(self.search.clone().unwrap_or_default())
    }

    /// Load expenses and build the view
    pub fn build_view(
        &self,
        paths: &SpendviewPaths,
        settings: &Settings,
    ) -> SpendviewResult<ExpenseView> {
        let expenses = self.source.load(paths)?;
        let today = self.source.today(settings);

        Ok(ExpenseView::generate(
            &expenses,
            &self.expense_filter(),
            today,
            &settings.view_options(),
        ))
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{}', expected YYYY-MM-DD", s))
}

/// Handle the `list` command
pub fn handle_list_command(
    paths: &SpendviewPaths,
    settings: &Settings,
    args: &ViewArgs,
    with_stats: bool,
) -> SpendviewResult<()> {
    let view = args.build_view(paths, settings)?;

    print!("{}", format_expense_view(&view, settings));

    if with_stats {
        println!();
        print!("{}", format_stats(&view.stats, settings));
    }

    Ok(())
}

/// Handle the `stats` command
pub fn handle_stats_command(
    paths: &SpendviewPaths,
    settings: &Settings,
    args: &SourceArgs,
) -> SpendviewResult<()> {
    let expenses = args.load(paths)?;
    let today = args.today(settings);
    let stats = ExpenseStats::compute(&expenses, today, settings.breakdown_limit);

    print!("{}", format_stats(&stats, settings));
    Ok(())
}
