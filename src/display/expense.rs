//! Expense view rendering
//!
//! Turns an [`ExpenseView`] into the month → week → expense listing and the
//! statistics panel.

use chrono::NaiveDate;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::format::{
    category_label, format_bar, format_currency, format_percentage, format_relative_date,
    separator, truncate,
};
use crate::config::Settings;
use crate::models::Expense;
use crate::reports::{ExpenseStats, ExpenseView};

const LINE_WIDTH: usize = 64;
const BAR_WIDTH: usize = 20;

/// Format a single expense as one listing row
pub fn format_expense_row(expense: &Expense, today: NaiveDate, settings: &Settings) -> String {
    let mut row = format!(
        "    {:<12} {:<14} {:<22} {:>12}",
        format_relative_date(expense.date, today, &settings.date_format),
        truncate(&category_label(&expense.category), 14),
        truncate(expense.title(), 22),
        format_currency(expense.amount, &settings.currency_symbol),
    );

    if !expense.tags.is_empty() {
        let tags: Vec<String> = expense.tags.iter().map(|t| format!("#{}", t)).collect();
        row.push_str("  ");
        row.push_str(&tags.join(" "));
    }

    row
}

/// Format the grouped listing
///
/// Shows the empty-state message when nothing matched.
pub fn format_expense_view(view: &ExpenseView, settings: &Settings) -> String {
    if view.is_empty() {
        return format!("{}\n", view.empty_message());
    }

    let symbol = &settings.currency_symbol;
    let mut output = String::new();

    for month in &view.groups {
        let count = month.count();
        output.push_str(&format!(
            "{:<36} {:>14}  ({} {})\n",
            month.label,
            format_currency(month.total, symbol),
            count,
            if count == 1 { "expense" } else { "expenses" }
        ));

        for week in &month.weeks {
            output.push_str(&format!(
                "  {:<34} {:>14}\n",
                week.label,
                format_currency(week.total, symbol)
            ));

            for expense in &week.expenses {
                output.push_str(&format_expense_row(expense, view.today, settings));
                output.push('\n');
            }
        }
        output.push('\n');
    }

    output.push_str(&separator(LINE_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{} shown, total {}\n",
        view.matched_count(),
        format_currency(view.matched_total(), symbol)
    ));

    output
}

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
}

/// Format the statistics panel
pub fn format_stats(stats: &ExpenseStats, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let mut output = String::new();

    output.push_str(&format!(
        "Today:       {}\n",
        format_currency(stats.today_total, symbol)
    ));
    output.push_str(&format!(
        "This month:  {}\n",
        format_currency(stats.month_total, symbol)
    ));
    output.push('\n');

    if !stats.has_breakdown() {
        output.push_str("No spending this month\n");
        return output;
    }

    let month_total = stats.month_total.to_decimal();
    let rows: Vec<BreakdownRow> = stats
        .categories
        .iter()
        .map(|stat| {
            let pct = if month_total > 0.0 {
                stat.amount.to_decimal() / month_total * 100.0
            } else {
                0.0
            };
            BreakdownRow {
                category: category_label(&stat.category),
                amount: format_currency(stat.amount, symbol),
                share: format!(
                    "{} {}",
                    format_bar(stat.fraction, BAR_WIDTH),
                    format_percentage(pct)
                ),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(1..2), Alignment::right());

    output.push_str("Top categories this month\n");
    output.push_str(&table.to_string());
    output.push('\n');

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use crate::reports::{ExpenseFilter, ViewOptions};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<Expense> {
        vec![
            Expense::new("a", Money::from_cents(4500), Category::Food, date(2024, 1, 20))
                .with_description("Lunch")
                .with_tags(["work"]),
            Expense::new("b", Money::from_cents(150000), Category::Rent, date(2024, 1, 19)),
            Expense::new("c", Money::from_cents(2000), Category::Transport, date(2023, 12, 28)),
        ]
    }

    #[test]
    fn test_listing_shows_hierarchy() {
        let today = date(2024, 1, 20);
        let view = ExpenseView::generate(
            &sample(),
            &ExpenseFilter::new(),
            today,
            &ViewOptions::default(),
        );
        let text = format_expense_view(&view, &Settings::default());

        let january = text.find("January 2024").unwrap();
        let december = text.find("December 2023").unwrap();
        assert!(january < december);
        assert!(text.contains("Week of Jan 14"));
        assert!(text.contains("Today"));
        assert!(text.contains("Yesterday"));
        assert!(text.contains("Lunch"));
        assert!(text.contains("#work"));
        assert!(text.contains("₹1,545.00"));
        assert!(text.contains("(2 expenses)"));
        assert!(text.contains("(1 expense)"));
        assert!(text.contains("3 shown, total ₹1,565.00"));
    }

    #[test]
    fn test_empty_messages() {
        let today = date(2024, 1, 20);
        let settings = Settings::default();

        let none = ExpenseView::generate(&[], &ExpenseFilter::new(), today, &ViewOptions::default());
        assert_eq!(format_expense_view(&none, &settings), "No expenses recorded\n");

        let unmatched = ExpenseView::generate(
            &sample(),
            &ExpenseFilter::new().query("zzz"),
            today,
            &ViewOptions::default(),
        );
        assert_eq!(
            format_expense_view(&unmatched, &settings),
            "No matching expenses\n"
        );
    }

    #[test]
    fn test_stats_panel() {
        let stats = ExpenseStats::compute(&sample(), date(2024, 1, 20), 5);
        let text = format_stats(&stats, &Settings::default());

        assert!(text.contains("Today:       ₹45.00"));
        assert!(text.contains("This month:  ₹1,545.00"));
        assert!(text.contains("Category"));
        assert!(text.find("Rent").unwrap() < text.find("Food").unwrap());
        assert!(!text.contains("Transport"));
        assert!(text.contains("████████████████████"));
    }

    #[test]
    fn test_stats_without_breakdown() {
        let stats = ExpenseStats::compute(&[], date(2024, 1, 20), 5);
        let text = format_stats(&stats, &Settings::default());

        assert!(text.contains("Today:       ₹0.00"));
        assert!(text.contains("No spending this month"));
    }
}
