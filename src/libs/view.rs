use super::formatter::{format_date, format_fixed};
use super::messages::Message;
use super::metrics::DailySummary;
use super::table::{self, DataTable};
use prettytable::{row, Cell, Row, Table};

pub struct View {}

impl View {
    /// Prints any presentation table with its own column headers.
    pub fn table(data: &DataTable) {
        let mut table = Table::new();

        table.set_titles(Row::new(data.columns.iter().map(|c| Cell::new(c)).collect()));
        for row in &data.rows {
            table.add_row(Row::new(row.iter().map(|cell| Cell::new(&display_cell(cell))).collect()));
        }
        table.printstd();
    }

    pub fn summary(summary: &DailySummary) {
        let mut table = Table::new();

        let bmi = match (summary.latest_bmi, summary.bmi_category) {
            (Some((bmi, date)), Some(category)) => format!("{} ({}, {})", format_fixed(bmi, 1), category, format_date(date)),
            (Some((bmi, date)), None) => format!("{} ({})", format_fixed(bmi, 1), format_date(date)),
            (None, _) => Message::BmiUnavailable.to_string(),
        };

        table.add_row(row!["Calories in (kcal)", format_fixed(summary.intake_kcal, 0)]);
        table.add_row(row!["Calories burned (kcal)", format_fixed(summary.burned_kcal, 0)]);
        table.add_row(row!["Net balance (kcal)", format_fixed(summary.balance_kcal, 0)]);
        table.add_row(row!["Water (ml)", format_fixed(summary.water_ml, 0)]);
        table.add_row(row!["Protein (g)", format_fixed(summary.macros.protein, 1)]);
        table.add_row(row!["Carbs (g)", format_fixed(summary.macros.carbs, 1)]);
        table.add_row(row!["Fat (g)", format_fixed(summary.macros.fat, 1)]);
        table.add_row(row!["BMI", bmi]);
        table.printstd();
    }
}

/// Raw reals come from aggregate queries and are shown with one decimal.
fn display_cell(cell: &table::Cell) -> String {
    match cell {
        table::Cell::Real(v) => format_fixed(*v, 1),
        other => other.to_string(),
    }
}
