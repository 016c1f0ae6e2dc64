//! `overview` command
//!
//! Builds a one-off session from `--expense` records, applies the date
//! filter and prints the same figures the Overview tab shows.

use chrono::NaiveDate;
use clap::Args;
use tracing::debug;

use crate::config::Settings;
use crate::display::{format_budget_table, format_expense_table, format_payer_table, format_totals};
use crate::error::{TrackerError, TrackerResult};
use crate::forms::{Draft, EXPENSE_FORM};
use crate::models::{DateFilter, Expense, UnknownFilterError};
use crate::services::today;
use crate::state::TrackerState;

/// Arguments for `pnl overview`
#[derive(Args, Debug, Default)]
pub struct OverviewArgs {
    /// Date filter key (defaults to the configured filter)
    #[arg(long)]
    pub filter: Option<String>,

    /// Start of a custom range (YYYY-MM-DD)
    #[arg(long, value_parser = super::parse_date_arg)]
    pub from: Option<NaiveDate>,

    /// End of a custom range (YYYY-MM-DD)
    #[arg(long, value_parser = super::parse_date_arg)]
    pub to: Option<NaiveDate>,

    /// Resolve filters as if today were this date (YYYY-MM-DD)
    #[arg(long, value_parser = super::parse_date_arg)]
    pub today: Option<NaiveDate>,

    /// Expense as "Category,amount,date,payer" (repeatable)
    #[arg(short, long = "expense", value_name = "RECORD")]
    pub expenses: Vec<String>,
}

/// Handle the overview command
pub fn handle_overview_command(settings: &Settings, args: &OverviewArgs) -> TrackerResult<()> {
    let state = build_state(settings, args)?;
    print!("{}", render_overview(settings, &state));
    Ok(())
}

/// Build the session the overview reports on
pub fn build_state(settings: &Settings, args: &OverviewArgs) -> TrackerResult<TrackerState> {
    let today = args.today.unwrap_or_else(today);
    let mut state = TrackerState::new(settings, today);

    for record in &args.expenses {
        let expense = parse_expense_record(record)?;
        state.add_expense(expense)?;
    }

    if let Some(key) = &args.filter {
        let filter: DateFilter = key
            .parse()
            .map_err(|e: UnknownFilterError| TrackerError::Validation(e.to_string()))?;
        state.select_filter_at(filter, today);
    }

    if args.from.is_some() {
        state.set_custom_from(args.from);
    }
    if args.to.is_some() {
        state.set_custom_to(args.to);
    }

    debug!(
        expenses = state.expenses().len(),
        range = %state.range(),
        "overview state built"
    );
    Ok(state)
}

/// Parse a `Category,amount,date,payer` record
///
/// Fields go through the same checks as the add-expense form. Quote a
/// category name that contains a comma.
pub fn parse_expense_record(record: &str) -> TrackerResult<Expense> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(record.as_bytes());

    let fields = reader
        .records()
        .next()
        .ok_or_else(|| TrackerError::Validation("Empty expense record".into()))?
        .map_err(|e| TrackerError::Validation(format!("Invalid expense record '{}': {}", record, e)))?;

    if fields.len() != EXPENSE_FORM.fields.len() {
        return Err(TrackerError::Validation(format!(
            "Invalid expense record '{}'. Expected Category,amount,date,payer",
            record
        )));
    }

    let mut draft = Draft::new(&EXPENSE_FORM);
    for (spec, value) in EXPENSE_FORM.fields.iter().zip(fields.iter()) {
        draft.set(spec.key, value);
    }
    draft.parse_expense()
}

/// Render the overview report
pub fn render_overview(settings: &Settings, state: &TrackerState) -> String {
    let service = state.budget_service();
    let visible = service.filter_expenses();

    let mut out = String::new();
    out.push_str(&format!("{}: {}\n\n", state.filter().label(), state.range()));
    out.push_str(&format!("Expenses ({} of {})\n", visible.len(), state.expenses().len()));
    out.push_str(&format_expense_table(&visible));
    out.push_str("\n\nCategories\n");
    out.push_str(&format_budget_table(&service.budget_data()));
    out.push('\n');
    out.push_str(&format_totals(
        &service.overview_totals(),
        &settings.currency_symbol,
    ));
    out.push_str("\n\nBy payer\n");
    out.push_str(&format_payer_table(&service.spending_by_payer()));
    out.push('\n');
    out
}
