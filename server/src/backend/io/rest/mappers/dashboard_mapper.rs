//! server/src/backend/io/rest/mappers/dashboard_mapper.rs

use crate::backend::domain::commands::dashboard::DashboardResult;
use crate::backend::domain::formatting::MoneyFormatter;
use crate::backend::io::rest::mappers::ExpenseMapper;
use shared::DashboardResponse;

pub struct DashboardMapper;

impl DashboardMapper {
    /// Planning figures with their display strings: currency with two
    /// decimals, break-even rides with none, daily ride target with one.
    pub fn to_dashboard_response(result: DashboardResult, formatter: &MoneyFormatter) -> DashboardResponse {
        let summary = result.summary;

        DashboardResponse {
            config: result.config,
            total_expenses: summary.total_expenses,
            break_even_rides: summary.break_even_rides,
            daily_ride_target: summary.daily_ride_target,
            daily_monetary_target: summary.daily_monetary_target,
            formatted_total_expenses: formatter.format_amount(summary.total_expenses),
            formatted_break_even_rides: formatter.format_number(summary.break_even_rides, 0),
            formatted_daily_ride_target: formatter.format_number(summary.daily_ride_target, 1),
            formatted_daily_monetary_target: formatter.format_amount(summary.daily_monetary_target),
            expenses: result.expenses.into_iter().map(ExpenseMapper::to_dto).collect(),
        }
    }
}
