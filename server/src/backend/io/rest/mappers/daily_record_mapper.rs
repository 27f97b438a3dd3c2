//! server/src/backend/io/rest/mappers/daily_record_mapper.rs

use crate::backend::domain::commands::daily::{RecordDayCommand, RecordDayResult, ReportResult, TargetVsActual};
use crate::backend::domain::formatting::MoneyFormatter;
use crate::backend::domain::models::DailyPerformanceRecord;
use shared::{DailyRecord, RecordDayRequest, RecordDayResponse, ReportResponse, TargetVsActualPoint};

/// Mapper to convert between shared DailyRecord DTOs and domain performance types.
pub struct DailyRecordMapper;

impl DailyRecordMapper {
    /// Converts a domain DailyPerformanceRecord to a shared DailyRecord DTO.
    pub fn to_dto(domain: DailyPerformanceRecord) -> DailyRecord {
        DailyRecord {
            date: domain.date.format("%Y-%m-%d").to_string(),
            rides_completed: domain.rides_completed,
            earnings_computed: domain.earnings_computed,
            earnings_actual: domain.earnings_actual,
            daily_target: domain.daily_target,
            utilization_pct: domain.utilization_pct,
            status: domain.status,
        }
    }

    pub fn to_command(request: RecordDayRequest) -> RecordDayCommand {
        RecordDayCommand {
            date: request.date,
            rides_completed: request.rides_completed,
            earnings_actual: request.earnings_actual,
        }
    }

    pub fn to_record_day_response(result: RecordDayResult) -> RecordDayResponse {
        RecordDayResponse {
            record: Self::to_dto(result.record),
            success_message: result.success_message,
        }
    }

    fn to_chart_point(point: TargetVsActual) -> TargetVsActualPoint {
        TargetVsActualPoint {
            date: point.date.format("%Y-%m-%d").to_string(),
            daily_target: point.daily_target,
            earnings_actual: point.earnings_actual,
        }
    }

    pub fn to_report_response(result: ReportResult, formatter: &MoneyFormatter) -> ReportResponse {
        ReportResponse {
            formatted_total_earnings_computed: formatter.format_amount(result.total_earnings_computed),
            formatted_total_earnings_actual: formatter.format_amount(result.total_earnings_actual),
            records: result.records.into_iter().map(Self::to_dto).collect(),
            total_earnings_computed: result.total_earnings_computed,
            total_earnings_actual: result.total_earnings_actual,
            chart: result.chart.into_iter().map(Self::to_chart_point).collect(),
        }
    }
}
