//! 日期工具函数
//!
//! 所有字符串→日期解析统一在 API handler 层完成，
//! repository 层只接收 [`NaiveDate`]。日期不做时区归一化，
//! 全程使用纯日历日期。

use chrono::{Days, NaiveDate};

use super::{AppError, AppResult};

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// 日历日加法: `date + days`
///
/// duration=7 时 2024-06-01 → 2024-06-08 (终点含在行程内)。
pub fn add_days(date: NaiveDate, days: u32) -> AppResult<NaiveDate> {
    date.checked_add_days(Days::new(u64::from(days)))
        .ok_or_else(|| AppError::validation(format!("Date out of range: {} + {} days", date, days)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_date() {
        let d = parse_date("2024-06-01").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_date("June 1st").is_err());
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn add_days_crosses_month_boundary() {
        let d = parse_date("2024-06-28").unwrap();
        assert_eq!(add_days(d, 7).unwrap(), parse_date("2024-07-05").unwrap());
    }

    #[test]
    fn add_zero_days_is_identity() {
        let d = parse_date("2024-06-01").unwrap();
        assert_eq!(add_days(d, 0).unwrap(), d);
    }
}
