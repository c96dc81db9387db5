//! Effective-date resolution for time-versioned rows.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult, TariffTable};
use crate::models::{EffectiveRange, RouteDiscountRate, ServiceAreaRate};

/// A row that applies over an effective date range.
pub trait Effective {
    /// The dates the row applies.
    fn effective_range(&self) -> EffectiveRange;
}

impl Effective for ServiceAreaRate {
    fn effective_range(&self) -> EffectiveRange {
        self.effective
    }
}

impl Effective for RouteDiscountRate {
    fn effective_range(&self) -> EffectiveRange {
        self.effective
    }
}

/// Selects the single row effective on `date`.
///
/// # Errors
///
/// - `Lookup` if `rows` is empty (the key has no rows at all)
/// - `NoRateForDate` if no row's range contains `date`
/// - `AmbiguousRate` if more than one row's range contains `date`
///
/// # Example
///
/// ```
/// use rate_engine::error::{EngineError, TariffTable};
/// use rate_engine::models::{Cents, EffectiveRange, ServiceAreaRate};
/// use rate_engine::tariff::select_effective;
/// use chrono::NaiveDate;
///
/// let row = ServiceAreaRate {
///     service_area: 428,
///     name: "Gulfport, MS".to_string(),
///     linehaul_factor: Cents(57),
///     service_charge_cents: Cents(350),
///     sit_first_day_rate_cents: Cents(1402),
///     sit_additional_day_rate_cents: Cents(53),
///     sit_pickup_delivery_rate_cents: Cents(1735),
///     effective: EffectiveRange::new(
///         NaiveDate::from_ymd_opt(2017, 5, 15).unwrap(),
///         NaiveDate::from_ymd_opt(2018, 5, 15).unwrap(),
///     ),
/// };
///
/// let date = NaiveDate::from_ymd_opt(2018, 5, 15).unwrap();
/// let result = select_effective(vec![row], TariffTable::ServiceArea, "428", date);
/// assert!(matches!(result, Err(EngineError::NoRateForDate { .. })));
/// ```
pub fn select_effective<R: Effective>(
    rows: Vec<R>,
    table: TariffTable,
    key: &str,
    date: NaiveDate,
) -> EngineResult<R> {
    if rows.is_empty() {
        return Err(EngineError::Lookup {
            table,
            key: key.to_string(),
        });
    }

    let mut matching = rows
        .into_iter()
        .filter(|row| row.effective_range().contains(date));

    let row = matching.next().ok_or_else(|| EngineError::NoRateForDate {
        table,
        key: key.to_string(),
        date,
    })?;

    if matching.next().is_some() {
        return Err(EngineError::AmbiguousRate {
            table,
            key: key.to_string(),
            date,
        });
    }

    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cents;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn area(factor: i64, lower: NaiveDate, upper: NaiveDate) -> ServiceAreaRate {
        ServiceAreaRate {
            service_area: 428,
            name: "Gulfport, MS".to_string(),
            linehaul_factor: Cents(factor),
            service_charge_cents: Cents(350),
            sit_first_day_rate_cents: Cents(1402),
            sit_additional_day_rate_cents: Cents(53),
            sit_pickup_delivery_rate_cents: Cents(1735),
            effective: EffectiveRange::new(lower, upper),
        }
    }

    fn two_years() -> Vec<ServiceAreaRate> {
        vec![
            area(57, date(2017, 5, 15), date(2018, 5, 15)),
            area(61, date(2018, 5, 15), date(2019, 5, 15)),
        ]
    }

    #[test]
    fn test_selects_row_covering_date() {
        let row = select_effective(two_years(), TariffTable::ServiceArea, "428", date(2018, 1, 15))
            .unwrap();
        assert_eq!(row.linehaul_factor, Cents(57));
    }

    #[test]
    fn test_rollover_date_selects_next_row() {
        let row = select_effective(two_years(), TariffTable::ServiceArea, "428", date(2018, 5, 15))
            .unwrap();
        assert_eq!(row.linehaul_factor, Cents(61));
    }

    #[test]
    fn test_empty_rows_is_lookup_error() {
        let result: EngineResult<ServiceAreaRate> =
            select_effective(vec![], TariffTable::ServiceArea, "999", date(2018, 1, 15));
        assert_eq!(
            result.unwrap_err(),
            EngineError::Lookup {
                table: TariffTable::ServiceArea,
                key: "999".to_string(),
            }
        );
    }

    #[test]
    fn test_gap_is_no_rate_for_date() {
        let result =
            select_effective(two_years(), TariffTable::ServiceArea, "428", date(2019, 5, 15));
        assert_eq!(
            result.unwrap_err(),
            EngineError::NoRateForDate {
                table: TariffTable::ServiceArea,
                key: "428".to_string(),
                date: date(2019, 5, 15),
            }
        );
    }

    #[test]
    fn test_overlapping_rows_are_ambiguous() {
        let rows = vec![
            area(57, date(2017, 5, 15), date(2018, 5, 15)),
            area(61, date(2018, 1, 1), date(2019, 5, 15)),
        ];
        let result = select_effective(rows, TariffTable::ServiceArea, "428", date(2018, 2, 1));
        assert!(matches!(result, Err(EngineError::AmbiguousRate { .. })));
    }
}
