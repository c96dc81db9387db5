//! Shared in-memory tariff for calculation tests.
//!
//! Mirrors `config/tariff400ng` so unit tests and the YAML-backed
//! integration tests agree on every fixture value.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{
    BaseLinehaulRate, Cents, EffectiveRange, RouteDiscountRate, ServiceAreaRate, ShorthaulRate,
    Zip3, ZipDistance,
};
use crate::tariff::InMemoryTariff;

use super::RateEngine;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A date inside the 2017-05-15 rate cycle.
pub fn rate_engine_date() -> NaiveDate {
    date(2018, 1, 15)
}

pub fn rate_cycle() -> EffectiveRange {
    EffectiveRange::new(date(2017, 5, 15), date(2018, 5, 15))
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn zip3(zip3: u32, city: &str, state: &str, service_area: u32, rate_area: &str, region: u32) -> Zip3 {
    Zip3 {
        zip3,
        basepoint_city: city.to_string(),
        state: state.to_string(),
        service_area,
        rate_area: rate_area.to_string(),
        region,
    }
}

fn distance(origin_zip3: u32, destination_zip3: u32, miles: u32) -> ZipDistance {
    ZipDistance {
        origin_zip3,
        destination_zip3,
        miles,
    }
}

pub fn gulfport(effective: EffectiveRange) -> ServiceAreaRate {
    ServiceAreaRate {
        service_area: 428,
        name: "Gulfport, MS".to_string(),
        linehaul_factor: Cents(57),
        service_charge_cents: Cents(350),
        sit_first_day_rate_cents: Cents(1402),
        sit_additional_day_rate_cents: Cents(53),
        sit_pickup_delivery_rate_cents: Cents(1735),
        effective,
    }
}

fn tampa() -> ServiceAreaRate {
    ServiceAreaRate {
        service_area: 184,
        name: "Tampa, FL".to_string(),
        linehaul_factor: Cents(43),
        service_charge_cents: Cents(175),
        sit_first_day_rate_cents: Cents(1500),
        sit_additional_day_rate_cents: Cents(60),
        sit_pickup_delivery_rate_cents: Cents(1800),
        effective: rate_cycle(),
    }
}

fn new_york() -> ServiceAreaRate {
    ServiceAreaRate {
        service_area: 658,
        name: "New York, NY".to_string(),
        linehaul_factor: Cents(68),
        service_charge_cents: Cents(520),
        sit_first_day_rate_cents: Cents(1890),
        sit_additional_day_rate_cents: Cents(71),
        sit_pickup_delivery_rate_cents: Cents(2210),
        effective: rate_cycle(),
    }
}

fn hazleton() -> ServiceAreaRate {
    ServiceAreaRate {
        service_area: 208,
        name: "Hazleton, PA".to_string(),
        linehaul_factor: Cents(50),
        service_charge_cents: Cents(300),
        sit_first_day_rate_cents: Cents(1330),
        sit_additional_day_rate_cents: Cents(49),
        sit_pickup_delivery_rate_cents: Cents(1620),
        effective: rate_cycle(),
    }
}

fn base(miles_lower: u32, miles_upper: u32, cwt_lower: i64, cwt_upper: i64, rate: i64) -> BaseLinehaulRate {
    BaseLinehaulRate {
        miles_lower,
        miles_upper,
        cwt_lower,
        cwt_upper,
        rate_cents: Cents(rate),
    }
}

fn shorthaul(lower: i64, upper: i64, rate: i64) -> ShorthaulRate {
    ShorthaulRate {
        cwt_miles_lower: lower,
        cwt_miles_upper: upper,
        rate_cents: Cents(rate),
    }
}

fn discount(rate_area: &str, region: u32, linehaul: &str, sit: &str) -> RouteDiscountRate {
    RouteDiscountRate {
        origin_rate_area: rate_area.to_string(),
        destination_region: region,
        linehaul_rate: dec(linehaul),
        sit_rate: dec(sit),
        effective: rate_cycle(),
    }
}

pub fn test_tariff() -> InMemoryTariff {
    let next_cycle = EffectiveRange::new(date(2018, 5, 15), date(2019, 5, 15));
    let mut gulfport_next = gulfport(next_cycle);
    gulfport_next.linehaul_factor = Cents(61);
    gulfport_next.service_charge_cents = Cents(365);
    gulfport_next.sit_first_day_rate_cents = Cents(1450);
    gulfport_next.sit_additional_day_rate_cents = Cents(55);
    gulfport_next.sit_pickup_delivery_rate_cents = Cents(1790);

    InMemoryTariff::default()
        .with_zip3(zip3(395, "Saucier", "MS", 428, "48", 11))
        .with_zip3(zip3(336, "Tampa", "FL", 184, "13", 13))
        .with_zip3(zip3(100, "New York", "NY", 658, "US14", 1))
        .with_zip3(zip3(182, "Hazleton", "PA", 208, "US13", 2))
        .with_distance(distance(100, 182, 1000))
        .with_distance(distance(395, 336, 1000))
        .with_distance(distance(336, 395, 1010))
        .with_distance(distance(182, 395, 640))
        .with_service_area(gulfport(rate_cycle()))
        .with_service_area(gulfport_next)
        .with_service_area(tampa())
        .with_service_area(new_york())
        .with_service_area(hazleton())
        .with_base_linehaul(base(800, 1200, 1, 50, 900))
        .with_base_linehaul(base(800, 1200, 50, 1000, 850))
        .with_base_linehaul(base(3000, 3400, 1, 50, 3200))
        .with_base_linehaul(base(3000, 3400, 50, 1000, 3100))
        .with_shorthaul(shorthaul(1, 16000, 450))
        .with_shorthaul(shorthaul(16000, 32000, 799))
        .with_shorthaul(shorthaul(32000, 1_000_000, 820))
        .with_discount(discount("48", 13, "0.05", "0.10"))
        .with_discount(discount("US14", 2, "0.40", "0.50"))
        .with_discount(discount("US13", 11, "0", "0"))
}

pub fn test_engine() -> RateEngine<InMemoryTariff> {
    RateEngine::new(test_tariff())
}
