//! Per-mode quote orchestration

use chrono::{DateTime, Utc};

use frakt_types::{QuoteResult, QuoteStatus, Result};

use crate::model::{ModeConfig, QuoteRequest};
use crate::service::{calendar_planner, geo_distance, price_curve, zone_eligibility};

/// Quote one transport mode for a request.
///
/// Eligibility and weight checks fail fast with a rejection result; only
/// coordinate well-formedness is an actual error, since callers are
/// expected to hand over validated input.
pub fn quote(
    config: &ModeConfig,
    request: &QuoteRequest,
    now_utc: DateTime<Utc>,
) -> Result<QuoteResult> {
    let pickup_ok = zone_eligibility::is_allowed(
        &request.pickup_country,
        zone_eligibility::postal_prefix(&request.pickup_postal_code),
        &config.available_zones,
    );
    let delivery_ok = zone_eligibility::is_allowed(
        &request.delivery_country,
        zone_eligibility::postal_prefix(&request.delivery_postal_code),
        &config.available_zones,
    );
    if !pickup_ok || !delivery_ok {
        return Ok(QuoteResult::rejected(QuoteStatus::NotAvailable));
    }

    let weight = request.chargeable_weight_kg;
    if weight < config.min_allowed_weight_kg || weight > config.max_allowed_weight_kg {
        return Ok(QuoteResult::rejected(QuoteStatus::WeightNotAllowed));
    }

    let distance_km =
        geo_distance::distance_km(request.pickup_coordinate, request.delivery_coordinate)?.round();

    // FTL reference price, clamped away from zero so the curve's
    // logarithms and divisions stay well-defined
    let balance = config.balance_factor(&request.pickup_country, &request.delivery_country);
    let ftl_price_eur = (distance_km * config.km_price_eur * balance).round().max(1.0);

    let evaluation = price_curve::evaluate(config, ftl_price_eur, weight);
    let Some(total_price_eur) = evaluation.total_price_eur else {
        return Ok(QuoteResult::rejected(evaluation.status));
    };

    let transit_days = ((distance_km / config.transit_speed_kmpd).round() as u32).max(1);
    let pickup_date = calendar_planner::earliest_pickup(&request.pickup_country, config, now_utc);
    let co2_grams = (distance_km * weight / 1000.0 * config.co2_per_ton_km * 1000.0).round();

    Ok(QuoteResult {
        available: true,
        status: QuoteStatus::Success,
        total_price_eur: Some(total_price_eur),
        ftl_price_eur: Some(ftl_price_eur),
        distance_km: Some(distance_km),
        transit_time_days: Some([transit_days, transit_days + 1]),
        earliest_pickup_date: Some(pickup_date),
        co2_emissions_grams: Some(co2_grams),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::TimeZone;

    use frakt_types::Coordinate;

    use super::*;
    use crate::model::ZoneSpec;

    fn road_config() -> ModeConfig {
        ModeConfig {
            description: "Road freight".to_string(),
            km_price_eur: 1.1,
            available_zones: BTreeMap::from([
                ("SE".to_string(), vec![ZoneSpec::Range(10, 19), ZoneSpec::Single(20)]),
                ("DE".to_string(), vec![ZoneSpec::Range(1, 99)]),
            ]),
            balance_factors: BTreeMap::new(),
            min_allowed_weight_kg: 1.0,
            max_allowed_weight_kg: 25160.0,
            p1: 30.0,
            price_p1: 50.0,
            p2: 500.0,
            p2k: 0.7,
            p2m: 100.0,
            p3: 2500.0,
            p3k: 0.9,
            p3m: 50.0,
            default_breakpoint: 15000.0,
            max_weight_kg: 25160.0,
            transit_speed_kmpd: 500.0,
            cutoff_hour: 14,
            extra_pickup_days: 0,
            co2_per_ton_km: 0.062,
        }
    }

    /// Stockholm city -> Hamburg, 4.3 t
    fn request() -> QuoteRequest {
        QuoteRequest {
            pickup_coordinate: Coordinate::new(59.3293, 18.0686),
            delivery_coordinate: Coordinate::new(53.5511, 9.9937),
            pickup_country: "SE".to_string(),
            pickup_postal_code: "114 32".to_string(),
            delivery_country: "DE".to_string(),
            delivery_postal_code: "20095".to_string(),
            chargeable_weight_kg: 4300.0,
        }
    }

    fn monday_morning() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 3, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_full_quote_stockholm_hamburg() {
        let result = quote(&road_config(), &request(), monday_morning()).unwrap();
        assert!(result.available);
        assert_eq!(result.status, QuoteStatus::Success);
        assert_eq!(result.distance_km, Some(973.0));
        assert_eq!(result.ftl_price_eur, Some(1070.0));
        assert_eq!(result.total_price_eur, Some(1030.0));
        assert_eq!(result.transit_time_days, Some([2, 3]));
        assert_eq!(
            result.earliest_pickup_date,
            Some(chrono::NaiveDate::from_ymd_opt(2026, 8, 4).unwrap())
        );
        assert_eq!(result.co2_emissions_grams, Some(259402.0));
    }

    #[test]
    fn test_balance_factor_scales_ftl() {
        let mut config = road_config();
        config.balance_factors.insert("SE-DE".to_string(), 1.1);
        let result = quote(&config, &request(), monday_morning()).unwrap();
        // 973 km * 1.1 EUR/km * 1.1 = 1177.33
        assert_eq!(result.ftl_price_eur, Some(1177.0));
    }

    #[test]
    fn test_unserved_delivery_zone_not_available() {
        let mut req = request();
        req.delivery_country = "NO".to_string();
        let result = quote(&road_config(), &req, monday_morning()).unwrap();
        assert_eq!(result.status, QuoteStatus::NotAvailable);
        assert!(!result.available);
        assert!(result.total_price_eur.is_none());
    }

    #[test]
    fn test_eligibility_is_directional() {
        // SE zones cover only prefixes 10-20, DE covers everything:
        // Stockholm -> Hamburg quotes, the reverse direction does not
        // once the pickup prefix is outside the Swedish zone set
        let mut reverse = request();
        std::mem::swap(&mut reverse.pickup_country, &mut reverse.delivery_country);
        std::mem::swap(&mut reverse.pickup_postal_code, &mut reverse.delivery_postal_code);
        reverse.delivery_postal_code = "982 31".to_string(); // Gällivare
        let result = quote(&road_config(), &reverse, monday_morning()).unwrap();
        assert_eq!(result.status, QuoteStatus::NotAvailable);
    }

    #[test]
    fn test_postal_code_matched_on_leading_two_digits() {
        let mut req = request();
        req.pickup_postal_code = "11".to_string();
        let full = quote(&road_config(), &request(), monday_morning()).unwrap();
        let prefix_only = quote(&road_config(), &req, monday_morning()).unwrap();
        assert_eq!(full, prefix_only);
    }

    #[test]
    fn test_overweight_rejected_before_distance_work() {
        let mut req = request();
        req.chargeable_weight_kg = 26000.0;
        let result = quote(&road_config(), &req, monday_morning()).unwrap();
        assert_eq!(result.status, QuoteStatus::WeightNotAllowed);
    }

    #[test]
    fn test_short_lane_still_one_transit_day() {
        let mut req = request();
        // Stockholm city -> Södertälje-ish, well under half a speed-day
        req.delivery_coordinate = Coordinate::new(59.1955, 17.6252);
        req.delivery_country = "SE".to_string();
        req.delivery_postal_code = "151 44".to_string();
        let result = quote(&road_config(), &req, monday_morning()).unwrap();
        assert_eq!(result.status, QuoteStatus::Success);
        assert_eq!(result.transit_time_days, Some([1, 2]));
    }

    #[test]
    fn test_non_finite_coordinate_is_an_error() {
        let mut req = request();
        req.pickup_coordinate = Coordinate::new(f64::NAN, 18.0);
        assert!(quote(&road_config(), &req, monday_morning()).is_err());
    }

    #[test]
    fn test_bad_calibration_surfaces_as_status() {
        let mut config = road_config();
        config.p2k = -0.7;
        config.p2m = 0.0;
        let result = quote(&config, &request(), monday_morning()).unwrap();
        assert_eq!(result.status, QuoteStatus::BadConfig);
        assert!(result.total_price_eur.is_none());
    }
}
