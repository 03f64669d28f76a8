#![deny(warnings)]

//! Metric engine: profitability of the fundraising events.
//!
//! This crate provides:
//! - Total coercion of free-text inputs to amounts
//! - One formula per event type over typed inputs
//! - Portfolio evaluation with per-event fault isolation and stable sorting

use planner_core::{
    ComputedMetric, Difficulties, EventDefinition, RawInputs, SortConfig, SortDirection, SortKey,
};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use thiserror::Error;
use tracing::{debug, error};

pub mod coerce;
pub mod formulas;

pub use coerce::{parse_amount, to_amount, Coerce};
pub use formulas::{
    counselors_needed, profit_per_hour, CampsInputs, EventInputs, Financials, MarketInputs,
    PrepInputs, SipPaintInputs, PAINT_INSTRUCTOR_HOURS, VENDOR_SALES_PER_TABLE,
};

/// Faults raised while evaluating a formula.
#[derive(Debug, Error, PartialEq)]
pub enum CalcError {
    /// A checked operation exceeded the decimal range.
    #[error("arithmetic overflow computing {0}")]
    Overflow(&'static str),
    /// A checked division could not be represented.
    #[error("division failed computing {0}")]
    DivisionFailed(&'static str),
}

/// Metrics of one event, or the fault that prevented computing them.
pub fn try_evaluate_event(
    def: &EventDefinition,
    inputs: &RawInputs,
    difficulties: &Difficulties,
) -> Result<ComputedMetric, CalcError> {
    let f = EventInputs::read(def.id, inputs).financials()?;
    let per_hour = profit_per_hour(f.net_profit, f.person_hours)?;
    Ok(ComputedMetric {
        id: def.id,
        name: def.name,
        net_profit: f.net_profit,
        total_person_power: f.person_hours,
        profit_per_person: per_hour,
        difficulty: difficulties.get(def.id),
        total_revenue: f.revenue,
        total_expenses: f.expenses,
    })
}

/// Metrics of one event. A fault is logged and yields zeroed metrics for
/// this event only.
pub fn evaluate_event(
    def: &EventDefinition,
    inputs: &RawInputs,
    difficulties: &Difficulties,
) -> ComputedMetric {
    try_evaluate_event(def, inputs, difficulties).unwrap_or_else(|e| {
        error!(event = def.name, error = %e, "calculation error");
        zeroed(def, difficulties)
    })
}

fn zeroed(def: &EventDefinition, difficulties: &Difficulties) -> ComputedMetric {
    ComputedMetric {
        id: def.id,
        name: def.name,
        net_profit: Decimal::ZERO,
        total_person_power: Decimal::ZERO,
        profit_per_person: Decimal::ZERO,
        difficulty: difficulties.get(def.id),
        total_revenue: Decimal::ZERO,
        total_expenses: Decimal::ZERO,
    }
}

/// Numeric value of the sort column for one metric.
pub fn sort_value(metric: &ComputedMetric, key: SortKey) -> Decimal {
    match key {
        SortKey::NetProfit => metric.net_profit,
        SortKey::TotalPersonPower => metric.total_person_power,
        SortKey::ProfitPerPerson => metric.profit_per_person,
        SortKey::Difficulty => Decimal::from(metric.difficulty.stars()),
    }
}

/// Stable sort; equal keys keep their current relative order.
pub fn sort_metrics(metrics: &mut [ComputedMetric], sort: SortConfig) {
    metrics.sort_by(|a, b| {
        let ord: Ordering = sort_value(a, sort.key).cmp(&sort_value(b, sort.key));
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

/// Evaluate every event of `catalog` from scratch and sort the result.
///
/// Always returns one metric per definition; faults never propagate.
pub fn compute_all(
    catalog: &[EventDefinition],
    inputs: &RawInputs,
    difficulties: &Difficulties,
    sort: SortConfig,
) -> Vec<ComputedMetric> {
    let mut metrics: Vec<ComputedMetric> = catalog
        .iter()
        .map(|def| evaluate_event(def, inputs, difficulties))
        .collect();
    sort_metrics(&mut metrics, sort);
    debug!(
        events = metrics.len(),
        key = sort.key.key(),
        direction = ?sort.direction,
        "recomputed metrics"
    );
    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::{
        definition, CampsField, Difficulty, EventId, FieldId, FieldKey, MarketField, PrepField,
        SipPaintField, EVENTS,
    };
    use proptest::prelude::*;

    fn d(units: i64, scale: u32) -> Decimal {
        Decimal::new(units, scale)
    }

    fn ids(metrics: &[ComputedMetric]) -> Vec<EventId> {
        metrics.iter().map(|m| m.id).collect()
    }

    fn defaults() -> (RawInputs, Difficulties) {
        (RawInputs::seeded(&EVENTS), Difficulties::default())
    }

    #[test]
    fn default_metrics_match_hand_computed_values() {
        let (inputs, ratings) = defaults();
        let camps = evaluate_event(definition(EventId::Camps), &inputs, &ratings);
        assert_eq!(camps.name, "Camps for Holiday Breaks");
        assert_eq!(camps.net_profit, d(161_462, 1));
        assert_eq!(camps.total_person_power, d(46, 0));
        assert_eq!(camps.profit_per_person.round_dp(4), d(3_510_043, 4));
        assert_eq!(camps.difficulty.stars(), 3);

        let tachs = evaluate_event(definition(EventId::Tachs), &inputs, &ratings);
        assert_eq!(tachs.profit_per_person, d(8_845, 2));

        let market = evaluate_event(definition(EventId::Market), &inputs, &ratings);
        assert_eq!(market.profit_per_person, d(19_635, 2));

        let paint = evaluate_event(definition(EventId::SipPaint), &inputs, &ratings);
        assert_eq!(paint.net_profit, d(9_091, 1));
        assert_eq!(paint.profit_per_person, d(1_136_375, 4));
    }

    #[test]
    fn default_order_is_net_profit_descending() {
        let (inputs, ratings) = defaults();
        let metrics = compute_all(&EVENTS, &inputs, &ratings, SortConfig::default());
        assert_eq!(
            ids(&metrics),
            vec![
                EventId::SatPsat,
                EventId::Camps,
                EventId::Market,
                EventId::Tachs,
                EventId::SipPaint,
            ]
        );
    }

    #[test]
    fn ties_keep_catalog_order_both_directions() {
        let (inputs, ratings) = defaults();
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let sort = SortConfig::new(SortKey::Difficulty, direction);
            let metrics = compute_all(&EVENTS, &inputs, &ratings, sort);
            assert_eq!(ids(&metrics), EventId::ALL.to_vec());
        }
    }

    #[test]
    fn difficulty_sort_is_numeric() {
        let (inputs, mut ratings) = defaults();
        ratings.set(EventId::SipPaint, Difficulty::new(5).unwrap());
        ratings.set(EventId::Camps, Difficulty::new(1).unwrap());
        let sort = SortConfig::new(SortKey::Difficulty, SortDirection::Desc);
        let metrics = compute_all(&EVENTS, &inputs, &ratings, sort);
        assert_eq!(
            ids(&metrics),
            vec![
                EventId::SipPaint,
                EventId::SatPsat,
                EventId::Tachs,
                EventId::Market,
                EventId::Camps,
            ]
        );
    }

    #[test]
    fn fault_zeroes_only_the_faulting_event() {
        let (mut inputs, ratings) = defaults();
        let baseline = compute_all(&EVENTS, &inputs, &ratings, SortConfig::default());
        inputs.set(
            FieldKey::camps(CampsField::PricePerStudent),
            Decimal::MAX.to_string(),
        );
        assert!(try_evaluate_event(definition(EventId::Camps), &inputs, &ratings).is_err());

        let metrics = compute_all(&EVENTS, &inputs, &ratings, SortConfig::default());
        assert_eq!(metrics.len(), 5);
        for m in &metrics {
            if m.id == EventId::Camps {
                assert_eq!(m.net_profit, Decimal::ZERO);
                assert_eq!(m.total_person_power, Decimal::ZERO);
                assert_eq!(m.profit_per_person, Decimal::ZERO);
                assert_eq!(m.difficulty.stars(), 3);
            } else {
                let before = baseline.iter().find(|b| b.id == m.id).unwrap();
                assert_eq!(m, before);
            }
        }
    }

    #[test]
    fn zero_hours_means_zero_per_hour() {
        let mut inputs = RawInputs::new();
        let ratings = Difficulties::default();
        inputs.set(FieldKey::market(MarketField::Tables), "10");
        inputs.set(FieldKey::market(MarketField::PricePerTable), "100");
        inputs.set(FieldKey::sip_paint(SipPaintField::ReceptionistHours), "-3");
        inputs.set(FieldKey::sip_paint(SipPaintField::InstructorCost), "400");
        let metrics = compute_all(&EVENTS, &inputs, &ratings, SortConfig::default());
        for m in &metrics {
            assert_eq!(m.total_person_power, Decimal::ZERO);
            assert_eq!(m.profit_per_person, Decimal::ZERO);
        }
        let market = metrics.iter().find(|m| m.id == EventId::Market).unwrap();
        assert_eq!(market.net_profit, d(1_000, 0));
        let paint = metrics.iter().find(|m| m.id == EventId::SipPaint).unwrap();
        assert_eq!(paint.net_profit, d(-400, 0));
    }

    #[test]
    fn recompute_is_idempotent() {
        let (inputs, ratings) = defaults();
        let sort = SortConfig::new(SortKey::ProfitPerPerson, SortDirection::Asc);
        assert_eq!(
            compute_all(&EVENTS, &inputs, &ratings, sort),
            compute_all(&EVENTS, &inputs, &ratings, sort)
        );
    }

    proptest! {
        #[test]
        fn edits_stay_within_their_event(event_idx in 0usize..5, field_idx in 0usize..12, text in "[-$0-9.,%a-z ]{0,12}") {
            let event = EventId::ALL[event_idx];
            let fields = FieldId::all_for(event);
            let field = fields[field_idx % fields.len()];
            let (mut inputs, ratings) = defaults();
            let before = compute_all(&EVENTS, &inputs, &ratings, SortConfig::default());
            inputs.set(FieldKey::new(event, field).unwrap(), text);
            let after = compute_all(&EVENTS, &inputs, &ratings, SortConfig::default());
            for m in after.iter().filter(|m| m.id != event) {
                let old = before.iter().find(|b| b.id == m.id).unwrap();
                prop_assert_eq!(m, old);
            }
        }

        #[test]
        fn directions_reverse_without_ties(students in proptest::collection::vec(1i64..5_000, 5)) {
            let (mut inputs, ratings) = defaults();
            // only revenue is non-zero, so net profits are distinct
            for (i, event) in EventId::ALL.into_iter().enumerate() {
                for field in FieldId::all_for(event) {
                    inputs.set(FieldKey::new(event, field).unwrap(), "0");
                }
                let n = students[i] * 10 + i as i64;
                let (price, count) = match event {
                    EventId::Camps => (CampsField::PricePerStudent.label(), CampsField::Students.label()),
                    EventId::SatPsat | EventId::Tachs => (PrepField::PricePerStudent.label(), PrepField::Students.label()),
                    EventId::Market => (MarketField::PricePerTable.label(), MarketField::Tables.label()),
                    EventId::SipPaint => (SipPaintField::TicketPrice.label(), SipPaintField::Attendees.label()),
                };
                inputs.set_by_label(event, price, "1").unwrap();
                inputs.set_by_label(event, count, n.to_string()).unwrap();
            }
            let desc = compute_all(&EVENTS, &inputs, &ratings, SortConfig::new(SortKey::NetProfit, SortDirection::Desc));
            let mut asc = compute_all(&EVENTS, &inputs, &ratings, SortConfig::new(SortKey::NetProfit, SortDirection::Asc));
            asc.reverse();
            prop_assert_eq!(ids(&desc), ids(&asc));
        }
    }
}
