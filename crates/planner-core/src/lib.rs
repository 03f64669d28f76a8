#![deny(warnings)]

//! Core domain models and invariants for the event planner.
//!
//! This crate defines the closed set of fundraising event types, their typed
//! input fields, the static event catalog, the raw input and difficulty
//! stores, and the computed metric record shared by the engine and shells.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

mod catalog;

pub use catalog::{definition, EVENTS, CLEANER_RATE, RECEPTIONIST_RATE};

/// Identifier of one of the five fundraising event types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventId {
    /// Holiday break camps.
    Camps,
    /// SAT and PSAT prep classes.
    SatPsat,
    /// TACHS prep classes.
    Tachs,
    /// Christmas vendor market.
    Market,
    /// Sip and paint evening.
    SipPaint,
}

impl EventId {
    /// All event types in catalog order.
    pub const ALL: [EventId; 5] = [
        EventId::Camps,
        EventId::SatPsat,
        EventId::Tachs,
        EventId::Market,
        EventId::SipPaint,
    ];

    /// Stable key, matching the serialized form.
    pub fn key(self) -> &'static str {
        match self {
            EventId::Camps => "camps",
            EventId::SatPsat => "satPsat",
            EventId::Tachs => "tachs",
            EventId::Market => "market",
            EventId::SipPaint => "sipPaint",
        }
    }

    /// Position in catalog order.
    pub fn index(self) -> usize {
        match self {
            EventId::Camps => 0,
            EventId::SatPsat => 1,
            EventId::Tachs => 2,
            EventId::Market => 3,
            EventId::SipPaint => 4,
        }
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for EventId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventId::ALL
            .into_iter()
            .find(|id| id.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownEvent(s.to_string()))
    }
}

/// Input fields of the holiday camps event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CampsField {
    PricePerStudent,
    Students,
    CounselorRate,
    CounselorHours,
    CounselorRatio,
    ReceptionistHours,
    ReceptionistRate,
    CleanerHours,
    CleanerRate,
    Supplies,
    Insurance,
    FoodPerStudent,
}

impl CampsField {
    pub const ALL: [CampsField; 12] = [
        CampsField::PricePerStudent,
        CampsField::Students,
        CampsField::CounselorRate,
        CampsField::CounselorHours,
        CampsField::CounselorRatio,
        CampsField::ReceptionistHours,
        CampsField::ReceptionistRate,
        CampsField::CleanerHours,
        CampsField::CleanerRate,
        CampsField::Supplies,
        CampsField::Insurance,
        CampsField::FoodPerStudent,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CampsField::PricePerStudent => "Revenue: Average price per student ($)",
            CampsField::Students => "Revenue: Average number of students",
            CampsField::CounselorRate => "Expense: Counselor hourly rate ($)",
            CampsField::CounselorHours => "Expense: Counselor hours (per day)",
            CampsField::CounselorRatio => "Expense: Counselor to student ratio (1:N)",
            CampsField::ReceptionistHours => "Expense: Receptionist hours",
            CampsField::ReceptionistRate => "Expense: Receptionist rate ($)",
            CampsField::CleanerHours => "Expense: Cleaner hours",
            CampsField::CleanerRate => "Expense: Cleaner rate ($)",
            CampsField::Supplies => "Fixed: Supplies cost ($)",
            CampsField::Insurance => "Fixed: Insurance cost ($)",
            CampsField::FoodPerStudent => "Variable: Food and snacks cost per student ($)",
        }
    }
}

/// Input fields shared by the SAT/PSAT and TACHS prep classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PrepField {
    PricePerStudent,
    Students,
    InstructorRate,
    InstructionHours,
    MaterialsPerStudent,
    AdminHours,
    AdminRate,
    CleanerHours,
    CleanerRate,
}

impl PrepField {
    pub const ALL: [PrepField; 9] = [
        PrepField::PricePerStudent,
        PrepField::Students,
        PrepField::InstructorRate,
        PrepField::InstructionHours,
        PrepField::MaterialsPerStudent,
        PrepField::AdminHours,
        PrepField::AdminRate,
        PrepField::CleanerHours,
        PrepField::CleanerRate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PrepField::PricePerStudent => "Revenue: Price per student ($)",
            PrepField::Students => "Revenue: Number of students",
            PrepField::InstructorRate => "Expense: Instructor hourly rate ($)",
            PrepField::InstructionHours => "Expense: Total instruction hours",
            PrepField::MaterialsPerStudent => "Expense: Materials cost per student ($)",
            PrepField::AdminHours => "Expense: Admin support hours",
            PrepField::AdminRate => "Expense: Admin support rate ($)",
            PrepField::CleanerHours => "Expense: Cleaner hours",
            PrepField::CleanerRate => "Expense: Cleaner rate ($)",
        }
    }
}

/// Input fields of the vendor market.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MarketField {
    Tables,
    PricePerTable,
    SalesPercent,
    ReceptionistHours,
    ReceptionistRate,
    CleanerHours,
    CleanerRate,
    Marketing,
    Supplies,
    Insurance,
}

impl MarketField {
    pub const ALL: [MarketField; 10] = [
        MarketField::Tables,
        MarketField::PricePerTable,
        MarketField::SalesPercent,
        MarketField::ReceptionistHours,
        MarketField::ReceptionistRate,
        MarketField::CleanerHours,
        MarketField::CleanerRate,
        MarketField::Marketing,
        MarketField::Supplies,
        MarketField::Insurance,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MarketField::Tables => "Revenue: Number of tables",
            MarketField::PricePerTable => "Revenue: Price per table ($)",
            MarketField::SalesPercent => "Revenue: Percent of vendor sales (%)",
            MarketField::ReceptionistHours => "Expense: Receptionist hours",
            MarketField::ReceptionistRate => "Expense: Receptionist rate ($)",
            MarketField::CleanerHours => "Expense: Cleaner hours",
            MarketField::CleanerRate => "Expense: Cleaner rate ($)",
            MarketField::Marketing => "Fixed: Marketing cost ($)",
            MarketField::Supplies => "Fixed: Supplies and decorations cost ($)",
            MarketField::Insurance => "Fixed: Insurance or rider cost ($)",
        }
    }
}

/// Input fields of the sip and paint evening.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SipPaintField {
    TicketPrice,
    Attendees,
    Bottles,
    CostPerBottle,
    InstructorCost,
    Supplies,
    ReceptionistHours,
    ReceptionistRate,
    CleanerHours,
    CleanerRate,
}

impl SipPaintField {
    pub const ALL: [SipPaintField; 10] = [
        SipPaintField::TicketPrice,
        SipPaintField::Attendees,
        SipPaintField::Bottles,
        SipPaintField::CostPerBottle,
        SipPaintField::InstructorCost,
        SipPaintField::Supplies,
        SipPaintField::ReceptionistHours,
        SipPaintField::ReceptionistRate,
        SipPaintField::CleanerHours,
        SipPaintField::CleanerRate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SipPaintField::TicketPrice => "Revenue: Ticket price per person ($)",
            SipPaintField::Attendees => "Revenue: Number of attendees",
            SipPaintField::Bottles => "Expense: Bottles of wine needed",
            SipPaintField::CostPerBottle => "Expense: Cost per bottle ($)",
            SipPaintField::InstructorCost => "Expense: Instructor cost ($)",
            SipPaintField::Supplies => "Fixed: Supplies cost (paint, brushes, canvas) ($)",
            SipPaintField::ReceptionistHours => "Expense: Receptionist hours",
            SipPaintField::ReceptionistRate => "Expense: Receptionist rate ($)",
            SipPaintField::CleanerHours => "Expense: Cleaner hours",
            SipPaintField::CleanerRate => "Expense: Cleaner rate ($)",
        }
    }
}

/// A field identifier scoped to the field family of one event type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldId {
    Camps(CampsField),
    Prep(PrepField),
    Market(MarketField),
    SipPaint(SipPaintField),
}

impl FieldId {
    /// Display label, also the lookup name used by shells.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Camps(f) => f.label(),
            FieldId::Prep(f) => f.label(),
            FieldId::Market(f) => f.label(),
            FieldId::SipPaint(f) => f.label(),
        }
    }

    /// Whether this field is part of the given event type's field family.
    pub fn belongs_to(self, event: EventId) -> bool {
        matches!(
            (self, event),
            (FieldId::Camps(_), EventId::Camps)
                | (FieldId::Prep(_), EventId::SatPsat | EventId::Tachs)
                | (FieldId::Market(_), EventId::Market)
                | (FieldId::SipPaint(_), EventId::SipPaint)
        )
    }

    /// Every field the formula of `event` reads.
    pub fn all_for(event: EventId) -> Vec<FieldId> {
        match event {
            EventId::Camps => CampsField::ALL.into_iter().map(FieldId::Camps).collect(),
            EventId::SatPsat | EventId::Tachs => {
                PrepField::ALL.into_iter().map(FieldId::Prep).collect()
            }
            EventId::Market => MarketField::ALL.into_iter().map(FieldId::Market).collect(),
            EventId::SipPaint => SipPaintField::ALL
                .into_iter()
                .map(FieldId::SipPaint)
                .collect(),
        }
    }

    /// Resolve a display label within one event type.
    pub fn from_label(event: EventId, label: &str) -> Result<FieldId, ValidationError> {
        let wanted = label.trim();
        FieldId::all_for(event)
            .into_iter()
            .find(|f| f.label() == wanted)
            .ok_or_else(|| ValidationError::UnknownField {
                event,
                label: label.to_string(),
            })
    }
}

/// Typed key of one raw input: an event type plus one of its own fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "UncheckedFieldKey")]
pub struct FieldKey {
    event: EventId,
    field: FieldId,
}

/// Wire form of a [`FieldKey`] before the family check.
#[derive(Deserialize)]
struct UncheckedFieldKey {
    event: EventId,
    field: FieldId,
}

impl TryFrom<UncheckedFieldKey> for FieldKey {
    type Error = ValidationError;

    fn try_from(raw: UncheckedFieldKey) -> Result<Self, Self::Error> {
        FieldKey::new(raw.event, raw.field)
    }
}

impl FieldKey {
    /// Build a key, rejecting a field from another event type's family.
    pub fn new(event: EventId, field: FieldId) -> Result<Self, ValidationError> {
        if !field.belongs_to(event) {
            return Err(ValidationError::FieldMismatch { event, field });
        }
        Ok(Self { event, field })
    }

    pub fn camps(field: CampsField) -> Self {
        Self {
            event: EventId::Camps,
            field: FieldId::Camps(field),
        }
    }

    pub fn sat_psat(field: PrepField) -> Self {
        Self {
            event: EventId::SatPsat,
            field: FieldId::Prep(field),
        }
    }

    pub fn tachs(field: PrepField) -> Self {
        Self {
            event: EventId::Tachs,
            field: FieldId::Prep(field),
        }
    }

    pub fn market(field: MarketField) -> Self {
        Self {
            event: EventId::Market,
            field: FieldId::Market(field),
        }
    }

    pub fn sip_paint(field: SipPaintField) -> Self {
        Self {
            event: EventId::SipPaint,
            field: FieldId::SipPaint(field),
        }
    }

    pub fn event(&self) -> EventId {
        self.event
    }

    pub fn field(&self) -> FieldId {
        self.field
    }
}

/// One editable input of an event definition.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct FieldDef {
    /// Typed identifier.
    pub id: FieldId,
    /// Text seeded into the input store.
    pub default_value: &'static str,
}

impl FieldDef {
    pub fn label(&self) -> &'static str {
        self.id.label()
    }
}

/// Static definition of one event type. Display strings are not used in
/// calculation.
#[derive(Clone, Debug, Serialize)]
pub struct EventDefinition {
    pub id: EventId,
    pub name: &'static str,
    pub seasonality: &'static str,
    pub summary: &'static str,
    /// Free-text competitor and cost references, display order.
    pub comparables: &'static [&'static str],
    /// Editable inputs in display order.
    pub fields: &'static [FieldDef],
}

impl EventDefinition {
    /// Store keys of this definition's fields, in display order.
    pub fn keyed_fields(&self) -> impl Iterator<Item = (FieldKey, &'static FieldDef)> + '_ {
        self.fields.iter().map(move |f| {
            (
                FieldKey {
                    event: self.id,
                    field: f.id,
                },
                f,
            )
        })
    }
}

/// Free-text values of every event's inputs, keyed by typed field key.
///
/// Values are unconstrained text; numeric interpretation happens in the
/// engine. Keys are never removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawInputs {
    values: BTreeMap<FieldKey, String>,
}

impl RawInputs {
    /// An empty store; every lookup is absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with each field's default text.
    pub fn seeded(catalog: &[EventDefinition]) -> Self {
        let values = catalog
            .iter()
            .flat_map(|def| def.keyed_fields())
            .map(|(key, field)| (key, field.default_value.to_string()))
            .collect();
        Self { values }
    }

    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    /// Replace one value, leaving every other key untouched.
    pub fn set(&mut self, key: FieldKey, text: impl Into<String>) {
        self.values.insert(key, text.into());
    }

    /// Replace one value addressed by its display label.
    pub fn set_by_label(
        &mut self,
        event: EventId,
        label: &str,
        text: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let field = FieldId::from_label(event, label)?;
        self.set(FieldKey { event, field }, text);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Subjective 1 to 5 star score; 1 is the hardest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(stars: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&stars) {
            return Err(ValidationError::DifficultyOutOfRange(stars));
        }
        Ok(Self(stars))
    }

    pub fn stars(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Very High (Hardest)",
            2 => "High",
            3 => "Medium",
            4 => "Low",
            _ => "Very Low (Easiest)",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Difficulty::new(value)
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> u8 {
        d.0
    }
}

/// Difficulty rating per event type; absent entries read as the default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulties {
    ratings: BTreeMap<EventId, Difficulty>,
}

impl Difficulties {
    pub fn get(&self, event: EventId) -> Difficulty {
        self.ratings.get(&event).copied().unwrap_or_default()
    }

    pub fn set(&mut self, event: EventId, rating: Difficulty) {
        self.ratings.insert(event, rating);
    }
}

impl Default for Difficulties {
    fn default() -> Self {
        Self {
            ratings: EventId::ALL
                .into_iter()
                .map(|id| (id, Difficulty::default()))
                .collect(),
        }
    }
}

/// Metric column a comparison can be ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    NetProfit,
    TotalPersonPower,
    ProfitPerPerson,
    Difficulty,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::NetProfit,
        SortKey::TotalPersonPower,
        SortKey::ProfitPerPerson,
        SortKey::Difficulty,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SortKey::NetProfit => "netProfit",
            SortKey::TotalPersonPower => "totalPersonPower",
            SortKey::ProfitPerPerson => "profitPerPerson",
            SortKey::Difficulty => "difficulty",
        }
    }

    /// Column header text.
    pub fn header(self) -> &'static str {
        match self {
            SortKey::NetProfit => "Net Profit",
            SortKey::TotalPersonPower => "Person Power (Hrs)",
            SortKey::ProfitPerPerson => "Profit / Hour",
            SortKey::Difficulty => "Difficulty (Stars)",
        }
    }
}

impl FromStr for SortKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownSortKey(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Active sort column and direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Header click: flips direction on the active key, otherwise selects
    /// `key` descending.
    pub fn toggle(self, key: SortKey) -> Self {
        let direction = if self.key == key && self.direction == SortDirection::Desc {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        };
        Self { key, direction }
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            key: SortKey::NetProfit,
            direction: SortDirection::Desc,
        }
    }
}

/// Derived metrics of one event for a single computation pass.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedMetric {
    pub id: EventId,
    pub name: &'static str,
    /// Revenue minus expenses in USD, may be negative.
    pub net_profit: Decimal,
    /// Labor hours summed across staff roles.
    pub total_person_power: Decimal,
    /// Net profit per labor hour; zero when no hours are consumed.
    pub profit_per_person: Decimal,
    pub difficulty: Difficulty,
    pub total_revenue: Decimal,
    pub total_expenses: Decimal,
}

/// Validation errors for domain invariants.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Star rating outside [1, 5].
    #[error("difficulty {0} is out of range [1, 5]")]
    DifficultyOutOfRange(u8),
    /// Event key not in the fixed set.
    #[error("unknown event type: {0}")]
    UnknownEvent(String),
    /// Label not part of the event's field family.
    #[error("unknown field for {event}: {label}")]
    UnknownField { event: EventId, label: String },
    /// Field used with an event type it does not belong to.
    #[error("field {field:?} does not belong to {event}")]
    FieldMismatch { event: EventId, field: FieldId },
    /// Sort column name not recognized.
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),
    /// Event type defined twice in a catalog.
    #[error("duplicate event definition: {0}")]
    DuplicateEvent(EventId),
    /// Field listed twice for one event.
    #[error("duplicate field for {event}: {label}")]
    DuplicateField { event: EventId, label: &'static str },
    /// A field the formula reads is not listed in the definition.
    #[error("missing field for {event}: {label}")]
    MissingField { event: EventId, label: &'static str },
}

/// Validate an event catalog: unique ids, and for every event exactly the
/// field family its formula reads.
pub fn validate_catalog(catalog: &[EventDefinition]) -> Result<(), ValidationError> {
    let mut ids: BTreeSet<EventId> = BTreeSet::new();
    for def in catalog {
        if !ids.insert(def.id) {
            return Err(ValidationError::DuplicateEvent(def.id));
        }
        let mut seen: BTreeSet<FieldId> = BTreeSet::new();
        for field in def.fields {
            if !field.id.belongs_to(def.id) {
                return Err(ValidationError::FieldMismatch {
                    event: def.id,
                    field: field.id,
                });
            }
            if !seen.insert(field.id) {
                return Err(ValidationError::DuplicateField {
                    event: def.id,
                    label: field.label(),
                });
            }
        }
        for required in FieldId::all_for(def.id) {
            if !seen.contains(&required) {
                return Err(ValidationError::MissingField {
                    event: def.id,
                    label: required.label(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn builtin_catalog_is_valid() {
        validate_catalog(&EVENTS).unwrap();
        assert_eq!(EVENTS.len(), 5);
        for id in EventId::ALL {
            assert_eq!(definition(id).id, id);
            assert_eq!(EVENTS[id.index()].id, id);
        }
    }

    #[test]
    fn catalog_rejects_missing_and_foreign_fields() {
        static SHORT: [FieldDef; 1] = [FieldDef {
            id: FieldId::Market(MarketField::Tables),
            default_value: "24",
        }];
        let def = EventDefinition {
            id: EventId::Market,
            name: "Market",
            seasonality: "",
            summary: "",
            comparables: &[],
            fields: &SHORT,
        };
        assert_eq!(
            validate_catalog(&[def.clone()]),
            Err(ValidationError::MissingField {
                event: EventId::Market,
                label: MarketField::PricePerTable.label(),
            })
        );

        let foreign = EventDefinition {
            id: EventId::Camps,
            ..def.clone()
        };
        assert!(matches!(
            validate_catalog(&[foreign]),
            Err(ValidationError::FieldMismatch { .. })
        ));

        let twice = [EVENTS[0].clone(), EVENTS[0].clone()];
        assert_eq!(
            validate_catalog(&twice),
            Err(ValidationError::DuplicateEvent(EventId::Camps))
        );
    }

    #[test]
    fn seeded_inputs_hold_defaults() {
        let inputs = RawInputs::seeded(&EVENTS);
        let total: usize = EVENTS.iter().map(|d| d.fields.len()).sum();
        assert_eq!(inputs.len(), total);
        assert_eq!(inputs.get(FieldKey::camps(CampsField::Students)), Some("40"));
        assert_eq!(
            inputs.get(FieldKey::tachs(PrepField::AdminRate)),
            Some(RECEPTIONIST_RATE)
        );
        assert_eq!(
            inputs.get(FieldKey::sip_paint(SipPaintField::CleanerRate)),
            Some(CLEANER_RATE)
        );
        assert!(!inputs.is_empty());
        assert!(RawInputs::new().is_empty());
        assert_eq!(RawInputs::new().get(FieldKey::camps(CampsField::Students)), None);
    }

    #[test]
    fn set_leaves_other_events_untouched() {
        let mut inputs = RawInputs::seeded(&EVENTS);
        inputs.set(FieldKey::sat_psat(PrepField::Students), "20");
        assert_eq!(inputs.get(FieldKey::sat_psat(PrepField::Students)), Some("20"));
        assert_eq!(inputs.get(FieldKey::tachs(PrepField::Students)), Some("12"));

        inputs
            .set_by_label(EventId::Market, "Revenue: Number of tables", "30")
            .unwrap();
        assert_eq!(inputs.get(FieldKey::market(MarketField::Tables)), Some("30"));
        assert!(matches!(
            inputs.set_by_label(EventId::Market, "Revenue: Number of students", "1"),
            Err(ValidationError::UnknownField { .. })
        ));
    }

    #[test]
    fn field_key_rejects_foreign_family() {
        assert!(FieldKey::new(EventId::Tachs, FieldId::Prep(PrepField::Students)).is_ok());
        assert_eq!(
            FieldKey::new(EventId::Market, FieldId::Camps(CampsField::Students)),
            Err(ValidationError::FieldMismatch {
                event: EventId::Market,
                field: FieldId::Camps(CampsField::Students),
            })
        );
    }

    #[test]
    fn field_key_serde_checks_family() {
        let key = FieldKey::market(MarketField::Tables);
        let json = serde_json::to_value(key).unwrap();
        let back: FieldKey = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(back.event(), EventId::Market);
        assert_eq!(back.field(), FieldId::Market(MarketField::Tables));

        let mut mixed = json;
        mixed["field"] = serde_json::to_value(FieldId::Camps(CampsField::Students)).unwrap();
        assert!(serde_json::from_value::<FieldKey>(mixed).is_err());
    }

    #[test]
    fn difficulty_bounds_and_labels() {
        assert!(Difficulty::new(0).is_err());
        assert!(Difficulty::new(6).is_err());
        assert_eq!(Difficulty::default().stars(), 3);
        assert_eq!(Difficulty::new(1).unwrap().label(), "Very High (Hardest)");
        assert_eq!(Difficulty::new(5).unwrap().label(), "Very Low (Easiest)");

        let mut ratings = Difficulties::default();
        for id in EventId::ALL {
            assert_eq!(ratings.get(id).stars(), 3);
        }
        ratings.set(EventId::Market, Difficulty::new(5).unwrap());
        assert_eq!(ratings.get(EventId::Market).stars(), 5);
        assert_eq!(ratings.get(EventId::Camps).stars(), 3);
    }

    #[test]
    fn difficulty_serde_enforces_range() {
        assert_eq!(serde_json::to_string(&Difficulty::new(4).unwrap()).unwrap(), "4");
        assert!(serde_json::from_str::<Difficulty>("9").is_err());
        let d: Difficulty = serde_json::from_str("2").unwrap();
        assert_eq!(d.stars(), 2);
    }

    #[test]
    fn sort_toggle_flips_active_key() {
        let cfg = SortConfig::default();
        assert_eq!(cfg, SortConfig::new(SortKey::NetProfit, SortDirection::Desc));
        let cfg = cfg.toggle(SortKey::NetProfit);
        assert_eq!(cfg.direction, SortDirection::Asc);
        let cfg = cfg.toggle(SortKey::NetProfit);
        assert_eq!(cfg.direction, SortDirection::Desc);
        let cfg = cfg.toggle(SortKey::NetProfit).toggle(SortKey::Difficulty);
        assert_eq!(cfg, SortConfig::new(SortKey::Difficulty, SortDirection::Desc));
    }

    #[test]
    fn keys_parse_from_text() {
        assert_eq!("satPsat".parse::<EventId>().unwrap(), EventId::SatPsat);
        assert_eq!(" SIPPAINT ".parse::<EventId>().unwrap(), EventId::SipPaint);
        assert!("bakeSale".parse::<EventId>().is_err());
        assert_eq!(
            "profitPerPerson".parse::<SortKey>().unwrap(),
            SortKey::ProfitPerPerson
        );
        assert!("name".parse::<SortKey>().is_err());
        assert_eq!(serde_json::to_string(&EventId::SipPaint).unwrap(), "\"sipPaint\"");
    }

    proptest! {
        #[test]
        fn labels_resolve_back_to_fields(idx in 0usize..5) {
            let event = EventId::ALL[idx];
            for field in FieldId::all_for(event) {
                prop_assert_eq!(FieldId::from_label(event, field.label()).unwrap(), field);
                prop_assert!(FieldKey::new(event, field).is_ok());
            }
        }

        #[test]
        fn difficulty_accepts_exactly_one_to_five(stars in 0u8..=255) {
            prop_assert_eq!(Difficulty::new(stars).is_ok(), (1..=5).contains(&stars));
        }
    }
}
