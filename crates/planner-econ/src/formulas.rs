//! Per-event profitability formulas over strongly typed input sets.
//!
//! Each event type reads only its own fields. All arithmetic is checked so
//! that an overflow surfaces as a [`CalcError`] instead of a panic.

use crate::coerce::to_amount;
use crate::CalcError;
use planner_core::{
    CampsField, EventId, FieldKey, MarketField, PrepField, RawInputs, SipPaintField,
};
use rust_decimal::Decimal;

/// Assumed vendor sales per table used to estimate the market commission.
pub const VENDOR_SALES_PER_TABLE: Decimal = Decimal::from_parts(500, 0, 0, false, 0);
/// Instructor hours allotted to a sip and paint evening.
pub const PAINT_INSTRUCTOR_HOURS: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// Revenue, expenses and labor of one event before ratios.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Financials {
    pub revenue: Decimal,
    pub expenses: Decimal,
    pub net_profit: Decimal,
    pub person_hours: Decimal,
}

impl Financials {
    fn new(revenue: Decimal, expenses: Decimal, person_hours: Decimal) -> Result<Self, CalcError> {
        let net_profit = revenue
            .checked_sub(expenses)
            .ok_or(CalcError::Overflow("net profit"))?;
        Ok(Self {
            revenue,
            expenses,
            net_profit,
            person_hours,
        })
    }
}

fn mul(a: Decimal, b: Decimal, step: &'static str) -> Result<Decimal, CalcError> {
    a.checked_mul(b).ok_or(CalcError::Overflow(step))
}

fn sum(terms: &[Decimal], step: &'static str) -> Result<Decimal, CalcError> {
    terms.iter().try_fold(Decimal::ZERO, |acc, t| {
        acc.checked_add(*t).ok_or(CalcError::Overflow(step))
    })
}

/// Counselors required to staff `students` at one counselor per `ratio`.
///
/// Rounds up: 40 students at 1:12 needs 4 counselors. A ratio of zero or
/// less means a single counselor covers everyone.
pub fn counselors_needed(students: Decimal, ratio: Decimal) -> Result<Decimal, CalcError> {
    if ratio <= Decimal::ZERO {
        return Ok(if students > Decimal::ZERO {
            Decimal::ONE
        } else {
            Decimal::ZERO
        });
    }
    let exact = students
        .checked_div(ratio)
        .ok_or(CalcError::Overflow("counselor count"))?;
    Ok(exact.ceil())
}

/// Net profit per labor hour, zero when no hours are consumed.
pub fn profit_per_hour(net_profit: Decimal, person_hours: Decimal) -> Result<Decimal, CalcError> {
    if person_hours <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    net_profit
        .checked_div(person_hours)
        .ok_or(CalcError::DivisionFailed("profit per hour"))
}

/// Inputs of a holiday camp; counselors are staffed by student ratio.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CampsInputs {
    pub price_per_student: Decimal,
    pub students: Decimal,
    pub counselor_rate: Decimal,
    pub counselor_hours: Decimal,
    pub counselor_ratio: Decimal,
    pub receptionist_hours: Decimal,
    pub receptionist_rate: Decimal,
    pub cleaner_hours: Decimal,
    pub cleaner_rate: Decimal,
    pub supplies: Decimal,
    pub insurance: Decimal,
    pub food_per_student: Decimal,
}

impl CampsInputs {
    /// Read every camp field; absent or malformed text reads as 0.
    pub fn read(raw: &RawInputs) -> Self {
        let val = |f: CampsField| to_amount(&raw.get(FieldKey::camps(f)));
        Self {
            price_per_student: val(CampsField::PricePerStudent),
            students: val(CampsField::Students),
            counselor_rate: val(CampsField::CounselorRate),
            counselor_hours: val(CampsField::CounselorHours),
            counselor_ratio: val(CampsField::CounselorRatio),
            receptionist_hours: val(CampsField::ReceptionistHours),
            receptionist_rate: val(CampsField::ReceptionistRate),
            cleaner_hours: val(CampsField::CleanerHours),
            cleaner_rate: val(CampsField::CleanerRate),
            supplies: val(CampsField::Supplies),
            insurance: val(CampsField::Insurance),
            food_per_student: val(CampsField::FoodPerStudent),
        }
    }

    /// Tuition less staff, supplies, insurance and food. Staff hours
    /// count each counselor's full shift.
    pub fn financials(&self) -> Result<Financials, CalcError> {
        let counselors = counselors_needed(self.students, self.counselor_ratio)?;
        let counselor_time = mul(counselors, self.counselor_hours, "counselor hours")?;
        let person_hours = sum(
            &[counselor_time, self.receptionist_hours, self.cleaner_hours],
            "person hours",
        )?;

        let personnel = sum(
            &[
                mul(self.counselor_rate, counselor_time, "counselor pay")?,
                mul(self.receptionist_rate, self.receptionist_hours, "receptionist pay")?,
                mul(self.cleaner_rate, self.cleaner_hours, "cleaner pay")?,
            ],
            "personnel",
        )?;
        let food = mul(self.food_per_student, self.students, "food")?;
        let expenses = sum(&[personnel, self.supplies, self.insurance, food], "expenses")?;
        let revenue = mul(self.price_per_student, self.students, "revenue")?;
        Financials::new(revenue, expenses, person_hours)
    }
}

/// Inputs of a prep class; one instructor teaches every instruction hour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrepInputs {
    pub price_per_student: Decimal,
    pub students: Decimal,
    pub instructor_rate: Decimal,
    pub instruction_hours: Decimal,
    pub materials_per_student: Decimal,
    pub admin_hours: Decimal,
    pub admin_rate: Decimal,
    pub cleaner_hours: Decimal,
    pub cleaner_rate: Decimal,
}

impl PrepInputs {
    /// Read prep fields addressed through `key`, e.g. `FieldKey::tachs`.
    pub fn read(raw: &RawInputs, key: fn(PrepField) -> FieldKey) -> Self {
        let val = |f: PrepField| to_amount(&raw.get(key(f)));
        Self {
            price_per_student: val(PrepField::PricePerStudent),
            students: val(PrepField::Students),
            instructor_rate: val(PrepField::InstructorRate),
            instruction_hours: val(PrepField::InstructionHours),
            materials_per_student: val(PrepField::MaterialsPerStudent),
            admin_hours: val(PrepField::AdminHours),
            admin_rate: val(PrepField::AdminRate),
            cleaner_hours: val(PrepField::CleanerHours),
            cleaner_rate: val(PrepField::CleanerRate),
        }
    }

    /// Tuition less staff pay and per-student materials.
    pub fn financials(&self) -> Result<Financials, CalcError> {
        let person_hours = sum(
            &[self.instruction_hours, self.admin_hours, self.cleaner_hours],
            "person hours",
        )?;
        let personnel = sum(
            &[
                mul(self.instructor_rate, self.instruction_hours, "instructor pay")?,
                mul(self.admin_rate, self.admin_hours, "admin pay")?,
                mul(self.cleaner_rate, self.cleaner_hours, "cleaner pay")?,
            ],
            "personnel",
        )?;
        let materials = mul(self.materials_per_student, self.students, "materials")?;
        let expenses = sum(&[personnel, materials], "expenses")?;
        let revenue = mul(self.price_per_student, self.students, "revenue")?;
        Financials::new(revenue, expenses, person_hours)
    }
}

/// Inputs of a vendor market; revenue is table rent plus commission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarketInputs {
    pub tables: Decimal,
    pub price_per_table: Decimal,
    /// Commission on vendor sales, in percent.
    pub sales_percent: Decimal,
    pub receptionist_hours: Decimal,
    pub receptionist_rate: Decimal,
    pub cleaner_hours: Decimal,
    pub cleaner_rate: Decimal,
    pub marketing: Decimal,
    pub supplies: Decimal,
    pub insurance: Decimal,
}

impl MarketInputs {
    /// Read every market field; absent or malformed text reads as 0.
    pub fn read(raw: &RawInputs) -> Self {
        let val = |f: MarketField| to_amount(&raw.get(FieldKey::market(f)));
        Self {
            tables: val(MarketField::Tables),
            price_per_table: val(MarketField::PricePerTable),
            sales_percent: val(MarketField::SalesPercent),
            receptionist_hours: val(MarketField::ReceptionistHours),
            receptionist_rate: val(MarketField::ReceptionistRate),
            cleaner_hours: val(MarketField::CleanerHours),
            cleaner_rate: val(MarketField::CleanerRate),
            marketing: val(MarketField::Marketing),
            supplies: val(MarketField::Supplies),
            insurance: val(MarketField::Insurance),
        }
    }

    /// Commission assumes [`VENDOR_SALES_PER_TABLE`] of sales at every table.
    pub fn financials(&self) -> Result<Financials, CalcError> {
        let person_hours = sum(&[self.receptionist_hours, self.cleaner_hours], "person hours")?;

        let table_revenue = mul(self.tables, self.price_per_table, "table revenue")?;
        let share = self
            .sales_percent
            .checked_div(Decimal::ONE_HUNDRED)
            .ok_or(CalcError::DivisionFailed("sales share"))?;
        let commission = mul(
            mul(share, VENDOR_SALES_PER_TABLE, "commission")?,
            self.tables,
            "commission",
        )?;
        let revenue = sum(&[table_revenue, commission], "revenue")?;

        let personnel = sum(
            &[
                mul(self.receptionist_rate, self.receptionist_hours, "receptionist pay")?,
                mul(self.cleaner_rate, self.cleaner_hours, "cleaner pay")?,
            ],
            "personnel",
        )?;
        let expenses = sum(
            &[personnel, self.marketing, self.supplies, self.insurance],
            "expenses",
        )?;
        Financials::new(revenue, expenses, person_hours)
    }
}

/// Inputs of a sip and paint night.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SipPaintInputs {
    pub ticket_price: Decimal,
    pub attendees: Decimal,
    pub bottles: Decimal,
    pub cost_per_bottle: Decimal,
    /// Flat fee, not hourly.
    pub instructor_cost: Decimal,
    pub supplies: Decimal,
    pub receptionist_hours: Decimal,
    pub receptionist_rate: Decimal,
    pub cleaner_hours: Decimal,
    pub cleaner_rate: Decimal,
}

impl SipPaintInputs {
    /// Read every sip and paint field; absent or malformed text reads as 0.
    pub fn read(raw: &RawInputs) -> Self {
        let val = |f: SipPaintField| to_amount(&raw.get(FieldKey::sip_paint(f)));
        Self {
            ticket_price: val(SipPaintField::TicketPrice),
            attendees: val(SipPaintField::Attendees),
            bottles: val(SipPaintField::Bottles),
            cost_per_bottle: val(SipPaintField::CostPerBottle),
            instructor_cost: val(SipPaintField::InstructorCost),
            supplies: val(SipPaintField::Supplies),
            receptionist_hours: val(SipPaintField::ReceptionistHours),
            receptionist_rate: val(SipPaintField::ReceptionistRate),
            cleaner_hours: val(SipPaintField::CleanerHours),
            cleaner_rate: val(SipPaintField::CleanerRate),
        }
    }

    /// The instructor is a flat fee but still counts
    /// [`PAINT_INSTRUCTOR_HOURS`] toward staff hours.
    pub fn financials(&self) -> Result<Financials, CalcError> {
        let person_hours = sum(
            &[
                PAINT_INSTRUCTOR_HOURS,
                self.receptionist_hours,
                self.cleaner_hours,
            ],
            "person hours",
        )?;
        let personnel = sum(
            &[
                self.instructor_cost,
                mul(self.receptionist_rate, self.receptionist_hours, "receptionist pay")?,
                mul(self.cleaner_rate, self.cleaner_hours, "cleaner pay")?,
            ],
            "personnel",
        )?;
        let beverages = mul(self.bottles, self.cost_per_bottle, "beverages")?;
        let expenses = sum(&[personnel, self.supplies, beverages], "expenses")?;
        let revenue = mul(self.ticket_price, self.attendees, "revenue")?;
        Financials::new(revenue, expenses, person_hours)
    }
}

/// Typed inputs of one event, one variant per event type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventInputs {
    Camps(CampsInputs),
    SatPsat(PrepInputs),
    Tachs(PrepInputs),
    Market(MarketInputs),
    SipPaint(SipPaintInputs),
}

impl EventInputs {
    /// Coerce the raw text of `event`'s own fields; absent keys read as zero.
    pub fn read(event: EventId, raw: &RawInputs) -> Self {
        match event {
            EventId::Camps => EventInputs::Camps(CampsInputs::read(raw)),
            EventId::SatPsat => EventInputs::SatPsat(PrepInputs::read(raw, FieldKey::sat_psat)),
            EventId::Tachs => EventInputs::Tachs(PrepInputs::read(raw, FieldKey::tachs)),
            EventId::Market => EventInputs::Market(MarketInputs::read(raw)),
            EventId::SipPaint => EventInputs::SipPaint(SipPaintInputs::read(raw)),
        }
    }

    /// Event type these inputs were read for.
    pub fn event(&self) -> EventId {
        match self {
            EventInputs::Camps(_) => EventId::Camps,
            EventInputs::SatPsat(_) => EventId::SatPsat,
            EventInputs::Tachs(_) => EventId::Tachs,
            EventInputs::Market(_) => EventId::Market,
            EventInputs::SipPaint(_) => EventId::SipPaint,
        }
    }

    /// Run the formula of this event type.
    pub fn financials(&self) -> Result<Financials, CalcError> {
        match self {
            EventInputs::Camps(i) => i.financials(),
            EventInputs::SatPsat(i) | EventInputs::Tachs(i) => i.financials(),
            EventInputs::Market(i) => i.financials(),
            EventInputs::SipPaint(i) => i.financials(),
        }
    }
}
