//! The fixed catalog of fundraising event types with default inputs.

use crate::{
    CampsField, EventDefinition, EventId, FieldDef, FieldId, MarketField, PrepField,
    SipPaintField,
};

/// Standard receptionist and admin support hourly rate.
pub const RECEPTIONIST_RATE: &str = "16.30";
/// Standard cleaner hourly rate.
pub const CLEANER_RATE: &str = "31";

const fn camps(field: CampsField, default_value: &'static str) -> FieldDef {
    FieldDef {
        id: FieldId::Camps(field),
        default_value,
    }
}

const fn prep(field: PrepField, default_value: &'static str) -> FieldDef {
    FieldDef {
        id: FieldId::Prep(field),
        default_value,
    }
}

const fn market(field: MarketField, default_value: &'static str) -> FieldDef {
    FieldDef {
        id: FieldId::Market(field),
        default_value,
    }
}

const fn sip_paint(field: SipPaintField, default_value: &'static str) -> FieldDef {
    FieldDef {
        id: FieldId::SipPaint(field),
        default_value,
    }
}

const CAMPS_FIELDS: [FieldDef; 12] = [
    camps(CampsField::PricePerStudent, "450"),
    camps(CampsField::Students, "40"),
    camps(CampsField::CounselorRate, "19"),
    camps(CampsField::CounselorHours, "8"),
    camps(CampsField::CounselorRatio, "12"),
    camps(CampsField::ReceptionistHours, "6"),
    camps(CampsField::ReceptionistRate, RECEPTIONIST_RATE),
    camps(CampsField::CleanerHours, "8"),
    camps(CampsField::CleanerRate, CLEANER_RATE),
    camps(CampsField::Supplies, "300"),
    camps(CampsField::Insurance, "0"),
    camps(CampsField::FoodPerStudent, "15"),
];

const SAT_PSAT_FIELDS: [FieldDef; 9] = [
    prep(PrepField::PricePerStudent, "2000"),
    prep(PrepField::Students, "12"),
    prep(PrepField::InstructorRate, "60"),
    prep(PrepField::InstructionHours, "20"),
    prep(PrepField::MaterialsPerStudent, "35"),
    prep(PrepField::AdminHours, "6"),
    prep(PrepField::AdminRate, RECEPTIONIST_RATE),
    prep(PrepField::CleanerHours, "3"),
    prep(PrepField::CleanerRate, CLEANER_RATE),
];

const TACHS_FIELDS: [FieldDef; 9] = [
    prep(PrepField::PricePerStudent, "300"),
    prep(PrepField::Students, "12"),
    prep(PrepField::InstructorRate, "55"),
    prep(PrepField::InstructionHours, "18"),
    prep(PrepField::MaterialsPerStudent, "30"),
    prep(PrepField::AdminHours, "4"),
    prep(PrepField::AdminRate, RECEPTIONIST_RATE),
    prep(PrepField::CleanerHours, "2"),
    prep(PrepField::CleanerRate, CLEANER_RATE),
];

const MARKET_FIELDS: [FieldDef; 10] = [
    market(MarketField::Tables, "24"),
    market(MarketField::PricePerTable, "85"),
    market(MarketField::SalesPercent, "10"),
    market(MarketField::ReceptionistHours, "6"),
    market(MarketField::ReceptionistRate, RECEPTIONIST_RATE),
    market(MarketField::CleanerHours, "6"),
    market(MarketField::CleanerRate, CLEANER_RATE),
    market(MarketField::Marketing, "300"),
    market(MarketField::Supplies, "250"),
    market(MarketField::Insurance, "50"),
];

const SIP_PAINT_FIELDS: [FieldDef; 10] = [
    sip_paint(SipPaintField::TicketPrice, "50"),
    sip_paint(SipPaintField::Attendees, "30"),
    sip_paint(SipPaintField::Bottles, "10"),
    sip_paint(SipPaintField::CostPerBottle, "15"),
    sip_paint(SipPaintField::InstructorCost, "150"),
    sip_paint(SipPaintField::Supplies, "180"),
    sip_paint(SipPaintField::ReceptionistHours, "3"),
    sip_paint(SipPaintField::ReceptionistRate, RECEPTIONIST_RATE),
    sip_paint(SipPaintField::CleanerHours, "2"),
    sip_paint(SipPaintField::CleanerRate, CLEANER_RATE),
];

/// The five event definitions, in catalog order (see [`EventId::ALL`]).
pub static EVENTS: [EventDefinition; 5] = [
    EventDefinition {
        id: EventId::Camps,
        name: "Camps for Holiday Breaks",
        seasonality: "Christmas, February winter break, Easter break",
        summary: "Holiday break camps for preschool through eighth grade students with sports, \
                  arts, and music activities that provide childcare coverage when school is closed.",
        comparables: &[
            "Gym Rats Basketball, 80 dollars per day, sports camp",
            "Artistree Performing Arts, 495 dollars per week, arts camp",
            "Regional multi activity camps, 350 to 500 dollars per week",
            "Camp counselor pay in Westchester County, around 16 to 21 dollars per hour",
            "New York State day camp ratio guideline, one counselor to twelve children",
        ],
        fields: &CAMPS_FIELDS,
    },
    EventDefinition {
        id: EventId::SatPsat,
        name: "SAT and PSAT Prep Classes",
        seasonality: "Year round, peaks before main test dates",
        summary: "Weekend and evening preparation classes for high school students that cover \
                  strategies, content review, and practice exams for SAT and PSAT.",
        comparables: &[
            "Westchester Prep, about 2,000 dollars for an eight week group course",
            "Regional test prep centers, around 1,500 to 2,500 dollars per course",
            "Private tutors, 60 to 120 dollars per hour",
            "Materials often bundled into total course price",
        ],
        fields: &SAT_PSAT_FIELDS,
    },
    EventDefinition {
        id: EventId::Tachs,
        name: "TACHS Prep Classes",
        seasonality: "Late summer through fall",
        summary: "Preparation program for seventh and eighth grade students who are applying to \
                  Catholic high schools and taking the TACHS exam.",
        comparables: &[
            "St John's Prep, about 400 dollars for seven sessions with workbook included",
            "Molloy High School, about 395 dollars for six sessions with book and diagnostic exam",
            "Sacred Heart High School, about 195 dollars for six sessions with materials included",
            "Regional estimate for similar programs, around 300 dollars",
            "Instructor pay, about 35 to 75 dollars per hour",
        ],
        fields: &TACHS_FIELDS,
    },
    EventDefinition {
        id: EventId::Market,
        name: "Christmas Market",
        seasonality: "Early December",
        summary: "Christmas market hosted in the school gym where local vendors rent tables and \
                  optionally share a percentage of their sales.",
        comparables: &[
            "Immaculate Conception Church in Eastchester, about 40 dollars per table",
            "Regional markets, around 65 to 230 dollars per table per day",
            "Standard six foot folding tables",
            "Your gym estimated at about twenty four tables maximum",
        ],
        fields: &MARKET_FIELDS,
    },
    EventDefinition {
        id: EventId::SipPaint,
        name: "Sip and Paint Evening",
        seasonality: "Flexible, typically winter and spring evenings",
        summary: "Adult evening event where participants follow a guided painting session while \
                  enjoying wine, with ticket pricing set to cover all costs plus target profit.",
        comparables: &[
            "Muse Paintbar in Yonkers, around 35 to 55 dollars per person",
            "Pottery Factory in Mount Kisco, around 39 dollars per person",
            "Wine estimate, about 15 dollars per bottle",
        ],
        fields: &SIP_PAINT_FIELDS,
    },
];

/// Built-in definition of one event type.
pub fn definition(id: EventId) -> &'static EventDefinition {
    &EVENTS[id.index()]
}
