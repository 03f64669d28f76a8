#![deny(warnings)]

//! Application state for the planner shells.
//!
//! State lives in an explicit [`AppState`] snapshot. Shells never mutate it
//! ad hoc: every user interaction is an [`Action`] passed through [`reduce`],
//! and the [`Dashboard`] view is rebuilt from the resulting snapshot.

use planner_core::{
    definition, ComputedMetric, Difficulties, Difficulty, EventDefinition, EventId, FieldKey,
    RawInputs, SortConfig, SortKey, ValidationError, EVENTS,
};
use serde::Serialize;
use tracing::debug;

pub mod format;

/// Everything a shell needs to render the planner.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    /// Event shown in the detail panel.
    pub selected: EventId,
    pub inputs: RawInputs,
    pub difficulties: Difficulties,
    pub sort: SortConfig,
    pub sidebar_open: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            selected: EventId::Camps,
            inputs: RawInputs::seeded(&EVENTS),
            difficulties: Difficulties::default(),
            sort: SortConfig::default(),
            sidebar_open: true,
        }
    }
}

/// A user interaction.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Switch the detail panel; other events' inputs are kept.
    SelectEvent(EventId),
    EditField { key: FieldKey, text: String },
    /// Edit a field addressed by its display label.
    EditFieldByLabel {
        event: EventId,
        label: String,
        text: String,
    },
    SetDifficulty { event: EventId, stars: u8 },
    /// Header click on a sort column.
    Sort(SortKey),
    ToggleSidebar,
}

impl AppState {
    /// Apply one action in place. On error the state is unchanged.
    pub fn apply(&mut self, action: Action) -> Result<(), ValidationError> {
        debug!(?action, "applying action");
        match action {
            Action::SelectEvent(event) => self.selected = event,
            Action::EditField { key, text } => self.inputs.set(key, text),
            Action::EditFieldByLabel { event, label, text } => {
                self.inputs.set_by_label(event, &label, text)?
            }
            Action::SetDifficulty { event, stars } => {
                self.difficulties.set(event, Difficulty::new(stars)?)
            }
            Action::Sort(key) => self.sort = self.sort.toggle(key),
            Action::ToggleSidebar => self.sidebar_open = !self.sidebar_open,
        }
        Ok(())
    }
}

/// Produce the next snapshot without touching `state`.
pub fn reduce(state: &AppState, action: Action) -> Result<AppState, ValidationError> {
    let mut next = state.clone();
    next.apply(action)?;
    Ok(next)
}

/// One input of the detail panel with its current text.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldView {
    pub key: FieldKey,
    pub label: &'static str,
    pub text: String,
}

/// Detail panel of the selected event.
#[derive(Clone, Debug, Serialize)]
pub struct EventDetail {
    pub definition: &'static EventDefinition,
    pub metric: ComputedMetric,
    pub fields: Vec<FieldView>,
}

/// Formatted row of the comparison table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableRow {
    pub id: EventId,
    pub name: &'static str,
    pub net_profit: String,
    pub person_power: String,
    pub profit_per_hour: String,
    pub difficulty: String,
    pub selected: bool,
}

/// Everything rendered for one state snapshot.
#[derive(Clone, Debug, Serialize)]
pub struct Dashboard {
    pub sort: SortConfig,
    /// All events, sorted.
    pub rows: Vec<ComputedMetric>,
    pub detail: EventDetail,
}

impl Dashboard {
    /// Recompute every event from `state`; nothing is cached between calls.
    pub fn build(state: &AppState) -> Self {
        let rows =
            planner_econ::compute_all(&EVENTS, &state.inputs, &state.difficulties, state.sort);
        let def = definition(state.selected);
        let metric = match rows.iter().find(|m| m.id == state.selected) {
            Some(m) => m.clone(),
            None => planner_econ::evaluate_event(def, &state.inputs, &state.difficulties),
        };
        let fields = def
            .keyed_fields()
            .map(|(key, f)| FieldView {
                key,
                label: f.label(),
                text: state.inputs.get(key).unwrap_or_default().to_string(),
            })
            .collect();
        Self {
            sort: state.sort,
            rows,
            detail: EventDetail {
                definition: def,
                metric,
                fields,
            },
        }
    }

    /// Comparison table with display formatting applied.
    pub fn table(&self) -> Vec<TableRow> {
        self.rows
            .iter()
            .map(|m| TableRow {
                id: m.id,
                name: m.name,
                net_profit: format::whole_dollars(m.net_profit),
                person_power: format::hours(m.total_person_power),
                profit_per_hour: format::dollars_and_cents(m.profit_per_person),
                difficulty: format::difficulty(m.difficulty),
                selected: m.id == self.detail.metric.id,
            })
            .collect()
    }
}
