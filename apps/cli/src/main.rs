#![deny(warnings)]

//! Headless planner shell: applies an optional scenario and prints the
//! event comparison and the selected event's detail.

use anyhow::{Context, Result};
use planner_core::{EventId, SortConfig, SortDirection, SortKey};
use planner_runtime::{format, Action, AppState, Dashboard};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{info, Subscriber};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Args {
    scenario: Option<PathBuf>,
    event: Option<String>,
    sort: Option<String>,
    asc: bool,
    json: bool,
    version: bool,
}

fn parse_args() -> Args {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--scenario" => args.scenario = it.next().map(PathBuf::from),
            "--event" => args.event = it.next(),
            "--sort" => args.sort = it.next(),
            "--asc" => args.asc = true,
            "--json" => args.json = true,
            "--version" => args.version = true,
            _ => {}
        }
    }
    args
}

/// Input overrides, ratings and view settings loaded from YAML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Scenario {
    selected: Option<EventId>,
    sort: Option<SortConfig>,
    /// Field text by event and display label; numbers are accepted too.
    inputs: BTreeMap<EventId, BTreeMap<String, serde_yaml::Value>>,
    difficulty: BTreeMap<EventId, u8>,
}

fn load_scenario(path: &Path) -> Result<Scenario> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading scenario {}", path.display()))?;
    serde_yaml::from_str(&text).with_context(|| format!("parsing scenario {}", path.display()))
}

fn value_text(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Header clicks that move `current` to `target`.
fn sort_actions(current: SortConfig, target: SortConfig) -> Vec<Action> {
    let mut actions = Vec::new();
    let mut cfg = current;
    while cfg != target && actions.len() < 2 {
        actions.push(Action::Sort(target.key));
        cfg = cfg.toggle(target.key);
    }
    actions
}

fn scenario_actions(scenario: Scenario, current_sort: SortConfig) -> Vec<Action> {
    let mut actions = Vec::new();
    for (event, fields) in scenario.inputs {
        for (label, value) in fields {
            actions.push(Action::EditFieldByLabel {
                event,
                label,
                text: value_text(&value),
            });
        }
    }
    for (event, stars) in scenario.difficulty {
        actions.push(Action::SetDifficulty { event, stars });
    }
    if let Some(event) = scenario.selected {
        actions.push(Action::SelectEvent(event));
    }
    if let Some(target) = scenario.sort {
        actions.extend(sort_actions(current_sort, target));
    }
    actions
}

fn build_state(args: &Args) -> Result<AppState> {
    let mut state = AppState::default();
    if let Some(path) = &args.scenario {
        let scenario = load_scenario(path)?;
        for action in scenario_actions(scenario, state.sort) {
            state.apply(action)?;
        }
    }
    if let Some(event) = &args.event {
        state.apply(Action::SelectEvent(event.parse()?))?;
    }
    if args.sort.is_some() || args.asc {
        let key = match &args.sort {
            Some(k) => k.parse::<SortKey>()?,
            None => state.sort.key,
        };
        let direction = if args.asc {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        };
        for action in sort_actions(state.sort, SortConfig::new(key, direction)) {
            state.apply(action)?;
        }
    }
    Ok(state)
}

fn print_dashboard(dash: &Dashboard) {
    let arrow = match dash.sort.direction {
        SortDirection::Asc => "asc",
        SortDirection::Desc => "desc",
    };
    println!(
        "Event Comparison Dashboard | sorted by {} ({})",
        dash.sort.key.header(),
        arrow
    );
    println!(
        "  {:<28} {:>12} {:>20} {:>14}  {}",
        "Event Name",
        SortKey::NetProfit.header(),
        SortKey::TotalPersonPower.header(),
        SortKey::ProfitPerPerson.header(),
        SortKey::Difficulty.header()
    );
    for row in dash.table() {
        let marker = if row.selected { '>' } else { ' ' };
        println!(
            "{marker} {:<28} {:>12} {:>20} {:>14}  {}",
            row.name, row.net_profit, row.person_power, row.profit_per_hour, row.difficulty
        );
    }

    let detail = &dash.detail;
    let def = detail.definition;
    println!();
    println!("Detailed Metrics and Inputs for: {}", def.name);
    println!("Seasonality: {}", def.seasonality);
    println!("{}", def.summary);
    println!(
        "Net Profit: {} | Total Person Power: {} hours | Profit per Person Hour: {} | Difficulty: {}",
        format::whole_dollars(detail.metric.net_profit),
        format::hours(detail.metric.total_person_power),
        format::dollars_and_cents(detail.metric.profit_per_person),
        format::difficulty(detail.metric.difficulty)
    );
    println!("Competitor and Cost Comparisons:");
    for line in def.comparables {
        println!("  - {line}");
    }
    println!("Profitability Inputs:");
    for field in &detail.fields {
        println!("  {:<52} {}", field.label, field.text);
    }
}

/// Filter from `RUST_LOG`-style directives; missing or invalid ones mean `info`.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn log_subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
}

fn main() -> Result<()> {
    // Logging setup
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    log_subscriber(log_filter(directives.as_deref())).init();

    let args = parse_args();
    if args.version {
        println!(
            "event-planner {} ({} {})",
            env!("CARGO_PKG_VERSION"),
            env!("PLANNER_GIT_SHA"),
            env!("PLANNER_BUILD_DATE")
        );
        return Ok(());
    }
    info!(scenario = ?args.scenario, event = ?args.event, sort = ?args.sort, "starting CLI");

    let state = build_state(&args)?;
    let dash = Dashboard::build(&state);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&dash)?);
    } else {
        print_dashboard(&dash);
    }
    Ok(())
}
