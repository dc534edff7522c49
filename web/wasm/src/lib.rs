use bjcount::{
    Complexity, CountingSystem, Rank, Recommendation, RuleSource, Session, TrainerOptions,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmSession {
    session: Session,
}

#[wasm_bindgen]
impl WasmSession {
    #[wasm_bindgen(constructor)]
    pub fn new(decks: u8, system: &str) -> Result<WasmSession, JsValue> {
        let system = CountingSystem::select(system).system;
        let options = TrainerOptions::default()
            .with_decks(decks)
            .with_system(system);
        let session = Session::new(options).map_err(js_err)?;
        Ok(Self { session })
    }

    pub fn observe(&mut self, rank: &str) -> Result<i32, JsValue> {
        let rank = parse_rank(rank)?;
        self.session.observe(rank).map_err(js_err)
    }

    pub fn return_card(&mut self, rank: &str) -> Result<i32, JsValue> {
        let rank = parse_rank(rank)?;
        self.session.return_card(rank).map_err(js_err)
    }

    /// Returns `true` if the name was not recognised and Hi-Lo is used.
    pub fn switch_system(&mut self, name: &str) -> bool {
        let selection = CountingSystem::select(name);
        self.session.switch_system(selection.system);
        selection.fell_back
    }

    pub fn reset_shoe(&mut self) {
        self.session.reset_shoe();
    }

    pub fn recommend(&self, player: Vec<String>, dealer_up: &str) -> Result<JsValue, JsValue> {
        let cards = player
            .iter()
            .map(|label| parse_rank(label))
            .collect::<Result<Vec<_>, _>>()?;
        let up = parse_rank(dealer_up)?;
        let advice = self.session.recommend(&cards, up).map_err(js_err)?;
        to_js_value(&JsAdvice::from(advice))
    }

    pub fn take_insurance(&self, dealer_up: &str) -> Result<bool, JsValue> {
        let up = parse_rank(dealer_up)?;
        self.session.take_insurance(up).map_err(js_err)
    }

    pub fn betting_units(&self) -> u32 {
        self.session.betting_units()
    }

    pub fn optimal_bet(&self) -> u32 {
        self.session.optimal_bet()
    }

    pub fn suggested_wager(&self, bankroll: u32) -> u32 {
        self.session.suggested_wager(bankroll)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let session = &self.session;
        let shoe = session
            .shoe()
            .iter()
            .map(|(rank, remaining)| JsRankCount {
                rank: rank.label(),
                remaining,
            })
            .collect();

        let snapshot = Snapshot {
            system: session.system().name(),
            running_count: session.running_count(),
            true_count: session.true_count(),
            remaining_decks: session.remaining_decks(),
            penetration: session.shoe().penetration(),
            player_edge: session.player_edge(),
            needs_reshuffle: session.needs_reshuffle(),
            shoe,
        };

        to_js_value(&snapshot)
    }
}

/// Names, tags and descriptions of every counting system.
#[wasm_bindgen]
pub fn systems() -> Result<JsValue, JsValue> {
    let systems: Vec<JsSystem> = CountingSystem::ALL.iter().copied().map(JsSystem::from).collect();
    to_js_value(&systems)
}

#[derive(Serialize)]
struct Snapshot {
    system: &'static str,
    running_count: i32,
    true_count: f64,
    remaining_decks: f64,
    penetration: f64,
    player_edge: f64,
    needs_reshuffle: bool,
    shoe: Vec<JsRankCount>,
}

#[derive(Serialize)]
struct JsRankCount {
    rank: &'static str,
    remaining: u16,
}

#[derive(Serialize)]
struct JsAdvice {
    code: &'static str,
    description: &'static str,
    source: &'static str,
    threshold: Option<f64>,
}

impl From<Recommendation> for JsAdvice {
    fn from(advice: Recommendation) -> Self {
        let threshold = match advice.source {
            RuleSource::Deviation { threshold } => Some(threshold),
            _ => None,
        };

        Self {
            code: advice.action.code(),
            description: advice.action.description(),
            source: source_to_str(advice.source),
            threshold,
        }
    }
}

#[derive(Serialize)]
struct JsSystem {
    name: &'static str,
    description: &'static str,
    complexity: &'static str,
    balanced: bool,
    tags: Vec<i32>,
}

impl From<CountingSystem> for JsSystem {
    fn from(system: CountingSystem) -> Self {
        let info = system.info();
        Self {
            name: system.name(),
            description: info.description,
            complexity: complexity_to_str(info.complexity),
            balanced: system.is_balanced(),
            tags: Rank::ALL.iter().map(|&rank| system.point_value(rank)).collect(),
        }
    }
}

fn parse_rank(label: &str) -> Result<Rank, JsValue> {
    label.parse().map_err(js_err)
}

fn source_to_str(source: RuleSource) -> &'static str {
    match source {
        RuleSource::Deviation { .. } => "Deviation",
        RuleSource::PairTable => "PairTable",
        RuleSource::SoftTable => "SoftTable",
        RuleSource::HardTable => "HardTable",
        RuleSource::Fallback => "Fallback",
    }
}

fn complexity_to_str(complexity: Complexity) -> &'static str {
    match complexity {
        Complexity::Basic => "Basic",
        Complexity::Intermediate => "Intermediate",
        Complexity::Advanced => "Advanced",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
