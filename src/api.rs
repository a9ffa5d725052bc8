//! JavaScript surface. The page renders whatever `takeEvents` hands back and
//! drives the clock by calling `tick` from a timer.

use serde_wasm_bindgen::{from_value, to_value};
use tracing::warn;
use wasm_bindgen::prelude::*;
use web_time::Instant;

use crate::config::SessionConfig;
use crate::session::{EventQueue, Session};
use crate::types::{Position, TurnPhase};

/// One game in the page.
///
/// The crate logs through `tracing` but installs no subscriber, so in the
/// browser those events are dropped. Diagnostics for the page come from the
/// `takeEvents` stream and the `bool` returned by `click` / `tick`.
#[wasm_bindgen]
pub struct OthelloSession {
    inner: Session<EventQueue>,
}

#[wasm_bindgen]
impl OthelloSession {
    /// `config` may be `undefined` or an object such as `{ ai_delay_ms: 300 }`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> OthelloSession {
        Self {
            inner: Session::new(parse_config(config), EventQueue::new(), Instant::now()),
        }
    }

    /// Human click on a cell. `false` when the click was ignored.
    pub fn click(&mut self, index: usize) -> bool {
        self.inner.submit(index, Instant::now())
    }

    /// Runs the deferred computer move or result once it is due.
    pub fn tick(&mut self) -> bool {
        self.inner.tick(Instant::now())
    }

    pub fn reset(&mut self) {
        self.inner.reset(Instant::now());
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(to_value(&self.inner.game().state())?)
    }

    #[wasm_bindgen(js_name = validMoves)]
    pub fn valid_moves(&self) -> Vec<u8> {
        self.inner
            .game()
            .valid_moves()
            .into_iter()
            .map(|i| i as u8)
            .collect()
    }

    #[wasm_bindgen(js_name = validPositions)]
    pub fn valid_positions(&self) -> Result<JsValue, JsValue> {
        let positions: Vec<Position> = self
            .inner
            .game()
            .valid_moves()
            .into_iter()
            .map(Position::from_index)
            .collect();
        Ok(to_value(&positions)?)
    }

    /// Drains `{ kind: "state" | "game_over", ... }` notifications in order.
    #[wasm_bindgen(js_name = takeEvents)]
    pub fn take_events(&mut self) -> Result<JsValue, JsValue> {
        Ok(to_value(&self.inner.presenter_mut().drain())?)
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.inner.game().phase() == TurnPhase::GameOver
    }

    pub fn result(&self) -> Result<JsValue, JsValue> {
        Ok(to_value(&self.inner.game().result())?)
    }
}

fn parse_config(value: JsValue) -> SessionConfig {
    if value.is_undefined() || value.is_null() {
        return SessionConfig::default();
    }
    from_value(value).unwrap_or_else(|err| {
        warn!(%err, "invalid session config, using defaults");
        SessionConfig::default()
    })
}
