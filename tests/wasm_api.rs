#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Object, Reflect};
use othello::api::OthelloSession;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn zero_delay_config() -> JsValue {
    let config = Object::new();
    Reflect::set(&config, &"ai_delay_ms".into(), &0.into()).unwrap();
    Reflect::set(&config, &"result_delay_ms".into(), &0.into()).unwrap();
    config.into()
}

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &name.into()).unwrap()
}

#[wasm_bindgen_test]
fn wasm_ready_reports_true() {
    assert!(othello::wasm_ready());
}

#[wasm_bindgen_test]
fn state_exposes_board_and_turn() {
    let session = OthelloSession::new(JsValue::UNDEFINED);
    let state = session.state().unwrap();

    let board = Array::from(&field(&state, "board"));
    assert_eq!(board.length(), 64);
    assert_eq!(field(&state, "current_player").as_string().as_deref(), Some("black"));
    assert_eq!(session.valid_moves(), vec![20, 29, 34, 43]);
}

#[wasm_bindgen_test]
fn click_is_ignored_unless_legal() {
    let mut session = OthelloSession::new(zero_delay_config());

    assert!(!session.click(0));
    assert!(!session.click(99));
    assert!(session.click(20));
    assert!(!session.click(29));
}

#[wasm_bindgen_test]
fn computer_answers_on_tick() {
    let mut session = OthelloSession::new(zero_delay_config());
    session.tick();
    session.take_events().unwrap();

    assert!(session.click(20));
    assert!(session.tick());

    let events = Array::from(&session.take_events().unwrap());
    assert_eq!(events.length(), 2);
    assert_eq!(field(&events.get(0), "kind").as_string().as_deref(), Some("state"));
    assert_eq!(
        field(&events.get(1), "current_player").as_string().as_deref(),
        Some("black")
    );
    assert!(!session.is_game_over());
    assert!(session.result().unwrap().is_undefined());
}

#[wasm_bindgen_test]
fn malformed_config_falls_back_to_defaults() {
    let mut session = OthelloSession::new(JsValue::from_str("fast please"));

    // default delay keeps the first render pending
    assert!(!session.tick());
}
