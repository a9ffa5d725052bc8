use serde::{Deserialize, Serialize};
use web_time::Duration;

const DEFAULT_AI_DELAY_MS: u64 = 500;
const DEFAULT_RESULT_DELAY_MS: u64 = 500;

/// Timing knobs for the event loop. Every field is optional when
/// deserialized; missing ones take the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Pause between the human's move and the computer's reply, so the
    /// human's flips stay visible first. Also delays the first render.
    pub ai_delay_ms: u64,
    /// Pause before announcing the result when the human's move ended the game.
    pub result_delay_ms: u64,
}

impl SessionConfig {
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }

    pub fn result_delay(&self) -> Duration {
        Duration::from_millis(self.result_delay_ms)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ai_delay_ms: DEFAULT_AI_DELAY_MS,
            result_delay_ms: DEFAULT_RESULT_DELAY_MS,
        }
    }
}
