// Welcome to
// __________         __    __  .__                               __
// \______   \_____ _/  |__/  |_|  |   ____   ______ ____ _____  |  | __ ____
//  |    |  _/\__  \\   __\   __\  | _/ __ \ /  ___//    \\__  \ |  |/ // __ \
//  |    |   \ / __ \|  |  |  | |  |_\  ___/ \___ \|   |  \/ __ \|    <\  ___/
//  |________/(______/__|  |__| |____/\_____>______>___|__(______/__|__\\_____>
//
// The bot walks to the closest food it can reach, using a bounded backtracking
// search that refuses moves into pockets too small to escape from.

use log::{error, info, warn};
use serde_json::{json, Value};
use std::time::Instant;

use crate::config::Config;
use crate::debug_logger::DebugLogger;
use crate::engine::{self, Outcome, TurnDecision};
use crate::error::MoveError;
use crate::types::{GameStartRequest, GameStartResponse, MoveRequest, MoveResponse};

/// Battlesnake Bot with OOP-style API
/// Holds only immutable configuration and the debug log handle; every turn is computed from scratch
pub struct Bot {
    config: Config,
    debug_logger: DebugLogger,
}

impl Bot {
    /// Creates a new Bot instance
    ///
    /// # Arguments
    /// * `config` - Static configuration that does not change during the bot's lifetime
    /// * `debug_logger` - Destination for per-turn decision logs (may be disabled)
    pub fn new(config: Config, debug_logger: DebugLogger) -> Self {
        Bot {
            config,
            debug_logger,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns bot metadata and appearance
    /// Corresponds to GET / endpoint
    pub fn info(&self) -> Value {
        info!("INFO");

        json!({
            "apiversion": "1",
            "author": self.config.appearance.author,
            "color": self.config.appearance.color,
            "head": self.config.appearance.head,
            "tail": self.config.appearance.tail,
        })
    }

    /// Called when a game starts
    /// Corresponds to POST /start endpoint
    pub fn start(&self, req: &GameStartRequest) -> GameStartResponse {
        info!(
            "GAME START {} ({}x{})",
            req.game_id, req.width, req.height
        );

        GameStartResponse {
            color: self.config.appearance.color.clone(),
            name: format!("{} ({}x{})", req.game_id, req.width, req.height),
            head_url: self.config.appearance.head_url.clone(),
            taunt: self.config.appearance.taunt.clone(),
        }
    }

    /// Called when a game ends
    /// Corresponds to POST /end endpoint
    pub fn end(&self, _req: &Value) {
        info!("GAME OVER");
    }

    /// Computes the next move
    /// Corresponds to POST /move endpoint
    ///
    /// The search is CPU-bound and synchronous, so it runs on tokio's blocking pool
    /// against owned copies of the snapshot and configuration.
    pub async fn get_move(&self, req: &MoveRequest) -> MoveResponse {
        let start_time = Instant::now();

        info!("Turn {}: Computing move", req.turn);

        let snapshot = req.snapshot.clone();
        let config = self.config.clone();
        let decision = match tokio::task::spawn_blocking(move || engine::decide(&snapshot, &config))
            .await
        {
            Ok(decision) => decision,
            Err(e) => {
                error!("Turn {}: search task failed: {}", req.turn, e);
                self.task_failure_decision(e.to_string())
            }
        };

        match &decision.outcome {
            Outcome::Planned { target, steps } => info!(
                "Turn {}: Chose {} (target: ({}, {}), steps: {}, time: {}ms)",
                req.turn,
                decision.direction.as_str(),
                target.x,
                target.y,
                steps,
                start_time.elapsed().as_millis()
            ),
            Outcome::Fallback { reason } => info!(
                "Turn {}: Chose {} as fallback ({}, time: {}ms)",
                req.turn,
                decision.direction.as_str(),
                reason,
                start_time.elapsed().as_millis()
            ),
        }

        self.debug_logger.log_move(
            req.turn,
            req.game_id.clone(),
            req.snapshot.clone(),
            decision.direction,
        );

        MoveResponse {
            direction: decision.direction,
            taunt: Some(req.snapshot.you.clone()),
        }
    }

    /// Decision for a turn whose search task never returned
    fn task_failure_decision(&self, reason: String) -> TurnDecision {
        engine::fallback(None, MoveError::SearchTaskFailed(reason), &self.config)
    }

    /// Response for a /move body that could not be decoded
    pub fn parse_failure(&self, reason: &str) -> MoveResponse {
        warn!("Could not decode move request: {}", reason);

        MoveResponse {
            direction: self.config.fallback.direction,
            taunt: Some(self.config.fallback.parse_error_taunt.clone()),
        }
    }
}
