// HTTP handler bindings for Battlesnake API endpoints
//
// This module provides thin wrapper functions that bind Rocket HTTP routes
// to the Bot's core logic methods. Handlers are responsible for:
// - Deserializing incoming JSON requests
// - Extracting Bot instance from Rocket's managed state
// - Delegating to Bot methods
// - Serializing responses

use rocket::fairing::AdHoc;
use rocket::http::Status;
use rocket::serde::json::{self, Json};
use rocket::{get, post, routes, Build, Rocket};
use serde_json::Value;

use crate::bot::Bot;
use crate::types::{GameStartRequest, GameStartResponse, MoveRequest, MoveResponse};

/// GET / endpoint
/// Returns bot metadata and appearance configuration
#[get("/")]
pub fn index(bot: &rocket::State<Bot>) -> Json<Value> {
    Json(bot.info())
}

/// POST /start endpoint
/// Called when a game starts; answers with name, color and taunt
#[post("/start", format = "json", data = "<start_req>")]
pub fn start(bot: &rocket::State<Bot>, start_req: Json<GameStartRequest>) -> Json<GameStartResponse> {
    Json(bot.start(&start_req))
}

/// POST /move endpoint
/// Called each turn to compute and return the next move.
/// A body that fails to decode still gets the fallback move, never an error status.
#[post("/move", format = "json", data = "<move_req>")]
pub async fn get_move(
    bot: &rocket::State<Bot>,
    move_req: Result<Json<MoveRequest>, json::Error<'_>>,
) -> Json<MoveResponse> {
    let response = match move_req {
        Ok(req) => bot.get_move(&req).await,
        Err(e) => bot.parse_failure(&e.to_string()),
    };

    Json(response)
}

/// POST /end endpoint
/// Called when a game ends - allows cleanup and logging
#[post("/end", format = "json", data = "<end_req>")]
pub fn end(bot: &rocket::State<Bot>, end_req: Json<Value>) -> Status {
    bot.end(&end_req);

    Status::Ok
}

/// Assembles the Rocket instance with every route mounted and the bot as managed state
pub fn build_rocket(bot: Bot) -> Rocket<Build> {
    rocket::build()
        .manage(bot)
        .attach(AdHoc::on_response("Server ID Middleware", |_, res| {
            Box::pin(async move {
                res.set_raw_header("Server", "battlesnake/pathfinder-snake");
            })
        }))
        .mount("/", routes![index, start, get_move, end])
}
