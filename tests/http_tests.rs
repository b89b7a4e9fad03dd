// HTTP-level tests for the Rocket routes
//
// Uses Rocket's local blocking client, so no port is bound.

use rocket::http::{ContentType, Status};
use rocket::local::blocking::Client;
use serde_json::{json, Value};

use pathfinder_snake::bot::Bot;
use pathfinder_snake::config::Config;
use pathfinder_snake::debug_logger::DebugLogger;
use pathfinder_snake::handler;
use pathfinder_snake::types::{Direction, GameStartResponse, MoveResponse};

fn client() -> Client {
    let bot = Bot::new(Config::default_hardcoded(), DebugLogger::disabled());
    Client::tracked(handler::build_rocket(bot)).expect("valid rocket instance")
}

fn move_body() -> Value {
    json!({
        "you": "test-id-1",
        "game_id": "test-game-id",
        "turn": 0,
        "width": 10,
        "height": 10,
        "food": [[0, 0], [0, 1]],
        "snakes": [
            {
                "id": "test-id-1",
                "name": "test-name-1",
                "taunt": "",
                "health_points": 100,
                "coords": [[0, 9], [0, 8]]
            },
            {
                "id": "test-id-2",
                "name": "test-name-2",
                "taunt": "",
                "health_points": 100,
                "coords": [[2, 9], [2, 8]]
            }
        ]
    })
}

#[test]
fn test_move_endpoint_returns_planned_move() {
    let client = client();
    let response = client
        .post("/move")
        .header(ContentType::JSON)
        .body(move_body().to_string())
        .dispatch();

    assert_eq!(response.status(), Status::Ok);
    let body: MoveResponse = response.into_json().expect("json body");
    assert_eq!(body.direction, Direction::Right);
    assert_eq!(body.taunt.as_deref(), Some("test-id-1"));
}

#[test]
fn test_move_endpoint_answers_malformed_body() {
    let client = client();
    let mut body = move_body();
    body["food"] = json!([[0, 0, 0]]);

    let response = client
        .post("/move")
        .header(ContentType::JSON)
        .body(body.to_string())
        .dispatch();

    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().expect("json body");
    assert_eq!(body, json!({"move": "up", "taunt": "can't parse this!"}));
}

#[test]
fn test_start_endpoint() {
    let client = client();
    let response = client
        .post("/start")
        .header(ContentType::JSON)
        .body(json!({"game_id": "g-1", "width": 10, "height": 12}).to_string())
        .dispatch();

    assert_eq!(response.status(), Status::Ok);
    let body: GameStartResponse = response.into_json().expect("json body");
    assert_eq!(body.name, "g-1 (10x12)");
    assert_eq!(body.taunt.as_deref(), Some("battlesnake-go!"));
}

#[test]
fn test_index_and_end_endpoints() {
    let client = client();

    let response = client.get("/").dispatch();
    assert_eq!(response.status(), Status::Ok);
    let info: Value = response.into_json().expect("json body");
    assert_eq!(info["apiversion"], "1");

    let response = client
        .post("/end")
        .header(ContentType::JSON)
        .body("{}")
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
}
