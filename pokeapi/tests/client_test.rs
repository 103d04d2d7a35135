//! Integration tests for `PokeApiClient` using wiremock.
//!
//! These tests run the client against a local mock server to validate the
//! request shapes, payload decoding, and error mapping end to end.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dexter_pokeapi::{PokeApiClient, PokeApiError};

async fn setup() -> (MockServer, PokeApiClient) {
    let server = MockServer::start().await;
    let client = PokeApiClient::with_base_url(server.uri());
    (server, client)
}

fn pikachu_body() -> serde_json::Value {
    json!({
        "id": 25,
        "name": "pikachu",
        "base_experience": 112,
        "height": 4,
        "weight": 60,
        "is_default": true,
        "order": 35,
        "sprites": {
            "front_default": "https://raw.example.test/sprites/25.png",
            "front_shiny": "https://raw.example.test/sprites/shiny/25.png",
            "back_default": null
        },
        "types": [
            { "slot": 1, "type": { "name": "electric", "url": "https://pokeapi.test/type/13/" } }
        ],
        "abilities": [
            {
                "ability": { "name": "static", "url": "https://pokeapi.test/ability/9/" },
                "is_hidden": false,
                "slot": 1
            },
            {
                "ability": { "name": "lightning-rod", "url": "https://pokeapi.test/ability/31/" },
                "is_hidden": true,
                "slot": 3
            }
        ],
        "stats": [
            { "base_stat": 35, "effort": 0, "stat": { "name": "hp", "url": "https://pokeapi.test/stat/1/" } },
            { "base_stat": 55, "effort": 0, "stat": { "name": "attack", "url": "https://pokeapi.test/stat/2/" } },
            { "base_stat": 90, "effort": 2, "stat": { "name": "speed", "url": "https://pokeapi.test/stat/6/" } }
        ]
    })
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_pokemon_returns_entries() {
    let (server, client) = setup().await;

    let body = json!({
        "count": 1302,
        "next": "https://pokeapi.test/api/v2/pokemon?offset=20&limit=20",
        "previous": null,
        "results": [
            { "name": "bulbasaur", "url": "https://pokeapi.test/api/v2/pokemon/1/" },
            { "name": "charmander", "url": "https://pokeapi.test/api/v2/pokemon/4/" },
            { "name": "squirtle", "url": "https://pokeapi.test/api/v2/pokemon/7/" },
        ]
    });

    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let page = client.list_pokemon(20).await.unwrap();

    assert_eq!(page.count, 1302);
    assert!(page.next.is_some());
    assert_eq!(page.previous, None);
    assert_eq!(page.results.len(), 3);
    assert_eq!(page.results[0].name, "bulbasaur");
    assert_eq!(page.results[0].url, "https://pokeapi.test/api/v2/pokemon/1/");
    assert_eq!(page.results[2].name, "squirtle");
}

#[tokio::test]
async fn test_list_pokemon_empty_results() {
    let (server, client) = setup().await;

    let body = json!({
        "count": 0,
        "next": null,
        "previous": null,
        "results": []
    });

    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let page = client.list_pokemon(20).await.unwrap();

    assert_eq!(page.count, 0);
    assert!(page.results.is_empty());
}

#[tokio::test]
async fn test_list_envelope_tolerates_missing_cursors() {
    let (server, client) = setup().await;

    // Some deployments omit the paging cursors entirely.
    let body = json!({
        "results": [
            { "name": "ditto", "url": "https://pokeapi.test/api/v2/pokemon/132/" }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let page = client.list_pokemon(5).await.unwrap();

    assert_eq!(page.count, 0);
    assert_eq!(page.next, None);
    assert_eq!(page.previous, None);
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].name, "ditto");
}

#[tokio::test]
async fn test_get_pokemon_decodes_full_record() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/pokemon/pikachu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pikachu_body()))
        .mount(&server)
        .await;

    let pokemon = client.get_pokemon("pikachu").await.unwrap();

    assert_eq!(pokemon.id, 25);
    assert_eq!(pokemon.name, "pikachu");
    assert_eq!(pokemon.height, 4);
    assert_eq!(pokemon.weight, 60);
    assert_eq!(
        pokemon.sprites.front_default.as_deref(),
        Some("https://raw.example.test/sprites/25.png")
    );
    assert_eq!(pokemon.type_names().collect::<Vec<_>>(), vec!["electric"]);
    assert_eq!(
        pokemon.ability_names().collect::<Vec<_>>(),
        vec!["static", "lightning-rod"]
    );
    assert_eq!(pokemon.base_stat("hp"), Some(35));
    assert_eq!(pokemon.base_stat("attack"), Some(55));
    assert_eq!(pokemon.base_stat("speed"), Some(90));
}

#[tokio::test]
async fn test_get_pokemon_by_dex_number() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/pokemon/25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pikachu_body()))
        .mount(&server)
        .await;

    let pokemon = client.get_pokemon("25").await.unwrap();

    assert_eq!(pokemon.name, "pikachu");
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_unknown_name_is_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/pokemon/missingno"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let result = client.get_pokemon("missingno").await;

    match result {
        Err(PokeApiError::NotFound(name)) => {
            assert_eq!(name, "missingno");
        }
        other => panic!("expected NotFound, got: {other:?}"),
    }
}

#[test]
fn test_not_found_message_names_the_pokemon() {
    let error = PokeApiError::NotFound("missingno".to_string());
    assert_eq!(error.to_string(), "No pokemon found with name: missingno");
}

#[tokio::test]
async fn test_server_error_maps_status_and_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream database offline"))
        .mount(&server)
        .await;

    let result = client.list_pokemon(20).await;

    match result {
        Err(PokeApiError::Api {
            status,
            ref message,
        }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream database offline");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_payload_is_parse_error() {
    let (server, client) = setup().await;

    // A 200 whose body does not match the expected envelope shape.
    let body = json!({ "entries": ["bulbasaur"] });

    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let result = client.list_pokemon(20).await;

    assert!(
        matches!(result, Err(PokeApiError::ResponseParseFailed(_))),
        "expected ResponseParseFailed, got: {result:?}"
    );
}

#[tokio::test]
async fn test_unreachable_server_is_request_failed() {
    // Dropping a wiremock `MockServer` returns it to a pool with its listener
    // still open, so derive the unreachable address from a freed socket instead.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = PokeApiClient::with_base_url(uri);
    let result = client.get_pokemon("pikachu").await;

    assert!(
        matches!(result, Err(PokeApiError::RequestFailed(_))),
        "expected RequestFailed, got: {result:?}"
    );
}
