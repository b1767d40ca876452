//! Unit tests for storage functionality

use super::*;
use crate::RankingsError;

fn create_test_state() -> UserState<SqliteStore> {
    // In-memory database for testing
    UserState::new(SqliteStore::open_in_memory().unwrap())
}

fn create_test_state_with_team() -> UserState<SqliteStore> {
    let mut state = create_test_state();
    state.create_team("Sunday Squad").unwrap();
    state
}

#[test]
fn test_store_creation() {
    let _state = create_test_state();
    // Should not panic - schema creation successful
}

#[test]
fn test_sqlite_get_missing_key() {
    let store = SqliteStore::open_in_memory().unwrap();
    assert!(store.get("nothing").unwrap().is_none());
    assert_eq!(store.get_or("nothing", "fallback").unwrap(), "fallback");
}

#[test]
fn test_sqlite_set_overwrites() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.set("k", "first").unwrap();
    store.set("k", "second").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));

    let count: i64 = store
        .conn
        .query_row("SELECT COUNT(*) FROM kv", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_memory_store_round_trip() {
    let mut store = MemoryStore::new();
    assert!(store.get(INPUT_KEY).unwrap().is_none());
    store.set(INPUT_KEY, "1 Josh Allen QB1").unwrap();
    assert_eq!(store.get_or(INPUT_KEY, "").unwrap(), "1 Josh Allen QB1");
}

#[test]
fn test_input_defaults_to_empty() {
    let state = create_test_state();
    assert_eq!(state.load_input().unwrap(), "");
}

#[test]
fn test_save_and_load_input() {
    let mut state = create_test_state();
    let text = "1 Josh Allen BUF QB1\n2 Bijan Robinson RB1\n";
    state.save_input(text).unwrap();
    assert_eq!(state.load_input().unwrap(), text);
}

#[test]
fn test_toggle_favorite_adds_then_removes() {
    let mut state = create_test_state();

    assert!(state.toggle_favorite("Josh Allen").unwrap());
    assert!(state.is_favorite("Josh Allen").unwrap());

    assert!(!state.toggle_favorite("Josh Allen").unwrap());
    assert!(!state.is_favorite("Josh Allen").unwrap());
    assert!(state.favorites().unwrap().is_empty());
}

#[test]
fn test_favorites_keep_insertion_order() {
    let mut state = create_test_state();
    state.toggle_favorite("Tyreek Hill").unwrap();
    state.toggle_favorite("Josh Allen").unwrap();
    state.toggle_favorite("CeeDee Lamb").unwrap();
    state.toggle_favorite("Josh Allen").unwrap();

    assert_eq!(
        state.favorites().unwrap(),
        vec!["Tyreek Hill".to_string(), "CeeDee Lamb".to_string()]
    );
}

#[test]
fn test_corrupt_favorites_surface_json_error() {
    let mut store = MemoryStore::new();
    store.set(FAVORITES_KEY, "not json").unwrap();
    let state = UserState::new(store);

    match state.favorites() {
        Err(RankingsError::Json(_)) => (),
        other => panic!("Expected Json error, got {:?}", other),
    }
}

#[test]
fn test_create_team_trims_name() {
    let mut state = create_test_state();
    let name = state.create_team("  Bench Mob  ").unwrap();
    assert_eq!(name, "Bench Mob");
    assert!(state.teams().unwrap().contains_key("Bench Mob"));
}

#[test]
fn test_create_team_rejects_empty_and_duplicate() {
    let mut state = create_test_state_with_team();

    match state.create_team("   ") {
        Err(RankingsError::EmptyTeamName) => (),
        other => panic!("Expected EmptyTeamName, got {:?}", other),
    }
    match state.create_team("Sunday Squad") {
        Err(RankingsError::TeamExists { name }) => assert_eq!(name, "Sunday Squad"),
        other => panic!("Expected TeamExists, got {:?}", other),
    }
}

#[test]
fn test_toggle_team_player() {
    let mut state = create_test_state_with_team();

    assert!(state.toggle_team_player("Sunday Squad", "Josh Allen").unwrap());
    assert!(state.toggle_team_player("Sunday Squad", "Breece Hall").unwrap());
    assert_eq!(
        state.teams().unwrap()["Sunday Squad"],
        vec!["Josh Allen".to_string(), "Breece Hall".to_string()]
    );

    assert!(!state.toggle_team_player("Sunday Squad", "Josh Allen").unwrap());
    assert_eq!(
        state.teams().unwrap()["Sunday Squad"],
        vec!["Breece Hall".to_string()]
    );
}

#[test]
fn test_toggle_player_on_missing_team() {
    let mut state = create_test_state();
    match state.toggle_team_player("Ghosts", "Josh Allen") {
        Err(RankingsError::TeamNotFound { name }) => assert_eq!(name, "Ghosts"),
        other => panic!("Expected TeamNotFound, got {:?}", other),
    }
}

#[test]
fn test_active_team_selection() {
    let mut state = create_test_state_with_team();
    assert!(state.active_team().unwrap().is_none());
    assert!(state.active_team_players().unwrap().is_empty());

    state.toggle_team_player("Sunday Squad", "Josh Allen").unwrap();
    state.set_active_team(Some("Sunday Squad")).unwrap();
    assert_eq!(state.active_team().unwrap().as_deref(), Some("Sunday Squad"));
    assert_eq!(
        state.active_team_players().unwrap(),
        vec!["Josh Allen".to_string()]
    );

    state.set_active_team(None).unwrap();
    assert!(state.active_team().unwrap().is_none());
}

#[test]
fn test_select_missing_team_fails() {
    let mut state = create_test_state();
    assert!(matches!(
        state.set_active_team(Some("Ghosts")),
        Err(RankingsError::TeamNotFound { .. })
    ));
}

#[test]
fn test_delete_active_team_clears_selection() {
    let mut state = create_test_state_with_team();
    state.create_team("Other").unwrap();
    state.set_active_team(Some("Sunday Squad")).unwrap();

    state.delete_team("Other").unwrap();
    assert_eq!(state.active_team().unwrap().as_deref(), Some("Sunday Squad"));

    state.delete_team("Sunday Squad").unwrap();
    assert!(state.active_team().unwrap().is_none());
    assert!(state.teams().unwrap().is_empty());
}

#[test]
fn test_delete_missing_team() {
    let mut state = create_test_state();
    assert!(matches!(
        state.delete_team("Ghosts"),
        Err(RankingsError::TeamNotFound { .. })
    ));
}
