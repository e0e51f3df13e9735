//! Serialization round-trips for persisted view state
//!
//! Applications snapshot their state containers; the reconciliation state
//! must survive that intact, including the retained-history stamps.

use tidemark_core::{Remote, RequestState, Stamped};

type State = RequestState<u64, String, String>;

#[test]
fn pending_state_round_trips_with_its_history() -> Result<(), serde_json::Error> {
    let state = State::Pending {
        tracker: 10,
        last_failure: Some(Stamped::new(7, "boom".to_owned())),
        last_success: Some(Stamped::new(8, "x".to_owned())),
    };
    let restored: State = serde_json::from_str(&serde_json::to_string(&state)?)?;
    assert_eq!(restored, state);
    Ok(())
}

#[test]
fn never_started_adapter_round_trips() -> Result<(), serde_json::Error> {
    let state: Remote<u64, String, String> = Remote::not_requested();
    let restored: Remote<u64, String, String> =
        serde_json::from_str(&serde_json::to_string(&state)?)?;
    assert_eq!(restored, state);
    Ok(())
}
