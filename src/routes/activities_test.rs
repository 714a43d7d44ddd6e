use super::*;
use crate::state::test_helpers;

fn email(address: &str) -> Query<EmailQuery> {
    Query(EmailQuery { email: address.to_owned() })
}

#[test]
fn directory_error_to_response_maps_not_found() {
    let (status, body) = directory_error_to_response(DirectoryError::ActivityNotFound);
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.detail, "Activity not found");

    let (status, body) = directory_error_to_response(DirectoryError::ParticipantNotFound);
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.detail, "Participant not found");
}

#[test]
fn directory_error_to_response_maps_conflicts_to_bad_request() {
    let (status, body) = directory_error_to_response(DirectoryError::AlreadySignedUp);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.detail.contains("already signed up"));

    let (status, body) = directory_error_to_response(DirectoryError::ActivityFull);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.detail, "Activity is full");
}

#[tokio::test]
async fn list_returns_seeded_activities_with_structure() {
    let state = test_helpers::test_app_state();
    let Json(listing) = list_activities(State(state)).await;

    for name in ["Chess Club", "Programming Class", "Gym Class"] {
        assert!(listing.contains_key(name), "missing {name}");
    }

    let value = serde_json::to_value(&listing["Chess Club"]).unwrap();
    assert!(value.get("description").is_some());
    assert!(value.get("schedule").is_some());
    assert!(value.get("max_participants").is_some());
    assert!(value.get("participants").unwrap().is_array());
}

#[tokio::test]
async fn signup_returns_message_with_email_and_activity() {
    let state = test_helpers::test_app_state();
    let Json(response) = signup(
        State(state),
        Path("Chess Club".to_owned()),
        email("newstudent@example.com"),
    )
    .await
    .unwrap();

    assert!(response.message.contains("newstudent@example.com"));
    assert!(response.message.contains("Chess Club"));
}

#[tokio::test]
async fn duplicate_signup_returns_bad_request_detail() {
    let state = test_helpers::test_app_state();
    signup(
        State(state.clone()),
        Path("Chess Club".to_owned()),
        email("duplicate@example.com"),
    )
    .await
    .unwrap();

    let (status, Json(body)) = signup(
        State(state.clone()),
        Path("Chess Club".to_owned()),
        email("duplicate@example.com"),
    )
    .await
    .unwrap_err();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.detail.contains("already signed up"));

    let directory = state.directory.read().await;
    let count = directory["Chess Club"]
        .participants
        .iter()
        .filter(|p| *p == "duplicate@example.com")
        .count();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn signup_unknown_activity_returns_not_found() {
    let state = test_helpers::test_app_state();
    let (status, Json(body)) = signup(
        State(state),
        Path("NonExistent Activity".to_owned()),
        email("test@example.com"),
    )
    .await
    .unwrap_err();

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.detail, "Activity not found");
}

#[tokio::test]
async fn unregister_returns_message_and_removes_email() {
    let state = test_helpers::test_app_state();
    signup(
        State(state.clone()),
        Path("Chess Club".to_owned()),
        email("toremove@example.com"),
    )
    .await
    .unwrap();

    let Json(response) = unregister(
        State(state.clone()),
        Path("Chess Club".to_owned()),
        email("toremove@example.com"),
    )
    .await
    .unwrap();

    assert!(response.message.contains("toremove@example.com"));
    let directory = state.directory.read().await;
    assert!(
        !directory["Chess Club"]
            .participants
            .iter()
            .any(|p| p == "toremove@example.com")
    );
}

#[tokio::test]
async fn unregister_unknown_participant_returns_not_found() {
    let state = test_helpers::test_app_state();
    let (status, Json(body)) = unregister(
        State(state),
        Path("Chess Club".to_owned()),
        email("nonexistent@example.com"),
    )
    .await
    .unwrap_err();

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.detail, "Participant not found");
}

#[tokio::test]
async fn unregister_unknown_activity_returns_not_found() {
    let state = test_helpers::test_app_state();
    let (status, Json(body)) = unregister(
        State(state),
        Path("NonExistent Activity".to_owned()),
        email("test@example.com"),
    )
    .await
    .unwrap_err();

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.detail, "Activity not found");
}
