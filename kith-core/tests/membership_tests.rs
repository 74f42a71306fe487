//! Tests for joining, sessions, and the membership census.

use kith_core::{KithError, SocialNetwork};

#[test]
fn test_join_returns_a_handle_for_the_new_member() {
    let mut network = SocialNetwork::new();

    let handle = network.join("ana").expect("username should be free");

    assert_eq!(handle.username(), "ana");
    assert_eq!(network.member_count(), 1);
}

#[test]
fn test_join_rejects_empty_username() {
    let mut network = SocialNetwork::new();

    assert!(network.join("").is_none());
    assert!(network.is_empty());
}

#[test]
fn test_join_rejects_taken_username() {
    let mut network = SocialNetwork::new();
    let ana = network.join("ana").unwrap();
    let bea = network.join("bea").unwrap();

    // ana builds up state that a second "ana" must not clobber
    network.login(&ana);
    network.send_friendship_to("bea").unwrap();
    network.login(&bea);
    network.accept_friendship_from("ana").unwrap();

    assert!(network.join("ana").is_none());
    assert_eq!(network.member_count(), 2);
    assert!(network.account("ana").unwrap().has_friend("bea"));
}

#[test]
fn test_join_does_not_open_a_session() {
    let mut network = SocialNetwork::new();

    network.join("ana").unwrap();

    assert_eq!(network.current_session(), None);
}

#[test]
fn test_member_count_and_is_empty() {
    let mut network = SocialNetwork::new();
    assert!(network.is_empty());
    assert_eq!(network.member_count(), 0);

    network.join("ana").unwrap();
    network.join("bea").unwrap();

    assert!(!network.is_empty());
    assert_eq!(network.member_count(), 2);
}

#[test]
fn test_all_members_is_the_unfiltered_census() {
    let mut network = SocialNetwork::new();
    assert!(network.all_members().is_empty());

    network.join("ana").unwrap();
    network.join("bea").unwrap();
    network.join("carl").unwrap();

    let census = network.all_members();
    assert_eq!(census.len(), 3);
    assert!(census.contains("ana"));
    assert!(census.contains("bea"));
    assert!(census.contains("carl"));
}

#[test]
fn test_credential_for_known_member() {
    let mut network = SocialNetwork::new();
    network.join("ana").unwrap();

    let handle = network.credential_for("ana").expect("ana is a member");

    assert_eq!(handle.username(), "ana");
}

#[test]
fn test_credential_for_unknown_member_is_refused() {
    let network = SocialNetwork::new();

    assert!(network.credential_for("ana").is_none());
}

#[test]
fn test_login_opens_a_session() {
    let mut network = SocialNetwork::new();
    let ana = network.join("ana").unwrap();

    let returned = network.login(&ana);

    assert_eq!(network.current_session(), Some("ana"));
    assert_eq!(returned, ana);
}

#[test]
fn test_login_replaces_the_previous_session() {
    let mut network = SocialNetwork::new();
    let ana = network.join("ana").unwrap();
    let bea = network.join("bea").unwrap();

    network.login(&ana);
    network.login(&bea);

    assert_eq!(network.current_session(), Some("bea"));
}

#[test]
fn test_logout_closes_the_session() {
    let mut network = SocialNetwork::new();
    let ana = network.join("ana").unwrap();

    network.login(&ana);
    network.logout();

    assert_eq!(network.current_session(), None);
    assert!(matches!(network.list_members(), Err(KithError::NotLoggedIn)));
}

#[test]
fn test_logout_without_session_is_harmless() {
    let mut network = SocialNetwork::new();

    network.logout();

    assert_eq!(network.current_session(), None);
}

#[test]
fn test_list_members_includes_the_session_account() {
    let mut network = SocialNetwork::new();
    let ana = network.join("ana").unwrap();
    network.join("bea").unwrap();

    network.login(&ana);
    let visible = network.list_members().unwrap();

    assert_eq!(visible.len(), 2);
    assert!(visible.contains("ana"));
    assert!(visible.contains("bea"));
}

#[test]
fn test_has_member_sees_the_whole_registry() {
    let mut network = SocialNetwork::new();
    let ana = network.join("ana").unwrap();
    network.join("bea").unwrap();

    network.login(&ana);

    assert!(network.has_member("bea").unwrap());
    assert!(network.has_member("ana").unwrap());
    assert!(!network.has_member("carl").unwrap());
}

#[test]
fn test_every_session_operation_fails_without_login() {
    let mut network = SocialNetwork::new();
    network.join("ana").unwrap();

    assert!(matches!(network.list_members(), Err(KithError::NotLoggedIn)));
    assert!(matches!(network.has_member("ana"), Err(KithError::NotLoggedIn)));
    assert!(matches!(
        network.send_friendship_to("ana"),
        Err(KithError::NotLoggedIn)
    ));
    assert!(matches!(
        network.accept_friendship_from("ana"),
        Err(KithError::NotLoggedIn)
    ));
    assert!(matches!(
        network.reject_friendship_from("ana"),
        Err(KithError::NotLoggedIn)
    ));
    assert!(matches!(
        network.accept_all_friendships(),
        Err(KithError::NotLoggedIn)
    ));
    assert!(matches!(
        network.reject_all_friendships(),
        Err(KithError::NotLoggedIn)
    ));
    assert!(matches!(
        network.send_friendship_cancellation_to("ana"),
        Err(KithError::NotLoggedIn)
    ));
    assert!(matches!(
        network.auto_accept_friendships(),
        Err(KithError::NotLoggedIn)
    ));
    assert!(matches!(
        network.cancel_auto_accept_friendships(),
        Err(KithError::NotLoggedIn)
    ));
    assert!(matches!(network.block("ana"), Err(KithError::NotLoggedIn)));
    assert!(matches!(network.unblock("ana"), Err(KithError::NotLoggedIn)));
    assert!(matches!(
        network.recommend_friends(),
        Err(KithError::NotLoggedIn)
    ));
    assert!(matches!(network.leave(), Err(KithError::NotLoggedIn)));
}

#[test]
fn test_not_logged_in_error_message() {
    let error = KithError::NotLoggedIn;

    assert_eq!(error.to_string(), "no user is logged in");
}
