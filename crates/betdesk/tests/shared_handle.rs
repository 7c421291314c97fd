//! Integration tests for `SharedBetdesk`, the task-safe handle.

use betdesk::prelude::*;
use futures_util::future::join_all;

// =========================================================================
// Helpers
// =========================================================================

async fn shared_with_users(names: &[&str]) -> SharedBetdesk {
    let desk = Betdesk::builder()
        .build_shared()
        .expect("empty desk should build");
    for name in names {
        desk.registration(name, "pw", Role::RegularUser)
            .await
            .unwrap();
    }
    desk
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_shared_operations_mirror_controller() {
    let desk = shared_with_users(&["bob"]).await;

    desk.log_in("bob", "pw").await.unwrap();
    assert_eq!(desk.state().await, SessionState::Busy);

    desk.place_bet(Bet::new("X-Y 1:0")).await.unwrap();
    assert_eq!(
        desk.place_bet(Bet::new("X-Y 1:0")).await,
        Err(BetdeskError::BetAlreadyPlaced("X-Y 1:0".into()))
    );
    assert_eq!(desk.print_all_bets().await.unwrap().len(), 1);
    assert_eq!(desk.show_users().await, Err(BetdeskError::PermissionFailed));

    desk.log_out().await.unwrap();
    assert_eq!(desk.state().await, SessionState::Free);
}

#[tokio::test]
async fn test_clones_share_one_session() {
    let desk = shared_with_users(&["bob"]).await;
    let other = desk.clone();

    desk.log_in("bob", "pw").await.unwrap();

    assert_eq!(other.current_user().await.unwrap().username, "bob");
    assert_eq!(
        other.registration("carol", "pw", Role::RegularUser).await,
        Err(BetdeskError::SystemBusy)
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_logins_exactly_one_wins() {
    let names = ["u0", "u1", "u2", "u3", "u4", "u5", "u6", "u7"];
    let desk = shared_with_users(&names).await;

    let attempts = names.iter().map(|name| {
        let desk = desk.clone();
        let name = name.to_string();
        tokio::spawn(async move { desk.log_in(&name, "pw").await })
    });
    let results: Vec<_> = join_all(attempts)
        .await
        .into_iter()
        .map(|joined| joined.expect("task should not panic"))
        .collect();

    let winners = results.iter().filter(|r| r.is_ok()).count();
    let busy = results
        .iter()
        .filter(|r| matches!(r, Err(BetdeskError::SystemBusy)))
        .count();
    assert_eq!(winners, 1);
    assert_eq!(busy, names.len() - 1);
    assert_eq!(desk.state().await, SessionState::Busy);
}

#[tokio::test]
async fn test_with_controller_runs_sequence_atomically() {
    let desk = shared_with_users(&["bob"]).await;

    let bets = desk
        .with_controller(|ctl| -> BetdeskResult<usize> {
            ctl.log_in("bob", "pw")?;
            ctl.place_bet(Bet::new("A"))?;
            ctl.place_bet(Bet::new("B"))?;
            let count = ctl.print_all_bets()?.len();
            ctl.log_out()?;
            Ok(count)
        })
        .await
        .unwrap();

    assert_eq!(bets, 2);
    assert_eq!(desk.state().await, SessionState::Free);
}

#[tokio::test]
async fn test_admin_bans_through_shared_handle() {
    let desk = shared_with_users(&["bob"]).await;
    desk.registration("alice", "pw", Role::Admin).await.unwrap();

    desk.log_in("alice", "pw").await.unwrap();
    desk.ban_user("bob").await.unwrap();
    desk.log_out().await.unwrap();

    assert_eq!(
        desk.log_in("bob", "pw").await,
        Err(BetdeskError::UserInBlacklist("bob".into()))
    );
}
