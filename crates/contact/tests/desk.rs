use std::{sync::Arc, time::Duration};

use folio_contact::{ContactDesk, ContactForm, Error, Field, FormOptions, SUCCESS_TITLE};

mod helpers;

fn desk(relay: Arc<dyn folio_contact::Relay>, idle_after: Duration) -> ContactDesk {
    ContactDesk::new(relay, FormOptions::new("test-key"), idle_after)
}

#[tokio::test]
async fn test_each_visitor_gets_their_own_form() {
    let desk = desk(
        Arc::new(helpers::StaticRelay::new(200, Some("Thanks!"))),
        ContactDesk::DEFAULT_IDLE_AFTER,
    );

    let alice = desk.form("alice").await;
    alice.set_field(Field::Name, "Alice").await;

    let again = desk.form("alice").await;
    assert!(Arc::ptr_eq(&alice, &again));

    let bob = desk.form("bob").await;
    assert!(bob.snapshot().await.is_empty());
    assert_eq!(desk.visit_count().await, 2);

    assert!(desk.peek("carol").await.is_none());
    assert_eq!(desk.visit_count().await, 2);
}

#[tokio::test]
async fn test_submit_relays_and_presents() -> anyhow::Result<()> {
    let relay = Arc::new(helpers::StaticRelay::new(200, Some("Thanks!")));
    let desk = desk(relay.clone(), ContactDesk::DEFAULT_IDLE_AFTER);

    let feedback = desk.submit("alice", helpers::filled()).await?;

    assert_eq!(feedback.toast.title, SUCCESS_TITLE);
    assert_eq!(feedback.outcome.message(), "Thanks!");
    assert_eq!(relay.calls(), 1);

    let form = desk.peek("alice").await.expect("form kept");
    assert!(form.snapshot().await.is_empty());
    assert_eq!(
        form.status().current().await.map(|s| s.text),
        Some("Thanks!".to_owned())
    );

    Ok(())
}

#[tokio::test]
async fn test_visitors_submit_independently() -> anyhow::Result<()> {
    let relay = Arc::new(helpers::StaticRelay::new(200, Some("Thanks!")));
    let desk = desk(relay.clone(), ContactDesk::DEFAULT_IDLE_AFTER);

    let results = futures::future::join_all(
        ["alice", "bob", "carol"].map(|visitor| desk.submit(visitor, helpers::filled())),
    )
    .await;

    for result in results {
        assert!(result?.outcome.is_success());
    }
    assert_eq!(relay.calls(), 3);

    Ok(())
}

#[tokio::test]
async fn test_desk_refuses_submit_while_in_flight() -> anyhow::Result<()> {
    let relay = Arc::new(helpers::GatedRelay::default());
    let desk = Arc::new(desk(relay.clone(), ContactDesk::DEFAULT_IDLE_AFTER));

    let first = tokio::spawn({
        let desk = desk.clone();
        async move { desk.submit("alice", helpers::filled()).await }
    });

    let form = desk.form("alice").await;
    helpers::until(|| form.is_submitting()).await;

    let mut other = helpers::filled();
    other.message = "Second attempt".to_owned();
    let second = desk.submit("alice", other).await;
    assert!(matches!(second, Err(Error::SubmissionInProgress)));

    relay.open();
    assert!(first.await??.outcome.is_success());
    assert_eq!(relay.calls(), 1);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_idle_visits_are_dropped_when_a_new_visitor_arrives() {
    let desk = desk(
        Arc::new(helpers::StaticRelay::new(200, Some("Thanks!"))),
        Duration::from_secs(60),
    );

    desk.form("alice").await;
    tokio::time::sleep(Duration::from_secs(30)).await;
    desk.form("bob").await;
    assert_eq!(desk.visit_count().await, 2);

    tokio::time::sleep(Duration::from_secs(45)).await;
    desk.form("carol").await;

    assert!(desk.peek("alice").await.is_none());
    assert!(desk.peek("bob").await.is_some());
    assert_eq!(desk.visit_count().await, 2);
}

#[tokio::test(start_paused = true)]
async fn test_visit_cap_replaces_least_recently_seen() {
    let desk = desk(
        Arc::new(helpers::StaticRelay::new(200, Some("Thanks!"))),
        ContactDesk::DEFAULT_IDLE_AFTER,
    )
    .with_max_visits(2);

    desk.form("alice").await;
    tokio::time::sleep(Duration::from_secs(1)).await;
    desk.form("bob").await;
    tokio::time::sleep(Duration::from_secs(1)).await;
    desk.form("alice").await;

    desk.form("carol").await;

    assert_eq!(desk.visit_count().await, 2);
    assert!(desk.peek("bob").await.is_none());
    assert!(desk.peek("alice").await.is_some());
    assert!(desk.peek("carol").await.is_some());
}

#[tokio::test]
async fn test_visit_cap_spares_submitting_form() -> anyhow::Result<()> {
    let relay = Arc::new(helpers::GatedRelay::default());
    let desk = Arc::new(desk(relay.clone(), ContactDesk::DEFAULT_IDLE_AFTER).with_max_visits(1));

    let first = tokio::spawn({
        let desk = desk.clone();
        async move { desk.submit("alice", helpers::filled()).await }
    });

    let alice = desk.form("alice").await;
    helpers::until(|| alice.is_submitting()).await;

    desk.form("bob").await;
    assert!(desk.peek("alice").await.is_some());

    relay.open();
    assert!(first.await??.outcome.is_success());

    Ok(())
}

#[tokio::test]
async fn test_refused_submit_leaves_in_flight_values_alone() -> anyhow::Result<()> {
    let relay = Arc::new(helpers::GatedRelay::default());
    let form = Arc::new(ContactForm::new(FormOptions::new("test-key")));

    let first = tokio::spawn({
        let form = form.clone();
        let relay = relay.clone();
        async move { form.submit_with(helpers::filled(), relay.as_ref()).await }
    });
    helpers::until(|| form.is_submitting()).await;

    let mut other = helpers::filled();
    other.message = "Second attempt".to_owned();
    let second = form.submit_with(other, relay.as_ref()).await;

    assert!(matches!(second, Err(Error::SubmissionInProgress)));
    assert_eq!(form.snapshot().await, helpers::filled());

    relay.open();
    assert!(first.await??.outcome.is_success());
    assert!(form.snapshot().await.is_empty());

    Ok(())
}
