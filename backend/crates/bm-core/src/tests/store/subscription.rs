use crate::{Bookmark, ChangeEvent, ChangeFilter, CoreError, FeedItem, Subscription};

use tokio::sync::broadcast;

fn bookmark(user_id: &str) -> Bookmark {
    Bookmark::provisional(user_id, "Docs".into(), "https://example.com".into())
}

#[tokio::test]
async fn given_matching_event_when_received_then_delivered() {
    let (tx, rx) = broadcast::channel(8);
    let mut subscription = Subscription::new(ChangeFilter::for_user("user-1"), rx);

    tx.send(ChangeEvent::delete("1")).unwrap();

    assert_eq!(subscription.recv().await, Some(ChangeEvent::delete("1")));
}

#[tokio::test]
async fn given_foreign_event_then_skipped() {
    let (tx, rx) = broadcast::channel(8);
    let mut subscription = Subscription::new(ChangeFilter::for_user("user-1"), rx);
    let own = bookmark("user-1");

    tx.send(ChangeEvent::insert(bookmark("user-2"))).unwrap();
    tx.send(ChangeEvent::insert(own.clone())).unwrap();

    assert_eq!(subscription.recv().await, Some(ChangeEvent::insert(own)));
}

#[test]
fn given_empty_channel_when_try_recv_then_none() {
    let (_tx, rx) = broadcast::channel::<ChangeEvent>(8);
    let mut subscription = Subscription::new(ChangeFilter::for_user("user-1"), rx);

    assert!(matches!(subscription.try_recv(), Ok(None)));
}

#[test]
fn given_closed_channel_when_try_recv_then_subscription_closed() {
    let (tx, rx) = broadcast::channel::<ChangeEvent>(8);
    let mut subscription = Subscription::new(ChangeFilter::for_user("user-1"), rx);
    drop(tx);

    assert!(matches!(
        subscription.try_recv(),
        Err(CoreError::SubscriptionClosed { .. })
    ));
}

#[test]
fn given_subscription_when_dropped_then_receiver_released() {
    let (tx, rx) = broadcast::channel::<ChangeEvent>(8);
    let subscription = Subscription::new(ChangeFilter::for_user("user-1"), rx);
    assert_eq!(tx.receiver_count(), 1);

    subscription.unsubscribe();

    assert_eq!(tx.receiver_count(), 0);
}

#[test]
fn given_lagged_receiver_when_try_recv_then_skips_to_latest() {
    let (tx, rx) = broadcast::channel::<ChangeEvent>(2);
    let mut subscription = Subscription::new(ChangeFilter::for_user("user-1"), rx);

    for id in ["1", "2", "3", "4"] {
        tx.send(ChangeEvent::delete(id)).unwrap();
    }

    assert_eq!(subscription.try_recv().unwrap(), Some(ChangeEvent::delete("3")));
    assert_eq!(subscription.try_recv().unwrap(), Some(ChangeEvent::delete("4")));
    assert_eq!(subscription.try_recv().unwrap(), None);
}

#[test]
fn given_lagged_receiver_when_try_next_item_then_lag_reported_before_events() {
    let (tx, rx) = broadcast::channel::<ChangeEvent>(2);
    let mut subscription = Subscription::new(ChangeFilter::for_user("user-1"), rx);

    for id in ["1", "2", "3"] {
        tx.send(ChangeEvent::delete(id)).unwrap();
    }

    assert_eq!(
        subscription.try_next_item().unwrap(),
        Some(FeedItem::Lagged { missed: 1 })
    );
    assert_eq!(
        subscription.try_next_item().unwrap(),
        Some(FeedItem::Change(ChangeEvent::delete("2")))
    );
}

#[tokio::test]
async fn given_lagged_receiver_when_next_item_then_missed_count_delivered() {
    let (tx, rx) = broadcast::channel::<ChangeEvent>(2);
    let mut subscription = Subscription::new(ChangeFilter::for_user("user-1"), rx);

    for id in ["1", "2", "3", "4", "5"] {
        tx.send(ChangeEvent::delete(id)).unwrap();
    }

    assert_eq!(subscription.next_item().await, Some(FeedItem::Lagged { missed: 3 }));
    assert_eq!(
        subscription.next_item().await,
        Some(FeedItem::Change(ChangeEvent::delete("4")))
    );
}
