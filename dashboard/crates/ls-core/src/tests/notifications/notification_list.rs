use crate::tests::notification_with_id;
use crate::{NOTIFICATION_CAPACITY, NotificationId, NotificationList};

use chrono::Duration;
use googletest::assert_that;
use googletest::prelude::{eq, none, some};
use proptest::prelude::*;

#[test]
fn given_25_pushes_when_listed_then_newest_20_in_reverse_order() {
    // Given
    let mut list = NotificationList::new();

    // When
    for id in 1..=25 {
        list.push(notification_with_id(id));
    }

    // Then
    let ids: Vec<u64> = list.iter().map(|n| n.id.value()).collect();
    let expected: Vec<u64> = (6..=25).rev().collect();
    assert_that!(ids, eq(&expected));
}

#[test]
fn given_unread_items_when_mark_all_read_then_unread_count_zero() {
    let mut list = NotificationList::new();
    for id in 1..=3 {
        list.push(notification_with_id(id));
    }
    assert_that!(list.unread_count(), eq(3));

    list.mark_all_read();

    assert_that!(list.unread_count(), eq(0));
    assert_that!(list.len(), eq(3));
}

#[test]
fn given_one_marked_read_then_only_that_item_changes() {
    let mut list = NotificationList::new();
    list.push(notification_with_id(1));
    list.push(notification_with_id(2));

    list.mark_read(NotificationId::new(1));

    assert_that!(list.get(NotificationId::new(1)).map(|n| n.read), some(eq(true)));
    assert_that!(list.get(NotificationId::new(2)).map(|n| n.read), some(eq(false)));
    assert_that!(list.unread_count(), eq(1));
}

#[test]
fn given_missing_id_when_marked_read_then_no_change() {
    let mut list = NotificationList::new();
    list.push(notification_with_id(1));

    list.mark_read(NotificationId::new(999));

    assert_that!(list.unread_count(), eq(1));
    assert_that!(list.get(NotificationId::new(999)), none());
}

#[test]
fn given_items_when_cleared_then_empty() {
    let mut list = NotificationList::new();
    list.push(notification_with_id(1));

    list.clear();

    assert_that!(list.is_empty(), eq(true));
    assert_that!(list.unread_count(), eq(0));
}

#[test]
fn given_time_passes_when_refreshed_then_relative_time_updated() {
    let mut list = NotificationList::new();
    let item = notification_with_id(1);
    let later = item.occurred_at + Duration::hours(2);
    list.push(item);

    list.refresh_relative_times(later);

    assert_that!(
        list.get(NotificationId::new(1)).map(|n| n.relative_time.clone()),
        some(eq("2 hours ago"))
    );
}

proptest! {
    #[test]
    fn length_never_exceeds_capacity(pushes in 0usize..60, reads in prop::collection::vec(1u64..60, 0..10)) {
        let mut list = NotificationList::new();
        for id in 1..=pushes as u64 {
            list.push(notification_with_id(id));
        }
        for id in reads {
            list.mark_read(NotificationId::new(id));
        }

        prop_assert_eq!(list.len(), pushes.min(NOTIFICATION_CAPACITY));
        prop_assert!(list.unread_count() <= list.len());
        if let Some(first) = list.iter().next() {
            prop_assert_eq!(first.id.value(), pushes as u64);
        }
    }
}
