use club_orders::lifecycle::ClubSystem;
use club_orders::model::{ItemId, MenuItem};

/// Starts the system and returns it together with the seeded menu.
async fn seeded_system() -> (ClubSystem, Vec<MenuItem>) {
    let system = ClubSystem::start().await.expect("Failed to start system");
    let menu = system.customer.menu().await.expect("Failed to load menu");
    assert_eq!(menu.len(), 6, "Demo seed should contain six cocktails");
    (system, menu)
}

/// Three Midnight Martinis at $18 give a $54.00 order with a single line
/// item.
#[tokio::test]
async fn three_martinis_total_fifty_four() {
    let (system, menu) = seeded_system().await;
    let martini = menu[0].id.clone();
    assert_eq!(menu[0].name, "Midnight Martini");
    assert_eq!(menu[0].unit_price, 18.0);

    for expected in 1..=3 {
        let quantity = system
            .customer
            .add_one(martini.clone())
            .await
            .expect("Failed to add unit");
        assert_eq!(quantity, Some(expected));
    }

    let summary = system.customer.summary();
    assert_eq!(summary.total, 54.0);
    assert_eq!(summary.formatted_total(), "$54.00");
    assert_eq!(summary.line_items.len(), 1);
    assert_eq!(summary.line_items[0].name, "Midnight Martini");
    assert_eq!(summary.line_items[0].quantity, 3);
    assert_eq!(summary.line_items[0].unit_price, 18.0);

    system.shutdown().await.expect("Failed to shutdown");
}

/// One add followed by two removes clamps at zero and leaves an empty order.
#[tokio::test]
async fn removing_below_zero_clamps_and_empties_the_order() {
    let (system, menu) = seeded_system().await;
    let paloma = menu[4].id.clone();

    system.customer.add_one(paloma.clone()).await.expect("add");
    let first = system
        .customer
        .remove_one(paloma.clone())
        .await
        .expect("remove");
    assert_eq!(first, Some(0));
    let second = system
        .customer
        .remove_one(paloma.clone())
        .await
        .expect("remove below zero");
    assert_eq!(second, Some(0), "Removing from an empty line stays at zero");

    let summary = system.customer.summary();
    assert_eq!(summary.total, 0.0);
    assert!(summary.is_empty());

    system.shutdown().await.expect("Failed to shutdown");
}

/// Line items follow catalog insertion order regardless of the order the
/// customer touched them in.
#[tokio::test]
async fn line_items_follow_menu_order_not_click_order() {
    let (system, menu) = seeded_system().await;
    let martini = menu[0].id.clone();
    let negroni = menu[5].id.clone();

    // Click the negroni first.
    system.customer.add_one(negroni).await.expect("add");
    system.customer.add_one(martini).await.expect("add");

    let names: Vec<String> = system
        .customer
        .summary()
        .line_items
        .iter()
        .map(|line| line.name.clone())
        .collect();
    assert_eq!(names, vec!["Midnight Martini", "Royal Negroni"]);

    system.shutdown().await.expect("Failed to shutdown");
}

/// A checkout snapshot is a point-in-time value; later cart changes must not
/// leak into it.
#[tokio::test]
async fn checkout_snapshot_is_immutable() {
    let (system, menu) = seeded_system().await;
    let dream = menu[1].id.clone();

    system.customer.add_one(dream.clone()).await.expect("add");
    let snapshot = system.customer.checkout();
    assert_eq!(snapshot.total, 22.0);

    system.customer.add_one(dream).await.expect("add");
    assert_eq!(snapshot.total, 22.0, "Snapshot must not track the live cart");
    assert_eq!(system.customer.summary().total, 44.0);

    system.shutdown().await.expect("Failed to shutdown");
}

/// Stepping an id that is not on the menu is a logged no-op, never an error.
#[tokio::test]
async fn stepping_an_unknown_item_is_a_noop() {
    let (system, _menu) = seeded_system().await;

    let result = system
        .customer
        .add_one(ItemId(999))
        .await
        .expect("No-op must not error");
    assert_eq!(result, None);
    assert_eq!(system.customer.summary().total, 0.0);

    system.shutdown().await.expect("Failed to shutdown");
}

/// The summary watch channel publishes before each mutation is acknowledged,
/// and subscribers observe consistent (total, line items) pairs.
#[tokio::test]
async fn subscribers_never_observe_a_stale_summary() {
    let (system, menu) = seeded_system().await;
    let elixir = menu[2].id.clone();
    let mut summaries = system.customer.subscribe();

    system.customer.add_one(elixir.clone()).await.expect("add");
    // The awaited mutation guarantees the watch already holds the new value.
    let summary = summaries.borrow_and_update().clone();
    assert_eq!(summary.total, 25.0);
    assert_eq!(summary.line_items.len(), 1);

    system.customer.add_one(elixir).await.expect("add");
    let summary = summaries.borrow_and_update().clone();
    assert_eq!(summary.total, 50.0);
    assert_eq!(summary.line_items[0].quantity, 2);

    system.shutdown().await.expect("Failed to shutdown");
}

/// Concurrent steppers on the same item are serialized by the actor; no lost
/// updates.
#[tokio::test]
async fn concurrent_adds_are_not_lost() {
    let (system, menu) = seeded_system().await;
    let obsession = menu[3].id.clone();

    let mut handles = Vec::new();
    for _ in 0..10 {
        let customer = system.customer.clone();
        let id = obsession.clone();
        handles.push(tokio::spawn(async move { customer.add_one(id).await }));
    }
    for handle in handles {
        handle
            .await
            .expect("Task panicked")
            .expect("Failed to add unit");
    }

    let summary = system.customer.summary();
    assert_eq!(summary.line_items[0].quantity, 10);
    assert_eq!(summary.total, 200.0);

    system.shutdown().await.expect("Failed to shutdown");
}
