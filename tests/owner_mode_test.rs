use club_orders::access::LoginError;
use club_orders::catalog_actor::CatalogError;
use club_orders::clients::ActorClient;
use club_orders::lifecycle::ClubSystem;
use club_orders::model::{MenuItem, MenuItemCreate, MenuItemEdit};

async fn seeded_system() -> (ClubSystem, Vec<MenuItem>) {
    let system = ClubSystem::start().await.expect("Failed to start system");
    let menu = system.customer.menu().await.expect("Failed to load menu");
    (system, menu)
}

fn edit(name: &str, unit_price: f64) -> MenuItemEdit {
    MenuItemEdit {
        name: name.to_string(),
        unit_price,
        description: "edited".to_string(),
    }
}

#[tokio::test]
async fn wrong_credentials_are_rejected_and_leave_the_system_usable() {
    let (system, menu) = seeded_system().await;

    let result = system.owner_gate.login("owner", "hunter2");
    assert_eq!(result.err(), Some(LoginError::InvalidCredentials));

    // Rejection changes nothing: the customer surface still works and the
    // cart is untouched.
    let quantity = system
        .customer
        .add_one(menu[0].id.clone())
        .await
        .expect("add");
    assert_eq!(quantity, Some(1));

    system.shutdown().await.expect("Failed to shutdown");
}

/// Editing the price of an item with two units in the cart recomputes the
/// total with the new price, not the stale one.
#[tokio::test]
async fn price_edit_reprices_pending_units() {
    let (system, menu) = seeded_system().await;
    let martini = menu[0].id.clone();

    for _ in 0..2 {
        system.customer.add_one(martini.clone()).await.expect("add");
    }
    assert_eq!(system.customer.summary().total, 36.0);

    let owner = system
        .owner_gate
        .login("owner", "elite2024")
        .expect("Login should succeed");
    let updated = owner
        .edit_item(martini, edit("Midnight Martini", 20.0))
        .await
        .expect("Failed to edit item");

    assert_eq!(updated.unit_price, 20.0);
    assert_eq!(updated.quantity, 2, "Editing must not reset cart state");
    assert_eq!(system.customer.summary().total, 40.0);

    drop(owner);
    system.shutdown().await.expect("Failed to shutdown");
}

/// Deleting an item with five pending units drops exactly its contribution
/// from the total and removes it from the line items.
#[tokio::test]
async fn delete_drops_pending_units_from_the_order() {
    let (system, menu) = seeded_system().await;
    let dream = menu[1].id.clone();
    let negroni = menu[5].id.clone();

    for _ in 0..5 {
        system.customer.add_one(dream.clone()).await.expect("add");
    }
    system.customer.add_one(negroni).await.expect("add");
    assert_eq!(system.customer.summary().total, 5.0 * 22.0 + 19.0);

    let owner = system
        .owner_gate
        .login("owner", "elite2024")
        .expect("Login should succeed");
    owner
        .delete_item(dream.clone())
        .await
        .expect("Failed to delete item");

    let summary = system.customer.summary();
    assert_eq!(summary.total, 19.0);
    assert!(summary
        .line_items
        .iter()
        .all(|line| line.name != "Amethyst Dream"));

    let menu_after = system.customer.menu().await.expect("menu");
    assert_eq!(menu_after.len(), 5);
    assert!(menu_after.iter().all(|item| item.id != dream));

    drop(owner);
    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn negative_prices_are_rejected_at_create_and_edit() {
    let (system, menu) = seeded_system().await;
    let owner = system
        .owner_gate
        .login("owner", "elite2024")
        .expect("Login should succeed");

    let create_result = owner
        .add_item(MenuItemCreate {
            name: "Bad Pour".to_string(),
            unit_price: -3.0,
            description: String::new(),
            image_url: String::new(),
        })
        .await;
    assert_eq!(create_result.err(), Some(CatalogError::InvalidPrice(-3.0)));

    let edit_result = owner
        .edit_item(menu[0].id.clone(), edit("Midnight Martini", -1.0))
        .await;
    assert_eq!(edit_result.err(), Some(CatalogError::InvalidPrice(-1.0)));

    // Nothing changed: still six items, original price intact.
    let menu_after = system.customer.menu().await.expect("menu");
    assert_eq!(menu_after.len(), 6);
    assert_eq!(menu_after[0].unit_price, 18.0);

    drop(owner);
    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn editing_a_deleted_item_reports_not_found() {
    let (system, menu) = seeded_system().await;
    let paloma = menu[4].id.clone();

    let owner = system
        .owner_gate
        .login("owner", "elite2024")
        .expect("Login should succeed");
    owner.delete_item(paloma.clone()).await.expect("delete");

    let result = owner.edit_item(paloma, edit("Ghost Drink", 10.0)).await;
    assert!(matches!(result, Err(CatalogError::NotFound(_))));

    drop(owner);
    system.shutdown().await.expect("Failed to shutdown");
}

/// Ids are assigned from a monotonic counter and never reused, even after a
/// delete.
#[tokio::test]
async fn item_ids_are_never_reused() {
    let (system, menu) = seeded_system().await;
    let owner = system
        .owner_gate
        .login("owner", "elite2024")
        .expect("Login should succeed");

    let highest_seed = menu.iter().map(|item| item.id.0).max().unwrap_or(0);
    owner
        .delete_item(menu[0].id.clone())
        .await
        .expect("delete");

    let new_id = owner
        .add_item(MenuItemCreate {
            name: "Neon Spritz".to_string(),
            unit_price: 17.0,
            description: "Aperitivo under blacklight".to_string(),
            image_url: String::new(),
        })
        .await
        .expect("Failed to add item");
    assert!(new_id.0 > highest_seed);

    // The new item lands at the end of the menu and is orderable. The owner
    // surface sees the same catalog through its read side.
    let menu_after = owner.list().await.expect("menu");
    assert_eq!(menu_after.last().expect("non-empty").id, new_id);
    let quantity = system.customer.add_one(new_id).await.expect("add");
    assert_eq!(quantity, Some(1));
    assert_eq!(system.customer.summary().total, 17.0);

    drop(owner);
    system.shutdown().await.expect("Failed to shutdown");
}
