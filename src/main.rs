//! Scripted demo session against the club ordering core.
//!
//! Runs the flows the venue page drives: browse the menu, step quantities and
//! watch the running total move, fail and then pass the owner login, edit a
//! price, delete an item, and take a checkout snapshot.

use club_orders::lifecycle::{setup_tracing, ClubSystem};
use club_orders::model::{MenuItemCreate, MenuItemEdit};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting club ordering system");
    let system = ClubSystem::start().await.map_err(|e| e.to_string())?;

    let menu = system.customer.menu().await.map_err(|e| e.to_string())?;
    info!(items = menu.len(), "Menu loaded");
    let martini = menu[0].id.clone();
    let negroni = menu[5].id.clone();

    // Customer session: three martinis, one taken back, one negroni.
    let span = tracing::info_span!("customer_session");
    async {
        for _ in 0..3 {
            system
                .customer
                .add_one(martini.clone())
                .await
                .map_err(|e| e.to_string())?;
        }
        system
            .customer
            .remove_one(martini.clone())
            .await
            .map_err(|e| e.to_string())?;
        system
            .customer
            .add_one(negroni.clone())
            .await
            .map_err(|e| e.to_string())?;

        let summary = system.customer.summary();
        info!(
            total = %summary.formatted_total(),
            lines = summary.line_items.len(),
            "Running total"
        );
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    // Owner session: one failed login, then manage the menu.
    let span = tracing::info_span!("owner_session");
    async {
        if let Err(e) = system.owner_gate.login("owner", "letmein") {
            warn!(error = %e, "Login attempt rejected");
        }
        let owner = system
            .owner_gate
            .login("owner", "elite2024")
            .map_err(|e| e.to_string())?;

        // Raise the martini price; pending cart units reprice immediately.
        owner
            .edit_item(
                martini.clone(),
                MenuItemEdit {
                    name: "Midnight Martini".to_string(),
                    unit_price: 20.0,
                    description: "Premium vodka with a twist of obsidian elegance".to_string(),
                },
            )
            .await
            .map_err(|e| e.to_string())?;

        let special = owner
            .add_item(MenuItemCreate {
                name: "Neon Spritz".to_string(),
                unit_price: 17.0,
                description: "Aperitivo under blacklight".to_string(),
                image_url: String::new(),
            })
            .await
            .map_err(|e| e.to_string())?;
        info!(id = %special, "Tonight's special added");

        owner
            .delete_item(special)
            .await
            .map_err(|e| e.to_string())?;
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let checkout = system.customer.checkout();
    info!(
        total = %checkout.formatted_total(),
        lines = checkout.line_items.len(),
        "Checkout summary ready"
    );

    system.shutdown().await?;
    info!("Demo session completed");
    Ok(())
}
