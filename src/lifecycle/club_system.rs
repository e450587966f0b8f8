use crate::access::OwnerGate;
use crate::catalog_actor::{self, CatalogError};
use crate::clients::{CustomerClient, OwnerClient};
use crate::model::MenuItemCreate;
use tracing::{error, info};

/// The assembled ordering system: one catalog actor, a customer surface, and
/// the login-gated owner surface.
pub struct ClubSystem {
    pub customer: CustomerClient,
    pub owner_gate: OwnerGate,
    handle: tokio::task::JoinHandle<()>,
}

impl ClubSystem {
    /// Spawns the catalog actor and seeds the demo menu.
    ///
    /// A restart always comes back to this seed state; nothing is persisted
    /// between sessions.
    pub async fn start() -> Result<Self, CatalogError> {
        let (actor, customer, owner) = catalog_actor::new();
        let handle = tokio::spawn(actor.run(()));

        seed_menu(&owner).await?;
        info!("Club system started with demo menu");

        Ok(Self {
            customer,
            owner_gate: OwnerGate::new(owner),
            handle,
        })
    }

    /// Graceful shutdown: drop the clients so the actor's channel closes,
    /// then await the actor task.
    ///
    /// Owner clients handed out by the gate keep the channel open; callers
    /// must drop their session before shutting down.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down club system...");
        drop(self.customer);
        drop(self.owner_gate);
        if let Err(e) = self.handle.await {
            error!("Catalog actor task failed: {:?}", e);
            return Err(format!("Catalog actor task failed: {:?}", e));
        }
        info!("System shutdown complete.");
        Ok(())
    }
}

async fn seed_menu(owner: &OwnerClient) -> Result<(), CatalogError> {
    for params in demo_menu() {
        owner.add_item(params).await?;
    }
    Ok(())
}

/// The fixed demo menu the catalog is seeded with at startup.
pub fn demo_menu() -> Vec<MenuItemCreate> {
    let seed = [
        (
            "Midnight Martini",
            18.0,
            "Premium vodka with a twist of obsidian elegance",
            "https://images.unsplash.com/photo-1514362545857-3bc16c4c7d1b?w=400&q=80",
        ),
        (
            "Amethyst Dream",
            22.0,
            "Gin infused with butterfly pea flower",
            "https://images.unsplash.com/photo-1536935338788-846bb9981813?w=400&q=80",
        ),
        (
            "Golden Elixir",
            25.0,
            "Champagne cocktail with 24k gold flakes",
            "https://images.unsplash.com/photo-1470337458703-46ad1756a187?w=400&q=80",
        ),
        (
            "Velvet Obsession",
            20.0,
            "Dark rum with velvet falernum",
            "https://images.unsplash.com/photo-1551538827-9c037cb4f32a?w=400&q=80",
        ),
        (
            "Crystal Paloma",
            16.0,
            "Tequila with grapefruit and crystal clarity",
            "https://images.unsplash.com/photo-1514362545857-3bc16c4c7d1b?w=400&q=80",
        ),
        (
            "Royal Negroni",
            19.0,
            "Premium gin, Campari, and sweet vermouth",
            "https://images.unsplash.com/photo-1621873815234-781259c55de5?w=400&q=80",
        ),
    ];

    seed.into_iter()
        .map(|(name, unit_price, description, image_url)| MenuItemCreate {
            name: name.to_string(),
            unit_price,
            description: description.to_string(),
            image_url: image_url.to_string(),
        })
        .collect()
}
