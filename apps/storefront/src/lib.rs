//! # Zentro Storefront Library
//!
//! Composition root for the Zentro storefront application.
//!
//! ## Module Organization
//! ```text
//! zentro_storefront/
//! ├── lib.rs          ◄─── You are here (setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Session cart handle
//! │   └── config.rs   ◄─── Store configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Listing/search/detail commands
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── admin.rs    ◄─── Catalog CRUD commands
//! │   └── checkout.rs ◄─── Order placement
//! └── error.rs        ◄─── Store error type for commands
//! ```
//!
//! `run()` owns the session state: it builds the catalog and the cart
//! store, hands them by reference to the command layer, and drives a
//! scripted walkthrough of the storefront (listing, detail, cart,
//! admin, checkout). A real frontend would call the same commands with
//! the same handles.

pub mod commands;
pub mod error;
pub mod state;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use error::StoreError;
use state::{SessionCart, StoreConfig};
use zentro_catalog::{Catalog, ProductDraft};
use zentro_core::types::CustomerInfo;

/// Runs the storefront application.
///
/// ## Startup Sequence
/// 1. Initialize logging (tracing-subscriber with env filter)
/// 2. Load configuration (defaults + `ZENTRO_*` env overrides)
/// 3. Build session state (seeded catalog, empty cart store)
/// 4. Subscribe the cart logger (observes every committed cart change)
/// 5. Drive the demo session on a current-thread runtime
pub fn run() -> Result<(), StoreError> {
    init_tracing();

    info!("Starting Zentro storefront");

    let config = StoreConfig::from_env();
    info!(store = %config.store_name, tax_bps = config.tax_rate_bps, "Configuration loaded");

    let catalog = Catalog::with_demo_products();
    info!(products = catalog.len(), "Catalog seeded");

    let cart = SessionCart::new();

    // Every committed cart change is observed here, exactly once
    cart.with_store_mut(|s| {
        s.subscribe(|c| {
            info!(
                items = c.item_count(),
                distinct = c.distinct_count(),
                subtotal = %c.subtotal(),
                "Cart updated"
            );
        })
    });

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(|e| StoreError::internal(format!("failed to start runtime: {}", e)))?;

    runtime.block_on(demo_session(&config, &catalog, &cart))
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=zentro=trace` - Show trace for zentro crates only
/// - Default: INFO level, DEBUG for zentro crates
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,zentro=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Walks one shopper-plus-admin session through every command group.
async fn demo_session(
    config: &StoreConfig,
    catalog: &Catalog,
    cart: &SessionCart,
) -> Result<(), StoreError> {
    // Browse the storefront
    let listing = commands::product::list_products(catalog, None, None);
    info!(count = listing.len(), "Storefront listing loaded");

    let categories = commands::product::list_categories(catalog);
    info!(?categories, "Category filters available");

    let hits = commands::product::list_products(catalog, Some("wireless"), Some("Electronics"));
    info!(count = hits.len(), "Filtered listing for \"wireless\" in Electronics");

    // Product detail page
    let detail = commands::product::get_product(catalog, "1")?;
    info!(name = %detail.name, price_cents = detail.price_cents, "Viewing product detail");

    // Fill the cart: headphones twice, coffee maker once, then bump the
    // coffee maker to two units
    commands::cart::add_to_cart(catalog, cart, "1")?;
    commands::cart::add_to_cart(catalog, cart, "1")?;
    commands::cart::add_to_cart(catalog, cart, "3")?;
    commands::cart::update_cart_item(cart, "3", 2);

    // The running shoes are out of stock; the gate rejects them before
    // the cart is touched
    if let Err(err) = commands::cart::add_to_cart(catalog, cart, "4") {
        warn!(%err, "Add to cart rejected");
    }

    let snapshot = commands::cart::get_cart(cart);
    info!(
        items = snapshot.totals.item_count,
        subtotal_cents = snapshot.totals.subtotal_cents,
        "Proceeding to checkout"
    );

    // Checkout
    let customer = CustomerInfo {
        name: "Jordan Doe".to_string(),
        email: "jordan@example.com".to_string(),
        address: "123 Main Street".to_string(),
        city: "Springfield".to_string(),
        postal_code: "12345".to_string(),
    };
    let confirmation = commands::checkout::place_order(cart, config, customer).await?;
    info!(
        order_id = %confirmation.order_id,
        total_cents = confirmation.total_cents,
        "Checkout complete"
    );

    // Admin panel: add a product, reprice it, then retire it
    let draft = ProductDraft {
        name: "Desk Lamp".to_string(),
        description: "Adjustable LED desk lamp with touch dimming.".to_string(),
        price_cents: 2499,
        image: "https://images.unsplash.com/photo-1507473885765-e6ed057f782c?w=400&h=400&fit=crop"
            .to_string(),
        category: "Home & Kitchen".to_string(),
        in_stock: true,
    };
    let created = commands::admin::create_product(catalog, draft.clone())?;

    let mut repriced = draft;
    repriced.price_cents = 1999;
    commands::admin::update_product(catalog, &created.id, repriced)?;

    commands::admin::delete_product(catalog, &created.id)?;
    info!(products = catalog.len(), "Admin session finished");

    Ok(())
}
