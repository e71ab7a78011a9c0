//! # State Module
//!
//! Session-scoped application state.
//!
//! Instead of a single `AppState` struct we use separate state types, each
//! with a single responsibility:
//!
//! ```text
//! ┌──────────────┐  ┌──────────────────┐
//! │ SessionCart  │  │   StoreConfig    │
//! │              │  │                  │
//! │ Arc<Mutex<   │  │  store_name      │
//! │  CartStore   │  │  tax_rate_bps    │
//! │ >>           │  │  checkout delay  │
//! └──────────────┘  └──────────────────┘
//! ```
//!
//! The catalog handle lives in `zentro-catalog` and is passed alongside
//! these. Commands declare exactly the state they need.

mod cart;
mod config;

pub use cart::SessionCart;
pub use config::StoreConfig;
