//! # Demo Seed Data
//!
//! The demo product set used when no real catalog source is wired up.
//! Six products across four categories, one of them out of stock so the
//! stock-gating path stays exercised.

use chrono::Utc;
use zentro_core::types::Product;

/// Returns the demo products in display order.
pub fn demo_products() -> Vec<Product> {
    let now = Utc::now();

    let entry = |id: &str,
                 name: &str,
                 description: &str,
                 price_cents: i64,
                 image: &str,
                 category: &str,
                 in_stock: bool| Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price_cents,
        image: image.to_string(),
        category: category.to_string(),
        in_stock,
        created_at: now,
        updated_at: now,
    };

    vec![
        entry(
            "1",
            "Wireless Headphones",
            "Premium wireless headphones with noise cancellation and 30-hour battery life.",
            19999,
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400&h=400&fit=crop",
            "Electronics",
            true,
        ),
        entry(
            "2",
            "Smart Watch",
            "Advanced fitness tracking smartwatch with heart rate monitor and GPS.",
            29999,
            "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=400&h=400&fit=crop",
            "Electronics",
            true,
        ),
        entry(
            "3",
            "Coffee Maker",
            "Automatic drip coffee maker with programmable timer and thermal carafe.",
            8999,
            "https://images.unsplash.com/photo-1559056199-641a0ac8b55e?w=400&h=400&fit=crop",
            "Home & Kitchen",
            true,
        ),
        entry(
            "4",
            "Running Shoes",
            "Lightweight running shoes with responsive cushioning and breathable mesh upper.",
            12999,
            "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=400&h=400&fit=crop",
            "Sports",
            false,
        ),
        entry(
            "5",
            "Laptop Backpack",
            "Durable laptop backpack with multiple compartments and water-resistant material.",
            7999,
            "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=400&h=400&fit=crop",
            "Accessories",
            true,
        ),
        entry(
            "6",
            "Bluetooth Speaker",
            "Portable Bluetooth speaker with 360-degree sound and waterproof design.",
            14999,
            "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?w=400&h=400&fit=crop",
            "Electronics",
            true,
        ),
    ]
}
