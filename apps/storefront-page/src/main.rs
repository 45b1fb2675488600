//! # Storefront Page Entry Point
//!
//! Reads page events (JSON lines) from stdin and writes the resulting page
//! surface to stdout.
//!
//! ```text
//! $ echo '{"type":"add_to_cart","id":"A","name":"Widget","price":"9.99"}' \
//!     | storefront-page
//! {"response":{"kind":"cart",...},"page":{"cartCount":"1",...}}
//! ```

#[tokio::main]
async fn main() {
    // The actual setup is in lib.rs for better testability
    if let Err(err) = storefront_page::run().await {
        tracing::error!(error = %err, "Event loop failed");
        std::process::exit(1);
    }
}
