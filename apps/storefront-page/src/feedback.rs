//! # Button Feedback
//!
//! The "Added!" flash on an add-to-cart button.
//!
//! ```text
//! click ──► label "Added!", green ──► (feedback_delay) ──► label "Add to Cart"
//! click ──► ...                            ──► ...
//! ```
//!
//! Each click spawns its own revert task. Tasks are never cancelled: a later
//! revert just writes the same idle appearance again, and the cart is not
//! touched.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::state::{ButtonAppearance, ConfigState, PageState};

fn added(config: &ConfigState) -> ButtonAppearance {
    ButtonAppearance {
        label: config.added_button_label.clone(),
        background: Some(config.added_button_color.clone()),
    }
}

fn idle(config: &ConfigState) -> ButtonAppearance {
    ButtonAppearance {
        label: config.idle_button_label.clone(),
        background: None,
    }
}

/// Shows the "added" look on `product_id`'s button and schedules the revert.
///
/// Returns the revert task, or `None` when called outside a Tokio runtime
/// (the button then keeps its "added" look).
pub fn flash_added(
    page: &PageState,
    config: &ConfigState,
    product_id: &str,
) -> Option<JoinHandle<()>> {
    page.with_page_mut(|p| p.set_button(product_id, added(config)));

    let Ok(runtime) = Handle::try_current() else {
        warn!(product_id, "No runtime available, button revert not scheduled");
        return None;
    };

    Some(runtime.spawn(revert_after(
        page.clone(),
        product_id.to_string(),
        idle(config),
        config.feedback_delay(),
    )))
}

async fn revert_after(
    page: PageState,
    product_id: String,
    appearance: ButtonAppearance,
    delay: Duration,
) {
    tokio::time::sleep(delay).await;
    debug!(product_id = %product_id, "Reverting add button");
    page.with_page_mut(|p| p.set_button(&product_id, appearance));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(page: &PageState, id: &str) -> Option<String> {
        page.with_page(|p| p.buttons.get(id).map(|b| b.label.clone()))
    }

    #[tokio::test(start_paused = true)]
    async fn test_button_reverts_after_delay() {
        let page = PageState::new();
        let config = ConfigState::default();

        let task = flash_added(&page, &config, "A").unwrap();
        assert_eq!(label(&page, "A").as_deref(), Some("Added!"));
        assert_eq!(
            page.with_page(|p| p.buttons["A"].background.clone()).as_deref(),
            Some("#2ecc71")
        );

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert_eq!(label(&page, "A").as_deref(), Some("Added!"));

        task.await.unwrap();
        assert_eq!(label(&page, "A").as_deref(), Some("Add to Cart"));
        assert_eq!(page.with_page(|p| p.buttons["A"].background.clone()), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_flashes_settle_idle() {
        let page = PageState::new();
        let config = ConfigState::default();

        let first = flash_added(&page, &config, "A").unwrap();
        tokio::time::sleep(Duration::from_millis(500)).await;
        let second = flash_added(&page, &config, "A").unwrap();

        // The first revert lands while the second flash is still pending.
        first.await.unwrap();
        assert_eq!(label(&page, "A").as_deref(), Some("Add to Cart"));

        second.await.unwrap();
        assert_eq!(label(&page, "A").as_deref(), Some("Add to Cart"));
    }

    #[test]
    fn test_without_runtime_keeps_added_look() {
        let page = PageState::new();
        let config = ConfigState::default();

        assert!(flash_added(&page, &config, "A").is_none());
        assert_eq!(label(&page, "A").as_deref(), Some("Added!"));
    }
}
