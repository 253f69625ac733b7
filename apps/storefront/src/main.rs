//! # Shopcart Demo
//!
//! Scripted checkout against the default storefront:
//!
//! ```text
//! load config ──► open session ──► add p2 ──► select PERCENT10 ──► complete
//! ```
//!
//! Run with `RUST_LOG=debug` to see every command.

use std::process::ExitCode;

use tracing::{error, info};

use shopcart_storefront::commands::{cart, coupon, order};
use shopcart_storefront::config::StorefrontConfig;
use shopcart_storefront::error::ApiError;
use shopcart_storefront::init_tracing;
use shopcart_storefront::state::Storefront;

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Demo checkout failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ApiError> {
    let config = StorefrontConfig::load_or_default(None);
    let store = Storefront::new(config);
    let mut session = store.open_session();

    info!(session = %session.id(), "Session opened");

    for view in coupon::list_coupons(&store) {
        info!(code = %view.coupon.code, label = %view.label, "Coupon available");
    }

    cart::add_to_cart(&mut session, "p2", Some(1))?;
    let response = coupon::select_coupon(&mut session, Some("PERCENT10"))?;

    let format = |amount| store.config().format_currency(amount);
    info!(
        before = %format(response.totals.total_before_discount),
        after = %format(response.totals.total_after_discount),
        "Cart priced"
    );

    let completed = order::complete_order(&mut session)?;
    info!(
        order_number = %completed.order_number,
        total = %format(completed.totals.total_after_discount),
        "Checkout finished"
    );

    let receipt = serde_json::to_string_pretty(&completed)
        .map_err(|e| ApiError::internal(e.to_string()))?;
    println!("{}", receipt);

    Ok(())
}
