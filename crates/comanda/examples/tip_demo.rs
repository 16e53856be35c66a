//! Tip Calculator Demo
//!
//! Walks the tip calculator through the mock DOM the way a guest
//! would, then runs the unified submit-flow suite over every
//! component in the crate.
//!
//! Run with: cargo run --example tip_demo

use comanda::driver::{
    run_submit_flow_suite, verify_rejects_empty, verify_single_submission,
    verify_terminal_state_is_sticky, FeedbackDriver, OrderDriver, PollDriver, TipDriver,
};
use comanda::prelude::*;

fn main() {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║            Tip Calculator Demo - Mock DOM Testing            ║");
    println!("╠══════════════════════════════════════════════════════════════╣");
    println!("║  One headless core, one DOM view, one submit-flow contract   ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let mut view = TipCalculatorView::new(50.0);
    view.on_submit(|receipt| {
        println!(
            "   💳 Receipt delivered: tip {} / total {}",
            receipt.tip_display(),
            receipt.total_display()
        );
    });

    // Show DOM structure
    println!("📦 Mock DOM Structure:");
    println!("   ├── tip-bill          (bill display)");
    println!("   ├── tip-btn-15..25    (preset buttons)");
    println!("   ├── tip-custom-input  (custom amount field)");
    println!("   ├── tip-amount        (derived tip display)");
    println!("   ├── tip-total         (bill + tip display)");
    println!("   ├── tip-submit        (submit button)");
    println!("   └── tip-confirmation  (hidden until submitted)");
    println!();

    println!("🧾 Guest Session on a 50.00 Bill:");
    println!("─────────────────────────────────");

    println!("\n1️⃣  Simulating: click the 20% preset");
    view.pick_percentage(TipPercent::P20);
    println!("   Tip display:   {:?}", view.amount_text());
    println!("   Total display: {:?}", view.total_text());

    println!("\n2️⃣  Simulating: type '7' as a custom amount");
    view.type_custom_amount("7");
    println!("   Tip display:   {:?}", view.amount_text());
    println!("   Total display: {:?}", view.total_text());

    println!("\n3️⃣  Simulating: type 'abc' (unparseable entry)");
    view.type_custom_amount("abc");
    println!("   Tip display:   {:?}", view.amount_text());
    println!("   Submit enabled: {}", view.calculator().can_submit());

    println!("\n4️⃣  Simulating: back to 20%, then click Submit");
    view.pick_percentage(TipPercent::P20);
    view.click_submit();
    println!("   Confirmation visible: {}", view.confirmation_visible());

    println!("\n5️⃣  Simulating: clicking 25% after submission");
    view.pick_percentage(TipPercent::P25);
    println!("   Tip display (frozen): {:?}", view.amount_text());

    println!("\n6️⃣  DOM Event History:");
    for (i, event) in view.dom().event_history().iter().enumerate() {
        println!("   [{i}] {:?}", event);
    }

    // Now run the unified suite over every component
    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  Running Unified Submit-Flow Specifications (all components)");
    println!("═══════════════════════════════════════════════════════════════");
    println!();

    print!("  ✓ tip: verify_rejects_empty ... ");
    verify_rejects_empty(&mut TipDriver::new());
    println!("PASSED");

    print!("  ✓ tip: verify_single_submission ... ");
    verify_single_submission(&mut TipDriver::new());
    println!("PASSED");

    print!("  ✓ tip: verify_terminal_state_is_sticky ... ");
    verify_terminal_state_is_sticky(&mut TipDriver::new());
    println!("PASSED");

    print!("  ✓ feedback: full suite ... ");
    run_submit_flow_suite(FeedbackDriver::new);
    println!("PASSED");

    print!("  ✓ order: full suite ... ");
    run_submit_flow_suite(OrderDriver::new);
    println!("PASSED");

    print!("  ✓ poll: full suite ... ");
    run_submit_flow_suite(PollDriver::new);
    println!("PASSED");

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  🎉 Demo Complete - every component honors the same contract ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
}
