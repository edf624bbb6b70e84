use anyhow::Result;
use swap_widget_core::{Chain, WidgetSettings};

fn main() -> Result<()> {
    let settings = WidgetSettings::from_env();

    println!("Swap Widget Configuration:\n");
    println!("  Aggregator URL: {}", settings.aggregator_url);
    println!("  Client ID: {}", settings.client_id);
    println!("  Default slippage: {} bps", settings.slippage_bps);
    println!("  Deadline: {} minutes", settings.deadline_minutes);

    println!("\nSupported chains:");
    for chain in Chain::all() {
        println!(
            "  {:>10}  {:<18} path={:<10} {}",
            chain.chain_id(),
            chain.name(),
            chain.aggregator_path(),
            chain.scan_url()
        );
    }

    Ok(())
}
