//! Product type catalog command

use anyhow::Result;
use nichecraft_core::ProductType;

pub fn cmd_types(json: bool) -> Result<()> {
    let types: Vec<_> = ProductType::all().iter().map(|t| t.info()).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&types)?);
        return Ok(());
    }

    println!("📦 Product types:");
    println!();
    for info in &types {
        println!("   {:<10} {:<15} {}", info.id, info.label, info.description);
    }

    Ok(())
}
