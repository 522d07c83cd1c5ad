//! `linkdispatch categories` – list the categories the classifier can return.

use anyhow::Result;
use linkdispatch_core::LinkCategory;

pub fn run_categories() -> Result<()> {
    println!("{:<32} {}", "CATEGORY", "SESSION");
    for cat in LinkCategory::ALL {
        let session = if cat.requires_session() { "required" } else { "-" };
        println!("{:<32} {}", cat, session);
    }
    Ok(())
}
