//! The `studentgen questions` command.

use anyhow::Result;

use studentgen_core::Query;

pub fn execute() -> Result<()> {
    println!("Questions are matched on these phrases (first match wins):");
    for query in Query::ALL {
        println!("  {:<46} {}", query.trigger(), query.label());
    }
    Ok(())
}
