//! Reads, rewrites, and prunes a configuration document with JSON Pointers.
//!
//! Run with: `cargo run --example config_edit`

use jsonpointer::{Pointer, Value};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut doc: Value = serde_json::from_str(
        r#"{
            "service": {"name": "ingest", "replicas": 3},
            "flags": ["verbose", "strict"]
        }"#,
    )?;

    let replicas = Pointer::parse("/service/replicas")?;
    println!("replicas = {}", replicas.get(&doc)?);

    replicas.set(&mut doc, Value::Number(5.0))?;
    println!("scaled   = {}", replicas.get(&doc)?);

    let dropped = Pointer::parse("/flags/0")?.delete(&mut doc)?;
    println!("dropped  = {dropped}");
    println!("document = {doc}");

    Ok(())
}
