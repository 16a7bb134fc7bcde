//! Example tagging a file with extended attributes
//!
//! Run with: cargo run --example attr_demo -- <file>

use file_attr::{AttrError, Config, FileAttributes};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let path = match std::env::args().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => {
            let path = std::env::temp_dir().join("file_attr_demo.txt");
            std::fs::write(&path, "demo")?;
            path
        }
    };

    let config = Config::load_or_default();
    let attrs = FileAttributes::from_settings(&path, &config.settings);

    println!("=== file-attr demo on {} ===\n", path.display());
    println!("Namespace: {:?}", config.settings.namespace);

    match attrs.try_set("com.example.tag", "hello") {
        Ok(()) => println!("Set com.example.tag = hello"),
        Err(AttrError::Unsupported) => {
            println!("This filesystem does not support extended attributes");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    println!("Read back: {:?}", attrs.try_get("com.example.tag")?);
    println!("All attributes: {:?}", attrs.list());

    attrs.try_remove("com.example.tag")?;
    println!("After remove: {:?}", attrs.get("com.example.tag"));

    Ok(())
}
