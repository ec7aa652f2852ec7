use std::error::Error;
use std::{ fs, path::Path, path::PathBuf };
use serde_json::Value;
use anyhow::{ Context, Result, bail };

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);

    bundle_table("data/cultures.json", &out_dir.join("cultures.json"), &[
        "name",
        "display_name",
        "primary_code",
    ])?;
    bundle_table("data/countries.json", &out_dir.join("countries.json"), &[
        "name",
        "two_letter_code",
        "three_letter_code",
    ])?;

    println!("cargo:rerun-if-changed=data");
    Ok(())
}

// Parse a reference-data file, check its record shape, and write a compacted
// copy into OUT_DIR so include_str! embeds it without the source formatting.
fn bundle_table(source: &str, out_path: &Path, required_fields: &[&str]) -> Result<()> {
    let content = fs::read_to_string(source).with_context(|| format!("reading {source}"))?;
    let table: Value = serde_json::from_str(&content).with_context(|| format!("parsing {source}"))?;

    let Some(entries) = table.as_array() else {
        bail!("{source} must be a JSON array of records");
    };
    if entries.is_empty() {
        bail!("{source} contains no records");
    }

    for (index, entry) in entries.iter().enumerate() {
        for field in required_fields {
            if entry.get(field).and_then(Value::as_str).is_none() {
                bail!("{source}: record {index} is missing string field '{field}'");
            }
        }
    }

    fs::write(out_path, serde_json::to_string(&table)?)
        .with_context(|| format!("writing {}", out_path.display()))?;
    Ok(())
}
