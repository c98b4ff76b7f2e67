use crate::prelude::{eprintln, println, *};
use optkit::optional_defined;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct TruthyOptions {
    /// JSON value to test (e.g. 0, "", null, {"a":1})
    pub value: String,
}

pub fn run(options: TruthyOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Testing value: {}", options.value);
    }

    let json = render(&options.value)?;
    println!("{}", json);

    Ok(())
}

/// Parse `input` as JSON and serialize `optional_defined` of it.
fn render(input: &str) -> Result<String> {
    let value: serde_json::Value =
        serde_json::from_str(input).with_context(|| format!("Invalid JSON value: {}", input))?;

    serde_json::to_string_pretty(&optional_defined(value)).context("Failed to serialize result")
}
