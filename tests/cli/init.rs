use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for field in [
        "includes",
        "excludes",
        "sourcemap",
        "breakpoints",
        "enableVariants",
        "functionName",
    ] {
        assert!(
            parsed.get(field).is_some(),
            "Config should have '{}' field",
            field
        );
    }
    assert_eq!(parsed["breakpoints"]["sm"], "640px");
    assert_eq!(parsed["functionName"], "tw");

    // 2-space indentation
    assert!(content.contains("\n  \"includes\""));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.init_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "\u{2713} Created .clsrc.json\n");
    assert!(test.root().join(".clsrc.json").exists());

    let content = test.read_file(".clsrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".clsrc.json", "{}")?;

    let output = run(test.init_command())?;

    assert_eq!(output.code, Some(1));
    assert_eq!(output.stderr, "Error: .clsrc.json already exists\n");
    assert_eq!(test.read_file(".clsrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.init_command().output()?;
    test.write_file("src/app.tsx", r#"tw("p-4", { "2xl": "p-8" })"#)?;

    let output = run(test.check_command())?;
    assert_eq!(
        output.code,
        Some(0),
        "Check should work with initialized config. stdout: {}",
        output.stdout
    );

    Ok(())
}
