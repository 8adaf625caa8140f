use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_clean_project() -> Result<()> {
    let test = CliTest::with_file(
        "src/Card.tsx",
        r#"
export function Card() {
    return <div className={tw("p-4", { md: "p-6", lg: "p-8" })} />;
}
"#,
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert_eq!(
        output.stdout,
        "\u{2713} Checked 1 source file, 1 call site - no issues found\n"
    );

    Ok(())
}

#[test]
fn test_unknown_breakpoint() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        "const a = tw(\"p-4\", { xxl: \"p-6\" });\n",
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert_eq!(
        output.stdout,
        concat!(
            "warning: Unknown breakpoint: xxl  unknown-breakpoint\n",
            "  --> src/app.tsx:1:11\n",
            "  |\n",
            "1 | const a = tw(\"p-4\", { xxl: \"p-6\" });\n",
            "  |           ^\n",
            "  = note: the \"xxl\" classes were left out of the generated string\n",
            "  = hint: add it to \"breakpoints\" or set \"enableVariants\": true\n",
            "\n",
            "\u{2718} 1 problem (0 errors, 1 warning)\n",
        )
    );

    Ok(())
}

#[test]
fn test_enable_variants_flag_silences_unknown_keys() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"const a = tw("p-4", { hover: "bg-blue" });"#,
    )?;

    let output = run(test.check_command())?;
    assert_eq!(output.code, Some(1));

    let mut cmd = test.check_command();
    cmd.arg("--enable-variants");
    let output = run(cmd)?;
    assert_eq!(output.code, Some(0), "stdout: {}", output.stdout);

    Ok(())
}

#[test]
fn test_parse_error_reported() -> Result<()> {
    let test = CliTest::with_file("src/broken.tsx", r#"const a = tw("p-4", {"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("warning: File could not be parsed  parse-error"));
    assert!(output.stdout.contains("  --> src/broken.tsx\n"));

    Ok(())
}

#[test]
fn test_config_breakpoints_and_excludes() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".clsrc.json",
        r#"{
    "breakpoints": { "tablet": "640px" },
    "excludes": ["**/generated/**"]
}"#,
    )?;
    test.write_file("src/app.tsx", r#"tw("a", { tablet: "b" })"#)?;
    test.write_file("src/generated/x.tsx", r#"tw("a", { nope: "b" })"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0), "stdout: {}", output.stdout);
    assert!(output.stdout.contains("Checked 1 source file, 1 call site"));

    Ok(())
}

#[test]
fn test_function_name_flag() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", r#"cls("a", { md: "b" }); tw("c")"#)?;

    let mut cmd = test.check_command();
    cmd.args(["--function-name", "cls"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("1 call site"));

    Ok(())
}

#[test]
fn test_invalid_config_is_error() -> Result<()> {
    let test = CliTest::with_file(".clsrc.json", r#"{ "includes": ["[invalid"] }"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.starts_with("Error: "));
    assert!(output.stderr.contains("includes"));

    Ok(())
}

#[test]
fn test_source_root_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("web/app.tsx", r#"tw("a", { xxl: "b" })"#)?;
    test.write_file("other/app.tsx", r#"tw("a")"#)?;

    let mut cmd = test.check_command();
    cmd.args(["--source-root", "other"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Checked 1 source file"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Usage:"));
    assert!(output.stdout.contains("check"));
    assert!(output.stdout.contains("build"));

    Ok(())
}
