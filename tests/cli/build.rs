use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, run};

fn project() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file(
        "src/Card.tsx",
        "export const Card = () => (\n    <div className={tw(\"p-4\", { md: \"p-6\" })} />\n);\n",
    )?;
    test.write_file("src/util.ts", "export const add = (a: number, b: number) => a + b;\n")?;
    Ok(test)
}

#[test]
fn test_build_writes_rewritten_and_copied_files() -> Result<()> {
    let test = project()?;

    let output = run(test.build_command("dist"))?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert_eq!(
        output.stdout,
        concat!(
            "\u{2713} Wrote 2 files to dist\n",
            "  - rewritten: 1 (1 call site)\n",
            "  - copied: 1\n",
            "  - source maps: 1\n",
        )
    );

    assert_eq!(
        test.read_file("dist/src/Card.tsx")?,
        "export const Card = () => (\n    <div className={\"p-4 md:p-6\"} />\n);\n"
    );
    assert_eq!(
        test.read_file("dist/src/util.ts")?,
        test.read_file("src/util.ts")?
    );

    let map: Value = serde_json::from_str(&test.read_file("dist/src/Card.tsx.map")?)?;
    assert_eq!(map["version"], 3);
    assert_eq!(map["sources"][0], "src/Card.tsx");
    assert_eq!(map["mappings"], "AAAA;AACA,oBAAoB,YAAwB;AAC5C");
    assert!(!test.root().join("dist/src/util.ts.map").exists());

    Ok(())
}

#[test]
fn test_build_no_sourcemap() -> Result<()> {
    let test = project()?;

    let mut cmd = test.build_command("out");
    cmd.arg("--no-sourcemap");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(test.root().join("out/src/Card.tsx").exists());
    assert!(!test.root().join("out/src/Card.tsx.map").exists());
    assert!(!output.stdout.contains("source maps"));

    Ok(())
}

#[test]
fn test_build_skips_its_own_output() -> Result<()> {
    let test = project()?;

    run(test.build_command("dist"))?;
    let output = run(test.build_command("dist"))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Wrote 2 files to dist"));
    assert!(!test.root().join("dist/dist").exists());

    Ok(())
}

#[test]
fn test_build_reports_warnings() -> Result<()> {
    let test = CliTest::with_file("app.tsx", r#"tw("a", { xxl: "b" })"#)?;

    let output = run(test.build_command("dist"))?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("warning: Unknown breakpoint: xxl"));
    assert_eq!(test.read_file("dist/app.tsx")?, r#""a""#);

    Ok(())
}

#[test]
fn test_build_copies_unparseable_file_untouched() -> Result<()> {
    let test = CliTest::with_file("bad.tsx", r#"tw("a", {"#)?;

    let output = run(test.build_command("dist"))?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("parse-error"));
    assert!(output.stdout.contains("Wrote 1 file to dist"));
    assert_eq!(test.read_file("dist/bad.tsx")?, r#"tw("a", {"#);

    Ok(())
}
