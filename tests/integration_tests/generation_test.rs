// tests/integration_tests/generation_test.rs
use super::common::{StaticCounter, TEMPLATE, sample_config, setup_sample_directory};
use anyhow::Result;
use pagegen::{PageError, Placeholder, generate, render_page};
use std::fs;

#[test]
fn test_sample_page() -> Result<()> {
    let dir = setup_sample_directory(TEMPLATE)?;
    let config = sample_config(dir.path());

    let html = generate(&config, &StaticCounter(2048))?;

    assert_eq!(html, "<p>const x = 1; lines, 2 KB min, 1 KB gz, 2.0k loc</p>");
    Ok(())
}

#[test]
fn test_all_placeholders_replaced() -> Result<()> {
    let template = "<html>\n<pre>SOURCE</pre>\n<span>MINIFIED_SIZE</span>\n<span>GZIP_SIZE</span>\n<span>CLOC</span>\n</html>\n";
    let dir = setup_sample_directory(template)?;
    let config = sample_config(dir.path());

    let page = render_page(&config, &StaticCounter(10_292))?;

    for placeholder in Placeholder::ALL {
        assert!(
            !page.html.contains(placeholder.token()),
            "{} should have been replaced",
            placeholder.token()
        );
    }
    let values = ["const x = 1;", "2", "1", "10.1"];
    let tokens: usize = Placeholder::ALL.iter().map(|p| p.token().len()).sum();
    let inserted: usize = values.iter().map(|v| v.len()).sum();
    assert_eq!(page.html.len(), template.len() - tokens + inserted);
    Ok(())
}

#[test]
fn test_unchanged_inputs_give_identical_output() -> Result<()> {
    let dir = setup_sample_directory(TEMPLATE)?;
    let config = sample_config(dir.path());

    let first = generate(&config, &StaticCounter(777))?;
    let second = generate(&config, &StaticCounter(777))?;
    assert_eq!(first.as_bytes(), second.as_bytes());
    Ok(())
}

#[test]
fn test_bundle_sizes_round_half_up() -> Result<()> {
    let dir = setup_sample_directory("MINIFIED_SIZE/GZIP_SIZE")?;
    fs::write(dir.path().join("Editor.js"), vec![b'm'; 153_601])?;
    fs::write(dir.path().join("Editor.js.gz"), vec![0_u8; 154_112])?;
    let config = sample_config(dir.path());

    assert_eq!(generate(&config, &StaticCounter(0))?, "150/151");
    Ok(())
}

#[test]
fn test_missing_gzip_bundle_names_the_file() -> Result<()> {
    let dir = setup_sample_directory(TEMPLATE)?;
    fs::remove_file(dir.path().join("Editor.js.gz"))?;
    let config = sample_config(dir.path());

    let err = generate(&config, &StaticCounter(1)).expect_err("gzip bundle is missing");
    match err {
        PageError::FileNotFound { path, .. } => assert_eq!(path, dir.path().join("Editor.js.gz")),
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[test]
fn test_listing_with_placeholder_text_is_verbatim() -> Result<()> {
    let dir = setup_sample_directory(TEMPLATE)?;
    fs::write(
        dir.path().join("Editor.jsx.bin"),
        "render(<Stat label=\"CLOC\" />);",
    )?;
    let config = sample_config(dir.path());

    let html = generate(&config, &StaticCounter(2048))?;
    assert_eq!(
        html,
        "<p>render(<Stat label=\"CLOC\" />); lines, 2 KB min, 1 KB gz, 2.0k loc</p>"
    );
    Ok(())
}
