//! Assertions on rewritten documents and process output.

use std::process::Output;

/// Assert that `<color name="{name}">` now holds `value`.
pub fn assert_color_value(document: &str, name: &str, value: &str) {
    let element = format!(r#"<color name="{}">{}</color>"#, name, value);
    assert!(
        document.contains(&element),
        "Expected {} in document:\n{}",
        element,
        document
    );
}

pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "Expected success, got {:?}\nstderr:\n{}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
