//! End-to-end rewrite scenarios against real files.

mod common;

use color_debterator::error::AppError;
use color_debterator::services::PaletteStats;
use common::{fixtures, TestProject};
use pretty_assertions::assert_eq;

#[test]
fn test_close_colors_are_replaced() {
    let project = TestProject::new(fixtures::APP_COLORS, fixtures::BRAND_PALETTE);

    let summary = project.run(5.0, false);

    let text = project.input_text();
    common::assert_color_value(&text, "title", "@color/brand_red");
    common::assert_color_value(&text, "divider", "@color/brand_red");
    common::assert_color_value(&text, "link", "#0000FF");
    common::assert_color_value(&text, "scrim", "#80000000");
    common::assert_color_value(&text, "accent", "@color/title");
    // Comments are left alone
    assert!(text.contains(r#"<!-- legacy: <color name="old_title">#F00</color> -->"#));

    assert!(summary.written);
    assert_eq!(
        summary.before,
        PaletteStats {
            defined: 4,
            referenced: 1
        }
    );
    assert_eq!(
        summary.after,
        PaletteStats {
            defined: 2,
            referenced: 3
        }
    );
    assert_eq!(summary.kill_rate, 50);
    assert_eq!(summary.replacements.len(), 2);
    assert_eq!(summary.replacements[0].occurrences, 2);
    assert_eq!(summary.replacements[1].occurrences, 0);
}

#[test]
fn test_translucent_colors_match_only_translucent_targets() {
    let project = TestProject::new(fixtures::APP_COLORS, fixtures::BRAND_PALETTE);

    let summary = project.run(13.0, true);

    let scrim = summary
        .rows
        .iter()
        .find(|row| row.name == "scrim")
        .expect("scrim row");
    assert_eq!(scrim.best_target.as_deref(), Some("brand_scrim"));
    // Same rgb, so the distance is the alpha gap alone
    assert!((scrim.distance.unwrap() - 13.0).abs() < 1e-9);
    assert!(scrim.within_tolerance);
    assert_eq!(summary.kill_rate, 75);
}

#[test]
fn test_zero_tolerance_changes_nothing() {
    let project = TestProject::new(fixtures::APP_COLORS, fixtures::BRAND_PALETTE);

    let summary = project.run(0.0, false);

    assert!(!summary.written);
    assert!(summary.replacements.is_empty());
    assert_eq!(summary.kill_rate, 0);
    assert_eq!(project.input_text(), fixtures::APP_COLORS);
}

#[test]
fn test_dry_run_reports_without_writing() {
    let project = TestProject::new(fixtures::APP_COLORS, fixtures::BRAND_PALETTE);

    let summary = project.run(5.0, true);

    assert!(!summary.written);
    assert_eq!(summary.after.defined, 2);
    assert_eq!(summary.kill_rate, 50);
    assert_eq!(project.input_text(), fixtures::APP_COLORS);
}

#[test]
fn test_unsupported_entry_aborts_run() {
    let project = TestProject::new(fixtures::UNSUPPORTED_COLORS, fixtures::BRAND_PALETTE);

    let err = project.try_run(5.0, false).unwrap_err();

    assert!(matches!(err, AppError::Resource(_)));
    assert!(err.to_string().contains("?attr/colorPrimary"));
    assert_eq!(project.input_text(), fixtures::UNSUPPORTED_COLORS);
}

#[test]
fn test_unsupported_target_aborts_before_writing() {
    let project = TestProject::new(fixtures::APP_COLORS, fixtures::UNSUPPORTED_COLORS);

    assert!(project.try_run(5.0, false).is_err());
    assert_eq!(project.input_text(), fixtures::APP_COLORS);
}

#[test]
fn test_second_run_is_a_no_op() {
    let project = TestProject::new(fixtures::APP_COLORS, fixtures::BRAND_PALETTE);
    project.run(5.0, false);
    let once = project.input_text();

    let summary = project.run(5.0, false);

    assert_eq!(project.input_text(), once);
    assert!(!summary.written);
    assert_eq!(summary.kill_rate, 0);
}
