//! Resource documents used across integration tests.

/// App resources with two literal colors close to the brand palette, one far
/// away, one translucent, and one reference.
pub const APP_COLORS: &str = r##"<?xml version="1.0" encoding="utf-8"?>
<resources>
    <color name="title">#FF0000</color>
    <color name="divider">#FF0000</color>
    <color name="link">#0000FF</color>
    <!-- legacy: <color name="old_title">#F00</color> -->
    <color name="scrim">#80000000</color>
    <color name="accent">@color/title</color>
</resources>
"##;

/// Brand palette the app should converge on.
pub const BRAND_PALETTE: &str = r##"<?xml version="1.0" encoding="utf-8"?>
<resources>
    <color name="brand_red">#FE0100</color>
    <color name="brand_green">#00FF00</color>
    <color name="brand_scrim">#73000000</color>
</resources>
"##;

/// A document with a value the core cannot interpret.
pub const UNSUPPORTED_COLORS: &str = r##"<?xml version="1.0" encoding="utf-8"?>
<resources>
    <color name="title">#FF0000</color>
    <color name="themed">?attr/colorPrimary</color>
</resources>
"##;

/// Settings file enabling dry runs and the JSON report.
pub const DRY_RUN_JSON_CONFIG: &str = "tolerance: 5\ndry_run: true\nreport: json\n";
