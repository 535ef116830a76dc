//! Fixed settings shared by every page.

/// Network fallback for the dataset, relative to the page.
pub const DATA_URL: &str = "./data/wines.json";

/// Base color of the chart ramps (wine red).
pub const THEME_COLOR: &str = "#7b1e3a";

/// Class toggled on `<body>` while dark mode is on.
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// DOM id of the table container.
pub const TABLE_ID: &str = "wine-table";

/// DOM ids of the three bar chart containers.
pub const COUNTRY_CHART_ID: &str = "chart-by-country";
pub const VINTAGE_CHART_ID: &str = "chart-by-vintage";
pub const STYLE_CHART_ID: &str = "chart-by-style";
