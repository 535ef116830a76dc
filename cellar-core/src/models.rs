//! Wine record model and table column definitions.
//!
//! Records are read from the dataset's native JSON keys (`pais`, `estilo`,
//! `safra`, ...) with English aliases accepted; when both are present the
//! native key wins. Every field is
//! optional and lenient: numbers and booleans become text, `null` and `""`
//! become `None`. Nothing else is normalized.

use cellar_utils::dates::parse_year;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Delimiters that separate grape varieties in the grape composition text.
pub const GRAPE_DELIMITERS: [char; 4] = [',', ';', '+', '&'];

/// A single wine in the inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WineRecord {
    pub label: Option<String>,
    pub name: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    /// Production year as free text ("2015", "NV", ...).
    pub vintage: Option<String>,
    pub style: Option<String>,
    /// Delimited grape list, e.g. "Cabernet Sauvignon, Merlot;Syrah".
    pub grapes: Option<String>,
    pub drinking_window: Option<String>,
    pub peak: Option<String>,
    pub pairing: Option<String>,
    pub dish: Option<String>,
    pub consumed: Option<String>,
}

impl WineRecord {
    /// Build a record from one JSON object. Each field reads its native key,
    /// then its English alias; the first non-empty value wins and every other
    /// key is ignored.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let field = |native: &str, alias: &str| {
            [native, alias]
                .into_iter()
                .find_map(|key| map.get(key).and_then(value_text))
        };
        Self {
            label: field("rotulo", "label"),
            name: field("nome", "name"),
            country: field("pais", "country"),
            region: field("regiao", "region"),
            vintage: field("safra", "vintage"),
            style: field("estilo", "style"),
            grapes: field("uvas", "grapes"),
            drinking_window: field("janela", "window"),
            peak: field("pico", "peak"),
            pairing: field("harmonizacao", "pairing"),
            dish: field("prato", "dish"),
            consumed: field("consumido", "consumed"),
        }
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    pub fn vintage(&self) -> Option<&str> {
        self.vintage.as_deref()
    }

    /// Individual grape varieties: split on [`GRAPE_DELIMITERS`], trimmed,
    /// empty tokens dropped.
    pub fn grape_varieties(&self) -> impl Iterator<Item = &str> {
        self.grapes
            .as_deref()
            .unwrap_or("")
            .split(GRAPE_DELIMITERS)
            .map(str::trim)
            .filter(|g| !g.is_empty())
    }

    /// Peak year parsed as an integer, `None` when missing or non-numeric.
    pub fn peak_year(&self) -> Option<i32> {
        self.peak.as_deref().and_then(parse_year)
    }

    /// Display text for a table column (empty when the field is absent).
    pub fn column_text(&self, column: TableColumn) -> &str {
        let field = match column {
            TableColumn::Label => &self.label,
            TableColumn::Name => &self.name,
            TableColumn::Country => &self.country,
            TableColumn::Region => &self.region,
            TableColumn::Vintage => &self.vintage,
            TableColumn::Style => &self.style,
            TableColumn::Grapes => &self.grapes,
            TableColumn::DrinkingWindow => &self.drinking_window,
            TableColumn::Peak => &self.peak,
            TableColumn::Pairing => &self.pairing,
            TableColumn::Dish => &self.dish,
            TableColumn::Consumed => &self.consumed,
        };
        field.as_deref().unwrap_or("")
    }
}

/// Table columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableColumn {
    Label,
    Name,
    Country,
    Region,
    Vintage,
    Style,
    Grapes,
    DrinkingWindow,
    Peak,
    Pairing,
    Dish,
    Consumed,
}

impl TableColumn {
    pub const ALL: [TableColumn; 12] = [
        TableColumn::Label,
        TableColumn::Name,
        TableColumn::Country,
        TableColumn::Region,
        TableColumn::Vintage,
        TableColumn::Style,
        TableColumn::Grapes,
        TableColumn::DrinkingWindow,
        TableColumn::Peak,
        TableColumn::Pairing,
        TableColumn::Dish,
        TableColumn::Consumed,
    ];

    /// Row object key passed to the table widget.
    pub fn key(self) -> &'static str {
        match self {
            TableColumn::Label => "label",
            TableColumn::Name => "name",
            TableColumn::Country => "country",
            TableColumn::Region => "region",
            TableColumn::Vintage => "vintage",
            TableColumn::Style => "style",
            TableColumn::Grapes => "grapes",
            TableColumn::DrinkingWindow => "window",
            TableColumn::Peak => "peak",
            TableColumn::Pairing => "pairing",
            TableColumn::Dish => "dish",
            TableColumn::Consumed => "consumed",
        }
    }

    /// Column header text.
    pub fn label(self) -> &'static str {
        match self {
            TableColumn::Label => "Label",
            TableColumn::Name => "Name",
            TableColumn::Country => "Country",
            TableColumn::Region => "Region",
            TableColumn::Vintage => "Vintage",
            TableColumn::Style => "Style",
            TableColumn::Grapes => "Grapes",
            TableColumn::DrinkingWindow => "Drinking Window",
            TableColumn::Peak => "Peak",
            TableColumn::Pairing => "Pairing",
            TableColumn::Dish => "Dish",
            TableColumn::Consumed => "Consumed",
        }
    }
}

/// Parse a JSON array of wine records.
pub fn parse_records(json: &str) -> anyhow::Result<Vec<WineRecord>> {
    let records: Vec<WineRecord> = serde_json::from_str(json)?;
    Ok(records)
}

impl<'de> Deserialize<'de> for WineRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_map(&map))
    }
}

/// Whole floats at or past this magnitude do not fit in an `i64`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(f)) if f.fract() == 0.0 && f.abs() < I64_LIMIT => format!("{}", f as i64),
            _ => n.to_string(),
        }),
        Value::Array(items) => {
            let joined = items
                .iter()
                .filter_map(value_text)
                .collect::<Vec<_>>()
                .join(", ");
            (!joined.is_empty()).then_some(joined)
        }
        Value::Object(_) => None,
    }
}
