use cellar_core::aggregate::{aggregate_by, AggregateField};
use cellar_core::filters::{FilterColumn, TableFilters};
use cellar_core::source::{EmbeddedSource, RecordSource};
use cellar_core::summary::summarize_at;
use cellar_core::vocabulary::build_vocabulary;
use cellar_core::WineStore;
use futures::executor::block_on;

const PAYLOAD: &str = r#"[
    {"pais":"France","estilo":"Red","safra":"2015"},
    {"pais":"Chile","estilo":"Red","safra":"2015"}
]"#;

fn load() -> std::rc::Rc<Vec<cellar_core::models::WineRecord>> {
    let sources: Vec<Box<dyn RecordSource>> = vec![Box::new(EmbeddedSource::new(PAYLOAD))];
    block_on(WineStore::new().load(&sources))
}

#[test]
fn page_pipeline() {
    let records = load();

    let vocab = build_vocabulary(&records);
    assert_eq!(vocab.countries, vec!["Chile", "France"]);

    let styles = aggregate_by(&records, AggregateField::Style);
    assert_eq!(styles.labels(), vec!["Red"]);
    assert_eq!(styles.get("Red"), Some(2));

    let vintages = aggregate_by(&records, AggregateField::Vintage);
    assert_eq!(vintages.labels(), vec!["2015"]);
    assert_eq!(vintages.get("2015"), Some(2));

    let summary = summarize_at(&records, 2024);
    assert_eq!(summary.total, records.len());
    assert_eq!(summary.countries, 2);
    assert_eq!(summary.styles, 1);
    assert_eq!(summary.next_peak_label(), "-");
}

#[test]
fn filter_then_clear() {
    let records = load();
    let mut filters = TableFilters::new();

    filters.set(FilterColumn::Country, "France");
    assert_eq!(filters.apply(&records).len(), 1);

    filters.set(FilterColumn::Country, "");
    assert_eq!(filters.apply(&records).len(), records.len());
}

#[test]
fn bundled_fixture_parses() {
    let fixture = include_str!("../../fixtures/wines.json");
    let records = cellar_core::models::parse_records(fixture).unwrap();
    assert!(!records.is_empty());

    let vocab = build_vocabulary(&records);
    for record in records.iter() {
        if let Some(country) = record.country() {
            assert_eq!(vocab.countries.iter().filter(|c| *c == country).count(), 1);
        }
    }
}
