use neural_forecast::data::{validate_history, CsvPriceSource, PriceSource};
use neural_forecast::{ForecastError, PricePoint};

use chrono::NaiveDate;

#[test]
fn test_csv_source_filters_and_sorts() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("ACME.csv"),
        "date,close,open,high,low,volume\n\
         2023-01-03,101.0,100.5,101.5,100.0,1200\n\
         2023-01-02,100.0,,,,1100\n\
         2023-01-04,-5.0,,,,900\n",
    )
    .unwrap();

    let source = CsvPriceSource::new(dir.path());
    let series = source.fetch_price_series("ACME").unwrap();

    // The invalid row is dropped and the rest is ascending by date
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2023, 1, 2).unwrap());
    assert_eq!(series[0].price, 100.0);
    assert_eq!(series[1].price, 101.0);
    assert_eq!(series[1].open, Some(100.5));
    assert_eq!(series[0].volume, Some(1100.0));
}

#[test]
fn test_csv_source_missing_symbol_fails() {
    let dir = tempfile::tempdir().unwrap();
    let source = CsvPriceSource::new(dir.path());

    assert!(source.fetch_price_series("NOPE").is_err());
}

#[test]
fn test_csv_source_all_rows_invalid_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("BAD.csv"),
        "date,close,open,high,low,volume\n2023-01-02,-1.0,,,,\n",
    )
    .unwrap();

    let source = CsvPriceSource::new(dir.path());
    let err = source.fetch_price_series("BAD").unwrap_err();
    assert!(matches!(err, ForecastError::Data(_)));
}

#[test]
fn test_validate_history_taxonomy() {
    let date = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();

    let ok = vec![PricePoint::new(date, 100.0)];
    assert!(validate_history(&ok).is_ok());

    let zero = vec![PricePoint::new(date, 0.0)];
    assert!(matches!(
        validate_history(&zero).unwrap_err(),
        ForecastError::InvalidHistory(_)
    ));

    let infinite = vec![PricePoint::new(date, f64::INFINITY)];
    assert!(matches!(
        validate_history(&infinite).unwrap_err(),
        ForecastError::InvalidHistory(_)
    ));

    // An empty history is valid in itself; length checks happen per call
    assert!(validate_history(&[]).is_ok());
}
