use csv::ReaderBuilder;

use crate::error::SearchError;
use crate::model::RecipeRecord;

/// Parse raw CSV bytes into recipe records.
///
/// The first row is the header and fields are keyed by header name, so column
/// order does not matter and unknown columns are ignored. Short rows are
/// tolerated: missing trailing fields become empty strings. Blank lines are
/// skipped. Anything the reader cannot turn into a valid record (such as a
/// field that is not UTF-8) fails the whole parse; no partial dataset is
/// ever returned.
pub fn parse_records(raw: &[u8]) -> Result<Vec<RecipeRecord>, SearchError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(raw);

    let headers = reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h == name);
    let columns = [
        column("name"),
        column("ingredients"),
        column("dietary"),
        column("cuisine"),
        column("instructions"),
        column("images"),
    ];

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let field = |idx: Option<usize>| {
            idx.and_then(|i| row.get(i)).unwrap_or("").to_string()
        };
        records.push(RecipeRecord {
            name: field(columns[0]),
            ingredients: field(columns[1]),
            dietary: field(columns[2]),
            cuisine: field(columns[3]),
            instructions: field(columns[4]),
            images: field(columns[5]),
        });
    }

    Ok(records)
}
