//! Load a catalog file and report how complete its detail columns are.
//!
//! ```text
//! cargo run -p catalog --example load_catalog -- data/movies.jsonl "Heat"
//! ```

use catalog::{MovieCatalog, columns};
use std::path::PathBuf;
use std::time::Instant;

const DETAIL_COLUMNS: [&str; 9] = [
    columns::TITLE,
    columns::YEAR,
    columns::DIRECTORS,
    columns::CAST,
    columns::PRODUCTION_COMPANIES,
    columns::OVERVIEW,
    columns::GENRES,
    columns::RUNTIME,
    columns::VOTE_AVERAGE,
];

fn main() {
    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/movies.jsonl"));
    let lookup = args.next();

    let start = Instant::now();
    let catalog = MovieCatalog::load_from_file(&path).expect("Failed to load catalog");
    let elapsed = start.elapsed();

    println!("{} rows from {} in {:?}", catalog.len(), path.display(), elapsed);

    println!("\nColumn coverage:");
    for column in DETAIL_COLUMNS {
        let present = catalog
            .rows()
            .iter()
            .filter(|row| row.get(column).is_some_and(|v| !v.is_missing()))
            .count();
        let share = 100.0 * present as f64 / catalog.len().max(1) as f64;
        println!("  {column:<22} {present:>8} ({share:.1}%)");
    }

    if let Some(title) = lookup {
        let hit = catalog
            .find_exact(&title)
            .map(|id| ("exact", id))
            .or_else(|| catalog.find_containing(&title).map(|id| ("substring", id)));
        match hit {
            Some((kind, id)) => println!("\n{title:?}: {kind} match at row {id}"),
            None => println!("\n{title:?}: no match"),
        }
    }
}
