use std::env;
use std::fs;
use std::path::Path;

// Fallback sample used when the fixture file is absent, so the app
// always builds with some data embedded.
const FALLBACK_CSV: &str = "\
Order Date,Category,Sub Category,City,Region,Customer Name,Sales,Profit,Discount
2022-01-01,Snacks,Chips,Vellore,South,Amrish,100,25,0.10
2022-01-02,Snacks,Noodles,Chennai,South,Verma,50,10,0.20
";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("supermart_sales.csv");

    // Copy the dataset fixture to OUT_DIR for include_str!, sanity
    // checking that it is parseable CSV with a header row first.
    let src = Path::new("../fixtures/supermart_sales.csv");
    if src.exists() {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(src)
            .expect("Failed to open supermart_sales.csv");
        let rows = rdr.records().filter_map(|r| r.ok()).count();
        assert!(rows > 0, "supermart_sales.csv has no data rows");
        fs::copy(src, &dest).unwrap();
    } else {
        fs::write(&dest, FALLBACK_CSV).unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/supermart_sales.csv");
}
