//! Distance and heading between a couple of positions in the Baltic sea.
//!
//! Run with `RUST_LOG=geodistance=trace` to see the intermediate values.

use geodistance::{convert_dms_to_decimal_degrees, DmsPosition, GeoPosition};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut geo = GeoPosition::new(60.567, 19.011, 61.123, 20.789);
    println!("\nGiven latitude and longitude positions:");
    println!("{geo:#?}");

    match geo.project() {
        Ok(heading) => {
            println!("\nDistance and heading rounded to the default (0) decimal precision:");
            println!("{heading:#?}");
        }
        Err(err) => println!("Projection failed: {err}"),
    }

    println!("\nConvert from degrees, minutes and seconds to decimal degrees. Then get distance and heading");

    let lat: DmsPosition = "59°18.1′N".parse()?;
    println!("Given latitude position: {lat} ({lat:?})");
    geo.tgt_latitude = convert_dms_to_decimal_degrees(&lat)?;

    let lon = DmsPosition::with_label("East", 18.0, 36.9, 0.0);
    println!("Given longitude position: {lon} ({lon:?})");
    geo.tgt_longitude = convert_dms_to_decimal_degrees(&lon)?;

    let geo = geo.with_precision(2);
    match geo.project() {
        Ok(heading) => {
            println!("\nDistance and heading rounded to two decimals:");
            println!("{heading:#?}");
            let bounds: Vec<_> = heading.bounds().iter().map(|d| format!("{d:#}")).collect();
            println!("Heading {}", bounds.join("-"));
        }
        Err(err) => println!("Projection failed: {err}"),
    }

    Ok(())
}
