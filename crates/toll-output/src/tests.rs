//! Tests for toll-output.

use toll_core::VehicleType;
use toll_sim::{PricingPolicy, TollConfig, TripQuote, TripRequest, TripSimulator};

fn quote(config: &TollConfig, start: &str, end: &str, vehicle: VehicleType) -> TripQuote {
    TripSimulator::new(config, 42)
        .quote(&TripRequest::new(start, end, vehicle))
        .unwrap()
}

/// Meerut → Mathura with every line item discounted.
fn discounted_quote(config: &TollConfig) -> TripQuote {
    let policy = PricingPolicy { discount_probability: 1.0, ..PricingPolicy::default() };
    TripSimulator::new(config, 42)
        .with_policy(policy)
        .unwrap()
        .quote(&TripRequest::new("Meerut", "Mathura", VehicleType::Car))
        .unwrap()
}

#[cfg(test)]
mod text {
    use toll_core::VehicleType;
    use toll_sim::TollConfig;

    use crate::{OutputWriter, TextWriter, render_text, write_text};
    use super::quote;

    #[test]
    fn sections_in_order() {
        let config = TollConfig::reference();
        let text = render_text(&quote(&config, "Meerut", "Mathura", VehicleType::Car));
        let pos = |needle: &str| text.find(needle).unwrap_or_else(|| panic!("missing {needle:?}"));
        let a = pos("-- Dynamic Pricing Information --");
        let b = pos("-- Speed Information --");
        let c = pos("-- Toll Information --");
        let d = pos("-- Total Amount --");
        assert!(a < b && b < c && c < d);
    }

    #[test]
    fn toll_lines_and_totals() {
        let config = TollConfig::reference();
        let q = quote(&config, "Meerut", "Mathura", VehicleType::Car);
        let text = render_text(&q);
        assert!(text.contains("Zone 1: Distance: 22.27 km, Cost: "), "{text}");
        assert!(text.contains("Zone 4: Distance: 44.54 km, Cost: "), "{text}");
        assert!(text.contains("Total Distance: 165.94 km"), "{text}");
        assert!(text.contains(&format!("Final Amount: {:.2} INR", q.final_amount)));
        assert!(text.contains("Section A - Speed Limit: 80 km/h"));
        for loc in ["Meerut", "Mathura", "Gurugram", "Agra"] {
            assert!(text.contains(&format!("\n{loc}: ")), "no congestion line for {loc}");
        }
    }

    #[test]
    fn ambulance_has_no_limit() {
        let config = TollConfig::reference();
        let text = render_text(&quote(&config, "Agra", "Meerut", VehicleType::Ambulance));
        assert!(text.contains("Section B - Speed Limit: No limit"));
        assert!(!text.contains("Speeding violation"));
    }

    #[test]
    fn same_place_trip_says_no_zones() {
        let config = TollConfig::reference();
        let text = render_text(&quote(&config, "Agra", "Agra", VehicleType::Car));
        assert!(text.contains("No toll zones crossed"));
        assert!(text.contains("Total Distance: 0.00 km"));
    }

    #[test]
    fn write_text_matches_render() {
        let config = TollConfig::reference();
        let q = quote(&config, "Gurugram", "Agra", VehicleType::Suv);
        let mut buf = Vec::new();
        write_text(&mut buf, &q).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), render_text(&q));
    }

    #[test]
    fn text_writer_separates_reports() {
        let config = TollConfig::reference();
        let q = quote(&config, "Gurugram", "Agra", VehicleType::Suv);
        let mut w = TextWriter::new(Vec::new());
        w.write_quote(&q).unwrap();
        w.write_quote(&q).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
        let text = String::from_utf8(w.into_inner()).unwrap();
        assert_eq!(text.matches("=== GPS-Based Toll System Simulation ===").count(), 2);
        assert!(text.contains("INR\n\n=== "));
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use toll_core::VehicleType;
    use toll_sim::TollConfig;

    use crate::csv::{CsvWriter, LINE_ITEMS_FILE, TRIPS_FILE};
    use crate::writer::OutputWriter;
    use super::{discounted_quote, quote};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(TRIPS_FILE).exists());
        assert!(dir.path().join(LINE_ITEMS_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(TRIPS_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["trip", "start", "end", "vehicle", "distance_km", "rate_per_km", "total_toll", "penalty", "discount", "final_amount"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join(LINE_ITEMS_FILE)).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["trip", "zone", "distance_km", "cost", "discounted"]);
    }

    #[test]
    fn csv_rows_written_per_quote() {
        let config = TollConfig::reference();
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_quote(&discounted_quote(&config)).unwrap();
        w.write_quote(&quote(&config, "Agra", "Agra", VehicleType::Truck)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(TRIPS_FILE)).unwrap();
        let trips: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(trips.len(), 2);
        assert_eq!(&trips[0][0], "0");
        assert_eq!(&trips[0][1], "Meerut");
        assert_eq!(&trips[0][3], "Car");
        assert_eq!(&trips[0][4], "165.94");
        assert_eq!(&trips[0][8], "300.00"); // discount
        assert_eq!(&trips[1][0], "1");
        assert_eq!(&trips[1][4], "0.00");

        let mut rdr2 = csv::Reader::from_path(dir.path().join(LINE_ITEMS_FILE)).unwrap();
        let items: Vec<_> = rdr2.records().map(|r| r.unwrap()).collect();
        assert_eq!(items.len(), 2); // second trip crosses nothing
        assert_eq!(&items[0][1], "Zone 1");
        assert_eq!(&items[0][2], "22.27");
        assert_eq!(&items[0][4], "1");
        assert_eq!(&items[1][1], "Zone 4");
        assert_eq!(&items[1][2], "44.54");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }
}

#[cfg(test)]
mod map {
    use serde_json::Value;

    use toll_core::VehicleType;
    use toll_sim::TollConfig;

    use crate::{Geometry, MapDocument};
    use super::quote;

    #[test]
    fn feature_inventory() {
        let config = TollConfig::reference();
        let q = quote(&config, "Meerut", "Mathura", VehicleType::Car);
        let doc = MapDocument::from_quote(&config, &q);

        assert_eq!(doc.features_of("start").count(), 1);
        assert_eq!(doc.features_of("end").count(), 1);
        assert_eq!(doc.features_of("route").count(), 1);
        assert_eq!(doc.features_of("zone").count(), 4);
        assert_eq!(doc.features_of("zone_center").count(), 4);
        assert_eq!(doc.features_of("heat").count(), 4);
        assert_eq!(doc.features.len(), 15);
    }

    #[test]
    fn route_is_lon_lat_and_zones_flag_crossings() {
        let config = TollConfig::reference();
        let q = quote(&config, "Meerut", "Mathura", VehicleType::Car);
        let doc = MapDocument::from_quote(&config, &q);

        let route = doc.features_of("route").next().unwrap();
        assert_eq!(route.geometry, Geometry::LineString(vec![[77.7064, 28.9845], [77.6737, 27.4924]]));

        let crossed: Vec<_> = doc
            .features_of("zone")
            .filter(|f| f.properties["crossed"] == Value::Bool(true))
            .map(|f| f.properties["name"].as_str().unwrap().to_owned())
            .collect();
        assert_eq!(crossed, ["Zone 1", "Zone 4"]);
    }

    #[test]
    fn heat_weights_are_congestion_levels() {
        let config = TollConfig::reference();
        let q = quote(&config, "Meerut", "Agra", VehicleType::Truck);
        let doc = MapDocument::from_quote(&config, &q);
        for f in doc.features_of("heat") {
            let name = f.properties["name"].as_str().unwrap();
            let weight = f.properties["weight"].as_f64().unwrap();
            assert_eq!(Some(weight), q.congestion.level(name));
        }
    }

    #[test]
    fn json_is_a_feature_collection() {
        let config = TollConfig::reference();
        let q = quote(&config, "Gurugram", "Mathura", VehicleType::Suv);
        let doc = MapDocument::from_quote(&config, &q);
        let v: Value = serde_json::from_str(&doc.to_json_string().unwrap()).unwrap();
        assert_eq!(v["type"], "FeatureCollection");
        assert_eq!(v["features"][0]["type"], "Feature");
        assert_eq!(v["features"][0]["geometry"]["type"], "Point");
        assert_eq!(v["features"][2]["geometry"]["type"], "LineString");
        assert_eq!(v["features"][3]["geometry"]["type"], "Polygon");
        assert_eq!(v["zoom"], 7);
    }

    #[test]
    fn write_to_file() {
        let config = TollConfig::reference();
        let q = quote(&config, "Meerut", "Mathura", VehicleType::Car);
        let doc = MapDocument::from_quote(&config, &q);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trip.geojson");
        doc.write_to(&path).unwrap();
        let v: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(v["features"].as_array().unwrap().len(), 15);
    }
}
