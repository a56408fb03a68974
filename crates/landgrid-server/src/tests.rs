//! Endpoint tests against a live server on an OS-assigned port.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use landgrid_view::LandModel;

use crate::LandServer;

fn start() -> (LandServer, Arc<LandModel>, String) {
    let model = Arc::new(LandModel::standard().unwrap());
    let mut server = LandServer::new("127.0.0.1", 0); // port 0 = OS assigns
    server.start(Arc::clone(&model)).unwrap();

    // Give server a moment to start
    thread::sleep(Duration::from_millis(100));

    let base = format!("http://localhost:{}", server.actual_port());
    (server, model, base)
}

fn get_json(url: &str) -> serde_json::Value {
    let resp = ureq::get(url).call().unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.header("Content-Type").unwrap(), "application/json");
    resp.into_json().unwrap()
}

fn status_of(result: Result<ureq::Response, ureq::Error>) -> u16 {
    match result {
        Ok(resp) => resp.status(),
        Err(ureq::Error::Status(code, _)) => code,
        Err(e) => panic!("transport error: {e}"),
    }
}

#[test]
fn test_health() {
    let (mut server, _, base) = start();
    let body = get_json(&format!("{base}/health"));
    assert_eq!(body["status"], "ok");
    assert_eq!(body["parcels"], 48);
    server.stop().unwrap();
}

#[test]
fn test_parcel_detail() {
    let (mut server, _, base) = start();
    let body = get_json(&format!("{base}/parcels/0xAB12CD"));
    assert_eq!(body["id"], "0xAB12CD");
    assert_eq!(body["land_use"], "residential");
    assert_eq!(body["value_with_buildings"], 77_000);
    assert_eq!(body["value_without_buildings"], 3_850);
    assert_eq!(body["land_value_tax"]["amount"], 1_050);

    let missing = ureq::get(&format!("{base}/parcels/0xNOPE")).call();
    assert_eq!(status_of(missing), 404);
    server.stop().unwrap();
}

#[test]
fn test_post_zoning_updates_shared_model() {
    let (mut server, model, base) = start();
    let resp = ureq::post(&format!("{base}/zoning"))
        .set("Content-Type", "application/json")
        .send_string(r#"{"parcel": "0xAB12CD", "category": "commercial"}"#)
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.into_json().unwrap();
    assert_eq!(body["0xAB12CD"], "commercial");
    assert_eq!(body.as_object().unwrap().len(), 48);

    assert_eq!(
        model.zoning().get("0xAB12CD"),
        Some(landgrid_registry::ZoningCategory::Commercial)
    );
    let zoning = get_json(&format!("{base}/zoning"));
    assert_eq!(zoning["0xAB12CD"], "commercial");
    server.stop().unwrap();
}

#[test]
fn test_post_zoning_errors() {
    let (mut server, model, base) = start();
    let before = model.zoning();

    let unknown = ureq::post(&format!("{base}/zoning"))
        .send_string(r#"{"parcel": "0xNOPE", "category": "commercial"}"#);
    assert_eq!(status_of(unknown), 404);

    let bad_category = ureq::post(&format!("{base}/zoning"))
        .send_string(r#"{"parcel": "0xAB12CD", "category": "industrial"}"#);
    assert_eq!(status_of(bad_category), 400);

    let garbage = ureq::post(&format!("{base}/zoning")).send_string("{{not json");
    assert_eq!(status_of(garbage), 400);

    assert_eq!(model.zoning(), before);
    server.stop().unwrap();
}

#[test]
fn test_tiles_by_view() {
    let (mut server, _, base) = start();
    let tiles = get_json(&format!("{base}/tiles?view=zoning&selected=0xAB12CD"));
    let tiles = tiles.as_array().unwrap();
    assert_eq!(tiles.len(), 225);
    let centre = &tiles[8 * 15 + 8];
    assert_eq!(centre["plot_id"], "0xAB12CD");
    assert_eq!(centre["color"], "#2ECC40");
    assert_eq!(centre["highlight"], "selected");

    let base_view = get_json(&format!("{base}/tiles"));
    assert_eq!(base_view[0]["color"], "#4ADE80");

    let bad = ureq::get(&format!("{base}/tiles?view=height")).call();
    assert_eq!(status_of(bad), 400);
    server.stop().unwrap();
}

#[test]
fn test_tax_range() {
    let (mut server, _, base) = start();
    let body = get_json(&format!("{base}/tax-range"));
    assert_eq!(body["min"], 525);
    assert_eq!(body["max"], 4_988);
    server.stop().unwrap();
}

#[test]
fn test_unknown_endpoint_returns_404() {
    let (mut server, _, base) = start();
    let resp = ureq::get(&format!("{base}/nonexistent")).call();
    assert_eq!(status_of(resp), 404);
    server.stop().unwrap();
}

#[test]
fn test_concurrent_writers_last_write_wins() {
    let (mut server, model, base) = start();
    let writers: Vec<_> = ["commercial", "agricultural", "residential", "commercial"]
        .into_iter()
        .map(|category| {
            let url = format!("{base}/zoning");
            thread::spawn(move || {
                ureq::post(&url)
                    .send_string(&format!(
                        r#"{{"parcel": "0xFB56HT", "category": "{category}"}}"#
                    ))
                    .unwrap()
                    .status()
            })
        })
        .collect();
    for writer in writers {
        assert_eq!(writer.join().unwrap(), 200);
    }
    // Whichever write landed last, the map is whole and holds a valid zone.
    let snapshot = model.zoning();
    assert_eq!(snapshot.len(), 48);
    assert!(snapshot.get("0xFB56HT").is_some());
    server.stop().unwrap();
}
