use std::sync::{Arc, RwLock};
use std::thread;

use lostfound::{
    Category, Details, FilterQuery, ItemKind, ItemStatus, LostFound, MatchProbe, ReportRequest,
};

fn report(category: &str, event_time: &str, location: &str, pairs: &[(&str, &str)]) -> ReportRequest {
    ReportRequest {
        person_name: "Alex Kim".into(),
        contact_info: "alex@example.com".into(),
        category: category.into(),
        event_time: event_time.into(),
        location: location.into(),
        details: pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<Details>(),
        additional_info: String::new(),
    }
}

#[test]
fn lost_iphone_finds_its_match_across_collections() {
    let mut service = LostFound::new();

    let lost = service
        .report_item(
            ItemKind::Lost,
            report(
                "Smartphone",
                "2023-04-15 14:30",
                "UB, Floor 4 (Main Floor)",
                &[("brand", "Apple"), ("model", "iPhone 13"), ("color", "Black")],
            ),
        )
        .unwrap();
    let found = service
        .report_item(
            ItemKind::Found,
            report(
                "Smartphone",
                "2023-04-15 16:00",
                "UB",
                &[("brand", "apple"), ("model", "iphone 13"), ("color", "BLACK")],
            ),
        )
        .unwrap();
    service
        .report_item(
            ItemKind::Found,
            report("Wallet", "2023-04-15 16:00", "UB", &[("color", "Black")]),
        )
        .unwrap();

    let hits = service.find_matches(ItemKind::Lost, &lost.id).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].item.id, found.id);
    assert_eq!(hits[0].score, 35);
    assert!(hits[0].score >= 30);

    // Matching from the found side ranks the lost report the same way.
    let reverse = service.find_matches(ItemKind::Found, &found.id).unwrap();
    assert_eq!(reverse.len(), 1);
    assert_eq!(reverse[0].item.id, lost.id);
    assert_eq!(reverse[0].score, 35);
}

#[test]
fn closing_a_report_removes_it_from_candidates() {
    let mut service = LostFound::new();
    service.seed_sample_data().unwrap();

    let before = service.find_matches(ItemKind::Lost, "sample-lost-1").unwrap();
    assert_eq!(before.len(), 1);
    assert_eq!(before[0].item.id, "sample-found-2");

    let updated = service
        .set_status(ItemKind::Found, "sample-found-2", ItemStatus::Closed)
        .unwrap();
    assert_eq!(updated.status, ItemStatus::Closed);

    let after = service.find_matches(ItemKind::Lost, "sample-lost-1").unwrap();
    assert!(after.is_empty());
}

#[test]
fn wallet_filter_returns_only_wallets_in_order() {
    let mut service = LostFound::new();
    let colors = ["Brown", "Red", "Black"];
    for (i, color) in colors.iter().enumerate() {
        service
            .report_item(
                ItemKind::Lost,
                report("Wallet", "2023-04-16 09:15", "Cafeteria", &[("color", color)]),
            )
            .unwrap();
        service
            .report_item(
                ItemKind::Lost,
                report("Keys", "2023-04-16 09:15", "Cafeteria", &[("number_of_keys", i.to_string().as_str())]),
            )
            .unwrap();
    }

    let wallets = service.filter_items(
        ItemKind::Lost,
        &FilterQuery::new().with_category(Category::Wallet),
    );
    let got: Vec<&str> = wallets.iter().map(|i| i.details["color"].as_str()).collect();
    assert_eq!(got, colors);
    assert!(wallets.iter().all(|i| i.category == Category::Wallet));
}

#[test]
fn empty_filter_returns_whole_collection() {
    let mut service = LostFound::new();
    service.seed_sample_data().unwrap();
    let all = service.filter_items(ItemKind::Found, &FilterQuery::default());
    assert_eq!(all, service.list_items(ItemKind::Found));
}

#[test]
fn date_and_location_search_over_sample_data() {
    let mut service = LostFound::new();
    service.seed_sample_data().unwrap();

    let on_15th = service.filter_items(
        ItemKind::Lost,
        &FilterQuery::new().with_date_range(Some("2023-04-15"), Some("2023-04-15")),
    );
    assert_eq!(on_15th.len(), 1);
    assert_eq!(on_15th[0].id, "sample-lost-1");

    let main_building = service.filter_items(
        ItemKind::Found,
        &FilterQuery::new().with_building("main building"),
    );
    assert_eq!(main_building.len(), 1);
    assert_eq!(main_building[0].category, Category::Keys);
}

#[test]
fn probe_search_without_filing_a_report() {
    let mut service = LostFound::new();
    service.seed_sample_data().unwrap();

    let mut details = Details::new();
    details.insert("color".into(), "silver".into());
    details.insert("distinguishing_features".into(), "blue".into());
    let probe = MatchProbe {
        category: Category::Keys,
        details,
        location: String::new(),
    };

    let hits = service.search(&probe, ItemKind::Found);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].item.id, "sample-found-1");
    // silver exact, "blue" inside "Blue keychain", empty location inside "Main Building".
    assert_eq!(hits[0].score, 20);
}

#[test]
fn catalog_walk_from_facade() {
    let service = LostFound::new();
    assert_eq!(service.list_floors("UB"), vec!["1", "2", "4", "6"]);
    assert_eq!(service.list_floors("Meenakshi"), vec!["Ground"]);
    assert!(service.list_floors("Nowhere").is_empty());

    let java = service.list_locations("Java", "");
    assert_eq!(java.len(), 1);
    assert_eq!(java[0].floor_number, "");
}

#[test]
fn concurrent_reports_behind_one_lock() {
    let service = Arc::new(RwLock::new(LostFound::new()));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                for i in 0..25 {
                    let kind = if (t + i) % 2 == 0 { ItemKind::Lost } else { ItemKind::Found };
                    service
                        .write()
                        .unwrap()
                        .report_item(
                            kind,
                            report("Bag", "2023-04-17", "Library", &[("color", "Green")]),
                        )
                        .unwrap();
                    let _ = service
                        .read()
                        .unwrap()
                        .filter_items(kind, &FilterQuery::new().with_text("green"));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let service = service.read().unwrap();
    let lost = service.list_items(ItemKind::Lost).len();
    let found = service.list_items(ItemKind::Found).len();
    assert_eq!(lost + found, 200);
    assert_eq!(lost, 100);
}
