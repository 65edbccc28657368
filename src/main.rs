use std::error::Error;

use lostfound::{ItemKind, LostFound, LostFoundConfig};

fn main() -> Result<(), Box<dyn Error>> {
    let mut cfg = match std::env::args().nth(1) {
        Some(path) => LostFoundConfig::from_file(path)?,
        None => LostFoundConfig::default(),
    };
    cfg.seed_sample_data = true;

    let service = LostFound::from_config(&cfg)?;

    println!("Buildings: {}", service.list_buildings().join(", "));

    for lost in service.list_items(ItemKind::Lost) {
        if !lost.is_open() {
            continue;
        }
        println!(
            "\nLost {} ({}) at {}:",
            lost.category, lost.id, lost.location
        );
        let hits = service.find_matches(ItemKind::Lost, &lost.id)?;
        if hits.is_empty() {
            println!("  no candidates yet");
        }
        for hit in hits {
            println!(
                "  #{} score={} {} found at {} (contact {})",
                hit.rank, hit.score, hit.item.id, hit.item.location, hit.item.contact_info
            );
        }
    }

    Ok(())
}
