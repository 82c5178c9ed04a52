use std::path::PathBuf;

use comfy_table::{ContentArrangement, Table};

pub fn run(world: Option<PathBuf>) -> Result<(), String> {
    let world = super::load_world(world)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Label", "Name", "Items", "Exits"]);

    for room in world.rooms() {
        let label = if room.label == world.meta.start {
            format!("{} (start)", room.label)
        } else {
            room.label.clone()
        };
        let exits: Vec<String> = room
            .exits
            .values()
            .map(|e| format!("{} -> {}", e.direction.abbreviation(), e.destination))
            .collect();

        table.add_row(vec![
            label,
            room.name.clone(),
            room.items.len().to_string(),
            exits.join(", "),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} rooms", world.room_count());

    Ok(())
}
