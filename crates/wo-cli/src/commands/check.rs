use std::path::PathBuf;

pub fn run(world: Option<PathBuf>) -> Result<(), String> {
    let world = super::load_world(world)?;

    println!("  All checks passed for '{}'.", world.meta.name);
    println!(
        "  {} rooms, {} items, {} exits",
        world.room_count(),
        world.item_count(),
        world.exit_count()
    );

    Ok(())
}
