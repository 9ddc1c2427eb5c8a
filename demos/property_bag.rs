use sovran_variant::{make_variant, Variant, VariantError};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq)]
struct Size {
    width: u32,
    height: u32,
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Size { width, height }
    }
}

fn main() -> Result<(), VariantError> {
    // A settings table where every entry may hold a different type
    let mut settings: BTreeMap<&str, Variant> = BTreeMap::new();
    settings.insert("title", Variant::from_value::<String>("Untitled"));
    settings.insert("size", make_variant::<Size, _>((800, 600)));
    settings.insert("fullscreen", Variant::with_value(false));
    settings.insert("recent", Variant::new());

    for (key, value) in &settings {
        println!("{:>10}: {:?}", key, value);
    }

    let size = settings["size"].try_value::<Size>()?;
    println!("Window is {}x{}", size.width, size.height);

    // Snapshot before changing anything
    let snapshot = settings.clone();

    if let Some(title) = settings.get_mut("title") {
        title.set_value("Report.txt".to_string());
    }
    if let Some(recent) = settings.get_mut("recent") {
        recent.set_value(vec!["Report.txt".to_string()]);
    }

    println!("Title now: {}", settings["title"].try_value::<String>()?);
    println!("Title in snapshot: {}", snapshot["title"].try_value::<String>()?);

    // Reading with the wrong type is reported, not guessed
    match settings["fullscreen"].try_value::<u8>() {
        Ok(value) => println!("Fullscreen: {}", value),
        Err(e) => println!("Error reading fullscreen: {}", e),
    }

    // Moving an entry out leaves an empty slot behind
    if let Some(slot) = settings.get_mut("recent") {
        let moved = slot.take();
        println!(
            "Moved {} entries, slot empty: {}",
            moved.try_value::<Vec<String>>()?.len(),
            slot.is_empty()
        );
    }

    Ok(())
}
