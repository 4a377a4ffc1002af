//! Interactive store inventory menu.
//!
//! Thin adapter over the catalog: reads menu choices from stdin, maps each
//! one onto a catalog operation, and prints the formatter output. Holds no
//! inventory logic of its own.

use clap::Parser;
use std::io::{self, BufRead, Write};
use store_inventory::{
    format_all_items, format_by_category, format_sale_report, format_search_results,
    is_perishable_category, load_catalog, save_catalog, Catalog, Item, SellRequest,
};

/// Store inventory manager - tracks items and persists the catalog to a file
#[derive(Parser, Debug)]
#[command(name = "store_inventory")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the catalog file used by save/load
    #[arg(short, long, default_value = "items.txt")]
    catalog: String,

    /// Start with the five demo items pre-loaded
    #[arg(long, default_value_t = false)]
    seed: bool,
}

const MENU: &str = "\
1. Add Item
2. Save Items to File
3. Load Items from File
4. View Items by Category
5. View All Items
6. Search for an Item
7. Delete an Item
8. Sell Items
9. Exit
Choose an option: ";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut catalog = Catalog::new();
    if args.seed {
        seed_demo_items(&mut catalog);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let Some(choice) = prompt(&mut lines, MENU) else {
            break;
        };
        match choice.trim() {
            "1" => add_item(&mut lines, &mut catalog),
            "2" => match save_catalog(&args.catalog, &catalog) {
                Ok(()) => println!("Items saved to {}.", args.catalog),
                Err(e) => println!("Failed to save items: {e}"),
            },
            "3" => match load_catalog(&args.catalog, &mut catalog) {
                Ok(count) => println!("Loaded {count} item(s) from {}.", args.catalog),
                Err(e) => println!("Failed to load items: {e}"),
            },
            "4" => print!("{}", format_by_category(&catalog)),
            "5" => print!("{}", format_all_items(&catalog)),
            "6" => {
                if let Some(name) = prompt(&mut lines, "Enter item name to search: ") {
                    print!("{}", format_search_results(&catalog.search(name.trim())));
                }
            }
            "7" => {
                if let Some(name) = prompt(&mut lines, "Enter item name to delete: ") {
                    match catalog.delete(name.trim()) {
                        Ok(_) => println!("Item deleted successfully."),
                        Err(e) => println!("{e}"),
                    }
                }
            }
            "8" => sell_items(&mut lines, &mut catalog),
            "9" => break,
            _ => println!("Invalid option. Please try again."),
        }
    }
}

type InputLines<'a> = io::Lines<io::StdinLock<'a>>;

/// Prints a prompt and reads the next input line. None means end of input.
fn prompt(lines: &mut InputLines, message: &str) -> Option<String> {
    print!("{message}");
    let _ = io::stdout().flush();
    lines.next()?.ok()
}

fn add_item(lines: &mut InputLines, catalog: &mut Catalog) {
    let Some(name) = prompt(lines, "Enter item name: ") else {
        return;
    };
    let Some(category) = prompt(lines, "Enter category: ") else {
        return;
    };
    let category = category.trim().to_string();

    let Some(price_input) = prompt(lines, "Enter price: ") else {
        return;
    };
    let Ok(price) = price_input.trim().parse::<f64>() else {
        println!("Invalid price. Item not added.");
        return;
    };

    let Some(quantity_input) = prompt(lines, "Enter quantity: ") else {
        return;
    };
    let Ok(quantity) = quantity_input.trim().parse::<i32>() else {
        println!("Invalid quantity. Item not added.");
        return;
    };

    let expiration_date = if is_perishable_category(&category) {
        prompt(lines, "Enter expiration date: ").map(|d| d.trim().to_string())
    } else {
        None
    };

    catalog.add(Item::new(
        name.trim(),
        category,
        price,
        quantity,
        expiration_date,
    ));
    println!("Item added.");
}

fn sell_items(lines: &mut InputLines, catalog: &mut Catalog) {
    println!("Enter items to sell, one per line as 'name quantity' (blank line to finish):");
    let mut requests = Vec::new();
    while let Some(line) = prompt(lines, "> ") {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        // Quantity is the last token, so names may contain spaces
        match line.rsplit_once(' ') {
            Some((name, quantity)) => match quantity.trim().parse::<i32>() {
                Ok(quantity) => requests.push(SellRequest::new(name.trim(), quantity)),
                Err(_) => println!("Invalid quantity in '{line}', line skipped."),
            },
            None => println!("Expected 'name quantity', line skipped."),
        }
    }
    print!("{}", format_sale_report(&catalog.sell(&requests)));
}

/// The well-known demo inventory from the legacy program.
fn seed_demo_items(catalog: &mut Catalog) {
    let demo = [
        ("Milk", "dairy", 1.5, 10, Some("2024-06-10".to_string())),
        ("Bread", "bakery", 1.2, 20, Some("2024-06-08".to_string())),
        ("Apples", "fruits", 2.0, 15, None),
        ("Pasta", "pasta", 1.0, 30, None),
        ("Soap", "household", 0.8, 25, None),
    ];
    for (name, category, price, quantity, expiration_date) in demo {
        catalog.add(Item::new(name, category, price, quantity, expiration_date));
    }
    log::info!("Seeded {} demo items", catalog.len());
}
