use crate::config::Config;
use crate::db::{AnimeRow, Database};
use crate::table;
use anyhow::{Context, Result};
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use tracing::debug;

const MENU_ITEMS: [&str; 7] = [
    "Add anime",
    "View all anime",
    "Filter by category",
    "Pick random anime to watch",
    "Mark anime as seen",
    "Delete anime",
    "Quit",
];

pub fn run_shell(config: &Config) -> Result<()> {
    let database = Database::open(&config.db_path)?;
    debug!(path = %config.db_path.display(), "anime database opened");

    println!("──────────────────────────────────────────");
    println!("  anidex — personal anime watchlist");
    println!("──────────────────────────────────────────");

    let theme = ColorfulTheme::default();

    loop {
        println!();
        let choice = Select::with_theme(&theme)
            .with_prompt("Choose an action")
            .default(0)
            .items(&MENU_ITEMS)
            .interact()
            .context("Failed to read menu choice")?;

        match choice {
            0 => prompt_add(&theme, &database)?,
            1 => print_records(&database.list_all()?),
            2 => prompt_filter(&theme, &database)?,
            3 => print_random_pick(&database)?,
            4 => {
                let id = prompt_id(&theme, "Enter ID to mark as seen")?;
                database.mark_seen(id)?;
                println!("Marked #{id} as seen");
            }
            5 => {
                let id = prompt_id(&theme, "Enter ID to delete")?;
                database.delete(id)?;
                println!("Deleted #{id}");
            }
            _ => break,
        }
    }

    database.close()?;
    println!("Goodbye!");

    Ok(())
}

pub fn print_records(rows: &[AnimeRow]) {
    if rows.is_empty() {
        println!("No records.");
        return;
    }

    let cells = rows.iter().map(table::record_cells).collect::<Vec<_>>();
    println!("{}", table::render(&table::RECORD_HEADERS, &cells));
}

pub fn print_random_pick(database: &Database) -> Result<()> {
    match database.pick_random_unseen_finished()? {
        Some(row) => {
            println!("Random anime you can watch:");
            print_records(&[row]);
        }
        None => {
            println!("No anime that has finished airing and is still unseen could be found.");
        }
    }

    Ok(())
}

fn prompt_add(theme: &ColorfulTheme, database: &Database) -> Result<()> {
    let name: String = Input::with_theme(theme)
        .with_prompt("Enter name")
        .interact_text()
        .context("Failed to read anime name")?;

    let category: String = Input::with_theme(theme)
        .with_prompt("Enter category")
        .interact_text()
        .context("Failed to read category")?;

    let finished = Confirm::with_theme(theme)
        .with_prompt("Has the anime finished airing?")
        .default(false)
        .interact()
        .context("Failed to read finished flag")?;

    let rating: f64 = Input::with_theme(theme)
        .with_prompt("Enter rating")
        .interact_text()
        .context("Failed to read rating")?;

    let id = database.insert_anime(&name, &category, finished, rating)?;
    println!("Added #{id}: {name}");

    Ok(())
}

fn prompt_filter(theme: &ColorfulTheme, database: &Database) -> Result<()> {
    let category: String = Input::with_theme(theme)
        .with_prompt("Enter category")
        .interact_text()
        .context("Failed to read category")?;

    print_records(&database.list_by_category(&category)?);

    Ok(())
}

fn prompt_id(theme: &ColorfulTheme, prompt: &str) -> Result<i64> {
    Input::with_theme(theme)
        .with_prompt(prompt)
        .interact_text()
        .context("Failed to read anime ID")
}
