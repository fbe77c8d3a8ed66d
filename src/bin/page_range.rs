//! Prints the pagination entries for a listing as JSON.
//!
//! Usage: `page_range <page> <total_items> [base_path]`

use std::env;
use std::path::Path;

use dotenvy::dotenv;

use decor_pagination::domain::types::PerPage;
use decor_pagination::models::config::load_settings;
use decor_pagination::pagination::Paginated;

fn parse_arg(args: &[String], index: usize, name: &str) -> usize {
    match args.get(index).map(|value| value.parse::<usize>()) {
        Some(Ok(value)) => value,
        Some(Err(err)) => {
            log::error!("Invalid {name}: {err}");
            std::process::exit(2);
        }
        None => {
            log::error!("Usage: page_range <page> <total_items> [base_path]");
            std::process::exit(2);
        }
    }
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = match load_settings(Path::new("config"), &app_env) {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    };

    let args: Vec<String> = env::args().collect();
    let page = parse_arg(&args, 1, "page");
    let total_items = parse_arg(&args, 2, "total_items");
    let base_path = args.get(3).map(String::as_str).unwrap_or("/");

    let per_page = match PerPage::new(settings.default_per_page, settings.max_per_page) {
        Ok(per_page) => per_page,
        Err(err) => {
            log::error!("Invalid page size: {err}");
            std::process::exit(1);
        }
    };
    let total_pages = per_page.total_pages(total_items);
    log::info!(
        "Computing page {page} of {total_pages} ({total_items} items, {} per page)",
        per_page.get()
    );

    let paginated = Paginated::new(Vec::<()>::new(), page, total_pages, |index| {
        format!("{base_path}?page={index}")
    });

    match serde_json::to_string_pretty(&paginated) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            log::error!("Failed to serialize pages: {err}");
            std::process::exit(1);
        }
    }
}
