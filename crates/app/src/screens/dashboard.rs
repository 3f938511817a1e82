use anyhow::Result;
use tracing::warn;

use common::pagination::PageQuery;

use super::{read_entry, Entry, InputLines};
use crate::router::Route;
use crate::App;

/// Paginated product dashboard.
pub async fn dashboard(app: &App, lines: &mut InputLines) -> Result<Route> {
    let m = &app.messages;
    let mut page = PageQuery { page: 1, limit: app.page_size };
    let mut known_pages: Option<u32> = None;

    loop {
        println!();
        println!("== {}", m.get("dashboard-title"));
        match app.api.products(page).await {
            Ok(listing) => {
                if listing.products.is_empty() {
                    println!("{}", m.get("dashboard-empty"));
                }
                for product in &listing.products {
                    println!(
                        "- {}  {:.2} {}  ({} {})",
                        product.translations.data.name,
                        product.price,
                        m.get("price-currency"),
                        product.stock,
                        m.get("in-stock"),
                    );
                }
                let meta = &listing.pagination;
                known_pages = meta.pages;
                match meta.pages {
                    Some(pages) => println!("[{} / {}]", meta.page, pages),
                    None => println!("[{}]", meta.page),
                }
            }
            Err(err) => {
                warn!(error = %err, "catalog fetch failed");
                println!("!! {}: {}", m.get("catalog-error"), err);
            }
        }

        match read_entry(lines, &format!("{} > ", m.get("dashboard-nav"))).await? {
            Entry::Quit => return Ok(Route::Quit),
            Entry::Back => return Ok(Route::Home),
            Entry::Value(command) => match command.trim() {
                "n" => {
                    if known_pages.map_or(true, |pages| page.page < pages) {
                        page.page += 1;
                    }
                }
                "p" => {
                    if page.page > 1 {
                        page.page -= 1;
                    }
                }
                "q" => return Ok(Route::Home),
                _ => println!("{}", m.get("home-invalid")),
            },
        }
    }
}
