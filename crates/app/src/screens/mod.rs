//! Interactive screens. Each screen owns its prompt loop and returns the
//! next route; `:back` and `:quit` work at any prompt, and a closed stdin
//! quits.

use std::io::Write;

use anyhow::Result;
use tokio::io::{BufReader, Lines, Stdin};

use crate::router::Route;
use crate::App;

mod dashboard;
mod login;
mod register;

pub use dashboard::dashboard;
pub use login::login;
pub use register::register;

pub type InputLines = Lines<BufReader<Stdin>>;

pub(crate) enum Entry {
    Value(String),
    Back,
    Quit,
}

pub(crate) async fn read_entry(lines: &mut InputLines, label: &str) -> Result<Entry> {
    print!("{label}");
    std::io::stdout().flush()?;
    match lines.next_line().await? {
        None => Ok(Entry::Quit),
        Some(line) if line.trim() == ":quit" => Ok(Entry::Quit),
        Some(line) if line.trim() == ":back" => Ok(Entry::Back),
        Some(line) => Ok(Entry::Value(line)),
    }
}

/// Message key for a field's prompt label.
pub(crate) fn label_key<'a>(field: &'a str) -> &'a str {
    match field {
        "firstName" => "register-firstname",
        "lastName" => "register-lastname",
        "passwordConfirm" => "register-password-confirm",
        _ => field,
    }
}

/// Entry menu.
pub async fn home(app: &App, lines: &mut InputLines) -> Result<Route> {
    let m = &app.messages;
    println!();
    println!("== {}", m.get("home-title"));
    match read_entry(lines, &format!("{} > ", m.get("home-menu"))).await? {
        Entry::Quit => Ok(Route::Quit),
        Entry::Back => Ok(Route::Home),
        Entry::Value(choice) => match choice.trim() {
            "1" => Ok(Route::Login),
            "2" => Ok(Route::Register),
            "3" => Ok(Route::Dashboard),
            "q" => Ok(Route::Quit),
            _ => {
                println!("{}", m.get("home-invalid"));
                Ok(Route::Home)
            }
        },
    }
}
