use contact_book::prelude::*;
use contact_book::views::COLUMNS;
use dotenv::dotenv;
use log::warn;
use std::io::{self, BufRead, Write};

/// `window.confirm` for the terminal
fn ask(message: &str) -> bool {
    print!("{} [y/N] ", message);
    let _ = io::stdout().flush();
    matches!(read_line().as_deref(), Some("y") | Some("yes"))
}

fn read_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn prompt(text: &str) -> Option<String> {
    print!("{}> ", text);
    let _ = io::stdout().flush();
    read_line()
}

fn print_list(list: &ContactList<impl ContactStore>) {
    println!("\n== {} ==", list.title());
    println!("  # | {}", COLUMNS[..4].join(" | "));
    for (i, contact) in list.rows().iter().enumerate() {
        let record = &contact.record;
        println!(
            "{:>3} | {} | {} | {} | {}",
            i + 1,
            record.name,
            record.full_name,
            record.email,
            record.phone
        );
    }
    println!("commands: add | edit <#> | delete <#> | refresh | quit");
}

fn print_form(form: &ContactForm<impl ContactStore>) {
    println!("\n== {} ==", form.title());
    for field in Field::ALL {
        println!("  {:<10} {}", field.label(), form.value(field));
        if let Some(error) = form.error(field) {
            println!("             ! {}", error.message);
        }
    }
    println!(
        "commands: set <field> <value> | submit ({}) | cancel",
        form.submit_label()
    );
}

fn parse_field(key: &str) -> Option<Field> {
    Field::ALL.into_iter().find(|field| field.key() == key)
}

/// Run the list page until it navigates somewhere; `None` means quit
async fn list_page(book: &ContactBook) -> Option<Route> {
    let mut list = book.contact_list();
    if let Err(err) = list.activate().await {
        warn!("contact list unavailable: {}", err);
    }

    loop {
        print_list(&list);
        let line = prompt("list")?;
        let mut parts = line.splitn(2, ' ');
        let command = parts.next().unwrap_or_default();
        let row = parts
            .next()
            .and_then(|n| n.trim().parse::<usize>().ok())
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| list.rows().get(i))
            .map(|contact| contact.id.clone());

        match (command, row) {
            ("add", _) => return Some(list.add_route()),
            ("edit", Some(id)) => return Some(list.edit(&id)),
            ("delete", Some(id)) => {
                if let DeleteOutcome::Failed(err) = list.delete(&id, &ask).await {
                    warn!("contact {} was not deleted: {}", id, err);
                }
            }
            ("refresh", _) => return Some(Route::ContactList),
            ("quit", _) => return None,
            _ => println!("unknown command or row"),
        }
    }
}

/// Run the form page until it navigates somewhere; `None` means quit
async fn form_page(book: &ContactBook, mode: FormMode) -> Option<Route> {
    let mut form = book.contact_form(mode);
    if let Err(err) = form.activate().await {
        warn!("contact could not be loaded: {}", err);
    }

    loop {
        print_form(&form);
        let line = prompt("form")?;
        let mut parts = line.splitn(3, ' ');
        match parts.next().unwrap_or_default() {
            "set" => match parts.next().and_then(parse_field) {
                Some(field) => form.set_field(field, parts.next().unwrap_or_default()),
                None => println!("fields: name, fullName, email, phone"),
            },
            "submit" => match form.submit().await {
                SubmitOutcome::Saved(route) => return Some(route),
                SubmitOutcome::Invalid(_) => {}
                SubmitOutcome::Failed(err) => warn!("contact was not saved: {}", err),
            },
            "cancel" => return Some(form.cancel()),
            _ => println!("unknown command"),
        }
    }
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    pretty_env_logger::init();

    let book = ContactBook::from_env()?;
    println!(
        "Contact book on project {} (collection '{}')",
        book.config().project_id,
        book.options().collection
    );

    let mut route = Some(Route::ContactList);
    while let Some(current) = route {
        route = match current.form_mode() {
            None => list_page(&book).await,
            Some(mode) => form_page(&book, mode).await,
        };
    }

    Ok(())
}
