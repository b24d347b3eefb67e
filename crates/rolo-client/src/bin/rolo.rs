//! rolo CLI. Drives a `Session` over the HTTP contact store and renders
//! the view-model as terminal tables.

use clap::{Parser, Subcommand};
use comfy_table::Table;
use url::Url;

use rolo_client::api::DEFAULT_BASE_URL;
use rolo_client::ContactApi;
use rolo_core::{parse_contact_id, Contact, ContactId, FormValue, Session, StoreError};
use rolo_tags::display_tag_list;

/// The user-facing alert for any abandoned operation.
const FAILURE_MESSAGE: &str = "Problem processing your request. Please try again.";

#[derive(Parser)]
#[command(name = "rolo", version, about = "Contact manager client")]
struct Cli {
    /// Backend base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all contacts
    List,
    /// Show a single contact
    Show { id: String },
    /// Add a contact
    Add {
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone_number: Option<String>,
        /// Tag to attach; repeatable
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Edit a contact; omitted flags keep their current values
    Edit {
        id: String,
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone_number: Option<String>,
        /// Replacement tag set; repeatable. Omit to keep the current tags
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Delete a contact
    Rm { id: String },
    /// List contacts carrying an exact tag
    Tag { name: String },
    /// Search contacts by name substring
    Search { text: String },
    /// List all known tags
    Tags,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let base_url = Url::parse(&cli.base_url)?;
    let mut session = Session::new(ContactApi::new(base_url));

    if let Err(e) = run(&mut session, cli.command).await {
        tracing::warn!("request failed: {e}");
        eprintln!("{FAILURE_MESSAGE}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run(session: &mut Session<ContactApi>, command: Command) -> Result<(), StoreError> {
    session.load().await?;

    match command {
        Command::List => print_list(session),
        Command::Show { id } => {
            let id = coerce_id(&id);
            match session.contacts().iter().find(|c| c.id == id) {
                Some(contact) => println!("{}", contact_table(&[contact])),
                None => return Err(StoreError::NotFound(id)),
            }
        }
        Command::Add {
            full_name,
            email,
            phone_number,
            tags,
        } => {
            session.open_add_form();
            let pairs = form_pairs(&full_name, email.as_deref(), phone_number.as_deref(), &tags);
            let contact = session.submit(&pairs).await?;
            println!("Added {} (id {})", contact.full_name, contact.id);
        }
        Command::Edit {
            id,
            full_name,
            email,
            phone_number,
            tags,
        } => {
            let id = coerce_id(&id);
            let current = session.open_edit_form(id).await?;
            let tags = if tags.is_empty() {
                current.tag_list()
            } else {
                tags
            };
            let pairs = form_pairs(
                full_name.as_deref().unwrap_or(&current.full_name),
                email.as_deref().or(current.email.as_deref()),
                phone_number.as_deref().or(current.phone_number.as_deref()),
                &tags,
            );
            let contact = session.submit(&pairs).await?;
            println!("Updated {} (id {})", contact.full_name, contact.id);
        }
        Command::Rm { id } => {
            let removed = session.delete(coerce_id(&id)).await?;
            println!("Deleted contact {removed}");
        }
        Command::Tag { name } => {
            session.filter_by_tag(&name);
            print_list(session);
        }
        Command::Search { text } => {
            session.search(&text).await?;
            print_list(session);
        }
        Command::Tags => {
            let mut table = Table::new();
            table.set_header(["Tag", "Contacts"]);
            for tag in session.index().tags() {
                let count = session.index().lookup(tag).map_or(0, |ids| ids.len());
                table.add_row([tag.to_string(), count.to_string()]);
            }
            println!("{table}");
        }
    }

    Ok(())
}

/// Coerce an id argument to an integer, as every id-taking route requires.
fn coerce_id(raw: &str) -> ContactId {
    match parse_contact_id(raw) {
        Some(id) => id,
        None => {
            eprintln!("invalid contact id: {raw}");
            std::process::exit(2);
        }
    }
}

/// Build submit pairs the way a form would: text inputs for the enumerated
/// fields, one checked control per tag.
fn form_pairs(
    full_name: &str,
    email: Option<&str>,
    phone_number: Option<&str>,
    tags: &[String],
) -> Vec<(String, FormValue)> {
    let mut pairs = vec![(
        "full_name".to_string(),
        FormValue::Text(full_name.to_string()),
    )];
    if let Some(email) = email {
        pairs.push(("email".to_string(), FormValue::Text(email.to_string())));
    }
    if let Some(phone) = phone_number {
        pairs.push(("phone_number".to_string(), FormValue::Text(phone.to_string())));
    }
    for tag in tags {
        pairs.push((tag.clone(), FormValue::Checked));
    }
    pairs
}

fn print_list(session: &Session<ContactApi>) {
    let visible = session.visible_contacts();
    println!("{}", session.header());
    if !visible.is_empty() {
        println!("{}", contact_table(&visible));
    }
}

fn contact_table(contacts: &[&Contact]) -> Table {
    let mut table = Table::new();
    table.set_header(["ID", "Name", "Email", "Phone", "Tags"]);
    for contact in contacts {
        table.add_row([
            contact.id.to_string(),
            contact.full_name.clone(),
            contact.email.clone().unwrap_or_default(),
            contact.phone_number.clone().unwrap_or_default(),
            display_tag_list(&contact.tags),
        ]);
    }
    table
}
