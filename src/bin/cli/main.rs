use clap::{Parser, Subcommand};

use rolodex::contacts::models::is_valid_phone_number;
use rolodex::{Address, Contact, ContactService, HttpContactSource, NewContact, Phone};

#[derive(Parser)]
#[command(name = "rolodex-cli", about = "Contact book CLI", version)]
struct Cli {
    /// URL of the contact list JSON resource
    #[arg(long, global = true, default_value = "http://localhost:8080/MOCK_DATA.json")]
    url: String,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// List all contacts
    List,

    /// Show a single contact
    Show {
        /// Contact id
        id: String,
    },

    /// List the distinct address states
    States,

    /// Add a new contact
    Add {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        /// Phone category: home, mobile, office
        #[arg(long, default_value = "home")]
        phone_type: String,
        /// Phone number formatted as XXX-XXX-XXXX
        #[arg(long)]
        phone_number: String,
        #[arg(long)]
        street: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        state: String,
        #[arg(long)]
        zip: String,
    },
}

fn print_contact(contact: &Contact, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(contact)?),
        OutputFormat::Plain => {
            println!(
                "{}  {} {}  {}  {} ({})  {}, {}, {} {}",
                contact.id,
                contact.first_name,
                contact.last_name,
                contact.email,
                contact.phone.phone_number,
                contact.phone.kind,
                contact.address.street,
                contact.address.city,
                contact.address.state,
                contact.address.zip,
            );
        }
    }
    Ok(())
}

async fn loaded_service(url: &str) -> anyhow::Result<ContactService> {
    let source = HttpContactSource::new(url)?;
    let mut service = ContactService::new(Box::new(source));
    service.load().await;
    if !service.ready() {
        anyhow::bail!("could not load contacts from {}", url);
    }
    Ok(service)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::List => {
            let service = loaded_service(&cli.url).await?;
            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(service.contacts())?)
                }
                OutputFormat::Plain => {
                    for contact in service.contacts() {
                        print_contact(contact, &cli.format)?;
                    }
                }
            }
        }
        Command::Show { id } => {
            let service = loaded_service(&cli.url).await?;
            match service.get_contact(&id) {
                Some(contact) => print_contact(contact, &cli.format)?,
                None => {
                    eprintln!("Contact not found: {}", id);
                    std::process::exit(1);
                }
            }
        }
        Command::States => {
            let service = loaded_service(&cli.url).await?;
            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&service.states())?)
                }
                OutputFormat::Plain => {
                    for state in service.states() {
                        println!("{}", state);
                    }
                }
            }
        }
        Command::Add {
            first_name,
            last_name,
            email,
            phone_type,
            phone_number,
            street,
            city,
            state,
            zip,
        } => {
            if !is_valid_phone_number(&phone_number) {
                anyhow::bail!("phone number must be formatted as XXX-XXX-XXXX");
            }

            let mut service = loaded_service(&cli.url).await?;
            let created = service
                .create_contact(NewContact {
                    first_name,
                    last_name,
                    email,
                    phone: Phone {
                        kind: phone_type,
                        phone_number,
                    },
                    address: Address {
                        street,
                        city,
                        state,
                        zip,
                    },
                })
                .await?;
            print_contact(&created, &cli.format)?;
        }
    }

    Ok(())
}
