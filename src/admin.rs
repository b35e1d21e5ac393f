//! One-shot maintenance tools for the Specialistly database.
//!
//! Each subcommand connects, performs a single corrective action, prints the
//! affected-row count for operator confirmation, and exits. These tools
//! assume they run exclusively (no concurrent writers); they are not
//! designed for concurrent safety. Zero matching rows is reported, not
//! treated as a failure; connection errors exit non-zero with the message
//! on the console.

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;
use specialistly_db::repositories::slot;
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "specialistly-admin", version, about = "Maintenance tools for the Specialistly database")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Reset a single booked slot back to available
    ResetSlot {
        /// Slot id
        #[arg(long)]
        id: Uuid,
    },
    /// Reset every slot booked by a customer (customer removal)
    ResetCustomer {
        /// Customer email
        #[arg(long)]
        email: String,
    },
    /// Re-home all slots of a specialist to a new identity
    ReassignSlots {
        /// Current specialist email
        #[arg(long)]
        from_email: String,
        /// New specialist email
        #[arg(long)]
        to_email: String,
        /// New specialist display name
        #[arg(long)]
        to_name: String,
    },
    /// Delete slots: all of them, or one specialist's
    ClearSlots {
        /// Limit deletion to this specialist's slots
        #[arg(long)]
        specialist_email: Option<String>,
    },
    /// Report slot totals per status
    CountSlots {
        /// Limit the count to this specialist's slots
        #[arg(long)]
        specialist_email: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let cli = Cli::parse();

    // The connection string comes from the environment only
    let database_url = std::env::var("DATABASE_URL")
        .wrap_err("DATABASE_URL environment variable must be set")?;

    println!("Connecting to database...");
    let pool = specialistly_db::create_pool(&database_url).await?;

    match cli.command {
        Command::ResetSlot { id } => {
            match slot::reset_slot(&pool, id).await? {
                Some(_) => println!("Slot {} reset to available.", id),
                None => println!("Slot {} not found or not booked; nothing to do.", id),
            }
        }
        Command::ResetCustomer { email } => {
            let cleared = slot::reset_slots_by_customer(&pool, &email).await?;
            println!("Reset {} slot(s) booked by {}.", cleared, email);
        }
        Command::ReassignSlots {
            from_email,
            to_email,
            to_name,
        } => {
            let modified =
                slot::reassign_specialist_slots(&pool, &from_email, &to_email, &to_name).await?;
            println!(
                "Reassigned {} slot(s) from {} to {} ({}).",
                modified, from_email, to_email, to_name
            );
        }
        Command::ClearSlots { specialist_email } => {
            let deleted = match &specialist_email {
                Some(email) => slot::delete_slots_by_specialist(&pool, email).await?,
                None => slot::delete_all_slots(&pool).await?,
            };
            println!("Deleted {} slot(s).", deleted);
        }
        Command::CountSlots { specialist_email } => {
            let counts = slot::count_slots(&pool, specialist_email.as_deref()).await?;
            println!(
                "Slots: {} total, {} available, {} booked.",
                counts.total, counts.available, counts.booked
            );
        }
    }

    Ok(())
}
