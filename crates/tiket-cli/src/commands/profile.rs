use anyhow::Result;
use clap::Subcommand;

use tiket_client::TicketApi;
use tiket_core::user::{ProfileUpdate, validate_password_change};

use crate::render;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Change your display name and username
    Update {
        #[arg(long)]
        name: String,
        #[arg(long)]
        username: String,
    },
    /// Change your password
    Password {
        current: String,
        new: String,
        confirm: String,
    },
}

pub async fn run(api: &TicketApi, action: ProfileAction) -> Result<()> {
    match action {
        ProfileAction::Update { name, username } => {
            let update = ProfileUpdate { name, username };
            let user = render::unwrap_outcome(api.update_profile(&update).await)?;
            println!("✅ Profile updated: {} ({})", user.username, user.name);
        }
        ProfileAction::Password {
            current,
            new,
            confirm,
        } => {
            validate_password_change(&new, &confirm)?;
            render::unwrap_outcome(api.update_password(&current, &new).await)?;
            println!("✅ Password changed.");
        }
    }
    Ok(())
}
