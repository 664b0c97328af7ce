use std::sync::Arc;

use anyhow::Result;
use clap::Subcommand;

use tiket_app::UserAdmin;
use tiket_client::TicketApi;
use tiket_core::user::{NewUser, Role, UserUpdate};

use crate::render;

#[derive(Subcommand)]
pub enum UserAction {
    /// List all user accounts
    List,
    /// Create a user account
    Add {
        username: String,
        password: String,
        /// Display name (defaults to the username)
        #[arg(long)]
        name: Option<String>,
        #[arg(long, default_value = "user")]
        role: Role,
    },
    /// Update a user account
    Edit {
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "user")]
        role: Role,
        /// Required when also setting a new password
        #[arg(long)]
        current_password: Option<String>,
        #[arg(long)]
        new_password: Option<String>,
    },
    /// Delete a user account
    Delete { id: i64 },
}

pub async fn run(api: Arc<TicketApi>, action: UserAction) -> Result<()> {
    let mut admin = UserAdmin::new(api);
    match action {
        UserAction::List => {
            render::unwrap_outcome(admin.refresh().await)?;
        }
        UserAction::Add {
            username,
            password,
            name,
            role,
        } => {
            let user = NewUser {
                name: name.unwrap_or_else(|| username.clone()),
                username,
                password,
                role,
            };
            render::unwrap_outcome(admin.add_user(&user).await)?;
            println!("✅ User created.");
        }
        UserAction::Edit {
            id,
            name,
            role,
            current_password,
            new_password,
        } => {
            let update = UserUpdate {
                name,
                role,
                current_password,
                new_password,
            };
            render::unwrap_outcome(admin.edit_user(id, &update).await)?;
            println!("✅ User updated.");
        }
        UserAction::Delete { id } => {
            render::unwrap_outcome(admin.delete_user(id).await)?;
            println!("✅ User deleted.");
        }
    }

    render::print_user_table(admin.users());
    Ok(())
}
