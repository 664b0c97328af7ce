use anyhow::Result;
use colored::Colorize;

use tiket_client::TicketApi;

pub async fn login(api: &TicketApi, username: &str, password: &str) -> Result<()> {
    let session = api.login(username, password).await?;
    println!(
        "✅ Logged in as {} ({})",
        session.user.username.bold(),
        session.user.role
    );
    Ok(())
}

pub fn logout(api: &TicketApi) -> Result<()> {
    api.logout()?;
    println!("Logged out.");
    Ok(())
}

pub fn whoami(api: &TicketApi) -> Result<()> {
    match api.current_session() {
        Some(session) => {
            let user = &session.user;
            println!("{} ({})", user.username.bold(), user.role);
            if !user.name.is_empty() {
                println!("Name: {}", user.name);
            }
        }
        None => println!("Not logged in. Run `tiket login <username> <password>`."),
    }
    Ok(())
}
