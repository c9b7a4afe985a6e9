//! Auth command handlers.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use elearn::api::ApiClient;
use elearn::session::{FileSessionStore, Session, SessionStore, mask_token};

pub async fn login(client: &ApiClient, store: &dyn SessionStore, username: &str) -> Result<()> {
    if store.load().is_authenticated() {
        println!("Already logged in; the stored session will be replaced.");
    }

    print!("Password: ");
    io::stdout().flush()?;

    let mut password = String::new();
    io::stdin().lock().read_line(&mut password)?;
    let password = password.trim_end_matches(['\r', '\n']);
    if password.is_empty() {
        anyhow::bail!("Password cannot be empty");
    }

    let response = client.login(username, password).await?;
    store.save(&Session::new(
        response.access_token.clone(),
        response.user.clone(),
    ))?;

    let display_name = response
        .user
        .nama
        .clone()
        .unwrap_or_else(|| response.user.username.clone());
    println!();
    println!("✓ Logged in as {display_name} ({})", response.user.role);
    println!(
        "  Session saved to: {}",
        FileSessionStore::session_path().display()
    );
    println!("  Token: {}", mask_token(&response.access_token));

    Ok(())
}

pub fn logout(store: &dyn SessionStore) -> Result<()> {
    let had_session = store.load().is_authenticated();
    store.clear();

    if had_session {
        println!("✓ Logged out");
        println!(
            "  Session removed from: {}",
            FileSessionStore::session_path().display()
        );
    } else {
        println!("Not logged in (no session found).");
    }

    Ok(())
}

pub fn status(store: &dyn SessionStore) -> Result<()> {
    let session = store.load();
    match session.token() {
        Some(token) => {
            let user = &session.user;
            let name = user.nama.as_deref().unwrap_or(&user.username);
            println!("Logged in as {name} ({})", user.role);
            if !user.email.is_empty() {
                println!("  Email: {}", user.email);
            }
            if let Some(nip) = &user.nip {
                println!("  NIP: {nip}");
            }
            println!("  Token: {}", mask_token(token));
        }
        None => println!("Not logged in."),
    }

    Ok(())
}
