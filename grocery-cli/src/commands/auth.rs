//! Auth commands - log in and hash passwords

use anyhow::Result;
use colored::Colorize;
use dialoguer::Password;
use grocery_core::services::hash_password;

use super::get_context;
use crate::output;

/// Use the given password or ask for it without echo
fn read_password(password: Option<String>, prompt: &str) -> Result<String> {
    match password {
        Some(p) => Ok(p),
        None => Ok(Password::new().with_prompt(prompt).interact()?),
    }
}

pub fn run_login(email: &str, password: Option<String>, json: bool) -> Result<()> {
    let password = read_password(password, "Password")?;
    let ctx = get_context()?;

    match ctx.auth_service.login(email, &password)? {
        Some(client) => {
            if json {
                // Never echo the stored hash
                return output::json(&serde_json::json!({
                    "id": client.model.id,
                    "name": client.model.name,
                    "email_address": client.email_address,
                    "role": client.role,
                }));
            }
            output::success(&format!("Logged in as {}", client.model.name));
            println!("Role: {}", client.role.to_string().bold());
            Ok(())
        }
        None => anyhow::bail!("Invalid email address or password"),
    }
}

pub fn run_hash(password: Option<String>) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Repeat password", "Passwords do not match")
            .interact()?,
    };

    println!("{}", hash_password(&password));
    Ok(())
}
