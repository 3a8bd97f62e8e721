//! Interactive demo consumer.
//!
//! Drives the session core end to end from a terminal, standing in for
//! the product UI: hydrate a persisted session, log in and out against
//! the seeded directory, and show what the route gate would do for each
//! navigation. State lives under `FINANCEAI_STATE_DIR` (default
//! `.financeai`), so sessions survive restarts.

use std::io::{BufRead, Write};

use financeai_session::{
    Directory, FileStore, Requirement, Role, RouteDecision, SessionConfig, SessionManager, decide,
};

/// Demo route table, mirroring the product's page layout.
fn requirement_for(path: &str) -> Option<Requirement> {
    match path {
        "/" | "/login" => Some(Requirement::Public),
        "/dashboard" => Some(Requirement::AuthenticatedRole(Role::User)),
        "/admin" => Some(Requirement::AuthenticatedRole(Role::Admin)),
        "/settings" => Some(Requirement::AuthenticatedAny),
        _ => None,
    }
}

fn print_help() {
    println!("commands:");
    println!("  login <email> <password>");
    println!("  logout");
    println!("  whoami");
    println!("  goto <path>        (/, /login, /dashboard, /admin, /settings)");
    println!("  quit");
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let state_dir = std::env::var("FINANCEAI_STATE_DIR").unwrap_or_else(|_| ".financeai".into());
    let session = SessionManager::new(
        Directory::seeded(),
        FileStore::new(&state_dir),
        SessionConfig::from_env(),
    );
    session.hydrate();

    match session.user() {
        Some(user) => println!("restored session: {} ({})", user.name, user.role),
        None => println!("no stored session; try `login admin@financeai.com admin123`"),
    }
    print_help();

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts.as_slice() {
            ["login", email, password] => match session.login(email, password).await {
                Ok(user) => println!("welcome, {} - home is {}", user.name, user.role.home_path()),
                Err(e) => println!("login failed: {e}"),
            },
            ["logout"] => {
                session.logout();
                println!("logged out");
            }
            ["whoami"] => match session.user() {
                Some(user) => println!("{} <{}> role={}", user.name, user.email, user.role),
                None => println!("not authenticated"),
            },
            ["goto", path] => match requirement_for(path) {
                Some(requirement) => match decide(&session.snapshot(), requirement) {
                    RouteDecision::Render => println!("{path}: render"),
                    RouteDecision::Loading => println!("{path}: loading placeholder"),
                    decision => println!(
                        "{path}: redirect to {}",
                        decision.target_path().unwrap_or("/")
                    ),
                },
                None => println!("unknown route: {path}"),
            },
            ["quit" | "exit"] => break,
            [] => {}
            _ => print_help(),
        }
    }
}
