use std::{env, env::VarError};

/// There's no real CLI for the server, so just do quick 'n dirty
pub fn handle_command_line_args() -> bool {
    let has_cli_args = env::args().count() > 1;
    if has_cli_args {
        display_readme();
        display_envs();
    }
    has_cli_args
}

fn display_readme() {
    const README: &str = include_str!("./cli-help.txt");
    println!("\n{README}\n");
}

fn display_envs() {
    // NPS_EMAIL_PASS and NPS_JWT_SECRET are left out on purpose
    const DISPLAY_ENVS: [&str; 11] = [
        "RUST_LOG",
        "NPS_HOST",
        "NPS_PORT",
        "NPS_DATABASE_URL",
        "NPS_AUTO_MIGRATE",
        "NPS_NOTIFICATION_TIMEOUT",
        "NPS_EMAIL_HOST",
        "NPS_EMAIL_PORT",
        "NPS_EMAIL_USER",
        "NPS_EMAIL_FROM_NAME",
        "NPS_JWT_LIFETIME",
    ];

    println!("Current environment values (EXCLUDING variables that contain secrets):");
    DISPLAY_ENVS.iter().for_each(|&name| {
        let val = match env::var(name) {
            Ok(s) => s,
            Err(VarError::NotPresent) => "Not set".into(),
            Err(VarError::NotUnicode(s)) => format!("Invalid value: {}", s.to_string_lossy()),
        };
        println!("  {name:<35} {val:<15}");
    })
}
