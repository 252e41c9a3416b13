use std::env;

/// Variables listed by `socify_server --help`. Key secrets are not on this list.
const VISIBLE_ENVS: [&str; 8] = [
    "RUST_LOG",
    "SOCIFY_HOST",
    "SOCIFY_PORT",
    "SOCIFY_DATABASE_URL",
    "SOCIFY_RAZORPAY_KEY_ID",
    "SOCIFY_RAZORPAY_API_URL",
    "SOCIFY_MAX_DB_CONNECTIONS",
    "SOCIFY_RUN_MIGRATIONS",
];

/// The server takes no arguments. If any are given, print the usage notes and the current configuration, and return
/// `true` so that `main` exits without starting the server.
pub fn handle_command_line_args() -> bool {
    if env::args().len() <= 1 {
        return false;
    }
    println!("\n{}\n", include_str!("./cli-help.txt"));
    println!("Current configuration (secrets not shown):");
    for name in VISIBLE_ENVS {
        let value = env::var_os(name)
            .map(|v| v.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Not set".to_string());
        println!("  {name:<35} {value}");
    }
    true
}
