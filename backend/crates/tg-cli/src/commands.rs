use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Mint an access/refresh pair for a username (no user lookup)
    Issue { username: String },

    /// Validate a token and print the username it carries
    Inspect {
        token: String,

        /// Validate as a refresh token instead of an access token
        #[arg(long)]
        refresh: bool,
    },

    /// Create a user in the configured database
    AddUser {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        email: String,
    },
}
