use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Sign in with email and password
    SignIn {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Register and verify the emailed one-time code
    SignUp {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Display name
        #[arg(long)]
        name: String,
        /// One-time code (the mock backend accepts 123456)
        #[arg(long)]
        otp: String,
        /// Request a new code before verifying
        #[arg(long)]
        resend: bool,
    },

    /// Sign in with Google
    Google,

    /// Sign out and forget the saved identity
    SignOut,

    /// Show the current session
    Whoami,

    /// Look up a translation key
    Translate { key: String },

    /// Resolve a path the way the storefront router does
    Visit { path: String },
}
