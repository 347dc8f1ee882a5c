use clap::Parser;

/// Process configuration, read once at startup.
///
/// Every flag can also be supplied through the environment; `--port` binds
/// to `PORT` so platform-injected ports take effect without a flag.
#[derive(Debug, Clone, Parser)]
#[command(name = "birdfeed", about = "Serve upstream user timelines as RSS feeds")]
pub struct Config {
    /// Application consumer key for the upstream API
    #[arg(long, env = "TWITTER_CONSUMER_KEY")]
    pub consumer_key: String,

    /// Application consumer secret for the upstream API
    #[arg(long, env = "TWITTER_CONSUMER_SECRET")]
    pub consumer_secret: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Username to serve a feed for (repeatable)
    #[arg(long = "usernames", env = "TWITTER_USERNAMES", value_delimiter = ',')]
    pub usernames: Vec<String>,
}

impl Config {
    /// Parse flags and environment, honoring a `.env` file in development.
    /// Exits the process with a usage error when required values are absent.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::parse()
    }
}
