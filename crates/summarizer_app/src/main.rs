mod platform;

use clap::Parser;

/// Desktop client for the document summarization backend.
#[derive(Parser, Debug, Clone)]
#[command(name = "summarizer")]
pub struct ClientArgs {
    /// Backend base address.
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    pub server_url: String,
}

fn main() -> anyhow::Result<()> {
    let args = ClientArgs::parse();
    platform::run_app(args)
}

#[cfg(test)]
mod tests {
    use super::ClientArgs;
    use clap::Parser;

    #[test]
    fn server_url_defaults_to_local_backend() {
        let args = ClientArgs::try_parse_from(["summarizer"]).expect("parse");
        assert_eq!(args.server_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn server_url_is_overridable() {
        let args =
            ClientArgs::try_parse_from(["summarizer", "--server-url", "http://10.0.0.2:9000"])
                .expect("parse");
        assert_eq!(args.server_url, "http://10.0.0.2:9000");
    }
}
