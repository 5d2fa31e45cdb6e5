use anyhow::bail;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Builds the config from process arguments.
    ///
    /// Accepts one optional positional argument, the listen port
    /// (default 8080). Anything outside 1-65535 is a fatal error.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let _program = args.next();

        let port = match args.next() {
            Some(raw) => match raw.parse::<u16>() {
                Ok(p) if p > 0 => p,
                _ => bail!("invalid port: {}", raw),
            },
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: "0.0.0.0".to_string(),
            port,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
