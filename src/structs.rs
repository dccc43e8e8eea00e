use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the configuration file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// Write a development CA, server and client certificate, then exit.
    #[arg(long)]
    pub create_selfsigned: bool,
    #[arg(long, default_value = "certs")]
    pub selfsigned_dir: String,
    #[arg(long, default_value = "localhost")]
    pub selfsigned_domain: String,
    #[arg(long, default_value = "dashboard-client")]
    pub selfsigned_client_cn: String,
}
