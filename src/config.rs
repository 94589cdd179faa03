//! Command line surface of the launch sequencer.

use clap::Parser;
use std::net::{IpAddr, Ipv4Addr};

/// Connects to a kRPC server and flies the simple launch program on the active vessel.
#[derive(Parser, Debug)]
#[command(name = "launch-control", version, about)]
pub(crate) struct LaunchArgs {
    /// Address of the kRPC server.
    #[arg(long, env = "LAUNCH_TARGET", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub(crate) target: IpAddr,

    /// RPC port of the kRPC server, the stream port is the next one.
    #[arg(long, env = "LAUNCH_PORT", default_value_t = 50000)]
    pub(crate) port: u16,

    /// Countdown length in seconds.
    #[arg(long, env = "LAUNCH_COUNTDOWN", default_value_t = 10)]
    pub(crate) countdown: u32,

    /// Name announced to the server.
    #[arg(long, default_value = "LaunchProgram")]
    pub(crate) client_name: String,

    /// Only write to the console, skip the in-game status panel.
    #[arg(long)]
    pub(crate) no_ui: bool,
}

#[cfg(test)]
mod tests {
    use super::LaunchArgs;
    use clap::Parser;
    use std::net::{IpAddr, Ipv4Addr};

    #[test]
    fn test_explicit_arguments() {
        let args = LaunchArgs::try_parse_from([
            "launch-control",
            "--target",
            "10.0.0.7",
            "--port",
            "50010",
            "--countdown",
            "0",
            "--client-name",
            "Pad39",
            "--no-ui",
        ])
        .unwrap();

        assert_eq!(args.target, IpAddr::V4(Ipv4Addr::new(10, 0, 0, 7)));
        assert_eq!(args.port, 50010);
        assert_eq!(args.countdown, 0);
        assert_eq!(args.client_name, "Pad39");
        assert!(args.no_ui);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(LaunchArgs::try_parse_from(["launch-control", "--target", "localhost"]).is_err());
        assert!(LaunchArgs::try_parse_from(["launch-control", "--port", "70000"]).is_err());
        assert!(LaunchArgs::try_parse_from(["launch-control", "--countdown", "-1"]).is_err());
    }

    #[test]
    fn test_command_definition() { <LaunchArgs as clap::CommandFactory>::command().debug_assert(); }
}
