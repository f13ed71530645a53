use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Mosaic: tiling layouts for workspaces of windows.
#[derive(Parser, Debug)]
#[command(name = "mosaic", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override, as a tracing directive (e.g. `mosaic=debug`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the balanced layout for a set of window ids.
    Balance {
        /// Window ids; sorted before building the tree.
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Change the open windows of a saved workspace and print the layouts
    /// the mosaic pushes in response.
    Reconcile {
        /// State file holding the windows and the workspace.
        #[arg(long)]
        state: PathBuf,

        /// Comma separated ids of the windows that are now open. Omit to
        /// close every window.
        #[arg(long, value_delimiter = ',')]
        windows: Vec<String>,

        /// Save the resulting state back to the state file.
        #[arg(long)]
        write: bool,
    },

    /// Lay out a saved workspace and print one line per tile.
    Render {
        #[arg(long)]
        state: PathBuf,

        #[arg(long, default_value_t = 1200.0)]
        width: f64,

        #[arg(long, default_value_t = 800.0)]
        height: f64,
    },
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_are_comma_separated() {
        let argv = ["mosaic", "reconcile", "--state", "s.json", "--windows", "a,b,c"];
        let args = Args::try_parse_from(argv).unwrap();
        let Command::Reconcile { windows, write, .. } = args.command else {
            panic!("expected reconcile");
        };
        assert_eq!(windows, vec!["a", "b", "c"]);
        assert!(!write);
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let argv = ["mosaic", "balance", "a", "--log-level", "mosaic=debug"];
        let args = Args::try_parse_from(argv).unwrap();
        assert_eq!(args.log_level.as_deref(), Some("mosaic=debug"));
        assert!(args.config.is_none());
    }

    #[test]
    fn balance_needs_ids() {
        assert!(Args::try_parse_from(["mosaic", "balance"]).is_err());
    }

    #[test]
    fn render_viewport_defaults() {
        let args = Args::try_parse_from(["mosaic", "render", "--state", "s.json"]).unwrap();
        let Command::Render { width, height, .. } = args.command else {
            panic!("expected render");
        };
        assert_eq!((width, height), (1200.0, 800.0));
    }
}
