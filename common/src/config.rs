use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Which connectivity provider to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// NetworkManager if the system bus answers, sysfs otherwise.
    #[default]
    Auto,
    NetworkManager,
    Sysfs,
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Backend::Auto),
            "nm" | "networkmanager" => Ok(Backend::NetworkManager),
            "sysfs" => Ok(Backend::Sysfs),
            _ => Err(format!("unknown backend: {s} (expected auto, nm or sysfs)")),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Backend::Auto => "auto",
            Backend::NetworkManager => "nm",
            Backend::Sysfs => "sysfs",
        };
        f.write_str(name)
    }
}

pub struct Config {
    pub backend: Backend,
    /// 0 prints everything, 1 drops headers, 2 prints bare values.
    pub quiet: u8,
    /// Root of the network class tree, normally `/sys/class/net`.
    pub sysfs_root: PathBuf,
    /// Normally `/proc`. Only `net/route` is read from it.
    pub procfs_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: Backend::Auto,
            quiet: 0,
            sysfs_root: PathBuf::from("/sys/class/net"),
            procfs_root: PathBuf::from("/proc"),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_parses_case_insensitively() {
        assert_eq!("AUTO".parse::<Backend>(), Ok(Backend::Auto));
        assert_eq!("nm".parse::<Backend>(), Ok(Backend::NetworkManager));
        assert_eq!("NetworkManager".parse::<Backend>(), Ok(Backend::NetworkManager));
        assert_eq!("sysfs".parse::<Backend>(), Ok(Backend::Sysfs));
    }

    #[test]
    fn backend_rejects_unknown_names() {
        let err = "iwd".parse::<Backend>().unwrap_err();
        assert!(err.contains("iwd"));
    }

    #[test]
    fn backend_display_parses_back() {
        for backend in [Backend::Auto, Backend::NetworkManager, Backend::Sysfs] {
            assert_eq!(backend.to_string().parse::<Backend>(), Ok(backend));
        }
    }

    #[test]
    fn default_config_points_at_real_roots() {
        let cfg = Config::default();
        assert_eq!(cfg.backend, Backend::Auto);
        assert_eq!(cfg.sysfs_root, PathBuf::from("/sys/class/net"));
        assert_eq!(cfg.procfs_root, PathBuf::from("/proc"));
    }
}
