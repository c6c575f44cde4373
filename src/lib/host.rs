use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// The application a plugin is loaded into.
///
/// The host decides where the log file lands (under the documents folder for
/// script-extender hosts) and what the init record announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Host {
    /// Not running inside a game; logs go to the working directory.
    Standalone,
    Fallout4,
    SkyrimSE,
    SkyrimVR,
}

impl Host {
    /// Host selected by the `f4se` / `skse` cargo features.
    pub const fn from_build() -> Self {
        if cfg!(feature = "f4se") {
            Host::Fallout4
        } else if cfg!(feature = "skse") {
            Host::SkyrimSE
        } else {
            Host::Standalone
        }
    }

    /// Skyrim ships SE and VR from the same plugin build, so the variant is a
    /// runtime decision.
    pub const fn skyrim(is_vr: bool) -> Self {
        if is_vr { Host::SkyrimVR } else { Host::SkyrimSE }
    }

    /// Path below the documents folder where the script extender keeps its logs.
    pub fn subpath(self) -> PathBuf {
        let parts: &[&str] = match self {
            Host::Standalone => &[],
            Host::Fallout4 => &["My Games", "Fallout4", "F4SE"],
            Host::SkyrimSE => &["My Games", "Skyrim Special Edition", "SKSE"],
            Host::SkyrimVR => &["My Games", "Skyrim VR", "SKSE"],
        };
        parts.iter().collect()
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Host::Standalone => "DKUtil",
            Host::Fallout4 => "Fallout 4",
            Host::SkyrimSE => "Skyrim Special Edition",
            Host::SkyrimVR => "Skyrim VR",
        }
    }

    /// Whether the log directory is rooted at the platform documents folder.
    pub const fn uses_documents(self) -> bool {
        !matches!(self, Host::Standalone)
    }
}

impl Default for Host {
    fn default() -> Self {
        Host::from_build()
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Host {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standalone" | "none" => Ok(Host::Standalone),
            "fallout4" | "f4" | "f4se" => Ok(Host::Fallout4),
            "skyrim" | "skyrim-se" | "sse" | "skse" => Ok(Host::SkyrimSE),
            "skyrim-vr" | "vr" => Ok(Host::SkyrimVR),
            other => Err(anyhow::anyhow!("unknown host: {other}")),
        }
    }
}
