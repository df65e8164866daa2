//! `px version` -- version and platform info.

use anyhow::Result;

use crate::cli::GlobalArgs;
use crate::output::output_json;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build tag, overridable at compile time through `PX_BUILD` for release
/// pipelines; local builds report "dev".
const BUILD: &str = match option_env!("PX_BUILD") {
    Some(b) => b,
    None => "dev",
};

pub fn run(global: &GlobalArgs) -> Result<()> {
    let platform = format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH);

    if global.json {
        output_json(&serde_json::json!({
            "version": VERSION,
            "build": BUILD,
            "platform": platform,
        }));
    } else {
        println!("px version {VERSION} ({BUILD}) {platform}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_tag_defaults_to_dev() {
        assert!(!VERSION.is_empty());
        assert!(BUILD == "dev" || !BUILD.is_empty());
    }
}
