use std::io::{self, Write};
use std::path::PathBuf;

use reader_core::{AppViewModel, ExtractionPhase};

const RULE: &str = "----------------------------------------";

/// Outcomes of effects that the user should hear about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Saved(PathBuf),
    SaveFailed(String),
    CopyFailed(String),
}

/// Prints what changed between two views.
pub fn render(prev: &AppViewModel, next: &AppViewModel, out: &mut impl Write) -> io::Result<()> {
    if prev.status != next.status || prev.result_text != next.result_text {
        match next.status {
            ExtractionPhase::Idle => {}
            ExtractionPhase::Loading => writeln!(out, "Extracting {} ...", next.url_input)?,
            ExtractionPhase::Succeeded => {
                writeln!(out, "{RULE}")?;
                writeln!(out, "{}", next.result_text.as_deref().unwrap_or_default())?;
                writeln!(out, "{RULE}")?;
                writeln!(out, "(:copy to copy, :save to download)")?;
            }
            ExtractionPhase::Failed => writeln!(
                out,
                "Error: {}",
                next.error_message.as_deref().unwrap_or_default()
            )?,
        }
    }

    if next.copied && !prev.copied {
        writeln!(out, "Copied!")?;
    } else if prev.copied && !next.copied {
        writeln!(out, "(copy feedback cleared)")?;
    }

    if next.install_available && !prev.install_available {
        writeln!(out, "This app can be installed. Type :install to install it.")?;
    }
    if next.installed && !prev.installed {
        writeln!(out, "Installed.")?;
    }
    out.flush()
}

pub fn render_notice(notice: &Notice, out: &mut impl Write) -> io::Result<()> {
    match notice {
        Notice::Saved(path) => writeln!(out, "Saved to {}", path.display()),
        Notice::SaveFailed(reason) => writeln!(out, "Could not save: {reason}"),
        Notice::CopyFailed(reason) => writeln!(out, "Could not copy: {reason}"),
    }
}
