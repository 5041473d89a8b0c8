use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use futures_util::future::BoxFuture;
use reader_engine::{DeferredInstallPrompt, InstallOutcome};
use reader_logging::{reader_debug, reader_error, reader_info};
use tokio::sync::oneshot;

/// Install offer for the terminal: copy the running executable into the
/// install directory once the user answers yes.
///
/// The answer arrives through a oneshot channel because stdin belongs to the
/// main loop.
pub struct TerminalInstallPrompt {
    source: PathBuf,
    target: PathBuf,
    answer: oneshot::Receiver<bool>,
    default_suppressed: bool,
}

/// Offers installation unless the executable already lives in `install_dir`.
pub fn detect_offer(
    executable: &Path,
    install_dir: &Path,
) -> Option<(TerminalInstallPrompt, oneshot::Sender<bool>)> {
    let name = executable.file_name()?;
    let target = install_dir.join(name);
    if target.exists() || executable.parent() == Some(install_dir) {
        reader_debug!("Already installed at {:?}", target);
        return None;
    }
    let (answer_tx, answer_rx) = oneshot::channel();
    let prompt = TerminalInstallPrompt {
        source: executable.to_path_buf(),
        target,
        answer: answer_rx,
        default_suppressed: false,
    };
    Some((prompt, answer_tx))
}

impl TerminalInstallPrompt {
    pub fn target(&self) -> &Path {
        &self.target
    }
}

impl DeferredInstallPrompt for TerminalInstallPrompt {
    fn suppress_default(&mut self) {
        self.default_suppressed = true;
    }

    fn prompt(self: Box<Self>) -> BoxFuture<'static, InstallOutcome> {
        let TerminalInstallPrompt {
            source,
            target,
            answer,
            default_suppressed,
        } = *self;
        reader_debug!("Install prompt shown (default suppressed: {})", default_suppressed);
        println!("Install clean-reader to {}? [y/N]", target.display());

        Box::pin(async move {
            match answer.await {
                Ok(true) => match install_executable(&source, &target) {
                    Ok(()) => {
                        reader_info!("Installed {:?} to {:?}", source, target);
                        InstallOutcome::Accepted
                    }
                    Err(err) => {
                        reader_error!("Install to {:?} failed: {}", target, err);
                        println!("Install failed: {err}");
                        InstallOutcome::Dismissed
                    }
                },
                Ok(false) | Err(_) => InstallOutcome::Dismissed,
            }
        })
    }
}

fn install_executable(source: &Path, target: &Path) -> io::Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(source, target)?;
    Ok(())
}
