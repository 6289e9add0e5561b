//! Ctrl-C handling.
//!
//! The first Ctrl-C sets the shared [`CancelFlag`]; the import stops at its
//! next checkpoint or prompt. A second one exits immediately.

use longbox_lib::CancelFlag;

use crate::CliError;

pub(crate) fn install(cancel: CancelFlag) -> Result<(), CliError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::runtime(format!("Failed to create signal runtime: {e}")))?;

    std::thread::Builder::new()
        .name("longbox-signal".into())
        .spawn(move || {
            runtime.block_on(async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    log::debug!("Unable to listen for Ctrl-C: {e}");
                    return;
                }
                log::warn!("Interrupt received, stopping after the current step (Ctrl-C again to quit)");
                cancel.cancel();

                if tokio::signal::ctrl_c().await.is_ok() {
                    std::process::exit(130);
                }
            });
        })?;
    Ok(())
}
