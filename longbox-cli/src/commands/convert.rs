use std::fs;
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use super::sidecar_kind;
use crate::CliError;

/// Read one sidecar format and write another.
pub(crate) fn run_convert(input: &Path, output: &Path, force: bool) -> Result<(), CliError> {
    let from = sidecar_kind(input)?;
    let to = sidecar_kind(output)?;
    if output.exists() && !force {
        return Err(CliError::other(format!(
            "{} already exists (use --force to overwrite)",
            output.display()
        )));
    }

    let metadata = from.adapter().parse(&fs::read(input)?)?;
    fs::write(output, to.adapter().serialize(&metadata)?)?;

    log::info!(
        "{} {} {} {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        from.file_name(),
        "->".if_supports_color(Stdout, |t| t.dimmed()),
        output.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
