//! Post-build publisher for the firmware hex image.
//!
//! Hooked onto `$BUILD_DIR/${PROGNAME}.hex`: once that target is built, the
//! image is copied to `output.hex` in the current working directory so it sits
//! next to the project instead of deep inside the build tree.

use anyhow::Result;
use std::fs;
use std::io::{self, Write};

use crate::hooks::{BuildContext, PostActionRegistrar};

/// Destination of the published image, relative to the working directory.
pub const OUTPUT_HEX: &str = "output.hex";

/// Hook key of the build step that produces the hex image.
pub const HEX_TARGET: &str = "$BUILD_DIR/${PROGNAME}.hex";

/// Attach the publisher to the hex target's post-action hook.
pub fn register(registrar: &mut dyn PostActionRegistrar) {
    registrar.add_post_action(HEX_TARGET, Box::new(on_build_complete));
}

/// Copy the first build target to `output.hex`, reporting progress on stdout.
pub fn on_build_complete(ctx: &BuildContext) -> Result<()> {
    publish_to(ctx, &mut io::stdout().lock())
}

/// Same as [`on_build_complete`], with progress lines written to `out`.
///
/// I/O errors are returned as-is so callers can downcast to [`io::Error`].
pub fn publish_to<W: Write>(ctx: &BuildContext, out: &mut W) -> Result<()> {
    writeln!(out, "Copying hex output to project directory...")?;

    let source = ctx.source().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "build context has no targets")
    })?;
    fs::copy(source, OUTPUT_HEX)?;

    writeln!(out, "Done.")?;
    Ok(())
}
