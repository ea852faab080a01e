use std::error::Error;

// Embeds the toolchain identity reported by platform detection.
fn main() -> Result<(), Box<dyn Error>> {
    vergen_gitcl::Emitter::default()
        .add_instructions(
            &vergen_gitcl::CargoBuilder::default()
                .target_triple(true)
                .build()?,
        )?
        .add_instructions(
            &vergen_gitcl::RustcBuilder::default()
                .semver(true)
                .host_triple(true)
                .build()?,
        )?
        .emit()?;
    Ok(())
}
