//! instapick - Fetch and save a random image from a public Instagram account

// Lints {{{

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    future_incompatible,
    rustdoc::all,
    rustdoc::missing_crate_level_docs,
    missing_docs,
    unreachable_pub,
    unsafe_code,
    unused,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    variant_size_differences,
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::clone_on_ref_ptr,
    clippy::exit,
    clippy::filetype_is_file,
    clippy::float_cmp_const,
    clippy::lossy_float_literal,
    clippy::mem_forget,
    clippy::panic,
    clippy::pattern_type_mismatch,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::verbose_file_reads,
    clippy::dbg_macro,
    clippy::let_underscore_must_use,
    clippy::todo,
    clippy::unwrap_used,
    clippy::use_debug
)]

// }}}

use clap::Parser;
use eyre::{Result, WrapErr};
use instapick::{fs, termio, Account, Client, Profile};
use std::path::PathBuf;

fn main() -> Result<()> {
    let opts = Opts::parse();
    let client = Client::new();

    println!("Retrieving random image from Instagram account {}", opts.account);

    // Fetch the page document and extract the timeline media.
    let profile = Profile::new(&client, &opts.account)
        .with_context(|| format!("get profile of {}", opts.account))?;

    // Pick one media uniformly at random.
    let mut rng = rand::thread_rng();
    let media = profile.pick_random(&mut rng).context("select media")?;

    // Download and decode the image behind its display URL.
    let photo = media
        .fetch(&client)
        .with_context(|| format!("fetch image for {}", opts.account))?;

    // Save it where the user asked and tell them where to look.
    fs::mkdir_p(&opts.output).context("create output directory")?;
    let target = [opts.output.as_path(), photo.filename().as_path()]
        .into_iter()
        .collect::<PathBuf>();
    if target.is_file() {
        termio::print_warn(&format!("overwriting {}", target.display()));
    }
    let path = photo.save_at(&opts.output).context("save image")?;
    termio::print_ok(&format!(
        "saved {} ({}x{})",
        path.display(),
        photo.width(),
        photo.height()
    ));

    Ok(())
}

/// CLI options.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Opts {
    /// Instagram account handle.
    account: Account,

    /// Path to the output directory.
    #[clap(short, long, default_value = ".")]
    output: PathBuf,
}
